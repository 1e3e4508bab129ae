//! Common regex patterns and keyword tables for Turkish bill extraction.
//!
//! Everything here is immutable static data; all patterns expect text that
//! has already gone through [`crate::text::turkish_lowercase`].

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::bill::BillCategory;

lazy_static! {
    // Amount tiers, most specific first.
    //
    // Tier 1: amount preceded by an explicit total/amount-due/debt/accrual
    // label, optionally followed by a currency mark.
    pub static ref LABELED_AMOUNT: Regex = Regex::new(
        r"(?:ödenecek\s+tutar|tahsil\s+edilecek\s+tutar|toplam\s+borç|tahakkuk\s+tutarı|tahakkuk|genel\s+toplam|toplam\s+tutar|toplam|amount\s+due)[\s:]*([0-9][0-9.,]*)\s*(?:tl|₺)?"
    ).unwrap();

    // Tier 2: bare number adjacent to a currency mark.
    pub static ref AMOUNT_NEAR_CURRENCY: Regex = Regex::new(
        r"([0-9]{1,3}(?:\.[0-9]{3})*,[0-9]{2}|[0-9]+[.,][0-9]{1,2})\s*(?:tl|₺)"
    ).unwrap();

    // Tier 3: any Turkish-formatted decimal anywhere in the text.
    pub static ref BARE_AMOUNT: Regex = Regex::new(
        r"\b([0-9]{1,3}(?:\.[0-9]{3})+,[0-9]{2}|[0-9]+,[0-9]{2})\b"
    ).unwrap();

    // Due-date label followed by the rest of the line (or the next line,
    // when OCR splits the label and the value).
    pub static ref DUE_DATE_LABEL: Regex = Regex::new(
        r"(?:son\s+[öo]deme\s+tarihi|[öo]deme\s+tarihi|vade\s+tarihi|vade|s\.ö\.t\.?|due\s+date)[\s:]*(.+?)(?:\n|$)"
    ).unwrap();

    // Numeric dates, day first: DD.MM.YYYY, DD/MM/YY and friends.
    pub static ref DATE_NUMERIC: Regex = Regex::new(
        r"\b(\d{1,2})[./\-](\d{1,2})[./\-](\d{4}|\d{2})\b"
    ).unwrap();

    // Turkish long format: "12 haziran 2025".
    pub static ref DATE_TURKISH_LONG: Regex = Regex::new(
        r"(\d{1,2})\s+(ocak|şubat|mart|nisan|mayıs|haziran|temmuz|ağustos|eylül|ekim|kasım|aralık)\s+(\d{4})"
    ).unwrap();

    // Currency marks.
    pub static ref CURRENCY_TRY: Regex = Regex::new(r"\btl\b|₺|türk\s+lirası").unwrap();
    pub static ref CURRENCY_USD: Regex = Regex::new(r"\busd\b|\$").unwrap();
    pub static ref CURRENCY_EUR: Regex = Regex::new(r"\beur\b|€").unwrap();
}

/// One known-biller keyword with its display name and category.
#[derive(Debug, Clone, Copy)]
pub struct BillerKeyword {
    /// Lowercased substring searched in the normalized text.
    pub keyword: &'static str,
    /// Proper-cased name shown to the user.
    pub display: &'static str,
    /// Category the biller belongs to.
    pub category: BillCategory,
}

const fn kw(keyword: &'static str, display: &'static str, category: BillCategory) -> BillerKeyword {
    BillerKeyword {
        keyword,
        display,
        category,
    }
}

/// Known Turkish billers, ordered by the fixed category priority
/// electricity → water → gas → internet → phone → subscriptions → rent →
/// market. The first keyword hit in this order wins.
pub static BILLER_KEYWORDS: &[BillerKeyword] = &[
    // Electricity
    kw("enerjisa", "Enerjisa", BillCategory::Electricity),
    kw("tedaş", "TEDAŞ", BillCategory::Electricity),
    kw("bedaş", "BEDAŞ", BillCategory::Electricity),
    kw("ayedaş", "AYEDAŞ", BillCategory::Electricity),
    kw("aydem", "Aydem", BillCategory::Electricity),
    kw("ck enerji", "CK Enerji", BillCategory::Electricity),
    // Water
    kw("iski", "İSKİ", BillCategory::Water),
    kw("aski", "ASKİ", BillCategory::Water),
    kw("izsu", "İZSU", BillCategory::Water),
    kw("buski", "BUSKİ", BillCategory::Water),
    kw(
        "istanbul büyükşehir",
        "İstanbul Büyükşehir Belediyesi",
        BillCategory::Water,
    ),
    kw(
        "denizli büyükşehir",
        "Denizli Büyükşehir Belediyesi",
        BillCategory::Water,
    ),
    // Gas
    kw("igdaş", "İGDAŞ", BillCategory::Gas),
    kw("egegaz", "EgeGaz", BillCategory::Gas),
    kw("başkentgaz", "BaşkentGaz", BillCategory::Gas),
    kw("aksa doğalgaz", "Aksa Doğalgaz", BillCategory::Gas),
    // Internet
    kw("türk telekom", "Türk Telekom", BillCategory::Internet),
    kw("superonline", "Superonline", BillCategory::Internet),
    kw("türknet", "TürkNet", BillCategory::Internet),
    kw("millenicom", "Millenicom", BillCategory::Internet),
    // Phone
    kw("turkcell", "Turkcell", BillCategory::Phone),
    kw("vodafone", "Vodafone", BillCategory::Phone),
    // Subscriptions
    kw("netflix", "Netflix", BillCategory::Subscriptions),
    kw("spotify", "Spotify", BillCategory::Subscriptions),
    kw("digiturk", "Digiturk", BillCategory::Subscriptions),
    kw("blutv", "BluTV", BillCategory::Subscriptions),
    // Rent
    kw("kira", "Kira", BillCategory::Rent),
    // Market
    kw("migros", "Migros", BillCategory::Market),
    kw("carrefour", "CarrefourSA", BillCategory::Market),
    kw("bim", "BİM", BillCategory::Market),
    kw("a101", "A101", BillCategory::Market),
    kw("şok", "ŞOK", BillCategory::Market),
];
