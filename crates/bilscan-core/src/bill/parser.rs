//! Field parsing: runs all extractors over one normalized text.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::models::bill::ParsedBill;
use crate::models::config::ScanConfig;
use crate::text::NormalizedText;

use super::rules::{
    to_field, AmountExtractor, BillerExtractor, CurrencyDetector, DateExtractor, FieldExtractor,
};

/// Runs the amount, due-date, biller and currency extractors and assembles
/// the pre-gate [`ParsedBill`].
///
/// Extractors are pure functions over the same immutable text; the parser
/// holds no per-scan state and is safe to share between independent scans.
pub struct BillFieldParser {
    amount: AmountExtractor,
    biller: BillerExtractor,
    currency: CurrencyDetector,
    max_years_ahead: i32,
}

impl BillFieldParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self::with_config(&ScanConfig::default())
    }

    /// Create a parser configured from `config`.
    pub fn with_config(config: &ScanConfig) -> Self {
        Self {
            amount: AmountExtractor::new()
                .with_range(config.extraction.min_amount, config.extraction.max_amount),
            biller: BillerExtractor::new(),
            currency: CurrencyDetector::new()
                .with_default(config.extraction.default_currency.clone()),
            max_years_ahead: config.extraction.max_years_ahead,
        }
    }

    /// Parse all bill fields from raw OCR text.
    ///
    /// `today` anchors due-date plausibility; callers pass the current date
    /// (or a fixed one in tests).
    pub fn parse(&self, raw_text: &str, today: NaiveDate) -> ParsedBill {
        let text = NormalizedText::new(raw_text);

        info!(
            "parsing bill fields from {} characters of text",
            raw_text.chars().count()
        );

        let biller = self.biller.extract(&text);
        let due_date = DateExtractor::new(today)
            .with_max_years_ahead(self.max_years_ahead)
            .extract(&text);
        let amount = self.amount.extract(&text);
        let currency = self.currency.detect(&text);

        let category = biller.as_ref().and_then(|m| m.value.category);

        debug!(
            "extracted biller={} date={} amount={}",
            biller.is_some(),
            due_date.is_some(),
            amount.is_some()
        );

        ParsedBill {
            biller_name: to_field(biller.map(|m| m.map(|hit| hit.name))),
            due_date: to_field(due_date),
            amount_due: to_field(amount),
            currency: currency.into_field(),
            category,
        }
    }
}

impl Default for BillFieldParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()
    }

    #[test]
    fn test_parse_full_bill() {
        let text = "ENERJİSA\nElektrik Faturası\nFatura No: 4581223\n\
                    Son Ödeme Tarihi: 12.06.2025\nÖdenecek Tutar: 350,75 TL";

        let parsed = BillFieldParser::new().parse(text, today());

        assert_eq!(parsed.biller_name.value.as_deref(), Some("Enerjisa"));
        assert_eq!(
            parsed.due_date.value,
            NaiveDate::from_ymd_opt(2025, 6, 12)
        );
        assert_eq!(
            parsed.amount_due.value,
            Some(Decimal::from_str("350.75").unwrap())
        );
        assert_eq!(parsed.currency.value.as_deref(), Some("TRY"));
        assert_eq!(parsed.category.map(|c| c.id()), Some("electricity"));
    }

    #[test]
    fn test_missing_fields_carry_zero_confidence() {
        let parsed = BillFieldParser::new().parse("#0001 22:14\n55 66 77 88 99", today());

        assert!(parsed.biller_name.value.is_none());
        assert_eq!(parsed.biller_name.confidence, 0.0);
        assert!(parsed.due_date.value.is_none());
        assert_eq!(parsed.due_date.confidence, 0.0);
        assert!(parsed.amount_due.value.is_none());
        assert_eq!(parsed.amount_due.confidence, 0.0);
    }

    #[test]
    fn test_category_absent_for_unknown_biller() {
        let parsed =
            BillFieldParser::new().parse("Mahalle Apartman Yönetimi\nAidat: 500,00 TL", today());

        assert_eq!(
            parsed.biller_name.value.as_deref(),
            Some("Mahalle Apartman Yönetimi")
        );
        assert!(parsed.category.is_none());
    }
}
