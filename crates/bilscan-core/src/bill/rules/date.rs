//! Due-date extraction for Turkish bills.

use chrono::{Datelike, NaiveDate};

use super::patterns::{DATE_NUMERIC, DATE_TURKISH_LONG, DUE_DATE_LABEL};
use super::{evidence_for, ExtractionMatch, FieldExtractor};
use crate::text::NormalizedText;

/// Confidence for a date following an explicit due/payment-date label.
pub const CONF_LABELED: f32 = 0.90;
/// Confidence for a bare date found anywhere in the text.
pub const CONF_BARE: f32 = 0.55;

/// Due-date field extractor.
///
/// Dates are parsed day-first (Turkish convention) and validated against a
/// plausibility window anchored at an injected "today"; the extractor never
/// reads the ambient clock.
pub struct DateExtractor {
    today: NaiveDate,
    max_years_ahead: i32,
}

impl DateExtractor {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            max_years_ahead: 5,
        }
    }

    pub fn with_max_years_ahead(mut self, years: i32) -> Self {
        self.max_years_ahead = years;
        self
    }

    /// First valid date in `s`, with the literal that produced it.
    fn first_valid_date(&self, s: &str) -> Option<(NaiveDate, String)> {
        for caps in DATE_NUMERIC.captures_iter(s) {
            let day: u32 = caps[1].parse().unwrap_or(0);
            let month: u32 = caps[2].parse().unwrap_or(0);
            let year = expand_year(caps[3].parse().unwrap_or(0));

            if let Some(date) = self.validate(day, month, year) {
                return Some((date, caps[0].to_string()));
            }
        }

        for caps in DATE_TURKISH_LONG.captures_iter(s) {
            let day: u32 = caps[1].parse().unwrap_or(0);
            let month = turkish_month_to_number(&caps[2]);
            let year: i32 = caps[3].parse().unwrap_or(0);

            if let Some(date) = self.validate(day, month, year) {
                return Some((date, caps[0].to_string()));
            }
        }

        None
    }

    fn validate(&self, day: u32, month: u32, year: i32) -> Option<NaiveDate> {
        if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
            return None;
        }

        let date = NaiveDate::from_ymd_opt(year, month, day)?;

        // A due date in the past, or absurdly far out, is an OCR misread.
        if date < self.today || year > self.today.year() + self.max_years_ahead {
            return None;
        }

        Some(date)
    }
}

impl FieldExtractor for DateExtractor {
    type Output = NaiveDate;

    fn extract(&self, text: &NormalizedText) -> Option<ExtractionMatch<NaiveDate>> {
        // Tier 1: date following an explicit due-date label.
        for caps in DUE_DATE_LABEL.captures_iter(text.lowered()) {
            if let Some((date, literal)) = self.first_valid_date(&caps[1]) {
                return Some(
                    ExtractionMatch::new(date, CONF_LABELED)
                        .with_evidence(evidence_for(text, &literal)),
                );
            }
        }

        // Tier 2: any bare date in the text.
        self.first_valid_date(text.lowered()).map(|(date, literal)| {
            ExtractionMatch::new(date, CONF_BARE).with_evidence(evidence_for(text, &literal))
        })
    }
}

/// Expand a 2-digit year to the 2000s.
fn expand_year(year: i32) -> i32 {
    if year < 100 { year + 2000 } else { year }
}

fn turkish_month_to_number(month: &str) -> u32 {
    match month {
        "ocak" => 1,
        "şubat" => 2,
        "mart" => 3,
        "nisan" => 4,
        "mayıs" => 5,
        "haziran" => 6,
        "temmuz" => 7,
        "ağustos" => 8,
        "eylül" => 9,
        "ekim" => 10,
        "kasım" => 11,
        "aralık" => 12,
        _ => 0,
    }
}
