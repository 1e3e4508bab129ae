//! Amount extraction for Turkish bills.

use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::{AMOUNT_NEAR_CURRENCY, BARE_AMOUNT, LABELED_AMOUNT};
use super::{evidence_for, ExtractionMatch, FieldExtractor};
use crate::text::NormalizedText;

/// Confidence for an amount preceded by an explicit total/debt label.
pub const CONF_LABELED: f32 = 0.90;
/// Confidence for a bare amount adjacent to a currency mark.
pub const CONF_NEAR_CURRENCY: f32 = 0.65;
/// Confidence for an unanchored Turkish-formatted decimal.
pub const CONF_BARE: f32 = 0.50;

/// Amount field extractor.
///
/// Evaluates pattern tiers most specific first and stops at the first tier
/// that yields a value inside the plausible range.
pub struct AmountExtractor {
    min: Decimal,
    max: Decimal,
}

impl AmountExtractor {
    pub fn new() -> Self {
        Self {
            min: Decimal::ZERO,
            max: Decimal::from(50_000),
        }
    }

    /// Set the exclusive (min, max) range for plausible amounts.
    pub fn with_range(mut self, min: Decimal, max: Decimal) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    fn pattern_tiers() -> [(&'static Regex, f32); 3] {
        [
            (&*LABELED_AMOUNT, CONF_LABELED),
            (&*AMOUNT_NEAR_CURRENCY, CONF_NEAR_CURRENCY),
            (&*BARE_AMOUNT, CONF_BARE),
        ]
    }

    /// Parse a raw capture and apply the range check.
    fn parse_candidate(&self, raw: &str) -> Option<Decimal> {
        let mut amount = parse_turkish_amount(raw)?;
        if amount <= self.min || amount >= self.max {
            return None;
        }
        amount.rescale(2);
        Some(amount)
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = Decimal;

    fn extract(&self, text: &NormalizedText) -> Option<ExtractionMatch<Decimal>> {
        for (pattern, confidence) in Self::pattern_tiers() {
            for caps in pattern.captures_iter(text.lowered()) {
                if let Some(amount) = self.parse_candidate(&caps[1]) {
                    let matched = caps.get(0).unwrap().as_str().trim();
                    return Some(
                        ExtractionMatch::new(amount, confidence)
                            .with_evidence(evidence_for(text, matched)),
                    );
                }
            }
        }
        None
    }
}

/// Parse a Turkish-formatted amount string.
///
/// `1.250,75` parses to 1250.75: with both separators present the dot
/// groups thousands and the comma marks decimals. A lone comma is the
/// decimal separator. A lone dot is ambiguous: one or two trailing digits
/// mean a decimal (`45.90`), a group of three means thousands (`1.250`).
pub fn parse_turkish_amount(s: &str) -> Option<Decimal> {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();

    let normalized = if cleaned.contains(',') {
        cleaned.replace('.', "").replace(',', ".")
    } else if let Some(pos) = cleaned.rfind('.') {
        let fraction_digits = cleaned.len() - pos - 1;
        if (1..=2).contains(&fraction_digits) && cleaned.matches('.').count() == 1 {
            cleaned
        } else {
            cleaned.replace('.', "")
        }
    } else {
        cleaned
    };

    Decimal::from_str(&normalized).ok()
}
