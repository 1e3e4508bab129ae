//! Currency detection for Turkish bills.

use regex::Regex;

use super::patterns::{CURRENCY_EUR, CURRENCY_TRY, CURRENCY_USD};
use super::{evidence_for, ExtractionMatch};
use crate::text::NormalizedText;

/// Confidence for currency detection. The detector always produces a value
/// (falling back to the configured default), so it never warns.
pub const CONF_CURRENCY: f32 = 0.95;

/// Currency detector.
pub struct CurrencyDetector {
    default: String,
}

impl CurrencyDetector {
    pub fn new() -> Self {
        Self {
            default: "TRY".to_string(),
        }
    }

    pub fn with_default(mut self, code: impl Into<String>) -> Self {
        self.default = code.into();
        self
    }

    /// Detect the currency, defaulting when no mark is present.
    pub fn detect(&self, text: &NormalizedText) -> ExtractionMatch<String> {
        let marks: [(&Regex, &str); 3] = [
            (&*CURRENCY_TRY, "TRY"),
            (&*CURRENCY_USD, "USD"),
            (&*CURRENCY_EUR, "EUR"),
        ];
        for (pattern, code) in marks {
            if let Some(m) = pattern.find(text.lowered()) {
                return ExtractionMatch::new(code.to_string(), CONF_CURRENCY)
                    .with_evidence(evidence_for(text, m.as_str()));
            }
        }

        ExtractionMatch::new(self.default.clone(), CONF_CURRENCY)
            .with_evidence(vec![format!("default currency: {}", self.default)])
    }
}

impl Default for CurrencyDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> ExtractionMatch<String> {
        CurrencyDetector::new().detect(&NormalizedText::new(text))
    }

    #[test]
    fn test_turkish_lira_mark() {
        assert_eq!(detect("Toplam: 350,75 TL").value, "TRY");
        assert_eq!(detect("₺120,00").value, "TRY");
        assert_eq!(detect("yüz türk lirası").value, "TRY");
    }

    #[test]
    fn test_foreign_currencies() {
        assert_eq!(detect("total 12.50 $").value, "USD");
        assert_eq!(detect("betrag 9,99 €").value, "EUR");
    }

    #[test]
    fn test_tl_requires_word_boundary() {
        // "tl" inside a word is not a currency mark.
        let m = detect("atlas sitesi aidat");
        assert_eq!(m.value, "TRY");
        assert_eq!(m.evidence, vec!["default currency: TRY".to_string()]);
    }

    #[test]
    fn test_default_fallback() {
        let m = detect("hiç para birimi yok");
        assert_eq!(m.value, "TRY");
        assert_eq!(m.confidence, CONF_CURRENCY);
    }
}
