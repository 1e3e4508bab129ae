//! Biller name and category extraction for Turkish bills.

use super::patterns::{BillerKeyword, BILLER_KEYWORDS};
use super::{evidence_for, ExtractionMatch, FieldExtractor, MAX_EVIDENCE_CHARS};
use crate::models::bill::BillCategory;
use crate::text::{truncate_chars, NormalizedText};

/// Confidence for a hit in the known-biller keyword table.
pub const CONF_KNOWN_BILLER: f32 = 0.85;
/// Confidence for a heading line taken as the biller name.
pub const CONF_HEADING: f32 = 0.55;

const MAX_NAME_CHARS: usize = 50;

/// Biller identity extracted from one bill text.
#[derive(Debug, Clone)]
pub struct BillerHit {
    /// Display name of the issuer.
    pub name: String,
    /// Category, present only for known-biller keyword hits.
    pub category: Option<BillCategory>,
}

/// Biller/category field extractor.
///
/// Scans for the first known-biller keyword in category-priority order,
/// then falls back to the first plausible heading line.
pub struct BillerExtractor {
    keywords: &'static [BillerKeyword],
}

impl BillerExtractor {
    pub fn new() -> Self {
        Self {
            keywords: BILLER_KEYWORDS,
        }
    }

    #[cfg(test)]
    fn with_keywords(mut self, keywords: &'static [BillerKeyword]) -> Self {
        self.keywords = keywords;
        self
    }
}

impl Default for BillerExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for BillerExtractor {
    type Output = BillerHit;

    fn extract(&self, text: &NormalizedText) -> Option<ExtractionMatch<BillerHit>> {
        for kw in self.keywords {
            if text.lowered().contains(kw.keyword) {
                let hit = BillerHit {
                    name: kw.display.to_string(),
                    category: Some(kw.category),
                };
                return Some(
                    ExtractionMatch::new(hit, CONF_KNOWN_BILLER)
                        .with_evidence(evidence_for(text, kw.keyword)),
                );
            }
        }

        // No known biller: take the first heading-like line. Lines opening
        // with digits are reference numbers or amounts, not names.
        for line in text.original().lines().take(3) {
            let clean = line.trim();
            if clean.chars().count() > 5 && !clean.chars().take(5).any(|c| c.is_ascii_digit()) {
                let hit = BillerHit {
                    name: truncate_chars(clean, MAX_NAME_CHARS),
                    category: None,
                };
                return Some(
                    ExtractionMatch::new(hit, CONF_HEADING)
                        .with_evidence(vec![truncate_chars(clean, MAX_EVIDENCE_CHARS)]),
                );
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Option<ExtractionMatch<BillerHit>> {
        BillerExtractor::new().extract(&NormalizedText::new(text))
    }

    #[test]
    fn test_known_biller_keyword() {
        let m = extract("ENERJİSA\nElektrik Faturası").unwrap();
        assert_eq!(m.value.name, "Enerjisa");
        assert_eq!(m.value.category, Some(BillCategory::Electricity));
        assert_eq!(m.confidence, CONF_KNOWN_BILLER);
        assert_eq!(m.evidence, vec!["ENERJİSA".to_string()]);
    }

    #[test]
    fn test_uppercase_turkish_keyword() {
        let m = extract("İSKİ SU FATURASI").unwrap();
        assert_eq!(m.value.name, "İSKİ");
        assert_eq!(m.value.category, Some(BillCategory::Water));
    }

    #[test]
    fn test_category_priority_order() {
        // Water outranks phone in the fixed priority order, regardless of
        // position in the text.
        let m = extract("turkcell numarası kayıtlı\naski su faturası").unwrap();
        assert_eq!(m.value.category, Some(BillCategory::Water));
        assert_eq!(m.value.name, "ASKİ");
    }

    #[test]
    fn test_heading_fallback() {
        let m = extract("Mahalle Apartman Yönetimi\nAidat bildirimi\n100,00").unwrap();
        assert_eq!(m.value.name, "Mahalle Apartman Yönetimi");
        assert_eq!(m.value.category, None);
        assert_eq!(m.confidence, CONF_HEADING);
    }

    #[test]
    fn test_heading_fallback_skips_numeric_lines() {
        assert!(extract("#0001 22:14\n125,00\n***").is_none());
    }

    #[test]
    fn test_custom_keyword_table() {
        static KEYWORDS: &[BillerKeyword] = &[BillerKeyword {
            keyword: "acme",
            display: "ACME",
            category: BillCategory::Internet,
        }];

        let m = BillerExtractor::new()
            .with_keywords(KEYWORDS)
            .extract(&NormalizedText::new("acme servis bedeli"))
            .unwrap();
        assert_eq!(m.value.name, "ACME");
    }
}
