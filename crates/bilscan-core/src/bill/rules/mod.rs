//! Rule-based field extractors for Turkish bills.

pub mod amount;
pub mod biller;
pub mod currency;
pub mod date;
pub mod patterns;

pub use amount::{parse_turkish_amount, AmountExtractor};
pub use biller::{BillerExtractor, BillerHit};
pub use currency::CurrencyDetector;
pub use date::DateExtractor;
pub use patterns::BillerKeyword;

use crate::models::bill::ExtractedField;
use crate::text::{truncate_chars, NormalizedText};

/// Maximum length of a single evidence line.
pub const MAX_EVIDENCE_CHARS: usize = 100;

/// Trait for field extractors.
///
/// Extractors are pure over the normalized text: no shared mutable state,
/// safe to run in any order or concurrently for independent scans.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the best candidate from text, or `None` when no pattern
    /// tier yields a valid value.
    fn extract(&self, text: &NormalizedText) -> Option<ExtractionMatch<Self::Output>>;
}

/// A successful extraction with its confidence tier and evidence.
#[derive(Debug, Clone)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Confidence score (0.0 - 1.0), fixed by the pattern tier that matched.
    pub confidence: f32,
    /// Source lines that supported the match.
    pub evidence: Vec<String>,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, confidence: f32) -> Self {
        Self {
            value,
            confidence,
            evidence: Vec::new(),
        }
    }

    pub fn with_evidence(mut self, evidence: Vec<String>) -> Self {
        self.evidence = evidence;
        self
    }

    /// Map the extracted value, keeping confidence and evidence.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ExtractionMatch<U> {
        ExtractionMatch {
            value: f(self.value),
            confidence: self.confidence,
            evidence: self.evidence,
        }
    }

    /// Convert into the pre-gate field shape.
    pub fn into_field(self) -> ExtractedField<T> {
        ExtractedField {
            value: Some(self.value),
            confidence: self.confidence,
            evidence: self.evidence,
        }
    }
}

/// Build the field for an optional match; absence yields confidence 0.
pub fn to_field<T>(m: Option<ExtractionMatch<T>>) -> ExtractedField<T> {
    m.map(ExtractionMatch::into_field)
        .unwrap_or_else(ExtractedField::missing)
}

/// Evidence for a match: the original-case line containing the matched
/// literal, trimmed and truncated.
pub(crate) fn evidence_for(text: &NormalizedText, matched: &str) -> Vec<String> {
    text.line_containing(matched)
        .map(|line| vec![truncate_chars(line.trim(), MAX_EVIDENCE_CHARS)])
        .unwrap_or_default()
}
