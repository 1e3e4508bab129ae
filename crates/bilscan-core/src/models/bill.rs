//! Bill scan data models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category of a bill, inferred from the biller name.
///
/// Variants are listed in match-priority order; the serde ids match the
/// category ids used by the bills backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillCategory {
    Electricity,
    Water,
    Gas,
    Internet,
    Phone,
    Subscriptions,
    Rent,
    Market,
}

impl BillCategory {
    /// Stable string id of the category.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Electricity => "electricity",
            Self::Water => "water",
            Self::Gas => "gas",
            Self::Internet => "internet",
            Self::Phone => "phone",
            Self::Subscriptions => "subscriptions",
            Self::Rent => "rent",
            Self::Market => "market",
        }
    }
}

impl std::fmt::Display for BillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// A single parsed field before gating.
///
/// Invariant: a missing value always carries confidence 0.0. Instances are
/// never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedField<T> {
    /// Extracted value, if any candidate survived validation.
    pub value: Option<T>,

    /// Confidence score (0.0 - 1.0).
    pub confidence: f32,

    /// Source lines supporting the value, for user review.
    pub evidence: Vec<String>,
}

impl<T> ExtractedField<T> {
    /// Field with no candidate.
    pub fn missing() -> Self {
        Self {
            value: None,
            confidence: 0.0,
            evidence: Vec::new(),
        }
    }

    /// Whether a candidate was found.
    pub fn is_found(&self) -> bool {
        self.value.is_some()
    }
}

impl<T> Default for ExtractedField<T> {
    fn default() -> Self {
        Self::missing()
    }
}

/// All fields parsed from one bill text, pre-gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedBill {
    /// Issuer display name.
    pub biller_name: ExtractedField<String>,

    /// Payment due date.
    pub due_date: ExtractedField<NaiveDate>,

    /// Amount due.
    pub amount_due: ExtractedField<Decimal>,

    /// ISO 4217 currency code.
    pub currency: ExtractedField<String>,

    /// Category derived from the biller keyword table. Carries no
    /// independent confidence; it is a projection of `biller_name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<BillCategory>,
}

/// The externally visible result of one scan attempt.
///
/// Assembled once per scan call and handed to the form-fill caller, which
/// may overwrite any field when the user edits it manually.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillScanResult {
    /// Whether the scan produced a usable result. Terminal failures
    /// (no image, unreadable text, recognition errors) set this to false.
    pub success: bool,

    /// Accepted biller display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biller_name: Option<String>,

    /// Accepted due date (serializes as ISO `YYYY-MM-DD`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    /// Accepted amount due, two fractional digits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,

    /// Detected currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Category derived from the accepted biller name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<BillCategory>,

    /// Truncated echo of the recognized text, for audit display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,

    /// Per-field verification warnings, in biller/amount/date order.
    pub warnings: Vec<String>,

    /// Terminal failure reason, or a soft review-manually message when no
    /// field was accepted despite readable text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BillScanResult {
    /// Terminal failure: no fields populated, form state untouched.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            biller_name: None,
            due_date: None,
            amount: None,
            currency: None,
            category: None,
            raw_text: None,
            warnings: Vec::new(),
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_has_zero_confidence() {
        let field: ExtractedField<String> = ExtractedField::missing();
        assert!(field.value.is_none());
        assert_eq!(field.confidence, 0.0);
        assert!(field.evidence.is_empty());
    }

    #[test]
    fn test_category_ids() {
        assert_eq!(BillCategory::Electricity.id(), "electricity");
        assert_eq!(BillCategory::Subscriptions.to_string(), "subscriptions");
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let mut result = BillScanResult::failure("x");
        result.success = true;
        result.error = None;
        result.biller_name = Some("Enerjisa".to_string());
        result.due_date = NaiveDate::from_ymd_opt(2025, 6, 12);
        result.raw_text = Some("ENERJİSA".to_string());

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["billerName"], "Enerjisa");
        assert_eq!(json["dueDate"], "2025-06-12");
        assert_eq!(json["rawText"], "ENERJİSA");
        assert!(json.get("error").is_none());
    }
}
