//! Scan orchestrator: acquire → recognize → parse → gate → assemble.

use std::fmt;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::models::bill::{BillScanResult, ExtractedField, ParsedBill};
use crate::models::config::ScanConfig;
use crate::text::truncate_chars;

use super::gate::{ConfidenceLevel, FieldGate};
use super::{ImageSource, TextRecognizer};
use super::parser::BillFieldParser;

const UNREADABLE_TEXT: &str = "no readable text was found in the image";
const REVIEW_MANUALLY: &str =
    "could not fully extract the bill details, please review them manually";

/// Sequences one scan attempt end to end.
///
/// Strictly linear, no retries: every collaborator failure is converted to
/// a `success = false` result at this boundary and nothing propagates to
/// the caller. Holds no per-scan state, so two independent scans may run
/// concurrently against the same scanner.
pub struct BillScanner {
    config: ScanConfig,
    parser: BillFieldParser,
    gate: FieldGate,
}

impl BillScanner {
    /// Create a scanner with default configuration.
    pub fn new() -> Self {
        Self::with_config(ScanConfig::default())
    }

    /// Create a scanner from configuration.
    pub fn with_config(config: ScanConfig) -> Self {
        let parser = BillFieldParser::with_config(&config);
        let gate = FieldGate::from_config(&config.gate);
        Self {
            config,
            parser,
            gate,
        }
    }

    /// Run a full scan through the acquisition and recognition collaborators.
    pub fn scan(
        &self,
        source: &dyn ImageSource,
        recognizer: &dyn TextRecognizer,
        today: NaiveDate,
    ) -> BillScanResult {
        let image = match source.acquire() {
            Ok(image) => image,
            Err(err) => {
                warn!("image acquisition failed: {err}");
                return BillScanResult::failure(err.to_string());
            }
        };
        debug!("acquired {} byte image ({})", image.bytes.len(), image.mime_type);

        let raw_text = match recognizer.recognize(&image) {
            Ok(text) => text,
            Err(err) => {
                warn!("text recognition failed: {err}");
                return BillScanResult::failure(err.to_string());
            }
        };

        self.scan_text(&raw_text, today)
    }

    /// Run the pipeline from already-recognized text.
    pub fn scan_text(&self, raw_text: &str, today: NaiveDate) -> BillScanResult {
        if raw_text.trim().chars().count() < self.config.min_text_length {
            debug!("recognized text too short to parse");
            return BillScanResult::failure(UNREADABLE_TEXT);
        }

        let parsed = self.parser.parse(raw_text, today);
        self.assemble(raw_text, parsed)
    }

    /// Gate every field and build the final result.
    fn assemble(&self, raw_text: &str, parsed: ParsedBill) -> BillScanResult {
        let mut warnings = Vec::new();

        // Warning order is fixed: biller, amount, date.
        let biller_name = self.gate_field(parsed.biller_name, "Biller name", &mut warnings);
        let amount = self.gate_field(parsed.amount_due, "Amount due", &mut warnings);
        let due_date = self.gate_field(parsed.due_date, "Due date", &mut warnings);

        // Currency always carries a (possibly defaulted) value and never
        // contributes a warning or counts toward the shortfall check.
        let currency_accepted = self.gate.decide(&parsed.currency).accept;
        let currency = parsed.currency.value.filter(|_| currency_accepted);

        // Category is a projection of the biller name; it only survives
        // when the biller itself was accepted.
        let category = parsed.category.filter(|_| biller_name.is_some());

        let extracted_any = biller_name.is_some() || amount.is_some() || due_date.is_some();
        let error = (!extracted_any).then(|| REVIEW_MANUALLY.to_string());

        BillScanResult {
            success: true,
            biller_name,
            due_date,
            amount,
            currency,
            category,
            raw_text: Some(truncate_chars(raw_text, self.config.raw_text_limit)),
            warnings,
            error,
        }
    }

    /// Apply the gate to one field, appending a warning for medium
    /// confidence; returns the value only when accepted.
    fn gate_field<T: fmt::Display>(
        &self,
        field: ExtractedField<T>,
        label: &str,
        warnings: &mut Vec<String>,
    ) -> Option<T> {
        let decision = self.gate.decide(&field);
        if !decision.accept {
            if field.value.is_some() {
                debug!(
                    "rejected {label} at confidence {:.2}",
                    field.confidence
                );
            }
            return None;
        }

        let value = field.value?;
        if decision.level == ConfidenceLevel::Medium {
            warnings.push(format!(
                "{label} was read as \"{value}\" with low confidence, please verify it"
            ));
        }
        Some(value)
    }
}

impl Default for BillScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AcquisitionError, RecognitionError};
    use crate::bill::BillImage;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    struct StaticImage;

    impl ImageSource for StaticImage {
        fn acquire(&self) -> Result<BillImage, AcquisitionError> {
            Ok(BillImage::new(vec![0u8; 16], "image/jpeg"))
        }
    }

    struct FailingSource(AcquisitionError);

    impl ImageSource for FailingSource {
        fn acquire(&self) -> Result<BillImage, AcquisitionError> {
            Err(self.0.clone())
        }
    }

    struct FixedRecognizer(&'static str);

    impl TextRecognizer for FixedRecognizer {
        fn recognize(&self, _image: &BillImage) -> Result<String, RecognitionError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingRecognizer(RecognitionError);

    impl TextRecognizer for FailingRecognizer {
        fn recognize(&self, _image: &BillImage) -> Result<String, RecognitionError> {
            Err(self.0.clone())
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()
    }

    const FULL_BILL: &str = "ENERJİSA\nElektrik Faturası\nFatura No: 4581223\n\
                             Son Ödeme Tarihi: 12.06.2025\nÖdenecek Tutar: 350,75 TL";

    #[test]
    fn test_clean_fill_has_no_warnings() {
        let result = BillScanner::new().scan(&StaticImage, &FixedRecognizer(FULL_BILL), today());

        assert!(result.success);
        assert_eq!(result.biller_name.as_deref(), Some("Enerjisa"));
        assert_eq!(result.due_date, NaiveDate::from_ymd_opt(2025, 6, 12));
        assert_eq!(result.amount, Some(Decimal::from_str("350.75").unwrap()));
        assert_eq!(result.currency.as_deref(), Some("TRY"));
        assert_eq!(result.category.map(|c| c.id()), Some("electricity"));
        assert!(result.warnings.is_empty());
        assert!(result.error.is_none());
        assert!(result.raw_text.as_deref().unwrap().starts_with("ENERJİSA"));
    }

    #[test]
    fn test_bare_amount_fills_with_warning() {
        let result = BillScanner::new().scan_text("#0001 22:14\n125,00\n***", today());

        assert!(result.success);
        assert_eq!(result.amount, Some(Decimal::from_str("125.00").unwrap()));
        assert!(result.biller_name.is_none());
        assert!(result.due_date.is_none());
        assert!(result.category.is_none());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("Amount due"));
        assert!(result.warnings[0].contains("125.00"));
    }

    #[test]
    fn test_too_short_text_is_terminal() {
        let result = BillScanner::new().scan(&StaticImage, &FixedRecognizer("abc"), today());

        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some(UNREADABLE_TEXT));
        assert!(result.biller_name.is_none());
        assert!(result.amount.is_none());
        assert!(result.due_date.is_none());
        assert!(result.warnings.is_empty());
        assert!(result.raw_text.is_none());
    }

    #[test]
    fn test_shortfall_is_soft_error() {
        // Readable text, but nothing extractable: success stays true with a
        // review-manually message.
        let result = BillScanner::new().scan_text("12345 67890 11 22 33", today());

        assert!(result.success);
        assert_eq!(result.error.as_deref(), Some(REVIEW_MANUALLY));
        assert!(result.biller_name.is_none());
        assert!(result.amount.is_none());
        assert!(result.due_date.is_none());
        // Currency defaults and is not counted as an extraction.
        assert_eq!(result.currency.as_deref(), Some("TRY"));
    }

    #[test]
    fn test_warnings_keep_biller_amount_date_order() {
        // Unknown heading biller (medium) + bare amount (medium) + bare
        // date (medium) must warn in that fixed order.
        let text = "Mahalle Apartman Yönetimi\nbelge 20.06.2025\nara toplamlar yok 125,00";
        let result = BillScanner::new().scan_text(text, today());

        assert_eq!(result.warnings.len(), 3);
        assert!(result.warnings[0].contains("Biller name"));
        assert!(result.warnings[1].contains("Amount due"));
        assert!(result.warnings[2].contains("Due date"));
    }

    #[test]
    fn test_cancelled_acquisition() {
        let result = BillScanner::new().scan(
            &FailingSource(AcquisitionError::Cancelled),
            &FixedRecognizer(FULL_BILL),
            today(),
        );

        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("image capture was cancelled"));
    }

    #[test]
    fn test_recognition_failures_have_distinct_messages() {
        let scanner = BillScanner::new();

        let timeout = scanner.scan(
            &StaticImage,
            &FailingRecognizer(RecognitionError::Timeout),
            today(),
        );
        let auth = scanner.scan(
            &StaticImage,
            &FailingRecognizer(RecognitionError::Unauthorized),
            today(),
        );
        let generic = scanner.scan(
            &StaticImage,
            &FailingRecognizer(RecognitionError::Service("boom".to_string())),
            today(),
        );

        assert!(!timeout.success && !auth.success && !generic.success);
        assert!(timeout.error.as_deref().unwrap().contains("timed out"));
        assert!(auth.error.as_deref().unwrap().contains("rejected"));
        assert!(generic.error.as_deref().unwrap().contains("boom"));
        assert_ne!(timeout.error, auth.error);
        assert_ne!(auth.error, generic.error);
    }

    #[test]
    fn test_raw_text_is_truncated() {
        let mut config = ScanConfig::default();
        config.raw_text_limit = 20;
        let long_text = format!("Ödenecek Tutar: 350,75 TL {}", "x".repeat(600));

        let result = BillScanner::with_config(config).scan_text(&long_text, today());

        assert_eq!(result.raw_text.as_deref().unwrap().chars().count(), 20);
    }
}
