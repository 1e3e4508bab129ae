//! Configuration structures for the scan pipeline.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Main configuration for the bill scan pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Minimum recognized-text length (in chars) to attempt extraction.
    pub min_text_length: usize,

    /// Maximum length (in chars) of the raw text echoed in results.
    pub raw_text_limit: usize,

    /// Confidence gate thresholds.
    pub gate: GateConfig,

    /// Field extraction limits.
    pub extraction: ExtractionConfig,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            min_text_length: 10,
            raw_text_limit: 500,
            gate: GateConfig::default(),
            extraction: ExtractionConfig::default(),
        }
    }
}

/// Thresholds partitioning the confidence space into accept / warn / reject.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// At or above this, a field is accepted silently.
    pub high_confidence: f32,

    /// At or above this (but below high), a field is accepted with a
    /// verification warning. Below it, the field is rejected silently.
    pub low_confidence: f32,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            high_confidence: 0.70,
            low_confidence: 0.40,
        }
    }
}

/// Limits applied while extracting field candidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Exclusive lower bound for a plausible bill amount.
    pub min_amount: Decimal,

    /// Exclusive upper bound for a plausible bill amount.
    pub max_amount: Decimal,

    /// How many years past "today" a due date may plausibly lie.
    pub max_years_ahead: i32,

    /// Currency code assumed when none is detected in the text.
    pub default_currency: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_amount: Decimal::ZERO,
            max_amount: Decimal::from(50_000),
            max_years_ahead: 5,
            default_currency: "TRY".to_string(),
        }
    }
}

impl ScanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
