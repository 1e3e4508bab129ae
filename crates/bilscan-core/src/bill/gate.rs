//! Confidence gate: the accept/warn/reject decision per field.

use serde::{Deserialize, Serialize};

use crate::models::bill::ExtractedField;
use crate::models::config::GateConfig;

/// Confidence band a field landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    /// Accepted silently.
    High,
    /// Accepted with a verification warning.
    Medium,
    /// Rejected silently.
    Low,
    /// No candidate was found at all.
    None,
}

/// Derived per-field decision. Never stored; recomputed from confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDecision {
    pub level: ConfidenceLevel,
    pub accept: bool,
}

/// Three-way confidence gate.
///
/// The split exists to avoid two failure modes at once: silently trusting a
/// shaky value, and silently dropping a usable one. A medium-confidence
/// value is therefore filled *and* flagged, never one without the other.
#[derive(Debug, Clone, Copy)]
pub struct FieldGate {
    high: f32,
    low: f32,
}

impl FieldGate {
    pub fn new() -> Self {
        Self::from_config(&GateConfig::default())
    }

    pub fn from_config(config: &GateConfig) -> Self {
        Self {
            high: config.high_confidence,
            low: config.low_confidence,
        }
    }

    /// Decide for a parsed field; a missing value is `None`/reject.
    pub fn decide<T>(&self, field: &ExtractedField<T>) -> FieldDecision {
        if field.value.is_none() {
            return FieldDecision {
                level: ConfidenceLevel::None,
                accept: false,
            };
        }
        self.decide_confidence(field.confidence)
    }

    /// Decide from a bare confidence score.
    pub fn decide_confidence(&self, confidence: f32) -> FieldDecision {
        if confidence >= self.high {
            FieldDecision {
                level: ConfidenceLevel::High,
                accept: true,
            }
        } else if confidence >= self.low {
            FieldDecision {
                level: ConfidenceLevel::Medium,
                accept: true,
            }
        } else {
            FieldDecision {
                level: ConfidenceLevel::Low,
                accept: false,
            }
        }
    }
}

impl Default for FieldGate {
    fn default() -> Self {
        Self::new()
    }
}
