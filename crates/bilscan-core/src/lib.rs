//! Core library for Turkish bill scanning.
//!
//! This crate provides:
//! - Turkish-aware text normalization for OCR output
//! - Rule-based field extraction (biller, due date, amount, currency)
//! - Confidence scoring with a three-way accept/warn/reject gate
//! - A scan orchestrator that turns collaborator failures into uniform
//!   results
//!
//! Image capture and text recognition are collaborator seams
//! ([`ImageSource`], [`TextRecognizer`]); the pipeline itself is pure over
//! the recognized text.

pub mod bill;
pub mod error;
pub mod models;
pub mod text;

pub use bill::gate::{ConfidenceLevel, FieldDecision, FieldGate};
pub use bill::{BillFieldParser, BillImage, BillScanner, ImageSource, TextRecognizer};
pub use error::{AcquisitionError, RecognitionError};
pub use models::bill::{BillCategory, BillScanResult, ExtractedField, ParsedBill};
pub use models::config::ScanConfig;
