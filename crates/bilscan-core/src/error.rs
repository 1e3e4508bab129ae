//! Error types for the bilscan-core library.

use thiserror::Error;

/// Errors raised by the image acquisition collaborator.
///
/// Display strings are user-presentable; the scan orchestrator surfaces
/// them verbatim in [`crate::models::bill::BillScanResult::error`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AcquisitionError {
    /// The user cancelled image capture.
    #[error("image capture was cancelled")]
    Cancelled,

    /// Camera or gallery permission was denied.
    #[error("camera permission was denied")]
    PermissionDenied,

    /// The collaborator produced no image data.
    #[error("no image was provided")]
    NoImage,
}

/// Errors raised by the text recognition collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecognitionError {
    /// The recognition call exceeded its deadline.
    #[error("text recognition timed out, please try again")]
    Timeout,

    /// The recognition service rejected the caller's credentials.
    #[error("text recognition service rejected the request")]
    Unauthorized,

    /// Any other recognition failure.
    #[error("text recognition failed: {0}")]
    Service(String),
}
