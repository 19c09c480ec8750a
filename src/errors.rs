// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the card manager
//!
//! Nothing in this crate is fatal to the process: render failures fall
//! back to a placeholder at the display layer, import failures abort the
//! import atomically, and scan failures are retryable.

use std::fmt;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Main application error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Barcode rendering errors
    Render(RenderError),
    /// Backup export errors
    Export(ExportError),
    /// Backup import errors
    Import(ImportError),
    /// Scanning errors
    Scan(ScanError),
    /// Storage/filesystem errors
    Storage(String),
    /// Configuration errors
    Config(String),
    /// Generic error with message
    Other(String),
}

/// Barcode rendering errors
///
/// Any failure yields no partial image; callers substitute a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// No symbol generator registered under the requested identifier
    PrimitiveUnavailable(String),
    /// The code contains characters the symbology's alphabet cannot carry
    UnencodableInput,
    /// The symbol generator reported a failure
    GenerationFailed(String),
    /// The scaled symbol could not be materialized into a raster buffer
    RasterizationFailed,
}

/// Backup export errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// Serialization-layer failure
    EncodingFailed(String),
}

/// Backup import errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// Malformed JSON or a structurally invalid envelope
    DecodingFailed,
    /// The file declares a format version this build does not read
    UnsupportedVersion(u32),
}

/// Scanning errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// No barcode or QR code was found in the input
    NoDetectionFound,
    /// The input could not be decoded as an image
    ImageProcessingFailed,
    /// Camera access was denied
    PermissionDenied,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Render(e) => write!(f, "Render error: {}", e),
            AppError::Export(e) => write!(f, "Export error: {}", e),
            AppError::Import(e) => write!(f, "Import error: {}", e),
            AppError::Scan(e) => write!(f, "Scan error: {}", e),
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::PrimitiveUnavailable(id) => {
                write!(f, "No symbol generator available for '{}'", id)
            }
            RenderError::UnencodableInput => {
                write!(f, "Code contains characters this symbology cannot encode")
            }
            RenderError::GenerationFailed(msg) => write!(f, "Symbol generation failed: {}", msg),
            RenderError::RasterizationFailed => write!(f, "Failed to rasterize symbol"),
        }
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::EncodingFailed(msg) => write!(f, "Failed to encode cards: {}", msg),
        }
    }
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::DecodingFailed => write!(f, "Failed to decode backup file"),
            ImportError::UnsupportedVersion(version) => {
                write!(f, "Unsupported file version: {}", version)
            }
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::NoDetectionFound => write!(f, "No barcodes found in image"),
            ScanError::ImageProcessingFailed => write!(f, "Failed to process image"),
            ScanError::PermissionDenied => write!(f, "Camera permission denied"),
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for RenderError {}
impl std::error::Error for ExportError {}
impl std::error::Error for ImportError {}
impl std::error::Error for ScanError {}

// Conversions from sub-errors to AppError
impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        AppError::Render(err)
    }
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        AppError::Export(err)
    }
}

impl From<ImportError> for AppError {
    fn from(err: ImportError) -> Self {
        AppError::Import(err)
    }
}

impl From<ScanError> for AppError {
    fn from(err: ScanError) -> Self {
        AppError::Scan(err)
    }
}

// Conversion from String for ad-hoc errors
impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Other(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Other(msg.to_string())
    }
}

// Conversions for I/O errors
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}
