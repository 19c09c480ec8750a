// SPDX-License-Identifier: GPL-3.0-only

//! Scan-result mapping and still-image scanning
//!
//! Scanner backends report symbology identifiers from their own
//! vocabularies. [`map_symbology`] collapses them into the card model's
//! five types; the mapping is total, so a detection can never fail to
//! produce a usable type. EAN-8 and UPC-E fold into EAN-13 (the model
//! keeps one retail symbology), and anything unrecognized — data-matrix
//! included — falls back to Code 128.
//!
//! [`ImageScanner`] is the photo-scan path: decode the image, downscale
//! oversized input, and run software QR detection. Live camera scanning
//! is an external collaborator behind the [`LiveScanner`] trait.

use crate::codetype::CodeType;
use crate::constants::MAX_SCAN_DIMENSION;
use crate::errors::ScanError;
use image::DynamicImage;
use image::imageops::FilterType;
use tracing::{debug, warn};

/// Map an externally reported symbology identifier to a [`CodeType`]
///
/// Identifiers are normalized (trimmed, lowercased, separators dropped)
/// before lookup, so `"EAN-13"`, `"ean13"` and `"ean_13"` all resolve
/// the same way.
pub fn map_symbology(identifier: &str) -> CodeType {
    let normalized: String = identifier
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | '.' | ' '))
        .collect();

    match normalized.as_str() {
        "code128" => CodeType::Code128,
        "ean13" | "ean8" | "upce" => CodeType::Ean13,
        "qr" => CodeType::QrCode,
        "pdf417" => CodeType::Pdf417,
        "aztec" => CodeType::Aztec,
        other => {
            debug!(symbology = other, "Unrecognized symbology, defaulting to Code 128");
            CodeType::Code128
        }
    }
}

/// A successfully scanned code, normalized into the card model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub code: String,
    pub code_type: CodeType,
}

/// A raw detection as reported by a scanner backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// Decoded string payload
    pub payload: String,
    /// Backend-vocabulary symbology identifier
    pub symbology: String,
}

impl Detection {
    pub fn new(payload: impl Into<String>, symbology: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            symbology: symbology.into(),
        }
    }

    /// Normalize into the card model's vocabulary
    pub fn into_result(self) -> ScanResult {
        let code_type = map_symbology(&self.symbology);
        ScanResult {
            code: self.payload,
            code_type,
        }
    }
}

/// Handler invoked for each delivery from a live scanner session
pub type DetectionHandler = Box<dyn FnMut(Result<Detection, ScanError>) + Send>;

/// Live camera scanning session boundary
///
/// The session is external: asynchronous, cancelable, and hardware-
/// backed. The core only requires that each delivery is a [`Detection`]
/// or a [`ScanError`]; when several scans race, the last delivered
/// result wins at the call site.
pub trait LiveScanner {
    /// Begin delivering detections to the registered handler
    fn start(&mut self) -> Result<(), ScanError>;

    /// Stop the session; pending deliveries may still arrive
    fn stop(&mut self);

    fn is_running(&self) -> bool;

    /// Toggle the torch, returning the new state
    fn toggle_torch(&mut self) -> bool;

    /// Whether camera access has been granted
    fn check_permission(&self) -> bool;

    /// Register the handler receiving detections and errors
    fn set_detection_handler(&mut self, handler: DetectionHandler);
}

/// Scans barcodes from still images
///
/// Uses a software QR decoder, which covers the dominant share of
/// photo-scanned cards; linear symbologies come in through the live
/// scanner instead. Returns zero or one detection per image.
pub struct ImageScanner {
    /// Images larger than this on either axis are downscaled first
    max_dimension: u32,
}

impl Default for ImageScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageScanner {
    pub fn new() -> Self {
        Self {
            max_dimension: MAX_SCAN_DIMENSION,
        }
    }

    /// Create a scanner with a custom downscale bound
    pub fn with_max_dimension(max_dimension: u32) -> Self {
        Self { max_dimension }
    }

    /// Scan encoded image bytes (PNG, JPEG, ...)
    pub fn scan_bytes(&self, data: &[u8]) -> Result<ScanResult, ScanError> {
        let image = image::load_from_memory(data).map_err(|e| {
            warn!(error = %e, "Could not decode image for scanning");
            ScanError::ImageProcessingFailed
        })?;
        self.scan_image(&image)
    }

    /// Scan an already-decoded image
    pub fn scan_image(&self, image: &DynamicImage) -> Result<ScanResult, ScanError> {
        let downscaled;
        let image = if image.width() > self.max_dimension || image.height() > self.max_dimension {
            downscaled = image.resize(self.max_dimension, self.max_dimension, FilterType::Triangle);
            debug!(
                width = downscaled.width(),
                height = downscaled.height(),
                "Downscaled image for detection"
            );
            &downscaled
        } else {
            image
        };

        let mut prepared = rqrr::PreparedImage::prepare(image.to_luma8());
        let grids = prepared.detect_grids();
        debug!(count = grids.len(), "Detection complete");

        let Some(grid) = grids.first() else {
            return Err(ScanError::NoDetectionFound);
        };

        match grid.decode() {
            Ok((_meta, content)) => {
                debug!(length = content.len(), "Decoded QR code");
                Ok(ScanResult {
                    code: content,
                    code_type: map_symbology("qr"),
                })
            }
            Err(e) => {
                warn!(error = %e, "Detected symbol failed to decode");
                Err(ScanError::NoDetectionFound)
            }
        }
    }
}
