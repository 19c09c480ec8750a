// SPDX-License-Identifier: GPL-3.0-only

//! Symbology model for card codes
//!
//! Every card carries a [`CodeType`] naming the symbology its code value
//! is rendered with. The enumeration is closed on purpose: adding a
//! variant is a compile-time event that forces every `match` in the
//! rendering pipeline and the scanner mapping to be revisited.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported barcode and QR code symbologies
///
/// The declaration order is canonical: [`CodeType::compatible_types`]
/// filters it in order, and the first compatible entry is the target
/// when a card's type has to be auto-corrected after an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CodeType {
    /// Code 128 linear barcode (printable ASCII alphabet)
    #[default]
    #[serde(rename = "Code 128")]
    Code128,
    /// EAN-13 retail barcode (12 or 13 decimal digits)
    #[serde(rename = "EAN-13")]
    Ean13,
    /// QR code matrix symbology
    #[serde(rename = "QR Code")]
    QrCode,
    /// PDF417 stacked symbology
    #[serde(rename = "PDF417")]
    Pdf417,
    /// Aztec matrix symbology
    #[serde(rename = "Aztec")]
    Aztec,
}

impl CodeType {
    /// All variants in canonical order, for UI pickers and filtering
    pub const ALL: [CodeType; 5] = [
        CodeType::Code128,
        CodeType::Ean13,
        CodeType::QrCode,
        CodeType::Pdf417,
        CodeType::Aztec,
    ];

    /// User-facing label, also used as the wire label in backup files
    pub fn display_name(&self) -> &'static str {
        match self {
            CodeType::Code128 => "Code 128",
            CodeType::Ean13 => "EAN-13",
            CodeType::QrCode => "QR Code",
            CodeType::Pdf417 => "PDF417",
            CodeType::Aztec => "Aztec",
        }
    }

    /// Identifier of the external symbol generator for this type
    ///
    /// The mapping is total and injective; the rendering pipeline looks
    /// generators up in its registry under exactly these keys.
    pub fn generator_id(&self) -> &'static str {
        match self {
            CodeType::Code128 => "code128",
            CodeType::Ean13 => "ean13",
            CodeType::QrCode => "qr",
            CodeType::Pdf417 => "pdf417",
            CodeType::Aztec => "aztec",
        }
    }

    /// Whether this is a 2D matrix/stacked code rather than a linear barcode
    pub fn is_2d(&self) -> bool {
        match self {
            CodeType::Code128 | CodeType::Ean13 => false,
            CodeType::QrCode | CodeType::Pdf417 | CodeType::Aztec => true,
        }
    }

    /// Default render size in pixels, (width, height)
    pub fn default_size(&self) -> (u32, u32) {
        match self {
            CodeType::Code128 | CodeType::Ean13 => (300, 100),
            CodeType::QrCode | CodeType::Aztec => (200, 200),
            CodeType::Pdf417 => (300, 150),
        }
    }

    /// Check whether a code string can be encoded with this symbology
    ///
    /// Empty and whitespace-only input is compatible with every type so
    /// that a half-filled form is not flagged prematurely.
    pub fn is_compatible(&self, code: &str) -> bool {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return true;
        }

        match self {
            // EAN-13: decimal digits only, 13 of them or 12 with the
            // checksum still pending
            CodeType::Ean13 => {
                trimmed.chars().all(|c| c.is_ascii_digit())
                    && (trimmed.len() == 12 || trimmed.len() == 13)
            }
            // Code 128: printable ASCII, code points 32..=126
            CodeType::Code128 => trimmed.chars().all(|c| matches!(u32::from(c), 32..=126)),
            // 2D symbologies take arbitrary UTF-8 text
            CodeType::QrCode | CodeType::Pdf417 | CodeType::Aztec => true,
        }
    }

    /// Symbologies compatible with the given code, in canonical order
    pub fn compatible_types(code: &str) -> Vec<CodeType> {
        Self::ALL
            .iter()
            .copied()
            .filter(|t| t.is_compatible(code))
            .collect()
    }

    /// First compatible symbology for the given code
    ///
    /// This is the auto-correction target when an edit leaves a card's
    /// selected type incompatible. Never empty in practice: QR accepts
    /// any input.
    pub fn first_compatible(code: &str) -> CodeType {
        Self::compatible_types(code)
            .first()
            .copied()
            .unwrap_or_default()
    }

    /// Resolve a wire label (e.g. `"EAN-13"`) back to a variant
    pub fn from_label(label: &str) -> Option<CodeType> {
        Self::ALL.iter().copied().find(|t| t.display_name() == label)
    }
}

impl fmt::Display for CodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
