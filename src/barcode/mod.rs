// SPDX-License-Identifier: GPL-3.0-only

//! Barcode and QR rendering pipeline
//!
//! Turns a `(code, CodeType)` pair into a raster image via an external
//! symbol generator. The pipeline walks six steps, each with a defined
//! failure: resolve the generator, encode the payload bytes, pick the
//! per-type parameters, generate the native-resolution symbol, scale it
//! to the target size, and materialize the raster buffer. A failure at
//! any step yields no partial image.
//!
//! Scaling discipline: matrix codes scale uniformly (fit-within, modules
//! stay square); linear barcodes scale independently per axis
//! (stretch-to-fill — they tolerate vertical stretch, and bar widths
//! must track the requested width exactly). Interpolation is always
//! nearest-neighbor so module edges stay crisp.

pub mod generator;

pub use generator::{
    Correction, GeneratorParams, GeneratorRegistry, QrEcc, SymbolGenerator, SymbolMatrix,
};

use crate::card::{Card, DisplayMode};
use crate::codetype::CodeType;
use crate::errors::RenderError;
use image::imageops::{self, FilterType};
use image::{GrayImage, Luma};
use tracing::debug;

/// Luma value of a dark module
const MODULE_DARK: u8 = 0x00;
/// Luma value of a light module
const MODULE_LIGHT: u8 = 0xFF;

/// Aztec redundancy percentage, fixed policy
const AZTEC_CORRECTION_PERCENT: u8 = 23;

/// Renders card codes through registered symbol generators
///
/// Stateless apart from the registry; safe to share across threads when
/// the registered generators are (the trait requires it).
pub struct BarcodeRenderer {
    registry: GeneratorRegistry,
}

impl BarcodeRenderer {
    pub fn new(registry: GeneratorRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }

    /// Render a code to a grayscale raster image
    ///
    /// Without an explicit `target_size` the symbology's default size is
    /// used (1D 300×100, QR/Aztec 200×200, PDF417 300×150).
    pub fn render(
        &self,
        code: &str,
        code_type: CodeType,
        target_size: Option<(u32, u32)>,
    ) -> Result<GrayImage, RenderError> {
        // Step 1: resolve the generation primitive
        let generator = self
            .registry
            .get(code_type.generator_id())
            .ok_or_else(|| RenderError::PrimitiveUnavailable(code_type.generator_id().into()))?;

        // Step 2: encode the payload bytes
        let payload = encode_payload(code, code_type)?;

        // Step 3: fixed per-type parameters
        let params = params_for(code_type);

        // Step 4: generate the symbol at native resolution
        let matrix = generator
            .generate(&payload, &params)
            .map_err(RenderError::GenerationFailed)?;
        if matrix.is_empty() {
            return Err(RenderError::GenerationFailed(
                "generator returned an empty symbol".into(),
            ));
        }

        // Step 5: scale to the target size
        let target = target_size.unwrap_or_else(|| code_type.default_size());
        let (out_width, out_height) = scaled_dimensions(
            (matrix.width(), matrix.height()),
            target,
            code_type.is_2d(),
        );
        if out_width == 0 || out_height == 0 {
            return Err(RenderError::RasterizationFailed);
        }

        // Step 6: materialize the raster buffer
        let native = rasterize(&matrix);
        let image = imageops::resize(&native, out_width, out_height, FilterType::Nearest);

        debug!(
            code_type = code_type.generator_id(),
            native_width = matrix.width(),
            native_height = matrix.height(),
            width = out_width,
            height = out_height,
            "Rendered symbol"
        );

        Ok(image)
    }

    /// Render a card's code, honoring its display mode
    ///
    /// Returns None when the card is set to text-only presentation, in
    /// which case the pipeline is not invoked at all.
    pub fn render_card(
        &self,
        card: &Card,
        target_size: Option<(u32, u32)>,
    ) -> Option<Result<GrayImage, RenderError>> {
        match card.display_mode {
            DisplayMode::Text => None,
            DisplayMode::Barcode => Some(self.render(&card.code, card.code_type, target_size)),
        }
    }
}

/// Encode the code string into the bytes the symbology expects
///
/// Matrix symbologies carry UTF-8. Code 128 and EAN-13 use single-byte
/// alphabets, so the payload is Latin-1; feeding them multi-byte UTF-8
/// would corrupt the encoded value.
pub fn encode_payload(code: &str, code_type: CodeType) -> Result<Vec<u8>, RenderError> {
    if code_type.is_2d() {
        return Ok(code.as_bytes().to_vec());
    }
    code.chars()
        .map(|c| {
            let point = u32::from(c);
            if point <= 0xFF {
                Ok(point as u8)
            } else {
                Err(RenderError::UnencodableInput)
            }
        })
        .collect()
}

/// Fixed per-type generator parameters
fn params_for(code_type: CodeType) -> GeneratorParams {
    let correction = match code_type {
        CodeType::QrCode => Some(Correction::Qr(QrEcc::Medium)),
        CodeType::Aztec => Some(Correction::Percent(AZTEC_CORRECTION_PERCENT)),
        CodeType::Code128 | CodeType::Ean13 | CodeType::Pdf417 => None,
    };
    GeneratorParams { correction }
}

/// Output dimensions for a native symbol scaled toward a target
///
/// 2D: uniform scale by the smaller axis factor, fit-within. 1D: each
/// axis scales by its own factor, filling the target exactly.
fn scaled_dimensions(native: (u32, u32), target: (u32, u32), is_2d: bool) -> (u32, u32) {
    let (native_width, native_height) = native;
    let (target_width, target_height) = target;
    if native_width == 0 || native_height == 0 || target_width == 0 || target_height == 0 {
        return (0, 0);
    }

    if is_2d {
        let scale_x = target_width as f64 / native_width as f64;
        let scale_y = target_height as f64 / native_height as f64;
        let scale = scale_x.min(scale_y);
        let width = ((native_width as f64 * scale).round() as u32).max(1);
        let height = ((native_height as f64 * scale).round() as u32).max(1);
        (width.min(target_width), height.min(target_height))
    } else {
        (target_width, target_height)
    }
}

/// Expand a module matrix into a one-pixel-per-module grayscale buffer
fn rasterize(matrix: &SymbolMatrix) -> GrayImage {
    GrayImage::from_fn(matrix.width(), matrix.height(), |x, y| {
        if matrix.get(x, y) {
            Luma([MODULE_DARK])
        } else {
            Luma([MODULE_LIGHT])
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_payload_utf8_for_2d() {
        let payload = encode_payload("héllo", CodeType::QrCode).unwrap();
        assert_eq!(payload, "héllo".as_bytes());
    }

    #[test]
    fn test_encode_payload_latin1_for_1d() {
        // é is U+00E9, a valid Latin-1 byte
        let payload = encode_payload("héllo", CodeType::Code128).unwrap();
        assert_eq!(payload, vec![b'h', 0xE9, b'l', b'l', b'o']);
        // € is U+20AC, beyond Latin-1
        assert_eq!(
            encode_payload("€10", CodeType::Ean13),
            Err(RenderError::UnencodableInput)
        );
    }

    #[test]
    fn test_scaled_dimensions_2d_fits_within() {
        // 25x25 symbol into a 300x150 target: bounded by height
        assert_eq!(scaled_dimensions((25, 25), (300, 150), true), (150, 150));
    }

    #[test]
    fn test_scaled_dimensions_1d_fills_target() {
        assert_eq!(scaled_dimensions((57, 1), (300, 100), false), (300, 100));
    }

    #[test]
    fn test_scaled_dimensions_degenerate() {
        assert_eq!(scaled_dimensions((25, 25), (0, 100), true), (0, 0));
        assert_eq!(scaled_dimensions((0, 0), (100, 100), false), (0, 0));
    }
}
