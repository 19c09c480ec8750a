// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for scan-result mapping and the image scanner

use cardbox::codetype::CodeType;
use cardbox::errors::ScanError;
use cardbox::scan::{Detection, ImageScanner, map_symbology};
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

#[test]
fn test_mapping_covers_known_identifiers() {
    assert_eq!(map_symbology("code128"), CodeType::Code128);
    assert_eq!(map_symbology("ean13"), CodeType::Ean13);
    assert_eq!(map_symbology("qr"), CodeType::QrCode);
    assert_eq!(map_symbology("pdf417"), CodeType::Pdf417);
    assert_eq!(map_symbology("aztec"), CodeType::Aztec);
}

#[test]
fn test_retail_symbologies_collapse_to_ean13() {
    // The model keeps a single retail symbology; EAN-8 and UPC-E fold in
    assert_eq!(map_symbology("ean8"), CodeType::Ean13);
    assert_eq!(map_symbology("upce"), CodeType::Ean13);
}

#[test]
fn test_unrecognized_identifiers_default_to_code128() {
    assert_eq!(map_symbology("datamatrix"), CodeType::Code128);
    assert_eq!(map_symbology("data-matrix"), CodeType::Code128);
    assert_eq!(map_symbology("interleaved2of5"), CodeType::Code128);
    assert_eq!(map_symbology(""), CodeType::Code128);
    assert_eq!(map_symbology("🤷"), CodeType::Code128);
}

#[test]
fn test_mapping_tolerates_vocabulary_spelling() {
    assert_eq!(map_symbology("EAN-13"), CodeType::Ean13);
    assert_eq!(map_symbology("Code 128"), CodeType::Code128);
    assert_eq!(map_symbology("PDF_417"), CodeType::Pdf417);
    assert_eq!(map_symbology(" qr "), CodeType::QrCode);
}

#[test]
fn test_detection_normalizes_into_scan_result() {
    let result = Detection::new("799439112766", "upce").into_result();
    assert_eq!(result.code, "799439112766");
    assert_eq!(result.code_type, CodeType::Ean13);

    let result = Detection::new("WIFI:S:Home;;", "qr").into_result();
    assert_eq!(result.code_type, CodeType::QrCode);
}

#[test]
fn test_blank_image_yields_no_detection() {
    let image = DynamicImage::new_luma8(64, 64);
    let result = ImageScanner::new().scan_image(&image);
    assert_eq!(result.unwrap_err(), ScanError::NoDetectionFound);
}

#[test]
fn test_garbage_bytes_are_an_image_processing_failure() {
    let result = ImageScanner::new().scan_bytes(b"definitely not an image");
    assert_eq!(result.unwrap_err(), ScanError::ImageProcessingFailed);
}

#[test]
fn test_encoded_blank_image_scans_without_detection() {
    // A valid PNG decodes fine but contains nothing to find
    let image = DynamicImage::new_rgba8(128, 128);
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();

    let result = ImageScanner::new().scan_bytes(&bytes);
    assert_eq!(result.unwrap_err(), ScanError::NoDetectionFound);
}

#[test]
fn test_oversized_images_are_downscaled_not_rejected() {
    // Larger than the downscale bound on one axis; the scanner should
    // still process it (and find nothing in the blank content)
    let image = DynamicImage::new_luma8(2000, 40);
    let result = ImageScanner::with_max_dimension(256).scan_image(&image);
    assert_eq!(result.unwrap_err(), ScanError::NoDetectionFound);
}
