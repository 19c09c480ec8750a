// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the symbology model

use cardbox::codetype::CodeType;

#[test]
fn test_empty_code_compatible_with_everything() {
    let types = CodeType::compatible_types("");
    assert_eq!(
        types.len(),
        CodeType::ALL.len(),
        "Empty input should be compatible with every symbology"
    );
    for code_type in CodeType::ALL {
        assert!(types.contains(&code_type));
    }
}

#[test]
fn test_ean13_accepts_12_or_13_digits() {
    assert!(CodeType::Ean13.is_compatible("123456789012"), "12 digits (checksum pending)");
    assert!(CodeType::Ean13.is_compatible("4006381333931"), "13 digits");
}

#[test]
fn test_ean13_rejects_wrong_lengths_and_non_digits() {
    assert!(!CodeType::Ean13.is_compatible("12345678901"), "11 digits");
    assert!(!CodeType::Ean13.is_compatible("12345678901234"), "14 digits");
    assert!(!CodeType::Ean13.is_compatible("12345678901A"), "non-digit");
    assert!(!CodeType::Ean13.is_compatible("1234 5678 901"), "embedded spaces");
}

#[test]
fn test_code128_accepts_printable_ascii() {
    assert!(CodeType::Code128.is_compatible("hello world"));
    assert!(CodeType::Code128.is_compatible("MEMBER-00423/A"));
    assert!(CodeType::Code128.is_compatible("!\"#$%&'()*+,-./ ~"));
}

#[test]
fn test_code128_rejects_non_ascii() {
    assert!(!CodeType::Code128.is_compatible("héllo"));
    assert!(!CodeType::Code128.is_compatible("カード"));
}

#[test]
fn test_code128_rejects_control_characters() {
    assert!(!CodeType::Code128.is_compatible("line\nbreak"));
    assert!(!CodeType::Code128.is_compatible("tab\there"));
}

#[test]
fn test_2d_types_accept_anything() {
    let inputs = ["hello", "héllo", "カード", "https://example.com?a=1&b=2", "\u{1F600}"];
    for input in inputs {
        assert!(CodeType::QrCode.is_compatible(input));
        assert!(CodeType::Pdf417.is_compatible(input));
        assert!(CodeType::Aztec.is_compatible(input));
    }
}

#[test]
fn test_compatible_types_keeps_canonical_order() {
    // All five accept plain digits of length 13
    assert_eq!(
        CodeType::compatible_types("4006381333931"),
        vec![
            CodeType::Code128,
            CodeType::Ean13,
            CodeType::QrCode,
            CodeType::Pdf417,
            CodeType::Aztec,
        ]
    );

    // Non-ASCII input narrows to the 2D types
    assert_eq!(
        CodeType::compatible_types("héllo"),
        vec![CodeType::QrCode, CodeType::Pdf417, CodeType::Aztec]
    );
}

#[test]
fn test_first_compatible_is_auto_correction_target() {
    assert_eq!(CodeType::first_compatible("hello"), CodeType::Code128);
    assert_eq!(CodeType::first_compatible("héllo"), CodeType::QrCode);
    assert_eq!(CodeType::first_compatible(""), CodeType::Code128);
}

#[test]
fn test_dimensionality() {
    assert!(!CodeType::Code128.is_2d());
    assert!(!CodeType::Ean13.is_2d());
    assert!(CodeType::QrCode.is_2d());
    assert!(CodeType::Pdf417.is_2d());
    assert!(CodeType::Aztec.is_2d());
}

#[test]
fn test_default_sizes() {
    assert_eq!(CodeType::Code128.default_size(), (300, 100));
    assert_eq!(CodeType::Ean13.default_size(), (300, 100));
    assert_eq!(CodeType::QrCode.default_size(), (200, 200));
    assert_eq!(CodeType::Aztec.default_size(), (200, 200));
    assert_eq!(CodeType::Pdf417.default_size(), (300, 150));
}

#[test]
fn test_default_is_code128() {
    assert_eq!(CodeType::default(), CodeType::Code128);
}
