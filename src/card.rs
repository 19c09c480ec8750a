// SPDX-License-Identifier: GPL-3.0-only

//! Loyalty card entity
//!
//! [`Card`] is the persisted record. The persistence layer owns the
//! canonical store; everything here operates on detached value copies.
//! Edits go through the `set_*` methods so `updated_at` stays honest.

use crate::codetype::CodeType;
use crate::constants::{DEFAULT_BACKGROUND_COLOR, DEFAULT_TEXT_COLOR};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a card is presented on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayMode {
    /// Show the rendered barcode/QR image
    #[default]
    #[serde(rename = "Barcode/QR")]
    Barcode,
    /// Show the code value as large plain text; rendering is skipped
    #[serde(rename = "Text only")]
    Text,
}

impl DisplayMode {
    /// All variants for UI iteration
    pub const ALL: [DisplayMode; 2] = [DisplayMode::Barcode, DisplayMode::Text];

    /// User-facing label, also used as the wire label in backup files
    pub fn display_name(&self) -> &'static str {
        match self {
            DisplayMode::Barcode => "Barcode/QR",
            DisplayMode::Text => "Text only",
        }
    }

    /// Resolve a wire label back to a variant
    pub fn from_label(label: &str) -> Option<DisplayMode> {
        Self::ALL.iter().copied().find(|m| m.display_name() == label)
    }
}

/// A stored loyalty card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Unique identifier, generated at creation and never changed
    pub id: Uuid,
    /// Display label
    pub name: String,
    /// The value to encode
    pub code: String,
    /// Symbology the code is rendered with
    pub code_type: CodeType,
    /// Barcode image or plain text presentation
    pub display_mode: DisplayMode,
    /// Optional free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Card background color as `#RRGGBB`
    pub background_color: String,
    /// Card text color as `#RRGGBB`
    pub text_color: String,
    /// Optional pre-resized raster image, stored as an opaque blob
    #[serde(default, skip_serializing_if = "Option::is_none", with = "base64_blob")]
    pub custom_image: Option<Vec<u8>>,
    /// Set once at construction
    pub created_at: DateTime<Utc>,
    /// Bumped by every edit operation
    pub updated_at: DateTime<Utc>,
}

impl Card {
    /// Create a card with default type, presentation and colors
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            code: code.into(),
            code_type: CodeType::default(),
            display_mode: DisplayMode::default(),
            notes: None,
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            custom_image: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the symbology during construction
    pub fn with_code_type(mut self, code_type: CodeType) -> Self {
        self.code_type = code_type;
        self
    }

    /// Set the presentation mode during construction
    pub fn with_display_mode(mut self, display_mode: DisplayMode) -> Self {
        self.display_mode = display_mode;
        self
    }

    /// Set notes during construction
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Set colors during construction
    pub fn with_colors(
        mut self,
        background_color: impl Into<String>,
        text_color: impl Into<String>,
    ) -> Self {
        self.background_color = background_color.into();
        self.text_color = text_color.into();
        self
    }

    /// Attach a custom image during construction
    pub fn with_custom_image(mut self, image: Vec<u8>) -> Self {
        self.custom_image = Some(image);
        self
    }

    /// A card is saveable once both name and code are non-blank
    ///
    /// Empty required fields are a local predicate, not an error type:
    /// the UI disables the save action instead of raising.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.code.trim().is_empty()
    }

    /// Rename the card
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.touch();
    }

    /// Change the code value
    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
        self.touch();
    }

    /// Change the symbology
    pub fn set_code_type(&mut self, code_type: CodeType) {
        self.code_type = code_type;
        self.touch();
    }

    /// Change the presentation mode
    pub fn set_display_mode(&mut self, display_mode: DisplayMode) {
        self.display_mode = display_mode;
        self.touch();
    }

    /// Replace the notes
    pub fn set_notes(&mut self, notes: Option<String>) {
        self.notes = notes;
        self.touch();
    }

    /// Replace the colors
    pub fn set_colors(
        &mut self,
        background_color: impl Into<String>,
        text_color: impl Into<String>,
    ) {
        self.background_color = background_color.into();
        self.text_color = text_color.into();
        self.touch();
    }

    /// Replace or clear the custom image
    pub fn set_custom_image(&mut self, image: Option<Vec<u8>>) {
        self.custom_image = image;
        self.touch();
    }

    /// Re-align the symbology with the current code value
    ///
    /// After an edit the selected type can be left incompatible with the
    /// code. This moves it to the first compatible type in canonical
    /// order. Returns true if the type changed.
    pub fn ensure_compatible_type(&mut self) -> bool {
        if self.code_type.is_compatible(&self.code) {
            return false;
        }
        self.code_type = CodeType::first_compatible(&self.code);
        self.touch();
        true
    }

    /// Background color parsed to RGB, falling back to the default
    pub fn background_rgb(&self) -> Rgb {
        Rgb::from_hex(&self.background_color).unwrap_or(Rgb {
            r: 0x1C,
            g: 0x1C,
            b: 0x1E,
        })
    }

    /// Text color parsed to RGB, falling back to the default
    pub fn text_rgb(&self) -> Rgb {
        Rgb::from_hex(&self.text_color).unwrap_or(Rgb {
            r: 0xFF,
            g: 0xFF,
            b: 0xFF,
        })
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse a `#RRGGBB` string (leading `#` optional)
    pub fn from_hex(hex: &str) -> Option<Rgb> {
        let cleaned = hex.trim().trim_start_matches('#');
        if cleaned.len() != 6 || !cleaned.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(cleaned, 16).ok()?;
        Some(Rgb {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        })
    }

    /// Format as `#RRGGBB`
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Base64 (de)serialization for optional binary blobs in JSON
///
/// Keeps image data inline in backup files the way the original wire
/// format carries it.
pub(crate) mod base64_blob {
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(blob: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match blob {
            Some(bytes) => serializer.serialize_str(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(text) => STANDARD
                .decode(text.as_bytes())
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
