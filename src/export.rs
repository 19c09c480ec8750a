// SPDX-License-Identifier: GPL-3.0-only

//! Card backup export and import
//!
//! Backups are a versioned JSON envelope with camelCase keys, ISO-8601
//! timestamps and base64 image blobs. Export is deterministic (fixed
//! key order) so backups diff cleanly. Import is all-or-nothing: a
//! malformed file or an unknown version inserts nothing.
//!
//! Duplicate resolution deliberately lives with the caller, not here:
//! the service hands back fully reconstructed cards, and the store
//! decides which to keep (see `CardStore::merge_cards`).

use crate::card::{Card, DisplayMode, base64_blob};
use crate::codetype::CodeType;
use crate::constants::{BACKUP_FILE_EXTENSION, BACKUP_FILE_PREFIX, EXPORT_FORMAT_VERSION};
use crate::errors::{ExportError, ImportError};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Versioned backup envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardExport {
    /// Format version; readers reject anything but the current one
    pub version: u32,
    /// Version of the app that wrote the file
    pub app_version: String,
    /// When the file was written
    pub exported_at: DateTime<Utc>,
    pub cards: Vec<CardData>,
}

impl CardExport {
    /// Wrap a card collection in a current-version envelope
    pub fn new(cards: &[Card]) -> Self {
        Self {
            version: EXPORT_FORMAT_VERSION,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            cards: cards.iter().map(CardData::from_card).collect(),
        }
    }

    /// Serialize to pretty-printed JSON bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, ExportError> {
        serde_json::to_vec_pretty(self).map_err(|e| ExportError::EncodingFailed(e.to_string()))
    }
}

/// Flattened, fully serializable projection of a card
///
/// `code_type` and `display_mode` are carried as their wire labels and
/// resolved leniently on reconstruction: an unknown label falls back to
/// the default instead of failing the whole import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub code_type: String,
    pub display_mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub background_color: String,
    pub text_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "base64_blob")]
    pub custom_image: Option<Vec<u8>>,
    pub created_at: DateTime<Utc>,
}

impl CardData {
    /// Project a card onto the wire format
    pub fn from_card(card: &Card) -> Self {
        Self {
            id: card.id,
            name: card.name.clone(),
            code: card.code.clone(),
            code_type: card.code_type.display_name().to_string(),
            display_mode: card.display_mode.display_name().to_string(),
            notes: card.notes.clone(),
            background_color: card.background_color.clone(),
            text_color: card.text_color.clone(),
            custom_image: card.custom_image.clone(),
            created_at: card.created_at,
        }
    }

    /// Reconstruct a card, regenerating nothing
    ///
    /// The id and creation timestamp come verbatim from the file; the
    /// wire format does not carry `updated_at`, so it starts equal to
    /// `created_at`. Re-importing an export is therefore an identity
    /// operation (absent duplicate filtering).
    pub fn into_card(self) -> Card {
        let code_type = CodeType::from_label(&self.code_type).unwrap_or_default();
        let display_mode = DisplayMode::from_label(&self.display_mode).unwrap_or_default();
        Card {
            id: self.id,
            name: self.name,
            code: self.code,
            code_type,
            display_mode,
            notes: self.notes,
            background_color: self.background_color,
            text_color: self.text_color,
            custom_image: self.custom_image,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// Counts reported after merging an import into an existing collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportSummary {
    /// Cards added to the collection
    pub inserted: usize,
    /// Cards skipped because their code already existed
    pub skipped: usize,
}

/// Export a card collection to backup file bytes
pub fn export_cards(cards: &[Card]) -> Result<Vec<u8>, ExportError> {
    let export = CardExport::new(cards);
    let bytes = export.to_bytes()?;
    debug!(count = export.cards.len(), size = bytes.len(), "Exported cards");
    Ok(bytes)
}

/// Import cards from backup file bytes
///
/// The version is checked before any card is decoded; a mismatched file
/// is rejected whole rather than parsed best-effort.
pub fn import_cards(data: &[u8]) -> Result<Vec<Card>, ImportError> {
    let value: serde_json::Value =
        serde_json::from_slice(data).map_err(|_| ImportError::DecodingFailed)?;

    let version = value
        .get("version")
        .and_then(|v| v.as_u64())
        .ok_or(ImportError::DecodingFailed)?;
    if version != u64::from(EXPORT_FORMAT_VERSION) {
        return Err(ImportError::UnsupportedVersion(
            u32::try_from(version).unwrap_or(u32::MAX),
        ));
    }

    let export: CardExport =
        serde_json::from_value(value).map_err(|_| ImportError::DecodingFailed)?;

    debug!(
        count = export.cards.len(),
        app_version = %export.app_version,
        "Decoded card backup"
    );

    Ok(export.cards.into_iter().map(CardData::into_card).collect())
}

/// Timestamped filename for a new backup file
pub fn backup_filename(now: DateTime<Local>) -> String {
    format!(
        "{}_{}.{}",
        BACKUP_FILE_PREFIX,
        now.format("%Y-%m-%d_%H%M%S"),
        BACKUP_FILE_EXTENSION
    )
}
