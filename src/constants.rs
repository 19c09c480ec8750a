// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

/// Directory name used under the user's config and data directories
pub const APP_DIR: &str = "cardbox";

/// Default card background color (hex, dark gray)
pub const DEFAULT_BACKGROUND_COLOR: &str = "#1C1C1E";

/// Default card text color (hex, white)
pub const DEFAULT_TEXT_COLOR: &str = "#FFFFFF";

/// Current backup file format version
///
/// Import rejects any other version outright instead of attempting a
/// best-effort parse.
pub const EXPORT_FORMAT_VERSION: u32 = 1;

/// Filename prefix for generated backup files
pub const BACKUP_FILE_PREFIX: &str = "cardbox_backup";

/// File extension for generated backup files
pub const BACKUP_FILE_EXTENSION: &str = "json";

/// Photos larger than this on either axis are downscaled before barcode
/// detection. Printed codes survive the reduction and the detector is
/// much faster on the smaller buffer.
pub const MAX_SCAN_DIMENSION: u32 = 1280;
