// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for card management
//!
//! This module provides command-line functionality for:
//! - Listing, adding, inspecting and removing cards
//! - Scanning a code from an image file
//! - Exporting and importing backup files

use cardbox::card::{Card, DisplayMode};
use cardbox::codetype::CodeType;
use cardbox::config::Config;
use cardbox::export::{backup_filename, export_cards, import_cards};
use cardbox::scan::ImageScanner;
use cardbox::storage::CardStore;
use chrono::Local;
use std::path::PathBuf;
use uuid::Uuid;

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// List all stored cards, most recently updated first
pub fn list_cards(store: Option<PathBuf>) -> CliResult {
    let store = open_store(store)?;

    if store.is_empty() {
        println!("No cards yet.");
        return Ok(());
    }

    println!("Cards:");
    println!();
    for (index, card) in store.sorted_recent_first().iter().enumerate() {
        println!("  [{}] {}", index, card.name);
        println!(
            "      Code: {} ({}, {})",
            card.code,
            card.code_type,
            card.display_mode.display_name()
        );
        if let Some(notes) = &card.notes {
            println!("      Notes: {}", notes);
        }
        println!("      Id: {}", card.id);
        println!();
    }

    Ok(())
}

/// Add a new card to the store
pub fn add_card(
    name: String,
    code: String,
    code_type: Option<String>,
    notes: Option<String>,
    text_only: bool,
    store: Option<PathBuf>,
) -> CliResult {
    let config = Config::load();
    let mut store = open_store(store)?;

    let requested = match code_type {
        Some(input) => parse_code_type(&input).ok_or_else(|| {
            format!(
                "unknown code type '{}' (expected one of: {})",
                input,
                type_names().join(", ")
            )
        })?,
        None => CodeType::default(),
    };

    let mut card = Card::new(name, code)
        .with_code_type(requested)
        .with_colors(config.default_background_color, config.default_text_color);
    if let Some(notes) = notes {
        card = card.with_notes(notes);
    }
    if text_only {
        card = card.with_display_mode(DisplayMode::Text);
    }

    if !card.is_valid() {
        return Err("name and code must not be empty".into());
    }

    // A type that cannot encode the code is moved to the first one that can
    if !requested.is_compatible(&card.code) {
        let corrected = CodeType::first_compatible(&card.code);
        eprintln!(
            "Note: {} cannot encode this code, using {} instead",
            requested, corrected
        );
        card.code_type = corrected;
    }

    store.add(card.clone());
    store.save()?;

    println!("Added card '{}' ({})", card.name, card.id);
    Ok(())
}

/// Show one card's details
pub fn show_card(selector: String, store: Option<PathBuf>) -> CliResult {
    let store = open_store(store)?;
    let card = find_card(&store, &selector)
        .ok_or_else(|| format!("no card matches '{}'", selector))?;

    println!("{}", card.name);
    println!("  Code: {}", card.code);
    println!("  Type: {}", card.code_type);
    println!("  Display: {}", card.display_mode.display_name());
    if let Some(notes) = &card.notes {
        println!("  Notes: {}", notes);
    }
    println!("  Colors: {} on {}", card.text_color, card.background_color);
    if let Some(image) = &card.custom_image {
        println!("  Custom image: {} bytes", image.len());
    }
    println!("  Created: {}", card.created_at.format("%Y-%m-%d %H:%M"));
    println!("  Updated: {}", card.updated_at.format("%Y-%m-%d %H:%M"));
    println!("  Id: {}", card.id);

    Ok(())
}

/// Edit fields of an existing card
pub fn edit_card(
    selector: String,
    name: Option<String>,
    code: Option<String>,
    code_type: Option<String>,
    notes: Option<String>,
    store: Option<PathBuf>,
) -> CliResult {
    let mut store = open_store(store)?;
    let id = find_card(&store, &selector)
        .map(|c| c.id)
        .ok_or_else(|| format!("no card matches '{}'", selector))?;

    let requested = code_type
        .map(|input| {
            parse_code_type(&input).ok_or_else(|| {
                format!(
                    "unknown code type '{}' (expected one of: {})",
                    input,
                    type_names().join(", ")
                )
            })
        })
        .transpose()?;

    let card = store.get_mut(id).expect("card was just found");
    if let Some(name) = name {
        card.set_name(name);
    }
    if let Some(code) = code {
        card.set_code(code);
    }
    if let Some(code_type) = requested {
        card.set_code_type(code_type);
    }
    if let Some(notes) = notes {
        card.set_notes(Some(notes));
    }

    if !card.is_valid() {
        return Err("name and code must not be empty".into());
    }
    if card.ensure_compatible_type() {
        eprintln!("Note: switched to {} to match the new code", card.code_type);
    }

    let name = card.name.clone();
    store.save()?;

    println!("Updated card '{}'", name);
    Ok(())
}

/// Remove a card from the store
pub fn remove_card(selector: String, store: Option<PathBuf>) -> CliResult {
    let mut store = open_store(store)?;
    let id = find_card(&store, &selector)
        .map(|c| c.id)
        .ok_or_else(|| format!("no card matches '{}'", selector))?;

    let removed = store.remove(id).expect("card was just found");
    store.save()?;

    println!("Removed card '{}'", removed.name);
    Ok(())
}

/// Scan a barcode from an image file, optionally storing it as a card
pub fn scan_image(image: PathBuf, name: Option<String>, store: Option<PathBuf>) -> CliResult {
    let data = std::fs::read(&image)?;
    let result = ImageScanner::new().scan_bytes(&data)?;

    println!("Detected {}: {}", result.code_type, result.code);

    if let Some(name) = name {
        let config = Config::load();
        let mut store = open_store(store)?;
        let card = Card::new(name, result.code)
            .with_code_type(result.code_type)
            .with_colors(config.default_background_color, config.default_text_color);
        if !card.is_valid() {
            return Err("name must not be empty".into());
        }
        store.add(card.clone());
        store.save()?;
        println!("Added card '{}' ({})", card.name, card.id);
    }

    Ok(())
}

/// Export all cards to a backup file
pub fn export_backup(output: Option<PathBuf>, store: Option<PathBuf>) -> CliResult {
    let store = open_store(store)?;
    let bytes = export_cards(store.cards())?;

    let path = output.unwrap_or_else(|| PathBuf::from(backup_filename(Local::now())));
    std::fs::write(&path, bytes)?;

    println!("Exported {} card(s) to {}", store.len(), path.display());
    Ok(())
}

/// Import cards from a backup file
pub fn import_backup(file: PathBuf, store: Option<PathBuf>) -> CliResult {
    let data = std::fs::read(&file)?;
    let cards = import_cards(&data)?;

    let mut store = open_store(store)?;
    let summary = store.merge_cards(cards);
    store.save()?;

    if summary.skipped > 0 {
        println!(
            "Imported {} card(s), skipped {} duplicate(s)",
            summary.inserted, summary.skipped
        );
    } else {
        println!("Imported {} card(s)", summary.inserted);
    }
    Ok(())
}

// Helpers

fn open_store(path_override: Option<PathBuf>) -> Result<CardStore, Box<dyn std::error::Error>> {
    let path = path_override
        .or_else(|| Config::load().store_path)
        .unwrap_or_else(CardStore::default_path);
    Ok(CardStore::open(path)?)
}

/// Accepts generator identifiers ("ean13") and display labels ("EAN-13")
fn parse_code_type(input: &str) -> Option<CodeType> {
    let input = input.trim();
    CodeType::ALL.iter().copied().find(|t| {
        t.generator_id().eq_ignore_ascii_case(input) || t.display_name().eq_ignore_ascii_case(input)
    })
}

fn type_names() -> Vec<&'static str> {
    CodeType::ALL.iter().map(|t| t.generator_id()).collect()
}

/// Resolve a card by full id, id prefix, or exact name
fn find_card<'a>(store: &'a CardStore, selector: &str) -> Option<&'a Card> {
    if let Ok(id) = Uuid::parse_str(selector) {
        return store.get(id);
    }
    store
        .cards()
        .iter()
        .find(|c| c.name == selector)
        .or_else(|| {
            store
                .cards()
                .iter()
                .find(|c| c.id.to_string().starts_with(selector))
        })
}
