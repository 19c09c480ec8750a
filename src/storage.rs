// SPDX-License-Identifier: GPL-3.0-only

//! JSON-file card store
//!
//! A minimal persistence layer for the CLI: the whole collection lives
//! in one JSON file under the user data directory, loaded and saved
//! wholesale. The store also applies the import duplicate policy, which
//! by design belongs to the caller of the export service rather than
//! the service itself.

use crate::card::Card;
use crate::constants::APP_DIR;
use crate::errors::{AppError, AppResult};
use crate::export::ImportSummary;
use std::cmp::Reverse;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// File-backed collection of cards
pub struct CardStore {
    path: PathBuf,
    cards: Vec<Card>,
}

impl CardStore {
    /// Default store location under the user data directory
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("cards.json")
    }

    /// Open a store file; a missing file is an empty collection
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        if !path.exists() {
            debug!(path = ?path, "No card store yet, starting empty");
            return Ok(Self {
                path,
                cards: Vec::new(),
            });
        }

        let data = std::fs::read(&path)?;
        let cards: Vec<Card> = serde_json::from_slice(&data)
            .map_err(|e| AppError::Storage(format!("card store is not valid JSON: {e}")))?;
        debug!(path = ?path, count = cards.len(), "Loaded card store");
        Ok(Self { path, cards })
    }

    /// Write the collection back to its file, creating parent directories
    pub fn save(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(&self.cards)
            .map_err(|e| AppError::Storage(e.to_string()))?;
        std::fs::write(&self.path, data)?;
        debug!(path = ?self.path, count = self.cards.len(), "Saved card store");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn get(&self, id: Uuid) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id == id)
    }

    /// Remove and return the card with the given id
    pub fn remove(&mut self, id: Uuid) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.id == id)?;
        Some(self.cards.remove(index))
    }

    /// Cards ordered most recently updated first
    pub fn sorted_recent_first(&self) -> Vec<&Card> {
        let mut cards: Vec<&Card> = self.cards.iter().collect();
        cards.sort_by_key(|c| Reverse(c.updated_at));
        cards
    }

    /// Merge imported cards, skipping exact code duplicates
    ///
    /// The duplicate key is the exact `code` string against the codes
    /// present before the merge started — nothing else. Name, id and
    /// symbology collisions are not checked, and a skipped card is
    /// counted, not merged or overwritten.
    pub fn merge_cards(&mut self, incoming: Vec<Card>) -> ImportSummary {
        let existing: HashSet<String> = self.cards.iter().map(|c| c.code.clone()).collect();
        let mut summary = ImportSummary::default();

        for card in incoming {
            if existing.contains(&card.code) {
                debug!(code = %card.code, name = %card.name, "Skipping duplicate card");
                summary.skipped += 1;
            } else {
                self.cards.push(card);
                summary.inserted += 1;
            }
        }

        debug!(
            inserted = summary.inserted,
            skipped = summary.skipped,
            "Merged imported cards"
        );
        summary
    }
}
