// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Division repository for the league standings tracker.
//!
//! A division is stored as one aggregate together with its schedule and
//! standings, so saving or deleting a division always saves or deletes
//! both collections with it.
//!
//! ## Backend Support
//!
//! - **memory**: in-process map, used by tests and one-shot runs
//! - **document** (default): a single JSON file rewritten atomically on
//!   every save
//!
//! Backend selection happens once at construction time and is transparent
//! to callers. See the `backend` module for details.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use sbt_domain::{Division, DivisionKey, GameId, Schedule};
use tracing::info;

mod backend;
mod error;
mod queries;

#[cfg(test)]
mod tests;

pub use backend::BackendKind;
pub use backend::document::DOCUMENT_VERSION;
pub use error::PersistenceError;

use backend::DivisionStore;
use backend::document::DocumentStore;
use backend::memory::MemoryStore;

/// How `save_division` should treat the division it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    /// Store a new division; the key must be free.
    Create,
    /// Overwrite an existing division, schedule and standings included.
    Update,
    /// Remove an existing division with its schedule and standings.
    Delete,
}

/// Internal enum for the active storage backend.
enum Backend {
    Memory(MemoryStore),
    Document(DocumentStore),
}

/// Persistence adapter for divisions.
pub struct Persistence {
    backend: Backend,
}

impl Persistence {
    /// Creates a new persistence adapter backed by process memory.
    #[must_use]
    pub fn new_in_memory() -> Self {
        info!("Initializing in-memory division store");
        Self {
            backend: Backend::Memory(MemoryStore::new()),
        }
    }

    /// Creates a new persistence adapter backed by a JSON document file.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the document file; created if missing
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or created.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        Ok(Self {
            backend: Backend::Document(DocumentStore::open(path)?),
        })
    }

    /// Creates a persistence adapter for the requested backend.
    ///
    /// # Arguments
    ///
    /// * `kind` - The backend to use
    /// * `data_file` - The document path; required for `BackendKind::Document`
    ///
    /// # Errors
    ///
    /// Returns an error if the document backend is requested without a path
    /// or the document cannot be opened.
    pub fn open(kind: BackendKind, data_file: Option<&Path>) -> Result<Self, PersistenceError> {
        match kind {
            BackendKind::Memory => Ok(Self::new_in_memory()),
            BackendKind::Document => {
                let path: &Path = data_file.ok_or_else(|| {
                    PersistenceError::InitializationError(String::from(
                        "The document backend requires a data file path",
                    ))
                })?;
                Self::new_with_file(path)
            }
        }
    }

    /// Returns which backend this adapter is using.
    #[must_use]
    pub const fn backend_kind(&self) -> BackendKind {
        match &self.backend {
            Backend::Memory(_) => BackendKind::Memory,
            Backend::Document(_) => BackendKind::Document,
        }
    }

    fn store(&self) -> &dyn DivisionStore {
        match &self.backend {
            Backend::Memory(store) => store,
            Backend::Document(store) => store,
        }
    }

    fn store_mut(&mut self) -> &mut dyn DivisionStore {
        match &mut self.backend {
            Backend::Memory(store) => store,
            Backend::Document(store) => store,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns whether a division exists for the key (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    pub fn division_exists(
        &self,
        organization: &str,
        abbreviation: &str,
    ) -> Result<bool, PersistenceError> {
        Ok(self.get_division(organization, abbreviation)?.is_some())
    }

    /// Retrieves a division with its schedule and standings.
    ///
    /// # Returns
    ///
    /// `None` if no division has this key.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    pub fn get_division(
        &self,
        organization: &str,
        abbreviation: &str,
    ) -> Result<Option<Division>, PersistenceError> {
        self.store()
            .get(&DivisionKey::new(organization, abbreviation))
    }

    /// Lists every division of an organization (case-insensitive).
    ///
    /// # Returns
    ///
    /// A possibly empty list ordered by abbreviation.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    pub fn get_division_list(&self, organization: &str) -> Result<Vec<Division>, PersistenceError> {
        self.store().list(organization)
    }

    /// Lists every game played on the same day and field as `game_id`.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the division does not exist.
    pub fn get_games(
        &self,
        organization: &str,
        abbreviation: &str,
        game_id: GameId,
    ) -> Result<Vec<Schedule>, PersistenceError> {
        let division: Division =
            self.get_division(organization, abbreviation)?
                .ok_or_else(|| PersistenceError::NotFound {
                    organization: organization.to_string(),
                    abbreviation: abbreviation.to_string(),
                })?;
        Ok(queries::games::games_on_same_day_and_field(
            &division, game_id,
        ))
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Creates, updates, or deletes a division.
    ///
    /// # Arguments
    ///
    /// * `division` - The division to save
    /// * `mode` - Whether to create, overwrite, or delete it
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::DivisionExists` when creating over an
    /// existing key, `PersistenceError::NotFound` when updating or deleting
    /// a missing key, or an I/O error from the document backend.
    pub fn save_division(
        &mut self,
        division: &Division,
        mode: SaveMode,
    ) -> Result<(), PersistenceError> {
        let store: &mut dyn DivisionStore = self.store_mut();
        match mode {
            SaveMode::Create => store.insert(division)?,
            SaveMode::Update => store.replace(division)?,
            SaveMode::Delete => store.remove(&division.key())?,
        }
        info!(
            organization = %division.organization,
            abbreviation = %division.abbreviation,
            ?mode,
            teams = division.standings.len(),
            games = division.schedule.len(),
            "Saved division"
        );
        Ok(())
    }
}
