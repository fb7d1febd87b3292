// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON document backend.
//!
//! All divisions of every organization live in one JSON file. The file is
//! read once when the store is opened and rewritten in full after every
//! successful mutation. Writes go to a sibling temporary file that is then
//! renamed over the original, so a crash mid-write leaves the previous
//! document intact.

use std::fs;
use std::path::{Path, PathBuf};

use sbt_domain::{Division, DivisionKey};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::DivisionStore;
use super::memory::MemoryStore;
use crate::error::PersistenceError;

/// Current on-disk document layout.
pub const DOCUMENT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct DivisionDocument {
    version: u32,
    divisions: Vec<Division>,
}

/// File-backed division storage.
#[derive(Debug)]
pub struct DocumentStore {
    path: PathBuf,
    cache: MemoryStore,
}

impl DocumentStore {
    /// Opens the document at `path`, creating an empty one if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// was written by an unsupported document version.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path: PathBuf = path.as_ref().to_path_buf();
        info!("Opening division document at: {}", path.display());

        if !path.exists() {
            let store: Self = Self {
                path,
                cache: MemoryStore::new(),
            };
            store.flush()?;
            return Ok(store);
        }

        let bytes: Vec<u8> = fs::read(&path)?;
        let document: DivisionDocument = serde_json::from_slice(&bytes)?;
        if document.version != DOCUMENT_VERSION {
            return Err(PersistenceError::InitializationError(format!(
                "Unsupported document version {} in {} (expected {DOCUMENT_VERSION})",
                document.version,
                path.display()
            )));
        }

        let cache: MemoryStore = MemoryStore::from_divisions(document.divisions)?;
        info!(divisions = cache.len(), "Loaded division document");
        Ok(Self { path, cache })
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn flush(&self) -> Result<(), PersistenceError> {
        let document: DivisionDocument = DivisionDocument {
            version: DOCUMENT_VERSION,
            divisions: self.cache.divisions().cloned().collect(),
        };
        let bytes: Vec<u8> = serde_json::to_vec_pretty(&document)?;

        let temp: PathBuf = self.temp_path();
        fs::write(&temp, bytes)?;
        fs::rename(&temp, &self.path)?;
        debug!(
            divisions = document.divisions.len(),
            "Wrote division document"
        );
        Ok(())
    }

    /// Writes `next` to disk and only then makes it the live state.
    fn commit(&mut self, next: MemoryStore) -> Result<(), PersistenceError> {
        let previous: MemoryStore = std::mem::replace(&mut self.cache, next);
        if let Err(err) = self.flush() {
            self.cache = previous;
            return Err(err);
        }
        Ok(())
    }
}

impl DivisionStore for DocumentStore {
    fn get(&self, key: &DivisionKey) -> Result<Option<Division>, PersistenceError> {
        self.cache.get(key)
    }

    fn list(&self, organization: &str) -> Result<Vec<Division>, PersistenceError> {
        self.cache.list(organization)
    }

    fn insert(&mut self, division: &Division) -> Result<(), PersistenceError> {
        let mut next: MemoryStore = self.cache.clone();
        next.insert(division)?;
        self.commit(next)
    }

    fn replace(&mut self, division: &Division) -> Result<(), PersistenceError> {
        let mut next: MemoryStore = self.cache.clone();
        next.replace(division)?;
        self.commit(next)
    }

    fn remove(&mut self, key: &DivisionKey) -> Result<(), PersistenceError> {
        let mut next: MemoryStore = self.cache.clone();
        next.remove(key)?;
        self.commit(next)
    }
}
