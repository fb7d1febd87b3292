// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use sbt_domain::{Division, DivisionKey, key_matches};
use tracing::debug;

use super::DivisionStore;
use crate::error::PersistenceError;

/// In-process division storage.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    divisions: BTreeMap<(String, String), Division>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from previously saved divisions.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::DivisionExists` if two divisions share a key.
    pub fn from_divisions(divisions: Vec<Division>) -> Result<Self, PersistenceError> {
        let mut store: Self = Self::new();
        for division in divisions {
            store.insert(&division)?;
        }
        Ok(store)
    }

    /// Iterates over every stored division in key order.
    pub fn divisions(&self) -> impl Iterator<Item = &Division> {
        self.divisions.values()
    }

    /// Returns the number of stored divisions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.divisions.len()
    }
}

impl DivisionStore for MemoryStore {
    fn get(&self, key: &DivisionKey) -> Result<Option<Division>, PersistenceError> {
        Ok(self.divisions.get(&key.normalized()).cloned())
    }

    fn list(&self, organization: &str) -> Result<Vec<Division>, PersistenceError> {
        Ok(self
            .divisions
            .values()
            .filter(|division| key_matches(&division.organization, organization))
            .cloned()
            .collect())
    }

    fn insert(&mut self, division: &Division) -> Result<(), PersistenceError> {
        let key: DivisionKey = division.key();
        let normalized: (String, String) = key.normalized();
        if self.divisions.contains_key(&normalized) {
            return Err(PersistenceError::DivisionExists {
                organization: division.organization.clone(),
                abbreviation: division.abbreviation.clone(),
            });
        }
        debug!(division = %key, "Inserting division");
        self.divisions.insert(normalized, division.clone());
        Ok(())
    }

    fn replace(&mut self, division: &Division) -> Result<(), PersistenceError> {
        let key: DivisionKey = division.key();
        match self.divisions.get_mut(&key.normalized()) {
            Some(stored) => {
                debug!(division = %key, "Replacing division");
                stored.clone_from(division);
                Ok(())
            }
            None => Err(PersistenceError::NotFound {
                organization: division.organization.clone(),
                abbreviation: division.abbreviation.clone(),
            }),
        }
    }

    fn remove(&mut self, key: &DivisionKey) -> Result<(), PersistenceError> {
        if self.divisions.remove(&key.normalized()).is_none() {
            return Err(PersistenceError::NotFound {
                organization: key.organization().to_string(),
                abbreviation: key.abbreviation().to_string(),
            });
        }
        debug!(division = %key, "Removed division");
        Ok(())
    }
}
