// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage backends.
//!
//! ## Backend Support
//!
//! - `memory`: in-process map, lost when the process exits
//! - `document`: JSON document persisted to a single file
//!
//! Both backends key divisions by the lowercased
//! `(organization, abbreviation)` pair, so lookups are case-insensitive.
//! Create/update/delete rules are enforced here rather than by callers.

pub mod document;
pub mod memory;

use sbt_domain::{Division, DivisionKey};

use crate::error::PersistenceError;

/// Trait for backend-specific division storage.
///
/// Implemented by every backend so the `Persistence` adapter can dispatch
/// with a single `match` per operation.
pub trait DivisionStore {
    /// Returns a copy of the division with the given key, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &DivisionKey) -> Result<Option<Division>, PersistenceError>;

    /// Returns every division of an organization, ordered by abbreviation.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn list(&self, organization: &str) -> Result<Vec<Division>, PersistenceError>;

    /// Stores a new division.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::DivisionExists` if the key is taken.
    fn insert(&mut self, division: &Division) -> Result<(), PersistenceError>;

    /// Replaces an existing division, including its schedule and standings.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if no division has this key.
    fn replace(&mut self, division: &Division) -> Result<(), PersistenceError>;

    /// Removes a division together with its schedule and standings.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if no division has this key.
    fn remove(&mut self, key: &DivisionKey) -> Result<(), PersistenceError>;
}

/// The storage backends a `Persistence` adapter can be built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// In-process, non-durable storage.
    Memory,
    /// Single-file JSON document storage.
    #[default]
    Document,
}

impl BackendKind {
    /// All selectable backends.
    pub const ALL: [Self; 2] = [Self::Memory, Self::Document];

    /// Returns the lowercase name used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Document => "document",
        }
    }

    /// Parses a backend name, ignoring case.
    ///
    /// Unrecognized names resolve to the default backend when `use_default`
    /// is set, and to `None` otherwise.
    #[must_use]
    pub fn parse_or_default(value: &str, use_default: bool) -> Option<Self> {
        let wanted: String = value.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .or_else(|| use_default.then(Self::default))
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
