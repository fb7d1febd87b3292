// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A division with the same key already exists.
    DivisionExists {
        organization: String,
        abbreviation: String,
    },
    /// The requested division was not found.
    NotFound {
        organization: String,
        abbreviation: String,
    },
    /// Reading or writing the backing file failed.
    IoError(String),
    /// Serialization/deserialization error.
    SerializationError(String),
    /// Initialization error.
    InitializationError(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionExists {
                organization,
                abbreviation,
            } => write!(
                f,
                "Division '{abbreviation}' already exists in organization '{organization}'"
            ),
            Self::NotFound {
                organization,
                abbreviation,
            } => write!(
                f,
                "Division '{abbreviation}' not found in organization '{organization}'"
            ),
            Self::IoError(msg) => write!(f, "I/O error: {msg}"),
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<std::io::Error> for PersistenceError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
