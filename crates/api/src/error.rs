// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use sbt::{CoreError, ParseError};
use sbt_domain::DomainError;
use sbt_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
/// Every variant displays as the message shown to the person using the
/// service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A division with the requested abbreviation already exists.
    DivisionExists {
        /// The abbreviation that is taken.
        abbreviation: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// The full message describing what was not found.
        message: String,
    },
    /// A schedule file could not be parsed.
    ScheduleFile {
        /// The name the file was uploaded as.
        file_name: String,
        /// Where and why parsing stopped.
        error: ParseError,
    },
    /// A score submission was rejected.
    InvalidScores {
        /// One or more sentences describing the problem.
        message: String,
    },
    /// Score reporting was attempted on a locked division.
    DivisionLocked {
        /// The locked division.
        abbreviation: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::DivisionExists { abbreviation } => write!(
                f,
                "Unable to create division because a division already exists with the Abbreviation '{abbreviation}'."
            ),
            Self::ResourceNotFound { message, .. } | Self::InvalidScores { message } => {
                write!(f, "{message}")
            }
            Self::ScheduleFile { file_name, error } => {
                write!(
                    f,
                    "Failure loading schedule from {file_name}. Error message: {error}"
                )
            }
            Self::DivisionLocked { abbreviation } => {
                write!(
                    f,
                    "Unable to save scores: division \"{abbreviation}\" is locked."
                )
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidOrganization(msg) => ApiError::InvalidInput {
            field: String::from("organization"),
            message: msg,
        },
        DomainError::InvalidAbbreviation(msg) => ApiError::InvalidInput {
            field: String::from("abbreviation"),
            message: msg,
        },
        DomainError::InvalidLeague(msg) => ApiError::InvalidInput {
            field: String::from("league"),
            message: msg,
        },
        DomainError::InvalidNameOrNumber(msg) => ApiError::InvalidInput {
            field: String::from("name_or_number"),
            message: msg,
        },
        DomainError::InvalidForfeitScores(msg) => ApiError::InvalidScores {
            message: msg.trim_end().to_string(),
        },
        err @ DomainError::IncompleteScore { .. } => ApiError::InvalidScores {
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
///
/// Every core error is a stored-data defect, such as a schedule row that
/// references a team missing from the standings, and surfaces as `Internal`.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    ApiError::Internal {
        message: err.to_string(),
    }
}

/// Translates a persistence error into an API error.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::DivisionExists { abbreviation, .. } => {
            ApiError::DivisionExists { abbreviation }
        }
        PersistenceError::NotFound {
            organization,
            abbreviation,
        } => ApiError::ResourceNotFound {
            resource_type: String::from("Division"),
            message: format!(
                "No division exists with the Abbreviation '{abbreviation}' in organization '{organization}'."
            ),
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
