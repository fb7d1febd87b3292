// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::DomainError;
pub use types::{
    Division, DivisionKey, GameId, Schedule, ScoreUpdate, Standings, TeamId, key_matches,
};
pub use validation::{
    ABBREVIATION_MAX_LEN, ABBREVIATION_MIN_LEN, validate_abbreviation,
    validate_descriptive_fields, validate_division_fields, validate_organization,
    validate_score_updates,
};
