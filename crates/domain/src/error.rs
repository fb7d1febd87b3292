// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::GameId;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Organization is empty or contains disallowed characters.
    InvalidOrganization(String),
    /// Abbreviation is empty, too short, too long, or contains disallowed characters.
    InvalidAbbreviation(String),
    /// League is empty or contains disallowed characters.
    InvalidLeague(String),
    /// Name or number is empty or contains disallowed characters.
    InvalidNameOrNumber(String),
    /// One or more forfeit games carry the wrong score.
    ///
    /// The payload holds one sentence per offending game.
    InvalidForfeitScores(String),
    /// Only one of the two scores was reported for a game.
    IncompleteScore {
        /// The game the partial score was submitted for.
        game_id: GameId,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOrganization(msg) => write!(f, "Invalid organization: {msg}"),
            Self::InvalidAbbreviation(msg) => write!(f, "Invalid abbreviation: {msg}"),
            Self::InvalidLeague(msg) => write!(f, "Invalid league: {msg}"),
            Self::InvalidNameOrNumber(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidForfeitScores(msg) => write!(f, "{}", msg.trim_end()),
            Self::IncompleteScore { game_id } => {
                write!(
                    f,
                    "Both scores must be entered for game {game_id}, or neither"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
