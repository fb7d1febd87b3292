// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use sbt_domain::{GameId, TeamId};

/// A schedule file could not be parsed.
///
/// `line_number` is the last line the section scanner advanced to: the
/// first team line (4) when the file is empty or the team list is broken,
/// and the blank separator's index for failures inside the game section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 0-based scanner position at the time of failure.
    pub line_number: usize,
    /// What went wrong.
    pub detail: String,
}

impl ParseError {
    /// Creates a new `ParseError`.
    #[must_use]
    pub fn new(line_number: usize, detail: impl Into<String>) -> Self {
        Self {
            line_number,
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line number: {} {}", self.line_number, self.detail)
    }
}

impl std::error::Error for ParseError {}

/// Errors that can occur while recalculating standings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A schedule row references a team that has no standings row.
    UnknownTeam {
        /// The offending schedule row.
        game_id: GameId,
        /// The referenced team id.
        team_id: TeamId,
    },
    /// Two standings rows share a team id.
    DuplicateTeam(TeamId),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTeam { game_id, team_id } => {
                write!(
                    f,
                    "Game {game_id} references team {team_id}, which is not in the standings"
                )
            }
            Self::DuplicateTeam(team_id) => {
                write!(f, "Team {team_id} appears more than once in the standings")
            }
        }
    }
}

impl std::error::Error for CoreError {}
