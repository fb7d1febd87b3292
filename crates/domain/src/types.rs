// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::{Date, PrimitiveDateTime, Time};

/// 1-based team ordinal, assigned in schedule file order.
pub type TeamId = u16;

/// Sequential schedule row identifier, starting at 0.
pub type GameId = u32;

/// Compares two key components the way division lookups do (case-insensitive).
#[must_use]
pub fn key_matches(left: &str, right: &str) -> bool {
    left.to_lowercase() == right.to_lowercase()
}

/// The natural key of a division.
///
/// Stores compare keys through `normalized`, so `("Demo", "CS01")` and
/// `("demo", "cs01")` identify the same division.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DivisionKey {
    /// The owning organization.
    organization: String,
    /// The short, URL-friendly division code.
    abbreviation: String,
}

impl DivisionKey {
    /// Creates a new `DivisionKey`.
    #[must_use]
    pub fn new(organization: &str, abbreviation: &str) -> Self {
        Self {
            organization: organization.to_string(),
            abbreviation: abbreviation.to_string(),
        }
    }

    /// Returns the organization as given.
    #[must_use]
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Returns the abbreviation as given.
    #[must_use]
    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    /// Returns the lowercased `(organization, abbreviation)` pair used for storage ordering.
    #[must_use]
    pub fn normalized(&self) -> (String, String) {
        (
            self.organization.to_lowercase(),
            self.abbreviation.to_lowercase(),
        )
    }
}

impl std::fmt::Display for DivisionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.organization, self.abbreviation)
    }
}

/// One season of a league, owning its schedule and standings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Division {
    /// Part of the natural key.
    pub organization: String,
    /// Part of the natural key. Unique within an organization.
    pub abbreviation: String,
    /// Free-text league name.
    pub league: String,
    /// Free-text division name or number.
    pub name_or_number: String,
    /// Wall-clock time (US Eastern) of the last mutating operation.
    pub updated: PrimitiveDateTime,
    /// Advisory flag: score reporting should be refused while set.
    pub locked: bool,
    /// One row per team, ordered by team id.
    pub standings: Vec<Standings>,
    /// Games and week-boundary rows in game id order.
    pub schedule: Vec<Schedule>,
}

impl Division {
    /// Creates a division with an empty schedule and standings.
    #[must_use]
    pub fn new(
        organization: &str,
        abbreviation: &str,
        league: &str,
        name_or_number: &str,
        updated: PrimitiveDateTime,
    ) -> Self {
        Self {
            organization: organization.to_string(),
            abbreviation: abbreviation.to_string(),
            league: league.to_string(),
            name_or_number: name_or_number.to_string(),
            updated,
            locked: false,
            standings: Vec::new(),
            schedule: Vec::new(),
        }
    }

    /// Returns this division's natural key.
    #[must_use]
    pub fn key(&self) -> DivisionKey {
        DivisionKey::new(&self.organization, &self.abbreviation)
    }

    /// Returns the first schedule row with the given game id.
    #[must_use]
    pub fn game(&self, game_id: GameId) -> Option<&Schedule> {
        self.schedule.iter().find(|s| s.game_id == game_id)
    }

    /// Returns whether overtime losses are meaningful for this division.
    ///
    /// Only hockey organizations track them.
    #[must_use]
    pub fn shows_overtime_losses(&self) -> bool {
        self.organization.to_lowercase().contains("hockey")
    }
}

/// Cumulative record for one team in a division.
///
/// Every tally is derived: the recalculator zeroes and rebuilds them
/// from the schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standings {
    /// Owning division organization.
    pub organization: String,
    /// Owning division abbreviation.
    pub abbreviation: String,
    /// 1-based team ordinal.
    pub team_id: TeamId,
    /// Team display name.
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    /// Tracked for hockey divisions; never derived from the schedule.
    pub overtime_losses: u32,
    /// Wins over decided games plus ties.
    pub percentage: f64,
    /// Games behind the leader.
    pub gb: f64,
    pub runs_scored: u32,
    pub runs_against: u32,
    pub forfeits: u32,
    /// Always incremented together with `forfeits`.
    pub forfeits_charged: u32,
}

impl Standings {
    /// Creates a standings row with all tallies at zero.
    #[must_use]
    pub fn new(organization: &str, abbreviation: &str, team_id: TeamId, name: &str) -> Self {
        Self {
            organization: organization.to_string(),
            abbreviation: abbreviation.to_string(),
            team_id,
            name: name.to_string(),
            wins: 0,
            losses: 0,
            ties: 0,
            overtime_losses: 0,
            percentage: 0.0,
            gb: 0.0,
            runs_scored: 0,
            runs_against: 0,
            forfeits: 0,
            forfeits_charged: 0,
        }
    }

    /// Zeroes every numeric field.
    pub const fn reset(&mut self) {
        self.wins = 0;
        self.losses = 0;
        self.ties = 0;
        self.overtime_losses = 0;
        self.percentage = 0.0;
        self.gb = 0.0;
        self.runs_scored = 0;
        self.runs_against = 0;
        self.forfeits = 0;
        self.forfeits_charged = 0;
    }

    /// Runs scored minus runs allowed.
    #[must_use]
    pub fn run_differential(&self) -> i64 {
        i64::from(self.runs_scored) - i64::from(self.runs_against)
    }
}

/// One schedule row: a game, or a week-boundary marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub organization: String,
    pub abbreviation: String,
    pub game_id: GameId,
    /// Home team display name.
    pub home: String,
    /// Visitor team display name, or the label of a week-boundary row.
    pub visitor: String,
    pub day: Option<Date>,
    pub time: Option<Time>,
    pub field: String,
    /// References `Standings::team_id`. Zero on week-boundary rows.
    pub home_id: TeamId,
    /// References `Standings::team_id`. Zero on week-boundary rows.
    pub visitor_id: TeamId,
    /// `None` until a result is reported.
    pub home_score: Option<u16>,
    /// `None` until a result is reported.
    pub visitor_score: Option<u16>,
    pub home_forfeit: bool,
    pub visitor_forfeit: bool,
    pub overtime_game: bool,
    pub makeup_day: Option<Date>,
    pub makeup_time: Option<Time>,
    pub makeup_field: Option<String>,
}

impl Schedule {
    /// Label prefix that marks a week-boundary row.
    pub const WEEK_PREFIX: &'static str = "WEEK";

    /// Creates an empty row carrying only its keys.
    #[must_use]
    pub fn new(organization: &str, abbreviation: &str, game_id: GameId) -> Self {
        Self {
            organization: organization.to_string(),
            abbreviation: abbreviation.to_string(),
            game_id,
            home: String::new(),
            visitor: String::new(),
            day: None,
            time: None,
            field: String::new(),
            home_id: 0,
            visitor_id: 0,
            home_score: None,
            visitor_score: None,
            home_forfeit: false,
            visitor_forfeit: false,
            overtime_game: false,
            makeup_day: None,
            makeup_time: None,
            makeup_field: None,
        }
    }

    /// Creates a week-boundary row; `label` is stored in `visitor`.
    #[must_use]
    pub fn week_boundary(organization: &str, abbreviation: &str, game_id: GameId, label: &str) -> Self {
        Self {
            visitor: label.to_string(),
            ..Self::new(organization, abbreviation, game_id)
        }
    }

    /// Returns whether this row only marks the start of a week.
    #[must_use]
    pub fn is_week_boundary(&self) -> bool {
        self.visitor.to_uppercase().starts_with(Self::WEEK_PREFIX)
    }

    /// Returns `(home, visitor)` once both scores have been reported.
    #[must_use]
    pub const fn reported_score(&self) -> Option<(u16, u16)> {
        match (self.home_score, self.visitor_score) {
            (Some(home), Some(visitor)) => Some((home, visitor)),
            _ => None,
        }
    }

    /// Returns whether the named team plays in this game (case-insensitive).
    #[must_use]
    pub fn involves_team(&self, team_name: &str) -> bool {
        key_matches(&self.home, team_name) || key_matches(&self.visitor, team_name)
    }

    /// Overwrites the four reportable fields verbatim.
    pub const fn apply_score(&mut self, update: &ScoreUpdate) {
        self.home_score = update.home_score;
        self.visitor_score = update.visitor_score;
        self.home_forfeit = update.home_forfeit;
        self.visitor_forfeit = update.visitor_forfeit;
    }
}

/// A reported result for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreUpdate {
    pub game_id: GameId,
    pub home_score: Option<u16>,
    pub visitor_score: Option<u16>,
    pub home_forfeit: bool,
    pub visitor_forfeit: bool,
}

impl ScoreUpdate {
    /// Creates a played-game result with no forfeits.
    #[must_use]
    pub const fn played(game_id: GameId, home_score: u16, visitor_score: u16) -> Self {
        Self {
            game_id,
            home_score: Some(home_score),
            visitor_score: Some(visitor_score),
            home_forfeit: false,
            visitor_forfeit: false,
        }
    }
}
