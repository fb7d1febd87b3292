// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use sbt::SectionCounts;
use sbt_domain::{Division, GameId, Schedule, ScoreUpdate};
use time::Date;

/// API request to create a new division.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDivisionRequest {
    /// The owning organization.
    pub organization: String,
    /// The division abbreviation (unique within the organization).
    pub abbreviation: String,
    /// The league name.
    pub league: String,
    /// The division name or number.
    pub name_or_number: String,
}

/// API response for a successful division creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateDivisionResponse {
    /// The organization the division was created in.
    pub organization: String,
    /// The created division's abbreviation.
    pub abbreviation: String,
    /// A success message.
    pub message: String,
}

/// API request to check whether a division exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivisionExistsRequest {
    pub organization: String,
    pub abbreviation: String,
}

/// API response for a division existence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DivisionExistsResponse {
    /// Whether a division with the key exists.
    pub exists: bool,
}

/// API request to replace a division's schedule and standings from a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadScheduleRequest {
    /// The owning organization.
    pub organization: String,
    /// The division abbreviation.
    pub abbreviation: String,
    /// Whether every game line is played twice, home and away.
    pub uses_double_headers: bool,
    /// The name the file was uploaded as, used in messages.
    pub file_name: String,
    /// The full text of the schedule file.
    pub contents: String,
    /// Explicit section sizes; `None` finds the blank separator line.
    pub section_counts: Option<SectionCounts>,
}

/// API response for a successful schedule load.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoadScheduleResponse {
    /// Date of the first real game, if any.
    pub first_game_date: Option<Date>,
    /// Date of the game on the last line of the file, if it is a game.
    pub last_game_date: Option<Date>,
    /// Number of teams loaded.
    pub team_count: usize,
    /// Number of schedule rows loaded, week-boundary rows included.
    pub schedule_count: usize,
    /// A success message.
    pub message: String,
}

/// API request to list an organization's divisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetDivisionListRequest {
    pub organization: String,
}

/// API response listing divisions.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GetDivisionListResponse {
    /// The organization's divisions, ordered by abbreviation.
    pub divisions: Vec<Division>,
}

/// API request to delete a division.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteDivisionRequest {
    pub organization: String,
    pub abbreviation: String,
}

/// API response for a successful division deletion.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeleteDivisionResponse {
    /// A success message.
    pub message: String,
}

/// API request to fetch one division.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetDivisionRequest {
    pub organization: String,
    pub abbreviation: String,
}

/// API response carrying one division.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GetDivisionResponse {
    pub division: Division,
}

/// API request to list the games sharing a day and field with one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetGamesRequest {
    pub organization: String,
    pub abbreviation: String,
    /// The game whose day and field select the result.
    pub game_id: GameId,
}

/// API response listing games.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GetGamesResponse {
    /// Matching games in schedule order; empty if the game id is unknown.
    pub games: Vec<Schedule>,
}

/// API request to change a division's descriptive fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateDivisionRequest {
    pub organization: String,
    pub abbreviation: String,
    /// The new league name.
    pub league: String,
    /// The new division name or number.
    pub name_or_number: String,
    /// Whether score reporting is refused.
    pub locked: bool,
}

/// API response for a successful division update.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateDivisionResponse {
    /// A success message.
    pub message: String,
}

/// API request to report scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateScoresRequest {
    pub organization: String,
    pub abbreviation: String,
    /// Results in submission order.
    pub scores: Vec<ScoreUpdate>,
}

/// API response for a successful score report.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateScoresResponse {
    /// Number of submitted results that matched a game.
    pub games_updated: usize,
    /// A success message.
    pub message: String,
}

/// API request for a division's standings page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsRequest {
    pub organization: String,
    pub abbreviation: String,
    /// Restricts the schedule to one team's games when the team exists.
    pub team_name: Option<String>,
}

/// API response for a division's standings page.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StandingsResponse {
    /// The division, with standings ranked and the schedule possibly filtered.
    pub division: Division,
    /// The team the schedule was filtered to, if the requested team exists.
    pub team_name: Option<String>,
    /// Whether the overtime-loss column applies to this division.
    pub show_overtime_losses: bool,
}
