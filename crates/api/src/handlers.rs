// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Division service handlers.
//!
//! Each handler loads what it needs from persistence, applies the core
//! operation, stamps `updated` on mutations, and saves the result. Nothing
//! is saved when any step fails.

use sbt::{
    ParseOptions, ParsedSchedule, apply_score_updates, install_schedule, parse_schedule_file,
    rank_standings,
};
use sbt_domain::{
    Division, Schedule, key_matches, validate_descriptive_fields, validate_division_fields,
    validate_score_updates,
};
use sbt_persistence::{Persistence, SaveMode};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime};
use tracing::{info, warn};

use crate::error::{ApiError, translate_core_error, translate_domain_error, translate_persistence_error};
use crate::request_response::{
    CreateDivisionRequest, CreateDivisionResponse, DeleteDivisionRequest, DeleteDivisionResponse,
    DivisionExistsRequest, DivisionExistsResponse, GetDivisionListRequest,
    GetDivisionListResponse, GetDivisionRequest, GetDivisionResponse, GetGamesRequest,
    GetGamesResponse, LoadScheduleRequest, LoadScheduleResponse, StandingsRequest,
    StandingsResponse, UpdateDivisionRequest, UpdateDivisionResponse, UpdateScoresRequest,
    UpdateScoresResponse,
};

/// Short date layout used in messages, e.g. `9/3/2023`.
const SHORT_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[month padding:none]/[day padding:none]/[year]");

fn short_date(date: Option<Date>) -> String {
    date.map_or_else(
        || String::from("(none)"),
        |d| d.format(SHORT_DATE).unwrap_or_else(|_| d.to_string()),
    )
}

fn division_not_found(message: &str) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Division"),
        message: message.to_string(),
    }
}

/// Loads a division, failing with `message` when it does not exist.
fn require_division(
    persistence: &Persistence,
    organization: &str,
    abbreviation: &str,
    message: &str,
) -> Result<Division, ApiError> {
    persistence
        .get_division(organization, abbreviation)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| {
            warn!(%organization, %abbreviation, "Division not found");
            division_not_found(message)
        })
}

/// Creates a new division with an empty schedule.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The division to create
/// * `now` - The Eastern wall-clock time stamped into `updated`
///
/// # Errors
///
/// Returns an error if:
/// - Any field fails validation
/// - A division with the same key already exists
/// - The division cannot be saved
pub fn create_division(
    persistence: &mut Persistence,
    request: &CreateDivisionRequest,
    now: PrimitiveDateTime,
) -> Result<CreateDivisionResponse, ApiError> {
    let division: Division = Division::new(
        &request.organization,
        &request.abbreviation,
        &request.league,
        &request.name_or_number,
        now,
    );
    validate_division_fields(&division).map_err(translate_domain_error)?;

    if persistence
        .division_exists(&request.organization, &request.abbreviation)
        .map_err(translate_persistence_error)?
    {
        warn!(
            organization = %request.organization,
            abbreviation = %request.abbreviation,
            "Division already exists"
        );
        return Err(ApiError::DivisionExists {
            abbreviation: request.abbreviation.clone(),
        });
    }

    persistence
        .save_division(&division, SaveMode::Create)
        .map_err(translate_persistence_error)?;

    info!(
        organization = %division.organization,
        abbreviation = %division.abbreviation,
        "Created division"
    );

    Ok(CreateDivisionResponse {
        organization: division.organization,
        abbreviation: division.abbreviation.clone(),
        message: format!("Created division \"{}\"", division.abbreviation),
    })
}

/// Checks whether a division exists.
///
/// # Errors
///
/// Returns an error if the backing store cannot be read.
pub fn division_exists(
    persistence: &Persistence,
    request: &DivisionExistsRequest,
) -> Result<DivisionExistsResponse, ApiError> {
    let exists: bool = persistence
        .division_exists(&request.organization, &request.abbreviation)
        .map_err(translate_persistence_error)?;
    Ok(DivisionExistsResponse { exists })
}

/// Replaces a division's schedule and standings with the contents of a
/// schedule file.
///
/// The whole file is parsed and the standings rebuilt before anything is
/// saved. On success the response carries the first and last game dates.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The target division and the file contents
/// * `now` - The Eastern wall-clock time stamped into `updated`
///
/// # Errors
///
/// Returns an error if:
/// - The division does not exist
/// - The file cannot be parsed (`ApiError::ScheduleFile` with the line number)
/// - The parsed schedule references a team with no standings row
/// - The division cannot be saved
pub fn load_schedule_file(
    persistence: &mut Persistence,
    request: &LoadScheduleRequest,
    now: PrimitiveDateTime,
) -> Result<LoadScheduleResponse, ApiError> {
    let mut division: Division = require_division(
        persistence,
        &request.organization,
        &request.abbreviation,
        "Unable to load schedule - division not found.",
    )?;

    let mut options: ParseOptions<'_> =
        ParseOptions::new(&division.organization, &division.abbreviation)
            .with_double_headers(request.uses_double_headers);
    if let Some(counts) = request.section_counts {
        options = options.with_section_counts(counts);
    }

    let parsed: ParsedSchedule =
        parse_schedule_file(&request.contents, &options).map_err(|error| {
            warn!(
                file_name = %request.file_name,
                line_number = error.line_number,
                detail = %error.detail,
                "Schedule file rejected"
            );
            ApiError::ScheduleFile {
                file_name: request.file_name.clone(),
                error,
            }
        })?;

    let first_game_date: Option<Date> = parsed.first_game_date;
    let last_game_date: Option<Date> = parsed.last_game_date;

    install_schedule(&mut division, parsed).map_err(translate_core_error)?;
    division.updated = now;

    persistence
        .save_division(&division, SaveMode::Update)
        .map_err(translate_persistence_error)?;

    info!(
        organization = %division.organization,
        abbreviation = %division.abbreviation,
        file_name = %request.file_name,
        teams = division.standings.len(),
        rows = division.schedule.len(),
        double_headers = request.uses_double_headers,
        "Loaded schedule"
    );

    Ok(LoadScheduleResponse {
        first_game_date,
        last_game_date,
        team_count: division.standings.len(),
        schedule_count: division.schedule.len(),
        message: format!(
            "Success loading schedule from {}. Games start on {} and end on {}",
            request.file_name,
            short_date(first_game_date),
            short_date(last_game_date)
        ),
    })
}

/// Lists every division of an organization.
///
/// # Errors
///
/// Returns an error if the backing store cannot be read.
pub fn get_division_list(
    persistence: &Persistence,
    request: &GetDivisionListRequest,
) -> Result<GetDivisionListResponse, ApiError> {
    let divisions: Vec<Division> = persistence
        .get_division_list(&request.organization)
        .map_err(translate_persistence_error)?;
    Ok(GetDivisionListResponse { divisions })
}

/// Deletes a division along with its schedule and standings.
///
/// # Errors
///
/// Returns an error if the division does not exist or cannot be removed.
pub fn delete_division(
    persistence: &mut Persistence,
    request: &DeleteDivisionRequest,
) -> Result<DeleteDivisionResponse, ApiError> {
    let division: Division = require_division(
        persistence,
        &request.organization,
        &request.abbreviation,
        "Unable to delete division because no division exists with this Abbreviation.",
    )?;

    persistence
        .save_division(&division, SaveMode::Delete)
        .map_err(translate_persistence_error)?;

    info!(
        organization = %division.organization,
        abbreviation = %division.abbreviation,
        "Deleted division"
    );

    Ok(DeleteDivisionResponse {
        message: format!("Deleted division \"{}\"", division.abbreviation),
    })
}

/// Retrieves one division with its schedule and standings.
///
/// # Errors
///
/// Returns an error if the division does not exist or the store cannot be read.
pub fn get_division(
    persistence: &Persistence,
    request: &GetDivisionRequest,
) -> Result<GetDivisionResponse, ApiError> {
    let division: Division = require_division(
        persistence,
        &request.organization,
        &request.abbreviation,
        &format!(
            "No division exists with the Abbreviation '{}'.",
            request.abbreviation
        ),
    )?;
    Ok(GetDivisionResponse { division })
}

/// Lists every game played on the same day and field as the requested game.
///
/// # Errors
///
/// Returns an error if the division does not exist or the store cannot be read.
pub fn get_games(
    persistence: &Persistence,
    request: &GetGamesRequest,
) -> Result<GetGamesResponse, ApiError> {
    let games: Vec<Schedule> = persistence
        .get_games(&request.organization, &request.abbreviation, request.game_id)
        .map_err(translate_persistence_error)?;
    Ok(GetGamesResponse { games })
}

/// Changes a division's league, name, and lock flag.
///
/// The schedule and standings are left untouched.
///
/// # Errors
///
/// Returns an error if:
/// - The league or name fails validation
/// - The division does not exist
/// - The division cannot be saved
pub fn update_division(
    persistence: &mut Persistence,
    request: &UpdateDivisionRequest,
    now: PrimitiveDateTime,
) -> Result<UpdateDivisionResponse, ApiError> {
    validate_descriptive_fields(&request.league, &request.name_or_number)
        .map_err(translate_domain_error)?;

    let mut division: Division = require_division(
        persistence,
        &request.organization,
        &request.abbreviation,
        "Unable to update division: no division exists with this Abbreviation.",
    )?;

    division.league.clone_from(&request.league);
    division.name_or_number.clone_from(&request.name_or_number);
    division.locked = request.locked;
    division.updated = now;

    persistence
        .save_division(&division, SaveMode::Update)
        .map_err(translate_persistence_error)?;

    info!(
        organization = %division.organization,
        abbreviation = %division.abbreviation,
        locked = division.locked,
        "Updated division"
    );

    Ok(UpdateDivisionResponse {
        message: format!("Updated division \"{}\"", division.abbreviation),
    })
}

/// Records reported scores and rebuilds the standings.
///
/// Results for unknown game ids are ignored. The division is saved only
/// if every result passes validation.
///
/// # Errors
///
/// Returns an error if:
/// - The division does not exist or is locked
/// - A forfeit carries the wrong score, or only one score is reported
/// - The division cannot be saved
pub fn save_scores(
    persistence: &mut Persistence,
    request: &UpdateScoresRequest,
    now: PrimitiveDateTime,
) -> Result<UpdateScoresResponse, ApiError> {
    let mut division: Division = require_division(
        persistence,
        &request.organization,
        &request.abbreviation,
        "Unable to save scores: no division exists with this Abbreviation.",
    )?;

    if division.locked {
        warn!(
            organization = %division.organization,
            abbreviation = %division.abbreviation,
            "Score report refused for locked division"
        );
        return Err(ApiError::DivisionLocked {
            abbreviation: division.abbreviation,
        });
    }

    validate_score_updates(&request.scores).map_err(translate_domain_error)?;

    let games_updated: usize =
        apply_score_updates(&mut division, &request.scores).map_err(translate_core_error)?;
    division.updated = now;

    persistence
        .save_division(&division, SaveMode::Update)
        .map_err(translate_persistence_error)?;

    info!(
        organization = %division.organization,
        abbreviation = %division.abbreviation,
        submitted = request.scores.len(),
        games_updated,
        "Saved scores"
    );

    Ok(UpdateScoresResponse {
        games_updated,
        message: format!("Successfully updated \"{}\"", request.abbreviation),
    })
}

/// Builds the standings page for a division.
///
/// Standings are ordered by games behind, then by percentage descending.
/// When `team_name` names a team in the division (case-insensitive), the
/// schedule is cut down to that team's games.
///
/// # Errors
///
/// Returns an error if the division does not exist or the store cannot be read.
pub fn get_standings(
    persistence: &Persistence,
    request: &StandingsRequest,
) -> Result<StandingsResponse, ApiError> {
    let mut division: Division = require_division(
        persistence,
        &request.organization,
        &request.abbreviation,
        &format!(
            "No division exists with the Abbreviation '{}'.",
            request.abbreviation
        ),
    )?;

    division.standings = rank_standings(&division.standings);

    let team_name: Option<String> = request
        .team_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .filter(|name| division.standings.iter().any(|s| key_matches(&s.name, name)))
        .map(str::to_string);

    if let Some(team) = team_name.as_deref() {
        division.schedule.retain(|game| game.involves_team(team));
    }

    let show_overtime_losses: bool = division.shows_overtime_losses();

    Ok(StandingsResponse {
        division,
        team_name,
        show_overtime_losses,
    })
}
