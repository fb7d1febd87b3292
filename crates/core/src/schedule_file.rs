// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Schedule file import.
//!
//! A schedule file is plain text laid out as:
//!
//! ```text
//! <four preamble lines, ignored>
//! Team name
//! Team name
//! ...
//! <blank line>
//! Date,DayOfWeek,Time,HomeTeamID,VisitorTeamID,Field
//! Week 2
//! ...
//! ```
//!
//! Team ids are the 1-based position of the team in the team list. A game
//! line whose first field starts with "week" (any case) becomes a
//! week-boundary row.

use crate::error::ParseError;
use csv::StringRecord;
use sbt_domain::{GameId, Schedule, Standings, TeamId};
use std::ops::Range;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration, Time};

/// Number of leading lines skipped before the team list.
pub const PREAMBLE_LINES: usize = 4;

/// Gap between the two games of a doubleheader.
pub const DOUBLEHEADER_GAP: Duration = Duration::minutes(90);

/// Accepted `Date` layouts, tried in order.
const DATE_FORMATS: &[&[BorrowedFormatItem<'static>]] = &[
    format_description!("[month padding:none]/[day padding:none]/[year]"),
    format_description!("[year]-[month]-[day]"),
];

/// Accepted `Time` layouts, tried in order.
const TIME_FORMATS: &[&[BorrowedFormatItem<'static>]] = &[
    format_description!("[hour repr:12 padding:none]:[minute] [period case_sensitive:false]"),
    format_description!(
        "[hour repr:12 padding:none]:[minute]:[second] [period case_sensitive:false]"
    ),
    format_description!("[hour padding:none]:[minute]"),
    format_description!("[hour padding:none]:[minute]:[second]"),
];

/// Explicit sizes for the two sections of a schedule file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionCounts {
    /// Number of team lines after the preamble.
    pub teams: usize,
    /// Number of game lines after the blank separator.
    pub games: usize,
}

/// Line ranges of the team list, separator, and game list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSections {
    /// Team name lines.
    pub teams: Range<usize>,
    /// Index of the blank line that ends the team list.
    pub separator: usize,
    /// Game and week-boundary lines.
    pub games: Range<usize>,
}

impl ScheduleSections {
    /// Finds the sections by scanning for the first zero-length line after the preamble.
    ///
    /// Every remaining line belongs to the game section.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` positioned at the end of the file if no blank
    /// line follows the team list. An empty file fails at line 4.
    pub fn detect(lines: &[&str]) -> Result<Self, ParseError> {
        let mut line_number: usize = PREAMBLE_LINES;
        loop {
            match lines.get(line_number) {
                None => {
                    return Err(ParseError::new(
                        line_number,
                        "File ended before the blank line that closes the team list",
                    ));
                }
                Some(line) if line.is_empty() => break,
                Some(_) => line_number += 1,
            }
        }

        Ok(Self {
            teams: PREAMBLE_LINES..line_number,
            separator: line_number,
            games: line_number + 1..lines.len(),
        })
    }

    /// Lays out the sections from explicit counts.
    ///
    /// The separator line must still exist and be blank. Lines after the
    /// counted games are ignored.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if a team line is missing or blank, the
    /// separator is missing or not blank, or the file holds fewer game lines
    /// than requested.
    pub fn from_counts(lines: &[&str], counts: SectionCounts) -> Result<Self, ParseError> {
        let separator: usize = PREAMBLE_LINES + counts.teams;

        for line_number in PREAMBLE_LINES..separator {
            match lines.get(line_number) {
                None => {
                    return Err(ParseError::new(
                        line_number,
                        format!("File ended before all {} team names", counts.teams),
                    ));
                }
                Some(line) if line.is_empty() => {
                    return Err(ParseError::new(
                        line_number,
                        format!("Expected {} team names, found a blank line", counts.teams),
                    ));
                }
                Some(_) => {}
            }
        }

        match lines.get(separator) {
            Some(line) if line.is_empty() => {}
            Some(_) => {
                return Err(ParseError::new(
                    separator,
                    "Expected a blank line after the team list",
                ));
            }
            None => {
                return Err(ParseError::new(
                    separator,
                    "File ended before the blank line that closes the team list",
                ));
            }
        }

        let games_start: usize = separator + 1;
        let available: usize = lines.len().saturating_sub(games_start);
        if available < counts.games {
            return Err(ParseError::new(
                separator,
                format!(
                    "Expected {} game lines, found {available}",
                    counts.games
                ),
            ));
        }

        Ok(Self {
            teams: PREAMBLE_LINES..separator,
            separator,
            games: games_start..games_start + counts.games,
        })
    }
}

/// Inputs that shape a parse besides the file contents.
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions<'a> {
    /// Stamped onto every emitted row.
    pub organization: &'a str,
    /// Stamped onto every emitted row.
    pub abbreviation: &'a str,
    /// Emit a second, swapped game 90 minutes after each game line.
    pub uses_double_headers: bool,
    /// Explicit section sizes; `None` detects them from the blank separator.
    pub section_counts: Option<SectionCounts>,
}

impl<'a> ParseOptions<'a> {
    /// Creates options for single games with detected sections.
    #[must_use]
    pub const fn new(organization: &'a str, abbreviation: &'a str) -> Self {
        Self {
            organization,
            abbreviation,
            uses_double_headers: false,
            section_counts: None,
        }
    }

    /// Sets whether each game line expands into a doubleheader.
    #[must_use]
    pub const fn with_double_headers(mut self, uses_double_headers: bool) -> Self {
        self.uses_double_headers = uses_double_headers;
        self
    }

    /// Lays out sections from explicit counts instead of the blank separator.
    #[must_use]
    pub const fn with_section_counts(mut self, counts: SectionCounts) -> Self {
        self.section_counts = Some(counts);
        self
    }
}

/// Everything a successful parse produces.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSchedule {
    /// One zeroed row per team, team ids 1..=N.
    pub standings: Vec<Standings>,
    /// Games and week-boundary rows, game ids 0..M.
    pub schedule: Vec<Schedule>,
    /// Date of the first game line.
    pub first_game_date: Option<Date>,
    /// Date of the game on the last line of the game section.
    ///
    /// `None` when that line is a week boundary, even if earlier games exist.
    pub last_game_date: Option<Date>,
}

/// One non-week line of the game section.
struct GameLine {
    day: Date,
    time: Time,
    home_id: TeamId,
    visitor_id: TeamId,
    field: String,
}

enum GameSectionLine {
    Week(String),
    Game(GameLine),
}

/// Parses a schedule file into standings seeds and schedule rows.
///
/// Nothing is returned unless the whole file parses.
///
/// # Arguments
///
/// * `contents` - The full text of the schedule file
/// * `options` - Division key, doubleheader flag, and section layout
///
/// # Errors
///
/// Returns a `ParseError` describing the first failure. Failures in the
/// game section are reported at the separator line.
pub fn parse_schedule_file(
    contents: &str,
    options: &ParseOptions<'_>,
) -> Result<ParsedSchedule, ParseError> {
    let lines: Vec<&str> = contents.lines().collect();
    let sections: ScheduleSections = match options.section_counts {
        Some(counts) => ScheduleSections::from_counts(&lines, counts)?,
        None => ScheduleSections::detect(&lines)?,
    };

    let team_lines: &[&str] = lines.get(sections.teams.clone()).unwrap_or(&[]);
    let standings: Vec<Standings> = seed_standings(team_lines, options)?;

    let mut schedule: Vec<Schedule> = Vec::new();
    let mut first_game_date: Option<Date> = None;
    let mut last_game_date: Option<Date> = None;
    let mut game_id: GameId = 0;
    let last_game_line: Option<usize> = sections.games.end.checked_sub(1);

    for index in sections.games.clone() {
        let line: &str = lines.get(index).copied().unwrap_or_default();
        let parsed: GameSectionLine =
            parse_game_line(line).map_err(|detail| ParseError::new(sections.separator, detail))?;

        match parsed {
            GameSectionLine::Week(label) => {
                schedule.push(Schedule::week_boundary(
                    options.organization,
                    options.abbreviation,
                    game_id,
                    &label,
                ));
                game_id += 1;
            }
            GameSectionLine::Game(game) => {
                let home: &str = team_name(&standings, game.home_id)
                    .map_err(|detail| ParseError::new(sections.separator, detail))?;
                let visitor: &str = team_name(&standings, game.visitor_id)
                    .map_err(|detail| ParseError::new(sections.separator, detail))?;

                schedule.push(game_row(
                    options,
                    game_id,
                    &game,
                    (game.home_id, home),
                    (game.visitor_id, visitor),
                    game.time,
                ));
                game_id += 1;

                if options.uses_double_headers {
                    schedule.push(game_row(
                        options,
                        game_id,
                        &game,
                        (game.visitor_id, visitor),
                        (game.home_id, home),
                        game.time + DOUBLEHEADER_GAP,
                    ));
                    game_id += 1;
                }

                if first_game_date.is_none() {
                    first_game_date = Some(game.day);
                }
                if Some(index) == last_game_line {
                    last_game_date = Some(game.day);
                }
            }
        }
    }

    Ok(ParsedSchedule {
        standings,
        schedule,
        first_game_date,
        last_game_date,
    })
}

fn seed_standings(
    team_lines: &[&str],
    options: &ParseOptions<'_>,
) -> Result<Vec<Standings>, ParseError> {
    team_lines
        .iter()
        .enumerate()
        .map(|(offset, line)| {
            let team_id: TeamId = TeamId::try_from(offset + 1).map_err(|_| {
                ParseError::new(PREAMBLE_LINES + offset, "Too many teams in the team list")
            })?;
            Ok(Standings::new(
                options.organization,
                options.abbreviation,
                team_id,
                line.trim(),
            ))
        })
        .collect()
}

fn team_name(standings: &[Standings], team_id: TeamId) -> Result<&str, String> {
    usize::from(team_id)
        .checked_sub(1)
        .and_then(|slot| standings.get(slot))
        .map(|team| team.name.as_str())
        .ok_or_else(|| {
            format!(
                "Team id {team_id} is not in the team list (1-{})",
                standings.len()
            )
        })
}

fn game_row(
    options: &ParseOptions<'_>,
    game_id: GameId,
    game: &GameLine,
    home: (TeamId, &str),
    visitor: (TeamId, &str),
    time: Time,
) -> Schedule {
    let mut row: Schedule = Schedule::new(options.organization, options.abbreviation, game_id);
    row.home_id = home.0;
    row.home = home.1.to_string();
    row.visitor_id = visitor.0;
    row.visitor = visitor.1.to_string();
    row.day = Some(game.day);
    row.time = Some(time);
    row.field.clone_from(&game.field);
    row
}

fn parse_game_line(line: &str) -> Result<GameSectionLine, String> {
    let record: StringRecord = split_fields(line)?;
    let first: &str = record.get(0).unwrap_or_default();

    if first.to_lowercase().starts_with("week") {
        return Ok(GameSectionLine::Week(first.to_string()));
    }

    let day: Date = parse_date(first)?;
    // Field 1 (day of week) is informational only.
    let time: Time = parse_time(field(&record, 2, "Time")?)?;
    let home_id: TeamId = parse_team_id(field(&record, 3, "HomeTeamID")?)?;
    let visitor_id: TeamId = parse_team_id(field(&record, 4, "VisitorTeamID")?)?;
    let field_name: String = field(&record, 5, "Field")?.to_string();

    Ok(GameSectionLine::Game(GameLine {
        day,
        time,
        home_id,
        visitor_id,
        field: field_name,
    }))
}

fn split_fields(line: &str) -> Result<StringRecord, String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    match reader.records().next() {
        Some(Ok(record)) => Ok(record),
        Some(Err(err)) => Err(format!("Unable to read game line: {err}")),
        None => Ok(StringRecord::new()),
    }
}

fn field<'r>(record: &'r StringRecord, index: usize, name: &str) -> Result<&'r str, String> {
    record
        .get(index)
        .ok_or_else(|| format!("Missing {name} field in '{}'", join_record(record)))
}

fn join_record(record: &StringRecord) -> String {
    record.iter().collect::<Vec<&str>>().join(",")
}

fn parse_date(value: &str) -> Result<Date, String> {
    let trimmed: &str = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| Date::parse(trimmed, *format).ok())
        .ok_or_else(|| {
            format!("'{value}' is not a valid date (expected M/D/YYYY or YYYY-MM-DD)")
        })
}

fn parse_time(value: &str) -> Result<Time, String> {
    let trimmed: &str = value.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| Time::parse(trimmed, *format).ok())
        .ok_or_else(|| {
            format!(
                "'{value}' is not a valid time (expected h:mm AM/PM, h:mm:ss AM/PM, H:mm, or H:mm:ss)"
            )
        })
}

fn parse_team_id(value: &str) -> Result<TeamId, String> {
    value
        .trim()
        .parse::<TeamId>()
        .map_err(|_| format!("'{value}' is not a valid team id"))
}
