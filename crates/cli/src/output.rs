// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of service responses.

use std::fmt::Write;

use sbt_api::StandingsResponse;
use sbt_domain::{Division, Schedule, Standings};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Time};

const DAY_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[weekday repr:short] [month padding:none]/[day padding:none]/[year]");

const TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[hour repr:12 padding:none]:[minute] [period]");

const UPDATED_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[month padding:none]/[day padding:none]/[year] [hour repr:12 padding:none]:[minute] [period]"
);

fn day(date: Option<Date>) -> String {
    date.and_then(|d| d.format(DAY_FORMAT).ok())
        .unwrap_or_default()
}

fn clock(time: Option<Time>) -> String {
    time.and_then(|t| t.format(TIME_FORMAT).ok())
        .unwrap_or_default()
}

/// One schedule row: a week heading, or a game with its result.
pub fn game_line(game: &Schedule) -> String {
    if game.is_week_boundary() {
        return format!("-- {} --", game.visitor);
    }

    let result: String = match (game.reported_score(), game.home_forfeit, game.visitor_forfeit) {
        (_, true, true) => String::from("double forfeit"),
        (Some((home, visitor)), true, false) => format!("{home}-{visitor} (home forfeit)"),
        (Some((home, visitor)), false, true) => format!("{home}-{visitor} (visitor forfeit)"),
        (Some((home, visitor)), _, _) => format!("{home}-{visitor}"),
        (None, _, _) => String::new(),
    };

    format!(
        "{:>4}  {:<16} {:>8}  {:<12} {} vs {}  {}",
        game.game_id,
        day(game.day),
        clock(game.time),
        game.field,
        game.home,
        game.visitor,
        result
    )
    .trim_end()
    .to_string()
}

/// Every schedule row, one per line.
pub fn game_list(games: &[Schedule]) -> String {
    if games.is_empty() {
        return String::from("No games found.");
    }
    games.iter().map(game_line).collect::<Vec<_>>().join("\n")
}

fn standings_row(out: &mut String, team: &Standings, show_overtime_losses: bool) {
    let _ = write!(
        out,
        "{:<20} {:>3} {:>3} {:>3}",
        team.name, team.wins, team.losses, team.ties
    );
    if show_overtime_losses {
        let _ = write!(out, " {:>3}", team.overtime_losses);
    }
    let _ = writeln!(
        out,
        " {:>6.3} {:>5.1} {:>4} {:>4} {:>+5} {:>4}",
        team.percentage,
        team.gb,
        team.runs_scored,
        team.runs_against,
        team.run_differential(),
        team.forfeits
    );
}

/// The standings table followed by the (possibly filtered) schedule.
pub fn standings_page(response: &StandingsResponse) -> String {
    let division: &Division = &response.division;
    let mut out: String = String::new();

    let _ = writeln!(
        out,
        "{} {} ({})",
        division.league, division.name_or_number, division.abbreviation
    );
    let _ = write!(out, "{:<20} {:>3} {:>3} {:>3}", "Team", "W", "L", "T");
    if response.show_overtime_losses {
        let _ = write!(out, " {:>3}", "OTL");
    }
    let _ = writeln!(
        out,
        " {:>6} {:>5} {:>4} {:>4} {:>5} {:>4}",
        "Pct", "GB", "RS", "RA", "Diff", "Fft"
    );
    for team in &division.standings {
        standings_row(&mut out, team, response.show_overtime_losses);
    }

    out.push('\n');
    if let Some(team) = &response.team_name {
        let _ = writeln!(out, "Schedule for {team}");
    }
    out.push_str(&game_list(&division.schedule));
    out
}

/// One line per division.
pub fn division_list(divisions: &[Division]) -> String {
    if divisions.is_empty() {
        return String::from("No divisions found.");
    }
    divisions
        .iter()
        .map(|d| {
            format!(
                "{:<12} {} - {}{}",
                d.abbreviation,
                d.league,
                d.name_or_number,
                if d.locked { " (locked)" } else { "" }
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A division's fields and record counts.
pub fn division_detail(division: &Division) -> String {
    format!(
        "Organization: {}\nAbbreviation: {}\nLeague:       {}\nName:         {}\nLocked:       {}\nUpdated:      {}\nTeams:        {}\nGames:        {}",
        division.organization,
        division.abbreviation,
        division.league,
        division.name_or_number,
        division.locked,
        division
            .updated
            .format(UPDATED_FORMAT)
            .unwrap_or_else(|_| division.updated.to_string()),
        division.standings.len(),
        division
            .schedule
            .iter()
            .filter(|g| !g.is_week_boundary())
            .count()
    )
}
