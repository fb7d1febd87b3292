// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::schedule_file::ParsedSchedule;
use crate::standings::recalculate_standings;
use sbt_domain::{Division, Schedule, ScoreUpdate, Standings};

/// Applies reported results to a division and recalculates its standings.
///
/// Each update overwrites the score and forfeit fields of the first
/// schedule row with the same game id, exactly as submitted. Updates for
/// unknown game ids are ignored. Callers check forfeit and partial scores
/// with `validate_score_updates` first. The division is only modified if
/// the recalculation succeeds.
///
/// # Arguments
///
/// * `division` - The division to update
/// * `scores` - The submitted results, in submission order
///
/// # Returns
///
/// The number of schedule rows that were updated.
///
/// # Errors
///
/// Returns any error from `recalculate_standings`.
pub fn apply_score_updates(
    division: &mut Division,
    scores: &[ScoreUpdate],
) -> Result<usize, CoreError> {
    let mut schedule: Vec<Schedule> = division.schedule.clone();
    let mut applied: usize = 0;
    for update in scores {
        if let Some(game) = schedule.iter_mut().find(|g| g.game_id == update.game_id) {
            game.apply_score(update);
            applied += 1;
        }
    }

    let standings: Vec<Standings> = recalculate_standings(&division.standings, &schedule)?;
    division.schedule = schedule;
    division.standings = standings;
    Ok(applied)
}

/// Replaces a division's schedule and standings with a freshly parsed file.
///
/// # Errors
///
/// Returns an error from `recalculate_standings` if the parsed schedule is
/// inconsistent; the division is left untouched in that case.
pub fn install_schedule(division: &mut Division, parsed: ParsedSchedule) -> Result<(), CoreError> {
    let standings: Vec<Standings> = recalculate_standings(&parsed.standings, &parsed.schedule)?;
    division.schedule = parsed.schedule;
    division.standings = standings;
    Ok(())
}

/// Recalculates a division's standings in place from its current schedule.
///
/// # Errors
///
/// Returns an error from `recalculate_standings`; the division is left
/// untouched in that case.
pub fn rebuild_standings(division: &mut Division) -> Result<(), CoreError> {
    division.standings = recalculate_standings(&division.standings, &division.schedule)?;
    Ok(())
}
