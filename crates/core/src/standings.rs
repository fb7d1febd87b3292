// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use sbt_domain::{Schedule, Standings, TeamId};
use std::cmp::Reverse;
use std::collections::HashMap;

/// Rebuilds standings from scratch by replaying every game in the schedule.
///
/// The input standings supply team identity only; every tally is zeroed
/// before the replay, so calling this twice yields the same result.
/// Week-boundary rows are skipped. `overtime_losses` is left at zero.
///
/// # Arguments
///
/// * `standings` - One row per team, in display order
/// * `schedule` - Every schedule row for the division
///
/// # Returns
///
/// A new standings collection in the same order as the input.
///
/// # Errors
///
/// Returns `CoreError::UnknownTeam` if a game references a team id with no
/// standings row, or `CoreError::DuplicateTeam` if two rows share a team id.
pub fn recalculate_standings(
    standings: &[Standings],
    schedule: &[Schedule],
) -> Result<Vec<Standings>, CoreError> {
    let mut table: Vec<Standings> = standings.to_vec();
    let mut slots: HashMap<TeamId, usize> = HashMap::with_capacity(table.len());

    for (slot, row) in table.iter_mut().enumerate() {
        row.reset();
        if slots.insert(row.team_id, slot).is_some() {
            return Err(CoreError::DuplicateTeam(row.team_id));
        }
    }

    for game in schedule.iter().filter(|game| !game.is_week_boundary()) {
        let home: usize = slot_for(&slots, game, game.home_id)?;
        let visitor: usize = slot_for(&slots, game, game.visitor_id)?;
        record_game(&mut table, home, visitor, game);
    }

    apply_games_behind(&mut table);
    Ok(table)
}

/// Orders standings for display: games behind ascending, then percentage descending.
#[must_use]
pub fn rank_standings(standings: &[Standings]) -> Vec<Standings> {
    let mut ranked: Vec<Standings> = standings.to_vec();
    ranked.sort_by(|a, b| {
        a.gb.total_cmp(&b.gb)
            .then_with(|| b.percentage.total_cmp(&a.percentage))
    });
    ranked
}

fn slot_for(
    slots: &HashMap<TeamId, usize>,
    game: &Schedule,
    team_id: TeamId,
) -> Result<usize, CoreError> {
    slots
        .get(&team_id)
        .copied()
        .ok_or(CoreError::UnknownTeam {
            game_id: game.game_id,
            team_id,
        })
}

fn record_game(table: &mut [Standings], home: usize, visitor: usize, game: &Schedule) {
    let score: Option<(u16, u16)> = game.reported_score();

    if let Some((home_score, visitor_score)) = score {
        table[home].runs_scored += u32::from(home_score);
        table[home].runs_against += u32::from(visitor_score);
        table[visitor].runs_scored += u32::from(visitor_score);
        table[visitor].runs_against += u32::from(home_score);
    }

    if game.home_forfeit {
        table[home].forfeits += 1;
        table[home].forfeits_charged += 1;
    }
    if game.visitor_forfeit {
        table[visitor].forfeits += 1;
        table[visitor].forfeits_charged += 1;
    }

    match score {
        // A double forfeit is a loss for both teams, never a tie.
        _ if game.home_forfeit && game.visitor_forfeit => {
            table[home].losses += 1;
            table[visitor].losses += 1;
        }
        Some((home_score, visitor_score)) if home_score > visitor_score => {
            table[home].wins += 1;
            table[visitor].losses += 1;
        }
        Some((home_score, visitor_score)) if home_score < visitor_score => {
            table[home].losses += 1;
            table[visitor].wins += 1;
        }
        Some(_) => {
            table[home].ties += 1;
            table[visitor].ties += 1;
        }
        None => {}
    }
}

fn apply_games_behind(table: &mut [Standings]) {
    // The leader is the first team with the most wins, in table order.
    let Some((max_wins, max_losses)) = table
        .iter()
        .min_by_key(|team| Reverse(team.wins))
        .map(|leader| (leader.wins, leader.losses))
    else {
        return;
    };

    for team in table.iter_mut() {
        team.gb = ((f64::from(max_wins) - f64::from(team.wins))
            + (f64::from(team.losses) - f64::from(max_losses)))
            / 2.0;
        team.percentage = if team.wins + team.losses == 0 {
            0.0
        } else {
            f64::from(team.wins) / f64::from(team.wins + team.losses + team.ties)
        };
    }
}
