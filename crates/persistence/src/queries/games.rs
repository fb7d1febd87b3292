// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use sbt_domain::{Division, GameId, Schedule};

/// Returns every schedule row played on the same day and field as `game_id`.
///
/// The identified game is included. An unknown game id yields an empty list.
#[must_use]
pub fn games_on_same_day_and_field(division: &Division, game_id: GameId) -> Vec<Schedule> {
    let Some(target) = division.game(game_id) else {
        return Vec::new();
    };
    division
        .schedule
        .iter()
        .filter(|game| game.day == target.day && game.field == target.field)
        .cloned()
        .collect()
}
