// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use sbt_domain::{Division, GameId, Schedule, Standings, TeamId};
use time::macros::datetime;

pub const TEST_ORGANIZATION: &str = "Demo";
pub const TEST_ABBREVIATION: &str = "CS01";

/// Three teams, two week markers, three games; the file ends on a game.
pub fn create_test_schedule_file() -> String {
    String::from(
        "Demo League Schedule\n\
         Coed Softball\n\
         Fall 2023\n\
         Teams\n\
         Sharks\n\
         Jets \n\
         Rays\n\
         \n\
         Week 1,,,,,\n\
         9/3/2023,Sun,6:30 PM,1,2,Field 1\n\
         9/3/2023,Sun,6:30 PM,3,1,Field 2\n\
         Week 2,,,,,\n\
         10/24/2023,Tue,7:00 PM,2,3,Field 1\n",
    )
}

pub fn create_test_division() -> Division {
    Division::new(
        TEST_ORGANIZATION,
        TEST_ABBREVIATION,
        "Coed Softball",
        "Division 1",
        datetime!(2023-09-01 8:00),
    )
}

pub fn create_test_standings(names: &[&str]) -> Vec<Standings> {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            Standings::new(
                TEST_ORGANIZATION,
                TEST_ABBREVIATION,
                TeamId::try_from(index + 1).unwrap(),
                name,
            )
        })
        .collect()
}

pub fn create_test_game(
    game_id: GameId,
    home_id: TeamId,
    visitor_id: TeamId,
    score: Option<(u16, u16)>,
) -> Schedule {
    let mut game: Schedule = Schedule::new(TEST_ORGANIZATION, TEST_ABBREVIATION, game_id);
    game.home_id = home_id;
    game.visitor_id = visitor_id;
    game.home = format!("Team {home_id}");
    game.visitor = format!("Team {visitor_id}");
    game.home_score = score.map(|(home, _)| home);
    game.visitor_score = score.map(|(_, visitor)| visitor);
    game
}

/// Appends `count` games in which `winner` (home) beats `loser` 1-0.
pub fn push_wins(schedule: &mut Vec<Schedule>, winner: TeamId, loser: TeamId, count: usize) {
    for _ in 0..count {
        let game_id: GameId = GameId::try_from(schedule.len()).unwrap();
        schedule.push(create_test_game(game_id, winner, loser, Some((1, 0))));
    }
}
