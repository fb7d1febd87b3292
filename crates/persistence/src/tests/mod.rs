// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use sbt_domain::{Division, Schedule, Standings};
use time::macros::{date, datetime};

pub fn create_test_division(organization: &str, abbreviation: &str) -> Division {
    Division::new(
        organization,
        abbreviation,
        "Coed Softball",
        "Division 1",
        datetime!(2023-09-01 8:00),
    )
}

/// A division with two teams and a small schedule spread over two fields.
pub fn create_loaded_division(organization: &str, abbreviation: &str) -> Division {
    let mut division: Division = create_test_division(organization, abbreviation);
    division.standings = vec![
        Standings::new(organization, abbreviation, 1, "Sharks"),
        Standings::new(organization, abbreviation, 2, "Jets"),
    ];

    division.schedule.push(Schedule::week_boundary(
        organization,
        abbreviation,
        0,
        "Week 1",
    ));
    let games: [(u32, time::Date, &str); 4] = [
        (1, date!(2023 - 09 - 03), "Field 1"),
        (2, date!(2023 - 09 - 03), "Field 1"),
        (3, date!(2023 - 09 - 03), "Field 2"),
        (4, date!(2023 - 09 - 10), "Field 1"),
    ];
    for (game_id, day, field) in games {
        let mut game: Schedule = Schedule::new(organization, abbreviation, game_id);
        game.home_id = 1;
        game.home = String::from("Sharks");
        game.visitor_id = 2;
        game.visitor = String::from("Jets");
        game.day = Some(day);
        game.field = String::from(field);
        division.schedule.push(game);
    }
    division
}
