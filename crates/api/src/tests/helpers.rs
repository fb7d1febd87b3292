// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use sbt_domain::ScoreUpdate;
use sbt_persistence::Persistence;
use time::PrimitiveDateTime;
use time::macros::datetime;

use crate::{
    CreateDivisionRequest, LoadScheduleRequest, UpdateScoresRequest, create_division,
    load_schedule_file,
};

pub const TEST_ORGANIZATION: &str = "Demo";
pub const TEST_ABBREVIATION: &str = "CS01";
pub const TEST_FILE_NAME: &str = "fall.csv";

pub const fn test_now() -> PrimitiveDateTime {
    datetime!(2023-09-02 10:15)
}

/// Three teams, two week markers, three games; the file ends on a game.
///
/// Game ids: 0 = Week 1, 1 = Sharks v Jets, 2 = Rays v Sharks, 3 = Week 2,
/// 4 = Jets v Rays.
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

pub fn create_division_request(organization: &str, abbreviation: &str) -> CreateDivisionRequest {
    CreateDivisionRequest {
        organization: organization.to_string(),
        abbreviation: abbreviation.to_string(),
        league: String::from("Coed Softball"),
        name_or_number: String::from("Division 1"),
    }
}

pub fn create_load_request(contents: &str) -> LoadScheduleRequest {
    LoadScheduleRequest {
        organization: TEST_ORGANIZATION.to_string(),
        abbreviation: TEST_ABBREVIATION.to_string(),
        uses_double_headers: false,
        file_name: TEST_FILE_NAME.to_string(),
        contents: contents.to_string(),
        section_counts: None,
    }
}

pub fn create_scores_request(scores: Vec<ScoreUpdate>) -> UpdateScoresRequest {
    UpdateScoresRequest {
        organization: TEST_ORGANIZATION.to_string(),
        abbreviation: TEST_ABBREVIATION.to_string(),
        scores,
    }
}

/// An in-memory store holding the test division with no schedule.
pub fn create_test_persistence() -> Persistence {
    let mut persistence: Persistence = Persistence::new_in_memory();
    create_division(
        &mut persistence,
        &create_division_request(TEST_ORGANIZATION, TEST_ABBREVIATION),
        test_now(),
    )
    .unwrap();
    persistence
}

/// An in-memory store holding the test division with the test schedule loaded.
pub fn create_loaded_persistence() -> Persistence {
    let mut persistence: Persistence = create_test_persistence();
    load_schedule_file(
        &mut persistence,
        &create_load_request(&create_test_schedule_file()),
        test_now(),
    )
    .unwrap();
    persistence
}

pub fn forfeit(
    game_id: u32,
    home_score: u16,
    visitor_score: u16,
    home_forfeit: bool,
    visitor_forfeit: bool,
) -> ScoreUpdate {
    ScoreUpdate {
        game_id,
        home_score: Some(home_score),
        visitor_score: Some(visitor_score),
        home_forfeit,
        visitor_forfeit,
    }
}
