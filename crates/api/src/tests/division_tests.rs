// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use sbt_domain::Division;
use sbt_persistence::Persistence;
use time::macros::datetime;

use crate::tests::helpers::{
    TEST_ABBREVIATION, TEST_ORGANIZATION, create_division_request, create_loaded_persistence,
    create_test_persistence, test_now,
};
use crate::{
    ApiError, CreateDivisionResponse, DeleteDivisionRequest, DivisionExistsRequest,
    GetDivisionListRequest, GetDivisionRequest, UpdateDivisionRequest, create_division,
    delete_division, division_exists, get_division, get_division_list, update_division,
};

fn exists(persistence: &Persistence, organization: &str, abbreviation: &str) -> bool {
    division_exists(
        persistence,
        &DivisionExistsRequest {
            organization: organization.to_string(),
            abbreviation: abbreviation.to_string(),
        },
    )
    .unwrap()
    .exists
}

fn fetch(persistence: &Persistence) -> Division {
    get_division(
        persistence,
        &GetDivisionRequest {
            organization: TEST_ORGANIZATION.to_string(),
            abbreviation: TEST_ABBREVIATION.to_string(),
        },
    )
    .unwrap()
    .division
}

fn update_request(league: &str, locked: bool) -> UpdateDivisionRequest {
    UpdateDivisionRequest {
        organization: TEST_ORGANIZATION.to_string(),
        abbreviation: TEST_ABBREVIATION.to_string(),
        league: league.to_string(),
        name_or_number: String::from("Division 2"),
        locked,
    }
}

#[test]
fn test_create_division_stores_empty_division() {
    let mut persistence: Persistence = Persistence::new_in_memory();

    let response: CreateDivisionResponse = create_division(
        &mut persistence,
        &create_division_request(TEST_ORGANIZATION, TEST_ABBREVIATION),
        test_now(),
    )
    .unwrap();

    assert_eq!(response.abbreviation, TEST_ABBREVIATION);
    assert_eq!(response.message, "Created division \"CS01\"");

    let division: Division = fetch(&persistence);
    assert_eq!(division.league, "Coed Softball");
    assert_eq!(division.updated, test_now());
    assert!(!division.locked);
    assert!(division.schedule.is_empty());
    assert!(division.standings.is_empty());
}

#[test]
fn test_create_division_rejects_existing_key_case_insensitively() {
    let mut persistence: Persistence = create_test_persistence();

    let result: Result<CreateDivisionResponse, ApiError> = create_division(
        &mut persistence,
        &create_division_request("DEMO", "cs01"),
        test_now(),
    );

    let err: ApiError = result.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unable to create division because a division already exists with the Abbreviation 'cs01'."
    );
}

#[test]
fn test_create_division_validates_abbreviation() {
    let mut persistence: Persistence = Persistence::new_in_memory();

    let result: Result<CreateDivisionResponse, ApiError> = create_division(
        &mut persistence,
        &create_division_request(TEST_ORGANIZATION, "1A"),
        test_now(),
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "abbreviation"
    ));
    assert!(!exists(&persistence, TEST_ORGANIZATION, "1A"));
}

#[test]
fn test_create_division_validates_organization() {
    let mut persistence: Persistence = Persistence::new_in_memory();

    let result: Result<CreateDivisionResponse, ApiError> = create_division(
        &mut persistence,
        &create_division_request(" Demo", TEST_ABBREVIATION),
        test_now(),
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "organization"
    ));
}

#[test]
fn test_division_exists_is_case_insensitive() {
    let persistence: Persistence = create_test_persistence();

    assert!(exists(&persistence, "demo", "Cs01"));
    assert!(!exists(&persistence, TEST_ORGANIZATION, "CS02"));
    assert!(!exists(&persistence, "Other", TEST_ABBREVIATION));
}

#[test]
fn test_get_division_list_is_ordered_and_scoped() {
    let mut persistence: Persistence = Persistence::new_in_memory();
    for (organization, abbreviation) in [("Demo", "CS02"), ("Other", "AA01"), ("Demo", "CS01")] {
        create_division(
            &mut persistence,
            &create_division_request(organization, abbreviation),
            test_now(),
        )
        .unwrap();
    }

    let divisions: Vec<Division> = get_division_list(
        &persistence,
        &GetDivisionListRequest {
            organization: String::from("demo"),
        },
    )
    .unwrap()
    .divisions;

    let abbreviations: Vec<&str> = divisions.iter().map(|d| d.abbreviation.as_str()).collect();
    assert_eq!(abbreviations, vec!["CS01", "CS02"]);
}

#[test]
fn test_get_division_list_empty_organization() {
    let persistence: Persistence = create_test_persistence();

    let divisions: Vec<Division> = get_division_list(
        &persistence,
        &GetDivisionListRequest {
            organization: String::from("Nobody"),
        },
    )
    .unwrap()
    .divisions;

    assert!(divisions.is_empty());
}

#[test]
fn test_get_division_missing() {
    let persistence: Persistence = Persistence::new_in_memory();

    let result = get_division(
        &persistence,
        &GetDivisionRequest {
            organization: TEST_ORGANIZATION.to_string(),
            abbreviation: TEST_ABBREVIATION.to_string(),
        },
    );

    let err: ApiError = result.unwrap_err();
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
    assert_eq!(
        err.to_string(),
        "No division exists with the Abbreviation 'CS01'."
    );
}

#[test]
fn test_delete_division_removes_it() {
    let mut persistence: Persistence = create_loaded_persistence();

    delete_division(
        &mut persistence,
        &DeleteDivisionRequest {
            organization: String::from("demo"),
            abbreviation: String::from("cs01"),
        },
    )
    .unwrap();

    assert!(!exists(&persistence, TEST_ORGANIZATION, TEST_ABBREVIATION));
}

#[test]
fn test_delete_division_missing() {
    let mut persistence: Persistence = Persistence::new_in_memory();

    let err: ApiError = delete_division(
        &mut persistence,
        &DeleteDivisionRequest {
            organization: TEST_ORGANIZATION.to_string(),
            abbreviation: TEST_ABBREVIATION.to_string(),
        },
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Unable to delete division because no division exists with this Abbreviation."
    );
}

#[test]
fn test_update_division_changes_descriptive_fields_only() {
    let mut persistence: Persistence = create_loaded_persistence();
    let before: Division = fetch(&persistence);
    let later = datetime!(2023-09-05 19:45);

    update_division(&mut persistence, &update_request("Mens Softball", true), later).unwrap();

    let after: Division = fetch(&persistence);
    assert_eq!(after.league, "Mens Softball");
    assert_eq!(after.name_or_number, "Division 2");
    assert!(after.locked);
    assert_eq!(after.updated, later);
    assert_eq!(after.schedule, before.schedule);
    assert_eq!(after.standings, before.standings);
}

#[test]
fn test_update_division_missing() {
    let mut persistence: Persistence = Persistence::new_in_memory();

    let err: ApiError = update_division(
        &mut persistence,
        &update_request("Mens Softball", false),
        test_now(),
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Unable to update division: no division exists with this Abbreviation."
    );
}

#[test]
fn test_update_division_validates_league() {
    let mut persistence: Persistence = create_test_persistence();

    let result = update_division(&mut persistence, &update_request("", false), test_now());

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "league"
    ));
    assert_eq!(fetch(&persistence).league, "Coed Softball");
}
