// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    TEST_ABBREVIATION, TEST_ORGANIZATION, create_test_game, create_test_standings, push_wins,
};
use crate::{CoreError, rank_standings, recalculate_standings};
use sbt_domain::{Schedule, Standings};

#[test]
fn test_home_win_updates_both_teams() {
    let standings: Vec<Standings> = create_test_standings(&["Sharks", "Jets"]);
    let schedule: Vec<Schedule> = vec![create_test_game(0, 1, 2, Some((7, 3)))];

    let result: Vec<Standings> = recalculate_standings(&standings, &schedule).unwrap();

    let home: &Standings = &result[0];
    assert_eq!((home.wins, home.losses, home.ties), (1, 0, 0));
    assert_eq!((home.runs_scored, home.runs_against), (7, 3));
    assert!((home.percentage - 1.0).abs() < f64::EPSILON);
    assert!(home.gb.abs() < f64::EPSILON);

    let visitor: &Standings = &result[1];
    assert_eq!((visitor.wins, visitor.losses, visitor.ties), (0, 1, 0));
    assert_eq!((visitor.runs_scored, visitor.runs_against), (3, 7));
    assert!(visitor.percentage.abs() < f64::EPSILON);
    assert!((visitor.gb - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_visitor_win() {
    let standings: Vec<Standings> = create_test_standings(&["Sharks", "Jets"]);
    let schedule: Vec<Schedule> = vec![create_test_game(0, 1, 2, Some((2, 5)))];

    let result: Vec<Standings> = recalculate_standings(&standings, &schedule).unwrap();

    assert_eq!((result[0].wins, result[0].losses), (0, 1));
    assert_eq!((result[1].wins, result[1].losses), (1, 0));
}

#[test]
fn test_recalculation_is_idempotent() {
    let standings: Vec<Standings> = create_test_standings(&["Sharks", "Jets", "Rays"]);
    let mut schedule: Vec<Schedule> = Vec::new();
    push_wins(&mut schedule, 1, 2, 3);
    push_wins(&mut schedule, 3, 1, 1);
    schedule.push(create_test_game(4, 2, 3, Some((6, 6))));

    let once: Vec<Standings> = recalculate_standings(&standings, &schedule).unwrap();
    let twice: Vec<Standings> = recalculate_standings(&once, &schedule).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn test_recalculation_discards_stale_tallies() {
    let mut standings: Vec<Standings> = create_test_standings(&["Sharks", "Jets"]);
    standings[0].wins = 40;
    standings[1].forfeits = 3;
    standings[1].overtime_losses = 2;

    let result: Vec<Standings> = recalculate_standings(&standings, &[]).unwrap();

    assert_eq!(result, create_test_standings(&["Sharks", "Jets"]));
}

#[test]
fn test_double_forfeit_is_a_loss_for_both() {
    let standings: Vec<Standings> = create_test_standings(&["Sharks", "Jets"]);
    let mut game: Schedule = create_test_game(0, 1, 2, Some((0, 0)));
    game.home_forfeit = true;
    game.visitor_forfeit = true;

    let result: Vec<Standings> = recalculate_standings(&standings, &[game]).unwrap();

    for team in &result {
        assert_eq!((team.wins, team.losses, team.ties), (0, 1, 0));
        assert_eq!(team.forfeits, 1);
        assert_eq!(team.forfeits_charged, 1);
    }
}

#[test]
fn test_double_forfeit_outranks_a_lopsided_score() {
    let standings: Vec<Standings> = create_test_standings(&["Sharks", "Jets"]);
    let mut game: Schedule = create_test_game(0, 1, 2, Some((9, 2)));
    game.home_forfeit = true;
    game.visitor_forfeit = true;

    let result: Vec<Standings> = recalculate_standings(&standings, &[game]).unwrap();

    for team in &result {
        assert_eq!((team.wins, team.losses, team.ties), (0, 1, 0));
        assert_eq!((team.forfeits, team.forfeits_charged), (1, 1));
    }
    assert_eq!((result[0].runs_scored, result[0].runs_against), (9, 2));
    assert_eq!((result[1].runs_scored, result[1].runs_against), (2, 9));
}

#[test]
fn test_single_forfeit_counts_against_forfeiting_team() {
    let standings: Vec<Standings> = create_test_standings(&["Sharks", "Jets"]);
    let mut game: Schedule = create_test_game(0, 1, 2, Some((7, 0)));
    game.visitor_forfeit = true;

    let result: Vec<Standings> = recalculate_standings(&standings, &[game]).unwrap();

    assert_eq!((result[0].wins, result[0].forfeits), (1, 0));
    assert_eq!((result[1].losses, result[1].forfeits), (1, 1));
    assert_eq!(result[1].forfeits_charged, 1);
}

#[test]
fn test_tie_counts_for_both_without_wins_or_losses() {
    let standings: Vec<Standings> = create_test_standings(&["Sharks", "Jets"]);
    let schedule: Vec<Schedule> = vec![create_test_game(0, 1, 2, Some((4, 4)))];

    let result: Vec<Standings> = recalculate_standings(&standings, &schedule).unwrap();

    for team in &result {
        assert_eq!((team.wins, team.losses, team.ties), (0, 0, 1));
        assert_eq!((team.runs_scored, team.runs_against), (4, 4));
        assert!(team.percentage.abs() < f64::EPSILON);
    }
}

#[test]
fn test_percentage_counts_ties_in_denominator() {
    let standings: Vec<Standings> = create_test_standings(&["Sharks", "Jets"]);
    let schedule: Vec<Schedule> = vec![
        create_test_game(0, 1, 2, Some((3, 1))),
        create_test_game(1, 1, 2, Some((1, 3))),
        create_test_game(2, 1, 2, Some((2, 2))),
        create_test_game(3, 2, 1, Some((0, 0))),
    ];

    let result: Vec<Standings> = recalculate_standings(&standings, &schedule).unwrap();

    assert_eq!((result[0].wins, result[0].losses, result[0].ties), (1, 1, 2));
    assert!((result[0].percentage - 0.25).abs() < f64::EPSILON);
}

#[test]
fn test_week_rows_are_ignored_even_with_scores() {
    let standings: Vec<Standings> = create_test_standings(&["Sharks", "Jets"]);
    let mut week: Schedule = Schedule::week_boundary(TEST_ORGANIZATION, TEST_ABBREVIATION, 0, "WEEK 3");
    week.home_score = Some(5);
    week.visitor_score = Some(1);
    week.home_forfeit = true;

    let result: Vec<Standings> = recalculate_standings(&standings, &[week]).unwrap();

    assert_eq!(result, create_test_standings(&["Sharks", "Jets"]));
}

#[test]
fn test_unreported_and_half_reported_games_change_nothing() {
    let standings: Vec<Standings> = create_test_standings(&["Sharks", "Jets"]);
    let mut half: Schedule = create_test_game(1, 1, 2, None);
    half.home_score = Some(3);
    let schedule: Vec<Schedule> = vec![create_test_game(0, 1, 2, None), half];

    let result: Vec<Standings> = recalculate_standings(&standings, &schedule).unwrap();

    assert_eq!(result, create_test_standings(&["Sharks", "Jets"]));
}

#[test]
fn test_games_behind_example() {
    // Sharks 5-2 lead, Jets 3-4.
    let standings: Vec<Standings> = create_test_standings(&["Sharks", "Jets", "Rays", "Hawks"]);
    let mut schedule: Vec<Schedule> = Vec::new();
    push_wins(&mut schedule, 1, 3, 5);
    push_wins(&mut schedule, 3, 1, 2);
    push_wins(&mut schedule, 2, 4, 3);
    push_wins(&mut schedule, 4, 2, 4);

    let result: Vec<Standings> = recalculate_standings(&standings, &schedule).unwrap();

    assert_eq!((result[0].wins, result[0].losses), (5, 2));
    assert_eq!((result[1].wins, result[1].losses), (3, 4));
    assert!(result[0].gb.abs() < f64::EPSILON);
    assert!((result[1].gb - 2.0).abs() < f64::EPSILON);
    assert!((result[2].gb - 3.0).abs() < f64::EPSILON);
    assert!((result[3].gb - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_first_listed_team_leads_when_wins_are_tied() {
    let standings: Vec<Standings> = create_test_standings(&["Sharks", "Jets", "Rays"]);
    let mut schedule: Vec<Schedule> = Vec::new();
    push_wins(&mut schedule, 1, 3, 2);
    push_wins(&mut schedule, 2, 3, 2);
    push_wins(&mut schedule, 3, 2, 1);

    let result: Vec<Standings> = recalculate_standings(&standings, &schedule).unwrap();

    // Sharks 2-0 lead; Jets 2-1 trail by half a game.
    assert!(result[0].gb.abs() < f64::EPSILON);
    assert!((result[1].gb - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_leader_gb_can_go_negative_for_teams_with_fewer_losses() {
    // Jets are listed first among the 2-win teams but have more losses.
    let standings: Vec<Standings> = create_test_standings(&["Jets", "Sharks", "Rays"]);
    let mut schedule: Vec<Schedule> = Vec::new();
    push_wins(&mut schedule, 1, 3, 2);
    push_wins(&mut schedule, 3, 1, 1);
    push_wins(&mut schedule, 2, 3, 2);

    let result: Vec<Standings> = recalculate_standings(&standings, &schedule).unwrap();

    assert!(result[0].gb.abs() < f64::EPSILON);
    assert!((result[1].gb + 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_unknown_team_is_a_precondition_violation() {
    let standings: Vec<Standings> = create_test_standings(&["Sharks", "Jets"]);
    let schedule: Vec<Schedule> = vec![create_test_game(6, 1, 9, Some((1, 0)))];

    let result: Result<Vec<Standings>, CoreError> = recalculate_standings(&standings, &schedule);

    assert_eq!(
        result,
        Err(CoreError::UnknownTeam {
            game_id: 6,
            team_id: 9
        })
    );
}

#[test]
fn test_duplicate_team_ids_are_rejected() {
    let mut standings: Vec<Standings> = create_test_standings(&["Sharks", "Jets"]);
    standings[1].team_id = 1;

    let result: Result<Vec<Standings>, CoreError> = recalculate_standings(&standings, &[]);

    assert_eq!(result, Err(CoreError::DuplicateTeam(1)));
}

#[test]
fn test_team_ids_are_resolved_by_id_not_position() {
    let mut standings: Vec<Standings> = create_test_standings(&["Sharks", "Jets"]);
    standings.reverse();
    let schedule: Vec<Schedule> = vec![create_test_game(0, 1, 2, Some((7, 3)))];

    let result: Vec<Standings> = recalculate_standings(&standings, &schedule).unwrap();

    assert_eq!(result[0].name, "Jets");
    assert_eq!(result[0].losses, 1);
    assert_eq!(result[1].name, "Sharks");
    assert_eq!(result[1].wins, 1);
}

#[test]
fn test_empty_division_recalculates_to_empty() {
    let result: Vec<Standings> = recalculate_standings(&[], &[]).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_rank_standings_orders_by_gb_then_percentage() {
    let mut standings: Vec<Standings> = create_test_standings(&["Sharks", "Jets", "Rays"]);
    standings[0].gb = 2.0;
    standings[0].percentage = 0.4;
    standings[1].gb = 0.0;
    standings[1].percentage = 0.5;
    standings[2].gb = 0.0;
    standings[2].percentage = 0.75;

    let ranked: Vec<Standings> = rank_standings(&standings);

    let names: Vec<&str> = ranked.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Rays", "Jets", "Sharks"]);
}
