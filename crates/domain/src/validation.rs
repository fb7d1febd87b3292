// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Division, ScoreUpdate};
use std::fmt::Write;

/// Minimum abbreviation length, in characters.
pub const ABBREVIATION_MIN_LEN: usize = 2;

/// Maximum abbreviation length, in characters.
pub const ABBREVIATION_MAX_LEN: usize = 50;

/// Score credited to the non-forfeiting side of a single forfeit.
const FORFEIT_WINNING_SCORE: u16 = 7;

const fn is_word_tail_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Letters or digits first, then letters, digits, spaces, dashes, or underscores.
fn is_display_name(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphanumeric() => {
            chars.all(|c| c == ' ' || is_word_tail_char(c))
        }
        _ => false,
    }
}

/// A letter first, then letters, digits, dashes, or underscores.
fn is_code(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => chars.all(is_word_tail_char),
        _ => false,
    }
}

/// Validates an organization name.
///
/// # Errors
///
/// Returns `DomainError::InvalidOrganization` if the name is empty or does
/// not start with a letter or digit followed by letters, digits, spaces,
/// dashes, or underscores.
pub fn validate_organization(organization: &str) -> Result<(), DomainError> {
    if !is_display_name(organization) {
        return Err(DomainError::InvalidOrganization(String::from(
            "Allowed: digits, letters, dash, underline, and spaces.",
        )));
    }
    Ok(())
}

/// Validates a division abbreviation.
///
/// # Errors
///
/// Returns `DomainError::InvalidAbbreviation` if the abbreviation is not
/// between 2 and 50 characters, or does not start with a letter followed by
/// letters, digits, dashes, or underscores.
pub fn validate_abbreviation(abbreviation: &str) -> Result<(), DomainError> {
    let len: usize = abbreviation.chars().count();
    if !(ABBREVIATION_MIN_LEN..=ABBREVIATION_MAX_LEN).contains(&len) {
        return Err(DomainError::InvalidAbbreviation(format!(
            "Must be between {ABBREVIATION_MIN_LEN} and {ABBREVIATION_MAX_LEN} characters, got {len}"
        )));
    }
    if !is_code(abbreviation) {
        return Err(DomainError::InvalidAbbreviation(String::from(
            "Allowed: digits, letters, dash, and underline.",
        )));
    }
    Ok(())
}

/// Validates the descriptive fields and key of a division.
///
/// # Arguments
///
/// * `division` - The division to validate
///
/// # Errors
///
/// Returns the first failing field's error, checked in the order
/// organization, abbreviation, league, name.
pub fn validate_division_fields(division: &Division) -> Result<(), DomainError> {
    validate_organization(&division.organization)?;
    validate_abbreviation(&division.abbreviation)?;
    validate_descriptive_fields(&division.league, &division.name_or_number)
}

/// Validates the league and name fields that `update` may change.
///
/// # Errors
///
/// Returns `DomainError::InvalidLeague` or `DomainError::InvalidNameOrNumber`
/// if either field is empty or contains disallowed characters.
pub fn validate_descriptive_fields(league: &str, name_or_number: &str) -> Result<(), DomainError> {
    if !is_display_name(league) {
        return Err(DomainError::InvalidLeague(String::from(
            "Allowed: digits, letters, dash, underline, and spaces.",
        )));
    }
    if !is_display_name(name_or_number) {
        return Err(DomainError::InvalidNameOrNumber(String::from(
            "Allowed: digits, letters, dash, underline, and spaces.",
        )));
    }
    Ok(())
}

/// Validates a score submission before it is applied.
///
/// A forfeit must be recorded as 7-0 for the non-forfeiting side and a
/// double forfeit as 0-0. Every offending game contributes one sentence,
/// numbered 1-based in submission order. A game with exactly one score
/// reported is rejected outright.
///
/// # Arguments
///
/// * `scores` - The submitted results, in submission order
///
/// # Errors
///
/// Returns `DomainError::IncompleteScore` for the first half-reported game,
/// otherwise `DomainError::InvalidForfeitScores` carrying every forfeit
/// violation.
pub fn validate_score_updates(scores: &[ScoreUpdate]) -> Result<(), DomainError> {
    if let Some(partial) = scores
        .iter()
        .find(|s| s.home_score.is_some() != s.visitor_score.is_some())
    {
        return Err(DomainError::IncompleteScore {
            game_id: partial.game_id,
        });
    }

    let mut message: String = String::new();
    for (index, score) in scores.iter().enumerate() {
        let game_number: usize = index + 1;
        let reported: (Option<u16>, Option<u16>) = (score.home_score, score.visitor_score);
        match (score.home_forfeit, score.visitor_forfeit) {
            (true, true) if reported != (Some(0), Some(0)) => {
                let _ = write!(
                    message,
                    "Score must be 0-0 for double forfeit for Game #{game_number}. "
                );
            }
            (true, false) if reported != (Some(0), Some(FORFEIT_WINNING_SCORE)) => {
                let _ = write!(
                    message,
                    "Score must be 7-0 for forfeit for Game #{game_number}. "
                );
            }
            (false, true) if reported != (Some(FORFEIT_WINNING_SCORE), Some(0)) => {
                let _ = write!(
                    message,
                    "Score must be 7-0 for forfeit for Game #{game_number}. "
                );
            }
            _ => {}
        }
    }

    if message.is_empty() {
        Ok(())
    } else {
        Err(DomainError::InvalidForfeitScores(message))
    }
}
