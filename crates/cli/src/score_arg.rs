// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::str::FromStr;

use sbt_domain::{GameId, ScoreUpdate};

/// One reported result from the command line.
///
/// Accepted forms:
///
/// ```text
/// 12:7-3            game 12, home 7, visitor 3
/// 12:0-7:home       home team forfeited
/// 12:7-0:visitor    visitor forfeited
/// 12:0-0:both       double forfeit
/// 12:clear          remove a reported result
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreArg(pub ScoreUpdate);

impl FromStr for ScoreArg {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut parts = value.split(':');

        let game_id: GameId = parts
            .next()
            .unwrap_or_default()
            .trim()
            .parse()
            .map_err(|_| format!("'{value}': game id must be a number"))?;

        let score: &str = parts
            .next()
            .ok_or_else(|| format!("'{value}': expected <game>:<home>-<visitor>"))?;
        let (home_score, visitor_score) = if score.trim().eq_ignore_ascii_case("clear") {
            (None, None)
        } else {
            let (home, visitor) = score
                .split_once('-')
                .ok_or_else(|| format!("'{value}': score must look like 7-3"))?;
            (Some(runs(home, value)?), Some(runs(visitor, value)?))
        };

        let (home_forfeit, visitor_forfeit) =
            match parts.next().map(|f| f.trim().to_lowercase()).as_deref() {
                None => (false, false),
                Some("home") => (true, false),
                Some("visitor") => (false, true),
                Some("both") => (true, true),
                Some(other) => {
                    return Err(format!(
                        "'{value}': unknown forfeit '{other}', expected home, visitor, or both"
                    ));
                }
            };

        if parts.next().is_some() {
            return Err(format!("'{value}': too many ':' separated parts"));
        }

        Ok(Self(ScoreUpdate {
            game_id,
            home_score,
            visitor_score,
            home_forfeit,
            visitor_forfeit,
        }))
    }
}

fn runs(text: &str, value: &str) -> Result<u16, String> {
    text.trim()
        .parse()
        .map_err(|_| format!("'{value}': '{}' is not a score", text.trim()))
}

impl From<ScoreArg> for ScoreUpdate {
    fn from(arg: ScoreArg) -> Self {
        arg.0
    }
}
