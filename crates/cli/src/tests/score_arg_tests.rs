// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use sbt_domain::ScoreUpdate;

use crate::score_arg::ScoreArg;

#[test]
fn test_parse_played_game() {
    let arg: ScoreArg = "12:7-3".parse().unwrap();
    assert_eq!(arg.0, ScoreUpdate::played(12, 7, 3));
}

#[test]
fn test_parse_forfeits() {
    let home: ScoreArg = "4:0-7:home".parse().unwrap();
    assert!(home.0.home_forfeit && !home.0.visitor_forfeit);

    let visitor: ScoreArg = "4:7-0:Visitor".parse().unwrap();
    assert!(!visitor.0.home_forfeit && visitor.0.visitor_forfeit);

    let both: ScoreArg = "4:0-0:both".parse().unwrap();
    assert!(both.0.home_forfeit && both.0.visitor_forfeit);
}

#[test]
fn test_parse_clear() {
    let arg: ScoreArg = "9:clear".parse().unwrap();
    assert_eq!(arg.0.home_score, None);
    assert_eq!(arg.0.visitor_score, None);
}

#[test]
fn test_parse_rejects_malformed_values() {
    for value in ["", "x:1-0", "3", "3:7", "3:7-x", "3:7-3:nobody", "3:7-3:home:extra"] {
        assert!(value.parse::<ScoreArg>().is_err(), "accepted '{value}'");
    }
}
