// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod schedule_file;
mod scores;
mod standings;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use error::{CoreError, ParseError};
pub use schedule_file::{
    DOUBLEHEADER_GAP, PREAMBLE_LINES, ParseOptions, ParsedSchedule, ScheduleSections,
    SectionCounts, parse_schedule_file,
};
pub use scores::{apply_score_updates, install_schedule, rebuild_standings};
pub use standings::{rank_standings, recalculate_standings};
