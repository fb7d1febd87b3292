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
#![allow(clippy::multiple_crate_versions)]

mod clock;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use clock::{eastern_now, to_eastern};
pub use error::{ApiError, translate_core_error, translate_domain_error, translate_persistence_error};
pub use handlers::{
    create_division, delete_division, division_exists, get_division, get_division_list, get_games,
    get_standings, load_schedule_file, save_scores, update_division,
};
pub use request_response::{
    CreateDivisionRequest, CreateDivisionResponse, DeleteDivisionRequest, DeleteDivisionResponse,
    DivisionExistsRequest, DivisionExistsResponse, GetDivisionListRequest,
    GetDivisionListResponse, GetDivisionRequest, GetDivisionResponse, GetGamesRequest,
    GetGamesResponse, LoadScheduleRequest, LoadScheduleResponse, StandingsRequest,
    StandingsResponse, UpdateDivisionRequest, UpdateDivisionResponse, UpdateScoresRequest,
    UpdateScoresResponse,
};
