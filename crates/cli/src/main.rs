// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # sbt - league standings and schedule tracker
//!
//! Creates divisions, loads schedule files, records scores, and prints
//! standings against a memory or JSON document store.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod output;
mod score_arg;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    Result,
    eyre::{Context, eyre},
};
use sbt::SectionCounts;
use sbt_api::{
    CreateDivisionRequest, DeleteDivisionRequest, DivisionExistsRequest, GetDivisionListRequest,
    GetDivisionRequest, GetGamesRequest, LoadScheduleRequest, StandingsRequest,
    UpdateDivisionRequest, UpdateScoresRequest, eastern_now,
};
use sbt_domain::{GameId, ScoreUpdate};
use sbt_persistence::{BackendKind, Persistence};
use serde::Serialize;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_log::AsTrace;

use crate::score_arg::ScoreArg;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about,
    long_about = None,
    styles = clap_cargo::style::CLAP_STYLING
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Storage backend (`memory` or `document`). Unknown names use `document`.
    #[arg(long, global = true, default_value = "document")]
    backend: String,

    /// Path of the JSON document store.
    #[arg(long, global = true, default_value = "sbt-data.json")]
    data_file: PathBuf,

    /// Print responses as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn backend_kind(&self) -> Result<BackendKind> {
        BackendKind::parse_or_default(&self.backend, true)
            .ok_or_else(|| eyre!("Unknown backend '{}'", self.backend))
    }

    fn open_persistence(&self) -> Result<Persistence> {
        let kind: BackendKind = self.backend_kind()?;
        if kind == BackendKind::Memory {
            warn!("Using the memory backend; nothing is kept after this command");
        }
        let persistence: Persistence = Persistence::open(kind, Some(self.data_file.as_path()))
            .wrap_err_with(|| format!("failed to open {kind} store"))?;
        info!(backend = %kind, data_file = %self.data_file.display(), "Opened division store");
        Ok(persistence)
    }

    fn run(self) -> Result<()> {
        let mut persistence: Persistence = self.open_persistence()?;
        self.command.run(&mut persistence, self.json)
    }
}

/// Key of the division a command acts on.
#[derive(Clone, Debug, clap::Args)]
struct DivisionArgs {
    /// Organization that owns the division
    organization: String,

    /// Division abbreviation
    abbreviation: String,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Create an empty division
    #[command(visible_alias = "c")]
    Create {
        #[command(flatten)]
        division: DivisionArgs,

        /// League name
        #[arg(long)]
        league: String,

        /// Division name or number
        #[arg(long)]
        name: String,
    },

    /// Replace a division's schedule and standings from a schedule file
    #[command(visible_alias = "l")]
    Load {
        #[command(flatten)]
        division: DivisionArgs,

        /// Schedule file to read
        file: PathBuf,

        /// Play every game line twice, home and away, 90 minutes apart
        #[arg(long)]
        double_headers: bool,

        /// Number of team lines; finds the blank separator line when omitted
        #[arg(long, requires = "games")]
        teams: Option<usize>,

        /// Number of game lines after the separator
        #[arg(long, requires = "teams")]
        games: Option<usize>,
    },

    /// Report scores as `<game>:<home>-<visitor>[:home|visitor|both]` or `<game>:clear`
    #[command(visible_alias = "s")]
    Scores {
        #[command(flatten)]
        division: DivisionArgs,

        /// One result per game
        #[arg(required = true)]
        scores: Vec<ScoreArg>,
    },

    /// Print the standings and schedule
    #[command(visible_alias = "st")]
    Standings {
        #[command(flatten)]
        division: DivisionArgs,

        /// Only list this team's games
        #[arg(long)]
        team: Option<String>,
    },

    /// List the games played on the same day and field as a game
    #[command(visible_alias = "g")]
    Games {
        #[command(flatten)]
        division: DivisionArgs,

        /// Game id
        game_id: GameId,
    },

    /// List an organization's divisions
    #[command(visible_alias = "ls")]
    List {
        /// Organization to list
        organization: String,
    },

    /// Print a division with its schedule and standings
    Show {
        #[command(flatten)]
        division: DivisionArgs,
    },

    /// Check whether a division exists
    Exists {
        #[command(flatten)]
        division: DivisionArgs,
    },

    /// Change a division's league, name, and lock flag
    #[command(visible_alias = "u")]
    Update {
        #[command(flatten)]
        division: DivisionArgs,

        /// League name
        #[arg(long)]
        league: String,

        /// Division name or number
        #[arg(long)]
        name: String,

        /// Refuse score reports; omit to unlock
        #[arg(long)]
        locked: bool,
    },

    /// Delete a division with its schedule and standings
    #[command(visible_alias = "rm")]
    Delete {
        #[command(flatten)]
        division: DivisionArgs,
    },
}

impl Command {
    #[allow(clippy::too_many_lines)]
    fn run(self, persistence: &mut Persistence, json: bool) -> Result<()> {
        match self {
            Self::Create {
                division,
                league,
                name,
            } => {
                let request = CreateDivisionRequest {
                    organization: division.organization,
                    abbreviation: division.abbreviation,
                    league,
                    name_or_number: name,
                };
                let response = sbt_api::create_division(persistence, &request, eastern_now()?)?;
                emit(json, &response, || response.message.clone())
            }
            Self::Load {
                division,
                file,
                double_headers,
                teams,
                games,
            } => {
                let contents: String = std::fs::read_to_string(&file)
                    .wrap_err_with(|| format!("failed to read {}", file.display()))?;
                let request = LoadScheduleRequest {
                    organization: division.organization,
                    abbreviation: division.abbreviation,
                    uses_double_headers: double_headers,
                    file_name: file_name(&file),
                    contents,
                    section_counts: teams
                        .zip(games)
                        .map(|(teams, games)| SectionCounts { teams, games }),
                };
                let response = sbt_api::load_schedule_file(persistence, &request, eastern_now()?)?;
                emit(json, &response, || response.message.clone())
            }
            Self::Scores { division, scores } => {
                let request = UpdateScoresRequest {
                    organization: division.organization,
                    abbreviation: division.abbreviation,
                    scores: scores.into_iter().map(ScoreUpdate::from).collect(),
                };
                let response = sbt_api::save_scores(persistence, &request, eastern_now()?)?;
                emit(json, &response, || response.message.clone())
            }
            Self::Standings { division, team } => {
                let request = StandingsRequest {
                    organization: division.organization,
                    abbreviation: division.abbreviation,
                    team_name: team,
                };
                let response = sbt_api::get_standings(persistence, &request)?;
                emit(json, &response, || output::standings_page(&response))
            }
            Self::Games { division, game_id } => {
                let request = GetGamesRequest {
                    organization: division.organization,
                    abbreviation: division.abbreviation,
                    game_id,
                };
                let response = sbt_api::get_games(persistence, &request)?;
                emit(json, &response, || output::game_list(&response.games))
            }
            Self::List { organization } => {
                let request = GetDivisionListRequest { organization };
                let response = sbt_api::get_division_list(persistence, &request)?;
                emit(json, &response, || output::division_list(&response.divisions))
            }
            Self::Show { division } => {
                let request = GetDivisionRequest {
                    organization: division.organization,
                    abbreviation: division.abbreviation,
                };
                let response = sbt_api::get_division(persistence, &request)?;
                emit(json, &response, || output::division_detail(&response.division))
            }
            Self::Exists { division } => {
                let request = DivisionExistsRequest {
                    organization: division.organization,
                    abbreviation: division.abbreviation,
                };
                let response = sbt_api::division_exists(persistence, &request)?;
                emit(json, &response, || response.exists.to_string())
            }
            Self::Update {
                division,
                league,
                name,
                locked,
            } => {
                let request = UpdateDivisionRequest {
                    organization: division.organization,
                    abbreviation: division.abbreviation,
                    league,
                    name_or_number: name,
                    locked,
                };
                let response = sbt_api::update_division(persistence, &request, eastern_now()?)?;
                emit(json, &response, || response.message.clone())
            }
            Self::Delete { division } => {
                let request = DeleteDivisionRequest {
                    organization: division.organization,
                    abbreviation: division.abbreviation,
                };
                let response = sbt_api::delete_division(persistence, &request)?;
                emit(json, &response, || response.message.clone())
            }
        }
    }
}

/// Prints a response as JSON, or as the text `render` produces.
fn emit<T: Serialize>(json: bool, response: &T, render: impl FnOnce() -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
    } else {
        println!("{}", render());
    }
    Ok(())
}

/// The name a schedule file is reported under.
fn file_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
