// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! onto2ids command-line entry point

use clap::Parser;
use onto2ids_model::IdsError;
use std::process::ExitCode;

mod cli;
mod commands;
mod config;

use cli::{Cli, Commands};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate(args) => commands::generate(&args),
        Commands::Versions => commands::versions(cli.json),
        Commands::Classes {
            ifc_version,
            ids_version,
        } => commands::classes(cli.json, &ifc_version, ids_version),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            // Bad ontology/document configuration exits with 2
            match err.downcast_ref::<IdsError>() {
                Some(ids) if ids.is_config_error() => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}
