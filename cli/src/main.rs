// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Meshdash CLI Entry Point
//!
//! The binary entry point for Meshdash.
//!
//! This module bootstraps logging and terminal output, then hands off to the
//! command modules. It keeps the command-line layer apart from the builder in
//! `meshdash-core`.
//!
//! ## Responsibilities
//!
//! 1.  **Global State Setup**: Initializes the `tracing` subscriber and the
//!     terminal output modes (verbosity, quiet mode, banner).
//! 2.  **Configuration Mapping**: Converts parsed arguments into the `Config`
//!     struct, layering the optional TOML file underneath.
//! 3.  **Command Dispatch**: Routes execution to the matching module in `commands/`.
//! 4.  **Error Boundary**: Errors propagated from configuration loading or a
//!     subcommand are logged here and turned into a non-zero `ExitCode`.

mod commands;
mod page;
mod terminal;
mod widgets;

use std::process::ExitCode;

use meshdash_common::error;

use crate::{
    commands::{CommandLine, Commands, palette, render},
    terminal::{logging, print::Print},
};

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();
    logging::init_logging(commands.verbosity);

    let result = run(&commands);

    let exit_code = match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Critical failure: {e:#}");
            ExitCode::FAILURE
        }
    };

    Print::end_of_program();

    exit_code
}

fn run(commands: &CommandLine) -> anyhow::Result<()> {
    let cfg = commands.load_config()?;

    let _ = Print::init(&cfg);
    Print::banner();

    match &commands.command {
        Commands::Render { data, router, out } => {
            render::render(data, router.as_ref(), out.as_deref(), &cfg)
        }
        Commands::Palette => palette::palette(),
    }
}
