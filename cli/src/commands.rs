// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Command Line Interface Definitions
//!
//! The schema of user input. Execution of each command lives in its own
//! submodule; the flags and help text are kept here.
//!
//! * [`CommandLine`]: global flags (logging, styling, config file).
//! * [`Commands`]: the mutually exclusive operation modes.
//!
//! `From<&CommandLine> for Config` keeps the core crates unaware of clap.

pub mod palette;
pub mod render;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use meshdash_common::config::{Config, DashboardFile};
use meshdash_common::models::selection::RouterSelection;

#[derive(Parser)]
#[command(name = "meshdash")]
#[command(about = "Router dashboard assembly for proxy admin pages.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Dashboard config file (TOML)
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Keep logs and colors but hide the banner
    #[arg(long = "no-banner", global = true)]
    pub no_banner: bool,

    /// Reduce UI visual density (-q: reduce styling, -qq: raw output)
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Increase logging detail (-v: debug logs, -vv: per-region logs)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the router containers and write the dashboard page
    #[command(alias = "r")]
    Render {
        /// Router data: a JSON object keyed by router name
        #[arg(value_name = "DATA")]
        data: PathBuf,

        /// Router to show, or "all"
        #[arg(short = 'r', long = "router", value_name = "ROUTER")]
        router: Option<RouterSelection>,

        /// Output file (defaults to stdout)
        #[arg(short = 'o', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Show the color families and the client color order
    #[command(alias = "p")]
    Palette,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// CLI flags layered over the config file, if one was given.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let mut cfg = Config::from(self);
        if let Some(path) = &self.config {
            cfg.apply_file(DashboardFile::load(path)?);
        }
        Ok(cfg)
    }
}

impl From<&CommandLine> for Config {
    fn from(cmd: &CommandLine) -> Self {
        Self {
            no_banner: cmd.no_banner,
            quiet: cmd.quiet,
            ..Config::default()
        }
    }
}
