// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::path::Path;

use serde::Deserialize;

use crate::debug;
use crate::error::ConfigError;
use crate::models::selection::RouterSelection;

/// Endpoint the summary widgets poll when no config file names one.
pub const DEFAULT_METRICS_URL: &str = "/admin/metrics.json";

/// Page title used when no config file names one.
pub const DEFAULT_TITLE: &str = "Router Dashboard";

/// Global configuration options for a dashboard run.
///
/// Constructed from CLI arguments first, then layered with an optional
/// TOML file via [`Config::apply_file`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Toggles the display of the startup banner.
    pub no_banner: bool,

    /// Controls the visual density of the terminal output.
    ///
    /// # Levels
    /// * **0** (Default): Banner, headers and colored swatches.
    /// * **1**: Reduced styling, log lines only.
    /// * **2**: Raw mode. Only the requested data is written.
    pub quiet: u8,

    /// Which routers get a container on the page.
    pub selected: RouterSelection,

    /// Explicit navigation menu order.
    ///
    /// The menu decides both the order of the containers and which routers get
    /// one at all. When empty, the page shell falls back to the labels in
    /// [`Config::routers`], then to the keys of the router data.
    pub menu: Vec<String>,

    /// Metrics endpoint handed to the widgets through the collector.
    pub metrics_url: String,

    /// Title of the rendered page.
    pub title: String,

    /// Per-router configuration, passed untouched to the summary widget.
    pub routers: RouterConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_banner: false,
            quiet: 0,
            selected: RouterSelection::All,
            menu: Vec::new(),
            metrics_url: DEFAULT_METRICS_URL.to_string(),
            title: DEFAULT_TITLE.to_string(),
            routers: RouterConfig::default(),
        }
    }
}

impl Config {
    /// Overwrites every field the file sets; CLI-only flags are left alone.
    pub fn apply_file(&mut self, file: DashboardFile) {
        if let Some(selected) = file.selected {
            self.selected = selected;
        }
        if !file.menu.is_empty() {
            self.menu = file.menu;
        }
        if let Some(url) = file.metrics_url {
            self.metrics_url = url;
        }
        if let Some(title) = file.title {
            self.title = title;
        }
        if !file.routers.is_empty() {
            self.routers = RouterConfig(file.routers);
        }
    }
}

/// On-disk shape of the dashboard configuration.
///
/// ```toml
/// selected = "all"
/// menu = ["http", "thrift"]
/// metrics_url = "/admin/metrics.json"
///
/// [[routers]]
/// label = "http"
/// protocol = "http"
/// dtab = "/svc => /#/io.l5d.fs"
/// servers = [{ ip = "0.0.0.0", port = 4140 }]
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DashboardFile {
    pub selected: Option<RouterSelection>,
    pub menu: Vec<String>,
    pub metrics_url: Option<String>,
    pub title: Option<String>,
    pub routers: Vec<RouterEntry>,
}

impl DashboardFile {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file = Self::parse(&text)?;
        debug!(
            verbosity = 1,
            "Loaded dashboard config from {} ({} routers)",
            path.display(),
            file.routers.len()
        );
        Ok(file)
    }
}

/// One `[[routers]]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouterEntry {
    pub label: String,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub dtab: Option<String>,
    #[serde(default)]
    pub servers: Vec<ListenerEntry>,
    /// Keys this crate does not interpret, kept for the widgets.
    #[serde(flatten)]
    pub extra: toml::Table,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListenerEntry {
    #[serde(default)]
    pub ip: Option<String>,
    pub port: u16,
}

/// Router configuration as a whole, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouterConfig(pub Vec<RouterEntry>);

impl RouterConfig {
    pub fn router(&self, label: &str) -> Option<&RouterEntry> {
        self.0.iter().find(|entry| entry.label == label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|entry| entry.label.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
selected = "thrift"
menu = ["thrift", "http"]
title = "edge"

[[routers]]
label = "http"
protocol = "http"
dtab = "/svc => /#/io.l5d.fs"
servers = [{ ip = "0.0.0.0", port = 4140 }]
timeoutMs = 500

[[routers]]
label = "thrift"
servers = [{ port = 4141 }]
"#;

    #[test]
    fn parses_router_tables() {
        let file = DashboardFile::parse(SAMPLE).unwrap();
        assert_eq!(file.routers.len(), 2);

        let http = &file.routers[0];
        assert_eq!(http.protocol.as_deref(), Some("http"));
        assert_eq!(http.servers[0].port, 4140);
        assert_eq!(
            http.extra.get("timeoutMs").and_then(toml::Value::as_integer),
            Some(500)
        );

        let thrift = &file.routers[1];
        assert!(thrift.protocol.is_none());
        assert!(thrift.servers[0].ip.is_none());
    }

    #[test]
    fn file_overrides_defaults() {
        let mut cfg = Config::default();
        cfg.apply_file(DashboardFile::parse(SAMPLE).unwrap());

        assert_eq!(cfg.selected, RouterSelection::Single("thrift".into()));
        assert_eq!(cfg.menu, ["thrift", "http"]);
        assert_eq!(cfg.title, "edge");
        assert_eq!(cfg.metrics_url, DEFAULT_METRICS_URL);
        assert_eq!(cfg.routers.labels().collect::<Vec<_>>(), ["http", "thrift"]);
        assert!(cfg.routers.router("thrift").is_some());
        assert!(cfg.routers.router("grpc").is_none());
    }

    #[test]
    fn empty_file_keeps_defaults() {
        let mut cfg = Config::default();
        cfg.apply_file(DashboardFile::parse("").unwrap());
        assert!(cfg.selected.is_all());
        assert!(cfg.menu.is_empty());
        assert!(cfg.routers.is_empty());
    }

    #[test]
    fn rejects_router_without_label() {
        let err = DashboardFile::parse("[[routers]]\nprotocol = \"http\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
