// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

/// Failures while loading dashboard inputs from disk.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid dashboard config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid router data: {0}")]
    Json(#[from] serde_json::Error),

    /// The data file parsed, but its root is not a `router -> data` object.
    #[error("router data must be a JSON object keyed by router name, found {found}")]
    NotAnObject { found: &'static str },
}
