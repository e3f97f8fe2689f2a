// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Router Data Model
//!
//! The initial data blob handed to the dashboard: router id mapped to whatever
//! the proxy reported for that router. The container builder never looks inside
//! a [`RouterData`]; the accessors here exist for widgets that render it.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::debug;
use crate::error::ConfigError;

/// Router id mapped to its opaque data, iterated in key order.
pub type InitialData = BTreeMap<String, RouterData>;

/// Opaque per-router payload.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RouterData(Value);

/// A listening address of a router.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerAddr {
    pub ip: String,
    pub port: Option<u16>,
}

impl fmt::Display for ServerAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port {
            Some(port) => write!(f, "{}:{}", self.ip, port),
            None => f.write_str(&self.ip),
        }
    }
}

impl RouterData {
    pub fn raw(&self) -> &Value {
        &self.0
    }

    /// Entries of the `servers` array that carry at least an `ip`.
    pub fn servers(&self) -> Vec<ServerAddr> {
        let Some(servers) = self.0.get("servers").and_then(Value::as_array) else {
            return Vec::new();
        };

        servers
            .iter()
            .filter_map(|server| {
                let ip = server.get("ip").and_then(Value::as_str)?;
                let port = server
                    .get("port")
                    .and_then(Value::as_u64)
                    .and_then(|p| u16::try_from(p).ok());
                Some(ServerAddr {
                    ip: ip.to_string(),
                    port,
                })
            })
            .collect()
    }

    /// Client ids, read from `clients` or, failing that, `dstIds`.
    ///
    /// Objects contribute their keys in document order, arrays their string
    /// elements. The order is what fixes each client's color.
    pub fn clients(&self) -> Vec<String> {
        let field = self.0.get("clients").or_else(|| self.0.get("dstIds"));
        match field {
            Some(Value::Object(map)) => map.keys().cloned().collect(),
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl From<Value> for RouterData {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Parses a JSON document whose root maps router ids to router data.
pub fn parse_initial_data(json: &str) -> Result<InitialData, ConfigError> {
    let root: Value = serde_json::from_str(json)?;
    match root {
        Value::Object(map) => Ok(map
            .into_iter()
            .map(|(router, data)| (router, RouterData(data)))
            .collect()),
        other => Err(ConfigError::NotAnObject {
            found: json_kind(&other),
        }),
    }
}

pub fn load_initial_data(path: &Path) -> Result<InitialData, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let data = parse_initial_data(&json)?;
    debug!(
        verbosity = 1,
        "Loaded data for {} routers from {}",
        data.len(),
        path.display()
    );
    Ok(data)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
