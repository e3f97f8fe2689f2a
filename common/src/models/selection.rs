// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Router Selection
//!
//! Which routers the dashboard should show: every known router, or exactly one.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::router::InitialData;

/// Textual sentinel selecting every router.
pub const ALL_ROUTERS: &str = "all";

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum RouterSelection {
    #[default]
    All,
    Single(String),
}

impl RouterSelection {
    /// Router ids that should get a container, before menu filtering.
    ///
    /// `All` yields every key of `initial`, in key order. `Single` yields the
    /// one id whether or not `initial` knows it.
    pub fn visible(&self, initial: &InitialData) -> Vec<String> {
        match self {
            RouterSelection::All => initial.keys().cloned().collect(),
            RouterSelection::Single(router) => vec![router.clone()],
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, RouterSelection::All)
    }
}

impl From<&str> for RouterSelection {
    fn from(value: &str) -> Self {
        if value == ALL_ROUTERS {
            RouterSelection::All
        } else {
            RouterSelection::Single(value.to_string())
        }
    }
}

impl From<String> for RouterSelection {
    fn from(value: String) -> Self {
        if value == ALL_ROUTERS {
            RouterSelection::All
        } else {
            RouterSelection::Single(value)
        }
    }
}

impl FromStr for RouterSelection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(RouterSelection::from(s))
    }
}

impl fmt::Display for RouterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouterSelection::All => f.write_str(ALL_ROUTERS),
            RouterSelection::Single(router) => f.write_str(router),
        }
    }
}
