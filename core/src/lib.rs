// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Assembly of the per-router section of the dashboard.
//!
//! - [`view`]: the narrow query capability the builder runs against, and an
//!   in-memory [`view::Document`] implementing it.
//! - [`template`]: markup for one container per router.
//! - [`widgets`]: the interface of the summary, servers and clients widgets.
//! - [`controller`]: the container builder tying the three together.

pub mod controller;
pub mod template;
pub mod view;
pub mod widgets;
