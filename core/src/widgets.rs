// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Widget Interface
//!
//! The three visualizations mounted into every router container. The builder
//! only supplies element handles, identifiers and pass-through inputs; what a
//! widget does with its regions is its own business.
//!
//! A region the template failed to produce arrives as `None`. Widgets are
//! still constructed in that case.

use meshdash_common::config::RouterConfig;
use meshdash_common::models::router::InitialData;
use meshdash_common::palette::ResolvedColor;

use crate::view::{ElementId, View};

/// Inputs of the summary widget.
#[derive(Debug)]
pub struct SummaryMount<'a, C> {
    pub collector: &'a C,
    pub summary: Option<ElementId>,
    pub stats: Option<ElementId>,
    pub router: &'a str,
    pub config: &'a RouterConfig,
}

/// Inputs of the servers widget.
#[derive(Debug)]
pub struct ServersMount<'a, C> {
    pub collector: &'a C,
    pub initial: &'a InitialData,
    pub servers: Option<ElementId>,
    pub router: &'a str,
}

/// Inputs of the clients widget.
#[derive(Debug)]
pub struct ClientsMount<'a, C> {
    pub collector: &'a C,
    pub initial: &'a InitialData,
    pub clients: Option<ElementId>,
    pub graph: Option<ElementId>,
    pub router: &'a str,
    /// Full assignment order; clients index into it by enumeration position.
    pub colors: &'a [ResolvedColor],
}

/// Constructors for the per-router widgets.
///
/// `Collector` is the metrics source threaded through to every widget. The
/// builder never inspects it.
pub trait Widgets<V: View> {
    type Collector;

    fn summary(&mut self, view: &mut V, mount: SummaryMount<'_, Self::Collector>);

    fn servers(&mut self, view: &mut V, mount: ServersMount<'_, Self::Collector>);

    fn clients(&mut self, view: &mut V, mount: ClientsMount<'_, Self::Collector>);
}
