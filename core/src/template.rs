// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Markup for the router containers.

use crate::view::{Element, Fragment, Node};

/// Marks the root element of one router's container.
pub const ROUTER_CLASS: &str = "router";
/// Attribute (without the `data-` prefix) carrying the router id.
pub const ROUTER_DATA_KEY: &str = "router";

pub const SUMMARY_CLASS: &str = "summary";
pub const SERVERS_CLASS: &str = "servers";
pub const CLIENTS_CLASS: &str = "clients";
pub const GRAPH_CLASS: &str = "router-graph";
pub const STATS_CLASS: &str = "router-stats";

/// Produces the markup inserted into the parent container.
pub type ContainerTemplate = fn(&[String]) -> Fragment;

/// One container per label, in the order given.
///
/// ```text
/// div.router.router-<label>[data-router=<label>]
///   h2.router-label
///   div.summary
///   div.router-graph
///   div.router-stats
///   div.clients
///   div.servers
/// ```
pub fn router_container(routers: &[String]) -> Fragment {
    routers
        .iter()
        .map(|router| {
            let container = Element::new("div")
                .class(ROUTER_CLASS)
                .class(&format!("router-{}", class_suffix(router)))
                .data(ROUTER_DATA_KEY, router.as_str())
                .child(Element::new("h2").class("router-label").text(router.as_str()))
                .child(Element::new("div").class(SUMMARY_CLASS))
                .child(Element::new("div").class(GRAPH_CLASS))
                .child(Element::new("div").class(STATS_CLASS))
                .child(Element::new("div").class(CLIENTS_CLASS))
                .child(Element::new("div").class(SERVERS_CLASS));
            Node::Element(container)
        })
        .collect()
}

/// Router ids may hold characters that are not usable in a class name.
fn class_suffix(router: &str) -> String {
    router
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
