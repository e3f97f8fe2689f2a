// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

#![cfg(test)]
use meshdash_common::config::RouterConfig;
use meshdash_common::models::selection::RouterSelection;
use meshdash_common::palette;
use meshdash_core::controller::RouterController;
use meshdash_core::template::{self, ROUTER_CLASS, ROUTER_DATA_KEY};
use meshdash_core::view::{Element, Fragment, Node, View};

use crate::utils::{Mounted, Page, Recorder, initial};

const DATA: &str = r#"{
    "svc-a": { "servers": [{ "ip": "127.0.0.1", "port": 4140 }], "clients": ["x", "y"] },
    "svc-b": { "servers": [], "dstIds": { "z": {} } },
    "svc-c": {}
}"#;

/// Same markup as the stock template, minus the clients region.
fn without_clients(routers: &[String]) -> Fragment {
    routers
        .iter()
        .map(|router| {
            Node::Element(
                Element::new("div")
                    .class(ROUTER_CLASS)
                    .data(ROUTER_DATA_KEY, router.as_str())
                    .child(Element::new("div").class(template::SUMMARY_CLASS))
                    .child(Element::new("div").class(template::GRAPH_CLASS))
                    .child(Element::new("div").class(template::STATS_CLASS))
                    .child(Element::new("div").class(template::SERVERS_CLASS)),
            )
        })
        .collect()
}

#[test]
fn test_all_routers_follow_menu_order() {
    let mut page = Page::new(&["svc-b", "svc-a"]);
    let data = initial(DATA);
    let mut widgets = Recorder::default();

    let containers = RouterController::new(&mut page.doc, &mut widgets).initialize(
        &"metrics",
        &RouterSelection::All,
        &data,
        page.dashboard,
        &RouterConfig::default(),
    );

    assert_eq!(containers.routers(), ["svc-b", "svc-a"]);
    let built = page.doc.find_by_class(Some(page.dashboard), ROUTER_CLASS);
    assert_eq!(built.len(), 2, "svc-c is not in the menu and must be left out");

    let order: Vec<&str> = widgets.calls.iter().map(Mounted::router).collect();
    assert_eq!(
        order,
        ["svc-b", "svc-b", "svc-b", "svc-a", "svc-a", "svc-a"],
        "widgets are mounted router by router"
    );
    assert!(widgets.collectors.iter().all(|c| *c == "metrics"));
}

#[test]
fn test_every_region_is_handed_to_its_widget() {
    let mut page = Page::new(&["svc-a"]);
    let data = initial(DATA);
    let mut widgets = Recorder::default();

    let containers = RouterController::new(&mut page.doc, &mut widgets).initialize(
        &"metrics",
        &RouterSelection::from("svc-a"),
        &data,
        page.dashboard,
        &RouterConfig::default(),
    );

    let container = containers.get("svc-a").expect("svc-a container");
    let regions = container.regions;
    assert!(regions.summary.is_some() && regions.servers.is_some());
    assert!(regions.clients.is_some() && regions.graph.is_some() && regions.stats.is_some());

    assert_eq!(
        widgets.calls,
        [
            Mounted::Summary {
                router: "svc-a".into(),
                summary: regions.summary,
                stats: regions.stats,
            },
            Mounted::Servers {
                router: "svc-a".into(),
                servers: regions.servers,
                server_count: 1,
            },
            Mounted::Clients {
                router: "svc-a".into(),
                clients: regions.clients,
                graph: regions.graph,
                colors: palette::color_order().len(),
            },
        ]
    );
}

#[test]
fn test_unknown_router_builds_nothing() {
    let mut page = Page::new(&["svc-a", "svc-b"]);
    let data = initial(DATA);
    let mut widgets = Recorder::default();

    let containers = RouterController::new(&mut page.doc, &mut widgets).initialize(
        &"metrics",
        &RouterSelection::from("svc-z"),
        &data,
        page.dashboard,
        &RouterConfig::default(),
    );

    assert!(containers.is_empty());
    assert!(widgets.calls.is_empty());
    assert!(page.doc.children(page.dashboard).is_empty());
}

#[test]
fn test_missing_region_still_mounts_widget() {
    let mut page = Page::new(&["svc-a"]);
    let data = initial(DATA);
    let mut widgets = Recorder::default();

    let containers = RouterController::new(&mut page.doc, &mut widgets)
        .with_template(without_clients)
        .initialize(
            &"metrics",
            &RouterSelection::All,
            &data,
            page.dashboard,
            &RouterConfig::default(),
        );

    assert_eq!(containers.len(), 1);
    let clients = widgets
        .calls
        .iter()
        .find(|call| matches!(call, Mounted::Clients { .. }))
        .expect("clients widget is still constructed");
    match clients {
        Mounted::Clients { clients, graph, .. } => {
            assert!(clients.is_none());
            assert!(graph.is_some());
        }
        _ => unreachable!(),
    }
}

#[test]
fn test_rerun_replaces_previous_containers() {
    let mut page = Page::new(&["svc-a", "svc-b"]);
    let data = initial(DATA);
    let mut widgets = Recorder::default();

    let first = RouterController::new(&mut page.doc, &mut widgets).initialize(
        &"metrics",
        &RouterSelection::All,
        &data,
        page.dashboard,
        &RouterConfig::default(),
    );
    let second = RouterController::new(&mut page.doc, &mut widgets).initialize(
        &"metrics",
        &RouterSelection::from("svc-b"),
        &data,
        page.dashboard,
        &RouterConfig::default(),
    );

    assert_eq!(first.len(), 2);
    assert_eq!(second.routers(), ["svc-b"]);
    assert_eq!(page.doc.find_by_class(Some(page.dashboard), ROUTER_CLASS).len(), 1);
    for container in &first {
        assert!(!page.doc.is_attached(container.root), "stale container still in the page");
    }
    assert_eq!(widgets.calls.len(), 9);
}

#[test]
fn test_menu_outside_parent_is_not_rebuilt() {
    let mut page = Page::new(&["svc-a"]);
    let data = initial(DATA);
    let mut widgets = Recorder::default();

    RouterController::new(&mut page.doc, &mut widgets).initialize(
        &"metrics",
        &RouterSelection::All,
        &data,
        page.dashboard,
        &RouterConfig::default(),
    );

    let html = page.doc.to_html();
    assert!(html.contains("router-menu-option"));
    assert!(html.contains("data-router=\"svc-a\""));
}
