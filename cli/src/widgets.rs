// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Static Widgets
//!
//! Render-once stand-ins for the live summary, servers and clients widgets.
//! They fill their regions from the router config and the initial data, and
//! tag every region with the metrics endpoint and scope a live widget would
//! poll. Missing regions are skipped.

use meshdash_common::debug;
use meshdash_common::models::router::{InitialData, RouterData};
use meshdash_common::palette::ResolvedColor;
use meshdash_core::view::{Document, Element, ElementId};
use meshdash_core::widgets::{ClientsMount, ServersMount, SummaryMount, Widgets};

/// Stat slots shown for every router, keyed by metric name.
const ROUTER_STATS: [(&str, &str); 4] = [
    ("requests", "Requests"),
    ("success", "Success rate"),
    ("connections", "Connections"),
    ("pending", "Pending"),
];

/// Where the widgets would read their metrics from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsFeed {
    url: String,
}

impl MetricsFeed {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Metric name prefix of one router.
    pub fn scope(&self, router: &str) -> String {
        format!("rt/{router}")
    }

    fn tag(&self, doc: &mut Document, el: ElementId, scope: String) {
        doc.set_attr(el, "data-metrics-url", self.url());
        doc.set_attr(el, "data-metrics-scope", scope);
    }
}

/// Counts how many widgets of each kind were mounted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StaticWidgets {
    pub summaries: usize,
    pub server_lists: usize,
    pub client_lists: usize,
}

impl Widgets<Document> for StaticWidgets {
    type Collector = MetricsFeed;

    fn summary(&mut self, doc: &mut Document, mount: SummaryMount<'_, MetricsFeed>) {
        self.summaries += 1;
        let feed = mount.collector;
        let entry = mount.config.router(mount.router);

        if let Some(summary) = mount.summary {
            feed.tag(doc, summary, feed.scope(mount.router));

            let protocol = entry
                .and_then(|e| e.protocol.as_deref())
                .unwrap_or("unknown");
            let mut list = Element::new("dl")
                .class("summary-details")
                .child(Element::new("dt").text("Protocol"))
                .child(Element::new("dd").text(protocol));

            if let Some(dtab) = entry.and_then(|e| e.dtab.as_deref()) {
                list = list
                    .child(Element::new("dt").text("Dtab"))
                    .child(Element::new("dd").child(Element::new("code").text(dtab)));
            }

            let listeners: Vec<String> = entry
                .map(|e| {
                    e.servers
                        .iter()
                        .map(|s| format!("{}:{}", s.ip.as_deref().unwrap_or("0.0.0.0"), s.port))
                        .collect()
                })
                .unwrap_or_default();
            if !listeners.is_empty() {
                list = list
                    .child(Element::new("dt").text("Listeners"))
                    .child(Element::new("dd").text(listeners.join(", ")));
            }

            doc.append(summary, list);
        } else {
            debug!(verbosity = 2, "Router '{}' has no summary region", mount.router);
        }

        if let Some(stats) = mount.stats {
            feed.tag(doc, stats, feed.scope(mount.router));
            for (metric, label) in ROUTER_STATS {
                doc.append(
                    stats,
                    Element::new("div")
                        .class("router-stat")
                        .data("metric", metric)
                        .child(Element::new("span").class("stat-label").text(label))
                        .child(Element::new("span").class("stat-value").text("-")),
                );
            }
        }
    }

    fn servers(&mut self, doc: &mut Document, mount: ServersMount<'_, MetricsFeed>) {
        self.server_lists += 1;
        let Some(region) = mount.servers else {
            debug!(verbosity = 2, "Router '{}' has no servers region", mount.router);
            return;
        };

        let feed = mount.collector;
        feed.tag(doc, region, format!("{}/srv", feed.scope(mount.router)));

        let servers = router_data(mount.initial, mount.router)
            .map(|data| data.servers())
            .unwrap_or_default();

        if servers.is_empty() {
            doc.append(region, Element::new("p").class("empty").text("No servers"));
            return;
        }

        let items = servers.iter().map(|server| {
            Element::new("li")
                .class("server")
                .data("server", server.to_string())
                .text(server.to_string())
        });
        doc.append(region, Element::new("ul").class("server-list").children(items));
    }

    fn clients(&mut self, doc: &mut Document, mount: ClientsMount<'_, MetricsFeed>) {
        self.client_lists += 1;
        let clients = router_data(mount.initial, mount.router)
            .map(|data| data.clients())
            .unwrap_or_default();

        let feed = mount.collector;
        let scope = format!("{}/dst/id", feed.scope(mount.router));

        if let Some(region) = mount.clients {
            feed.tag(doc, region, scope.clone());
            if clients.is_empty() {
                doc.append(region, Element::new("p").class("empty").text("No clients"));
            } else {
                let items = clients.iter().enumerate().map(|(idx, client)| {
                    let mut item = Element::new("li").class("client").data("client", client.as_str());
                    if let Some(color) = pick(mount.colors, idx) {
                        item = item
                            .attr("style", format!("border-left-color: {}", color.color))
                            .data("color", color.color)
                            .data("hover-color", color.hover());
                    }
                    item.text(client.as_str())
                });
                doc.append(region, Element::new("ul").class("client-list").children(items));
            }
        } else {
            debug!(verbosity = 2, "Router '{}' has no clients region", mount.router);
        }

        if let Some(graph) = mount.graph {
            feed.tag(doc, graph, scope);
            let entries = clients.iter().enumerate().filter_map(|(idx, client)| {
                pick(mount.colors, idx).map(|color| {
                    Element::new("span")
                        .class("legend-entry")
                        .attr("style", format!("background-color: {}", color.color))
                        .text(client.as_str())
                })
            });
            doc.append(graph, Element::new("div").class("graph-legend").children(entries));
        }
    }
}

fn router_data<'a>(initial: &'a InitialData, router: &str) -> Option<&'a RouterData> {
    initial.get(router)
}

fn pick(colors: &[ResolvedColor], idx: usize) -> Option<ResolvedColor> {
    if colors.is_empty() {
        return None;
    }
    Some(colors[idx % colors.len()])
}
