// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Router Container Builder
//!
//! One synchronous pass per dashboard load or selection change:
//!
//! 1.  **Visible set**: every router in the data, or the single selected one.
//! 2.  **Menu order**: the page's `router-menu-option` entries decide which of
//!     those routers get a container and in what order. A router without a menu
//!     entry is dropped without complaint.
//! 3.  **Render**: the container template replaces the parent's children.
//! 4.  **Discover**: containers are mapped by their `data-router` attribute and
//!     their five regions resolved (first match wins, absent stays `None`).
//! 5.  **Mount**: summary, servers and clients widgets are constructed for each
//!     container.
//!
//! Nothing here fails. Missing elements degrade to fewer containers or absent
//! region handles; the widgets decide what to do with those.

use meshdash_common::config::RouterConfig;
use meshdash_common::debug;
use meshdash_common::models::router::InitialData;
use meshdash_common::models::selection::RouterSelection;
use meshdash_common::palette;

use crate::template::{self, ContainerTemplate};
use crate::view::{ElementId, View};
use crate::widgets::{ClientsMount, ServersMount, SummaryMount, Widgets};

/// Class of the navigation entries naming every known router.
pub const MENU_OPTION_CLASS: &str = "router-menu-option";

/// Region handles inside one container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Regions {
    pub summary: Option<ElementId>,
    pub servers: Option<ElementId>,
    pub clients: Option<ElementId>,
    pub graph: Option<ElementId>,
    pub stats: Option<ElementId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterContainer {
    pub router: String,
    pub root: ElementId,
    pub regions: Regions,
}

/// Containers built by one pass, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouterContainers(Vec<RouterContainer>);

impl RouterContainers {
    pub fn get(&self, router: &str) -> Option<&RouterContainer> {
        self.0.iter().find(|c| c.router == router)
    }

    pub fn routers(&self) -> Vec<&str> {
        self.0.iter().map(|c| c.router.as_str()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RouterContainer> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a RouterContainers {
    type Item = &'a RouterContainer;
    type IntoIter = std::slice::Iter<'a, RouterContainer>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

pub struct RouterController<'a, V, W> {
    view: &'a mut V,
    widgets: &'a mut W,
    template: ContainerTemplate,
}

impl<'a, V, W> RouterController<'a, V, W>
where
    V: View,
    W: Widgets<V>,
{
    pub fn new(view: &'a mut V, widgets: &'a mut W) -> Self {
        Self {
            view,
            widgets,
            template: template::router_container,
        }
    }

    /// Swaps the container markup.
    pub fn with_template(mut self, template: ContainerTemplate) -> Self {
        self.template = template;
        self
    }

    /// Builds a container for every visible router listed in the menu and
    /// mounts its widgets.
    ///
    /// The previous children of `parent` are discarded. The returned handles
    /// are informational; all effects have already happened.
    pub fn initialize(
        &mut self,
        collector: &W::Collector,
        selected: &RouterSelection,
        initial: &InitialData,
        parent: ElementId,
        config: &RouterConfig,
    ) -> RouterContainers {
        let labels = visible_routers(&*self.view, selected, initial);
        debug!(
            verbosity = 1,
            "Rendering {} router containers for selection '{}'",
            labels.len(),
            selected
        );

        self.view.replace_children(parent, (self.template)(&labels));
        let containers = discover_containers(&*self.view, parent);

        let colors = palette::color_order();
        for container in &containers {
            let router = container.router.as_str();
            let regions = container.regions;

            self.widgets.summary(
                self.view,
                SummaryMount {
                    collector,
                    summary: regions.summary,
                    stats: regions.stats,
                    router,
                    config,
                },
            );
            self.widgets.servers(
                self.view,
                ServersMount {
                    collector,
                    initial,
                    servers: regions.servers,
                    router,
                },
            );
            self.widgets.clients(
                self.view,
                ClientsMount {
                    collector,
                    initial,
                    clients: regions.clients,
                    graph: regions.graph,
                    router,
                    colors,
                },
            );
        }

        containers
    }
}

/// Routers that get a container, in menu order.
///
/// This is the intersection of the selection's visible set with the labels of
/// the page menu. The menu is authoritative: visible routers it does not list
/// are left out.
pub fn visible_routers<V: View>(
    view: &V,
    selected: &RouterSelection,
    initial: &InitialData,
) -> Vec<String> {
    let visible = selected.visible(initial);
    let labels = menu_labels(view);

    for router in visible.iter().filter(|r| !labels.contains(*r)) {
        debug!(verbosity = 1, "Router '{}' has no menu entry, skipping", router);
    }

    labels
        .into_iter()
        .filter(|label| visible.contains(label))
        .collect()
}

/// Text of every menu option, in document order.
pub fn menu_labels<V: View>(view: &V) -> Vec<String> {
    view.find_by_class(None, MENU_OPTION_CLASS)
        .into_iter()
        .map(|option| view.text(option).trim().to_string())
        .collect()
}

/// Maps every container under `parent` to its router id.
///
/// A container without a `data-router` attribute is ignored. When two
/// containers claim the same router, the entry keeps the position of the first
/// and the element of the last.
pub fn discover_containers<V: View>(view: &V, parent: ElementId) -> RouterContainers {
    let mut containers: Vec<RouterContainer> = Vec::new();

    for root in view.find_by_class(Some(parent), template::ROUTER_CLASS) {
        let Some(router) = view.data(root, template::ROUTER_DATA_KEY) else {
            debug!(verbosity = 2, "Container without a router id, ignoring");
            continue;
        };

        let regions = resolve_regions(view, root);
        match containers.iter_mut().find(|c| c.router == router) {
            Some(existing) => {
                existing.root = root;
                existing.regions = regions;
            }
            None => containers.push(RouterContainer {
                router,
                root,
                regions,
            }),
        }
    }

    RouterContainers(containers)
}

/// First descendant of `container` for each region class.
pub fn resolve_regions<V: View>(view: &V, container: ElementId) -> Regions {
    let first = |class: &str| view.first_by_class(Some(container), class);
    Regions {
        summary: first(template::SUMMARY_CLASS),
        servers: first(template::SERVERS_CLASS),
        clients: first(template::CLIENTS_CLASS),
        graph: first(template::GRAPH_CLASS),
        stats: first(template::STATS_CLASS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{Document, Element, Fragment, Node};
    use meshdash_common::models::router::RouterData;
    use serde_json::json;

    fn page(menu: &[&str]) -> (Document, ElementId) {
        let mut doc = Document::new();
        let root = doc.root();
        if let Some(nav) = doc.append(root, Element::new("ul").class("router-menu")) {
            for label in menu {
                doc.append(nav, Element::new("li").class(MENU_OPTION_CLASS).text(*label));
            }
        }
        let parent = doc.append(root, Element::new("div").class("dashboard")).unwrap();
        (doc, parent)
    }

    fn data(keys: &[&str]) -> InitialData {
        keys.iter()
            .map(|k| (k.to_string(), RouterData::from(json!({}))))
            .collect()
    }

    #[test]
    fn menu_labels_are_trimmed() {
        let (doc, _) = page(&["  http \n", "thrift"]);
        assert_eq!(menu_labels(&doc), ["http", "thrift"]);
    }

    #[test]
    fn all_follows_menu_order() {
        let (doc, _) = page(&["svc-b", "svc-c", "svc-a"]);
        let visible = visible_routers(&doc, &RouterSelection::All, &data(&["svc-a", "svc-b"]));
        assert_eq!(visible, ["svc-b", "svc-a"]);
    }

    #[test]
    fn single_not_in_menu_is_empty() {
        let (doc, _) = page(&["svc-a"]);
        let visible = visible_routers(&doc, &RouterSelection::from("svc-z"), &data(&["svc-z"]));
        assert!(visible.is_empty());
    }

    #[test]
    fn single_needs_no_data_entry() {
        let (doc, _) = page(&["svc-a", "svc-b"]);
        let visible = visible_routers(&doc, &RouterSelection::from("svc-b"), &data(&[]));
        assert_eq!(visible, ["svc-b"]);
    }

    #[test]
    fn regions_take_first_match() {
        let (mut doc, parent) = page(&[]);
        let container = Element::new("div")
            .class("router")
            .data("router", "http")
            .child(Element::new("div").class("summary").data("n", "1"))
            .child(Element::new("div").class("summary").data("n", "2"));
        doc.replace_children(parent, vec![Node::Element(container)]);

        let containers = discover_containers(&doc, parent);
        let regions = containers.get("http").unwrap().regions;
        assert_eq!(doc.data(regions.summary.unwrap(), "n").as_deref(), Some("1"));
        assert!(regions.clients.is_none());
        assert!(regions.servers.is_none());
    }

    fn duplicated(_: &[String]) -> Fragment {
        ["a", "b", "a"]
            .into_iter()
            .map(|r| {
                Node::Element(
                    Element::new("div")
                        .class("router")
                        .data("router", r)
                        .child(Element::new("div").class("summary")),
                )
            })
            .collect()
    }

    #[test]
    fn duplicate_router_ids_collapse() {
        let (mut doc, parent) = page(&[]);
        doc.replace_children(parent, duplicated(&[]));
        let all = doc.find_by_class(Some(parent), "router");

        let containers = discover_containers(&doc, parent);
        assert_eq!(containers.routers(), ["a", "b"]);
        assert_eq!(containers.get("a").unwrap().root, all[2]);
    }

    #[test]
    fn containers_without_id_are_ignored() {
        let (mut doc, parent) = page(&[]);
        doc.replace_children(
            parent,
            vec![
                Node::Element(Element::new("div").class("router")),
                Node::Element(Element::new("div").class("router").data("router", "http")),
            ],
        );
        assert_eq!(discover_containers(&doc, parent).routers(), ["http"]);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn labels() -> impl Strategy<Value = Vec<String>> {
            prop::collection::vec("[a-e]", 0..6)
        }

        proptest! {
            #[test]
            fn all_is_menu_filtered_by_data(menu in labels(), keys in labels()) {
                let menu_refs: Vec<&str> = menu.iter().map(String::as_str).collect();
                let key_refs: Vec<&str> = keys.iter().map(String::as_str).collect();
                let (doc, _) = page(&menu_refs);

                let visible = visible_routers(&doc, &RouterSelection::All, &data(&key_refs));
                let expected: Vec<String> = menu
                    .iter()
                    .filter(|label| keys.contains(label))
                    .cloned()
                    .collect();
                prop_assert_eq!(visible, expected);
            }

            #[test]
            fn every_container_is_visible(menu in labels(), keys in labels()) {
                let menu_refs: Vec<&str> = menu.iter().map(String::as_str).collect();
                let key_refs: Vec<&str> = keys.iter().map(String::as_str).collect();
                let (mut doc, parent) = page(&menu_refs);
                let initial = data(&key_refs);

                let visible = visible_routers(&doc, &RouterSelection::All, &initial);
                doc.replace_children(parent, template::router_container(&visible));
                let containers = discover_containers(&doc, parent);

                for router in containers.routers() {
                    prop_assert!(menu.iter().any(|m| m == router));
                    prop_assert!(initial.contains_key(router));
                }
            }
        }
    }
}
