// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

mod builder;

pub mod utils {
    use meshdash_common::models::router::{InitialData, parse_initial_data};
    use meshdash_core::controller::MENU_OPTION_CLASS;
    use meshdash_core::view::{Document, Element, ElementId};
    use meshdash_core::widgets::{ClientsMount, ServersMount, SummaryMount, Widgets};

    /// A page with a router menu and an empty dashboard container.
    pub struct Page {
        pub doc: Document,
        pub dashboard: ElementId,
    }

    impl Page {
        pub fn new(menu: &[&str]) -> Self {
            let mut doc = Document::new();
            let root = doc.root();
            doc.append(
                root,
                Element::new("ul").class("router-menu").children(menu.iter().map(|label| {
                    Element::new("li")
                        .class(MENU_OPTION_CLASS)
                        .child(Element::new("a").text(*label))
                })),
            );
            let dashboard = doc
                .append(root, Element::new("div").class("dashboard"))
                .expect("root is attached");
            Self { doc, dashboard }
        }
    }

    pub fn initial(json: &str) -> InitialData {
        parse_initial_data(json).expect("valid router data")
    }

    /// One constructor call as seen by [`Recorder`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Mounted {
        Summary {
            router: String,
            summary: Option<ElementId>,
            stats: Option<ElementId>,
        },
        Servers {
            router: String,
            servers: Option<ElementId>,
            server_count: usize,
        },
        Clients {
            router: String,
            clients: Option<ElementId>,
            graph: Option<ElementId>,
            colors: usize,
        },
    }

    impl Mounted {
        pub fn router(&self) -> &str {
            match self {
                Mounted::Summary { router, .. }
                | Mounted::Servers { router, .. }
                | Mounted::Clients { router, .. } => router,
            }
        }
    }

    /// Widget factory that records its inputs and touches nothing.
    #[derive(Debug, Default)]
    pub struct Recorder {
        pub calls: Vec<Mounted>,
        pub collectors: Vec<&'static str>,
    }

    impl Widgets<Document> for Recorder {
        type Collector = &'static str;

        fn summary(&mut self, _view: &mut Document, mount: SummaryMount<'_, &'static str>) {
            self.collectors.push(*mount.collector);
            self.calls.push(Mounted::Summary {
                router: mount.router.to_string(),
                summary: mount.summary,
                stats: mount.stats,
            });
        }

        fn servers(&mut self, _view: &mut Document, mount: ServersMount<'_, &'static str>) {
            self.collectors.push(*mount.collector);
            let server_count = mount
                .initial
                .get(mount.router)
                .map(|data| data.servers().len())
                .unwrap_or_default();
            self.calls.push(Mounted::Servers {
                router: mount.router.to_string(),
                servers: mount.servers,
                server_count,
            });
        }

        fn clients(&mut self, _view: &mut Document, mount: ClientsMount<'_, &'static str>) {
            self.collectors.push(*mount.collector);
            self.calls.push(Mounted::Clients {
                router: mount.router.to_string(),
                clients: mount.clients,
                graph: mount.graph,
                colors: mount.colors.len(),
            });
        }
    }
}
