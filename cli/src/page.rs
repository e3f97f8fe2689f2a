// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Page Shell
//!
//! The static part of the dashboard page: title, the navigation menu listing
//! every known router, and the empty container the router sections are built
//! into. The menu is written once here and only read afterwards.

use std::fmt::Write;

use meshdash_common::config::Config;
use meshdash_common::models::router::InitialData;
use meshdash_common::palette::ColorFamily;
use meshdash_core::controller::MENU_OPTION_CLASS;
use meshdash_core::view::{Document, Element, ElementId, escape_html};

pub struct PageShell {
    pub document: Document,
    pub dashboard: ElementId,
    title: String,
}

impl PageShell {
    pub fn new(title: &str, menu: &[String]) -> Self {
        let mut document = Document::new();
        let root = document.root();

        document.append(root, Element::new("h1").class("page-title").text(title));
        document.append(
            root,
            Element::new("ul").class("router-menu").children(menu.iter().map(|label| {
                Element::new("li")
                    .class(MENU_OPTION_CLASS)
                    .child(Element::new("a").attr("href", format!("#{label}")).text(label.as_str()))
            })),
        );

        // The root is attached for the lifetime of the document, so this append cannot miss.
        let dashboard = document
            .append(root, Element::new("div").class("dashboard"))
            .unwrap_or(root);

        Self {
            document,
            dashboard,
            title: title.to_string(),
        }
    }

    /// Full HTML page, with the palette exposed as CSS custom properties.
    pub fn to_html(&self) -> String {
        let mut css = String::from(":root {\n");
        for family in ColorFamily::ALL {
            for (shade, hex) in family.swatches().iter() {
                let _ = writeln!(css, "  --{}-{}: {};", family, shade, hex);
            }
        }
        css.push('}');

        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{}\n</style>\n</head>\n{}\n</html>\n",
            escape_html(&self.title),
            css,
            self.document.to_html()
        )
    }
}

/// Menu order: explicit config menu, else config router labels, else data keys.
pub fn menu_order(cfg: &Config, initial: &InitialData) -> Vec<String> {
    if !cfg.menu.is_empty() {
        return cfg.menu.clone();
    }
    if !cfg.routers.is_empty() {
        return cfg.routers.labels().map(str::to_string).collect();
    }
    initial.keys().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshdash_common::config::{RouterConfig, RouterEntry};
    use meshdash_common::models::router::RouterData;
    use meshdash_core::controller::menu_labels;

    fn entry(label: &str) -> RouterEntry {
        RouterEntry {
            label: label.to_string(),
            protocol: None,
            dtab: None,
            servers: Vec::new(),
            extra: Default::default(),
        }
    }

    fn data() -> InitialData {
        ["zeta", "alpha"]
            .into_iter()
            .map(|k| (k.to_string(), RouterData::default()))
            .collect()
    }

    #[test]
    fn menu_prefers_explicit_order() {
        let cfg = Config {
            menu: vec!["zeta".into()],
            routers: RouterConfig(vec![entry("alpha")]),
            ..Config::default()
        };
        assert_eq!(menu_order(&cfg, &data()), ["zeta"]);
    }

    #[test]
    fn menu_falls_back_to_router_labels_then_data() {
        let cfg = Config {
            routers: RouterConfig(vec![entry("beta"), entry("alpha")]),
            ..Config::default()
        };
        assert_eq!(menu_order(&cfg, &data()), ["beta", "alpha"]);
        assert_eq!(menu_order(&Config::default(), &data()), ["alpha", "zeta"]);
    }

    #[test]
    fn shell_menu_is_readable_by_the_builder() {
        let shell = PageShell::new("t", &["http".to_string(), "thrift".to_string()]);
        assert_eq!(menu_labels(&shell.document), ["http", "thrift"]);
        assert_ne!(shell.dashboard, shell.document.root());
    }

    #[test]
    fn html_carries_palette_and_escaped_title() {
        let html = PageShell::new("a <b>", &[]).to_html();
        assert!(html.contains("<title>a &lt;b&gt;</title>"));
        assert!(html.contains("--purples-neutral: #9B4AD8;"));
        assert!(html.contains("--blues-night: #0F2A50;"));
        assert!(!html.contains("--greens-night"));
    }
}
