// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use colored::*;
use meshdash_common::config::Config;
use meshdash_common::models::router::{InitialData, load_initial_data};
use meshdash_common::models::selection::RouterSelection;
use meshdash_common::{info, success, warn};
use meshdash_core::controller::{RouterContainers, RouterController};

use crate::page::{self, PageShell};
use crate::terminal::colors;
use crate::terminal::print::{self, Print};
use crate::widgets::{MetricsFeed, StaticWidgets};

/// Result of one render pass, before it is written anywhere.
pub struct Rendered {
    pub html: String,
    pub containers: RouterContainers,
    pub skipped: Vec<String>,
    pub widgets: StaticWidgets,
}

pub fn render(
    data: &Path,
    router: Option<&RouterSelection>,
    out: Option<&Path>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let initial = load_initial_data(data)?;
    let selected = router.unwrap_or(&cfg.selected);
    info!("Rendering selection '{}' from {} routers", selected, initial.len());

    let rendered = build(&initial, selected, cfg);
    report(&rendered);

    match out {
        Some(path) => {
            std::fs::write(path, &rendered.html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            success!("Dashboard written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.html.as_bytes())
                .context("failed to write dashboard to stdout")?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Runs the container builder over a fresh page shell.
pub fn build(initial: &InitialData, selected: &RouterSelection, cfg: &Config) -> Rendered {
    let menu = page::menu_order(cfg, initial);
    let mut shell = PageShell::new(&cfg.title, &menu);
    let feed = MetricsFeed::new(&cfg.metrics_url);
    let mut widgets = StaticWidgets::default();

    let dashboard = shell.dashboard;
    let containers = RouterController::new(&mut shell.document, &mut widgets).initialize(
        &feed,
        selected,
        initial,
        dashboard,
        &cfg.routers,
    );

    let skipped: Vec<String> = selected
        .visible(initial)
        .into_iter()
        .filter(|router| containers.get(router).is_none())
        .collect();

    Rendered {
        html: shell.to_html(),
        containers,
        skipped,
        widgets,
    }
}

fn report(rendered: &Rendered) {
    for router in &rendered.skipped {
        warn!("Router '{}' is not listed in the menu, no container built", router);
    }

    if Print::quiet_level() > 0 {
        success!("Built {} router containers", rendered.containers.len());
        return;
    }

    Print::header("router containers");
    for (idx, container) in rendered.containers.iter().enumerate() {
        print::tree_head(idx, &container.router);
    }
    for router in &rendered.skipped {
        print::aligned_line("Skipped", router.color(colors::SKIPPED));
    }
    print::aligned_line("Summaries", rendered.widgets.summaries);
    print::aligned_line("Servers", rendered.widgets.server_lists);
    print::aligned_line("Clients", rendered.widgets.client_lists);

    let line: ColoredString = format!(
        "{} containers built",
        rendered.containers.len().to_string().bold()
    )
    .color(colors::TEXT_DEFAULT);
    print::divider();
    print::centerln(&line.to_string());
}
