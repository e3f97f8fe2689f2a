// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::fmt::Display;
use std::sync::OnceLock;

use anyhow::bail;
use colored::*;
use meshdash_common::config::Config;
use meshdash_common::palette::ResolvedColor;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

/// Width of the key column in aligned lines.
const KEY_WIDTH: usize = 10;

static PRINT: OnceLock<Print> = OnceLock::new();

#[macro_export]
macro_rules! zprint {
    () => {
        $crate::zprint!("");
    };
    ($($arg:tt)*) => {
        tracing::info!(
            target: "meshdash::print",
            raw_msg = %format_args!($($arg)*)
        );
    };
}

pub struct Print {
    no_banner: bool,
    q_level: u8,
}

impl Print {
    fn new(cfg: &Config) -> Self {
        Self {
            no_banner: cfg.no_banner,
            q_level: cfg.quiet,
        }
    }

    pub fn init(cfg: &Config) -> anyhow::Result<()> {
        if PRINT.set(Self::new(cfg)).is_err() {
            bail!("terminal has already been initialized")
        }
        Ok(())
    }

    /// Falls back to full styling when [`Print::init`] was never called.
    fn get() -> &'static Self {
        PRINT.get_or_init(|| Self::new(&Config::default()))
    }

    pub fn quiet_level() -> u8 {
        Self::get().q_level
    }

    pub fn banner() {
        let p = Self::get();
        if p.no_banner || p.q_level > 0 {
            return;
        }

        let text_content: String = format!("⟦ MESHDASH v{} ⟧ ", env!("CARGO_PKG_VERSION"));
        let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
        let text: ColoredString = text_content.color(colors::PRIMARY).bold();
        let sep: ColoredString = "═"
            .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
            .color(colors::SEPARATOR);

        zprint!("{}{}{}", sep, text, sep);
    }

    pub fn header(msg: &str) {
        let p = Self::get();
        if p.q_level > 0 {
            return;
        }

        let formatted: String = format!("⟦ {} ⟧", msg);
        let msg_len: usize = UnicodeWidthStr::width(formatted.as_str());

        let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
        let left: usize = dash_count / 2;
        let right: usize = dash_count - left;

        let line: ColoredString = format!(
            "{}{}{}",
            "─".repeat(left),
            formatted.to_uppercase().color(colors::ROUTER),
            "─".repeat(right)
        )
        .color(colors::SEPARATOR);

        zprint!("{}", line);
    }

    pub fn end_of_program() {
        let p = Self::get();
        if p.q_level > 0 {
            return;
        }
        zprint!("{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR));
    }
}

pub fn aligned_line<V: Display>(key: &str, value: V) {
    let dots: String = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.width()));
    zprint!(
        "{} {}{}{} {}",
        ">".color(colors::SEPARATOR),
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value
    );
}

pub fn tree_head(idx: usize, name: &str) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    zprint!(
        "{} {}",
        idx_str.color(colors::SEPARATOR),
        name.color(colors::ROUTER)
    );
}

/// Block of the given color followed by its hex value.
pub fn swatch(hex: &str) -> String {
    format!("{} {}", "██".color(colors::swatch(hex)), hex.color(colors::TEXT_DEFAULT))
}

/// One entry of the color order, with its hover shade.
pub fn color_entry(idx: usize, entry: &ResolvedColor) {
    let name: String = format!("{}.{}", entry.family.family, entry.shade);
    let pad: String = " ".repeat(16usize.saturating_sub(name.width()));
    zprint!(
        "{} {}{}{} {} {}",
        format!("[{}]", idx.to_string().color(colors::ACCENT)).color(colors::SEPARATOR),
        name.color(colors::TEXT_DEFAULT),
        pad,
        swatch(entry.color),
        "hover".color(colors::SEPARATOR),
        swatch(entry.hover())
    );
}

pub fn divider() {
    zprint!("{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR));
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    zprint!("{}{}{}", space, msg, space);
}
