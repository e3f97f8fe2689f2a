// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use colored::*;
use meshdash_common::palette::{self, ColorFamily};

use crate::terminal::colors;
use crate::terminal::print::{self, Print};
use crate::zprint;

pub fn palette() -> anyhow::Result<()> {
    if Print::quiet_level() >= 2 {
        for line in raw_lines() {
            zprint!("{}", line);
        }
        return Ok(());
    }

    Print::header("color families");
    for family in ColorFamily::ALL {
        let swatches = family.swatches();
        zprint!("{}", family.name().color(colors::SECONDARY).bold());
        for (shade, hex) in swatches.iter() {
            print::aligned_line(shade.name(), print::swatch(hex));
        }
    }

    Print::header("client color order");
    for (idx, entry) in palette::color_order().iter().enumerate() {
        print::color_entry(idx, entry);
    }

    Ok(())
}

/// `family shade hex`, one per line, then the color order as `order idx hex hover`.
pub fn raw_lines() -> Vec<String> {
    let mut lines = Vec::new();
    for family in ColorFamily::ALL {
        for (shade, hex) in family.swatches().iter() {
            lines.push(format!("{family} {shade} {hex}"));
        }
    }
    for (idx, entry) in palette::color_order().iter().enumerate() {
        lines.push(format!("order {idx} {} {}", entry.color, entry.hover()));
    }
    lines
}
