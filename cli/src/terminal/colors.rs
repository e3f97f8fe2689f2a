// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use colored::Color;
use meshdash_common::palette;

// General Purpose
pub const TEXT_DEFAULT: Color = Color::TrueColor {
    r: 212,
    g: 212,
    b: 212,
}; // Very Light Gray

pub const SEPARATOR: Color = Color::BrightBlack;

pub const PRIMARY: Color = Color::TrueColor {
    r: 155,
    g: 74,
    b: 216,
}; // purples.neutral

pub const SECONDARY: Color = Color::TrueColor {
    r: 112,
    g: 157,
    b: 221,
}; // blues.neutral

pub const ACCENT: Color = Color::TrueColor {
    r: 237,
    g: 158,
    b: 100,
}; // yellows.neutral

// Router data
pub const ROUTER: Color = Color::TrueColor {
    r: 74,
    g: 216,
    b: 172,
}; // greens.neutral

pub const SKIPPED: Color = Color::TrueColor {
    r: 216,
    g: 74,
    b: 74,
}; // reds.neutral

/// Terminal color for a `#RRGGBB` palette value.
pub fn swatch(hex: &str) -> Color {
    match palette::hex_to_rgb(hex) {
        Some((r, g, b)) => Color::TrueColor { r, g, b },
        None => TEXT_DEFAULT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swatch_uses_palette_channels() {
        assert_eq!(palette::PURPLES.neutral, "#9B4AD8");
        assert_eq!(swatch(palette::PURPLES.neutral), PRIMARY);
        assert_eq!(swatch(palette::BLUES.neutral), SECONDARY);
    }

    #[test]
    fn malformed_hex_falls_back() {
        assert_eq!(swatch("purple"), TEXT_DEFAULT);
    }
}
