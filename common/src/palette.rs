// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Dashboard Palette
//!
//! The fixed set of color families used by the router graphs, and the order in
//! which colors are handed out to the clients of a router.
//!
//! Every lookup is structured: a [`ColorFamily`] selects a [`Swatches`] table and
//! a [`Shade`] selects one value inside it. There is no string-keyed access.
//!
//! The assignment order is resolved once per process (see [`color_order`]), so the
//! client at position `i` gets the same color on every render as long as the
//! client enumeration order is stable.

use std::fmt;
use std::sync::LazyLock;

/// One named tone inside a color family, from lightest to darkest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shade {
    Light,
    Tint,
    Neutral,
    Shade,
    Dark,
    /// Only present in the `blues` and `purples` families.
    Night,
}

impl Shade {
    pub const ALL: [Shade; 6] = [
        Shade::Light,
        Shade::Tint,
        Shade::Neutral,
        Shade::Shade,
        Shade::Dark,
        Shade::Night,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Shade::Light => "light",
            Shade::Tint => "tint",
            Shade::Neutral => "neutral",
            Shade::Shade => "shade",
            Shade::Dark => "dark",
            Shade::Night => "night",
        }
    }

    /// The next darker tone, or `None` for the darkest one.
    pub const fn darker(self) -> Option<Shade> {
        match self {
            Shade::Light => Some(Shade::Tint),
            Shade::Tint => Some(Shade::Neutral),
            Shade::Neutral => Some(Shade::Shade),
            Shade::Shade => Some(Shade::Dark),
            Shade::Dark => Some(Shade::Night),
            Shade::Night => None,
        }
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The six color families of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorFamily {
    Yellows,
    Greys,
    Blues,
    Purples,
    Greens,
    Reds,
}

impl ColorFamily {
    pub const ALL: [ColorFamily; 6] = [
        ColorFamily::Yellows,
        ColorFamily::Greys,
        ColorFamily::Blues,
        ColorFamily::Purples,
        ColorFamily::Greens,
        ColorFamily::Reds,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ColorFamily::Yellows => "yellows",
            ColorFamily::Greys => "greys",
            ColorFamily::Blues => "blues",
            ColorFamily::Purples => "purples",
            ColorFamily::Greens => "greens",
            ColorFamily::Reds => "reds",
        }
    }

    pub const fn swatches(self) -> &'static Swatches {
        match self {
            ColorFamily::Yellows => &YELLOWS,
            ColorFamily::Greys => &GREYS,
            ColorFamily::Blues => &BLUES,
            ColorFamily::Purples => &PURPLES,
            ColorFamily::Greens => &GREENS,
            ColorFamily::Reds => &REDS,
        }
    }
}

impl fmt::Display for ColorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Concrete hex values of one family.
#[derive(Debug, PartialEq, Eq)]
pub struct Swatches {
    pub family: ColorFamily,
    pub light: &'static str,
    pub tint: &'static str,
    pub neutral: &'static str,
    pub shade: &'static str,
    pub dark: &'static str,
    pub night: Option<&'static str>,
}

impl Swatches {
    pub const fn get(&self, shade: Shade) -> Option<&'static str> {
        match shade {
            Shade::Light => Some(self.light),
            Shade::Tint => Some(self.tint),
            Shade::Neutral => Some(self.neutral),
            Shade::Shade => Some(self.shade),
            Shade::Dark => Some(self.dark),
            Shade::Night => self.night,
        }
    }

    /// Defined shades of this family, lightest first.
    pub fn iter(&self) -> impl Iterator<Item = (Shade, &'static str)> + '_ {
        Shade::ALL
            .into_iter()
            .filter_map(|shade| self.get(shade).map(|hex| (shade, hex)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

pub static YELLOWS: Swatches = Swatches {
    family: ColorFamily::Yellows,
    light: "#FFE7B3",
    tint: "#FAD78A",
    neutral: "#ED9E64",
    shade: "#D85B00",
    dark: "#B84D00",
    night: None,
};

pub static GREYS: Swatches = Swatches {
    family: ColorFamily::Greys,
    light: "#F2F2F2",
    tint: "#C9C9C9",
    neutral: "#878787",
    shade: "#424242",
    dark: "#2B2B2B",
    night: None,
};

pub static BLUES: Swatches = Swatches {
    family: ColorFamily::Blues,
    light: "#D1E2FB",
    tint: "#A4C4F1",
    neutral: "#709DDD",
    shade: "#4076C4",
    dark: "#163F79",
    night: Some("#0F2A50"),
};

pub static PURPLES: Swatches = Swatches {
    family: ColorFamily::Purples,
    light: "#E1D1F6",
    tint: "#CAA2EA",
    neutral: "#9B4AD8",
    shade: "#6A18A4",
    dark: "#430880",
    night: Some("#2A084C"),
};

pub static GREENS: Swatches = Swatches {
    family: ColorFamily::Greens,
    light: "#D1F6E8",
    tint: "#A2EACF",
    neutral: "#4AD8AC",
    shade: "#18A478",
    dark: "#08805B",
    night: None,
};

pub static REDS: Swatches = Swatches {
    family: ColorFamily::Reds,
    light: "#F6D1D1",
    tint: "#EAA2A2",
    neutral: "#D84A4A",
    shade: "#A41818",
    dark: "#800808",
    night: None,
};

/// Precedence in which colors are assigned to enumerated entities.
pub const BASE_COLOR_ORDER: [(ColorFamily, Shade); 10] = [
    (ColorFamily::Purples, Shade::Neutral),
    (ColorFamily::Yellows, Shade::Neutral),
    (ColorFamily::Blues, Shade::Neutral),
    (ColorFamily::Greens, Shade::Neutral),
    (ColorFamily::Reds, Shade::Neutral),
    (ColorFamily::Purples, Shade::Shade),
    (ColorFamily::Yellows, Shade::Shade),
    (ColorFamily::Blues, Shade::Shade),
    (ColorFamily::Greens, Shade::Shade),
    (ColorFamily::Reds, Shade::Shade),
];

/// A color from the assignment order, together with the family it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedColor {
    pub color: &'static str,
    pub shade: Shade,
    pub family: &'static Swatches,
}

impl ResolvedColor {
    pub fn resolve(family: ColorFamily, shade: Shade) -> Option<Self> {
        let swatches = family.swatches();
        swatches.get(shade).map(|color| Self {
            color,
            shade,
            family: swatches,
        })
    }

    /// The next darker tone of the same family, falling back to the color itself.
    pub fn hover(&self) -> &'static str {
        self.shade
            .darker()
            .and_then(|darker| self.family.get(darker))
            .unwrap_or(self.color)
    }
}

static COLOR_ORDER: LazyLock<Vec<ResolvedColor>> = LazyLock::new(|| {
    BASE_COLOR_ORDER
        .iter()
        .filter_map(|&(family, shade)| ResolvedColor::resolve(family, shade))
        .collect()
});

/// The resolved assignment order, built on first use and shared for the process lifetime.
pub fn color_order() -> &'static [ResolvedColor] {
    &COLOR_ORDER
}

/// Color for the entity at `index`, wrapping around after the last entry.
pub fn color_for(index: usize) -> ResolvedColor {
    let order = color_order();
    order[index % order.len()]
}

/// Splits a `#RRGGBB` value into its channels.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
