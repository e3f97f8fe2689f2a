// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # View Capability
//!
//! The builder never touches a rendering environment directly. It asks a
//! [`View`] for elements by class, reads their text and `data-*` attributes, and
//! replaces the children of one element. Anything that can answer those
//! questions can host the dashboard; [`Document`] does it in memory.

mod document;
mod node;

pub use document::{Document, escape_html};
pub use node::{Element, Fragment, Node};

/// Handle to an element owned by a [`View`].
///
/// Handles are only meaningful for the view that issued them. A handle whose
/// element was removed by a later [`View::replace_children`] resolves to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) usize);

pub trait View {
    /// Elements carrying `class`, in document order.
    ///
    /// With a scope, only descendants of that element are searched; the scope
    /// itself never matches. Without one, the whole document is searched.
    fn find_by_class(&self, scope: Option<ElementId>, class: &str) -> Vec<ElementId>;

    /// Concatenated text of the element and all of its descendants.
    fn text(&self, el: ElementId) -> String;

    /// Value of the `data-<key>` attribute.
    fn data(&self, el: ElementId, key: &str) -> Option<String>;

    /// Drops every child of `parent` and inserts `fragment` in its place.
    fn replace_children(&mut self, parent: ElementId, fragment: Fragment);

    /// First match of [`View::find_by_class`], if any.
    fn first_by_class(&self, scope: Option<ElementId>, class: &str) -> Option<ElementId> {
        self.find_by_class(scope, class).into_iter().next()
    }
}
