// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! In-memory element tree.
//!
//! Elements live in an arena indexed by [`ElementId`]. Removing children only
//! detaches them, so stale handles stay valid to hold but resolve to nothing.

use std::fmt::Write;

use super::node::{Element, Fragment, Node};
use super::{ElementId, View};

#[derive(Debug)]
struct Slot {
    tag: String,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    children: Vec<Child>,
    attached: bool,
}

#[derive(Debug)]
enum Child {
    Element(ElementId),
    Text(String),
}

#[derive(Debug)]
pub struct Document {
    slots: Vec<Slot>,
    root: ElementId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// An empty document with a `<body>` root.
    pub fn new() -> Self {
        let mut doc = Self {
            slots: Vec::new(),
            root: ElementId(0),
        };
        doc.root = doc.alloc(Element::new("body"));
        doc
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Appends `el` as the last child of `parent`.
    ///
    /// Returns `None` when `parent` is no longer attached.
    pub fn append(&mut self, parent: ElementId, el: Element) -> Option<ElementId> {
        self.slot(parent)?;
        let id = self.alloc(el);
        self.slot_mut(parent)?.children.push(Child::Element(id));
        Some(id)
    }

    pub fn append_text(&mut self, parent: ElementId, text: impl Into<String>) {
        if let Some(slot) = self.slot_mut(parent) {
            slot.children.push(Child::Text(text.into()));
        }
    }

    /// Sets an attribute, replacing any previous value.
    pub fn set_attr(&mut self, el: ElementId, name: &str, value: impl Into<String>) {
        let Some(slot) = self.slot_mut(el) else {
            return;
        };
        let value = value.into();
        match slot.attrs.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value,
            None => slot.attrs.push((name.to_string(), value)),
        }
    }

    pub fn add_class(&mut self, el: ElementId, class: &str) {
        if let Some(slot) = self.slot_mut(el) {
            if !slot.classes.iter().any(|c| c == class) {
                slot.classes.push(class.to_string());
            }
        }
    }

    pub fn has_class(&self, el: ElementId, class: &str) -> bool {
        self.slot(el)
            .is_some_and(|slot| slot.classes.iter().any(|c| c == class))
    }

    pub fn attr(&self, el: ElementId, name: &str) -> Option<&str> {
        self.slot(el)?
            .attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn tag(&self, el: ElementId) -> Option<&str> {
        self.slot(el).map(|slot| slot.tag.as_str())
    }

    /// Direct element children, in order.
    pub fn children(&self, el: ElementId) -> Vec<ElementId> {
        self.slot(el)
            .map(|slot| {
                slot.children
                    .iter()
                    .filter_map(|child| match child {
                        Child::Element(id) => Some(*id),
                        Child::Text(_) => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn is_attached(&self, el: ElementId) -> bool {
        self.slot(el).is_some()
    }

    /// Serializes the whole document, root element included.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_element(&mut out, self.root);
        out
    }

    /// Serializes the children of `el`.
    pub fn inner_html(&self, el: ElementId) -> String {
        let mut out = String::new();
        if let Some(slot) = self.slot(el) {
            self.write_children(&mut out, &slot.children);
        }
        out
    }

    fn slot(&self, el: ElementId) -> Option<&Slot> {
        self.slots.get(el.0).filter(|slot| slot.attached)
    }

    fn slot_mut(&mut self, el: ElementId) -> Option<&mut Slot> {
        self.slots.get_mut(el.0).filter(|slot| slot.attached)
    }

    fn alloc(&mut self, el: Element) -> ElementId {
        let id = ElementId(self.slots.len());
        self.slots.push(Slot {
            tag: el.tag,
            classes: el.classes,
            attrs: el.attrs,
            children: Vec::new(),
            attached: true,
        });

        let children = el
            .children
            .into_iter()
            .map(|node| match node {
                Node::Element(child) => Child::Element(self.alloc(child)),
                Node::Text(text) => Child::Text(text),
            })
            .collect();
        self.slots[id.0].children = children;
        id
    }

    fn detach(&mut self, el: ElementId) {
        let mut stack = vec![el];
        while let Some(id) = stack.pop() {
            let Some(slot) = self.slots.get_mut(id.0) else {
                continue;
            };
            slot.attached = false;
            stack.extend(slot.children.iter().filter_map(|child| match child {
                Child::Element(id) => Some(*id),
                Child::Text(_) => None,
            }));
        }
    }

    fn collect_by_class(&self, el: ElementId, class: &str, out: &mut Vec<ElementId>) {
        let Some(slot) = self.slot(el) else {
            return;
        };
        for child in &slot.children {
            if let Child::Element(id) = child {
                if self.has_class(*id, class) {
                    out.push(*id);
                }
                self.collect_by_class(*id, class, out);
            }
        }
    }

    fn collect_text(&self, el: ElementId, out: &mut String) {
        let Some(slot) = self.slot(el) else {
            return;
        };
        for child in &slot.children {
            match child {
                Child::Text(text) => out.push_str(text),
                Child::Element(id) => self.collect_text(*id, out),
            }
        }
    }

    fn write_element(&self, out: &mut String, el: ElementId) {
        let Some(slot) = self.slot(el) else {
            return;
        };

        let _ = write!(out, "<{}", slot.tag);
        if !slot.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape_html(&slot.classes.join(" ")));
        }
        for (name, value) in &slot.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape_html(value));
        }
        out.push('>');
        self.write_children(out, &slot.children);
        let _ = write!(out, "</{}>", slot.tag);
    }

    fn write_children(&self, out: &mut String, children: &[Child]) {
        for child in children {
            match child {
                Child::Text(text) => out.push_str(&escape_html(text)),
                Child::Element(id) => self.write_element(out, *id),
            }
        }
    }
}

impl View for Document {
    fn find_by_class(&self, scope: Option<ElementId>, class: &str) -> Vec<ElementId> {
        let mut found = Vec::new();
        match scope {
            Some(scope) => self.collect_by_class(scope, class, &mut found),
            None => {
                if self.has_class(self.root, class) {
                    found.push(self.root);
                }
                self.collect_by_class(self.root, class, &mut found);
            }
        }
        found
    }

    fn text(&self, el: ElementId) -> String {
        let mut out = String::new();
        self.collect_text(el, &mut out);
        out
    }

    fn data(&self, el: ElementId, key: &str) -> Option<String> {
        self.attr(el, &format!("data-{key}")).map(str::to_string)
    }

    fn replace_children(&mut self, parent: ElementId, fragment: Fragment) {
        let Some(slot) = self.slot_mut(parent) else {
            return;
        };
        let old = std::mem::take(&mut slot.children);
        for child in old {
            if let Child::Element(id) = child {
                self.detach(id);
            }
        }

        let children: Vec<Child> = fragment
            .into_iter()
            .map(|node| match node {
                Node::Element(el) => Child::Element(self.alloc(el)),
                Node::Text(text) => Child::Text(text),
            })
            .collect();
        if let Some(slot) = self.slot_mut(parent) {
            slot.children = children;
        }
    }
}

/// Escapes text for use in HTML content and double-quoted attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
