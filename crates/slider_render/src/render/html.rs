/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! HTML tag helpers.
//!
//! Attribute values are escaped for double-quoted attributes. Element content
//! is passed through untouched: callers hand in markup, not text.

use slider_core::{AttributeMap, AttributeValue};
use std::fmt::Write;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Escape a value for use inside a double-quoted attribute.
pub fn escape_attr(value: &str) -> String {
    html_escape::encode_double_quoted_attribute(value).replace('\n', "&#10;")
}

/// Render attributes as ` name="value"` segments, each with a leading space.
///
/// `true` renders the bare name and `false` drops the attribute.
pub fn render_tag_attributes(attributes: &AttributeMap) -> String {
    let mut out = String::new();
    for (name, value) in attributes {
        match value {
            AttributeValue::Bool(false) => {}
            AttributeValue::Bool(true) => {
                let _ = write!(out, " {}", escape_attr(name));
            }
            other => {
                let _ = write!(
                    out,
                    r#" {}="{}""#,
                    escape_attr(name),
                    escape_attr(&other.to_string())
                );
            }
        }
    }
    out
}

/// Render attributes as space-joined pairs without a leading space.
///
/// A value equal to its own name (`download="download"`) or `true` renders as
/// the bare name.
pub fn attribute_string(attributes: &AttributeMap) -> String {
    attributes
        .iter()
        .filter_map(|(name, value)| match value {
            AttributeValue::Bool(false) => None,
            AttributeValue::Bool(true) => Some(escape_attr(name)),
            AttributeValue::Str(s) if s == name => Some(escape_attr(name)),
            other => Some(format!(
                r#"{}="{}""#,
                escape_attr(name),
                escape_attr(&other.to_string())
            )),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a complete element. Void elements get no content or closing tag.
pub fn tag(name: &str, content: &str, attributes: &AttributeMap) -> String {
    let attrs = render_tag_attributes(attributes);
    if VOID_ELEMENTS.contains(&name) {
        format!("<{}{}>", name, attrs)
    } else {
        format!("<{}{}>{}</{}>", name, attrs, content, name)
    }
}

/// Render an `<img>` element with `src` first. A `src` in `attributes` is ignored.
pub fn img(src: &str, attributes: &AttributeMap) -> String {
    let mut all = AttributeMap::with_capacity(attributes.len() + 1);
    all.insert("src".to_string(), AttributeValue::from(src));
    for (name, value) in attributes.iter().filter(|(name, _)| name.as_str() != "src") {
        all.insert(name.clone(), value.clone());
    }
    tag("img", "", &all)
}
