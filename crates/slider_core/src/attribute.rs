/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! HTML attribute values and ordered attribute maps.
//!
//! Attribute maps are shared between attribute providers, the merger and the
//! tag renderer. They keep insertion order so the rendered markup is stable.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered mapping from attribute name to value.
///
/// Re-inserting an existing name keeps its original position.
pub type AttributeMap = IndexMap<String, AttributeValue>;

/// A single HTML attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Boolean attribute: `true` renders the bare name, `false` omits it.
    Bool(bool),
    /// Integer attribute such as `width` or `tabindex`.
    Int(i64),
    /// Free-form string attribute.
    Str(String),
}

impl AttributeValue {
    /// The string form used when the value takes part in a class list.
    ///
    /// `false` has no textual form and yields an empty token, `true` yields `"1"`.
    pub fn to_token(&self) -> String {
        match self {
            AttributeValue::Bool(true) => "1".to_string(),
            AttributeValue::Bool(false) => String::new(),
            AttributeValue::Int(n) => n.to_string(),
            AttributeValue::Str(s) => s.clone(),
        }
    }

    /// Returns the inner string for string values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Bool(b) => write!(f, "{}", b),
            AttributeValue::Int(n) => write!(f, "{}", n),
            AttributeValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Str(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Str(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Int(value)
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        AttributeValue::Int(i64::from(value))
    }
}

/// Build an [`AttributeMap`] from `name => value` pairs.
///
/// ```rust
/// use slider_core::{attrs, AttributeValue};
///
/// let map = attrs! { "class" => "hero", "tabindex" => 0i64 };
/// assert_eq!(map["class"], AttributeValue::Str("hero".into()));
/// ```
#[macro_export]
macro_rules! attrs {
    () => { $crate::AttributeMap::new() };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::AttributeMap::new();
        $( map.insert($name.to_string(), $crate::AttributeValue::from($value)); )+
        map
    }};
}
