/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Element attributes contributed by independent providers.
//!
//! Several providers may attach attributes to the same rendered element (the
//! slider container, a slide, or a banner link). Their outputs are folded
//! through [`merge_attributes`]: plain attributes are overwritten by later
//! providers while `class` lists are unioned.

pub mod pool;

pub use pool::AttributeProviderPool;

use serde::{Deserialize, Serialize};
use slider_core::{AttributeMap, AttributeValue, Banner, Slider};

/// The attribute that is unioned rather than overwritten.
pub const CLASS_ATTRIBUTE: &str = "class";

/// A pluggable source of element attributes.
///
/// Providers must be pure: they see the slider and banner records only, never
/// another provider's output, and return an empty map for anything that does
/// not concern them.
pub trait AttributeProvider {
    /// Attributes for the slider container element.
    fn container_attributes(&self, _slider: &Slider, _banners: &[Banner]) -> AttributeMap {
        AttributeMap::new()
    }

    /// Attributes for an individual slide element.
    fn slide_attributes(&self, _slider: &Slider, _banner: &Banner) -> AttributeMap {
        AttributeMap::new()
    }

    /// Attributes for a banner's link element.
    fn link_attributes(&self, _slider: &Slider, _banner: &Banner) -> AttributeMap {
        AttributeMap::new()
    }

    /// Execution priority; lower values run first.
    fn sort_order(&self) -> i32;
}

/// Merge `incoming` into `existing`.
///
/// Existing keys keep their position and new keys are appended in `incoming`
/// order. A `class` present on both sides becomes the de-duplicated union of
/// both token lists, existing tokens first; every other key is overwritten.
pub fn merge_attributes(existing: &AttributeMap, incoming: &AttributeMap) -> AttributeMap {
    let mut merged = existing.clone();
    for (name, value) in incoming {
        match merged.get(name) {
            Some(current) if name == CLASS_ATTRIBUTE => {
                let union = union_classes(current, value);
                merged.insert(name.clone(), AttributeValue::Str(union));
            }
            _ => {
                merged.insert(name.clone(), value.clone());
            }
        }
    }
    merged
}

fn union_classes(existing: &AttributeValue, incoming: &AttributeValue) -> String {
    let mut tokens: Vec<String> = Vec::new();
    for value in [existing, incoming] {
        for token in class_tokens(value) {
            if !tokens.contains(&token) {
                tokens.push(token);
            }
        }
    }
    tokens.join(" ")
}

fn class_tokens(value: &AttributeValue) -> Vec<String> {
    match value {
        AttributeValue::Str(s) => s.split_whitespace().map(str::to_string).collect(),
        other => {
            let token = other.to_token();
            if token.is_empty() {
                Vec::new()
            } else {
                vec![token]
            }
        }
    }
}

/// A provider with fixed attributes, typically declared in configuration.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct StaticAttributes {
    pub sort_order: i32,
    pub container: AttributeMap,
    pub slide: AttributeMap,
    pub link: AttributeMap,
}

impl AttributeProvider for StaticAttributes {
    fn container_attributes(&self, _slider: &Slider, _banners: &[Banner]) -> AttributeMap {
        self.container.clone()
    }

    fn slide_attributes(&self, _slider: &Slider, _banner: &Banner) -> AttributeMap {
        self.slide.clone()
    }

    fn link_attributes(&self, _slider: &Slider, _banner: &Banner) -> AttributeMap {
        self.link.clone()
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}
