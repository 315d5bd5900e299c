/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Slider records and the carousel configuration derived from them.
//!
//! Sliders store their responsive settings in the legacy per-breakpoint
//! format (`items`, `nav`, `dots`, `autoplay`, `gap`). The client-side
//! carousel expects `perPage`, `arrows`, `pagination`, `autoplay` and `gap`,
//! so the stored settings are converted here when the configuration object is
//! built.

use crate::error::CoreError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Transition speed in milliseconds.
pub const TRANSITION_SPEED: u32 = 400;

/// A configured carousel instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Slider {
    pub slider_id: u64,
    pub name: String,
    /// Transition effect; `"fade"` cross-fades, anything else slides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
    pub loop_enabled: bool,
    pub autoplay_enabled: bool,
    /// Autoplay interval in milliseconds.
    pub autoplay_timeout: u32,
    pub navigation_enabled: bool,
    pub pagination_enabled: bool,
    pub lazy_load_enabled: bool,
    pub auto_width_enabled: bool,
    pub auto_height_enabled: bool,
    pub responsive_enabled: bool,
    /// Legacy responsive settings as a JSON string keyed by breakpoint width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsive_items: Option<String>,
}

impl Default for Slider {
    fn default() -> Self {
        Self {
            slider_id: 0,
            name: String::new(),
            effect: None,
            loop_enabled: false,
            autoplay_enabled: false,
            autoplay_timeout: 5000,
            navigation_enabled: true,
            pagination_enabled: true,
            lazy_load_enabled: false,
            auto_width_enabled: false,
            auto_height_enabled: false,
            responsive_enabled: false,
            responsive_items: None,
        }
    }
}

/// Carousel transition type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarouselType {
    Slide,
    Loop,
    Fade,
}

/// Lazy loading mode: `"nearby"` or `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LazyLoad {
    Nearby,
    Disabled,
}

impl Serialize for LazyLoad {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LazyLoad::Nearby => serializer.serialize_str("nearby"),
            LazyLoad::Disabled => serializer.serialize_bool(false),
        }
    }
}

/// Per-breakpoint carousel overrides.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakpointSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrows: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<Value>,
}

impl BreakpointSettings {
    pub fn is_empty(&self) -> bool {
        self.per_page.is_none()
            && self.arrows.is_none()
            && self.pagination.is_none()
            && self.autoplay.is_none()
            && self.gap.is_none()
    }
}

/// Breakpoint width to overrides, in stored order.
pub type Breakpoints = IndexMap<i64, BreakpointSettings>;

/// The JSON object handed to the client-side carousel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselConfig {
    #[serde(rename = "type")]
    pub carousel_type: CarouselType,
    pub per_page: u32,
    pub per_move: u32,
    pub autoplay: bool,
    pub interval: u32,
    pub pause_on_hover: bool,
    pub pause_on_focus: bool,
    pub arrows: bool,
    pub pagination: bool,
    pub lazy_load: LazyLoad,
    pub auto_width: bool,
    pub auto_height: bool,
    pub speed: u32,
    pub rewind: bool,
    pub wait_for_transition: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakpoints: Option<Breakpoints>,
}

impl Slider {
    pub fn carousel_type(&self) -> CarouselType {
        if self.effect.as_deref() == Some("fade") {
            CarouselType::Fade
        } else if self.loop_enabled {
            CarouselType::Loop
        } else {
            CarouselType::Slide
        }
    }

    /// Decode the stored responsive settings into carousel breakpoints.
    ///
    /// Returns `Ok(None)` when responsive mode is off or nothing is stored.
    pub fn breakpoints(&self) -> Result<Option<Breakpoints>, CoreError> {
        if !self.responsive_enabled {
            return Ok(None);
        }
        match self.responsive_items.as_deref() {
            Some(raw) if !raw.trim().is_empty() => convert_responsive_items(raw).map(Some),
            _ => Ok(None),
        }
    }

    /// Build the carousel configuration for a slider showing `banner_count` banners.
    ///
    /// A single banner never autoplays and shows no arrows or pagination.
    /// Breakpoints are attached only when at least one survives conversion.
    pub fn carousel_config(
        &self,
        banner_count: usize,
        breakpoints: Option<Breakpoints>,
    ) -> CarouselConfig {
        let carousel_type = self.carousel_type();
        let multiple = banner_count > 1;

        CarouselConfig {
            carousel_type,
            per_page: 1,
            per_move: 1,
            autoplay: multiple && self.autoplay_enabled,
            interval: self.autoplay_timeout,
            pause_on_hover: true,
            pause_on_focus: true,
            arrows: multiple && self.navigation_enabled,
            pagination: multiple && self.pagination_enabled,
            lazy_load: if self.lazy_load_enabled {
                LazyLoad::Nearby
            } else {
                LazyLoad::Disabled
            },
            auto_width: self.auto_width_enabled,
            auto_height: self.auto_height_enabled,
            speed: TRANSITION_SPEED,
            rewind: !self.loop_enabled && carousel_type != CarouselType::Fade,
            wait_for_transition: true,
            breakpoints: breakpoints.filter(|b| !b.is_empty()),
        }
    }
}

/// Convert legacy responsive JSON into carousel breakpoints.
///
/// Accepts either an object keyed by breakpoint width or a list (keyed by
/// index). Unrecognized settings are dropped, as are breakpoints left with
/// no settings.
pub fn convert_responsive_items(raw: &str) -> Result<Breakpoints, CoreError> {
    let entries: Vec<(String, Value)> =
        if let Ok(map) = serde_json::from_str::<IndexMap<String, Value>>(raw) {
            map.into_iter().collect()
        } else {
            let list: Vec<Value> = serde_json::from_str(raw)
                .map_err(|e| CoreError::InvalidResponsiveItems(e.to_string()))?;
            list.into_iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v))
                .collect()
        };

    let mut breakpoints = Breakpoints::new();
    for (key, settings) in entries {
        let Value::Object(settings) = settings else {
            continue;
        };
        let present = |name: &str| settings.get(name).filter(|v| !v.is_null());

        let converted = BreakpointSettings {
            per_page: present("items").map(value_to_int),
            arrows: present("nav").map(value_is_truthy),
            pagination: present("dots").map(value_is_truthy),
            autoplay: present("autoplay").map(value_is_truthy),
            gap: present("gap").cloned(),
        };

        if !converted.is_empty() {
            breakpoints.insert(leading_int(&key), converted);
        }
    }

    Ok(breakpoints)
}

fn value_is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn value_to_int(value: &Value) -> i64 {
    match value {
        Value::Bool(b) => i64::from(*b),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => leading_int(s),
        _ => 0,
    }
}

/// Integer prefix of a string (`"768px"` → 768); `0` when there is none.
fn leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().map(|n| sign * n).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_type() {
        let mut slider = Slider {
            loop_enabled: true,
            ..Default::default()
        };
        assert_eq!(slider.carousel_type(), CarouselType::Loop);

        slider.effect = Some("fade".to_string());
        assert_eq!(slider.carousel_type(), CarouselType::Fade);

        slider.effect = Some("slide".to_string());
        slider.loop_enabled = false;
        assert_eq!(slider.carousel_type(), CarouselType::Slide);
    }

    #[test]
    fn test_single_banner_disables_controls() {
        let slider = Slider {
            autoplay_enabled: true,
            ..Default::default()
        };
        let config = slider.carousel_config(1, None);
        assert!(!config.autoplay);
        assert!(!config.arrows);
        assert!(!config.pagination);
        assert!(config.rewind);

        let config = slider.carousel_config(3, None);
        assert!(config.autoplay);
        assert!(config.arrows);
        assert!(config.pagination);
    }

    #[test]
    fn test_convert_maps_legacy_keys() {
        let raw = r#"{"0": {"items": "1", "nav": 0, "dots": true},
                      "768": {"items": 2, "gap": "1rem", "loop": true},
                      "1024": {"unknown": 1}}"#;
        let breakpoints = convert_responsive_items(raw).unwrap();

        assert_eq!(breakpoints.len(), 2);
        assert_eq!(
            breakpoints[&0],
            BreakpointSettings {
                per_page: Some(1),
                arrows: Some(false),
                pagination: Some(true),
                ..Default::default()
            }
        );
        assert_eq!(breakpoints[&768].per_page, Some(2));
        assert_eq!(breakpoints[&768].gap, Some(Value::String("1rem".to_string())));
        assert!(!breakpoints.contains_key(&1024));
    }

    #[test]
    fn test_convert_rejects_garbage() {
        assert!(convert_responsive_items("not json").is_err());
    }

    #[test]
    fn test_leading_int() {
        assert_eq!(leading_int("768"), 768);
        assert_eq!(leading_int("768px"), 768);
        assert_eq!(leading_int("mobile"), 0);
        assert_eq!(leading_int("-5"), -5);
    }
}
