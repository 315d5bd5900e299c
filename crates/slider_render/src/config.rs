/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use crate::attribute::StaticAttributes;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_media_base_url() -> String {
    "/media/".to_string()
}

/// Renderer settings, usually read from the `renderer` section of a fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RendererConfig {
    /// Base URL media paths are resolved against.
    #[serde(default = "default_media_base_url")]
    pub media_base_url: String,
    /// Filesystem root for image dimension probing. No probing when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_dir: Option<PathBuf>,
    /// Lazy load the first slide too. Normally it is loaded eagerly.
    pub lazy_load_first: bool,
    /// Static attribute providers, registered in file order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<StaticAttributes>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            media_base_url: default_media_base_url(),
            media_dir: None,
            lazy_load_first: false,
            attributes: Vec::new(),
        }
    }
}
