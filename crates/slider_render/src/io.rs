/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use slider_core::{Banner, ResponsiveCrop, Slider};

use crate::config::RendererConfig;
use crate::memory::{InMemoryCropRepository, InMemorySliders};
use crate::renderer::BannerRenderer;
use crate::RenderError;

/// Everything needed to render sliders without a storefront: renderer
/// settings plus the slider, banner and crop records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderFixture {
    pub renderer: RendererConfig,
    pub sliders: Vec<Slider>,
    pub banners: Vec<Banner>,
    pub crops: Vec<ResponsiveCrop>,
}

impl SliderFixture {
    /// Id of the first slider, or 0 when there is none.
    pub fn default_slider_id(&self) -> u64 {
        self.sliders.first().map_or(0, |s| s.slider_id)
    }

    /// A renderer over the fixture's crops, configured from its `renderer` section.
    pub fn build_renderer(&self) -> BannerRenderer {
        BannerRenderer::from_config(
            &self.renderer,
            Box::new(InMemoryCropRepository::new(self.crops.clone())),
        )
    }

    /// Slider locator and banner source over the fixture's records.
    pub fn build_store(&self) -> InMemorySliders {
        InMemorySliders::new(self.sliders.clone(), self.banners.clone())
    }
}

/// Load a slider fixture from a file.
/// `.json` files are read as JSON, anything else as YAML.
pub fn load_fixture(path: &Path) -> Result<SliderFixture, RenderError> {
    let bytes = fs::read(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    match ext {
        "json" => serde_json::from_slice(&bytes)
            .map_err(|e| RenderError::ParseError("JSON".to_string(), e.to_string())),
        _ => {
            let content = String::from_utf8_lossy(&bytes);
            serde_yaml::from_str(&content)
                .map_err(|e| RenderError::ParseError("YAML".to_string(), e.to_string()))
        }
    }
}
