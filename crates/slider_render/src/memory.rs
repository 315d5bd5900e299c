/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! In-memory collaborators backed by loaded records.

use crate::backend::{BannerSource, CropRepository, SliderLocator};
use crate::error::CollaboratorError;
use slider_core::{Banner, ResponsiveCrop, Slider};
use std::collections::HashMap;

/// Crop repository over a fixed list of crops.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCropRepository {
    crops: Vec<ResponsiveCrop>,
}

impl InMemoryCropRepository {
    pub fn new(crops: Vec<ResponsiveCrop>) -> Self {
        Self { crops }
    }
}

impl CropRepository for InMemoryCropRepository {
    fn get_by_banner_id(&self, banner_id: u64) -> Result<Vec<ResponsiveCrop>, CollaboratorError> {
        Ok(self
            .crops
            .iter()
            .filter(|c| c.banner_id == banner_id)
            .cloned()
            .collect())
    }

    fn get_by_banner_ids(
        &self,
        banner_ids: &[u64],
    ) -> Result<HashMap<u64, Vec<ResponsiveCrop>>, CollaboratorError> {
        let mut grouped: HashMap<u64, Vec<ResponsiveCrop>> = HashMap::new();
        for crop in self.crops.iter().filter(|c| banner_ids.contains(&c.banner_id)) {
            grouped.entry(crop.banner_id).or_default().push(crop.clone());
        }
        Ok(grouped)
    }
}

/// Slider locator and banner source over fixed lists of records.
#[derive(Debug, Clone, Default)]
pub struct InMemorySliders {
    sliders: Vec<Slider>,
    banners: Vec<Banner>,
}

impl InMemorySliders {
    pub fn new(sliders: Vec<Slider>, banners: Vec<Banner>) -> Self {
        Self { sliders, banners }
    }
}

impl SliderLocator for InMemorySliders {
    fn get_by_id(&self, slider_id: u64) -> Result<Option<Slider>, CollaboratorError> {
        Ok(self
            .sliders
            .iter()
            .find(|s| s.slider_id == slider_id)
            .cloned())
    }
}

impl BannerSource for InMemorySliders {
    /// Active banners of the slider, ordered by position (stable for ties).
    fn active_banners(&self, slider_id: u64) -> Result<Vec<Banner>, CollaboratorError> {
        let mut banners: Vec<Banner> = self
            .banners
            .iter()
            .filter(|b| b.slider_id == slider_id && b.is_active)
            .cloned()
            .collect();
        banners.sort_by_key(|b| b.position);
        Ok(banners)
    }
}
