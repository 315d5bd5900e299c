/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use slider_core::{attrs, AttributeMap, Banner, BannerType, ResponsiveCrop, Slider};
use slider_render::{
    AttributeProvider, BannerRenderer, CollaboratorError, CropRepository,
    InMemoryCropRepository, MediaUrl,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub const MEDIA_BASE: &str = "https://shop.test/media/";

// --- Record builders ---

pub fn make_slider(id: u64, name: &str) -> Slider {
    Slider {
        slider_id: id,
        name: name.to_string(),
        ..Default::default()
    }
}

pub fn make_image_banner(id: u64, slider_id: u64, image: &str) -> Banner {
    Banner {
        banner_id: id,
        slider_id,
        name: format!("Banner {}", id),
        image: Some(image.to_string()),
        is_active: true,
        position: id as i32,
        ..Default::default()
    }
}

pub fn make_video_banner(id: u64, video_path: &str) -> Banner {
    Banner {
        banner_id: id,
        name: format!("Video {}", id),
        banner_type: BannerType::Video,
        video_path: Some(video_path.to_string()),
        is_active: true,
        ..Default::default()
    }
}

/// A crop with all three formats on disk; `avif` and `webp` toggle generation.
pub fn make_crop(
    banner_id: u64,
    sort_order: i32,
    width: u32,
    height: u32,
    avif: bool,
    webp: bool,
) -> ResponsiveCrop {
    let stem = format!("crops/{}-{}", banner_id, width);
    ResponsiveCrop {
        crop_id: banner_id * 100 + sort_order as u64,
        banner_id,
        cropped_image: Some(format!("{}.jpg", stem)),
        webp_image: Some(format!("{}.webp", stem)),
        avif_image: Some(format!("{}.avif", stem)),
        generate_avif: avif,
        generate_webp: webp,
        sort_order: Some(sort_order),
        target_width: Some(width),
        target_height: Some(height),
        media_query: Some(format!("(min-width: {}px)", width / 2)),
        ..Default::default()
    }
}

pub fn make_renderer(crops: Vec<ResponsiveCrop>) -> BannerRenderer {
    BannerRenderer::new(
        MediaUrl::new(MEDIA_BASE),
        Box::new(InMemoryCropRepository::new(crops)),
    )
}

// --- Collaborator doubles ---

/// Repository whose every lookup fails.
pub struct FailingCropRepository;

impl CropRepository for FailingCropRepository {
    fn get_by_banner_id(&self, banner_id: u64) -> Result<Vec<ResponsiveCrop>, CollaboratorError> {
        Err(CollaboratorError::Repository(format!(
            "connection lost loading banner {}",
            banner_id
        )))
    }

    fn get_by_banner_ids(
        &self,
        _banner_ids: &[u64],
    ) -> Result<HashMap<u64, Vec<ResponsiveCrop>>, CollaboratorError> {
        Err(CollaboratorError::Repository("connection lost".to_string()))
    }
}

/// Repository that records every call before delegating.
pub struct RecordingCropRepository {
    pub inner: InMemoryCropRepository,
    pub calls: Rc<RefCell<Vec<String>>>,
}

impl CropRepository for RecordingCropRepository {
    fn get_by_banner_id(&self, banner_id: u64) -> Result<Vec<ResponsiveCrop>, CollaboratorError> {
        self.calls.borrow_mut().push(format!("one:{}", banner_id));
        self.inner.get_by_banner_id(banner_id)
    }

    fn get_by_banner_ids(
        &self,
        banner_ids: &[u64],
    ) -> Result<HashMap<u64, Vec<ResponsiveCrop>>, CollaboratorError> {
        self.calls.borrow_mut().push(format!("many:{:?}", banner_ids));
        self.inner.get_by_banner_ids(banner_ids)
    }
}

/// Provider contributing one class and one tag attribute to every element kind.
pub struct TagProvider {
    pub name: &'static str,
    pub sort_order: i32,
}

impl TagProvider {
    fn attributes(&self) -> AttributeMap {
        attrs! { "class" => self.name, "data-provider" => self.name }
    }
}

impl AttributeProvider for TagProvider {
    fn container_attributes(&self, _slider: &Slider, _banners: &[Banner]) -> AttributeMap {
        self.attributes()
    }

    fn slide_attributes(&self, _slider: &Slider, _banner: &Banner) -> AttributeMap {
        self.attributes()
    }

    fn link_attributes(&self, _slider: &Slider, _banner: &Banner) -> AttributeMap {
        self.attributes()
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}

pub fn tag_provider(name: &'static str, sort_order: i32) -> Box<dyn AttributeProvider> {
    Box::new(TagProvider { name, sort_order })
}
