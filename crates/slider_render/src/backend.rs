/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Collaborator contracts consumed by the renderer.
//!
//! Storage, video URL parsing, template directive expansion and image probing
//! live outside this crate. The renderer only talks to them through these
//! traits and never lets their failures escape the render path.

use crate::error::CollaboratorError;
use slider_core::{AttributeMap, Banner, ImageDimensions, ResponsiveCrop, Slider, VideoData};
use std::collections::HashMap;

/// Lookup of responsive crops by banner.
pub trait CropRepository {
    fn get_by_banner_id(&self, banner_id: u64) -> Result<Vec<ResponsiveCrop>, CollaboratorError>;

    /// Crops for several banners in one fetch, grouped by banner id.
    ///
    /// Banners without crops may be missing from the result.
    fn get_by_banner_ids(
        &self,
        banner_ids: &[u64],
    ) -> Result<HashMap<u64, Vec<ResponsiveCrop>>, CollaboratorError>;
}

/// A video hosting provider (or local file storage).
pub trait VideoProvider {
    /// Provider code, e.g. `youtube`, `vimeo` or `local`.
    fn code(&self) -> &str;

    /// Whether the provider serves playable files rather than an embeddable player.
    fn is_local(&self) -> bool;

    fn parse(&self, reference: &str) -> Result<VideoData, CollaboratorError>;

    fn embed_url(&self, video: &VideoData) -> String;

    /// Attributes for the rendered `<video>` or `<iframe>`.
    fn embed_attributes(&self) -> AttributeMap;

    /// Whether this provider understands the reference.
    fn supports(&self, reference: &str) -> bool {
        self.parse(reference).is_ok()
    }
}

/// Picks the provider for a video reference.
pub trait VideoProviderResolver {
    fn resolve(&self, reference: &str) -> Option<&dyn VideoProvider>;
}

/// Reads pixel dimensions of media files.
pub trait DimensionProbe {
    /// `Ok(None)` for a missing file or one that is not a valid image.
    fn probe(&self, path: &str) -> Result<Option<ImageDimensions>, CollaboratorError>;
}

/// Expands template directives in custom HTML content.
pub trait ContentFilter {
    fn filter(&self, content: &str) -> Result<String, CollaboratorError>;
}

/// Resolves a slider by id, applying whatever scoping the host needs.
pub trait SliderLocator {
    fn get_by_id(&self, slider_id: u64) -> Result<Option<Slider>, CollaboratorError>;
}

/// Supplies the active banners of a slider, in display order.
pub trait BannerSource {
    fn active_banners(&self, slider_id: u64) -> Result<Vec<Banner>, CollaboratorError>;
}

/// Content filter that returns its input unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughFilter;

impl ContentFilter for PassthroughFilter {
    fn filter(&self, content: &str) -> Result<String, CollaboratorError> {
        Ok(content.to_string())
    }
}

/// Ordered list of providers; the first one supporting a reference wins.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: Vec<Box<dyn VideoProvider>>,
}

impl ProviderRegistry {
    pub fn new(providers: Vec<Box<dyn VideoProvider>>) -> Self {
        Self { providers }
    }

    pub fn register(&mut self, provider: Box<dyn VideoProvider>) {
        self.providers.push(provider);
    }
}

impl VideoProviderResolver for ProviderRegistry {
    fn resolve(&self, reference: &str) -> Option<&dyn VideoProvider> {
        self.providers
            .iter()
            .find(|p| p.supports(reference))
            .map(|p| p.as_ref())
    }
}
