/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The banner renderer.
//!
//! [`BannerRenderer`] composes the attribute pool, the markup builders and the
//! collaborators, and keeps two caches for the lifetime of one render pass:
//! crops by banner id and image dimensions by path.

use crate::attribute::{merge_attributes, AttributeProvider, AttributeProviderPool};
use crate::backend::{
    ContentFilter, CropRepository, DimensionProbe, PassthroughFilter, ProviderRegistry,
    VideoProvider, VideoProviderResolver,
};
use crate::config::RendererConfig;
use crate::media::MediaUrl;
use crate::probe::FsDimensionProbe;
use crate::providers::LocalVideoProvider;
use crate::render::picture::image_attributes;
use crate::render::{
    build_responsive_preload, html, render_picture, select_sources, PreloadLink, VideoMarkup,
    VideoRequest,
};
use slider_core::{
    AttributeMap, Banner, BannerType, ImageDimensions, ResponsiveCrop, Slider, VideoData,
    DEFAULT_ASPECT_RATIO,
};
use std::cell::RefCell;
use std::collections::HashMap;
use tracing::{debug, error};

/// Renders banners into image, picture, video and link markup.
pub struct BannerRenderer {
    media: MediaUrl,
    crops: Box<dyn CropRepository>,
    videos: Box<dyn VideoProviderResolver>,
    probe: Option<Box<dyn DimensionProbe>>,
    filter: Box<dyn ContentFilter>,
    pool: AttributeProviderPool,
    video: VideoMarkup,
    /// Crops by banner id. An empty list is a cached "no crops".
    crop_cache: RefCell<HashMap<u64, Vec<ResponsiveCrop>>>,
    /// Dimensions by media path. `None` is a cached probe failure.
    dimension_cache: RefCell<HashMap<String, Option<ImageDimensions>>>,
}

impl BannerRenderer {
    /// Create a renderer with no video providers, no dimension probe, a
    /// passthrough content filter and an empty attribute pool.
    pub fn new(media: MediaUrl, crops: Box<dyn CropRepository>) -> Self {
        Self {
            media,
            crops,
            videos: Box::new(ProviderRegistry::default()),
            probe: None,
            filter: Box::new(PassthroughFilter),
            pool: AttributeProviderPool::default(),
            video: VideoMarkup::default(),
            crop_cache: RefCell::new(HashMap::new()),
            dimension_cache: RefCell::new(HashMap::new()),
        }
    }

    /// Build a renderer from configuration.
    ///
    /// Registers the local video provider, a filesystem probe when a media
    /// directory is configured, and one static attribute provider per entry.
    pub fn from_config(config: &RendererConfig, crops: Box<dyn CropRepository>) -> Self {
        let media = MediaUrl::new(config.media_base_url.clone());
        let providers: Vec<Box<dyn AttributeProvider>> = config
            .attributes
            .iter()
            .cloned()
            .map(|p| Box::new(p) as Box<dyn AttributeProvider>)
            .collect();

        let local: Box<dyn VideoProvider> = Box::new(LocalVideoProvider::new(media.clone()));

        let mut renderer = Self::new(media, crops)
            .with_videos(Box::new(ProviderRegistry::new(vec![local])))
            .with_pool(AttributeProviderPool::new(providers));
        if let Some(dir) = &config.media_dir {
            renderer = renderer.with_probe(Box::new(FsDimensionProbe::new(dir)));
        }
        renderer
    }

    pub fn with_videos(mut self, videos: Box<dyn VideoProviderResolver>) -> Self {
        self.videos = videos;
        self
    }

    pub fn with_probe(mut self, probe: Box<dyn DimensionProbe>) -> Self {
        self.probe = Some(probe);
        self
    }

    pub fn with_filter(mut self, filter: Box<dyn ContentFilter>) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_pool(mut self, pool: AttributeProviderPool) -> Self {
        self.pool = pool;
        self
    }

    pub fn media(&self) -> &MediaUrl {
        &self.media
    }

    pub fn pool(&self) -> &AttributeProviderPool {
        &self.pool
    }

    pub fn is_video_type(&self, banner: &Banner) -> bool {
        banner.banner_type == BannerType::Video
    }

    pub fn is_custom_type(&self, banner: &Banner) -> bool {
        banner.banner_type == BannerType::Custom
    }

    pub fn has_link(&self, banner: &Banner) -> bool {
        banner.link().is_some()
    }

    /// Expand template directives in custom content.
    ///
    /// A filter failure is logged and the raw content returned.
    pub fn filter_content(&self, content: Option<&str>) -> String {
        let Some(content) = content.filter(|c| !c.is_empty()) else {
            return String::new();
        };

        match self.filter.filter(content) {
            Ok(filtered) => filtered,
            Err(e) => {
                error!(error = %e, "error filtering banner content");
                content.to_string()
            }
        }
    }

    pub fn image_url(&self, banner: &Banner) -> Option<String> {
        banner.image_path().map(|path| self.media.resolve(path))
    }

    /// Plain `<img>` for the banner image, or an empty string without one.
    pub fn image_html(&self, banner: &Banner, lazy: bool) -> String {
        let (Some(url), Some(path)) = (self.image_url(banner), banner.image_path()) else {
            return String::new();
        };

        let probe_path = format!("/{}", path.trim_start_matches('/'));
        let dimensions = self.image_dimensions(&probe_path);
        html::img(&url, &image_attributes(banner.alt_text(), dimensions, lazy))
    }

    /// Pixel dimensions of a media file, probed once per path.
    pub fn image_dimensions(&self, path: &str) -> Option<ImageDimensions> {
        if let Some(cached) = self.dimension_cache.borrow().get(path) {
            return *cached;
        }

        let dimensions = match &self.probe {
            None => None,
            Some(probe) => match probe.probe(path) {
                Ok(found) => found,
                Err(e) => {
                    error!(image = path, error = %e, "error getting image dimensions");
                    None
                }
            },
        };
        self.dimension_cache
            .borrow_mut()
            .insert(path.to_string(), dimensions);
        dimensions
    }

    /// Fetch crops for a batch of banners in one repository call.
    ///
    /// Banners already cached (and id 0) are skipped. Every requested id ends
    /// up cached: banners missing from the result get an empty list, and on a
    /// repository failure all of them do.
    pub fn preload_responsive_crops(&self, banners: &[Banner]) {
        let mut ids: Vec<u64> = Vec::new();
        {
            let cache = self.crop_cache.borrow();
            for banner in banners {
                let id = banner.banner_id;
                if id != 0 && !cache.contains_key(&id) && !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }
        if ids.is_empty() {
            return;
        }

        let result = self.crops.get_by_banner_ids(&ids);
        let mut cache = self.crop_cache.borrow_mut();
        match result {
            Ok(mut grouped) => {
                for id in ids {
                    cache.insert(id, grouped.remove(&id).unwrap_or_default());
                }
            }
            Err(e) => {
                error!(banner_ids = ?ids, error = %e, "error preloading responsive crops");
                for id in ids {
                    cache.insert(id, Vec::new());
                }
            }
        }
    }

    /// The banner's crops, from cache or a single repository lookup.
    pub fn responsive_crops(&self, banner: &Banner) -> Vec<ResponsiveCrop> {
        let id = banner.banner_id;
        if id == 0 {
            return Vec::new();
        }
        if let Some(cached) = self.crop_cache.borrow().get(&id) {
            return cached.clone();
        }

        debug!(banner_id = id, "crop cache miss");
        let crops = match self.crops.get_by_banner_id(id) {
            Ok(crops) => crops,
            Err(e) => {
                error!(banner_id = id, error = %e, "error loading responsive crops");
                Vec::new()
            }
        };
        self.crop_cache.borrow_mut().insert(id, crops.clone());
        crops
    }

    pub fn has_responsive_crops(&self, banner: &Banner) -> bool {
        !self.responsive_crops(banner).is_empty()
    }

    /// `<picture>` markup from the banner's crops, or the plain image without usable crops.
    pub fn responsive_image_html(&self, banner: &Banner, lazy: bool) -> String {
        let crops = self.responsive_crops(banner);
        if crops.is_empty() {
            return self.image_html(banner, lazy);
        }

        let plan = select_sources(&crops, &self.media);
        let legacy = self.image_url(banner);
        render_picture(&plan, banner.alt_text(), lazy, legacy.as_deref())
            .unwrap_or_else(|| self.image_html(banner, lazy))
    }

    /// Preload hints for a banner that has preloading enabled.
    pub fn preload_links(&self, banner: &Banner) -> Vec<PreloadLink> {
        if !banner.preload_enabled {
            return Vec::new();
        }
        self.preload_links_for_banner(banner)
    }

    /// Preload hints regardless of the banner's preload flag.
    pub fn preload_links_for_banner(&self, banner: &Banner) -> Vec<PreloadLink> {
        let crops = self.responsive_crops(banner);
        if !crops.is_empty() {
            return build_responsive_preload(&crops, &self.media)
                .into_iter()
                .collect();
        }

        self.image_url(banner)
            .map(PreloadLink::image)
            .into_iter()
            .collect()
    }

    /// The provider for the banner's video reference, local path first.
    pub fn video_provider(&self, banner: &Banner) -> Option<&dyn VideoProvider> {
        banner
            .video_reference()
            .and_then(|reference| self.videos.resolve(reference))
    }

    pub fn video_data(&self, banner: &Banner) -> Option<VideoData> {
        let provider = self.video_provider(banner)?;
        let reference = banner.video_reference()?;
        match provider.parse(reference) {
            Ok(data) => Some(data),
            Err(e) => {
                debug!(banner_id = banner.banner_id, error = %e, "unparseable video reference");
                None
            }
        }
    }

    /// Video markup, or an empty string when the reference cannot be resolved.
    pub fn video_html(&self, banner: &Banner) -> String {
        let (Some(provider), Some(data)) = (self.video_provider(banner), self.video_data(banner))
        else {
            return String::new();
        };

        let url = provider.embed_url(&data);
        let aspect_ratio = banner
            .video_aspect_ratio
            .as_deref()
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_ASPECT_RATIO);
        let background = banner.video_as_background;
        let overlay = if background {
            Some(self.filter_content(banner.content.as_deref()))
        } else {
            None
        };

        let request = VideoRequest {
            url: &url,
            attributes: provider.embed_attributes(),
            aspect_ratio,
            background,
            overlay,
        };
        if provider.is_local() {
            self.video.render_local(request)
        } else {
            self.video.render_embedded(request, provider.code())
        }
    }

    /// Attribute string for the banner's `<a>` element.
    ///
    /// Pool link attributes are merged in only when a slider is given.
    pub fn link_attributes(&self, banner: &Banner, slider: Option<&Slider>) -> String {
        let mut attributes = AttributeMap::new();
        if let Some(link) = banner.link() {
            attributes.insert("href".to_string(), link.into());
            if banner.open_in_new_tab {
                attributes.insert("target".to_string(), "_blank".into());
                attributes.insert("rel".to_string(), "noopener noreferrer".into());
            }
            if let Some(title) = banner.title() {
                attributes.insert("title".to_string(), title.into());
            }
        }

        if let Some(slider) = slider {
            let pooled = self.pool.link_attributes(slider, banner);
            attributes = merge_attributes(&attributes, &pooled);
        }
        html::attribute_string(&attributes)
    }

    /// Container attributes as ` name="value"` segments, base first then the pool.
    pub fn container_attributes_html(
        &self,
        slider: &Slider,
        banners: &[Banner],
        base: &AttributeMap,
    ) -> String {
        let pooled = self.pool.container_attributes(slider, banners);
        html::render_tag_attributes(&merge_attributes(base, &pooled))
    }

    /// Slide attributes as ` name="value"` segments, base first then the pool.
    pub fn slide_attributes_html(
        &self,
        slider: &Slider,
        banner: &Banner,
        base: &AttributeMap,
    ) -> String {
        let pooled = self.pool.slide_attributes(slider, banner);
        html::render_tag_attributes(&merge_attributes(base, &pooled))
    }

    /// Drop both request caches.
    pub fn reset_caches(&self) {
        self.crop_cache.borrow_mut().clear();
        self.dimension_cache.borrow_mut().clear();
    }
}
