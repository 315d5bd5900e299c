/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Banner slider rendering.
//!
//! This crate turns slider, banner and responsive crop records into the
//! markup a storefront page needs: `<picture>` elements with AVIF/WebP/original
//! sources, preload hints, video wrappers, and element attributes merged from
//! any number of [`AttributeProvider`]s.
//!
//! Storage, video URL parsing and template directive expansion stay outside;
//! the renderer reaches them through the traits in [`backend`]. Collaborator
//! failures never escape the render path: they are logged with `tracing` and
//! replaced with empty output.
//!
//! # Example
//!
//! ```rust
//! use slider_core::{Banner, ResponsiveCrop};
//! use slider_render::{BannerRenderer, InMemoryCropRepository, MediaUrl};
//!
//! let crops = vec![ResponsiveCrop {
//!     crop_id: 1,
//!     banner_id: 7,
//!     cropped_image: Some("crops/hero-desktop.jpg".to_string()),
//!     webp_image: Some("crops/hero-desktop.webp".to_string()),
//!     generate_webp: true,
//!     target_width: Some(1200),
//!     target_height: Some(500),
//!     media_query: Some("(min-width: 768px)".to_string()),
//!     ..Default::default()
//! }];
//! let renderer = BannerRenderer::new(
//!     MediaUrl::new("https://shop.test/media/"),
//!     Box::new(InMemoryCropRepository::new(crops)),
//! );
//!
//! let banner = Banner {
//!     banner_id: 7,
//!     name: "Hero".to_string(),
//!     ..Default::default()
//! };
//! let html = renderer.responsive_image_html(&banner, false);
//! assert!(html.starts_with("<picture>"));
//! assert!(html.contains(r#"type="image/webp""#));
//! ```

pub mod attribute;
pub mod backend;
pub mod config;
pub mod error;
pub mod io;
pub mod media;
pub mod memory;
pub mod probe;
pub mod providers;
pub mod render;
pub mod renderer;
pub mod widget;

pub use attribute::{merge_attributes, AttributeProvider, AttributeProviderPool, StaticAttributes};
pub use backend::{
    BannerSource, ContentFilter, CropRepository, DimensionProbe, PassthroughFilter,
    ProviderRegistry, SliderLocator, VideoProvider, VideoProviderResolver,
};
pub use config::RendererConfig;
pub use error::{CollaboratorError, RenderError};
pub use io::{load_fixture, SliderFixture};
pub use media::MediaUrl;
pub use memory::{InMemoryCropRepository, InMemorySliders};
pub use probe::FsDimensionProbe;
pub use providers::LocalVideoProvider;
pub use render::PreloadLink;
pub use renderer::BannerRenderer;
pub use widget::SliderWidget;
