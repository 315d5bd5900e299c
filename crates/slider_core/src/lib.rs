/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Banner slider data model.
//!
//! Sliders, banners and responsive crops are read-only views loaded from
//! storage for the duration of one render. This crate also owns the
//! attribute value types shared by attribute providers and the carousel
//! configuration object serialized for the client.

pub mod attribute;
pub mod banner;
pub mod crop;
pub mod error;
pub mod slider;
pub mod video;

pub use attribute::{AttributeMap, AttributeValue};
pub use banner::{Banner, BannerType};
pub use crop::{ImageDimensions, ImageFormat, ResponsiveCrop, DEFAULT_MEDIA_QUERY};
pub use error::CoreError;
pub use slider::{
    BreakpointSettings, Breakpoints, CarouselConfig, CarouselType, LazyLoad, Slider,
};
pub use video::{VideoData, DEFAULT_ASPECT_RATIO};
