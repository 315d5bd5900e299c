/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Whole-slider rendering.

use crate::backend::{BannerSource, SliderLocator};
use crate::error::RenderError;
use crate::render::PreloadLink;
use crate::renderer::BannerRenderer;
use slider_core::{attrs, Banner, Slider};
use std::cell::OnceCell;
use tracing::error;

const CONTAINER_CLASS: &str = "banner-slider splide";
const SLIDE_CLASS: &str = "splide__slide banner-slider-slide";

/// One slider placed on a page.
///
/// The slider and its banners are resolved on first use and memoized; the
/// banners' crops are fetched in bulk as soon as the banners are known.
pub struct SliderWidget<'a> {
    slider_id: u64,
    locator: &'a dyn SliderLocator,
    source: &'a dyn BannerSource,
    renderer: &'a BannerRenderer,
    lazy_load_first: bool,
    /// `None` inside means resolved to "no slider".
    slider: OnceCell<Option<Slider>>,
    banners: OnceCell<Vec<Banner>>,
}

impl<'a> SliderWidget<'a> {
    pub fn new(
        slider_id: u64,
        locator: &'a dyn SliderLocator,
        source: &'a dyn BannerSource,
        renderer: &'a BannerRenderer,
    ) -> Self {
        Self {
            slider_id,
            locator,
            source,
            renderer,
            lazy_load_first: false,
            slider: OnceCell::new(),
            banners: OnceCell::new(),
        }
    }

    /// Lazy load the first slide as well.
    pub fn with_lazy_load_first(mut self, lazy_load_first: bool) -> Self {
        self.lazy_load_first = lazy_load_first;
        self
    }

    pub fn renderer(&self) -> &BannerRenderer {
        self.renderer
    }

    /// The slider, or `None` for id 0, an unknown id or a lookup failure.
    pub fn slider(&self) -> Option<&Slider> {
        self.slider
            .get_or_init(|| {
                if self.slider_id == 0 {
                    return None;
                }
                match self.locator.get_by_id(self.slider_id) {
                    Ok(slider) => slider,
                    Err(e) => {
                        error!(slider_id = self.slider_id, error = %e, "error loading slider");
                        None
                    }
                }
            })
            .as_ref()
    }

    /// Active banners in display order. Empty without a slider.
    pub fn banners(&self) -> &[Banner] {
        self.banners.get_or_init(|| {
            let Some(slider) = self.slider() else {
                return Vec::new();
            };
            let banners = match self.source.active_banners(slider.slider_id) {
                Ok(banners) => banners,
                Err(e) => {
                    error!(slider_id = slider.slider_id, error = %e, "error loading banners");
                    Vec::new()
                }
            };
            if !banners.is_empty() {
                self.renderer.preload_responsive_crops(&banners);
            }
            banners
        })
    }

    /// Carousel configuration as JSON, or `{}` without a slider.
    ///
    /// Unreadable responsive settings are logged and left out.
    pub fn slider_config(&self) -> Result<String, RenderError> {
        let Some(slider) = self.slider() else {
            return Ok("{}".to_string());
        };

        let breakpoints = slider.breakpoints().unwrap_or_else(|e| {
            error!(slider_id = slider.slider_id, error = %e, "invalid responsive settings");
            None
        });
        let config = slider.carousel_config(self.banners().len(), breakpoints);
        Ok(serde_json::to_string(&config)?)
    }

    /// Preload hints for every banner with preloading enabled.
    pub fn preload_links(&self) -> Vec<PreloadLink> {
        self.banners()
            .iter()
            .flat_map(|banner| self.renderer.preload_links(banner))
            .collect()
    }

    /// `<link>` tags for the page head, one per line.
    pub fn preload_html(&self) -> String {
        self.preload_links()
            .iter()
            .map(PreloadLink::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Full slider markup, or an empty string when there is nothing to show.
    pub fn to_html(&self) -> Result<String, RenderError> {
        let Some(slider) = self.slider() else {
            return Ok(String::new());
        };
        let banners = self.banners();
        if banners.is_empty() {
            return Ok(String::new());
        }

        let base = attrs! {
            "class" => CONTAINER_CLASS,
            "id" => format!("banner-slider-{}", slider.slider_id),
            "aria-label" => slider.name.as_str(),
            "data-slider-config" => self.slider_config()?,
        };
        let container = self
            .renderer
            .container_attributes_html(slider, banners, &base);

        let mut out = format!("<div{}>\n", container);
        out.push_str("    <div class=\"splide__track\">\n");
        out.push_str("        <ul class=\"splide__list\">\n");
        for (index, banner) in banners.iter().enumerate() {
            let slide = self.renderer.slide_attributes_html(
                slider,
                banner,
                &attrs! { "class" => SLIDE_CLASS },
            );
            let lazy = slider.lazy_load_enabled && (index > 0 || self.lazy_load_first);
            out.push_str(&format!(
                "            <li{}>{}</li>\n",
                slide,
                self.slide_content(slider, banner, lazy)
            ));
        }
        out.push_str("        </ul>\n");
        out.push_str("    </div>\n");
        out.push_str("</div>");
        Ok(out)
    }

    fn slide_content(&self, slider: &Slider, banner: &Banner, lazy: bool) -> String {
        let renderer = self.renderer;
        if renderer.is_video_type(banner) {
            return renderer.video_html(banner);
        }
        if renderer.is_custom_type(banner) {
            return renderer.filter_content(banner.content.as_deref());
        }

        let image = renderer.responsive_image_html(banner, lazy);
        if renderer.has_link(banner) && !image.is_empty() {
            format!(
                "<a {}>{}</a>",
                renderer.link_attributes(banner, Some(slider)),
                image
            )
        } else {
            image
        }
    }
}
