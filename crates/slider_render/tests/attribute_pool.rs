/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use slider_core::{attrs, AttributeValue};
use slider_render::{AttributeProviderPool, StaticAttributes};

#[test]
fn test_registration_order_does_not_matter_for_distinct_sort_orders() {
    let slider = make_slider(1, "Home");
    let banners = vec![make_image_banner(1, 1, "a.jpg")];

    let forward = AttributeProviderPool::new(vec![
        tag_provider("first", 10),
        tag_provider("second", 20),
        tag_provider("third", 30),
    ]);
    let reversed = AttributeProviderPool::new(vec![
        tag_provider("third", 30),
        tag_provider("second", 20),
        tag_provider("first", 10),
    ]);

    let merged = forward.container_attributes(&slider, &banners);
    assert_eq!(merged, reversed.container_attributes(&slider, &banners));
    assert_eq!(merged["class"], AttributeValue::from("first second third"));
    assert_eq!(merged["data-provider"], AttributeValue::from("third"));
}

#[test]
fn test_equal_sort_orders_keep_registration_order() {
    let slider = make_slider(1, "Home");
    let banner = make_image_banner(1, 1, "a.jpg");

    let pool = AttributeProviderPool::new(vec![
        tag_provider("late", 50),
        tag_provider("b", 0),
        tag_provider("a", 0),
    ]);
    let merged = pool.slide_attributes(&slider, &banner);
    assert_eq!(merged["class"], AttributeValue::from("b a late"));
    assert_eq!(merged["data-provider"], AttributeValue::from("late"));
}

#[test]
fn test_renderer_merges_base_then_pool() {
    let slider = make_slider(3, "Home");
    let banner = make_image_banner(1, 3, "a.jpg");
    let renderer = make_renderer(Vec::new()).with_pool(AttributeProviderPool::new(vec![
        Box::new(StaticAttributes {
            sort_order: 5,
            slide: attrs! { "class" => "is-featured splide__slide", "tabindex" => 0i64 },
            ..Default::default()
        }),
        Box::new(StaticAttributes {
            sort_order: 1,
            slide: attrs! { "hidden" => false, "data-kind" => "promo" },
            ..Default::default()
        }),
    ]));

    let html = renderer.slide_attributes_html(
        &slider,
        &banner,
        &attrs! { "class" => "splide__slide banner-slider-slide" },
    );
    assert_eq!(
        html,
        r#" class="splide__slide banner-slider-slide is-featured" data-kind="promo" tabindex="0""#
    );
}

#[test]
fn test_link_attributes_merge_pool_only_with_slider() {
    let slider = make_slider(3, "Home");
    let banner = slider_core::Banner {
        link_url: Some("/sale".to_string()),
        ..make_image_banner(1, 3, "a.jpg")
    };
    let renderer = make_renderer(Vec::new()).with_pool(AttributeProviderPool::new(vec![
        Box::new(StaticAttributes {
            link: attrs! { "class" => "promo-link", "download" => "download" },
            ..Default::default()
        }),
    ]));

    assert_eq!(renderer.link_attributes(&banner, None), r#"href="/sale""#);
    assert_eq!(
        renderer.link_attributes(&banner, Some(&slider)),
        r#"href="/sale" class="promo-link" download"#
    );
}

#[test]
fn test_empty_pool_renders_base_only() {
    let slider = make_slider(3, "Home");
    let renderer = make_renderer(Vec::new());
    assert!(renderer.pool().is_empty());
    assert_eq!(
        renderer.container_attributes_html(&slider, &[], &attrs! { "id" => "banner-slider-3" }),
        r#" id="banner-slider-3""#
    );
}
