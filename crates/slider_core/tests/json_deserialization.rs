use slider_core::slider::convert_responsive_items;
use slider_core::{Banner, BannerType, BreakpointSettings, CoreError, ResponsiveCrop, Slider};

#[test]
fn test_banner_from_yaml() {
    let yaml = r#"
banner-id: 12
slider-id: 3
name: Autumn
type: video
video-url: https://youtu.be/abc
video-as-background: true
video-aspect-ratio: "4:3"
is-active: true
"#;
    let banner: Banner = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(banner.banner_type, BannerType::Video);
    assert_eq!(banner.video_reference(), Some("https://youtu.be/abc"));
    assert!(banner.video_as_background);
    assert!(!banner.preload_enabled);
    assert_eq!(banner.alt_text(), "Autumn");
}

#[test]
fn test_slider_defaults() {
    let slider: Slider = serde_json::from_str(r#"{"slider-id": 1, "name": "Home"}"#).unwrap();
    assert_eq!(slider.autoplay_timeout, 5000);
    assert!(slider.navigation_enabled);
    assert!(slider.pagination_enabled);
    assert!(!slider.loop_enabled);
}

#[test]
fn test_crop_from_json() {
    let json = r#"{
        "crop-id": 5,
        "banner-id": 12,
        "cropped-image": "crops/a.jpg",
        "webp-image": "crops/a.webp",
        "generate-webp": true,
        "sort-order": 2,
        "target-width": 768,
        "target-height": 400,
        "media-query": "(max-width: 767px)"
    }"#;
    let crop: ResponsiveCrop = serde_json::from_str(json).unwrap();
    assert_eq!(crop.priority(), 2);
    assert_eq!(crop.media_query_or_default(), "(max-width: 767px)");
    assert_eq!(
        crop.variant_path(slider_core::ImageFormat::Webp),
        Some("crops/a.webp")
    );
    assert_eq!(crop.variant_path(slider_core::ImageFormat::Avif), None);
}

#[test]
fn test_carousel_config_json() {
    let slider = Slider {
        effect: Some("fade".to_string()),
        loop_enabled: true,
        autoplay_enabled: true,
        autoplay_timeout: 7000,
        lazy_load_enabled: true,
        auto_height_enabled: true,
        ..Default::default()
    };
    let json = serde_json::to_string(&slider.carousel_config(3, None)).unwrap();
    assert_eq!(
        json,
        concat!(
            r#"{"type":"fade","perPage":1,"perMove":1,"autoplay":true,"interval":7000,"#,
            r#""pauseOnHover":true,"pauseOnFocus":true,"arrows":true,"pagination":true,"#,
            r#""lazyLoad":"nearby","autoWidth":false,"autoHeight":true,"speed":400,"#,
            r#""rewind":false,"waitForTransition":true}"#
        )
    );
}

#[test]
fn test_responsive_items_conversion() {
    let raw = r#"{
        "0": {"items": "1", "nav": false, "dots": true, "loop": true},
        "600px": {"items": 2.7, "gap": "1rem", "autoplay": null},
        "1024": {"center": true},
        "1280": {"nav": "0", "autoplay": 1}
    }"#;
    let breakpoints = convert_responsive_items(raw).unwrap();

    let keys: Vec<i64> = breakpoints.keys().copied().collect();
    assert_eq!(keys, vec![0, 600, 1280]);
    assert_eq!(
        breakpoints[&0],
        BreakpointSettings {
            per_page: Some(1),
            arrows: Some(false),
            pagination: Some(true),
            ..Default::default()
        }
    );
    assert_eq!(breakpoints[&600].per_page, Some(2));
    assert_eq!(breakpoints[&600].gap, Some(serde_json::json!("1rem")));
    assert_eq!(breakpoints[&600].autoplay, None);
    assert_eq!(breakpoints[&1280].arrows, Some(false));
    assert_eq!(breakpoints[&1280].autoplay, Some(true));
}

#[test]
fn test_responsive_items_list_and_errors() {
    let breakpoints = convert_responsive_items(r#"[{"items": 1}, {"items": 3}]"#).unwrap();
    assert_eq!(breakpoints[&1].per_page, Some(3));

    assert!(matches!(
        convert_responsive_items("not json"),
        Err(CoreError::InvalidResponsiveItems(_))
    ));
}

#[test]
fn test_breakpoints_only_when_responsive() {
    let mut slider = Slider {
        responsive_items: Some(r#"{"768": {"items": 2}}"#.to_string()),
        ..Default::default()
    };
    assert_eq!(slider.breakpoints().unwrap(), None);

    slider.responsive_enabled = true;
    let config = slider.carousel_config(2, slider.breakpoints().unwrap());
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["breakpoints"]["768"]["perPage"], 2);

    let empty = slider.carousel_config(2, Some(Default::default()));
    assert!(serde_json::to_value(&empty).unwrap().get("breakpoints").is_none());
}
