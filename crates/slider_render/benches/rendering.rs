use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slider_core::{Banner, ResponsiveCrop};
use slider_render::{
    BannerRenderer, InMemoryCropRepository, InMemorySliders, MediaUrl, SliderWidget,
};

fn crops_for(banner_id: u64) -> Vec<ResponsiveCrop> {
    [(0, 1920, 700), (1, 1200, 600), (2, 768, 768)]
        .into_iter()
        .map(|(order, width, height)| ResponsiveCrop {
            crop_id: banner_id * 10 + order as u64,
            banner_id,
            cropped_image: Some(format!("crops/{}-{}.jpg", banner_id, width)),
            webp_image: Some(format!("crops/{}-{}.webp", banner_id, width)),
            avif_image: Some(format!("crops/{}-{}.avif", banner_id, width)),
            generate_webp: true,
            generate_avif: order == 0,
            sort_order: Some(order),
            target_width: Some(width),
            target_height: Some(height),
            media_query: Some(format!("(min-width: {}px)", width / 2)),
            ..Default::default()
        })
        .collect()
}

fn bench_rendering(c: &mut Criterion) {
    let banners: Vec<Banner> = (1..=10)
        .map(|id| Banner {
            banner_id: id,
            slider_id: 1,
            name: format!("Banner {}", id),
            image: Some(format!("banners/{}.jpg", id)),
            preload_enabled: id == 1,
            is_active: true,
            position: id as i32,
            ..Default::default()
        })
        .collect();
    let crops: Vec<ResponsiveCrop> = (1..=10).flat_map(crops_for).collect();

    c.bench_function("Render picture (3 crops)", |b| {
        let renderer = BannerRenderer::new(
            MediaUrl::default(),
            Box::new(InMemoryCropRepository::new(crops.clone())),
        );
        b.iter(|| renderer.responsive_image_html(black_box(&banners[0]), true))
    });

    c.bench_function("Render slider (10 banners)", |b| {
        let store = InMemorySliders::new(
            vec![slider_core::Slider {
                slider_id: 1,
                name: "Home".to_string(),
                lazy_load_enabled: true,
                ..Default::default()
            }],
            banners.clone(),
        );
        b.iter(|| {
            let renderer = BannerRenderer::new(
                MediaUrl::default(),
                Box::new(InMemoryCropRepository::new(crops.clone())),
            );
            let widget = SliderWidget::new(1, &store, &store, &renderer);
            widget.to_html().unwrap()
        })
    });
}

criterion_group!(benches, bench_rendering);
criterion_main!(benches);
