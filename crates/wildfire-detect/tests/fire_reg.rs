//! Fire detection regression test
//!
//! Runs the whole pipeline on a synthetic scene with two fires and a
//! bright cloud, checking every intermediate mask.
//!
//! Run with:
//! ```
//! cargo test -p wildfire-detect --test fire_reg
//! ```

use wildfire_core::{Band, Rgb};
use wildfire_detect::{DetectError, DetectionParams, InMemoryBands, SpectralBand, analyze_scene};
use wildfire_region::{ConnectivityType, label_map, region_stats};
use wildfire_test::RegParams;

const W: u32 = 80;
const H: u32 = 60;

#[derive(Clone, Copy)]
enum Cover {
    Ground,
    OuterFire,
    CoreFire,
    Cloud,
}

fn cover(x: u32, y: u32) -> Cover {
    let inside = |x0: u32, y0: u32, side: u32| {
        (x0..x0 + side).contains(&x) && (y0..y0 + side).contains(&y)
    };
    if inside(14, 14, 2) {
        Cover::CoreFire
    } else if inside(10, 10, 10) || inside(50, 30, 8) {
        Cover::OuterFire
    } else if inside(30, 45, 10) {
        Cover::Cloud
    } else {
        Cover::Ground
    }
}

/// Raw digital numbers per band: (B12, B11, B8A, visible)
fn raw(c: Cover) -> (f32, f32, f32, f32) {
    match c {
        Cover::Ground => (800.0, 2000.0, 3000.0, 500.0),
        Cover::OuterFire => (9000.0, 1000.0, 1000.0, 500.0),
        Cover::CoreFire => (9000.0, 9000.0, 1000.0, 500.0),
        Cover::Cloud => (7000.0, 9000.0, 9000.0, 9500.0),
    }
}

fn synthetic_scene() -> InMemoryBands {
    let band = |pick: fn((f32, f32, f32, f32)) -> f32| {
        let data = (0..H)
            .flat_map(|y| (0..W).map(move |x| pick(raw(cover(x, y)))))
            .collect();
        Band::from_data(W, H, data).expect("band")
    };
    InMemoryBands::new()
        .with_band(SpectralBand::B12, band(|p| p.0))
        .with_band(SpectralBand::B11, band(|p| p.1))
        .with_band(SpectralBand::B8A, band(|p| p.2))
        .with_band(SpectralBand::B04, band(|p| p.3))
        .with_band(SpectralBand::B03, band(|p| p.3))
        .with_band(SpectralBand::B02, band(|p| p.3))
}

#[test]
fn fire_reg() {
    let mut rp = RegParams::new("fire");

    let source = synthetic_scene();
    let analysis = analyze_scene(&source, &DetectionParams::default()).expect("analysis");
    let detection = &analysis.detection;

    if rp.display() {
        eprintln!(
            "  outer {}, core {}, combined {}, opened {}, regions {}",
            detection.outer.count_foreground(),
            detection.core.count_foreground(),
            detection.combined.count_foreground(),
            detection.opened.count_foreground(),
            detection.region_count()
        );
    }

    // Masks
    rp.compare_values(160.0, detection.outer.count_foreground() as f64, 0.0);
    rp.compare_values(4.0, detection.core.count_foreground() as f64, 0.0);
    rp.compare_values(164.0, detection.combined.count_foreground() as f64, 0.0);
    rp.compare_masks(&detection.combined, &detection.closed);
    rp.compare_masks(&detection.closed, &detection.opened);
    rp.check(!detection.outer.is_foreground(35, 50), "cloud is not outer fire");
    rp.check(!detection.core.is_foreground(35, 50), "cloud is not core fire");

    // Regions
    rp.compare_values(2.0, detection.region_count() as f64, 0.0);
    let colors = detection.regions.image.distinct_colors();
    rp.compare_values(2.0, colors.len() as f64, 0.0);
    rp.check(
        detection.regions.image.get_rgb(14, 14) == detection.regions.image.get_rgb(10, 10),
        "core and outer fire share a region",
    );
    rp.check(
        detection.regions.image.get_rgb(0, 0) == Some(Rgb::BLACK),
        "background is black",
    );

    let map = label_map(&detection.opened, ConnectivityType::EightWay).expect("label map");
    let stats = region_stats(&map);
    rp.compare_values(2.0, stats.len() as f64, 0.0);
    rp.compare_values(100.0, f64::from(stats[0].pixel_count), 0.0);
    rp.compare_values(14.5, stats[0].centroid_x, 1e-9);
    rp.compare_values(64.0, f64::from(stats[1].pixel_count), 0.0);
    rp.compare_values(53.5, stats[1].centroid_x, 1e-9);
    rp.compare_values(33.5, stats[1].centroid_y, 1e-9);

    // Marking
    let marked = &analysis.marked;
    let red = marked.pixels().filter(|&c| c == Rgb::RED).count();
    let yellow = marked.pixels().filter(|&c| c == Rgb::YELLOW).count();
    rp.compare_values(160.0, red as f64, 0.0);
    rp.compare_values(4.0, yellow as f64, 0.0);

    // Determinism
    let again = analyze_scene(&source, &DetectionParams::default()).expect("analysis");
    rp.compare_images(&analysis.detection.regions.image, &again.detection.regions.image);
    rp.compare_images(&analysis.infrared, &again.infrared);

    assert!(rp.cleanup(), "fire regression test failed");
}

#[test]
fn fire_missing_band_reg() {
    let mut rp = RegParams::new("fire_missing_band");

    let mut source = InMemoryBands::new();
    for band in [SpectralBand::B12, SpectralBand::B11, SpectralBand::B8A] {
        source.insert(band, Band::new(4, 4).expect("band"));
    }
    let result = analyze_scene(&source, &DetectionParams::default());
    rp.check(
        matches!(result, Err(DetectError::MissingBand(SpectralBand::B04))),
        "first missing visible band is reported",
    );

    assert!(rp.cleanup(), "fire_missing_band regression test failed");
}
