//! Sequential regioning regression test
//!
//! Checks the three-pass labeler against breadth-first flood fill on
//! random masks of several densities, for both connectivities.
//!
//! Run with:
//! ```
//! cargo test -p wildfire-region --test sequential_regioning_reg
//! ```

use std::collections::HashMap;
use wildfire_core::{Rgb, RgbImage};
use wildfire_region::{
    ConnectivityType, DEFAULT_SEED, LabelMap, RegionOptions, floodfill_labels, label_map,
    label_regions, label_regions_with,
};
use wildfire_test::{RegParams, checkerboard, mask_from_pattern, random_mask};

const CONNECTIVITIES: [ConnectivityType; 2] =
    [ConnectivityType::FourWay, ConnectivityType::EightWay];

/// True if pixels share a color exactly when they share a region id
fn colors_match_regions(image: &RgbImage, map: &LabelMap) -> bool {
    let mut color_of: HashMap<u32, Rgb> = HashMap::new();
    let mut id_of: HashMap<Rgb, u32> = HashMap::new();

    for y in 0..map.height() {
        for x in 0..map.width() {
            let (Some(id), Some(color)) = (map.get(x, y), image.get_rgb(x, y)) else {
                return false;
            };
            if id == 0 {
                if !color.is_black() {
                    return false;
                }
                continue;
            }
            if *color_of.entry(id).or_insert(color) != color {
                return false;
            }
            if *id_of.entry(color).or_insert(id) != id {
                return false;
            }
        }
    }
    true
}

#[test]
fn sequential_regioning_reg() {
    let mut rp = RegParams::new("sequential_regioning");

    for (i, &density) in [0.1, 0.35, 0.5, 0.6, 0.9].iter().enumerate() {
        let mask = random_mask(97, 61, density, i as u64 + 100).expect("random mask");

        for connectivity in CONNECTIVITIES {
            let reference = floodfill_labels(&mask, connectivity).expect("flood fill");
            let map = label_map(&mask, connectivity).expect("label map");
            let regions = label_regions(&mask, connectivity, DEFAULT_SEED).expect("regioning");

            if rp.display() {
                eprintln!(
                    "  density {density} {connectivity:?}: {} regions",
                    regions.region_count
                );
            }

            rp.compare_values(
                f64::from(reference.region_count()),
                regions.region_count as f64,
                0.0,
            );
            rp.check(map == reference, "label map matches flood fill");
            rp.compare_values(
                regions.region_count as f64,
                regions.image.distinct_colors().len() as f64,
                0.0,
            );
            rp.check(
                colors_match_regions(&regions.image, &reference),
                "same color iff same region",
            );
        }
    }

    assert!(rp.cleanup(), "sequential_regioning regression test failed");
}

#[test]
fn sequential_regioning_scenarios_reg() {
    let mut rp = RegParams::new("sequential_regioning_scenarios");

    // U-shape: the arms get separate provisional labels that merge at the base
    let u_shape = mask_from_pattern(
        r"
        #...#
        #...#
        #####
        ",
    )
    .expect("pattern");
    for connectivity in CONNECTIVITIES {
        let result = label_regions(&u_shape, connectivity, DEFAULT_SEED).expect("regioning");
        rp.compare_values(1.0, result.region_count as f64, 0.0);
    }

    // Checkerboard: isolated under 4-way, one region under 8-way
    let board = checkerboard(9, 7).expect("checkerboard");
    let four = label_regions(&board, ConnectivityType::FourWay, DEFAULT_SEED).expect("4-way");
    let eight = label_regions(&board, ConnectivityType::EightWay, DEFAULT_SEED).expect("8-way");
    rp.compare_values(board.count_foreground() as f64, four.region_count as f64, 0.0);
    rp.compare_values(1.0, eight.region_count as f64, 0.0);

    // Staircase joined only through top-right neighbors
    let stairs = mask_from_pattern(
        r"
        ...#
        ..#.
        .#..
        #...
        ",
    )
    .expect("pattern");
    let result = label_regions_with(&stairs, &RegionOptions::default()).expect("regioning");
    rp.compare_values(1.0, result.region_count as f64, 0.0);
    let four = label_regions_with(&stairs, &RegionOptions::new(ConnectivityType::FourWay))
        .expect("regioning");
    rp.compare_values(4.0, four.region_count as f64, 0.0);

    // Empty and all-background masks
    let empty = mask_from_pattern("").expect("pattern");
    let result = label_regions(&empty, ConnectivityType::EightWay, DEFAULT_SEED).expect("empty");
    rp.compare_values(0.0, result.region_count as f64, 0.0);
    rp.check(result.image.data().is_empty(), "empty mask gives empty image");

    let blank = random_mask(12, 5, 0.0, 1).expect("blank");
    let result = label_regions(&blank, ConnectivityType::FourWay, DEFAULT_SEED).expect("blank");
    rp.compare_values(0.0, result.region_count as f64, 0.0);
    rp.check(result.image.pixels().all(Rgb::is_black), "background stays black");

    assert!(rp.cleanup(), "sequential_regioning_scenarios regression test failed");
}

#[test]
fn sequential_regioning_seed_reg() {
    let mut rp = RegParams::new("sequential_regioning_seed");

    let mask = random_mask(40, 40, 0.45, 7).expect("random mask");
    let a = label_regions(&mask, ConnectivityType::EightWay, 20).expect("seed 20");
    let b = label_regions(&mask, ConnectivityType::EightWay, 20).expect("seed 20");
    let c = label_regions(&mask, ConnectivityType::EightWay, 21).expect("seed 21");

    rp.compare_images(&a.image, &b.image);
    rp.check(a.image != c.image, "a different seed changes the colors");
    rp.compare_values(a.region_count as f64, c.region_count as f64, 0.0);

    // Same partition whatever the seed
    let map = label_map(&mask, ConnectivityType::EightWay).expect("label map");
    rp.check(colors_match_regions(&c.image, &map), "partition independent of seed");

    assert!(rp.cleanup(), "sequential_regioning_seed regression test failed");
}
