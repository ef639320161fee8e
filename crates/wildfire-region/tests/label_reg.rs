//! Region statistics regression test
//!
//! Run with:
//! ```
//! cargo test -p wildfire-region --test label_reg
//! ```

use wildfire_region::{
    ConnectivityType, count_regions, floodfill, label_map, region_sizes, region_stats,
};
use wildfire_test::{RegParams, random_mask};

#[test]
fn label_reg() {
    let mut rp = RegParams::new("label");

    for seed in 0..3u64 {
        let mask = random_mask(50, 30, 0.5, seed).expect("random mask");

        for connectivity in [ConnectivityType::FourWay, ConnectivityType::EightWay] {
            let map = label_map(&mask, connectivity).expect("label map");
            let sizes = region_sizes(&map);
            let stats = region_stats(&map);
            let count = count_regions(&mask, connectivity).expect("count");

            rp.compare_values(count as f64, f64::from(map.region_count()), 0.0);
            rp.compare_values(
                mask.count_foreground() as f64,
                sizes.iter().map(|&s| f64::from(s)).sum(),
                0.0,
            );
            rp.check(
                stats.iter().zip(&sizes).all(|(s, &n)| s.pixel_count == n),
                "stats agree with sizes",
            );
            rp.check(
                stats.iter().all(|s| {
                    s.bounds.w * s.bounds.h >= s.pixel_count
                        && s.centroid_x >= f64::from(s.bounds.x)
                        && s.centroid_y >= f64::from(s.bounds.y)
                }),
                "centroid inside bounds",
            );

            // Erasing the largest region by flood fill removes exactly its pixels
            if let Some(largest) = stats.iter().max_by_key(|s| s.pixel_count) {
                let (x, y) = (0..map.height())
                    .flat_map(|y| (0..map.width()).map(move |x| (x, y)))
                    .find(|&(x, y)| map.get(x, y) == Some(largest.id))
                    .expect("region pixel");
                let mut erased = mask.clone();
                let removed = floodfill(&mut erased, x, y, 0, connectivity).expect("fill");
                rp.compare_values(f64::from(largest.pixel_count), f64::from(removed), 0.0);
                rp.compare_values(
                    (count - 1) as f64,
                    count_regions(&erased, connectivity).expect("count") as f64,
                    0.0,
                );
            }
        }
    }

    assert!(rp.cleanup(), "label regression test failed");
}
