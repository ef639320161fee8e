//! Binary morphological operations
//!
//! Implements erosion, dilation, opening, and closing with brick
//! structuring elements. The element's origin is at `(width / 2, height / 2)`.
//!
//! Boundaries are "safe": pixels outside the image never change the
//! result. Dilation treats them as OFF and erosion treats them as ON, so a
//! closing never eats foreground that touches the border.

use crate::{MorphError, MorphResult};
use wildfire_core::Mask;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Op {
    Dilate,
    Erode,
}

fn check_brick(width: u32, height: u32) -> MorphResult<()> {
    if width == 0 || height == 0 {
        return Err(MorphError::InvalidParameters(format!(
            "brick dimensions must be positive, got {width}x{height}"
        )));
    }
    Ok(())
}

/// Window extent `(before, after)` around a pixel for a 1D brick of `size`
///
/// Dilation reflects the element, erosion uses it as is; the two agree for
/// odd sizes.
fn extent(size: u32, op: Op) -> (usize, usize) {
    let origin = (size / 2) as usize;
    let rest = (size - 1) as usize - origin;
    match op {
        Op::Dilate => (rest, origin),
        Op::Erode => (origin, rest),
    }
}

/// Apply a running-window pass to one line of `n` samples
///
/// `get(i)` and `put(i, v)` address the line, so the same code serves rows
/// and columns.
fn window_line<G, P>(
    n: usize,
    before: usize,
    after: usize,
    op: Op,
    prefix: &mut Vec<u32>,
    get: G,
    mut put: P,
) where
    G: Fn(usize) -> u8,
    P: FnMut(usize, u8),
{
    prefix.clear();
    prefix.push(0);
    let mut sum = 0u32;
    for i in 0..n {
        sum += u32::from(get(i));
        prefix.push(sum);
    }

    for i in 0..n {
        let lo = i.saturating_sub(before);
        let hi = (i + after).min(n - 1);
        let count = prefix[hi + 1] - prefix[lo];
        let on = match op {
            Op::Dilate => count > 0,
            Op::Erode => count as usize == hi - lo + 1,
        };
        put(i, u8::from(on));
    }
}

fn brick_pass(mask: &Mask, width: u32, height: u32, op: Op) -> MorphResult<Mask> {
    check_brick(width, height)?;
    if (width == 1 && height == 1) || mask.is_empty() {
        return Ok(mask.clone());
    }

    let (w, h) = (mask.width() as usize, mask.height() as usize);
    let src = mask.data();
    let mut prefix = Vec::with_capacity(w.max(h) + 1);

    // Horizontal pass
    let mut tmp = src.to_vec();
    if width > 1 {
        let (before, after) = extent(width, op);
        for y in 0..h {
            let row = &src[y * w..(y + 1) * w];
            let out = &mut tmp[y * w..(y + 1) * w];
            window_line(w, before, after, op, &mut prefix, |i| row[i], |i, v| out[i] = v);
        }
    }

    // Vertical pass
    let mut dst = tmp.clone();
    if height > 1 {
        let (before, after) = extent(height, op);
        for x in 0..w {
            window_line(
                h,
                before,
                after,
                op,
                &mut prefix,
                |i| tmp[i * w + x],
                |i, v| dst[i * w + x] = v,
            );
        }
    }

    Ok(Mask::from_data(mask.width(), mask.height(), dst)?)
}

/// Dilate with a brick (rectangular) structuring element
///
/// A pixel turns on if any pixel under the reflected brick is on.
pub fn dilate_brick(mask: &Mask, width: u32, height: u32) -> MorphResult<Mask> {
    log::debug!("dilate_brick {}x{}", width, height);
    brick_pass(mask, width, height, Op::Dilate)
}

/// Erode with a brick (rectangular) structuring element
///
/// A pixel stays on only if every in-image pixel under the brick is on.
pub fn erode_brick(mask: &Mask, width: u32, height: u32) -> MorphResult<Mask> {
    log::debug!("erode_brick {}x{}", width, height);
    brick_pass(mask, width, height, Op::Erode)
}

/// Open with a brick structuring element
///
/// Opening = erosion followed by dilation.
///
/// Because dilation reflects the brick, an even-sized opening never moves
/// surviving foreground. OpenCV's `MORPH_OPEN` does not reflect, so for even
/// sizes (such as 2x2) its result can sit one pixel right of or below this
/// one. Odd sizes give identical results.
pub fn open_brick(mask: &Mask, width: u32, height: u32) -> MorphResult<Mask> {
    check_brick(width, height)?;
    if width == 1 && height == 1 {
        return Ok(mask.clone());
    }
    let eroded = erode_brick(mask, width, height)?;
    dilate_brick(&eroded, width, height)
}

/// Close with a brick structuring element
///
/// Closing = dilation followed by erosion.
pub fn close_brick(mask: &Mask, width: u32, height: u32) -> MorphResult<Mask> {
    check_brick(width, height)?;
    if width == 1 && height == 1 {
        return Ok(mask.clone());
    }
    let dilated = dilate_brick(mask, width, height)?;
    erode_brick(&dilated, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_pixel(w: u32, h: u32, x: u32, y: u32) -> Mask {
        let mut mask = Mask::new(w, h).unwrap();
        mask.set_pixel(x, y, 1).unwrap();
        mask
    }

    /// Direct per-pixel definition, for checking the running-window code
    fn naive(mask: &Mask, width: u32, height: u32, op: Op) -> Mask {
        let (bx, ax) = extent(width, op);
        let (by, ay) = extent(height, op);
        let (w, h) = mask.dimensions();
        Mask::from_fn(w, h, |x, y| {
            let x0 = (x as usize).saturating_sub(bx);
            let x1 = (x as usize + ax).min(w as usize - 1);
            let y0 = (y as usize).saturating_sub(by);
            let y1 = (y as usize + ay).min(h as usize - 1);
            let mut any = false;
            let mut all = true;
            for yy in y0..=y1 {
                for xx in x0..=x1 {
                    let on = mask.is_foreground(xx as u32, yy as u32);
                    any |= on;
                    all &= on;
                }
            }
            match op {
                Op::Dilate => any,
                Op::Erode => all,
            }
        })
        .unwrap()
    }

    #[test]
    fn test_dilate_single_pixel() {
        let mask = single_pixel(5, 5, 2, 2);
        let dilated = dilate_brick(&mask, 3, 3).unwrap();
        assert_eq!(dilated.count_foreground(), 9);
        assert!(dilated.is_foreground(1, 1));
        assert!(dilated.is_foreground(3, 3));
        assert!(!dilated.is_foreground(0, 0));
    }

    #[test]
    fn test_erode_single_pixel() {
        let mask = single_pixel(5, 5, 2, 2);
        assert_eq!(erode_brick(&mask, 3, 3).unwrap().count_foreground(), 0);
    }

    #[test]
    fn test_even_brick_origin() {
        // 2x1 brick, origin at x = 1: dilation reaches one pixel left
        let mask = single_pixel(5, 1, 2, 0);
        let dilated = dilate_brick(&mask, 2, 1).unwrap();
        assert_eq!(dilated.data(), &[0, 1, 1, 0, 0]);

        // Erosion keeps a pixel whose left neighbour is also on
        let eroded = erode_brick(&dilated, 2, 1).unwrap();
        assert_eq!(eroded.data(), &[0, 0, 1, 0, 0]);
    }

    #[test]
    fn test_border_is_safe() {
        let full = Mask::from_fn(6, 4, |_, _| true).unwrap();
        assert_eq!(erode_brick(&full, 5, 5).unwrap(), full);
        assert_eq!(close_brick(&full, 7, 7).unwrap(), full);

        let corner = single_pixel(6, 4, 0, 0);
        let dilated = dilate_brick(&corner, 3, 3).unwrap();
        assert_eq!(dilated.count_foreground(), 4);
    }

    #[test]
    fn test_close_fills_gap() {
        let mask = Mask::from_rows(&[[1u8, 1, 0, 1, 1]]).unwrap();
        let closed = close_brick(&mask, 3, 1).unwrap();
        assert_eq!(closed.data(), &[1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_open_removes_specks() {
        let mut mask =
            Mask::from_fn(8, 8, |x, y| (2..6).contains(&x) && (2..6).contains(&y)).unwrap();
        mask.set_pixel(0, 7, 1).unwrap();
        let opened = open_brick(&mask, 2, 2).unwrap();
        assert!(!opened.is_foreground(0, 7));
        assert_eq!(opened.count_foreground(), 16);
    }

    #[test]
    fn test_even_open_stays_in_place() {
        // The unreflected opening would shift this pair to [0, 0, 1, 1, 0]
        let mask = Mask::from_rows(&[[0u8, 1, 1, 0, 0]]).unwrap();
        assert_eq!(open_brick(&mask, 2, 1).unwrap(), mask);

        let block =
            Mask::from_fn(6, 6, |x, y| (1..3).contains(&x) && (1..3).contains(&y)).unwrap();
        assert_eq!(open_brick(&block, 2, 2).unwrap(), block);
    }

    #[test]
    fn test_matches_naive() {
        let mask = Mask::from_fn(13, 9, |x, y| (x * 7 + y * 3) % 5 < 2).unwrap();
        for &(w, h) in &[(2, 3), (3, 3), (4, 1), (1, 5), (6, 4)] {
            for op in [Op::Dilate, Op::Erode] {
                let fast = brick_pass(&mask, w, h, op).unwrap();
                assert_eq!(fast, naive(&mask, w, h, op));
            }
        }
    }

    #[test]
    fn test_identity_and_invalid() {
        let mask = single_pixel(3, 3, 1, 1);
        assert_eq!(dilate_brick(&mask, 1, 1).unwrap(), mask);
        assert_eq!(close_brick(&mask, 1, 1).unwrap(), mask);
        assert!(matches!(
            erode_brick(&mask, 0, 3),
            Err(MorphError::InvalidParameters(_))
        ));
        assert!(open_brick(&mask, 3, 0).is_err());
    }

    #[test]
    fn test_empty_mask() {
        let mask = Mask::new(0, 0).unwrap();
        assert!(close_brick(&mask, 7, 7).unwrap().is_empty());
    }
}
