//! Provisional labeling (pass 1)
//!
//! Raster-scans a mask and gives every foreground pixel a provisional
//! label taken from its already-visited neighbors. When a pixel touches
//! more than one distinct label, the labels are recorded as a collision
//! for the resolver to merge.
//!
//! Each pixel depends on the labels above and to the left of it, so the
//! scan is inherently sequential. Splitting rows across threads would need
//! a border reconciliation step that this module does not provide.

use crate::conncomp::ConnectivityType;
use crate::error::{RegionError, RegionResult};
use std::collections::BTreeSet;
use wildfire_core::Mask;

/// Provisional label value
pub type Label = u32;

/// Working-grid value of a background pixel
pub const BACKGROUND: Label = 0;

/// Working-grid value of a foreground pixel that has not been labeled yet
pub const UNLABELED: Label = 1;

/// First label handed out by the scanner
pub const FIRST_LABEL: Label = 2;

/// Two distinct provisional labels observed as adjacent
///
/// Stored normalised so that `(a, b)` and `(b, a)` are the same collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Collision {
    low: Label,
    high: Label,
}

impl Collision {
    /// Create a collision between two labels (in either order)
    pub fn new(a: Label, b: Label) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    /// The two labels, smaller first
    pub fn labels(self) -> (Label, Label) {
        (self.low, self.high)
    }
}

/// Output of the label scan
#[derive(Debug, Clone)]
pub struct ProvisionalLabels {
    width: u32,
    height: u32,
    labels: Vec<Label>,
    next_label: Label,
    collisions: BTreeSet<Collision>,
}

impl ProvisionalLabels {
    /// Width of the scanned grid
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the scanned grid
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major working grid: labels >= 2 on foreground, 0 on background
    #[inline]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Label at (x, y), or `None` out of bounds
    pub fn label_at(&self, x: u32, y: u32) -> Option<Label> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.labels[y as usize * self.width as usize + x as usize])
    }

    /// Final counter value `m`; valid labels are `FIRST_LABEL..m`
    #[inline]
    pub fn next_label(&self) -> Label {
        self.next_label
    }

    /// Number of provisional labels handed out
    #[inline]
    pub fn label_count(&self) -> usize {
        (self.next_label - FIRST_LABEL) as usize
    }

    /// All recorded collisions, in ascending order
    #[inline]
    pub fn collisions(&self) -> &BTreeSet<Collision> {
        &self.collisions
    }
}

/// Distinct labels around one pixel, in encounter order
#[derive(Default)]
struct NeighborLabels {
    labels: [Label; 4],
    len: usize,
}

impl NeighborLabels {
    #[inline]
    fn push(&mut self, label: Label) {
        if label >= FIRST_LABEL && !self.labels[..self.len].contains(&label) {
            self.labels[self.len] = label;
            self.len += 1;
        }
    }

    #[inline]
    fn as_slice(&self) -> &[Label] {
        &self.labels[..self.len]
    }
}

/// Assign provisional labels to every foreground pixel
///
/// Pixels are visited top-to-bottom, left-to-right. For each foreground
/// pixel the causal neighbors are inspected in the fixed order left, top,
/// and for 8-connectivity top-left, top-right. Distinct labels are kept in
/// that encounter order:
///
/// - no label: a fresh label is allocated
/// - one label: the pixel takes it
/// - several: the pixel takes the first one, and a collision is recorded
///   between it and each of the others
///
/// # Errors
///
/// Returns [`RegionError::LabelOverflow`] if the label counter would pass
/// `u32::MAX`.
pub fn scan_labels(
    mask: &Mask,
    connectivity: ConnectivityType,
) -> RegionResult<ProvisionalLabels> {
    let width = mask.width() as usize;
    let height = mask.height() as usize;
    let eight = connectivity == ConnectivityType::EightWay;

    let mut labels: Vec<Label> = mask.data().iter().map(|&v| Label::from(v)).collect();
    let mut next_label = FIRST_LABEL;
    let mut collisions = BTreeSet::new();

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            if labels[idx] != UNLABELED {
                continue;
            }

            let mut neighbors = NeighborLabels::default();
            if x > 0 {
                neighbors.push(labels[idx - 1]);
            }
            if y > 0 {
                let above = idx - width;
                neighbors.push(labels[above]);
                if eight {
                    if x > 0 {
                        neighbors.push(labels[above - 1]);
                    }
                    if x + 1 < width {
                        neighbors.push(labels[above + 1]);
                    }
                }
            }

            labels[idx] = match neighbors.as_slice() {
                [] => allocate(&mut next_label)?,
                [only] => *only,
                [first, rest @ ..] => {
                    for &other in rest {
                        collisions.insert(Collision::new(*first, other));
                    }
                    *first
                }
            };
        }
    }

    log::debug!(
        "label scan: {} provisional labels, {} collisions",
        next_label - FIRST_LABEL,
        collisions.len()
    );

    Ok(ProvisionalLabels {
        width: mask.width(),
        height: mask.height(),
        labels,
        next_label,
        collisions,
    })
}

/// Hand out `next` and advance the counter
///
/// The counter is exclusive, so `Label::MAX` itself is never handed out.
#[inline]
fn allocate(next: &mut Label) -> RegionResult<Label> {
    let label = *next;
    *next = label.checked_add(1).ok_or(RegionError::LabelOverflow {
        limit: u64::from(Label::MAX - FIRST_LABEL),
    })?;
    Ok(label)
}
