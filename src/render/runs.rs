//! Run segmentation.
//!
//! Padded line rects of the same range on consecutive lines that touch are
//! grouped into one run, which later becomes one contour. Inside a run the
//! rects are normalized so their outline is a clean stack of boxes:
//!
//! - neighbours share an exact horizontal seam, halfway between the upper
//!   line's content bottom and the lower line's content top, so vertical
//!   padding only shows above the first line and below the last
//! - middle lines span the run's full horizontal extent

use crate::layout::RangeId;
use crate::log::{debug, trace};
use crate::render::defaults::EPSILON;
use crate::render::padding::PaddedRect;
use crate::types::Rect;

/// Role of a line within its run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinePosition {
    /// The run has one line
    Single,
    First,
    Middle,
    Last,
}

impl LinePosition {
    fn of(index: usize, len: usize) -> Self {
        match (index, len) {
            (_, 1) => LinePosition::Single,
            (0, _) => LinePosition::First,
            (i, n) if i + 1 == n => LinePosition::Last,
            _ => LinePosition::Middle,
        }
    }
}

/// One normalized line of a run
#[derive(Clone, Debug, PartialEq)]
pub struct RunMember {
    pub padded: PaddedRect,
    pub position: LinePosition,
}

impl RunMember {
    pub fn rect(&self) -> Rect {
        self.padded.rect
    }
}

/// Maximal sequence of vertically adjacent rects of one range
#[derive(Clone, Debug, PartialEq)]
pub struct Run {
    range_id: RangeId,
    members: Vec<RunMember>,
}

impl Run {
    pub fn range_id(&self) -> RangeId {
        self.range_id
    }

    pub fn members(&self) -> &[RunMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Painted rects, top to bottom
    pub fn rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.members.iter().map(RunMember::rect)
    }

    pub fn line_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.members.iter().map(|m| m.padded.line_index)
    }

    /// Check the shape the path builder relies on: non-empty rects stacked
    /// on consecutive lines, sharing seams and overlapping horizontally.
    pub fn is_well_formed(&self) -> bool {
        if self.members.is_empty() || self.members.iter().any(|m| m.rect().is_empty()) {
            return false;
        }
        self.members.windows(2).all(|pair| {
            let (upper, lower) = (&pair[0].padded, &pair[1].padded);
            lower.line_index == upper.line_index + 1
                && (upper.rect.bottom() - lower.rect.top()).abs() <= EPSILON
                && upper.rect.horizontal_overlap(&lower.rect) > EPSILON
        })
    }

    /// Group already-ordered rects into a run and normalize them.
    fn from_group(mut group: Vec<PaddedRect>) -> Self {
        let range_id = group[0].range_id;

        for i in 1..group.len() {
            let (head, tail) = group.split_at_mut(i);
            place_seam(&mut head[i - 1], &mut tail[0]);
        }

        let n = group.len();
        let left = group.iter().map(|r| r.rect.left()).fold(f64::INFINITY, f64::min);
        let right = group
            .iter()
            .map(|r| r.rect.right())
            .fold(f64::NEG_INFINITY, f64::max);

        let members = group
            .into_iter()
            .enumerate()
            .map(|(i, mut padded)| {
                let position = LinePosition::of(i, n);
                if position == LinePosition::Middle {
                    padded.rect.min.x = left;
                    padded.rect.max.x = right;
                }
                RunMember { padded, position }
            })
            .collect();

        Run { range_id, members }
    }

    /// Wrap rects as a run without joining or normalizing them.
    #[cfg(test)]
    pub(crate) fn unchecked(group: Vec<PaddedRect>) -> Self {
        let n = group.len();
        let range_id = group.first().map_or(RangeId(0), |r| r.range_id);
        let members = group
            .into_iter()
            .enumerate()
            .map(|(i, padded)| RunMember {
                padded,
                position: LinePosition::of(i, n),
            })
            .collect();
        Run { range_id, members }
    }
}

/// True when `lower` continues the run that ends with `upper`.
///
/// Rects must belong to the same range, sit on consecutive lines, touch or
/// overlap vertically once padded and share some horizontal extent. The
/// lower rect must also reach further down than the upper one on both edges.
pub fn joins(upper: &PaddedRect, lower: &PaddedRect) -> bool {
    upper.range_id == lower.range_id
        && lower.line_index == upper.line_index + 1
        && lower.rect.top() <= upper.rect.bottom() + EPSILON
        && lower.rect.top() > upper.rect.top() + EPSILON
        && lower.rect.bottom() > upper.rect.bottom() + EPSILON
        && upper.rect.horizontal_overlap(&lower.rect) > EPSILON
}

/// Split padded rects (ordered by range, then line) into runs.
///
/// Empty rects never paint and are dropped first, so they also break runs.
pub fn segment(rects: Vec<PaddedRect>) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut group: Vec<PaddedRect> = Vec::new();

    for rect in rects {
        if rect.rect.is_empty() {
            trace!(line = rect.line_index, "dropping empty rect");
            continue;
        }
        if group.last().is_some_and(|prev| !joins(prev, &rect)) {
            runs.push(Run::from_group(std::mem::take(&mut group)));
        }
        group.push(rect);
    }
    if !group.is_empty() {
        runs.push(Run::from_group(group));
    }

    debug!(count = runs.len(), "segmented runs");
    runs
}

/// Move the shared edge of two joined rects to the middle of the gap between
/// their content boxes, kept inside both painted boxes.
fn place_seam(upper: &mut PaddedRect, lower: &mut PaddedRect) {
    let seam = (upper.content.bottom() + lower.content.top()) / 2.0;
    let lo = upper.rect.top().max(lower.rect.top());
    let hi = upper.rect.bottom().min(lower.rect.bottom());
    let seam = if lo <= hi { seam.clamp(lo, hi) } else { seam };
    upper.rect.max.y = seam;
    lower.rect.min.y = seam;
}
