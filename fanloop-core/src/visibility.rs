//! Most-visible cell selection.
//!
//! Given the frames of every rendered cell and the viewport of the paging
//! container, pick the single cell that should own playback. Only the
//! vertical overlap is compared: feed cells always span the full viewport
//! width, so height alone separates candidates.

use fanloop_model::{Rect, VisibleFrame};

/// Selection threshold applied on top of "largest visible height wins".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityPolicy {
    min_visible_fraction: f32,
}

impl Default for VisibilityPolicy {
    fn default() -> Self {
        Self {
            min_visible_fraction: 0.0,
        }
    }
}

impl VisibilityPolicy {
    /// Fraction used by the feed screen: a cell must cover at least half
    /// of the viewport before it may start playing.
    pub const MAJORITY_FRACTION: f32 = 0.5;

    /// Only a cell covering at least half the viewport qualifies.
    pub fn majority() -> Self {
        Self::with_min_visible_fraction(Self::MAJORITY_FRACTION)
    }

    /// Clamped to `[0, 1]`; non-finite input is treated as `0`.
    pub fn with_min_visible_fraction(fraction: f32) -> Self {
        let min_visible_fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            min_visible_fraction,
        }
    }

    pub fn min_visible_fraction(&self) -> f32 {
        self.min_visible_fraction
    }

    /// Smallest visible height a candidate needs inside `viewport`.
    pub fn min_visible_height(&self, viewport: &Rect) -> f32 {
        viewport.standardized().height * self.min_visible_fraction
    }
}

/// Returns the identifier of the frame with the greatest visible height.
///
/// Ties keep the earliest frame: a later frame only replaces the leader
/// when it is strictly taller. Frames with no overlap never win, and
/// neither does a frame below the policy's threshold. An empty snapshot or
/// a zero-area viewport yields `None`.
pub fn select_most_visible<I: Clone>(
    frames: &[VisibleFrame<I>],
    viewport: Rect,
    policy: VisibilityPolicy,
) -> Option<I> {
    if viewport.is_empty() {
        return None;
    }

    let threshold = policy.min_visible_height(&viewport);
    let mut max_visible_height = 0.0_f32;
    let mut leader: Option<&I> = None;

    for candidate in frames {
        let visible_height = candidate.visible_height(&viewport);
        if visible_height > max_visible_height && visible_height >= threshold {
            max_visible_height = visible_height;
            leader = Some(&candidate.id);
        }
    }

    leader.cloned()
}

/// Reusable selector bound to a policy.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VisibilitySelector {
    policy: VisibilityPolicy,
}

impl VisibilitySelector {
    pub fn new(policy: VisibilityPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> VisibilityPolicy {
        self.policy
    }

    pub fn select<I: Clone>(&self, frames: &[VisibleFrame<I>], viewport: Rect) -> Option<I> {
        select_most_visible(frames, viewport, self.policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 320.0, 568.0);

    fn frames(list: &[(char, Rect)]) -> Vec<VisibleFrame<char>> {
        list.iter().map(|&(id, r)| VisibleFrame::new(id, r)).collect()
    }

    fn three_cells() -> Vec<VisibleFrame<char>> {
        frames(&[
            ('A', Rect::new(0.0, 0.0, 320.0, 200.0)),
            ('B', Rect::new(0.0, 200.0, 320.0, 400.0)),
            ('C', Rect::new(0.0, 600.0, 320.0, 300.0)),
        ])
    }

    #[test]
    fn picks_largest_visible_height() {
        let winner = select_most_visible(&three_cells(), VIEWPORT, VisibilityPolicy::default());
        assert_eq!(winner, Some('B'));
    }

    #[test]
    fn no_overlap_means_no_winner() {
        let snapshot = frames(&[('A', Rect::new(0.0, 600.0, 320.0, 200.0))]);
        assert_eq!(
            select_most_visible(&snapshot, VIEWPORT, VisibilityPolicy::default()),
            None
        );
    }

    #[test]
    fn empty_snapshot_and_degenerate_viewport() {
        let empty: Vec<VisibleFrame<char>> = Vec::new();
        assert_eq!(
            select_most_visible(&empty, VIEWPORT, VisibilityPolicy::default()),
            None
        );
        assert_eq!(
            select_most_visible(
                &three_cells(),
                Rect::new(0.0, 0.0, 320.0, 0.0),
                VisibilityPolicy::default()
            ),
            None
        );
    }

    #[test]
    fn first_frame_wins_ties() {
        let snapshot = frames(&[
            ('A', Rect::new(0.0, -284.0, 320.0, 568.0)),
            ('B', Rect::new(0.0, 284.0, 320.0, 568.0)),
        ]);
        assert_eq!(
            select_most_visible(&snapshot, VIEWPORT, VisibilityPolicy::default()),
            Some('A')
        );

        let reversed: Vec<_> = snapshot.iter().rev().cloned().collect();
        assert_eq!(
            select_most_visible(&reversed, VIEWPORT, VisibilityPolicy::default()),
            Some('B')
        );
    }

    #[test]
    fn majority_policy_keeps_clear_winner() {
        let selector = VisibilitySelector::new(VisibilityPolicy::majority());
        assert_eq!(selector.select(&three_cells(), VIEWPORT), Some('B'));
    }

    #[test]
    fn majority_policy_rejects_small_slices() {
        let snapshot = frames(&[
            ('A', Rect::new(0.0, 0.0, 320.0, 80.0)),
            ('B', Rect::new(0.0, 468.0, 320.0, 400.0)),
        ]);

        // B shows 100pt (~0.18 of the viewport); A shows less.
        assert_eq!(
            select_most_visible(&snapshot, VIEWPORT, VisibilityPolicy::default()),
            Some('B')
        );
        assert_eq!(
            select_most_visible(&snapshot, VIEWPORT, VisibilityPolicy::majority()),
            None
        );
    }

    #[test]
    fn threshold_is_inclusive() {
        let snapshot = frames(&[('A', Rect::new(0.0, 284.0, 320.0, 568.0))]);
        assert_eq!(
            select_most_visible(&snapshot, VIEWPORT, VisibilityPolicy::majority()),
            Some('A')
        );
    }

    #[test]
    fn fraction_is_clamped() {
        assert_eq!(
            VisibilityPolicy::with_min_visible_fraction(3.0).min_visible_fraction(),
            1.0
        );
        assert_eq!(
            VisibilityPolicy::with_min_visible_fraction(-1.0).min_visible_fraction(),
            0.0
        );
        assert_eq!(
            VisibilityPolicy::with_min_visible_fraction(f32::NAN).min_visible_fraction(),
            0.0
        );
    }

    #[test]
    fn viewport_need_not_start_at_origin() {
        let viewport = Rect::new(0.0, 1136.0, 320.0, 568.0);
        let snapshot = frames(&[
            ('A', Rect::new(0.0, 568.0, 320.0, 568.0)),
            ('B', Rect::new(0.0, 1136.0, 320.0, 568.0)),
            ('C', Rect::new(0.0, 1704.0, 320.0, 568.0)),
        ]);
        assert_eq!(
            select_most_visible(&snapshot, viewport, VisibilityPolicy::majority()),
            Some('B')
        );
    }
}
