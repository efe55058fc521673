use std::ops::Range;

use fanloop_model::{Rect, VisibleFrame};

/// Vertical pager whose pages each fill the viewport.
///
/// Produces the frame snapshot the coordinator consumes: one frame per
/// rendered page, in viewport coordinates.
#[derive(Debug, Clone)]
pub struct PagerLayout {
    /// Visible area of the scroll container
    viewport: Rect,
    /// Total number of pages
    page_count: usize,
    /// Current scroll position
    offset: f32,
    /// Pages rendered beyond each edge of the viewport
    overscan: usize,
}

impl PagerLayout {
    pub fn new(viewport: Rect, page_count: usize) -> Self {
        Self {
            viewport: viewport.standardized(),
            page_count,
            offset: 0.0,
            overscan: 1,
        }
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn page_height(&self) -> f32 {
        self.viewport.height
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn max_offset(&self) -> f32 {
        self.page_count.saturating_sub(1) as f32 * self.page_height()
    }

    /// Stores the scroll position, clamped to the scrollable range.
    pub fn set_offset(&mut self, offset: f32) {
        self.offset = if offset.is_finite() {
            offset.clamp(0.0, self.max_offset())
        } else {
            0.0
        };
    }

    pub fn set_page_count(&mut self, page_count: usize) {
        self.page_count = page_count;
        self.set_offset(self.offset);
    }

    /// Applies a new container size, keeping the same page in view.
    pub fn set_viewport(&mut self, viewport: Rect) {
        let page_position = if self.page_height() > 0.0 {
            self.offset / self.page_height()
        } else {
            0.0
        };
        self.viewport = viewport.standardized();
        self.set_offset(page_position * self.page_height());
    }

    /// Offset at which `page` is exactly in view.
    pub fn offset_for_page(&self, page: usize) -> f32 {
        page as f32 * self.page_height()
    }

    /// Page closest to the current offset.
    pub fn current_page(&self) -> Option<usize> {
        if self.page_count == 0 || self.page_height() <= 0.0 {
            return None;
        }
        let page = (self.offset / self.page_height()).round() as usize;
        Some(page.min(self.page_count - 1))
    }

    /// Pages currently rendered, overscan included.
    pub fn visible_range(&self) -> Range<usize> {
        let height = self.page_height();
        if self.page_count == 0 || height <= 0.0 {
            return 0..0;
        }

        let first_visible = (self.offset / height).floor() as usize;
        let last_visible = (((self.offset + height) / height).ceil() as usize).min(self.page_count);

        let start = first_visible.saturating_sub(self.overscan);
        let end = (last_visible + self.overscan).min(self.page_count);
        start..end
    }

    /// Frame of `page` relative to the viewport's coordinate space.
    pub fn frame_for_page(&self, page: usize) -> Rect {
        Rect::new(
            self.viewport.x,
            self.viewport.y + page as f32 * self.page_height() - self.offset,
            self.viewport.width,
            self.page_height(),
        )
    }

    pub fn visible_frames(&self) -> Vec<VisibleFrame<usize>> {
        self.visible_range()
            .map(|page| VisibleFrame::new(page, self.frame_for_page(page)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 320.0, 568.0);

    #[test]
    fn settled_page_renders_neighbours() {
        let mut pager = PagerLayout::new(VIEWPORT, 5);
        pager.set_offset(pager.offset_for_page(2));

        assert_eq!(pager.visible_range(), 1..4);
        assert_eq!(pager.current_page(), Some(2));
        assert_eq!(pager.frame_for_page(2), VIEWPORT);
        assert_eq!(pager.frame_for_page(3), Rect::new(0.0, 568.0, 320.0, 568.0));
    }

    #[test]
    fn mid_swipe_renders_both_pages() {
        let mut pager = PagerLayout::new(VIEWPORT, 5).with_overscan(0);
        pager.set_offset(300.0);

        let frames = pager.visible_frames();
        let ids: Vec<usize> = frames.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(frames[0].visible_height(&VIEWPORT), 268.0);
        assert_eq!(frames[1].visible_height(&VIEWPORT), 300.0);
        assert_eq!(pager.current_page(), Some(1));
    }

    #[test]
    fn offset_is_clamped() {
        let mut pager = PagerLayout::new(VIEWPORT, 3);
        pager.set_offset(-50.0);
        assert_eq!(pager.offset(), 0.0);

        pager.set_offset(10_000.0);
        assert_eq!(pager.offset(), 1136.0);
        assert_eq!(pager.visible_range(), 1..3);

        pager.set_page_count(1);
        assert_eq!(pager.offset(), 0.0);
    }

    #[test]
    fn empty_pager_has_no_frames() {
        let pager = PagerLayout::new(VIEWPORT, 0);
        assert!(pager.visible_frames().is_empty());
        assert_eq!(pager.current_page(), None);
    }

    #[test]
    fn resizing_keeps_the_same_page() {
        let mut pager = PagerLayout::new(VIEWPORT, 4);
        pager.set_offset(pager.offset_for_page(2));

        pager.set_viewport(Rect::new(0.0, 0.0, 390.0, 844.0));
        assert_eq!(pager.offset(), 1688.0);
        assert_eq!(pager.current_page(), Some(2));
    }
}
