use crate::geometry::Rect;

/// On-screen frame of one rendered feed cell.
///
/// The identifier is an opaque handle (page index, [`crate::VideoId`], ...)
/// and never owns the underlying view. Snapshots are rebuilt on every
/// scroll or layout tick and are not retained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleFrame<I> {
    pub id: I,
    pub frame: Rect,
}

impl<I> VisibleFrame<I> {
    pub fn new(id: I, frame: Rect) -> Self {
        Self { id, frame }
    }

    /// Height of the part of this frame that falls inside `viewport`.
    ///
    /// Zero when the frame is entirely outside or degenerate.
    pub fn visible_height(&self, viewport: &Rect) -> f32 {
        viewport
            .intersection(&self.frame)
            .map(|overlap| overlap.height)
            .unwrap_or(0.0)
    }
}

impl<I> From<(I, Rect)> for VisibleFrame<I> {
    fn from((id, frame): (I, Rect)) -> Self {
        Self { id, frame }
    }
}
