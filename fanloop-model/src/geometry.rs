//! Screen-space rectangles.
//!
//! Coordinates follow the usual UI convention: the origin is the top-left
//! corner and `y` grows downward. All frames handed to the selector must
//! share one coordinate space with the viewport they are compared against.

/// Axis-aligned rectangle in points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns an equivalent rectangle with non-negative width and height.
    pub fn standardized(&self) -> Rect {
        let (x, width) = if self.width < 0.0 {
            (self.x + self.width, -self.width)
        } else {
            (self.x, self.width)
        };
        let (y, height) = if self.height < 0.0 {
            (self.y + self.height, -self.height)
        } else {
            (self.y, self.height)
        };
        Rect::new(x, y, width, height)
    }

    pub fn min_x(&self) -> f32 {
        self.standardized().x
    }

    pub fn max_x(&self) -> f32 {
        let r = self.standardized();
        r.x + r.width
    }

    pub fn min_y(&self) -> f32 {
        self.standardized().y
    }

    pub fn max_y(&self) -> f32 {
        let r = self.standardized();
        r.y + r.height
    }

    pub fn area(&self) -> f32 {
        (self.width * self.height).abs()
    }

    /// True when the rectangle covers no area (or has NaN extents).
    pub fn is_empty(&self) -> bool {
        !(self.area() > 0.0)
    }

    /// Overlap of two rectangles, or `None` when they share no area.
    ///
    /// Touching edges do not count as overlap.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let min_x = self.min_x().max(other.min_x());
        let max_x = self.max_x().min(other.max_x());
        let min_y = self.min_y().max(other.min_y());
        let max_y = self.max_y().min(other.max_y());

        let width = max_x - min_x;
        let height = max_y - min_y;
        if width > 0.0 && height > 0.0 {
            Some(Rect::new(min_x, min_y, width, height))
        } else {
            None
        }
    }
}
