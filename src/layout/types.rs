//! Geometry primitives for the layout engine

/// An axis-aligned rectangle in plan coordinates (meters)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub length: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, length: f64) -> Self {
        Self {
            x,
            y,
            width,
            length,
        }
    }

    /// Create a zero-sized rectangle at the origin
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.length
    }

    pub fn area(&self) -> f64 {
        self.width * self.length
    }

    /// True when the two rectangles, each grown by `margin` on its far edges, intersect.
    ///
    /// Rectangles are separated when one ends at least `margin` before the other
    /// begins on either axis.
    pub fn overlaps(&self, other: &Rect, margin: f64) -> bool {
        !(self.right() + margin <= other.x
            || other.right() + margin <= self.x
            || self.bottom() + margin <= other.y
            || other.bottom() + margin <= self.y)
    }

    /// Check if `inner` lies entirely inside this rectangle
    pub fn contains_rect(&self, inner: &Rect) -> bool {
        inner.x >= self.x
            && inner.y >= self.y
            && inner.right() <= self.right()
            && inner.bottom() <= self.bottom()
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::zero()
    }
}

/// Dimensions of the area rooms are placed into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub length: f64,
}

impl Bounds {
    pub fn new(width: f64, length: f64) -> Self {
        Self { width, length }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r.right(), 4.0);
        assert_eq!(r.bottom(), 6.0);
        assert_eq!(r.area(), 12.0);
    }

    #[test]
    fn test_overlaps_identical() {
        let a = Rect::new(0.0, 0.0, 4.0, 4.0);
        assert!(a.overlaps(&a, 0.0));
        assert!(a.overlaps(&a, 0.2));
    }

    #[test]
    fn test_overlaps_touching_without_margin() {
        let a = Rect::new(0.0, 0.0, 4.0, 4.0);
        let b = Rect::new(4.0, 0.0, 4.0, 4.0);
        assert!(!a.overlaps(&b, 0.0));
        // Touching edges violate any positive margin
        assert!(a.overlaps(&b, 0.2));
    }

    #[test]
    fn test_overlaps_separated_by_margin() {
        let a = Rect::new(0.0, 0.0, 4.0, 4.0);
        let b = Rect::new(0.0, 4.5, 4.0, 4.0);
        assert!(!a.overlaps(&b, 0.3));
        assert!(!b.overlaps(&a, 0.3));
        assert!(a.overlaps(&b, 0.6));
    }

    #[test]
    fn test_overlap_requires_both_axes() {
        // Overlapping on x only
        let a = Rect::new(0.0, 0.0, 4.0, 2.0);
        let b = Rect::new(1.0, 5.0, 4.0, 2.0);
        assert!(!a.overlaps(&b, 0.1));
    }

    #[test]
    fn test_contains_rect() {
        let outer = Bounds::new(10.0, 10.0).rect();
        assert!(outer.contains_rect(&Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert!(!outer.contains_rect(&Rect::new(7.0, 0.0, 4.0, 1.0)));
        assert!(!outer.contains_rect(&Rect::new(-0.1, 0.0, 1.0, 1.0)));
    }
}
