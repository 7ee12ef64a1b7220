//! Pixel-space rectangles.
//!
//! [`Rect`] describes crop regions and opaque bounding boxes. Coordinates
//! are unsigned with the origin at the top-left corner; a rectangle with a
//! zero width or height is empty.

/// Axis-aligned rectangle in pixel coordinates.
///
/// # Example
///
/// ```rust
/// use iconbatch_core::Rect;
///
/// let band = Rect::from_ltrb(0, 200, 640, 740);
/// assert_eq!((band.width, band.height), (640, 540));
///
/// let clipped = band.intersect(&Rect::new(0, 0, 640, 480)).unwrap();
/// assert_eq!((clipped.y, clipped.height), (200, 280));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Rect {
    /// Creates a rectangle from position and size.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from left/top/right/bottom edges.
    ///
    /// `right` and `bottom` are exclusive. Inverted edges collapse to an
    /// empty rectangle instead of wrapping.
    pub fn from_ltrb(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            x: left,
            y: top,
            width: right.saturating_sub(left),
            height: bottom.saturating_sub(top),
        }
    }

    /// Right edge (exclusive).
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Returns true if the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the intersection with another rectangle, or `None` if the
    /// rectangles do not overlap.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= x || bottom <= y {
            return None;
        }
        Some(Rect::from_ltrb(x, y, right, bottom))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ltrb() {
        let r = Rect::from_ltrb(10, 20, 30, 50);
        assert_eq!(r, Rect::new(10, 20, 20, 30));
        assert_eq!(r.right(), 30);
        assert_eq!(r.bottom(), 50);
    }

    #[test]
    fn test_from_ltrb_inverted_is_empty() {
        assert!(Rect::from_ltrb(30, 0, 10, 10).is_empty());
    }

    #[test]
    fn test_intersect_overlap() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(50, 50, 100, 100);
        assert_eq!(a.intersect(&b), Some(Rect::new(50, 50, 50, 50)));
    }

    #[test]
    fn test_intersect_contained() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(10, 10, 20, 20);
        assert_eq!(outer.intersect(&inner), Some(inner));
        assert_eq!(inner.intersect(&outer), Some(inner));
    }

    #[test]
    fn test_intersect_disjoint() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        assert_eq!(a.intersect(&b), None);
    }
}
