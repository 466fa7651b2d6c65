/// Integer point in pixel space.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct IPoint {
    pub x: i32,
    pub y: i32,
}

impl IPoint {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }
}

/// Integer rectangle in pixel space, half-open: `[min, max)`.
///
/// Bitmap bounds and image sampling rectangles use this type. An empty
/// rectangle (any axis with `max <= min`) covers no pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct IRect {
    pub min: IPoint,
    pub max: IPoint,
}

impl IRect {
    #[inline]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: IPoint::new(x0, y0),
            max: IPoint::new(x1, y1),
        }
    }

    /// Rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Width, or 0 when empty on that axis. Saturates at `i32::MAX`.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.x.saturating_sub(self.min.x).max(0)
    }

    /// Height, or 0 when empty on that axis. Saturates at `i32::MAX`.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.y.saturating_sub(self.min.y).max(0)
    }

    #[inline]
    pub fn size(self) -> IPoint {
        IPoint::new(self.width(), self.height())
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.max.x <= self.min.x || self.max.y <= self.min.y
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: IPoint) -> bool {
        p.x >= self.min.x && p.y >= self.min.y && p.x < self.max.x && p.y < self.max.y
    }

    /// Overlap of two rectangles. Disjoint inputs yield an empty rectangle
    /// anchored at the clamped min corner.
    #[inline]
    pub fn intersect(self, other: IRect) -> IRect {
        let x0 = self.min.x.max(other.min.x);
        let y0 = self.min.y.max(other.min.y);
        let x1 = self.max.x.min(other.max.x).max(x0);
        let y1 = self.max.y.min(other.max.y).max(y0);
        IRect::new(x0, y0, x1, y1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_of_inverted_is_zero() {
        let r = IRect::new(10, 10, 2, 4);
        assert_eq!(r.size(), IPoint::zero());
        assert!(r.is_empty());
    }

    #[test]
    fn contains_half_open() {
        let r = IRect::from_size(4, 4);
        assert!(r.contains(IPoint::new(0, 0)));
        assert!(r.contains(IPoint::new(3, 3)));
        assert!(!r.contains(IPoint::new(4, 3)));
        assert!(!r.contains(IPoint::new(-1, 0)));
    }

    #[test]
    fn intersect_overlapping() {
        let a = IRect::new(0, 0, 10, 10);
        let b = IRect::new(5, 2, 20, 8);
        assert_eq!(a.intersect(b), IRect::new(5, 2, 10, 8));
    }

    #[test]
    fn intersect_disjoint_is_empty() {
        let a = IRect::new(0, 0, 4, 4);
        let b = IRect::new(8, 8, 12, 12);
        let i = a.intersect(b);
        assert!(i.is_empty());
        assert_eq!(i.size(), IPoint::zero());
    }

    #[test]
    fn size_saturates_on_wide_bounds() {
        let r = IRect::new(-5, i32::MIN, i32::MAX, i32::MAX);
        assert_eq!(r.size(), IPoint::new(i32::MAX, i32::MAX));
        assert_eq!(IRect::new(i32::MAX, 0, i32::MIN, 1).width(), 0);
    }
}
