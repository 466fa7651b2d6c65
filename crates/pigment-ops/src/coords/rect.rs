use super::Vec2;

/// Axis-aligned rectangle in drawing space, stored as `min`/`max` corners.
///
/// Corners are kept as given; a paint rectangle may use `±∞` bounds to
/// describe the whole plane, which an origin/size pair cannot express.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    #[inline]
    pub const fn from_corners(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            min: Vec2::new(x0, y0),
            max: Vec2::new(x1, y1),
        }
    }

    #[inline]
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: Vec2::new(origin.x + size.x, origin.y + size.y),
        }
    }

    /// The unbounded plane: `(-∞, -∞)` to `(+∞, +∞)`.
    #[inline]
    pub const fn infinite() -> Self {
        Self {
            min: Vec2::splat(f32::NEG_INFINITY),
            max: Vec2::splat(f32::INFINITY),
        }
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        !(self.min.x < self.max.x && self.min.y < self.max.y)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Bitwise comparison of both corners. See [`Vec2::bits_eq`].
    #[inline]
    pub fn bits_eq(self, other: Rect) -> bool {
        self.min.bits_eq(other.min) && self.max.bits_eq(other.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn from_origin_size_sets_max() {
        let r = Rect::from_origin_size(Vec2::new(1.0, 2.0), Vec2::new(10.0, 20.0));
        assert_eq!(r, Rect::from_corners(1.0, 2.0, 11.0, 22.0));
        assert_eq!(r.width(), 10.0);
        assert_eq!(r.height(), 20.0);
    }

    #[test]
    fn infinite_has_infinite_corners() {
        let r = Rect::infinite();
        assert_eq!(r.min.x, f32::NEG_INFINITY);
        assert_eq!(r.min.y, f32::NEG_INFINITY);
        assert_eq!(r.max.x, f32::INFINITY);
        assert_eq!(r.max.y, f32::INFINITY);
        assert!(!r.is_finite());
        assert!(!r.is_empty());
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(Rect::from_corners(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(Rect::from_corners(0.0, 0.0, 5.0, 0.0).is_empty());
    }

    #[test]
    fn is_empty_inverted() {
        assert!(Rect::from_corners(5.0, 5.0, 1.0, 1.0).is_empty());
    }

    #[test]
    fn is_empty_nan() {
        assert!(Rect::from_corners(f32::NAN, 0.0, 1.0, 1.0).is_empty());
    }

    // ── bits_eq ───────────────────────────────────────────────────────────

    #[test]
    fn bits_eq_distinguishes_signed_zero() {
        let a = Rect::from_corners(0.0, 0.0, 1.0, 1.0);
        let b = Rect::from_corners(-0.0, 0.0, 1.0, 1.0);
        assert_eq!(a, b);
        assert!(!a.bits_eq(b));
    }
}
