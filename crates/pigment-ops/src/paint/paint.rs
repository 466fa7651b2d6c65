use crate::codec::{PayloadReader, PayloadWriter};
use crate::coords::{Rect, Vec2};
use crate::ops::{OpType, Ops};

use super::Color;

/// Sets the brush to a constant color.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct ColorOp {
    pub color: Color,
}

impl ColorOp {
    #[inline]
    pub const fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn add(&self, ops: &mut Ops) {
        PayloadWriter::new(ops.write(OpType::Color)).color(self.color);
    }

    pub(crate) fn decode(r: &mut PayloadReader<'_>) -> Self {
        Self { color: r.color() }
    }
}

/// Fills an area with the current brush, respecting the current clip.
///
/// `rect` is in drawing space; the brush is scaled to cover it. Infinite
/// bounds are allowed and are intersected with the active clip by the
/// renderer.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PaintOp {
    pub rect: Rect,
}

impl PaintOp {
    #[inline]
    pub const fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn add(&self, ops: &mut Ops) {
        let r = self.rect;
        PayloadWriter::new(ops.write(OpType::Paint))
            .f32(r.min.x)
            .f32(r.min.y)
            .f32(r.max.x)
            .f32(r.max.y);
    }

    pub(crate) fn decode(r: &mut PayloadReader<'_>) -> Self {
        let min = Vec2::new(r.f32(), r.f32());
        let max = Vec2::new(r.f32(), r.f32());
        Self { rect: Rect::new(min, max) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_record_bytes() {
        let mut ops = Ops::new();
        ColorOp::new(Color::new(10, 20, 30, 255)).add(&mut ops);
        assert_eq!(ops.data(), &[OpType::Color as u8, 10, 20, 30, 255]);
    }

    #[test]
    fn color_record_round_trips() {
        for c in [Color::TRANSPARENT, Color::WHITE, Color::new(0x12, 0x34, 0x56, 0x78)] {
            let mut ops = Ops::new();
            ColorOp::new(c).add(&mut ops);
            let decoded = ColorOp::decode(&mut PayloadReader::new(&ops.data()[1..]));
            assert_eq!(decoded.color, c);
        }
    }

    #[test]
    fn infinite_paint_record_bytes() {
        let mut ops = Ops::new();
        PaintOp::new(Rect::infinite()).add(&mut ops);

        let neg = f32::NEG_INFINITY.to_bits().to_le_bytes();
        let pos = f32::INFINITY.to_bits().to_le_bytes();
        let mut expected = vec![OpType::Paint as u8];
        for b in [neg, neg, pos, pos] {
            expected.extend_from_slice(&b);
        }
        assert_eq!(ops.data(), expected.as_slice());
    }

    #[test]
    fn paint_record_keeps_float_bits() {
        let nan = f32::from_bits(0x7FC0_0001);
        let rects = [
            Rect::from_corners(0.5, -1.25, 1e30, 3.0),
            Rect::from_corners(-0.0, 0.0, f32::MIN_POSITIVE, f32::MAX),
            Rect::from_corners(nan, f32::NEG_INFINITY, f32::INFINITY, nan),
        ];
        for rect in rects {
            let mut ops = Ops::new();
            PaintOp::new(rect).add(&mut ops);
            assert_eq!(ops.len(), OpType::Paint.size());
            let decoded = PaintOp::decode(&mut PayloadReader::new(&ops.data()[1..]));
            assert!(decoded.rect.bits_eq(rect), "{rect:?} decoded as {:?}", decoded.rect);
        }
    }
}
