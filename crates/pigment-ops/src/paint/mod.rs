//! Paint ops: brushes and the records that apply them.
//!
//! Scope:
//! - brush records (color, linear gradient, image)
//! - the paint record that fills an area with the current brush
//! - image normalization into packed RGBA buffers
//! - fill helpers built from the above
//!
//! Clip and transform state belong to the surrounding pipeline.

mod bitmap;
mod color;
mod gradient;
mod image;
#[allow(clippy::module_inception)]
mod paint;

pub use bitmap::RgbaBuffer;
pub use color::Color;
pub use gradient::LinearGradientOp;
pub use self::image::{ImageHandle, ImageOp, ImageSource};
pub use paint::{ColorOp, PaintOp};

use crate::clip::ClipOp;
use crate::coords::Rect;
use crate::ops::Ops;

/// Fill source for subsequent paint records.
///
/// Exactly one kind is active per brush record.
#[derive(Debug, Clone)]
pub enum Brush {
    Color(ColorOp),
    LinearGradient(LinearGradientOp),
    Image(ImageOp),
}

impl Brush {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Brush::Color(ColorOp::new(color))
    }

    /// Records the brush.
    pub fn add(&self, ops: &mut Ops) {
        match self {
            Brush::Color(op) => op.add(ops),
            Brush::LinearGradient(op) => op.add(ops),
            Brush::Image(op) => op.add(ops),
        }
    }
}

impl From<ColorOp> for Brush {
    fn from(op: ColorOp) -> Self {
        Brush::Color(op)
    }
}

impl From<LinearGradientOp> for Brush {
    fn from(op: LinearGradientOp) -> Self {
        Brush::LinearGradient(op)
    }
}

impl From<ImageOp> for Brush {
    fn from(op: ImageOp) -> Self {
        Brush::Image(op)
    }
}

/// Fills `shape` with `color`.
///
/// Records, inside one scope, the clip's own records followed by [`fill`].
pub fn fill_shape(ops: &mut Ops, color: Color, shape: &impl ClipOp) {
    let mut scope = ops.push();
    shape.add(&mut scope);
    fill(&mut scope, color);
}

/// Paints the whole plane with `color`.
///
/// Meant for use with a clip already in place; the renderer intersects the
/// unbounded paint rectangle with it. Prefer [`fill_shape`] unless several
/// fills share one clip.
pub fn fill(ops: &mut Ops, color: Color) {
    let mut scope = ops.push();
    ColorOp::new(color).add(&mut scope);
    PaintOp::new(Rect::infinite()).add(&mut scope);
}

/// Records `brush` followed by a paint of `rect`, inside one scope.
pub fn paint_rect(ops: &mut Ops, brush: &Brush, rect: Rect) {
    let mut scope = ops.push();
    brush.add(&mut scope);
    PaintOp::new(rect).add(&mut scope);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clip::RectClip;
    use crate::coords::{IRect, Vec2};
    use crate::ops::{Op, OpType, Reader};

    fn kinds(ops: &Ops) -> Vec<OpType> {
        Reader::new(ops)
            .map(|r| r.unwrap().1.op_type())
            .collect()
    }

    // ── fill ──────────────────────────────────────────────────────────────

    #[test]
    fn fill_records_color_and_infinite_paint_in_scope() {
        let mut ops = Ops::new();
        fill(&mut ops, Color::new(1, 2, 3, 4));

        assert_eq!(
            kinds(&ops),
            [OpType::Push, OpType::Color, OpType::Paint, OpType::Pop]
        );
        let decoded = Reader::new(&ops).decode_all().unwrap();
        assert_eq!(decoded[1], Op::Color(ColorOp::new(Color::new(1, 2, 3, 4))));
        match decoded[2] {
            Op::Paint(p) => assert!(p.rect.bits_eq(Rect::infinite())),
            ref other => panic!("expected paint, got {other:?}"),
        }
        assert_eq!(ops.depth(), 0);
    }

    // ── fill_shape ────────────────────────────────────────────────────────

    #[test]
    fn fill_shape_brackets_clip_and_fill() {
        let mut ops = Ops::new();
        let clip = RectClip::new(Rect::from_corners(0.0, 0.0, 10.0, 20.0));
        fill_shape(&mut ops, Color::WHITE, &clip);

        assert_eq!(
            kinds(&ops),
            [
                OpType::Push,
                OpType::Clip,
                OpType::Push,
                OpType::Color,
                OpType::Paint,
                OpType::Pop,
                OpType::Pop,
            ]
        );
        let decoded = Reader::new(&ops).decode_all().unwrap();
        assert_eq!(decoded[1], Op::Clip(clip.rect));
    }

    #[test]
    fn fill_shape_record_lengths_add_up() {
        let mut ops = Ops::new();
        fill_shape(&mut ops, Color::BLACK, &RectClip::new(Rect::infinite()));
        let expected: usize = [
            OpType::Push,
            OpType::Clip,
            OpType::Push,
            OpType::Color,
            OpType::Paint,
            OpType::Pop,
            OpType::Pop,
        ]
        .iter()
        .map(|t| t.size())
        .sum();
        assert_eq!(ops.len(), expected);
    }

    // ── brush ─────────────────────────────────────────────────────────────

    #[test]
    fn brush_dispatches_to_record_kind() {
        let gradient = LinearGradientOp::new(
            Vec2::zero(),
            Color::BLACK,
            Vec2::new(1.0, 0.0),
            Color::WHITE,
        );
        let image = ImageOp::new(&RgbaBuffer::new(IRect::from_size(2, 2)).into());
        let cases = [
            (Brush::solid(Color::WHITE), OpType::Color),
            (gradient.into(), OpType::LinearGradient),
            (image.into(), OpType::Image),
            (ImageOp::new(&Color::BLACK.into()).into(), OpType::Color),
        ];
        for (brush, ty) in cases {
            let mut ops = Ops::new();
            brush.add(&mut ops);
            assert_eq!(ops.data()[0], ty as u8);
            assert_eq!(ops.len(), ty.size());
        }
    }

    #[test]
    fn paint_rect_scopes_brush_and_paint() {
        let mut ops = Ops::new();
        let rect = Rect::from_corners(1.0, 2.0, 3.0, 4.0);
        paint_rect(&mut ops, &Brush::solid(Color::WHITE), rect);
        assert_eq!(
            kinds(&ops),
            [OpType::Push, OpType::Color, OpType::Paint, OpType::Pop]
        );
    }
}
