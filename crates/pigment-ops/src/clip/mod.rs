//! Clip descriptors.
//!
//! The encoding layer does not compute clip regions. A clip is anything that
//! can record itself into an [`Ops`] buffer; the renderer interprets those
//! records and intersects later paint records with them.

use crate::codec::{PayloadReader, PayloadWriter};
use crate::coords::{Rect, Vec2};
use crate::ops::{OpType, Ops};

/// A value that records a clip into an op buffer.
///
/// Implementations own their record layout. [`fill_shape`](crate::paint::fill_shape)
/// calls [`add`](Self::add) inside a scope so the clip only affects the
/// paint that follows it.
pub trait ClipOp {
    fn add(&self, ops: &mut Ops);
}

/// Axis-aligned rectangular clip in drawing space.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RectClip {
    pub rect: Rect,
}

impl RectClip {
    #[inline]
    pub const fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub(crate) fn decode(r: &mut PayloadReader<'_>) -> Rect {
        let min = Vec2::new(r.f32(), r.f32());
        let max = Vec2::new(r.f32(), r.f32());
        Rect::new(min, max)
    }
}

impl ClipOp for RectClip {
    fn add(&self, ops: &mut Ops) {
        let r = self.rect;
        PayloadWriter::new(ops.write(OpType::Clip))
            .f32(r.min.x)
            .f32(r.min.y)
            .f32(r.max.x)
            .f32(r.max.y);
    }
}

impl<T: ClipOp + ?Sized> ClipOp for &T {
    fn add(&self, ops: &mut Ops) {
        (**self).add(ops)
    }
}
