use crate::codec::{PayloadReader, PayloadWriter};
use crate::coords::Vec2;
use crate::ops::{OpType, Ops};

use super::Color;

/// Sets the brush to a two-stop linear gradient.
///
/// The gradient runs from `stop1` (drawing space) with `color1` to `stop2`
/// with `color2`. Stops are encoded as given; degenerate axes
/// (`stop1 == stop2`) are left to the renderer.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct LinearGradientOp {
    pub stop1: Vec2,
    pub color1: Color,
    pub stop2: Vec2,
    pub color2: Color,
}

impl LinearGradientOp {
    #[inline]
    pub const fn new(stop1: Vec2, color1: Color, stop2: Vec2, color2: Color) -> Self {
        Self {
            stop1,
            color1,
            stop2,
            color2,
        }
    }

    pub fn add(&self, ops: &mut Ops) {
        PayloadWriter::new(ops.write(OpType::LinearGradient))
            .f32(self.stop1.x)
            .f32(self.stop1.y)
            .f32(self.stop2.x)
            .f32(self.stop2.y)
            .color(self.color1)
            .color(self.color2);
    }

    pub(crate) fn decode(r: &mut PayloadReader<'_>) -> Self {
        let stop1 = Vec2::new(r.f32(), r.f32());
        let stop2 = Vec2::new(r.f32(), r.f32());
        Self {
            stop1,
            color1: r.color(),
            stop2,
            color2: r.color(),
        }
    }
}
