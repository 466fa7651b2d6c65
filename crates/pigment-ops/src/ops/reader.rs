use std::sync::Arc;

use crate::clip::RectClip;
use crate::codec::PayloadReader;
use crate::coords::{IPoint, IRect, Rect};
use crate::paint::{ColorOp, ImageHandle, LinearGradientOp, PaintOp, RgbaBuffer};

use super::{DecodeError, ImageRef, OpType, Ops};

/// One decoded record.
#[derive(Debug, Clone, PartialEq)]
pub enum Op<'a> {
    Push,
    Pop,
    Clip(Rect),
    Color(ColorOp),
    LinearGradient(LinearGradientOp),
    Image {
        rect: IRect,
        image: &'a Arc<RgbaBuffer>,
        handle: ImageHandle,
    },
    Paint(PaintOp),
}

impl Op<'_> {
    pub fn op_type(&self) -> OpType {
        match self {
            Op::Push => OpType::Push,
            Op::Pop => OpType::Pop,
            Op::Clip(_) => OpType::Clip,
            Op::Color(_) => OpType::Color,
            Op::LinearGradient(_) => OpType::LinearGradient,
            Op::Image { .. } => OpType::Image,
            Op::Paint(_) => OpType::Paint,
        }
    }
}

/// Decoder for a recorded op stream.
///
/// Yields `(offset, op)` pairs in stream order, where `offset` is the byte
/// position of the record's tag. Image records are resolved through the
/// side table. Iteration stops after the first error.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    refs: &'a [ImageRef],
    pos: usize,
    depth: usize,
    done: bool,
}

impl<'a> Reader<'a> {
    #[inline]
    pub fn new(ops: &'a Ops) -> Self {
        Self::from_parts(ops.data(), ops.refs())
    }

    /// Reader over a raw stream and its side table (ordered by offset).
    pub fn from_parts(data: &'a [u8], refs: &'a [ImageRef]) -> Self {
        Self {
            data,
            refs,
            pos: 0,
            depth: 0,
            done: false,
        }
    }

    /// Decodes the whole stream, dropping offsets.
    pub fn decode_all(self) -> Result<Vec<Op<'a>>, DecodeError> {
        self.map(|r| r.map(|(_, op)| op)).collect()
    }

    fn image_ref(&self, offset: usize) -> Option<&'a ImageRef> {
        let refs = self.refs;
        refs.binary_search_by_key(&offset, |r| r.offset)
            .ok()
            .map(|i| &refs[i])
    }

    fn decode_at(&mut self, offset: usize) -> Result<Op<'a>, DecodeError> {
        let data = self.data;
        let tag = data[offset];
        let ty = OpType::from_u8(tag).ok_or(DecodeError::UnknownType { offset, tag })?;
        let end = offset + ty.size();
        if end > data.len() {
            return Err(DecodeError::Truncated { offset, ty });
        }
        let mut r = PayloadReader::new(&data[offset + 1..end]);
        self.pos = end;

        let op = match ty {
            OpType::Push => {
                self.depth += 1;
                Op::Push
            }
            OpType::Pop => {
                if self.depth == 0 {
                    return Err(DecodeError::UnbalancedPop { offset });
                }
                self.depth -= 1;
                Op::Pop
            }
            OpType::Clip => Op::Clip(RectClip::decode(&mut r)),
            OpType::Color => Op::Color(ColorOp::decode(&mut r)),
            OpType::LinearGradient => Op::LinearGradient(LinearGradientOp::decode(&mut r)),
            OpType::Paint => Op::Paint(PaintOp::decode(&mut r)),
            OpType::Image => {
                let min = IPoint::new(r.u32() as i32, r.u32() as i32);
                let max = IPoint::new(r.u32() as i32, r.u32() as i32);
                let attached = self
                    .image_ref(offset)
                    .ok_or(DecodeError::MissingImageRef { offset })?;
                Op::Image {
                    rect: IRect { min, max },
                    image: &attached.image,
                    handle: attached.handle,
                }
            }
        };
        debug_assert_eq!(r.remaining(), 0, "{ty:?} payload not fully decoded");
        Ok(op)
    }
}

impl<'a> Iterator for Reader<'a> {
    type Item = Result<(usize, Op<'a>), DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.pos >= self.data.len() {
            self.done = true;
            return match self.depth {
                0 => None,
                depth => Some(Err(DecodeError::UnclosedScope { depth })),
            };
        }
        let offset = self.pos;
        let res = self.decode_at(offset);
        if res.is_err() {
            self.done = true;
        }
        Some(res.map(|op| (offset, op)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{Color, ImageOp};

    // ── well-formed streams ───────────────────────────────────────────────

    #[test]
    fn empty_stream_yields_nothing() {
        let ops = Ops::new();
        assert!(Reader::new(&ops).next().is_none());
    }

    #[test]
    fn offsets_follow_record_lengths() {
        let mut ops = Ops::new();
        {
            let mut scope = ops.push();
            ColorOp::new(Color::WHITE).add(&mut scope);
            PaintOp::new(Rect::infinite()).add(&mut scope);
        }
        let offsets: Vec<usize> = Reader::new(&ops).map(|r| r.unwrap().0).collect();
        assert_eq!(offsets, [0, 1, 6, 23]);
    }

    #[test]
    fn image_resolves_through_side_table() {
        let buf = Arc::new(RgbaBuffer::new(IRect::from_size(4, 2)));
        let op = ImageOp::new(&buf.clone().into());
        let mut ops = Ops::new();
        ColorOp::new(Color::BLACK).add(&mut ops);
        op.add(&mut ops);

        let decoded = Reader::new(&ops).decode_all().unwrap();
        match &decoded[1] {
            Op::Image { rect, image, handle } => {
                assert_eq!(*rect, IRect::from_size(4, 2));
                assert!(Arc::ptr_eq(image, &buf));
                assert_eq!(Some(*handle), op.handle());
            }
            other => panic!("expected image, got {other:?}"),
        }
    }

    #[test]
    fn negative_image_coordinates_survive() {
        let mut op = ImageOp::new(&RgbaBuffer::new(IRect::from_size(1, 1)).into());
        op.rect = IRect::new(-3, -1, 1, 1);
        let mut ops = Ops::new();
        op.add(&mut ops);
        match Reader::new(&ops).decode_all().unwrap()[0] {
            Op::Image { rect, .. } => assert_eq!(rect, IRect::new(-3, -1, 1, 1)),
            ref other => panic!("expected image, got {other:?}"),
        }
    }

    // ── malformed streams ─────────────────────────────────────────────────

    #[test]
    fn unknown_tag_is_rejected() {
        let data = [OpType::Push as u8, 7];
        let mut r = Reader::from_parts(&data, &[]);
        assert_eq!(r.next().unwrap().unwrap().1, Op::Push);
        assert_eq!(
            r.next().unwrap().unwrap_err(),
            DecodeError::UnknownType { offset: 1, tag: 7 }
        );
        assert!(r.next().is_none());
    }

    #[test]
    fn truncated_record_is_rejected() {
        let data = [OpType::Color as u8, 1, 2];
        let err = Reader::from_parts(&data, &[]).decode_all().unwrap_err();
        assert_eq!(err, DecodeError::Truncated { offset: 0, ty: OpType::Color });
    }

    #[test]
    fn image_without_ref_is_rejected() {
        let mut data = vec![OpType::Image as u8];
        data.extend_from_slice(&[0; 16]);
        let err = Reader::from_parts(&data, &[]).decode_all().unwrap_err();
        assert_eq!(err, DecodeError::MissingImageRef { offset: 0 });
    }

    #[test]
    fn unbalanced_scopes_are_rejected() {
        let pop = [OpType::Pop as u8];
        assert_eq!(
            Reader::from_parts(&pop, &[]).decode_all().unwrap_err(),
            DecodeError::UnbalancedPop { offset: 0 }
        );

        let push = [OpType::Push as u8, OpType::Push as u8, OpType::Pop as u8];
        assert_eq!(
            Reader::from_parts(&push, &[]).decode_all().unwrap_err(),
            DecodeError::UnclosedScope { depth: 1 }
        );
    }

    #[test]
    fn decode_error_display() {
        let e = DecodeError::UnknownType { offset: 3, tag: 0x2A };
        assert_eq!(e.to_string(), "unknown op tag 0x2A at byte 3");
    }
}
