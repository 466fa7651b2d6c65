/// Record tag: the first byte of every record in the op stream.
///
/// Each tag fixes the record's total length (tag byte included). Tags start
/// at 200 so that a stray small integer in the stream is rejected rather
/// than misread as an op.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum OpType {
    Push = 200,
    Pop,
    Clip,
    Image,
    Paint,
    Color,
    LinearGradient,
}

pub const TYPE_PUSH_LEN: usize = 1;
pub const TYPE_POP_LEN: usize = 1;
pub const TYPE_CLIP_LEN: usize = 1 + 4 * 4;
pub const TYPE_IMAGE_LEN: usize = 1 + 4 * 4;
pub const TYPE_PAINT_LEN: usize = 1 + 4 * 4;
pub const TYPE_COLOR_LEN: usize = 1 + 4;
pub const TYPE_LINEAR_GRADIENT_LEN: usize = 1 + 4 * 4 + 4 + 4;

impl OpType {
    pub const ALL: [OpType; 7] = [
        OpType::Push,
        OpType::Pop,
        OpType::Clip,
        OpType::Image,
        OpType::Paint,
        OpType::Color,
        OpType::LinearGradient,
    ];

    /// Total record length in bytes, tag included.
    #[inline]
    pub const fn size(self) -> usize {
        match self {
            OpType::Push => TYPE_PUSH_LEN,
            OpType::Pop => TYPE_POP_LEN,
            OpType::Clip => TYPE_CLIP_LEN,
            OpType::Image => TYPE_IMAGE_LEN,
            OpType::Paint => TYPE_PAINT_LEN,
            OpType::Color => TYPE_COLOR_LEN,
            OpType::LinearGradient => TYPE_LINEAR_GRADIENT_LEN,
        }
    }

    /// Whether records of this type carry an out-of-band attachment.
    #[inline]
    pub const fn has_ref(self) -> bool {
        matches!(self, OpType::Image)
    }

    #[inline]
    pub const fn from_u8(b: u8) -> Option<OpType> {
        Some(match b {
            200 => OpType::Push,
            201 => OpType::Pop,
            202 => OpType::Clip,
            203 => OpType::Image,
            204 => OpType::Paint,
            205 => OpType::Color,
            206 => OpType::LinearGradient,
            _ => return None,
        })
    }
}
