use std::fmt;

use super::OpType;

/// Errors produced while decoding an op stream.
///
/// Streams written through [`Ops`](super::Ops) always decode; these only
/// surface for foreign or corrupted bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Tag byte does not name a record type.
    UnknownType { offset: usize, tag: u8 },
    /// Stream ends inside a record.
    Truncated { offset: usize, ty: OpType },
    /// Image record without a side-table entry.
    MissingImageRef { offset: usize },
    /// Pop record with no open scope.
    UnbalancedPop { offset: usize },
    /// Stream ends with scopes still open.
    UnclosedScope { depth: usize },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnknownType { offset, tag } => {
                write!(f, "unknown op tag 0x{tag:02X} at byte {offset}")
            }
            DecodeError::Truncated { offset, ty } => {
                write!(f, "truncated {ty:?} record at byte {offset} (needs {} bytes)", ty.size())
            }
            DecodeError::MissingImageRef { offset } => {
                write!(f, "image record at byte {offset} has no attached image")
            }
            DecodeError::UnbalancedPop { offset } => {
                write!(f, "pop without matching push at byte {offset}")
            }
            DecodeError::UnclosedScope { depth } => {
                write!(f, "stream ends with {depth} open scope(s)")
            }
        }
    }
}

impl std::error::Error for DecodeError {}
