//! Operation buffer and wire format.
//!
//! Responsibilities:
//! - define record tags and their fixed lengths
//! - append records to an [`Ops`] buffer and keep the attachment side table
//! - bracket related records in scopes (Push … Pop)
//! - decode a recorded stream back into typed records
//!
//! Stream layout: a flat sequence of records, each `tag` followed by a
//! tag-specific payload of fixed length. All numbers are little-endian.
//! Image pixels travel out of band in [`Ops::refs`].

mod buffer;
mod error;
mod opcode;
mod reader;
mod stack;

pub use buffer::{ImageRef, Ops};
pub use error::DecodeError;
pub use opcode::*;
pub use reader::{Op, Reader};
pub use stack::StackGuard;
