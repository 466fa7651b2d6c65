//! Pigment paint-op encoding.
//!
//! Turns paint instructions (solid colors, linear gradients, images, filled
//! rectangles) into a compact tagged byte stream for a renderer to replay.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`codec`] | little-endian `u32`/`f32` encoding, payload writer/reader |
//! | [`ops`] | `Ops` buffer, record tags, scopes, `Reader` |
//! | [`paint`] | `ColorOp`, `LinearGradientOp`, `ImageOp`, `PaintOp`, fill helpers |
//! | [`clip`] | `ClipOp` trait and `RectClip` |
//! | [`coords`] | `Vec2`, `Rect`, `IRect` |
//! | [`logging`] | `env_logger` setup |
//!
//! # Quick start
//!
//! ```rust
//! use pigment_ops::clip::RectClip;
//! use pigment_ops::coords::Rect;
//! use pigment_ops::ops::{Op, Ops, Reader};
//! use pigment_ops::paint::{fill_shape, Color};
//!
//! let mut ops = Ops::new();
//! let shape = RectClip::new(Rect::from_corners(0.0, 0.0, 64.0, 32.0));
//! fill_shape(&mut ops, Color::rgb(10, 20, 30), &shape);
//!
//! let decoded = Reader::new(&ops).decode_all().unwrap();
//! assert_eq!(decoded.len(), 7);
//! assert_eq!(decoded[1], Op::Clip(shape.rect));
//! ```

pub mod clip;
pub mod codec;
pub mod coords;
pub mod logging;
pub mod ops;
pub mod paint;
