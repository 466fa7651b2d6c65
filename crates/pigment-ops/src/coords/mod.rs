//! Geometry types used by encoded paint ops.
//!
//! Two spaces are involved:
//! - drawing space: `f32` coordinates, resolution independent, may be unbounded
//! - pixel space: `i32` coordinates addressing bitmap pixels
//!
//! Both use a top-left origin with +X right and +Y down.

mod irect;
mod rect;
mod vec2;

pub use irect::{IPoint, IRect};
pub use rect::Rect;
pub use vec2::Vec2;
