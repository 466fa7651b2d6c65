use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::codec::PayloadWriter;
use crate::coords::{IPoint, IRect};
use crate::ops::{OpType, Ops};

use super::{Color, ColorOp, RgbaBuffer};

static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

/// Identity token for a canonical image.
///
/// Two handles are equal only if they came from the same [`ImageOp::new`]
/// call (or the same [`ImageHandle::next`] call). Renderers use it as a
/// texture cache key; its value says nothing about the pixels.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ImageHandle(u64);

impl ImageHandle {
    /// Mints a handle distinct from every other handle in the process.
    #[inline]
    pub fn next() -> Self {
        Self(NEXT_HANDLE.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Bitmap accepted by [`ImageOp::new`].
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// Infinite single-color fill.
    Uniform(Color),
    /// In-memory RGBA8 bitmap, possibly with an offset origin or padded rows.
    Rgba(Arc<RgbaBuffer>),
    /// Any bitmap the `image` crate can hold (decoded files, other pixel formats).
    Dynamic(image::DynamicImage),
}

impl From<Color> for ImageSource {
    #[inline]
    fn from(c: Color) -> Self {
        ImageSource::Uniform(c)
    }
}

impl From<RgbaBuffer> for ImageSource {
    #[inline]
    fn from(b: RgbaBuffer) -> Self {
        ImageSource::Rgba(Arc::new(b))
    }
}

impl From<Arc<RgbaBuffer>> for ImageSource {
    #[inline]
    fn from(b: Arc<RgbaBuffer>) -> Self {
        ImageSource::Rgba(b)
    }
}

impl From<image::DynamicImage> for ImageSource {
    #[inline]
    fn from(img: image::DynamicImage) -> Self {
        ImageSource::Dynamic(img)
    }
}

#[derive(Debug, Clone)]
enum ImageBrush {
    Uniform(Color),
    Image {
        src: Arc<RgbaBuffer>,
        handle: ImageHandle,
    },
}

/// Sets the brush to an image.
///
/// The backing buffer is always packed RGBA8 and is treated as immutable for
/// as long as the handle lives; renderers may cache a texture copy keyed by
/// [`handle`](Self::handle). Build one `ImageOp` per logical image and reuse
/// it across frames: every [`new`](Self::new) call mints a fresh handle, so
/// rebuilding per frame defeats the cache.
#[derive(Debug, Clone)]
pub struct ImageOp {
    /// Section of the backing image to sample.
    pub rect: IRect,
    brush: ImageBrush,
}

impl ImageOp {
    /// Normalizes `src` into a brush.
    ///
    /// - uniform sources become a plain color brush; nothing is allocated
    /// - packed RGBA buffers are shared as-is
    /// - everything else is copied into a new packed buffer
    ///
    /// Pixels are copied straight; no alpha premultiplication is applied.
    pub fn new(src: &ImageSource) -> Self {
        match src {
            ImageSource::Uniform(c) => ImageOp {
                rect: IRect::default(),
                brush: ImageBrush::Uniform(*c),
            },
            ImageSource::Rgba(buf) if buf.is_packed() => {
                log::trace!("ImageOp: reusing packed {:?} buffer", buf.size());
                Self::from_packed(buf.clone())
            }
            ImageSource::Rgba(buf) => Self::from_packed(Arc::new(copy_rgba(buf))),
            ImageSource::Dynamic(img) => Self::from_packed(Arc::new(copy_dynamic(img))),
        }
    }

    fn from_packed(src: Arc<RgbaBuffer>) -> Self {
        debug_assert!(src.is_packed());
        ImageOp {
            rect: src.bounds(),
            brush: ImageBrush::Image {
                src,
                handle: ImageHandle::next(),
            },
        }
    }

    /// Size of the backing buffer; zero for uniform brushes.
    pub fn size(&self) -> IPoint {
        match &self.brush {
            ImageBrush::Uniform(_) => IPoint::zero(),
            ImageBrush::Image { src, .. } => src.size(),
        }
    }

    /// Identity token, or `None` for uniform brushes.
    pub fn handle(&self) -> Option<ImageHandle> {
        match &self.brush {
            ImageBrush::Uniform(_) => None,
            ImageBrush::Image { handle, .. } => Some(*handle),
        }
    }

    /// Canonical backing buffer, or `None` for uniform brushes.
    pub fn image(&self) -> Option<&Arc<RgbaBuffer>> {
        match &self.brush {
            ImageBrush::Uniform(_) => None,
            ImageBrush::Image { src, .. } => Some(src),
        }
    }

    /// Fill color, for brushes normalized from a uniform source.
    pub fn uniform_color(&self) -> Option<Color> {
        match &self.brush {
            ImageBrush::Uniform(c) => Some(*c),
            ImageBrush::Image { .. } => None,
        }
    }

    /// Records the brush. Uniform brushes are written as a Color record.
    pub fn add(&self, ops: &mut Ops) {
        match &self.brush {
            ImageBrush::Uniform(c) => ColorOp::new(*c).add(ops),
            ImageBrush::Image { src, handle } => {
                let r = self.rect;
                PayloadWriter::new(ops.write_ref(OpType::Image, src.clone(), *handle))
                    .u32(r.min.x as u32)
                    .u32(r.min.y as u32)
                    .u32(r.max.x as u32)
                    .u32(r.max.y as u32);
            }
        }
    }
}

fn copy_rgba(src: &RgbaBuffer) -> RgbaBuffer {
    let bounds = src.bounds();
    let size = if bounds.is_empty() { IPoint::zero() } else { bounds.size() };
    log::debug!(
        "ImageOp: copying {}x{} bitmap (origin {:?}, stride {}) into packed buffer",
        size.x,
        size.y,
        bounds.min,
        src.stride()
    );
    let mut dst = RgbaBuffer::new(IRect::from_size(size.x, size.y));
    for dy in 0..size.y {
        dst.row_bytes_mut(dy)
            .copy_from_slice(src.row_bytes(bounds.min.y + dy));
    }
    dst
}

fn copy_dynamic(img: &image::DynamicImage) -> RgbaBuffer {
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    log::debug!("ImageOp: converting {w}x{h} {:?} image into packed buffer", img.color());
    let rect = if w == 0 || h == 0 {
        IRect::default()
    } else {
        IRect::from_size(
            i32::try_from(w).unwrap_or(i32::MAX),
            i32::try_from(h).unwrap_or(i32::MAX),
        )
    };
    let stride = rect.width() as usize * 4;
    // `to_rgba8` yields packed rows, so `from_raw` only rejects oversized images.
    RgbaBuffer::from_raw(rect, stride, rgba.into_raw()).unwrap_or_else(|| RgbaBuffer::new(rect))
}
