use crate::coords::{IPoint, IRect};

use super::Color;

/// RGBA8 bitmap with an explicit row stride and pixel-space bounds.
///
/// Layout:
/// - pixel `(x, y)` lives at byte `(y - min.y) * stride + (x - min.x) * 4`
/// - channels are straight-alpha `R G B A`
///
/// Bounds may have a non-zero origin and rows may be padded (`stride >
/// width * 4`), e.g. after [`sub_image`](Self::sub_image). A buffer whose
/// origin is `(0, 0)` and whose rows are unpadded is *packed*; only packed
/// buffers are handed to renderers.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct RgbaBuffer {
    pix: Vec<u8>,
    stride: usize,
    rect: IRect,
}

impl RgbaBuffer {
    /// Zeroed, packed buffer covering `rect`.
    pub fn new(rect: IRect) -> Self {
        let w = rect.width() as usize;
        let h = rect.height() as usize;
        Self {
            pix: vec![0; w * h * 4],
            stride: w * 4,
            rect,
        }
    }

    /// Wraps existing pixel bytes.
    ///
    /// Returns `None` when `stride` is shorter than a row or `pix` is too
    /// small to hold every row of `rect`.
    pub fn from_raw(rect: IRect, stride: usize, pix: Vec<u8>) -> Option<Self> {
        let row = rect.width() as usize * 4;
        let h = rect.height() as usize;
        if stride < row {
            return None;
        }
        let needed = match h {
            0 => 0,
            h => (h - 1).checked_mul(stride)?.checked_add(row)?,
        };
        if pix.len() < needed {
            return None;
        }
        Some(Self { pix, stride, rect })
    }

    /// Packed buffer built from a row-major slice of colors.
    ///
    /// Returns `None` when `pixels.len() != width * height`.
    pub fn from_pixels(width: i32, height: i32, pixels: &[Color]) -> Option<Self> {
        let rect = IRect::from_size(width, height);
        if pixels.len() != rect.width() as usize * rect.height() as usize {
            return None;
        }
        Some(Self {
            pix: bytemuck::cast_slice(pixels).to_vec(),
            stride: rect.width() as usize * 4,
            rect,
        })
    }

    #[inline]
    pub fn bounds(&self) -> IRect {
        self.rect
    }

    #[inline]
    pub fn size(&self) -> IPoint {
        self.rect.size()
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Raw pixel bytes, including any row padding.
    #[inline]
    pub fn pix(&self) -> &[u8] {
        &self.pix
    }

    /// Zero origin and unpadded rows.
    #[inline]
    pub fn is_packed(&self) -> bool {
        self.rect.min == IPoint::zero() && self.stride == self.rect.width() as usize * 4
    }

    #[inline]
    fn offset(&self, x: i32, y: i32) -> usize {
        (y - self.rect.min.y) as usize * self.stride + (x - self.rect.min.x) as usize * 4
    }

    /// Pixel at `(x, y)`; transparent outside the bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Color {
        if !self.rect.contains(IPoint::new(x, y)) {
            return Color::TRANSPARENT;
        }
        let i = self.offset(x, y);
        Color::new(self.pix[i], self.pix[i + 1], self.pix[i + 2], self.pix[i + 3])
    }

    /// Sets the pixel at `(x, y)`; ignored outside the bounds.
    pub fn set_pixel(&mut self, x: i32, y: i32, c: Color) {
        if !self.rect.contains(IPoint::new(x, y)) {
            return;
        }
        let i = self.offset(x, y);
        self.pix[i..i + 4].copy_from_slice(&[c.r, c.g, c.b, c.a]);
    }

    /// Visible bytes of row `y`, padding excluded. `y` must be in bounds.
    pub(crate) fn row_bytes(&self, y: i32) -> &[u8] {
        let start = self.offset(self.rect.min.x, y);
        &self.pix[start..start + self.rect.width() as usize * 4]
    }

    pub(crate) fn row_bytes_mut(&mut self, y: i32) -> &mut [u8] {
        let start = self.offset(self.rect.min.x, y);
        let len = self.rect.width() as usize * 4;
        &mut self.pix[start..start + len]
    }

    /// Pixels of row `y`, or an empty slice outside the bounds.
    pub fn row(&self, y: i32) -> &[Color] {
        if self.rect.is_empty() || y < self.rect.min.y || y >= self.rect.max.y {
            return &[];
        }
        bytemuck::cast_slice(self.row_bytes(y))
    }

    /// Copy of the part of `self` inside `r`.
    ///
    /// The result keeps `r`'s coordinates and this buffer's stride, so it is
    /// generally not packed.
    pub fn sub_image(&self, r: IRect) -> RgbaBuffer {
        let r = r.intersect(self.rect);
        if r.is_empty() {
            return RgbaBuffer {
                pix: Vec::new(),
                stride: self.stride,
                rect: r,
            };
        }
        let start = self.offset(r.min.x, r.min.y);
        let end = self.offset(r.max.x - 1, r.max.y - 1) + 4;
        RgbaBuffer {
            pix: self.pix[start..end].to_vec(),
            stride: self.stride,
            rect: r,
        }
    }
}
