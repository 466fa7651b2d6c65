use bytemuck::{Pod, Zeroable};

/// Straight-alpha RGBA color with 8-bit channels.
///
/// This is also the in-memory pixel layout of [`RgbaBuffer`](super::RgbaBuffer),
/// so pixel rows can be viewed as `&[Color]` without copying.
///
/// Channels are carried as-is into the op stream. Premultiplication, if the
/// renderer wants it, happens at replay time.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color (alpha = 255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Unpacks `0xRRGGBBAA`.
    #[inline]
    pub const fn from_packed(rgba: u32) -> Self {
        let [r, g, b, a] = rgba.to_be_bytes();
        Self { r, g, b, a }
    }

    /// Packs into `0xRRGGBBAA`.
    #[inline]
    pub const fn to_packed(self) -> u32 {
        u32::from_be_bytes([self.r, self.g, self.b, self.a])
    }
}

impl From<image::Rgba<u8>> for Color {
    #[inline]
    fn from(p: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = p.0;
        Self { r, g, b, a }
    }
}

impl From<Color> for image::Rgba<u8> {
    #[inline]
    fn from(c: Color) -> Self {
        image::Rgba([c.r, c.g, c.b, c.a])
    }
}
