//! Little-endian numeric codec for record payloads.
//!
//! Every multi-byte field in the op stream is a 32-bit value in little-endian
//! order:
//!
//! | Field | Encoding |
//! |-------|----------|
//! | `u32` | 4 bytes, little-endian |
//! | `f32` | IEEE-754 bit pattern as a little-endian `u32` |
//! | color | 4 bytes, `R G B A` |
//!
//! Floats are never normalized: NaN payloads, infinities and `-0.0` pass
//! through unchanged, so decoding is the exact inverse of encoding.

use crate::paint::Color;

/// Encodes a `u32` as 4 little-endian bytes.
///
/// # Example
/// ```
/// use pigment_ops::codec::encode_u32;
/// assert_eq!(encode_u32(0x0403_0201), [1, 2, 3, 4]);
/// ```
#[inline]
pub const fn encode_u32(v: u32) -> [u8; 4] {
    v.to_le_bytes()
}

/// Encodes an `f32` as the little-endian bytes of its bit pattern.
///
/// # Example
/// ```
/// use pigment_ops::codec::encode_f32;
/// assert_eq!(encode_f32(1.0), [0x00, 0x00, 0x80, 0x3F]);
/// ```
#[inline]
pub const fn encode_f32(v: f32) -> [u8; 4] {
    encode_u32(v.to_bits())
}

/// Inverse of [`encode_u32`].
#[inline]
pub const fn decode_u32(b: [u8; 4]) -> u32 {
    u32::from_le_bytes(b)
}

/// Inverse of [`encode_f32`].
#[inline]
pub const fn decode_f32(b: [u8; 4]) -> f32 {
    f32::from_bits(decode_u32(b))
}

/// Sequential writer over a record's payload window.
///
/// The window length comes from the record tag, so a writer that stops short
/// or runs past the end means the stream layout is wrong. Both are fatal:
/// overruns panic on the write, and underruns panic when the writer drops.
pub struct PayloadWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> PayloadWriter<'a> {
    #[inline]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    #[inline]
    fn put(&mut self, bytes: &[u8]) -> &mut Self {
        let end = self.pos + bytes.len();
        assert!(
            end <= self.buf.len(),
            "payload overrun: writing {} bytes at {} into a {}-byte window",
            bytes.len(),
            self.pos,
            self.buf.len()
        );
        self.buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
        self
    }

    #[inline]
    pub fn u8(&mut self, v: u8) -> &mut Self {
        self.put(&[v])
    }

    #[inline]
    pub fn u32(&mut self, v: u32) -> &mut Self {
        self.put(&encode_u32(v))
    }

    #[inline]
    pub fn f32(&mut self, v: f32) -> &mut Self {
        self.put(&encode_f32(v))
    }

    #[inline]
    pub fn color(&mut self, c: Color) -> &mut Self {
        self.put(&[c.r, c.g, c.b, c.a])
    }

    /// Bytes still unwritten.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }
}

impl Drop for PayloadWriter<'_> {
    fn drop(&mut self) {
        // Skip while unwinding so an overrun panic is not turned into an abort.
        if !std::thread::panicking() {
            assert_eq!(
                self.pos,
                self.buf.len(),
                "payload underrun: {} of {} bytes written",
                self.pos,
                self.buf.len()
            );
        }
    }
}

/// Sequential reader over a record's payload. Mirror of [`PayloadWriter`].
///
/// Callers check the payload length against the tag before reading; reads
/// past the end panic.
pub struct PayloadReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> PayloadReader<'a> {
    #[inline]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    #[inline]
    fn take<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0u8; N];
        out.copy_from_slice(&self.buf[self.pos..self.pos + N]);
        self.pos += N;
        out
    }

    #[inline]
    pub fn u8(&mut self) -> u8 {
        self.take::<1>()[0]
    }

    #[inline]
    pub fn u32(&mut self) -> u32 {
        decode_u32(self.take())
    }

    #[inline]
    pub fn f32(&mut self) -> f32 {
        decode_f32(self.take())
    }

    #[inline]
    pub fn color(&mut self) -> Color {
        let [r, g, b, a] = self.take();
        Color::new(r, g, b, a)
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── scalars ───────────────────────────────────────────────────────────

    #[test]
    fn u32_is_little_endian() {
        assert_eq!(encode_u32(0xDEAD_BEEF), [0xEF, 0xBE, 0xAD, 0xDE]);
        assert_eq!(decode_u32([0xEF, 0xBE, 0xAD, 0xDE]), 0xDEAD_BEEF);
    }

    #[test]
    fn f32_special_values_keep_bits() {
        let nan = f32::from_bits(0x7FC0_1234);
        for v in [f32::INFINITY, f32::NEG_INFINITY, -0.0, 0.0, f32::MIN_POSITIVE, nan] {
            assert_eq!(decode_f32(encode_f32(v)).to_bits(), v.to_bits(), "{v:?}");
        }
    }

    #[test]
    fn f32_infinity_bytes() {
        assert_eq!(encode_f32(f32::INFINITY), [0x00, 0x00, 0x80, 0x7F]);
        assert_eq!(encode_f32(f32::NEG_INFINITY), [0x00, 0x00, 0x80, 0xFF]);
    }

    // ── payload writer / reader ───────────────────────────────────────────

    #[test]
    fn writer_fills_window_in_order() {
        let mut buf = [0u8; 13];
        PayloadWriter::new(&mut buf)
            .u8(7)
            .u32(0x0102_0304)
            .f32(1.0)
            .color(Color::new(1, 2, 3, 4));
        assert_eq!(buf, [7, 4, 3, 2, 1, 0, 0, 0x80, 0x3F, 1, 2, 3, 4]);

        let mut r = PayloadReader::new(&buf);
        assert_eq!(r.u8(), 7);
        assert_eq!(r.u32(), 0x0102_0304);
        assert_eq!(r.f32(), 1.0);
        assert_eq!(r.color(), Color::new(1, 2, 3, 4));
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "payload overrun")]
    fn writer_overrun_panics() {
        let mut buf = [0u8; 3];
        PayloadWriter::new(&mut buf).u32(1);
    }

    #[test]
    #[should_panic(expected = "payload underrun")]
    fn writer_underrun_panics_on_drop() {
        let mut buf = [0u8; 8];
        PayloadWriter::new(&mut buf).u32(1);
    }
}
