use std::sync::Arc;

use crate::paint::{ImageHandle, RgbaBuffer};

use super::OpType;

/// Out-of-band payload attached to an Image record.
///
/// Pixel data never enters the byte stream. A replayer that meets an Image
/// record at `offset` looks the attachment up in the side table instead and
/// may key its texture cache on `handle`.
#[derive(Debug, Clone)]
pub struct ImageRef {
    /// Byte offset of the owning record's tag.
    pub offset: usize,
    pub image: Arc<RgbaBuffer>,
    pub handle: ImageHandle,
}

/// Append-only operation buffer for one frame.
///
/// Records are appended with [`write`](Self::write) or
/// [`write_ref`](Self::write_ref); previously written bytes are never read
/// back through this type. Decoding goes through [`Reader`](super::Reader).
///
/// Performance characteristics:
/// - appends are amortized O(1)
/// - [`reset`](Self::reset) keeps allocated capacity for reuse across frames
#[derive(Debug, Default)]
pub struct Ops {
    data: Vec<u8>,
    refs: Vec<ImageRef>,
    pub(super) depth: usize,
}

impl Ops {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all records and attachments. Keeps allocated capacity.
    ///
    /// # Panics
    ///
    /// Panics if a scope is still open; its guard would otherwise close it
    /// on the emptied buffer.
    pub fn reset(&mut self) {
        assert_eq!(self.depth, 0, "ops: reset with {} open scope(s)", self.depth);
        log::trace!(
            "ops: reset ({} bytes, {} image refs)",
            self.data.len(),
            self.refs.len()
        );
        self.data.clear();
        self.refs.clear();
        self.depth = 0;
    }

    /// Encoded byte stream.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Attachment side table, ordered by record offset.
    #[inline]
    pub fn refs(&self) -> &[ImageRef] {
        &self.refs
    }

    /// Attachment owned by the record whose tag sits at `offset`.
    pub fn image_ref_at(&self, offset: usize) -> Option<&ImageRef> {
        self.refs
            .binary_search_by_key(&offset, |r| r.offset)
            .ok()
            .map(|i| &self.refs[i])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of currently open scopes.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Appends a record of type `ty` and returns its payload window.
    ///
    /// The record length comes from `ty`; the tag is already written and the
    /// returned slice is exactly `ty.size() - 1` bytes long.
    ///
    /// # Panics
    /// Panics if `ty` carries an attachment; use [`write_ref`](Self::write_ref).
    pub fn write(&mut self, ty: OpType) -> &mut [u8] {
        assert!(!ty.has_ref(), "{ty:?} records require an attachment");
        let start = self.append(ty);
        &mut self.data[start + 1..]
    }

    /// Appends a record of type `ty` with an attachment keyed by its offset.
    ///
    /// # Panics
    /// Panics if `ty` does not carry an attachment.
    pub fn write_ref(&mut self, ty: OpType, image: Arc<RgbaBuffer>, handle: ImageHandle) -> &mut [u8] {
        assert!(ty.has_ref(), "{ty:?} records take no attachment");
        let start = self.append(ty);
        self.refs.push(ImageRef {
            offset: start,
            image,
            handle,
        });
        &mut self.data[start + 1..]
    }

    fn append(&mut self, ty: OpType) -> usize {
        let start = self.data.len();
        self.data.resize(start + ty.size(), 0);
        self.data[start] = ty as u8;
        start
    }
}
