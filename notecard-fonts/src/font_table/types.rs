//! Owned font face data.

use std::sync::Arc;

use swash::FontRef;

/// One loaded font face: the raw bytes plus a parsed handle into them.
///
/// The handle stays valid for as long as this struct lives because the
/// bytes are owned alongside it and never reallocated.
#[derive(Clone)]
pub struct FaceData {
    data: Arc<Vec<u8>>,
    font_ref: FontRef<'static>,
}

impl FaceData {
    /// Parse a face out of raw TTF/OTF/TTC bytes.
    ///
    /// `face_index` selects the face within a collection file; single-face
    /// fonts use 0. Returns `None` when the bytes are not a usable face.
    pub fn from_bytes(data: Vec<u8>, face_index: usize) -> Option<Self> {
        let data = Arc::new(data);

        // SAFETY: the Arc'd buffer is never mutated or dropped while this
        // struct is alive, and the FontRef is dropped together with it, so
        // extending the borrow to 'static cannot outlive the bytes.
        let font_ref = unsafe {
            let bytes: &'static [u8] = std::mem::transmute::<&[u8], &'static [u8]>(data.as_slice());
            FontRef::from_index(bytes, face_index)?
        };

        Some(Self { data, font_ref })
    }

    /// Parsed handle for glyph and metrics queries.
    pub fn font_ref(&self) -> &FontRef<'static> {
        &self.font_ref
    }

    /// Raw face bytes, for shaping layers that want to re-parse.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl std::fmt::Debug for FaceData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FaceData")
            .field("data_len", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_bytes() {
        assert!(FaceData::from_bytes(Vec::new(), 0).is_none());
    }

    #[test]
    fn rejects_garbage_bytes() {
        assert!(FaceData::from_bytes(vec![0u8; 256], 0).is_none());
    }
}
