//! The per-script font table.
//!
//! Eleven faces, one per supported-script slot, plus one emoji face used as
//! an override by the glyph layer. Loaded once at startup; a missing or
//! unparseable face is fatal then, never per render. The table is read-only
//! afterwards and safe to share across concurrent render calls.

mod loader;
mod types;

use std::path::Path;

use crate::error::FontError;
use crate::script::SCRIPT_COUNT;

pub use types::FaceData;

/// Font faces indexed by supported-script slot.
///
/// Slot order follows [`crate::script::SUPPORTED_SCRIPTS`]: slot 0 is the
/// default (Latin) face that also serves unknown scripts, and the Hiragana
/// and Katakana slots share one JP face.
pub struct FontTable {
    faces: [FaceData; SCRIPT_COUNT],
    emoji: FaceData,
}

impl FontTable {
    /// Load the bundled face files from `dir`.
    pub fn load_from_dir(dir: &Path) -> Result<Self, FontError> {
        let jp = loader::load_face_file(&dir.join("NotoSansJP.ttf"))?;
        let faces = [
            loader::load_face_file(&dir.join("NotoSans.ttf"))?,
            jp.clone(),
            jp, // Katakana shares the JP face
            loader::load_face_file(&dir.join("NotoSansHebrew.ttf"))?,
            loader::load_face_file(&dir.join("NotoSansThai.ttf"))?,
            loader::load_face_file(&dir.join("NotoSansArabic.ttf"))?,
            loader::load_face_file(&dir.join("NotoSansDevanagari.ttf"))?,
            loader::load_face_file(&dir.join("NotoSansBengali.ttf"))?,
            loader::load_face_file(&dir.join("NotoSansJavanese.ttf"))?,
            loader::load_face_file(&dir.join("NotoSansSC.ttf"))?,
            loader::load_face_file(&dir.join("NotoSansKR.ttf"))?,
        ];
        let emoji = loader::load_face_file(&dir.join("NotoEmoji.ttf"))?;
        log::info!(
            "loaded {} script faces and emoji face from {}",
            SCRIPT_COUNT,
            dir.display()
        );
        Ok(Self { faces, emoji })
    }

    /// Load the same face set from system-installed Noto families.
    ///
    /// For hosts that carry the Noto families in their font registry
    /// instead of a bundled directory.
    pub fn load_from_system() -> Result<Self, FontError> {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        log::info!("system font database holds {} faces", db.len());

        let jp = loader::load_face_family(&db, "Noto Sans JP")?;
        let faces = [
            loader::load_face_family(&db, "Noto Sans")?,
            jp.clone(),
            jp, // Katakana shares the JP face
            loader::load_face_family(&db, "Noto Sans Hebrew")?,
            loader::load_face_family(&db, "Noto Sans Thai")?,
            loader::load_face_family(&db, "Noto Sans Arabic")?,
            loader::load_face_family(&db, "Noto Sans Devanagari")?,
            loader::load_face_family(&db, "Noto Sans Bengali")?,
            loader::load_face_family(&db, "Noto Sans Javanese")?,
            loader::load_face_family(&db, "Noto Sans SC")?,
            loader::load_face_family(&db, "Noto Sans KR")?,
        ];
        let emoji = loader::load_face_family(&db, "Noto Emoji")?;
        Ok(Self { faces, emoji })
    }

    /// Build a table from already-parsed faces.
    pub fn from_faces(faces: [FaceData; SCRIPT_COUNT], emoji: FaceData) -> Self {
        Self { faces, emoji }
    }

    /// Face at a supported-script slot.
    ///
    /// # Panics
    /// Panics if `slot >= SCRIPT_COUNT`; classification never produces such
    /// a slot.
    pub fn face(&self, slot: usize) -> &FaceData {
        &self.faces[slot]
    }

    /// The emoji face used as an override by the glyph layer.
    pub fn emoji(&self) -> &FaceData {
        &self.emoji
    }
}

impl std::fmt::Debug for FontTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontTable")
            .field("faces", &self.faces.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_is_a_read_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = FontTable::load_from_dir(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, FontError::Read { .. }), "got {err:?}");
    }

    #[test]
    fn unparseable_face_file_is_a_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        for name in [
            "NotoSans.ttf",
            "NotoSansJP.ttf",
            "NotoSansHebrew.ttf",
            "NotoSansThai.ttf",
            "NotoSansArabic.ttf",
            "NotoSansDevanagari.ttf",
            "NotoSansBengali.ttf",
            "NotoSansJavanese.ttf",
            "NotoSansSC.ttf",
            "NotoSansKR.ttf",
            "NotoEmoji.ttf",
        ] {
            std::fs::write(dir.path().join(name), b"not a font").expect("write fixture");
        }
        let err = FontTable::load_from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, FontError::Parse { .. }), "got {err:?}");
    }
}
