//! Face loading from disk and from the system font database.

use std::path::Path;

use crate::error::FontError;
use crate::font_table::types::FaceData;

/// Read and parse one face file.
pub(crate) fn load_face_file(path: &Path) -> Result<FaceData, FontError> {
    let data = std::fs::read(path).map_err(|source| FontError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} bytes from {}", data.len(), path.display());
    FaceData::from_bytes(data, 0).ok_or_else(|| FontError::Parse {
        name: path.display().to_string(),
    })
}

/// Look a family up in the system font database and parse its face.
pub(crate) fn load_face_family(db: &fontdb::Database, family: &str) -> Result<FaceData, FontError> {
    let query = fontdb::Query {
        families: &[fontdb::Family::Name(family)],
        ..fontdb::Query::default()
    };
    let id = db.query(&query).ok_or_else(|| FontError::FamilyNotFound {
        family: family.to_string(),
    })?;
    db.with_face_data(id, |data, face_index| {
        FaceData::from_bytes(data.to_vec(), face_index as usize)
    })
    .flatten()
    .ok_or_else(|| FontError::Parse {
        name: family.to_string(),
    })
}
