//! Typed error types for notecard-fonts.
//!
//! Font loading happens once at startup and a failed load is fatal to the
//! renderer, so these variants carry enough context to point at the face
//! that broke.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while building the font table.
#[derive(Debug, Error)]
pub enum FontError {
    /// A face file could not be read from disk.
    #[error("font file read failed for '{path}': {source}")]
    Read {
        /// Path of the face file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Face bytes were not parseable as a TTF/OTF face.
    #[error("font parse failed for '{name}'")]
    Parse {
        /// Face file path or family name the bytes came from.
        name: String,
    },

    /// No installed face matched the requested family.
    #[error("font family '{family}' not found in the system font database")]
    FamilyNotFound {
        /// Family name that was queried.
        family: String,
    },
}
