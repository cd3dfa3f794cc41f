//! Script classification and font selection for notecard preview rendering.
//!
//! This crate decides, for each paragraph of content text, which writing
//! system dominates it, which direction it flows, which language it is
//! likely written in, and which loaded font face should draw it:
//! - per-character script classification over a sorted code point range table
//! - majority-vote paragraph resolution with an early exit for dominated text
//! - a fixed table of eleven script faces plus an emoji face, loaded once at
//!   startup and shared read-only across renders
//!
//! Glyph placement itself lives elsewhere; this crate only hands the layout
//! layer a [`ResolvedStyle`] per paragraph.

pub mod error;
pub mod font_table;
mod ranges;
pub mod resolver;
pub mod script;

pub use error::FontError;
pub use font_table::{FaceData, FontTable};
pub use resolver::{Direction, LanguageHint, ResolvedStyle, TextResolver, dominant_script};
pub use script::{SCRIPT_COUNT, SUPPORTED_SCRIPTS, Script, ScriptRange, ScriptTable};
