//! Preview-card rendering core for notecard.
//!
//! Takes raw, mixed-script social-media text and prepares everything the
//! raster layer needs to draw a preview card:
//! - [`quote`]: rewrite inline `nostr:` references into block-quoted
//!   excerpts, fetching referenced notes under one shared deadline and
//!   degrading to literal text when a fetch fails
//! - paragraph style resolution via [`notecard_fonts`]: dominant script,
//!   direction, language hint, and font face per paragraph
//! - [`compositor`]: centre crop and circular masking for avatar and media
//!   thumbnails
//!
//! The [`RenderContext`] ties the long-lived pieces together; everything
//! else is a one-shot transformation per render call. Retrieval of the
//! primary content record, identifier encoding, and page assembly live in
//! the layers around this crate.

pub mod compositor;
pub mod config;
pub mod context;
pub mod error;
pub mod quote;

pub use compositor::{crop_to_square, decode_image, round_mask};
pub use config::RenderConfig;
pub use context::RenderContext;
pub use error::RenderError;
pub use quote::{
    Block, FetchError, FetchedNote, QUOTE_MARKER, QuoteSource, content_lines, expand_quotes,
};
