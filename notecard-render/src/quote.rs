//! Inline quote expansion.
//!
//! Content text can embed `nostr:` references to other notes. Before
//! layout, each line is rewritten into a flat sequence of [`Block`]s where
//! every resolvable reference becomes its own quoted-excerpt block, and
//! every unresolvable one stays in place as literal text. All fetches for
//! one expansion call share a single deadline.

use std::future::Future;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use thiserror::Error;
use tokio::time::Instant;

/// Marker prefixed to every quoted excerpt block.
pub const QUOTE_MARKER: &str = "▌";

/// Fixed protocol prefix carried by every embedded reference.
const REFERENCE_PREFIX: &str = "nostr:";

/// Embedded content references: `nostr:` followed by a bech32 note, nevent,
/// or naddr identifier.
static REFERENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"nostr:(?:note|nevent|naddr)1[a-z0-9]+").expect("reference pattern is valid")
});

/// One unit of renderable text produced by quote expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Original content text, kept as written.
    Plain(String),
    /// Excerpt substituted for an inline reference, prefixed with
    /// [`QUOTE_MARKER`].
    Quoted(String),
}

impl Block {
    /// The block's text, whichever kind it is.
    pub fn text(&self) -> &str {
        match self {
            Block::Plain(text) | Block::Quoted(text) => text,
        }
    }

    pub fn is_quoted(&self) -> bool {
        matches!(self, Block::Quoted(_))
    }

    fn push_str(&mut self, extra: &str) {
        match self {
            Block::Plain(text) | Block::Quoted(text) => text.push_str(extra),
        }
    }
}

/// A referenced content record returned by a [`QuoteSource`].
#[derive(Debug, Clone)]
pub struct FetchedNote {
    /// Raw content text of the referenced record.
    pub content: String,
    /// Where the record was retrieved from, as relay hints for downstream
    /// encoding.
    pub sources: Vec<String>,
}

/// Failure to retrieve one referenced content record.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The reference resolved to nothing on any queried source.
    #[error("referenced content not found")]
    NotFound,
    /// Transport or backend failure.
    #[error("fetch failed: {0}")]
    Backend(String),
}

/// Collaborator that retrieves referenced content records.
pub trait QuoteSource {
    /// Look up one reference, protocol prefix already stripped.
    ///
    /// Called repeatedly with different identifiers during a single
    /// expansion; every call races the shared expansion deadline, so
    /// implementations must be cancellation-safe.
    fn fetch(&self, reference: &str) -> impl Future<Output = Result<FetchedNote, FetchError>> + Send;
}

/// Split raw content into renderable lines, dropping blank ones.
pub fn content_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Rewrite content lines into a flat block sequence, replacing resolvable
/// references with quoted excerpts.
///
/// Lines without references pass through as single [`Block::Plain`]s. For a
/// line with references, the text before the first match becomes a plain
/// block (kept even when empty), each resolved reference becomes a
/// [`Block::Quoted`], and trailing text after the last match becomes a
/// final plain block unless it is blank. A reference whose fetch fails or
/// runs out of budget is appended verbatim to the most recent block instead
/// of producing a new one, so the line still renders.
///
/// `budget` bounds the whole call: one deadline is set up front and every
/// fetch races it.
pub async fn expand_quotes<S: QuoteSource>(
    lines: &[String],
    source: &S,
    budget: Duration,
) -> Vec<Block> {
    let deadline = Instant::now() + budget;
    let mut blocks: Vec<Block> = Vec::with_capacity(lines.len());

    for line in lines {
        let matches: Vec<regex::Match<'_>> = REFERENCE_PATTERN.find_iter(line).collect();
        if matches.is_empty() {
            blocks.push(Block::Plain(line.clone()));
            continue;
        }

        blocks.push(Block::Plain(line[..matches[0].start()].to_string()));
        for found in &matches {
            let reference = &found.as_str()[REFERENCE_PREFIX.len()..];
            match tokio::time::timeout_at(deadline, source.fetch(reference)).await {
                Ok(Ok(note)) => {
                    log::debug!("expanded quote reference {reference}");
                    blocks.push(Block::Quoted(format!("{QUOTE_MARKER} {}", note.content)));
                }
                Ok(Err(err)) => {
                    log::warn!("quote fetch failed for {reference}: {err}");
                    append_to_last(&mut blocks, found.as_str());
                }
                Err(_) => {
                    log::warn!("quote fetch for {reference} ran past the expansion deadline");
                    append_to_last(&mut blocks, found.as_str());
                }
            }
        }

        let trailing = &line[matches[matches.len() - 1].end()..];
        if !trailing.trim().is_empty() {
            blocks.push(Block::Plain(trailing.to_string()));
        }
    }

    blocks
}

fn append_to_last(blocks: &mut Vec<Block>, text: &str) {
    if let Some(last) = blocks.last_mut() {
        last.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_pattern_matches_known_forms() {
        for text in [
            "nostr:note1qqqqq",
            "nostr:nevent1abc0de",
            "nostr:naddr1xyz987",
        ] {
            assert!(REFERENCE_PATTERN.is_match(text), "should match {text:?}");
        }
        assert!(!REFERENCE_PATTERN.is_match("nostr:npub1abcdef"));
        assert!(!REFERENCE_PATTERN.is_match("note1abcdef"));
    }

    #[test]
    fn content_lines_drops_blank_lines() {
        let lines = content_lines("first\n\n   \nsecond\nthird\n");
        assert_eq!(lines, vec!["first", "second", "third"]);
    }

    #[test]
    fn block_text_and_kind() {
        let plain = Block::Plain("a".into());
        let quoted = Block::Quoted("b".into());
        assert_eq!(plain.text(), "a");
        assert_eq!(quoted.text(), "b");
        assert!(!plain.is_quoted());
        assert!(quoted.is_quoted());
    }
}
