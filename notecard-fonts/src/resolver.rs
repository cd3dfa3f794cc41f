//! Per-paragraph style resolution.
//!
//! A paragraph (one non-empty line of content text) resolves to a single
//! script, direction, language hint, and font face. The script is decided
//! by a majority vote over all characters; direction and face follow from
//! the script; the language hint comes from statistical detection over the
//! raw text.

use lingua::{Language, LanguageDetector, LanguageDetectorBuilder};

use crate::font_table::{FaceData, FontTable};
use crate::script::{SCRIPT_COUNT, SUPPORTED_SCRIPTS, Script, ScriptTable};

/// Paragraph-level text flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

/// Everything layout needs to draw one paragraph.
#[derive(Debug)]
pub struct ResolvedStyle<'a> {
    /// BCP-47-ish language tag for shaping hints, e.g. `ja` or `en-us`.
    pub language: String,
    /// Dominant script of the paragraph.
    pub script: Script,
    /// Paragraph text flow.
    pub direction: Direction,
    /// Face at the resolved script's font table slot.
    pub face: &'a FaceData,
}

/// Languages the detector may report. Detection is a shaping hint, so the
/// set stays small: the languages whose scripts the renderer carries faces
/// for.
const CANDIDATE_LANGUAGES: [Language; 8] = [
    Language::Japanese,
    Language::Persian,
    Language::Chinese,
    Language::Thai,
    Language::Hebrew,
    Language::Arabic,
    Language::Bengali,
    Language::Korean,
];

/// Language tag used when detection fails.
const DEFAULT_LANGUAGE: &str = "en-us";

/// Shaping-hint language detection over the fixed candidate set.
///
/// Built once at startup; detection calls are read-only and safe to share
/// across concurrent renders.
pub struct LanguageHint {
    detector: LanguageDetector,
}

impl LanguageHint {
    pub fn new() -> Self {
        let detector = LanguageDetectorBuilder::from_languages(&CANDIDATE_LANGUAGES)
            .with_low_accuracy_mode()
            .build();
        Self { detector }
    }

    /// ISO 639-1 code of the detected language, or `en-us` when detection
    /// comes up empty.
    pub fn detect(&self, text: &str) -> String {
        match self.detector.detect_language_of(text) {
            Some(language) => language.iso_code_639_1().to_string().to_lowercase(),
            None => DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl Default for LanguageHint {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves paragraphs against the script table, font table, and language
/// detector. Immutable after construction.
pub struct TextResolver {
    scripts: ScriptTable,
    fonts: FontTable,
    language: LanguageHint,
}

impl TextResolver {
    pub fn new(fonts: FontTable) -> Self {
        Self {
            scripts: ScriptTable::new(),
            fonts,
            language: LanguageHint::new(),
        }
    }

    /// Resolve one paragraph to its script, direction, language, and face.
    pub fn resolve(&self, paragraph: &str) -> ResolvedStyle<'_> {
        let slot = dominant_script(&self.scripts, paragraph);
        let script = SUPPORTED_SCRIPTS[slot];
        let direction = if script.is_rtl() {
            Direction::RightToLeft
        } else {
            Direction::LeftToRight
        };
        let language = self.language.detect(paragraph);
        log::debug!("paragraph resolved to {script:?}/{direction:?}/{language}");
        ResolvedStyle {
            language,
            script,
            direction,
            face: self.fonts.face(slot),
        }
    }

    pub fn fonts(&self) -> &FontTable {
        &self.fonts
    }

    pub fn scripts(&self) -> &ScriptTable {
        &self.scripts
    }
}

/// Pick the dominant supported-script slot for one paragraph.
///
/// Single forward scan tallying per-script counts. Once more than half the
/// characters have been seen, the first script whose own running count
/// passes that same threshold wins immediately and the scan stops. Only
/// the count of the character just classified is compared against the
/// threshold; a script that crosses it while other characters are being
/// scanned is caught on its next occurrence, or by the final max scan.
/// Without an early majority, the highest count wins and ties go to the
/// lowest slot. An empty paragraph resolves to slot 0.
pub fn dominant_script(table: &ScriptTable, paragraph: &str) -> usize {
    let mut ranking = [0usize; SCRIPT_COUNT];
    let total = paragraph.chars().count();
    let threshold = total / 2;

    for (i, ch) in paragraph.chars().enumerate() {
        let slot = table.classify(ch);
        ranking[slot] += 1;
        if i > threshold && ranking[slot] > threshold {
            return slot;
        }
    }

    let mut best = 0;
    for (slot, &count) in ranking.iter().enumerate() {
        if count > ranking[best] {
            best = slot;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_paragraph_resolves_to_default_slot() {
        let table = ScriptTable::new();
        assert_eq!(dominant_script(&table, ""), 0);
    }

    #[test]
    fn uniform_paragraph_resolves_to_its_script() {
        let table = ScriptTable::new();
        assert_eq!(dominant_script(&table, "שלום"), 3);
        assert_eq!(dominant_script(&table, "สวัสดี"), 4);
        assert_eq!(dominant_script(&table, "中文測試"), 9);
    }

    #[test]
    fn all_unknown_paragraph_resolves_to_default_slot() {
        let table = ScriptTable::new();
        assert_eq!(dominant_script(&table, "hello world"), 0);
    }

    #[test]
    fn majority_script_wins_regardless_of_order() {
        let table = ScriptTable::new();
        // Five Hebrew characters against three ASCII ones, shuffled around.
        for paragraph in ["שלוםע abc", "aשbלcושם ", " שלאbcוםע"] {
            let hebrew = paragraph.chars().filter(|&c| table.classify(c) == 3).count();
            assert!(hebrew * 2 > paragraph.chars().count());
            assert_eq!(dominant_script(&table, paragraph), 3, "in {paragraph:?}");
        }
    }

    #[test]
    fn tie_resolves_to_lowest_slot() {
        let table = ScriptTable::new();
        // Two Hebrew then two Han characters: no early majority, counts tie,
        // Hebrew sits at the lower slot.
        assert_eq!(dominant_script(&table, "אב中文"), 3);
        assert_eq!(dominant_script(&table, "中文אב"), 3);
    }

    #[test]
    fn is_rtl_only_for_arabic() {
        for script in SUPPORTED_SCRIPTS {
            assert_eq!(script.is_rtl(), script == Script::Arabic);
        }
    }

    #[test]
    fn language_hint_defaults_on_empty_input() {
        let hint = LanguageHint::new();
        assert_eq!(hint.detect(""), "en-us");
    }

    #[test]
    fn language_hint_detects_unambiguous_scripts() {
        let hint = LanguageHint::new();
        assert_eq!(hint.detect("こんにちは、ひらがなのぶんしょうです"), "ja");
        assert_eq!(hint.detect("שלום לכולם ברוכים הבאים"), "he");
    }
}
