//! Canonical script-range source.
//!
//! Block-granularity code point intervals for each supported script, taken
//! from the Unicode block assignments. [`crate::script::ScriptTable`]
//! crosses this source with the supported-script list and flattens it into
//! one sorted table, so intervals here must not overlap across scripts.

use crate::script::Script;

pub(crate) struct SourceRanges {
    pub script: Script,
    /// Inclusive `(start, end)` code point intervals.
    pub blocks: &'static [(u32, u32)],
}

pub(crate) const SCRIPT_RANGE_SOURCE: &[SourceRanges] = &[
    SourceRanges {
        script: Script::Hebrew,
        blocks: &[
            (0x0590, 0x05FF), // Hebrew
            (0xFB1D, 0xFB4F), // Hebrew presentation forms
        ],
    },
    SourceRanges {
        script: Script::Arabic,
        blocks: &[
            (0x0600, 0x06FF), // Arabic
            (0x0750, 0x077F), // Arabic Supplement
            (0x08A0, 0x08FF), // Arabic Extended-A
            (0xFB50, 0xFDFF), // Arabic Presentation Forms-A
            (0xFE70, 0xFEFF), // Arabic Presentation Forms-B
        ],
    },
    SourceRanges {
        script: Script::Devanagari,
        blocks: &[
            (0x0900, 0x097F), // Devanagari
            (0xA8E0, 0xA8FF), // Devanagari Extended
        ],
    },
    SourceRanges {
        script: Script::Bengali,
        blocks: &[(0x0980, 0x09FF)],
    },
    SourceRanges {
        script: Script::Thai,
        blocks: &[(0x0E00, 0x0E7F)],
    },
    SourceRanges {
        script: Script::Hangul,
        blocks: &[
            (0x1100, 0x11FF), // Hangul Jamo
            (0x3130, 0x318F), // Hangul Compatibility Jamo
            (0xA960, 0xA97F), // Hangul Jamo Extended-A
            (0xAC00, 0xD7FF), // Hangul Syllables, Jamo Extended-B
            (0xFFA0, 0xFFDC), // Halfwidth Hangul variants
        ],
    },
    SourceRanges {
        script: Script::Hiragana,
        blocks: &[
            (0x3041, 0x309F),   // Hiragana
            (0x1B001, 0x1B11F), // Hentaigana
            (0x1B150, 0x1B152), // Small Kana Extension, hiragana part
        ],
    },
    SourceRanges {
        script: Script::Katakana,
        blocks: &[
            (0x30A0, 0x30FF),   // Katakana
            (0x31F0, 0x31FF),   // Katakana Phonetic Extensions
            (0xFF66, 0xFF9D),   // Halfwidth Katakana
            (0x1B000, 0x1B000), // Katakana letter archaic E
            (0x1B164, 0x1B167), // Small Kana Extension, katakana part
        ],
    },
    SourceRanges {
        script: Script::Javanese,
        blocks: &[(0xA980, 0xA9DF)],
    },
    SourceRanges {
        script: Script::Han,
        blocks: &[
            (0x2E80, 0x2FDF),   // CJK and Kangxi radicals
            (0x3400, 0x4DBF),   // CJK Unified Ideographs Extension A
            (0x4E00, 0x9FFF),   // CJK Unified Ideographs
            (0xF900, 0xFAFF),   // CJK Compatibility Ideographs
            (0x20000, 0x2A6DF), // CJK Unified Ideographs Extension B
            (0x2A700, 0x2EBEF), // CJK Unified Ideographs Extensions C-F
        ],
    },
];
