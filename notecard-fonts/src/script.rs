//! Supported scripts and per-character classification.
//!
//! The preview renderer ships one font face per supported writing system and
//! picks a face per paragraph. Classification maps a single character to a
//! slot in the supported-script list via binary search over a sorted table
//! of code point ranges.

use crate::ranges::SCRIPT_RANGE_SOURCE;

/// Number of supported scripts, and font table slots.
pub const SCRIPT_COUNT: usize = 11;

/// Writing systems the renderer can pick a dedicated face for.
///
/// The variant order matches the font table slot order. `Unknown` occupies
/// slot 0 and doubles as the fallback for characters outside every
/// registered range; it renders with the default (Latin) face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Unknown,
    Hiragana,
    Katakana,
    Hebrew,
    Thai,
    Arabic,
    Devanagari,
    Bengali,
    Javanese,
    Han,
    Hangul,
}

/// Supported scripts in font-table slot order.
pub const SUPPORTED_SCRIPTS: [Script; SCRIPT_COUNT] = [
    Script::Unknown,
    Script::Hiragana,
    Script::Katakana,
    Script::Hebrew,
    Script::Thai,
    Script::Arabic,
    Script::Devanagari,
    Script::Bengali,
    Script::Javanese,
    Script::Han,
    Script::Hangul,
];

impl Script {
    /// Paragraphs resolved to Arabic flow right-to-left; every other
    /// supported script is laid out left-to-right.
    pub fn is_rtl(self) -> bool {
        matches!(self, Script::Arabic)
    }
}

/// One contiguous code point interval belonging to a supported script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptRange {
    /// First code point of the interval (inclusive).
    pub start: u32,
    /// Last code point of the interval (inclusive).
    pub end: u32,
    /// Script the interval belongs to.
    pub script: Script,
    /// Slot of `script` in [`SUPPORTED_SCRIPTS`] and the font table.
    pub position: usize,
}

/// Sorted classification table crossing [`SUPPORTED_SCRIPTS`] with the
/// canonical range source.
///
/// Built once at startup and shared read-only afterwards. Entries for all
/// scripts are sorted together by `start`; [`ScriptTable::classify`] relies
/// on that global order and on the source ranges being disjoint, neither of
/// which is re-validated per call.
#[derive(Debug, Clone)]
pub struct ScriptTable {
    ranges: Vec<ScriptRange>,
}

impl ScriptTable {
    pub fn new() -> Self {
        let mut ranges = Vec::new();
        for (position, &script) in SUPPORTED_SCRIPTS.iter().enumerate() {
            for source in SCRIPT_RANGE_SOURCE {
                if source.script != script {
                    continue;
                }
                for &(start, end) in source.blocks {
                    ranges.push(ScriptRange {
                        start,
                        end,
                        script,
                        position,
                    });
                }
            }
        }
        ranges.sort_by_key(|range| range.start);
        Self { ranges }
    }

    /// Map a character to its supported-script slot.
    ///
    /// Characters outside every registered range classify as slot 0
    /// (Unknown), which the font table maps to the default face.
    pub fn classify(&self, ch: char) -> usize {
        let cp = ch as u32;
        let mut lo = 0;
        let mut hi = self.ranges.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let entry = &self.ranges[mid];
            if cp < entry.start {
                hi = mid;
            } else if entry.end < cp {
                lo = mid + 1;
            } else {
                return entry.position;
            }
        }
        0
    }

    /// Registered ranges, sorted ascending by start code point.
    pub fn ranges(&self) -> &[ScriptRange] {
        &self.ranges
    }
}

impl Default for ScriptTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_disjoint() {
        let table = ScriptTable::new();
        let ranges = table.ranges();
        assert!(!ranges.is_empty());
        for range in ranges {
            assert!(range.start <= range.end);
            assert!(range.position < SCRIPT_COUNT);
            assert_eq!(SUPPORTED_SCRIPTS[range.position], range.script);
        }
        for pair in ranges.windows(2) {
            assert!(
                pair[0].end < pair[1].start,
                "ranges overlap or are unsorted: {:?} / {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn classify_maps_each_script_to_its_slot() {
        let table = ScriptTable::new();
        for (ch, slot) in [
            ('あ', 1),  // Hiragana
            ('カ', 2),  // Katakana
            ('א', 3),   // Hebrew
            ('ไ', 4),   // Thai
            ('ا', 5),   // Arabic
            ('ह', 6),   // Devanagari
            ('ব', 7),   // Bengali
            ('ꦏ', 8),  // Javanese
            ('中', 9),  // Han
            ('한', 10), // Hangul
        ] {
            assert_eq!(table.classify(ch), slot, "wrong slot for {ch:?}");
        }
    }

    #[test]
    fn classify_defaults_to_slot_zero() {
        let table = ScriptTable::new();
        for ch in ['A', 'z', '1', ' ', 'é', 'Ω', 'д', '😀'] {
            assert_eq!(table.classify(ch), 0, "expected default slot for {ch:?}");
        }
    }

    #[test]
    fn classify_handles_range_boundaries() {
        let table = ScriptTable::new();
        // Hebrew block runs up to U+05FF; Arabic starts at U+0600.
        assert_eq!(table.classify('\u{0590}'), 3);
        assert_eq!(table.classify('\u{05FF}'), 3);
        assert_eq!(table.classify('\u{0600}'), 5);
        assert_eq!(table.classify('\u{06FF}'), 5);
    }

    #[test]
    fn classify_covers_supplementary_plane_han() {
        let table = ScriptTable::new();
        assert_eq!(table.classify('\u{20021}'), 9);
    }
}
