//! Integration tests for script classification and paragraph resolution.

use notecard_fonts::{SCRIPT_COUNT, SUPPORTED_SCRIPTS, Script, ScriptTable, dominant_script};

#[test]
fn supported_script_list_shape() {
    assert_eq!(SUPPORTED_SCRIPTS.len(), SCRIPT_COUNT);
    assert_eq!(SUPPORTED_SCRIPTS[0], Script::Unknown);
}

#[test]
fn registered_ranges_classify_to_their_own_slot() {
    let table = ScriptTable::new();
    for range in table.ranges() {
        for cp in [range.start, (range.start + range.end) / 2, range.end] {
            let Some(ch) = char::from_u32(cp) else {
                continue;
            };
            assert_eq!(
                table.classify(ch),
                range.position,
                "U+{cp:04X} should classify as {:?}",
                range.script
            );
        }
    }
}

#[test]
fn characters_outside_all_ranges_classify_to_zero() {
    let table = ScriptTable::new();
    for ch in ['a', 'Z', '!', 'ß', 'ж', '\u{1F680}'] {
        assert_eq!(table.classify(ch), 0);
    }
}

#[test]
fn single_script_paragraphs_resolve_to_that_script() {
    let table = ScriptTable::new();
    for (paragraph, slot) in [
        ("ひらがなです", 1),
        ("カタカナ", 2),
        ("עברית", 3),
        ("ภาษาไทย", 4),
        ("العربية", 5),
        ("देवनागरी", 6),
        ("বাংলা", 7),
        ("漢字漢字", 9),
        ("한국어입니다", 10),
    ] {
        assert_eq!(dominant_script(&table, paragraph), slot, "for {paragraph:?}");
    }
}

#[test]
fn majority_resolution_is_order_independent() {
    let table = ScriptTable::new();
    let forward = "中中中中中abc";
    let reversed: String = forward.chars().rev().collect();
    let interleaved = "a中b中c中中中";
    let expected = dominant_script(&table, forward);
    assert_eq!(expected, 9);
    assert_eq!(dominant_script(&table, &reversed), expected);
    assert_eq!(dominant_script(&table, interleaved), expected);
}

#[test]
fn empty_paragraph_resolves_to_default() {
    let table = ScriptTable::new();
    assert_eq!(dominant_script(&table, ""), 0);
}
