use super::*;

#[test]
fn collapse_whitespace() {
    assert_eq!(collapse("  hot   rod |  rocket launcher "), "hot rod | rocket launcher");
    assert_eq!(collapse(""), "");
}

#[test]
fn strip_first_removes_one_occurrence() {
    assert_eq!(
        strip_first("strange strange part: kills", "strange ").as_deref(),
        Some("strange part: kills")
    );
    assert_eq!(strip_first("black box", "strange "), None);
}

#[test]
fn word_matching_respects_boundaries() {
    assert_eq!(find_word("cooling fan", "cool"), None);
    assert_eq!(find_word("cool fan", "cool"), Some(0));
    assert_eq!(find_word("kit fabricator", "kit"), Some(0));
    assert_eq!(find_word("kitten mittens", "kit"), None);
    assert_eq!(find_word("a cool, cool fan", "cool"), Some(2));
}

#[test]
fn later_occurrences_are_found() {
    // "hot" inside "shot" is skipped; the standalone word is found.
    assert_eq!(find_word("shotgun hot", "hot"), Some(8));
    assert_eq!(word_spans("hot hot rod", "hot"), vec![(0, 3), (4, 7)]);
}

#[test]
fn punctuated_words_need_no_outer_boundary() {
    assert_eq!(find_word("taunt:the skating scorcher", "taunt:"), Some(0));
    assert_eq!(find_word("haunted forever!x", "haunted forever!"), Some(0));
}

#[test]
fn leading_word_only_at_start() {
    assert_eq!(
        strip_leading_word("genuine black box", "genuine").as_deref(),
        Some("black box")
    );
    assert_eq!(strip_leading_word("genuinely black box", "genuine"), None);
    assert_eq!(strip_leading_word("black genuine box", "genuine"), None);
}

#[test]
fn strip_word_and_remove_span() {
    assert_eq!(
        strip_word("team captain strangifier", "strangifier").as_deref(),
        Some("team captain")
    );
    assert_eq!(remove_span("burning flames team captain", 0, 14), "team captain");
}
