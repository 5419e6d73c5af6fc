use sidra_rs::metadata::{fold_accents, normalize_html};

#[test]
fn normalized_1612_matches_recorded_text() {
    let html = crate::common::fixture("desctabapi", "1612", "html");
    let expected = crate::common::read_fixture("expected_normalized_1612.txt");

    let normalized = normalize_html(&html);
    assert_eq!(normalized.trim_end(), expected.trim_end());
}

#[test]
fn normalized_1612_starts_at_table_line_and_has_no_markup() {
    let html = crate::common::fixture("desctabapi", "1612", "html");
    let normalized = normalize_html(&html);

    assert!(normalized.starts_with("/T/ Tabela 1612 - "));
    assert!(!normalized.contains("<!--"));
    assert!(!normalized.contains("abrirJanela"));
    assert!(!normalized.contains('\r'));
    assert!(!normalized.contains('\t'));
    assert!(!normalized.contains('\u{a0}'));
    assert!(!normalized.contains("\n\n"));
    assert!(!normalized.contains("  "));
}

#[test]
fn folding_normalized_text_twice_is_stable() {
    let html = crate::common::fixture("desctabapi", "1612", "html");
    let normalized = normalize_html(&html);
    let once = fold_accents(&normalized).into_owned();
    assert_eq!(fold_accents(&once), once);
    assert!(once.contains("Niveis Territoriais:"));
}
