use super::*;

#[test]
fn rubric_covers_all_five_criteria_exactly_once() {
    let keys: Vec<CriterionKey> = RUBRIC.iter().map(|entry| entry.key).collect();
    assert_eq!(
        keys,
        vec![
            CriterionKey::Norma,
            CriterionKey::Repertorio,
            CriterionKey::Coerencia,
            CriterionKey::Coesao,
            CriterionKey::Intervencao,
        ]
    );
}

#[test]
fn comment_slot_follows_list_position() {
    // Criterion at position i reads comentarioC{i+1}.
    for (i, entry) in RUBRIC.iter().enumerate() {
        assert_eq!(entry.comment_slot.index(), i);
    }
}
