use super::*;
use crate::protocol::{CriteriaSet, CriterionSummary};

fn essay(id: i64) -> Essay {
    let summary = CriterionSummary {
        nota: 120.0,
        obs: "ok".to_string(),
        stars: 3,
    };
    Essay {
        id,
        created_at: "2024-05-01T10:00:00".to_string(),
        input_text: "texto".to_string(),
        nota_total: 600.0,
        stars: 3,
        criterios: CriteriaSet {
            norma: summary.clone(),
            repertorio: summary.clone(),
            coerencia: summary.clone(),
            coesao: summary.clone(),
            intervencao: summary,
        },
    }
}

#[test]
fn displayed_essay_is_dropped_others_kept() {
    let list = vec![essay(1), essay(2), essay(3)];
    let visible = visible_history(list, Some(2));
    let ids: Vec<i64> = visible.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn no_displayed_essay_keeps_everything() {
    let list = vec![essay(1), essay(2)];
    assert_eq!(visible_history(list, None).len(), 2);
}

#[test]
fn displayed_id_absent_from_list_keeps_everything() {
    let list = vec![essay(1), essay(2)];
    assert_eq!(visible_history(list, Some(99)).len(), 2);
}
