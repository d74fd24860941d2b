use super::*;
use crate::rubric::RUBRIC;

fn sample_analysis_json() -> &'static str {
    r#"{
        "id": 42,
        "created_at": "2025-03-08T14:30:00Z",
        "nota_total": 820,
        "stars": 4,
        "criterios": {
            "norma": { "nota": 160, "stars": 4, "comentarioC1": "Bom domínio da norma culta." },
            "repertorio": { "nota": 180, "stars": 5, "comentarioC2": "Repertório bem articulado." },
            "coerencia": { "nota": 160, "stars": 4, "comentarioC3": "Argumentação consistente." },
            "coesao": { "nota": 160, "stars": 4, "comentarioC4": "Boa articulação entre parágrafos." },
            "intervencao": { "nota": 160, "stars": 4, "comentarioC5": "Proposta completa.", "starsC5": 4 }
        }
    }"#
}

#[test]
fn analysis_response_parses_service_json() {
    let analysis: AnalysisResponse = serde_json::from_str(sample_analysis_json()).unwrap();
    assert_eq!(analysis.id, 42);
    assert_eq!(analysis.nota_total, 820.0);
    assert_eq!(analysis.stars, 4);
    assert_eq!(analysis.criterios.norma.nota, 160.0);
    assert_eq!(analysis.criterios.intervencao.stars_c5, Some(4));
}

#[test]
fn each_criterion_reads_the_comment_slot_at_its_position() {
    let analysis: AnalysisResponse = serde_json::from_str(sample_analysis_json()).unwrap();
    let expected = [
        "Bom domínio da norma culta.",
        "Repertório bem articulado.",
        "Argumentação consistente.",
        "Boa articulação entre parágrafos.",
        "Proposta completa.",
    ];
    for (entry, expected) in RUBRIC.iter().zip(expected) {
        let report = analysis.criterios.get(entry.key);
        assert_eq!(report.comment(entry.comment_slot), Some(expected));
    }
}

#[test]
fn missing_comment_slots_read_as_none() {
    let report: CriterionReport =
        serde_json::from_str(r#"{ "nota": 120, "stars": 3 }"#).unwrap();
    assert_eq!(report.comment(CommentSlot::C1), None);
    assert_eq!(report.comment(CommentSlot::C5), None);
}

#[test]
fn essay_list_parses_service_json() {
    let json = r#"[{
        "id": 7,
        "created_at": "2025-02-01T09:00:00Z",
        "input_text": "Texto enviado anteriormente.",
        "nota_total": 640,
        "stars": 3,
        "criterios": {
            "norma": { "nota": 120, "obs": "ok", "stars": 3 },
            "repertorio": { "nota": 140, "obs": "bom", "stars": 4 },
            "coerencia": { "nota": 120, "obs": "ok", "stars": 3 },
            "coesao": { "nota": 140, "obs": "bom", "stars": 4 },
            "intervencao": { "nota": 120, "obs": "ok", "stars": 3 }
        }
    }]"#;
    let essays: Vec<Essay> = serde_json::from_str(json).unwrap();
    assert_eq!(essays.len(), 1);
    assert_eq!(essays[0].id, 7);
    assert_eq!(essays[0].criterios.repertorio.obs, "bom");
}

#[test]
fn analysis_request_serializes_as_text_field() {
    let body = serde_json::to_string(&AnalysisRequest {
        text: "Hello worlds test".to_string(),
    })
    .unwrap();
    assert_eq!(body, r#"{"text":"Hello worlds test"}"#);
}

#[test]
fn register_request_serializes_as_json_object() {
    let body = serde_json::to_string(&RegisterRequest {
        username: "maria".to_string(),
        password: "secret1".to_string(),
    })
    .unwrap();
    assert_eq!(body, r#"{"username":"maria","password":"secret1"}"#);
}
