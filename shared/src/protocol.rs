//! Wire shapes of the Aurora scoring service.
//!
//! Field names match the service JSON exactly (Portuguese included);
//! only the positional `comentarioCn` / `starsCn` fields need renames.

use serde::{Deserialize, Serialize};

use crate::rubric::{CommentSlot, CriterionKey};

// =========================================================
// Request bodies
// =========================================================

/// JSON body of `POST /register`.
///
/// Note: `POST /login` does NOT use this shape on the wire; it sends
/// the same two fields form-urlencoded. That asymmetry is part of the
/// service contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// JSON body of `POST /analysis/text`. The text has already been run
/// through [`crate::text::clean_for_analysis`] by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
}

// =========================================================
// Response bodies
// =========================================================

/// `POST /login` success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    /// Expiry marker, opaque to this client.
    pub exp: String,
}

/// The five per-criterion blocks of any scored essay, in service field
/// order. `T` is [`CriterionReport`] for a fresh analysis and
/// [`CriterionSummary`] for list items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriteriaSet<T> {
    pub norma: T,
    pub repertorio: T,
    pub coerencia: T,
    pub coesao: T,
    pub intervencao: T,
}

impl<T> CriteriaSet<T> {
    pub fn get(&self, key: CriterionKey) -> &T {
        match key {
            CriterionKey::Norma => &self.norma,
            CriterionKey::Repertorio => &self.repertorio,
            CriterionKey::Coerencia => &self.coerencia,
            CriterionKey::Coesao => &self.coesao,
            CriterionKey::Intervencao => &self.intervencao,
        }
    }
}

/// Per-criterion block of a fresh analysis.
///
/// Commentary and star breakdowns arrive in positional slots; which
/// slot is meaningful for a given criterion comes from
/// [`crate::rubric::RUBRIC`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionReport {
    pub nota: f64,
    pub stars: u8,
    #[serde(rename = "comentarioC1", skip_serializing_if = "Option::is_none")]
    pub comentario_c1: Option<String>,
    #[serde(rename = "comentarioC2", skip_serializing_if = "Option::is_none")]
    pub comentario_c2: Option<String>,
    #[serde(rename = "comentarioC3", skip_serializing_if = "Option::is_none")]
    pub comentario_c3: Option<String>,
    #[serde(rename = "comentarioC4", skip_serializing_if = "Option::is_none")]
    pub comentario_c4: Option<String>,
    #[serde(rename = "comentarioC5", skip_serializing_if = "Option::is_none")]
    pub comentario_c5: Option<String>,
    #[serde(rename = "starsC1", skip_serializing_if = "Option::is_none")]
    pub stars_c1: Option<u8>,
    #[serde(rename = "starsC2", skip_serializing_if = "Option::is_none")]
    pub stars_c2: Option<u8>,
    #[serde(rename = "starsC3", skip_serializing_if = "Option::is_none")]
    pub stars_c3: Option<u8>,
    #[serde(rename = "starsC4", skip_serializing_if = "Option::is_none")]
    pub stars_c4: Option<u8>,
    #[serde(rename = "starsC5", skip_serializing_if = "Option::is_none")]
    pub stars_c5: Option<u8>,
}

impl CriterionReport {
    /// Commentary stored in the given positional slot, if present.
    pub fn comment(&self, slot: CommentSlot) -> Option<&str> {
        match slot {
            CommentSlot::C1 => self.comentario_c1.as_deref(),
            CommentSlot::C2 => self.comentario_c2.as_deref(),
            CommentSlot::C3 => self.comentario_c3.as_deref(),
            CommentSlot::C4 => self.comentario_c4.as_deref(),
            CommentSlot::C5 => self.comentario_c5.as_deref(),
        }
    }
}

/// `POST /analysis/text` success body. Immutable once received; held
/// only in view state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub id: i64,
    pub created_at: String,
    pub nota_total: f64,
    pub stars: u8,
    pub criterios: CriteriaSet<CriterionReport>,
}

/// Per-criterion block of a stored essay in the user's list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionSummary {
    pub nota: f64,
    pub obs: String,
    pub stars: u8,
}

/// One item of the `GET /users/essays` response, in service order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Essay {
    pub id: i64,
    pub created_at: String,
    pub input_text: String,
    pub nota_total: f64,
    pub stars: u8,
    pub criterios: CriteriaSet<CriterionSummary>,
}

#[cfg(test)]
mod tests;
