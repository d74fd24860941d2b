//! Shared domain layer for the Aurora essay mentor.
//!
//! Everything here is plain Rust with no browser dependency, so the
//! session invariants, text preprocessing and protocol shapes can be
//! tested natively while the WASM frontend stays thin glue.

pub mod date;
pub mod history;
pub mod protocol;
pub mod rubric;
pub mod session;
pub mod text;

pub use protocol::{
    AnalysisRequest, AnalysisResponse, CriteriaSet, CriterionReport, CriterionSummary, Essay,
    LoginResponse, RegisterRequest,
};
pub use rubric::{CommentSlot, CriterionKey, RUBRIC, RubricEntry};
pub use session::Session;
