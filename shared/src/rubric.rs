//! The fixed five-criterion evaluation rubric.
//!
//! The service reports commentary in positional slots (`comentarioC1`
//! through `comentarioC5`), and which slot belongs to which criterion
//! is decided purely by the criterion's position in the rubric. That
//! coupling is spelled out here as an explicit table instead of being
//! reconstructed at runtime from string keys.

/// One of the five fixed ENEM competencies, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriterionKey {
    Norma,
    Repertorio,
    Coerencia,
    Coesao,
    Intervencao,
}

/// Positional slot within a criterion report's comment fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentSlot {
    C1,
    C2,
    C3,
    C4,
    C5,
}

impl CommentSlot {
    /// Zero-based position of this slot.
    pub const fn index(self) -> usize {
        match self {
            CommentSlot::C1 => 0,
            CommentSlot::C2 => 1,
            CommentSlot::C3 => 2,
            CommentSlot::C4 => 3,
            CommentSlot::C5 => 4,
        }
    }
}

/// One rubric row: criterion, its comment slot, and the UI copy.
#[derive(Debug, Clone, Copy)]
pub struct RubricEntry {
    pub key: CriterionKey,
    pub comment_slot: CommentSlot,
    pub title: &'static str,
    pub description: &'static str,
}

/// The rubric in display order. The criterion at position `i` reads its
/// commentary from slot `C{i+1}`; this table is the contract.
pub const RUBRIC: [RubricEntry; 5] = [
    RubricEntry {
        key: CriterionKey::Norma,
        comment_slot: CommentSlot::C1,
        title: "Norma Culta",
        description: "Domínio da modalidade escrita formal",
    },
    RubricEntry {
        key: CriterionKey::Repertorio,
        comment_slot: CommentSlot::C2,
        title: "Repertório",
        description: "Compreensão do tema e uso de repertório",
    },
    RubricEntry {
        key: CriterionKey::Coerencia,
        comment_slot: CommentSlot::C3,
        title: "Coerência",
        description: "Argumentação e defesa de ponto de vista",
    },
    RubricEntry {
        key: CriterionKey::Coesao,
        comment_slot: CommentSlot::C4,
        title: "Coesão",
        description: "Articulação dos argumentos",
    },
    RubricEntry {
        key: CriterionKey::Intervencao,
        comment_slot: CommentSlot::C5,
        title: "Intervenção",
        description: "Proposta de intervenção",
    },
];

#[cfg(test)]
mod tests;
