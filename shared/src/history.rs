//! History list filtering.

use crate::protocol::Essay;

/// Drops the essay currently shown as a fresh result from the history
/// list, so the same submission never appears in two visual forms at
/// once. With no displayed result the list passes through unchanged.
pub fn visible_history(essays: Vec<Essay>, displayed_id: Option<i64>) -> Vec<Essay> {
    essays
        .into_iter()
        .filter(|essay| Some(essay.id) != displayed_id)
        .collect()
}

#[cfg(test)]
mod tests;
