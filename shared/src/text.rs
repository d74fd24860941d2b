//! Submission text preprocessing and local validation.

use std::fmt;

/// Minimum trimmed length (in characters) an essay must reach before a
/// submission is allowed to hit the network.
pub const MIN_ESSAY_CHARS: usize = 750;

/// The service requires lowercase usernames; normalize before transmit.
/// Display names elsewhere keep the user's original spelling.
pub fn normalize_username(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Prepare essay text for the analysis endpoint.
///
/// Collapses every run of CR/LF characters to a single space and strips
/// single and double quotes. This is lossy and irreversible: what the
/// service receives is not byte-identical to what the user typed.
/// Idempotent on text already free of newlines and quotes.
pub fn clean_for_analysis(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_break = false;
    for ch in text.chars() {
        match ch {
            '\r' | '\n' => pending_break = true,
            '\'' | '"' => {
                if pending_break {
                    out.push(' ');
                    pending_break = false;
                }
            }
            _ => {
                if pending_break {
                    out.push(' ');
                    pending_break = false;
                }
                out.push(ch);
            }
        }
    }
    if pending_break {
        out.push(' ');
    }
    out
}

/// Trimmed character count, as shown by the dashboard counter.
pub fn trimmed_len(text: &str) -> usize {
    text.trim().chars().count()
}

/// Local rejection reasons for an essay submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionError {
    Empty,
    TooShort,
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::Empty => write!(f, "Escreva sua redação antes de enviar"),
            SubmissionError::TooShort => write!(
                f,
                "A redação deve ter pelo menos {MIN_ESSAY_CHARS} caracteres"
            ),
        }
    }
}

/// Validate a submission before any network call.
///
/// Exactly `MIN_ESSAY_CHARS` trimmed characters is accepted; one less
/// is rejected.
pub fn validate_submission(text: &str) -> Result<(), SubmissionError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SubmissionError::Empty);
    }
    if trimmed.chars().count() < MIN_ESSAY_CHARS {
        return Err(SubmissionError::TooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests;
