use super::*;

// =========================================================
// clean_for_analysis
// =========================================================

#[test]
fn newline_runs_collapse_to_single_space() {
    assert_eq!(clean_for_analysis("a\nb"), "a b");
    assert_eq!(clean_for_analysis("a\n\n\nb"), "a b");
    assert_eq!(clean_for_analysis("a\r\nb"), "a b");
    assert_eq!(clean_for_analysis("a\r\r\n\nb"), "a b");
}

#[test]
fn quotes_are_stripped() {
    assert_eq!(clean_for_analysis("d'agua"), "dagua");
    assert_eq!(clean_for_analysis("\"citação\""), "citação");
}

#[test]
fn transmitted_body_matches_service_expectation() {
    // Newlines collapse first, then quotes are removed; the apostrophe
    // in "world's" disappears but the surrounding letters stay.
    assert_eq!(
        clean_for_analysis("Hello\n\nworld's \"test\""),
        "Hello worlds test"
    );
}

#[test]
fn separate_newline_runs_stay_separate() {
    // A quote between two runs does not merge them into one space.
    assert_eq!(clean_for_analysis("a\n'\nb"), "a  b");
}

#[test]
fn clean_text_passes_through_unchanged() {
    let text = "Uma redação sem quebras de linha nem aspas.";
    assert_eq!(clean_for_analysis(text), text);
}

#[test]
fn cleaning_is_idempotent() {
    let once = clean_for_analysis("linha um\n\nlinha 'dois'\r\nfim\n");
    let twice = clean_for_analysis(&once);
    assert_eq!(once, twice);
}

// =========================================================
// normalize_username
// =========================================================

#[test]
fn username_is_trimmed_and_lowercased() {
    assert_eq!(normalize_username("Maria "), "maria");
    assert_eq!(normalize_username("  JOÃO"), "joão");
    assert_eq!(normalize_username("ana"), "ana");
}

// =========================================================
// validate_submission
// =========================================================

#[test]
fn empty_and_whitespace_only_are_rejected() {
    assert_eq!(validate_submission(""), Err(SubmissionError::Empty));
    assert_eq!(validate_submission("   \n\t "), Err(SubmissionError::Empty));
}

#[test]
fn boundary_is_exactly_min_chars() {
    let short = "a".repeat(MIN_ESSAY_CHARS - 1);
    let exact = "a".repeat(MIN_ESSAY_CHARS);
    assert_eq!(validate_submission(&short), Err(SubmissionError::TooShort));
    assert_eq!(validate_submission(&exact), Ok(()));
}

#[test]
fn surrounding_whitespace_does_not_count() {
    let padded = format!("  {}  \n", "a".repeat(MIN_ESSAY_CHARS - 1));
    assert_eq!(validate_submission(&padded), Err(SubmissionError::TooShort));
}

#[test]
fn counter_uses_trimmed_length() {
    assert_eq!(trimmed_len("  abc \n"), 3);
    assert_eq!(trimmed_len(""), 0);
}
