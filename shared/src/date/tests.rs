use super::*;

#[test]
fn rfc3339_renders_as_pt_br() {
    assert_eq!(format_created_at("2025-03-08T14:30:00Z"), "08/03/2025 14:30");
}

#[test]
fn naive_stamp_renders_as_pt_br() {
    assert_eq!(
        format_created_at("2025-12-01T09:05:30.123456"),
        "01/12/2025 09:05"
    );
}

#[test]
fn unparseable_input_is_shown_verbatim() {
    assert_eq!(format_created_at("ontem"), "ontem");
    assert_eq!(format_created_at(""), "");
}
