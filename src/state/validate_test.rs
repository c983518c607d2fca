use super::*;

// =============================================================
// Field requirements
// =============================================================

#[test]
fn empty_message_is_rejected() {
    assert_eq!(
        validate_contact("A", "a@b.com", ""),
        Err(FormError::MissingFields)
    );
}

#[test]
fn whitespace_only_fields_are_rejected() {
    assert_eq!(
        validate_contact("   ", "a@b.com", "hi"),
        Err(FormError::MissingFields)
    );
}

#[test]
fn missing_fields_are_reported_before_a_bad_email() {
    assert_eq!(
        validate_contact("", "not-an-email", "hi"),
        Err(FormError::MissingFields)
    );
}

#[test]
fn bad_email_is_rejected() {
    assert_eq!(
        validate_contact("A", "not-an-email", "hi"),
        Err(FormError::InvalidEmail)
    );
}

#[test]
fn valid_submission_passes_with_fields_trimmed() {
    let msg = validate_contact(" A ", " a@b.com ", " hi ").unwrap();
    assert_eq!(msg.name, "A");
    assert_eq!(msg.email, "a@b.com");
    assert_eq!(msg.message, "hi");
}

#[test]
fn error_messages_match_the_form_copy() {
    assert_eq!(FormError::MissingFields.message(), "Please fill in all fields.");
    assert_eq!(
        FormError::InvalidEmail.message(),
        "Please enter a valid email address."
    );
}

// =============================================================
// Email shape
// =============================================================

#[test]
fn plain_address_is_valid() {
    assert!(is_valid_email("a@b.com"));
}

#[test]
fn missing_at_sign_is_invalid() {
    assert!(!is_valid_email("not-an-email"));
}

#[test]
fn missing_dot_after_the_at_is_invalid() {
    assert!(!is_valid_email("a@bcom"));
}

#[test]
fn dot_needs_text_on_both_sides() {
    assert!(!is_valid_email("a@.com"));
    assert!(!is_valid_email("a@b."));
}

#[test]
fn nothing_before_the_at_is_invalid() {
    assert!(!is_valid_email("@b.com"));
}

#[test]
fn whitespace_inside_the_address_is_invalid() {
    assert!(!is_valid_email("a@b .com"));
}

#[test]
fn address_embedded_in_longer_text_still_counts() {
    assert!(is_valid_email("reach me at a@b.com please"));
}
