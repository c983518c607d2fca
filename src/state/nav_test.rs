use super::*;

// =============================================================
// Exact and normalized matches
// =============================================================

#[test]
fn exact_path_matches() {
    assert!(is_active_link("/media", "/media"));
}

#[test]
fn current_trailing_slash_is_ignored() {
    assert!(is_active_link("/media/", "/media"));
}

#[test]
fn href_trailing_slash_is_ignored() {
    assert!(is_active_link("/media", "/media/"));
}

#[test]
fn root_matches_root() {
    assert!(is_active_link("/", "/"));
}

// =============================================================
// Non-matches
// =============================================================

#[test]
fn different_pages_do_not_match() {
    assert!(!is_active_link("/media", "/contact"));
}

#[test]
fn root_does_not_match_a_subpage() {
    assert!(!is_active_link("/", "/media"));
    assert!(!is_active_link("/media", "/"));
}

#[test]
fn path_prefix_is_not_a_match() {
    assert!(!is_active_link("/media-kit", "/media"));
}
