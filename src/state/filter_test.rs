use super::*;

#[test]
fn all_matches_every_type() {
    assert!(matches(FILTER_ALL, "photos"));
    assert!(matches(FILTER_ALL, "videos"));
}

#[test]
fn named_filter_matches_only_its_own_type() {
    assert!(matches("photos", "photos"));
    assert!(!matches("photos", "videos"));
    assert!(!matches("videos", "photos"));
}

#[test]
fn filter_controls_start_with_the_sentinel() {
    assert_eq!(FILTERS[0].0, FILTER_ALL);
}
