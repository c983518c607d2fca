#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Sentinel filter value that matches every gallery item.
pub const FILTER_ALL: &str = "all";

/// Filter controls shown above the gallery, as (value, label) pairs.
pub const FILTERS: &[(&str, &str)] = &[
    (FILTER_ALL, "All"),
    ("photos", "Photos"),
    ("videos", "Videos"),
];

/// Whether an item of the given type is visible under the active filter.
pub fn matches(active: &str, item_type: &str) -> bool {
    active == FILTER_ALL || active == item_type
}
