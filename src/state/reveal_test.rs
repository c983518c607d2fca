use super::*;

#[test]
fn first_entry_in_a_batch_is_not_delayed() {
    assert_eq!(stagger_delay_ms(0), 0);
}

#[test]
fn delay_grows_by_50ms_per_entry() {
    assert_eq!(stagger_delay_ms(1), 50);
    assert_eq!(stagger_delay_ms(4), 200);
}

#[test]
fn grid_cards_trigger_earlier_than_sections() {
    assert!(GRID_THRESHOLD < REVEAL_THRESHOLD);
}
