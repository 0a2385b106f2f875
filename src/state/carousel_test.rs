use super::*;

// =============================================================
// normalize_index
// =============================================================

#[test]
fn normalize_keeps_in_range_indices() {
    for i in 0..5 {
        assert_eq!(normalize_index(i, 5), usize::try_from(i).unwrap());
    }
}

#[test]
fn normalize_wraps_past_end_to_first() {
    assert_eq!(normalize_index(5, 5), 0);
    assert_eq!(normalize_index(6, 5), 0);
    assert_eq!(normalize_index(i64::MAX, 5), 0);
}

#[test]
fn normalize_wraps_negative_to_last() {
    assert_eq!(normalize_index(-1, 5), 4);
    assert_eq!(normalize_index(-7, 5), 4);
    assert_eq!(normalize_index(i64::MIN, 5), 4);
}

#[test]
fn normalize_is_total_over_sampled_integers() {
    for count in 1..6_usize {
        for index in -20..20_i64 {
            assert!(normalize_index(index, count) < count);
        }
    }
}

#[test]
fn normalize_with_zero_count_is_zero() {
    assert_eq!(normalize_index(3, 0), 0);
}

// =============================================================
// dot_target
// =============================================================

#[test]
fn dot_target_parses_attribute() {
    assert_eq!(dot_target(Some("2"), 0), 2);
    assert_eq!(dot_target(Some(" 1 "), 0), 1);
}

#[test]
fn dot_target_falls_back_to_position() {
    assert_eq!(dot_target(None, 3), 3);
    assert_eq!(dot_target(Some("two"), 1), 1);
    assert_eq!(dot_target(Some(""), 4), 4);
    assert_eq!(dot_target(Some("-"), 2), 2);
}

#[test]
fn dot_target_reads_leading_integer() {
    assert_eq!(dot_target(Some("2abc"), 0), 2);
    assert_eq!(dot_target(Some("1.5"), 0), 1);
    assert_eq!(dot_target(Some("-1"), 0), -1);
}

// =============================================================
// CarouselState
// =============================================================

#[test]
fn empty_carousel_is_rejected() {
    assert!(CarouselState::new(0, 0).is_none());
}

#[test]
fn new_state_starts_at_first_slide() {
    let state = CarouselState::new(3, 3).unwrap();
    assert_eq!(state.current(), 0);
    assert!(state.is_slide_active(0));
    assert_eq!(state.active_dot(), Some(0));
}

#[test]
fn next_and_prev_wrap_around() {
    let mut state = CarouselState::new(3, 0).unwrap();
    assert_eq!(state.prev(), 2);
    assert_eq!(state.next(), 0);
    assert_eq!(state.next(), 1);
    assert_eq!(state.next(), 2);
    assert_eq!(state.next(), 0);
}

#[test]
fn exactly_one_slide_active_after_any_show() {
    let mut state = CarouselState::new(4, 4).unwrap();
    for index in -10..10 {
        state.show(index);
        let active = (0..state.slide_count()).filter(|&i| state.is_slide_active(i)).count();
        assert_eq!(active, 1);
        assert!(state.current() < state.slide_count());
    }
}

#[test]
fn show_current_again_is_idempotent() {
    let mut state = CarouselState::new(4, 4).unwrap();
    let first = state.show(9);
    let second = state.show(i64::try_from(first).unwrap());
    assert_eq!(first, second);
}

#[test]
fn no_active_dot_without_dots() {
    let mut state = CarouselState::new(3, 0).unwrap();
    state.show(1);
    assert_eq!(state.active_dot(), None);
}

#[test]
fn single_slide_carousel_stays_put() {
    let mut state = CarouselState::new(1, 1).unwrap();
    assert_eq!(state.next(), 0);
    assert_eq!(state.prev(), 0);
}
