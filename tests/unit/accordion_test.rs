//! Unit tests for the FAQ accordion state.

use vitrine::faq::AccordionController;

#[test]
fn all_items_start_collapsed() {
    let accordion = AccordionController::new(4);
    assert_eq!(accordion.len(), 4);
    for index in 0..4 {
        assert!(!accordion.is_expanded(index));
    }
}

#[test]
fn even_click_counts_restore_the_original_state() {
    let mut accordion = AccordionController::new(3);

    for clicks in [2, 4, 6] {
        for _ in 0..clicks {
            accordion.toggle(1);
        }
        assert!(!accordion.is_expanded(1), "after {} clicks", clicks);
    }

    // And from an expanded starting point
    accordion.toggle(1);
    for _ in 0..4 {
        accordion.toggle(1);
    }
    assert!(accordion.is_expanded(1));
}

#[test]
fn any_number_of_items_may_be_open_at_once() {
    let mut accordion = AccordionController::new(5);
    for index in 0..5 {
        accordion.toggle(index);
    }
    for index in 0..5 {
        assert!(accordion.is_expanded(index));
    }
}

#[test]
fn toggling_one_item_never_touches_another() {
    let mut accordion = AccordionController::new(3);
    accordion.toggle(0);

    accordion.toggle(1);
    accordion.toggle(1);

    assert!(accordion.is_expanded(0));
    assert!(!accordion.is_expanded(1));
    assert!(!accordion.is_expanded(2));
}

#[test]
fn empty_accordion_is_harmless() {
    let mut accordion = AccordionController::new(0);
    assert!(accordion.is_empty());
    assert!(!accordion.toggle(0));
}
