//! Property-based tests for the keypad
//!
//! Error prevention - Property tests catch edge cases that humans miss

#![cfg(feature = "tui")]
#![allow(clippy::unwrap_used)]

use pocket_calc::tui::{layout, Keypad};
use proptest::prelude::*;
use ratatui::layout::Rect;

// ===== Strategy definitions =====

/// Generate valid grid positions
fn grid_position_strategy() -> impl Strategy<Value = (usize, usize)> {
    (0usize..5usize, 0usize..4usize)
}

/// Generate keypad areas large enough to hold every button
fn keypad_area_strategy() -> impl Strategy<Value = Rect> {
    (0u16..50, 0u16..30, 6u16..120, 7u16..60).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

/// Generate screen sizes
fn screen_strategy() -> impl Strategy<Value = Rect> {
    (60u16..200, 24u16..80).prop_map(|(w, h)| Rect::new(0, 0, w, h))
}

// ===== Grid properties =====

proptest! {
    /// Every grid cell is covered by exactly one button
    #[test]
    fn prop_every_cell_has_button((row, col) in grid_position_strategy()) {
        let keypad = Keypad::new();
        let covering = keypad.buttons().filter(|b| b.covers(row, col)).count();
        prop_assert_eq!(covering, 1);
    }

    /// index_at agrees with get_button_at
    #[test]
    fn prop_index_at_matches_get_button_at((row, col) in grid_position_strategy()) {
        let keypad = Keypad::new();
        let idx = keypad.index_at(row, col).unwrap();
        prop_assert_eq!(keypad.get_button(idx), keypad.get_button_at(row, col));
    }

    /// Highlighting any button leaves exactly that one pressed
    #[test]
    fn prop_highlight_is_exclusive(index in 0usize..19) {
        let mut keypad = Keypad::new();
        let event = keypad.get_button(index).unwrap().event;
        keypad.highlight(event);
        prop_assert_eq!(keypad.pressed_index(), Some(index));
        prop_assert_eq!(keypad.buttons().filter(|b| b.pressed).count(), 1);
    }
}

// ===== Hit-test properties =====

proptest! {
    /// Clicking inside a button's rectangle hits that button
    #[test]
    fn prop_hit_test_inside_rect(area in keypad_area_strategy(), index in 0usize..19, dx in 0u16..100, dy in 0u16..100) {
        let keypad = Keypad::new();
        if let Some(rect) = keypad.button_rect(area, index) {
            let x = rect.x + dx % rect.width;
            let y = rect.y + dy % rect.height;
            prop_assert_eq!(keypad.hit_test(area, x, y), Some(index));
        }
    }

    /// Clicks outside the keypad never hit anything
    #[test]
    fn prop_hit_test_outside_area(area in keypad_area_strategy(), x in 0u16..400, y in 0u16..200) {
        let keypad = Keypad::new();
        let inside = x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height;
        if !inside {
            prop_assert!(keypad.hit_test(area, x, y).is_none());
        }
    }

    /// Button rectangles stay within the keypad area
    #[test]
    fn prop_button_rects_within_area(area in keypad_area_strategy()) {
        let keypad = Keypad::new();
        for index in 0..keypad.button_count() {
            if let Some(rect) = keypad.button_rect(area, index) {
                prop_assert!(area.contains(rect.as_position()));
                prop_assert!(rect.right() <= area.right());
                prop_assert!(rect.bottom() <= area.bottom());
            }
        }
    }

    /// On any realistic screen every button is reachable by mouse
    #[test]
    fn prop_all_buttons_clickable_on_screen(screen in screen_strategy()) {
        let keypad = Keypad::new();
        let area = layout(screen).keypad;
        for index in 0..keypad.button_count() {
            prop_assert!(keypad.button_rect(area, index).is_some());
        }
    }
}
