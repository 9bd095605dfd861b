//! Keyboard and pointer input must produce identical states
//!
//! Balanced testing - Write once, run on every input path

#![cfg(feature = "tui")]
#![allow(clippy::unwrap_used)]

use pocket_calc::core::keymap::char_for_event;
use pocket_calc::driver::{run_full_specification, CalculatorDriver, KeyboardDriver, PointerDriver};
use pocket_calc::script;
use pocket_calc::tui::Keypad;
use proptest::prelude::*;

/// Scripts built only from keys the keypad has buttons for
fn keys_strategy() -> impl Strategy<Value = String> {
    let keys: Vec<char> = Keypad::new().buttons().map(|b| char_for_event(b.event)).collect();
    prop::collection::vec(prop::sample::select(keys), 0..40).prop_map(|v| v.into_iter().collect())
}

#[test]
fn test_full_specification_keyboard() {
    run_full_specification(&mut KeyboardDriver::new());
}

#[test]
fn test_full_specification_pointer() {
    run_full_specification(&mut PointerDriver::new());
}

proptest! {
    #[test]
    fn prop_keyboard_and_pointer_agree(keys in keys_strategy()) {
        let mut keyboard = KeyboardDriver::new();
        let mut pointer = PointerDriver::new();
        keyboard.enter(&keys).unwrap();
        pointer.enter(&keys).unwrap();
        prop_assert_eq!(keyboard.state(), pointer.state());
    }

    #[test]
    fn prop_keyboard_matches_replay(keys in keys_strategy()) {
        let mut keyboard = KeyboardDriver::new();
        keyboard.enter(&keys).unwrap();
        prop_assert_eq!(keyboard.state(), &script::run(&keys).unwrap());
    }
}
