//! Unified Calculator Driver
//!
//! Write the test logic once, run it through every input path.
//!
//! Balanced testing - keyboard and pointer input must land in the
//! same state for the same logical keys
//!
//! # Example
//!
//! ```rust
//! use pocket_calc::driver::{verify_chaining, KeyboardDriver, PointerDriver};
//!
//! verify_chaining(&mut KeyboardDriver::new());
//! verify_chaining(&mut PointerDriver::new());
//! ```

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::core::{CalcEvent, CalculatorState};
use crate::script::{self, ScriptResult};
use crate::tui::{layout, CalculatorApp, InputHandler};

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Presses the key for one event
    fn press(&mut self, event: CalcEvent);

    /// The app being driven
    fn app(&self) -> &CalculatorApp;

    /// Current calculator state
    fn state(&self) -> &CalculatorState {
        self.app().state()
    }

    /// Current display text
    fn display(&self) -> String {
        self.state().display().to_string()
    }

    /// Presses every event in order
    fn press_all(&mut self, events: &[CalcEvent]) {
        for &event in events {
            self.press(event);
        }
    }

    /// Types a keystroke script such as `"3+4*2="`
    fn enter(&mut self, keys: &str) -> ScriptResult<()> {
        let events = script::parse(keys)?;
        self.press_all(&events);
        Ok(())
    }

    /// Presses clear
    fn clear(&mut self) {
        self.press(CalcEvent::Clear);
    }
}

/// Drives the app through synthesized key events
#[derive(Debug, Default)]
pub struct KeyboardDriver {
    app: CalculatorApp,
    input: InputHandler,
}

impl KeyboardDriver {
    /// Creates a keyboard driver over a fresh app
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a mutable reference to the underlying app
    pub fn app_mut(&mut self) -> &mut CalculatorApp {
        &mut self.app
    }
}

impl CalculatorDriver for KeyboardDriver {
    fn press(&mut self, event: CalcEvent) {
        let key = InputHandler::key_for_event(event);
        let action = self.input.handle_key(key);
        self.app.apply_action(action);
    }

    fn app(&self) -> &CalculatorApp {
        &self.app
    }
}

/// Screen size used by [`PointerDriver`] unless told otherwise
pub const DEFAULT_SCREEN: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 24,
};

/// Drives the app by clicking the centre of keypad buttons
#[derive(Debug)]
pub struct PointerDriver {
    app: CalculatorApp,
    screen: Rect,
}

impl Default for PointerDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerDriver {
    /// Creates a pointer driver on an 80x24 screen
    #[must_use]
    pub fn new() -> Self {
        Self::with_screen(DEFAULT_SCREEN)
    }

    /// Creates a pointer driver on a screen of the given size
    #[must_use]
    pub fn with_screen(screen: Rect) -> Self {
        Self {
            app: CalculatorApp::new(),
            screen,
        }
    }

    /// Screen position of the centre of the button for `event`
    #[must_use]
    pub fn button_center(&self, event: CalcEvent) -> Option<(u16, u16)> {
        let keypad = self.app.keypad();
        let index = keypad.find_button(event)?;
        let rect = keypad.button_rect(layout(self.screen).keypad, index)?;
        Some((rect.x + rect.width / 2, rect.y + rect.height / 2))
    }
}

impl CalculatorDriver for PointerDriver {
    fn press(&mut self, event: CalcEvent) {
        let Some((column, row)) = self.button_center(event) else {
            tracing::warn!(event = %event, screen = ?self.screen, "no visible button");
            return;
        };
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        self.app.handle_mouse(click, self.screen);
    }

    fn app(&self) -> &CalculatorApp {
        &self.app
    }
}

// ===== Unified Test Specifications =====
// These work with ANY CalculatorDriver implementation

/// Verifies the four operators
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    for (keys, expected) in [("2+3=", "5"), ("10-4=", "6"), ("6*7=", "42"), ("20/4=", "5")] {
        driver.clear();
        assert_eq!(driver.enter(keys), Ok(()));
        assert_eq!(driver.display(), expected, "keys {keys}");
    }
}

/// Verifies strict left-to-right evaluation
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    assert_eq!(driver.enter("3+4"), Ok(()));
    assert_eq!(driver.display(), "4");
    assert_eq!(driver.enter("*"), Ok(()));
    assert_eq!(driver.display(), "7");
    assert_eq!(driver.enter("2="), Ok(()));
    assert_eq!(driver.display(), "14");
}

/// Verifies decimal entry rules
pub fn verify_decimal_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    assert_eq!(driver.enter("."), Ok(()));
    assert_eq!(driver.display(), "0.");
    assert_eq!(driver.enter("5.5"), Ok(()));
    assert_eq!(driver.display(), "0.55");

    driver.clear();
    assert_eq!(driver.enter("0.1+0.2="), Ok(()));
    assert_eq!(driver.display(), "0.3");
}

/// Verifies sign toggle, percentage, and clear
pub fn verify_unary_keys<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    assert_eq!(driver.enter("50%"), Ok(()));
    assert_eq!(driver.display(), "0.5");
    assert_eq!(driver.enter("n"), Ok(()));
    assert_eq!(driver.display(), "-0.5");

    driver.clear();
    assert_eq!(driver.state(), &CalculatorState::new());
}

/// Verifies division by zero and large results
pub fn verify_edge_results<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    assert_eq!(driver.enter("5/0="), Ok(()));
    assert_eq!(driver.display(), "0");

    driver.clear();
    assert_eq!(driver.enter("40000000*50000000="), Ok(()));
    assert_eq!(driver.display(), "2.000000e+15");
}

/// Complete verification suite
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_chaining(driver);
    verify_decimal_entry(driver);
    verify_unary_keys(driver);
    verify_edge_results(driver);
}
