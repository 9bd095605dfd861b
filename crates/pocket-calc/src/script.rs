//! Keystroke replay
//!
//! A script is a flat string of keys, read exactly like keyboard input:
//! `"3+4*2="` presses `3`, `+`, `4`, `*`, `2`, `=`. Whitespace is skipped.

use serde::Serialize;
use thiserror::Error;

use crate::core::keymap::event_for_char;
use crate::core::{CalcEvent, CalculatorState};

/// Result type for script operations
pub type ScriptResult<T> = Result<T, ScriptError>;

/// Errors reading a keystroke script
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    /// A character with no key binding
    #[error("unrecognized key {key:?} at offset {offset}")]
    UnknownKey {
        /// The offending character
        key: char,
        /// Character offset in the script
        offset: usize,
    },
}

/// Display after one replayed keystroke
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayStep {
    /// The key that was pressed
    pub event: CalcEvent,
    /// Display after the key
    pub display: String,
}

/// Every intermediate display of a replay, plus the state it ended in
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    /// One entry per key, in order
    pub steps: Vec<ReplayStep>,
    /// State after the last key
    pub state: CalculatorState,
}

/// Parses a script into events
pub fn parse(keys: &str) -> ScriptResult<Vec<CalcEvent>> {
    keys.chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(offset, key)| event_for_char(key).ok_or(ScriptError::UnknownKey { key, offset }))
        .collect()
}

/// Replays events from `initial`, returning the final state
#[must_use]
pub fn replay(initial: CalculatorState, events: &[CalcEvent]) -> CalculatorState {
    events.iter().fold(initial, |state, &event| {
        let next = state.apply(event);
        tracing::debug!(event = %event, display = next.display(), "replayed key");
        next
    })
}

/// Parses and replays a script from the initial state
pub fn run(keys: &str) -> ScriptResult<CalculatorState> {
    let events = parse(keys)?;
    Ok(replay(CalculatorState::new(), &events))
}

/// Parses and replays a script once, recording the display after every key
pub fn trace(keys: &str) -> ScriptResult<Trace> {
    let events = parse(keys)?;
    let mut state = CalculatorState::new();
    let mut steps = Vec::with_capacity(events.len());
    for event in events {
        state = state.apply(event);
        tracing::debug!(event = %event, display = state.display(), "replayed key");
        steps.push(ReplayStep {
            event,
            display: state.display().to_string(),
        });
    }
    Ok(Trace { steps, state })
}
