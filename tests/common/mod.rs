//! Shared test infrastructure for rgb-aura integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use rgb_aura::{LedState, PwmRgbLed};

// ============================================================================
// Mock PWM output
// ============================================================================

/// Mock PWM output that records every write for testing
pub struct MockPwm {
    current: (u16, u16, u16),
    history: heapless::Vec<(u16, u16, u16), 64>,
}

impl MockPwm {
    pub fn new() -> Self {
        Self {
            current: (0, 0, 0),
            history: heapless::Vec::new(),
        }
    }

    pub fn last(&self) -> (u16, u16, u16) {
        self.current
    }

    pub fn history(&self) -> &[(u16, u16, u16)] {
        &self.history
    }
}

impl PwmRgbLed for MockPwm {
    fn set_pulse_widths(&mut self, red: u16, green: u16, blue: u16) {
        self.current = (red, green, blue);
        let _ = self.history.push((red, green, blue));
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Advance `state` by `ticks` steps
pub fn advance_n(state: &mut LedState, ticks: usize) {
    for _ in 0..ticks {
        state.advance();
    }
}

/// Check every channel is within the brightness bound
pub fn within_bound(state: &LedState) -> bool {
    let max = state.brightness_max();
    state.red() <= max && state.green() <= max && state.blue() <= max
}
