//! LED output binding.
//!
//! Provides [`AuraLed`], which owns a [`LedState`] together with the hardware it
//! drives and pushes new duty values out after every change. Also defines the
//! [`PwmRgbLed`] trait for hardware abstraction.

use crate::command::AuraAction;
use crate::engine::LedState;
use crate::types::{AuraColor, AuraMode};

/// Trait for abstracting RGB LED PWM hardware.
///
/// Implement this for your timer/PWM peripheral. Values are in the same range as
/// the brightness bound the LED was created with, so they can be written straight
/// into compare registers.
pub trait PwmRgbLed {
    /// Sets the pulse width of each channel. Handle any hardware errors
    /// internally - this method cannot fail.
    fn set_pulse_widths(&mut self, red: u16, green: u16, blue: u16);
}

/// Runs a color effect on a single RGB LED.
///
/// The caller decides the tick cadence: call [`tick`](Self::tick) from a delay loop
/// or a timer interrupt. Hardware is only written when the duty values change.
pub struct AuraLed<L: PwmRgbLed> {
    led: L,
    state: LedState,
    written: (u16, u16, u16),
}

impl<L: PwmRgbLed> AuraLed<L> {
    /// Creates a new effect runner and writes the seeded duty values.
    pub fn new(mut led: L, mode: AuraMode, color: AuraColor, brightness_max: u16) -> Self {
        let state = LedState::new(mode, color, brightness_max);
        let written = state.rgb();
        led.set_pulse_widths(written.0, written.1, written.2);

        Self {
            led,
            state,
            written,
        }
    }

    /// Handles an action by dispatching to the appropriate method.
    pub fn handle_action(&mut self, action: AuraAction) {
        match action {
            AuraAction::Tick => self.state.advance(),
            AuraAction::SetMode(mode) => self.state.set_mode(mode),
            AuraAction::SetColor(color) => self.state.set_color(color),
            AuraAction::SetBrightness(max) => self.state.set_brightness(max),
            AuraAction::SetRgb(red, green, blue) => self.state.set_rgb(red, green, blue),
            AuraAction::Reset => self.state.reset(),
        }
        self.flush();
    }

    /// Advances the effect one tick and updates the LED.
    pub fn tick(&mut self) {
        self.handle_action(AuraAction::Tick);
    }

    /// Overrides the LED with an 8-bit color. See [`LedState::set_rgb`].
    pub fn set_rgb(&mut self, red: u8, green: u8, blue: u8) {
        self.handle_action(AuraAction::SetRgb(red, green, blue));
    }

    /// Returns the effect state.
    pub fn state(&self) -> &LedState {
        &self.state
    }

    /// Returns the LED hardware.
    pub fn led(&self) -> &L {
        &self.led
    }

    /// Releases the LED hardware.
    pub fn into_inner(self) -> L {
        self.led
    }

    fn flush(&mut self) {
        let rgb = self.state.rgb();
        if rgb != self.written {
            self.led.set_pulse_widths(rgb.0, rgb.1, rgb.2);
            self.written = rgb;
        }
    }
}
