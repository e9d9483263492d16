//! Color effect state machine.
//!
//! Provides [`LedState`], which holds the duty values for one RGB LED and advances
//! them by exactly one step per [`LedState::advance`] call. Timing is entirely up to
//! the caller: advance at whatever cadence suits the effect, then write
//! [`LedState::rgb`] to the PWM compare registers.

use crate::colors::{Primary, duty_fraction, scale_8bit};
use crate::types::{AuraColor, AuraError, AuraMode};
use palette::Srgb;

/// Duty values and effect cursor for a single RGB LED.
///
/// All three channels stay within `0..=brightness_max` after every operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedState {
    red: u16,
    green: u16,
    blue: u16,
    mode: AuraMode,
    color: AuraColor,
    brightness_max: u16,
    phase: u8,
}

impl LedState {
    /// Creates a state seeded for `mode`.
    ///
    /// `brightness_max` is usually the PWM timer's period. A bound of zero is
    /// clamped to 1; use [`LedState::try_new`] to reject it instead.
    ///
    /// Breathe starts with the color's channels fully lit, Smooth starts at pure
    /// red, every other mode starts dark.
    pub fn new(mode: AuraMode, color: AuraColor, brightness_max: u16) -> Self {
        Self::seeded(mode, color, clamp_brightness(brightness_max))
    }

    /// Creates a state seeded for `mode`, rejecting a zero brightness bound.
    ///
    /// # Errors
    /// * `ZeroBrightness` - `brightness_max` is 0
    pub fn try_new(
        mode: AuraMode,
        color: AuraColor,
        brightness_max: u16,
    ) -> Result<Self, AuraError> {
        if brightness_max == 0 {
            return Err(AuraError::ZeroBrightness);
        }
        Ok(Self::seeded(mode, color, brightness_max))
    }

    fn seeded(mode: AuraMode, color: AuraColor, brightness_max: u16) -> Self {
        let mut state = Self {
            red: 0,
            green: 0,
            blue: 0,
            mode,
            color,
            brightness_max,
            phase: 0,
        };

        match mode {
            AuraMode::Breathe => state.set_levels(color.channels().levels(brightness_max)),
            AuraMode::Smooth => state.red = brightness_max,
            AuraMode::Off | AuraMode::Static | AuraMode::Blink => {}
        }

        state
    }

    /// Advances the current effect by one tick.
    pub fn advance(&mut self) {
        match self.mode {
            AuraMode::Off => self.set_levels((0, 0, 0)),
            AuraMode::Static => self.light_mask(),
            AuraMode::Blink => {
                if self.phase == 0 {
                    self.set_levels((0, 0, 0));
                    self.phase = 1;
                } else {
                    self.light_mask();
                    self.phase = 0;
                }
            }
            AuraMode::Breathe => self.breathe(),
            AuraMode::Smooth => self.smooth(),
        }
    }

    /// Overrides the duty values with an 8-bit color.
    ///
    /// Each component is scaled from 0-255 onto `0..=brightness_max`. Mode, color
    /// and phase are left alone, so resuming [`advance`](Self::advance) continues
    /// the effect from these values.
    pub fn set_rgb(&mut self, red: u8, green: u8, blue: u8) {
        let max = self.brightness_max;
        self.red = scale_8bit(red, max);
        self.green = scale_8bit(green, max);
        self.blue = scale_8bit(blue, max);
    }

    /// Switches effect, re-seeding as if freshly created.
    pub fn set_mode(&mut self, mode: AuraMode) {
        *self = Self::seeded(mode, self.color, self.brightness_max);
    }

    /// Switches color, re-seeding the current effect.
    pub fn set_color(&mut self, color: AuraColor) {
        *self = Self::seeded(self.mode, color, self.brightness_max);
    }

    /// Changes the brightness bound, re-seeding the current effect.
    ///
    /// Zero is clamped to 1, as in [`LedState::new`].
    pub fn set_brightness(&mut self, brightness_max: u16) {
        *self = Self::seeded(self.mode, self.color, clamp_brightness(brightness_max));
    }

    /// Re-seeds the current effect from the start.
    pub fn reset(&mut self) {
        *self = Self::seeded(self.mode, self.color, self.brightness_max);
    }

    /// Red duty value.
    #[inline]
    pub fn red(&self) -> u16 {
        self.red
    }

    /// Green duty value.
    #[inline]
    pub fn green(&self) -> u16 {
        self.green
    }

    /// Blue duty value.
    #[inline]
    pub fn blue(&self) -> u16 {
        self.blue
    }

    /// Duty values as `(red, green, blue)`.
    #[inline]
    pub fn rgb(&self) -> (u16, u16, u16) {
        (self.red, self.green, self.blue)
    }

    pub fn mode(&self) -> AuraMode {
        self.mode
    }

    pub fn color(&self) -> AuraColor {
        self.color
    }

    pub fn brightness_max(&self) -> u16 {
        self.brightness_max
    }

    /// Transition cursor.
    ///
    /// Blink: 0 = next tick turns off, 1 = next tick lights.
    /// Breathe: 0 = dimming, 1 = brightening.
    /// Smooth: 0 = red→blue, 1 = blue→green, 2 = green→red.
    pub fn phase(&self) -> u8 {
        self.phase
    }

    /// Duty values normalized to 0.0-1.0 of the brightness bound.
    pub fn to_srgb(&self) -> Srgb {
        let max = self.brightness_max;
        Srgb::new(
            duty_fraction(self.red, max),
            duty_fraction(self.green, max),
            duty_fraction(self.blue, max),
        )
    }

    fn set_levels(&mut self, (red, green, blue): (u16, u16, u16)) {
        self.red = red;
        self.green = green;
        self.blue = blue;
    }

    fn light_mask(&mut self) {
        self.set_levels(self.color.channels().levels(self.brightness_max));
    }

    fn breathe(&mut self) {
        let max = self.brightness_max;
        let current = match self.color.primary() {
            Primary::Red => self.red,
            Primary::Green => self.green,
            Primary::Blue => self.blue,
        };

        // Flip on the tick that lands on a bound, so the next tick never steps past it.
        let level = if self.phase == 0 {
            let next = current.saturating_sub(1);
            if next == 0 {
                self.phase = 1;
            }
            next
        } else {
            let next = step_up(current, max);
            if next == max {
                self.phase = 0;
            }
            next
        };

        // Secondary channels mirror the primary so mixed colors stay in lockstep.
        let mask = self.color.channels();
        if mask.red {
            self.red = level;
        }
        if mask.green {
            self.green = level;
        }
        if mask.blue {
            self.blue = level;
        }
    }

    fn smooth(&mut self) {
        let max = self.brightness_max;
        match self.phase {
            0 => {
                self.red = self.red.saturating_sub(1);
                self.blue = step_up(self.blue, max);
                if self.red == 0 && self.blue == max {
                    self.phase = 1;
                }
            }
            1 => {
                self.blue = self.blue.saturating_sub(1);
                self.green = step_up(self.green, max);
                if self.blue == 0 && self.green == max {
                    self.phase = 2;
                }
            }
            _ => {
                self.green = self.green.saturating_sub(1);
                self.red = step_up(self.red, max);
                if self.green == 0 && self.red == max {
                    self.phase = 0;
                }
            }
        }
    }
}

#[inline]
fn step_up(value: u16, max: u16) -> u16 {
    value.saturating_add(1).min(max)
}

fn clamp_brightness(brightness_max: u16) -> u16 {
    if brightness_max == 0 {
        #[cfg(feature = "defmt")]
        defmt::warn!("brightness bound 0 clamped to 1");
        1
    } else {
        brightness_max
    }
}
