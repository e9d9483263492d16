#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`LedState`**: Duty values plus effect cursor for one RGB LED, advanced one step per tick
//! - **`AuraMode`**: Which effect runs (`Off`, `Static`, `Blink`, `Breathe`, `Smooth`)
//! - **`AuraColor`**: Named color the effect uses; mixed colors light several channels
//! - **`Channels`**: Component mask of a color (which of red, green, blue it lights)
//! - **`PwmRgbLed`**: Trait to implement for your PWM hardware
//! - **`AuraLed`**: Owns a `LedState` and an LED, writing duty values after each change
//! - **`AuraAction`** / **`AuraCommand`**: Commands that can be sent to control LEDs
//! - **`AuraCollection`**: Fixed-capacity group of LEDs ticked together
//!
//! Duty values are plain `u16` in `0..=brightness_max`, where the bound is normally the
//! PWM timer's period, so they can be written straight into compare registers.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod collection;
pub mod colors;
pub mod command;
pub mod engine;
pub mod led;
pub mod types;

pub use collection::{AuraCollection, CollectionError, Frame, LedId};
pub use colors::{Primary, scale_8bit};
pub use command::{AuraAction, AuraCommand};
pub use engine::LedState;
pub use led::{AuraLed, PwmRgbLed};
pub use types::{AuraColor, AuraError, AuraMode, Channels};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_color_lights_something() {
        for color in AuraColor::ALL {
            assert!(color.channels().count() > 0);
        }
    }
}
