//! Color helpers: component masks and scaling.
//!
//! [`AuraColor::channels`] is the single lookup table mapping a named color to the
//! channels it lights. Everything that needs to know "which channels does this color
//! use" (initial seeding, static, blink, breathe) goes through it.
//!
//! [`scale_8bit`] maps a fixed 0-255 intensity onto a device brightness range.

use crate::types::{AuraColor, Channels};
use palette::Srgb;

/// Which channel of a mask drives a fade. The other mask channels follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Primary {
    Red,
    Green,
    Blue,
}

impl AuraColor {
    /// Returns the component mask for this color.
    #[inline]
    pub const fn channels(self) -> Channels {
        match self {
            AuraColor::Red => Channels::new(true, false, false),
            AuraColor::Green => Channels::new(false, true, false),
            AuraColor::Blue => Channels::new(false, false, true),
            AuraColor::Magenta => Channels::new(true, false, true),
            AuraColor::Yellow => Channels::new(true, true, false),
            AuraColor::Cyan => Channels::new(false, true, true),
            AuraColor::White => Channels::new(true, true, true),
        }
    }

    /// Returns the first channel of the mask in red, green, blue order.
    #[inline]
    pub const fn primary(self) -> Primary {
        let mask = self.channels();
        if mask.red {
            Primary::Red
        } else if mask.green {
            Primary::Green
        } else {
            Primary::Blue
        }
    }

    /// Returns this color at full intensity as `Srgb` (0.0-1.0).
    pub fn to_srgb(self) -> Srgb {
        let mask = self.channels();
        let on = |lit: bool| if lit { 1.0 } else { 0.0 };
        Srgb::new(on(mask.red), on(mask.green), on(mask.blue))
    }
}

impl Channels {
    /// Expands the mask into duty values: `level` on lit channels, 0 elsewhere.
    #[inline]
    pub fn levels(self, level: u16) -> (u16, u16, u16) {
        let pick = |lit: bool| if lit { level } else { 0 };
        (pick(self.red), pick(self.green), pick(self.blue))
    }
}

/// Scales an 8-bit intensity onto `0..=brightness_max` (truncating).
///
/// `255` maps exactly to `brightness_max` and `0` to `0`.
#[inline]
pub fn scale_8bit(value: u8, brightness_max: u16) -> u16 {
    // u8 * u16 fits in u32, and the quotient is <= brightness_max
    (value as u32 * brightness_max as u32 / u8::MAX as u32) as u16
}

/// Converts a duty value into a 0.0-1.0 fraction of `brightness_max`.
#[inline]
pub fn duty_fraction(value: u16, brightness_max: u16) -> f32 {
    if brightness_max == 0 {
        return 0.0;
    }
    value as f32 / brightness_max as f32
}
