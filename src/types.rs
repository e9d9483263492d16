//! Core types for effect configuration.

/// Which effect the engine runs on each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AuraMode {
    /// All channels held at zero.
    Off,

    /// Configured color held at full brightness.
    Static,

    /// Alternates between off and the configured color, one half-cycle per tick.
    Blink,

    /// Fades the configured color down to zero and back up, one unit per tick.
    Breathe,

    /// Rotates hue red → blue → green → red, ignoring the configured color.
    Smooth,
}

/// Named colors the engine can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AuraColor {
    Red,
    Green,
    Blue,
    /// Red + blue.
    Magenta,
    /// Red + green.
    Yellow,
    /// Green + blue.
    Cyan,
    /// Red + green + blue.
    White,
}

impl AuraColor {
    /// Every color, in declaration order.
    pub const ALL: [AuraColor; 7] = [
        AuraColor::Red,
        AuraColor::Green,
        AuraColor::Blue,
        AuraColor::Magenta,
        AuraColor::Yellow,
        AuraColor::Cyan,
        AuraColor::White,
    ];
}

/// Component mask: which of the three channels a color lights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Channels {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
}

impl Channels {
    /// Creates a mask from per-channel flags.
    #[inline]
    pub const fn new(red: bool, green: bool, blue: bool) -> Self {
        Self { red, green, blue }
    }

    /// Number of channels in the mask.
    pub fn count(&self) -> usize {
        self.red as usize + self.green as usize + self.blue as usize
    }
}

/// Engine configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AuraError {
    /// Brightness bound of zero leaves no room for any effect.
    ZeroBrightness,
}

impl core::fmt::Display for AuraError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AuraError::ZeroBrightness => {
                write!(f, "brightness bound must be at least 1")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AuraError {}
