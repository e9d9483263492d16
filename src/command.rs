//! Command-based control for effect runners.

use crate::types::{AuraColor, AuraMode};

/// Actions for controlling an LED effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AuraAction {
    /// Advance one tick.
    Tick,
    /// Switch effect and re-seed.
    SetMode(AuraMode),
    /// Switch color and re-seed.
    SetColor(AuraColor),
    /// Change brightness bound and re-seed.
    SetBrightness(u16),
    /// Override with an 8-bit color.
    SetRgb(u8, u8, u8),
    /// Restart the current effect.
    Reset,
}

/// Command targeting a specific LED.
#[derive(Debug, Clone, Copy)]
pub struct AuraCommand<Id> {
    pub led_id: Id,
    pub action: AuraAction,
}

impl<Id> AuraCommand<Id> {
    /// Creates command.
    pub fn new(led_id: Id, action: AuraAction) -> Self {
        Self { led_id, action }
    }
}
