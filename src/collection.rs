use crate::command::AuraCommand;
use crate::engine::LedState;
use crate::led::{AuraLed, PwmRgbLed};
use crate::types::{AuraColor, AuraMode};
use heapless::Vec;

/// An identifier for an LED within a collection.
///
/// Wraps a `usize` slot index. Users pick the ID when adding an LED and use it to
/// target that LED with commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedId(pub usize);

impl From<usize> for LedId {
    fn from(id: usize) -> Self {
        LedId(id)
    }
}

impl From<LedId> for usize {
    fn from(id: LedId) -> Self {
        id.0
    }
}

/// Errors that can occur during collection operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CollectionError {
    /// The specified LED ID does not exist in the collection.
    InvalidLedId(LedId),

    /// Attempted to add an LED with an ID that already exists.
    DuplicateLedId(LedId),

    /// The LED ID exceeds the collection's capacity.
    LedIdOutOfBounds { id: LedId, capacity: usize },
}

impl core::fmt::Display for CollectionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CollectionError::InvalidLedId(id) => {
                write!(f, "LED ID {} does not exist in collection", id.0)
            }
            CollectionError::DuplicateLedId(id) => {
                write!(f, "LED ID {} already exists in collection", id.0)
            }
            CollectionError::LedIdOutOfBounds { id, capacity } => {
                write!(
                    f,
                    "LED ID {} exceeds collection capacity of {}",
                    id.0, capacity
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CollectionError {}

/// Duty values of every LED in a collection after a tick.
pub type Frame<const MAX_LEDS: usize> = Vec<(LedId, (u16, u16, u16)), MAX_LEDS>;

/// Fixed-capacity set of RGB LEDs, each running its own effect.
///
/// Routes commands to individual LEDs and ticks them all together, without heap
/// allocation. Every LED in the collection must share the same hardware type.
///
/// # Type Parameters
/// * `L` - LED implementation type
/// * `MAX_LEDS` - Maximum number of LEDs this collection can hold
pub struct AuraCollection<L: PwmRgbLed, const MAX_LEDS: usize> {
    leds: [Option<AuraLed<L>>; MAX_LEDS],
}

impl<L: PwmRgbLed, const MAX_LEDS: usize> AuraCollection<L, MAX_LEDS> {
    /// Creates a new empty collection.
    pub fn new() -> Self {
        Self {
            leds: core::array::from_fn(|_| None),
        }
    }

    /// Adds an LED running the given effect.
    ///
    /// # Errors
    /// * `DuplicateLedId` - An LED with this ID already exists
    /// * `LedIdOutOfBounds` - The ID exceeds the collection's capacity
    pub fn add_led(
        &mut self,
        id: LedId,
        led: L,
        mode: AuraMode,
        color: AuraColor,
        brightness_max: u16,
    ) -> Result<(), CollectionError> {
        let idx = id.0;

        if idx >= MAX_LEDS {
            return Err(CollectionError::LedIdOutOfBounds {
                id,
                capacity: MAX_LEDS,
            });
        }

        if self.leds[idx].is_some() {
            return Err(CollectionError::DuplicateLedId(id));
        }

        self.leds[idx] = Some(AuraLed::new(led, mode, color, brightness_max));
        Ok(())
    }

    /// Removes an LED and hands back its hardware.
    ///
    /// # Errors
    /// Returns `InvalidLedId` if the LED does not exist in the collection.
    pub fn remove_led(&mut self, id: LedId) -> Result<L, CollectionError> {
        self.leds
            .get_mut(id.0)
            .and_then(Option::take)
            .map(AuraLed::into_inner)
            .ok_or(CollectionError::InvalidLedId(id))
    }

    /// Routes a command to the targeted LED.
    ///
    /// # Errors
    /// Returns `InvalidLedId` if the LED does not exist in the collection.
    pub fn handle_command(&mut self, command: AuraCommand<LedId>) -> Result<(), CollectionError> {
        self.get_mut(command.led_id)?.handle_action(command.action);
        Ok(())
    }

    /// Advances every LED one tick.
    pub fn tick_all(&mut self) {
        for aura in self.leds.iter_mut().flatten() {
            aura.tick();
        }
    }

    /// Returns the duty values of every LED, in ID order.
    pub fn frame(&self) -> Frame<MAX_LEDS> {
        let mut frame: Frame<MAX_LEDS> = Vec::new();
        for (idx, aura) in self.leds.iter().enumerate() {
            if let Some(aura) = aura {
                // one entry per slot, so capacity is never exceeded
                let _ = frame.push((LedId(idx), aura.state().rgb()));
            }
        }
        frame
    }

    /// Returns the effect state of the specified LED.
    ///
    /// # Errors
    /// Returns `InvalidLedId` if the LED does not exist in the collection.
    pub fn get_state(&self, id: LedId) -> Result<LedState, CollectionError> {
        self.leds
            .get(id.0)
            .and_then(Option::as_ref)
            .map(|aura| *aura.state())
            .ok_or(CollectionError::InvalidLedId(id))
    }

    /// Returns the number of LEDs currently in the collection.
    pub fn len(&self) -> usize {
        self.leds.iter().filter(|s| s.is_some()).count()
    }

    /// Returns true if the collection contains no LEDs.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the collection contains an LED with the given ID.
    pub fn contains(&self, id: LedId) -> bool {
        let idx = id.0;
        idx < MAX_LEDS && self.leds[idx].is_some()
    }

    fn get_mut(&mut self, id: LedId) -> Result<&mut AuraLed<L>, CollectionError> {
        self.leds
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(CollectionError::InvalidLedId(id))
    }
}

impl<L: PwmRgbLed, const MAX_LEDS: usize> Default for AuraCollection<L, MAX_LEDS> {
    fn default() -> Self {
        Self::new()
    }
}
