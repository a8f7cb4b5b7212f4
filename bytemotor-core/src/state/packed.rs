//! One-byte motor state record
//!
//! Bit layout:
//!
//! ```text
//!   7        6..4    3         2      1          0
//! ┌────────┬───────┬─────────┬──────┬──────────┬────┐
//! │applied │ power │inverted │brake │direction │ on │
//! └────────┴───────┴─────────┴──────┴──────────┴────┘
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::power::{clamp_preset, preset_to_power, DEFAULT_POWER};
use crate::traits::{Brake, Direction};

const ON: u8 = 1 << 0;
const DIRECTION: u8 = 1 << 1;
const BRAKE: u8 = 1 << 2;
const INVERTED: u8 = 1 << 3;
const POWER_SHIFT: u8 = 4;
const POWER_MASK: u8 = 0b0111 << POWER_SHIFT;
const APPLIED: u8 = 1 << 7;

/// Packed per-motor state
///
/// Every byte value is a valid state.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct MotorState(u8);

const _: () = assert!(core::mem::size_of::<MotorState>() == 1);

impl MotorState {
    /// Initial state: off, forward, brake released, default power, not applied
    pub const fn new(polarity_inverted: bool) -> Self {
        let inverted = if polarity_inverted { INVERTED } else { 0 };
        Self((DEFAULT_POWER << POWER_SHIFT) | inverted)
    }

    /// Rebuild a state from its packed byte
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Packed byte
    pub const fn bits(self) -> u8 {
        self.0
    }

    const fn flag(self, mask: u8) -> bool {
        self.0 & mask != 0
    }

    fn set_flag(&mut self, mask: u8, value: bool) {
        if value {
            self.0 |= mask;
        } else {
            self.0 &= !mask;
        }
    }

    /// Check if the motor is commanded to spin
    pub const fn is_on(self) -> bool {
        self.flag(ON)
    }

    pub fn set_on(&mut self, on: bool) {
        self.set_flag(ON, on);
    }

    /// Logical direction, independent of wiring polarity
    pub const fn direction(self) -> Direction {
        Direction::from_bit(self.flag(DIRECTION))
    }

    pub fn set_direction(&mut self, dir: Direction) {
        self.set_flag(DIRECTION, dir.bit());
    }

    pub const fn brake(self) -> Brake {
        Brake::from_bit(self.flag(BRAKE))
    }

    pub fn set_brake(&mut self, brake: Brake) {
        self.set_flag(BRAKE, brake.bit());
    }

    /// Check if the wiring-compensation flag is set
    pub const fn is_polarity_inverted(self) -> bool {
        self.flag(INVERTED)
    }

    pub fn set_polarity_inverted(&mut self, inverted: bool) {
        self.set_flag(INVERTED, inverted);
    }

    /// Stored power preset (0-7)
    pub const fn power(self) -> u8 {
        (self.0 & POWER_MASK) >> POWER_SHIFT
    }

    /// Store a power preset, clamping anything above 7 to 7
    pub fn set_power(&mut self, preset: u8) {
        self.0 = (self.0 & !POWER_MASK) | (clamp_preset(preset) << POWER_SHIFT);
    }

    /// Check if the state has been fully pushed to hardware
    pub const fn is_applied(self) -> bool {
        self.flag(APPLIED)
    }

    pub fn set_applied(&mut self, applied: bool) {
        self.set_flag(APPLIED, applied);
    }

    /// Direction actually signalled to hardware
    pub const fn effective_direction(self) -> Direction {
        let dir = self.direction();
        if self.is_polarity_inverted() {
            dir.opposite()
        } else {
            dir
        }
    }

    /// Duty cycle to drive: zero when off, otherwise the scaled preset
    pub const fn drive_power(self) -> u8 {
        if self.is_on() {
            preset_to_power(self.power())
        } else {
            0
        }
    }
}

impl Default for MotorState {
    fn default() -> Self {
        Self::new(false)
    }
}

impl core::fmt::Debug for MotorState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MotorState")
            .field("on", &self.is_on())
            .field("direction", &self.direction())
            .field("brake", &self.brake())
            .field("polarity_inverted", &self.is_polarity_inverted())
            .field("power", &self.power())
            .field("applied", &self.is_applied())
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MotorState {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "MotorState(on={}, direction={}, brake={}, inverted={}, power={}, applied={})",
            self.is_on(),
            self.direction(),
            self.brake(),
            self.is_polarity_inverted(),
            self.power(),
            self.is_applied()
        );
    }
}
