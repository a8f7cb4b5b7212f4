//! Motor binding trait
//!
//! A binding maps the three abstract actuation operations (direction, power,
//! brake) onto one physical pin topology. The state machine in
//! [`crate::state`] decides *when* each signal is pushed; the binding decides
//! *how*.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::state::MotorState;

/// Logical rotation direction, before polarity compensation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Signalled as a low level
    #[default]
    Forward,
    /// Signalled as a high level
    Reverse,
}

impl Direction {
    /// Get the opposite direction
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }

    /// Signal level for this direction (true = high)
    pub const fn bit(self) -> bool {
        matches!(self, Direction::Reverse)
    }

    /// Direction for a signal level
    pub const fn from_bit(high: bool) -> Self {
        if high {
            Direction::Reverse
        } else {
            Direction::Forward
        }
    }
}

/// Brake state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Brake {
    /// Brake released (low)
    #[default]
    Off,
    /// Brake engaged (high)
    On,
}

impl Brake {
    /// Signal level for this brake state (true = high)
    pub const fn bit(self) -> bool {
        matches!(self, Brake::On)
    }

    /// Brake state for a signal level
    pub const fn from_bit(high: bool) -> Self {
        if high {
            Brake::On
        } else {
            Brake::Off
        }
    }

    /// Check if the brake is engaged
    pub const fn is_on(self) -> bool {
        self.bit()
    }
}

/// Raw level byte was neither 0 nor 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidLevel(pub u8);

impl core::fmt::Display for InvalidLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "invalid level {} (expected 0 or 1)", self.0)
    }
}

impl TryFrom<u8> for Direction {
    type Error = InvalidLevel;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Direction::Forward),
            1 => Ok(Direction::Reverse),
            other => Err(InvalidLevel(other)),
        }
    }
}

impl TryFrom<u8> for Brake {
    type Error = InvalidLevel;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Brake::Off),
            1 => Ok(Brake::On),
            other => Err(InvalidLevel(other)),
        }
    }
}

/// Trait for motor pin bindings
///
/// Implementations own whatever handle they need to reach the pins, but
/// never store pin numbers: those are compile-time constants of the
/// implementing type.
///
/// Each `apply_*` method reads the given state and writes only the signal it
/// is named for.
pub trait MotorBinding {
    /// Wiring polarity the motor starts with
    ///
    /// Set this when the motor leads are known to be swapped. It can still be
    /// changed at runtime with [`crate::Motor::reverse_polarity`].
    const POLARITY_INVERTED: bool = false;

    /// Configure all owned pins as outputs
    ///
    /// Must be called exactly once, before any `apply_*` call.
    fn setup(&mut self);

    /// Write the effective (polarity-corrected) direction
    fn apply_direction(&mut self, state: MotorState);

    /// Write the drive power (zero when the motor is off)
    fn apply_power(&mut self, state: MotorState);

    /// Write the brake signal
    fn apply_brake(&mut self, state: MotorState);
}
