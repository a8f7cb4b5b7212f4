//! Board-agnostic core logic for bytemotor
//!
//! This crate contains everything about a DC motor that does not depend on
//! how it is wired:
//!
//! - The packed one-byte motor state record
//! - The deferred-apply motor state machine
//! - Preset to duty-cycle power scaling
//! - The binding trait that concrete pin topologies implement

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod state;
pub mod traits;

pub use state::{preset_to_power, Apply, Motor, MotorState, DEFAULT_POWER, MAX_DUTY, MAX_PRESET};
pub use traits::{Brake, Direction, InvalidLevel, MotorBinding};
