//! Hardware abstraction traits
//!
//! These traits define the interface between the motor state machine
//! and pin-topology specific bindings.

pub mod motor;

pub use motor::{Brake, Direction, InvalidLevel, MotorBinding};
