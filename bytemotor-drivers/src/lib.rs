//! Motor binding implementations
//!
//! This crate provides concrete implementations of the
//! [`MotorBinding`](bytemotor_core::MotorBinding) trait for the two common
//! ways a DC motor driver is wired to a microcontroller:
//!
//! - Shield-style drivers (direction, PWM and brake lines)
//! - Bare H-bridges (two complementary inputs plus PWM enable)
//!
//! Pin numbers are const generic parameters, so a binding only stores its
//! pin I/O handle.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod motor;

pub use motor::{BridgeBinding, BridgeMotor, ShieldBinding, ShieldMotor};
