//! bytemotor Hardware Abstraction Layer
//!
//! This crate defines the pin I/O surface the motor bindings drive. A board
//! support crate implements [`PinIo`] once for its GPIO/PWM peripherals, and
//! every motor binding on that board writes through it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (declares motors)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  bytemotor-core (Motor state machine)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  bytemotor-drivers (shield / bridge)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  bytemotor-hal (this crate - PinIo)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::PinIo`] - configure outputs, digital writes, PWM writes
//!
//! With the `mock` feature, [`mock::MockPins`] provides a recording
//! implementation for host-side tests.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod gpio;
#[cfg(feature = "mock")]
pub mod mock;

// Re-export key items at crate root for convenience
pub use gpio::{Level, Pin, PinIo};
#[cfg(feature = "mock")]
pub use mock::{MockPins, PinOp};
