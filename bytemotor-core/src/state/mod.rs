//! Motor state and the deferred-apply state machine
//!
//! The whole per-motor state fits in one byte ([`MotorState`]). Every
//! mutation on [`Motor`] either pushes the affected signal to hardware
//! immediately or marks the state as not applied, so several changes can be
//! coalesced into a single [`Motor::apply`].

pub mod machine;
pub mod packed;
pub mod power;

pub use machine::{Apply, Motor};
pub use packed::MotorState;
pub use power::{preset_to_power, DEFAULT_POWER, MAX_DUTY, MAX_PRESET};
