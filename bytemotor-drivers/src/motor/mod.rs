//! Motor bindings
//!
//! - Shield: three independent signals (direction, PWM power, brake)
//! - Bridge: two H-bridge inputs encode direction and brake, plus PWM power

pub mod bridge;
pub mod shield;

pub use bridge::{BridgeBinding, BridgeMotor};
pub use shield::{ShieldBinding, ShieldMotor};

use bytemotor_core::MotorState;
use bytemotor_hal::{Pin, PinIo};

/// PWM write shared by both bindings: zero when off, scaled preset otherwise
fn write_power<IO: PinIo>(io: &mut IO, pin: Pin, state: MotorState) {
    io.write_pwm(pin, state.drive_power());
}

/// Compile-time check that a binding's three pins are distinct
const fn distinct_pins(a: Pin, b: Pin, c: Pin) -> bool {
    a != b && b != c && a != c
}
