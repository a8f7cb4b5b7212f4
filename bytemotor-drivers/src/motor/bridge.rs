//! Direct H-bridge motor binding
//!
//! For drivers like the L293D or L298N wired straight to the
//! microcontroller. There is no brake line; the two bridge inputs encode
//! both direction and brake:
//!
//! | IN1 | IN2 | Function        |
//! |-----|-----|-----------------|
//! | H   | L   | Forward         |
//! | L   | H   | Reverse         |
//! | H   | H   | Brake           |
//!
//! The enable input takes the PWM power signal.
//!
//! Engaging the brake overwrites the direction encoding. Releasing it writes
//! nothing: the inputs stay high until direction is written again.
//! [`Motor::apply`] always writes direction before brake, and
//! [`Motor::on`] both releases the brake and rewrites direction, so either
//! restores a drivable encoding.

use bytemotor_core::{Direction, Motor, MotorBinding, MotorState};
use bytemotor_hal::{Level, PinIo};

use super::{distinct_pins, write_power};

/// Two-input H-bridge binding
///
/// `INVERTED` sets the initial wiring polarity for motors whose leads are
/// swapped.
#[derive(Debug, Clone)]
pub struct BridgeBinding<IO, const IN1: u8, const IN2: u8, const PWM: u8, const INVERTED: bool = false>
{
    io: IO,
}

/// Motor driven through a [`BridgeBinding`]
pub type BridgeMotor<IO, const IN1: u8, const IN2: u8, const PWM: u8, const INVERTED: bool = false> =
    Motor<BridgeBinding<IO, IN1, IN2, PWM, INVERTED>>;

impl<IO, const IN1: u8, const IN2: u8, const PWM: u8, const INVERTED: bool>
    BridgeBinding<IO, IN1, IN2, PWM, INVERTED>
{
    const PINS_DISTINCT: () = assert!(
        distinct_pins(IN1, IN2, PWM),
        "bridge input and enable pins must be distinct"
    );

    /// Create a binding writing through `io`
    pub const fn new(io: IO) -> Self {
        Self { io }
    }

    pub fn io(&self) -> &IO {
        &self.io
    }

    pub fn io_mut(&mut self) -> &mut IO {
        &mut self.io
    }

    pub fn into_io(self) -> IO {
        self.io
    }
}

impl<IO: PinIo, const IN1: u8, const IN2: u8, const PWM: u8, const INVERTED: bool>
    BridgeBinding<IO, IN1, IN2, PWM, INVERTED>
{
    /// Create a motor in its initial state on top of this binding
    pub fn motor(io: IO) -> Motor<Self> {
        Motor::new(Self::new(io))
    }
}

impl<IO: PinIo, const IN1: u8, const IN2: u8, const PWM: u8, const INVERTED: bool> MotorBinding
    for BridgeBinding<IO, IN1, IN2, PWM, INVERTED>
{
    const POLARITY_INVERTED: bool = INVERTED;

    fn setup(&mut self) {
        let () = Self::PINS_DISTINCT;

        self.io.configure_output(IN1);
        self.io.configure_output(IN2);
        self.io.configure_output(PWM);
    }

    fn apply_direction(&mut self, state: MotorState) {
        let forward = state.effective_direction() == Direction::Forward;
        self.io.write_digital(IN1, Level::from(forward));
        self.io.write_digital(IN2, Level::from(!forward));
    }

    fn apply_power(&mut self, state: MotorState) {
        write_power(&mut self.io, PWM, state);
    }

    fn apply_brake(&mut self, state: MotorState) {
        if state.brake().is_on() {
            self.io.set_high(IN1);
            self.io.set_high(IN2);
        }
    }
}
