//! Shield-style motor binding
//!
//! Motor shields (Arduino Motor Shield, Ardumoto and similar) expose one
//! channel as three independent inputs:
//!
//! | Signal    | Pin     | Meaning                           |
//! |-----------|---------|-----------------------------------|
//! | direction | `DIR`   | low = forward, high = reverse     |
//! | power     | `PWM`   | duty cycle 0-255                  |
//! | brake     | `BRAKE` | high = brake engaged              |
//!
//! # Usage
//!
//! ```ignore
//! // Arduino Motor Shield R3, channel A
//! let mut motor: ShieldMotor<BoardPins, 12, 3, 9> = ShieldBinding::motor(BoardPins);
//! motor.setup();
//! motor.set_power(4, Apply::Now);
//! motor.on(Apply::Now);
//! ```

use bytemotor_core::{Motor, MotorBinding, MotorState};
use bytemotor_hal::{Level, PinIo};

use super::{distinct_pins, write_power};

/// Three-signal shield binding
///
/// `INVERTED` sets the initial wiring polarity for motors whose leads are
/// swapped.
#[derive(Debug, Clone)]
pub struct ShieldBinding<IO, const DIR: u8, const PWM: u8, const BRAKE: u8, const INVERTED: bool = false>
{
    io: IO,
}

/// Motor driven through a [`ShieldBinding`]
pub type ShieldMotor<IO, const DIR: u8, const PWM: u8, const BRAKE: u8, const INVERTED: bool = false> =
    Motor<ShieldBinding<IO, DIR, PWM, BRAKE, INVERTED>>;

impl<IO, const DIR: u8, const PWM: u8, const BRAKE: u8, const INVERTED: bool>
    ShieldBinding<IO, DIR, PWM, BRAKE, INVERTED>
{
    const PINS_DISTINCT: () = assert!(
        distinct_pins(DIR, PWM, BRAKE),
        "shield direction, PWM and brake pins must be distinct"
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

impl<IO: PinIo, const DIR: u8, const PWM: u8, const BRAKE: u8, const INVERTED: bool>
    ShieldBinding<IO, DIR, PWM, BRAKE, INVERTED>
{
    /// Create a motor in its initial state on top of this binding
    pub fn motor(io: IO) -> Motor<Self> {
        Motor::new(Self::new(io))
    }
}

impl<IO: PinIo, const DIR: u8, const PWM: u8, const BRAKE: u8, const INVERTED: bool> MotorBinding
    for ShieldBinding<IO, DIR, PWM, BRAKE, INVERTED>
{
    const POLARITY_INVERTED: bool = INVERTED;

    fn setup(&mut self) {
        let () = Self::PINS_DISTINCT;

        self.io.configure_output(DIR);
        self.io.configure_output(BRAKE);
        self.io.configure_output(PWM);
    }

    fn apply_direction(&mut self, state: MotorState) {
        let level = Level::from(state.effective_direction().bit());
        self.io.write_digital(DIR, level);
    }

    fn apply_power(&mut self, state: MotorState) {
        write_power(&mut self.io, PWM, state);
    }

    fn apply_brake(&mut self, state: MotorState) {
        self.io.write_digital(BRAKE, Level::from(state.brake().bit()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytemotor_core::{preset_to_power, Apply, Brake, Direction};
    use bytemotor_hal::{MockPins, PinOp};
    use proptest::prelude::*;

    const DIR: u8 = 12;
    const PWM: u8 = 3;
    const BRAKE: u8 = 9;

    type TestMotor = ShieldMotor<MockPins, DIR, PWM, BRAKE>;
    type SwappedMotor = ShieldMotor<MockPins, DIR, PWM, BRAKE, true>;

    fn pins(motor: &TestMotor) -> &MockPins {
        motor.binding().io()
    }

    fn ready() -> TestMotor {
        let mut motor = TestMotor::new(ShieldBinding::new(MockPins::new()));
        motor.setup();
        motor.binding_mut().io_mut().clear_log();
        motor
    }

    #[test]
    fn test_setup_configures_outputs() {
        let mut motor: TestMotor = ShieldBinding::motor(MockPins::new());
        motor.setup();

        let pins = motor.binding().io();
        assert!(pins.is_output(DIR));
        assert!(pins.is_output(PWM));
        assert!(pins.is_output(BRAKE));
        assert_eq!(
            pins.log(),
            &[
                PinOp::ConfigureOutput(DIR),
                PinOp::ConfigureOutput(BRAKE),
                PinOp::ConfigureOutput(PWM),
            ]
        );
        // Nothing driven yet
        assert_eq!(pins.duty(PWM), None);
    }

    #[test]
    fn test_initial_polarity() {
        let motor = TestMotor::new(ShieldBinding::new(MockPins::new()));
        assert!(!motor.is_polarity_inverted());

        let swapped = SwappedMotor::new(ShieldBinding::new(MockPins::new()));
        assert!(swapped.is_polarity_inverted());
    }

    #[test]
    fn test_reverse_scenario() {
        let mut motor = ready();

        motor.set_power(4, Apply::Now);
        motor.set_direction(Direction::Reverse, Apply::Now);
        motor.on(Apply::Now);

        let pins = pins(&motor);
        assert_eq!(pins.level(DIR), Some(Level::High));
        assert_eq!(pins.duty(PWM), Some(preset_to_power(4)));
        assert_eq!(pins.level(BRAKE), Some(Level::Low));
        assert!(motor.is_applied());
        assert_eq!(pins.unconfigured_writes(), 0);
    }

    #[test]
    fn test_reverse_scenario_swapped_leads() {
        let mut motor = SwappedMotor::new(ShieldBinding::new(MockPins::new()));
        motor.setup();

        motor.set_power(4, Apply::Now);
        motor.set_direction(Direction::Reverse, Apply::Now);
        motor.on(Apply::Now);

        let pins = motor.binding().io();
        assert_eq!(pins.level(DIR), Some(Level::Low));
        assert_eq!(pins.duty(PWM), Some(preset_to_power(4)));
        assert_eq!(pins.level(BRAKE), Some(Level::Low));
    }

    #[test]
    fn test_on_write_order() {
        let mut motor = ready();

        motor.on(Apply::Now);

        assert_eq!(
            pins(&motor).log(),
            &[
                PinOp::Digital(DIR, Level::Low),
                PinOp::Pwm(PWM, 255),
                PinOp::Digital(BRAKE, Level::Low),
            ]
        );
    }

    #[test]
    fn test_off_keeps_preset() {
        let mut motor = ready();
        motor.set_power(6, Apply::Now);
        motor.on(Apply::Now);

        motor.off(Apply::Now);
        assert_eq!(pins(&motor).duty(PWM), Some(0));
        assert_eq!(motor.power(), 6);

        motor.on(Apply::Now);
        assert_eq!(pins(&motor).duty(PWM), Some(preset_to_power(6)));
    }

    #[test]
    fn test_brake_line() {
        let mut motor = ready();
        motor.on(Apply::Now);

        motor.set_brake(Brake::On, Apply::Now);
        assert_eq!(pins(&motor).level(BRAKE), Some(Level::High));
        // Direction and power untouched
        assert_eq!(pins(&motor).level(DIR), Some(Level::Low));
        assert_eq!(pins(&motor).duty(PWM), Some(255));

        motor.set_brake(Brake::Off, Apply::Now);
        assert_eq!(pins(&motor).level(BRAKE), Some(Level::Low));
    }

    #[test]
    fn test_deferred_then_single_apply() {
        let mut motor = ready();

        motor.set_power(2, Apply::Later);
        motor.reverse_direction(Apply::Later);
        motor.on(Apply::Later);
        assert!(pins(&motor).log().is_empty());
        assert!(!motor.is_applied());

        motor.apply();
        assert_eq!(
            pins(&motor).log(),
            &[
                PinOp::Digital(DIR, Level::High),
                PinOp::Pwm(PWM, preset_to_power(2)),
                PinOp::Digital(BRAKE, Level::Low),
            ]
        );

        motor.binding_mut().io_mut().clear_log();
        motor.apply();
        assert!(pins(&motor).log().is_empty());
    }

    #[test]
    fn test_polarity_change_writes_direction_only() {
        let mut motor = ready();
        motor.on(Apply::Now);
        motor.binding_mut().io_mut().clear_log();

        motor.reverse_polarity(true, Apply::Now);
        assert_eq!(pins(&motor).log(), &[PinOp::Digital(DIR, Level::High)]);
        assert_eq!(motor.direction(), Direction::Forward);
    }

    #[test]
    fn test_apply_before_setup_is_visible() {
        let mut motor = TestMotor::new(ShieldBinding::new(MockPins::new()));

        motor.on(Apply::Now);
        assert_eq!(pins(&motor).unconfigured_writes(), 3);
    }

    proptest! {
        #[test]
        fn test_pwm_follows_preset(preset in any::<u8>()) {
            let mut motor = ready();
            motor.set_power(preset, Apply::Later);
            motor.on(Apply::Now);
            prop_assert_eq!(pins(&motor).duty(PWM), Some(preset_to_power(preset.min(7))));
        }
    }
}
