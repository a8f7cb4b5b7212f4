//! Pin I/O abstractions
//!
//! Pins are addressed by number. Bindings carry their pin numbers as
//! compile-time constants and pass them in on every call, so the I/O surface
//! itself is usually a zero-sized handle.

use core::ops::Not;

/// Board pin number
pub type Pin = u8;

/// Digital output level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic 0
    #[default]
    Low,
    /// Logic 1
    High,
}

impl Level {
    /// Check if this is logic 1
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }

    /// Check if this is logic 0
    pub const fn is_low(self) -> bool {
        !self.is_high()
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level.is_high()
    }
}

impl Not for Level {
    type Output = Level;

    fn not(self) -> Self::Output {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

/// Output-only pin I/O surface
///
/// Implementations handle the register manipulation for the specific chip.
/// Writes are best effort and are assumed to succeed; there is no error
/// channel. PWM frequency and resolution are the implementation's concern:
/// `duty` is always on the 0-255 scale.
pub trait PinIo {
    /// Configure a pin for output-only operation
    fn configure_output(&mut self, pin: Pin);

    /// Drive a digital output pin to a level
    fn write_digital(&mut self, pin: Pin, level: Level);

    /// Set the duty cycle of a PWM-capable pin (0 = off, 255 = fully on)
    fn write_pwm(&mut self, pin: Pin, duty: u8);

    /// Drive a pin high
    fn set_high(&mut self, pin: Pin) {
        self.write_digital(pin, Level::High);
    }

    /// Drive a pin low
    fn set_low(&mut self, pin: Pin) {
        self.write_digital(pin, Level::Low);
    }
}

impl<T: PinIo + ?Sized> PinIo for &mut T {
    fn configure_output(&mut self, pin: Pin) {
        (**self).configure_output(pin);
    }

    fn write_digital(&mut self, pin: Pin, level: Level) {
        (**self).write_digital(pin, level);
    }

    fn write_pwm(&mut self, pin: Pin, duty: u8) {
        (**self).write_pwm(pin, duty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct LastWrite {
        digital: Option<(Pin, Level)>,
        pwm: Option<(Pin, u8)>,
    }

    impl PinIo for LastWrite {
        fn configure_output(&mut self, _pin: Pin) {}

        fn write_digital(&mut self, pin: Pin, level: Level) {
            self.digital = Some((pin, level));
        }

        fn write_pwm(&mut self, pin: Pin, duty: u8) {
            self.pwm = Some((pin, duty));
        }
    }

    #[test]
    fn test_level_from_bool() {
        assert_eq!(Level::from(true), Level::High);
        assert_eq!(Level::from(false), Level::Low);
        assert!(bool::from(Level::High));
        assert_eq!(!Level::Low, Level::High);
        assert!(Level::default().is_low());
    }

    #[test]
    fn test_set_high_low_defaults() {
        let mut io = LastWrite::default();

        io.set_high(4);
        assert_eq!(io.digital, Some((4, Level::High)));

        io.set_low(5);
        assert_eq!(io.digital, Some((5, Level::Low)));
    }

    fn drive<P: PinIo>(mut io: P) {
        io.write_pwm(9, 128);
        io.set_high(2);
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut io = LastWrite::default();
        drive(&mut io);
        assert_eq!(io.pwm, Some((9, 128)));
        assert_eq!(io.digital, Some((2, Level::High)));
    }
}
