//! Recording pin surface for host-side tests
//!
//! [`MockPins`] remembers the last level and duty written to each pin, which
//! pins were configured as outputs, and a bounded log of every operation.
//! Writes to a pin that was never configured are counted rather than
//! rejected, so tests can assert that `setup()` ran first.

use heapless::Vec;

use crate::gpio::{Level, Pin, PinIo};

/// Number of addressable pins
pub const MAX_PINS: usize = 64;

/// Operations kept in the log before new ones are dropped
pub const LOG_CAPACITY: usize = 64;

/// One recorded pin operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinOp {
    /// Pin configured as output
    ConfigureOutput(Pin),
    /// Digital level written
    Digital(Pin, Level),
    /// PWM duty written
    Pwm(Pin, u8),
}

/// Recording [`PinIo`] implementation
///
/// Pin numbers must be below [`MAX_PINS`].
#[derive(Debug, Clone)]
pub struct MockPins {
    outputs: u64,
    levels: [Option<Level>; MAX_PINS],
    duties: [Option<u8>; MAX_PINS],
    log: Vec<PinOp, LOG_CAPACITY>,
    unconfigured_writes: u16,
}

impl Default for MockPins {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPins {
    /// Create a surface with no pins configured
    pub const fn new() -> Self {
        Self {
            outputs: 0,
            levels: [None; MAX_PINS],
            duties: [None; MAX_PINS],
            log: Vec::new(),
            unconfigured_writes: 0,
        }
    }

    /// Check if a pin has been configured as output
    pub fn is_output(&self, pin: Pin) -> bool {
        self.outputs & (1 << pin) != 0
    }

    /// Last digital level written to a pin
    pub fn level(&self, pin: Pin) -> Option<Level> {
        self.levels[pin as usize]
    }

    /// Last PWM duty written to a pin
    pub fn duty(&self, pin: Pin) -> Option<u8> {
        self.duties[pin as usize]
    }

    /// Recorded operations, oldest first
    pub fn log(&self) -> &[PinOp] {
        &self.log
    }

    /// Forget recorded operations, keeping pin levels and configuration
    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    /// Number of writes to pins that were not configured as outputs
    pub fn unconfigured_writes(&self) -> u16 {
        self.unconfigured_writes
    }

    fn record(&mut self, op: PinOp) {
        // Full log: newest operations are dropped
        let _ = self.log.push(op);
    }

    fn check_configured(&mut self, pin: Pin) {
        if !self.is_output(pin) {
            self.unconfigured_writes = self.unconfigured_writes.saturating_add(1);
        }
    }
}

impl PinIo for MockPins {
    fn configure_output(&mut self, pin: Pin) {
        assert!((pin as usize) < MAX_PINS, "pin {} out of range", pin);
        self.outputs |= 1 << pin;
        self.record(PinOp::ConfigureOutput(pin));
    }

    fn write_digital(&mut self, pin: Pin, level: Level) {
        self.check_configured(pin);
        self.levels[pin as usize] = Some(level);
        self.record(PinOp::Digital(pin, level));
    }

    fn write_pwm(&mut self, pin: Pin, duty: u8) {
        self.check_configured(pin);
        self.duties[pin as usize] = Some(duty);
        self.record(PinOp::Pwm(pin, duty));
    }
}
