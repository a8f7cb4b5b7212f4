//! Deferred-apply motor state machine
//!
//! [`Motor`] owns the packed state and a binding. Each mutator takes an
//! [`Apply`] mode:
//!
//! - [`Apply::Now`] writes the affected signal through the binding straight
//!   away.
//! - [`Apply::Later`] only records the change and clears the applied flag;
//!   a later [`Motor::apply`] pushes direction, power and brake in one go.
//!
//! ```ignore
//! let mut motor = Motor::new(binding);
//! motor.setup();
//!
//! motor.set_power(4, Apply::Later);
//! motor.set_direction(Direction::Reverse, Apply::Later);
//! motor.on(Apply::Later);
//! motor.apply(); // direction, power, brake
//! ```

use super::packed::MotorState;
use crate::traits::{Brake, Direction, MotorBinding};

/// When a mutation reaches the hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Apply {
    /// Write the affected signal immediately
    #[default]
    Now,
    /// Mark the state dirty and wait for [`Motor::apply`]
    Later,
}

/// A DC motor driven through a binding
pub struct Motor<B: MotorBinding> {
    state: MotorState,
    binding: B,
}

impl<B: MotorBinding> Motor<B> {
    /// Create a motor in its initial state
    ///
    /// Nothing is written until [`Motor::setup`] and the first apply.
    pub fn new(binding: B) -> Self {
        Self {
            state: MotorState::new(B::POLARITY_INVERTED),
            binding,
        }
    }

    /// Configure the binding's pins as outputs
    ///
    /// Call exactly once, before any other operation that writes.
    pub fn setup(&mut self) {
        self.binding.setup();
    }

    /// Start the motor, releasing the brake
    ///
    /// With [`Apply::Now`] all three signals are pushed and the state is
    /// fully applied afterwards.
    pub fn on(&mut self, apply: Apply) {
        self.state.set_on(true);
        self.state.set_brake(Brake::Off);
        match apply {
            Apply::Now => self.push_all(),
            Apply::Later => self.state.set_applied(false),
        }
    }

    /// Stop the motor
    ///
    /// Only the power signal matters while stopped, so [`Apply::Now`] writes
    /// zero power and nothing else. The stored preset is kept.
    pub fn off(&mut self, apply: Apply) {
        self.state.set_on(false);
        self.commit(apply, Self::push_power);
    }

    /// Set the power preset; values above 7 are stored as 7
    pub fn set_power(&mut self, preset: u8, apply: Apply) {
        self.state.set_power(preset);
        self.commit(apply, Self::push_power);
    }

    /// Stored power preset (0-7), not the scaled duty
    pub fn power(&self) -> u8 {
        self.state.power()
    }

    pub fn set_direction(&mut self, dir: Direction, apply: Apply) {
        self.state.set_direction(dir);
        self.commit(apply, Self::push_direction);
    }

    /// Logical direction, before polarity compensation
    pub fn direction(&self) -> Direction {
        self.state.direction()
    }

    /// Flip the logical direction
    pub fn reverse_direction(&mut self, apply: Apply) {
        self.state.set_direction(self.state.direction().opposite());
        self.commit(apply, Self::push_direction);
    }

    pub fn set_brake(&mut self, brake: Brake, apply: Apply) {
        self.state.set_brake(brake);
        self.commit(apply, Self::push_brake);
    }

    pub fn brake(&self) -> Brake {
        self.state.brake()
    }

    /// Set the wiring-compensation flag
    ///
    /// Polarity only affects the direction signal, so that is all
    /// [`Apply::Now`] writes.
    pub fn reverse_polarity(&mut self, invert: bool, apply: Apply) {
        self.state.set_polarity_inverted(invert);
        self.commit(apply, Self::push_direction);
    }

    pub fn is_polarity_inverted(&self) -> bool {
        self.state.is_polarity_inverted()
    }

    pub fn is_on(&self) -> bool {
        self.state.is_on()
    }

    /// Check if every field is currently reflected in hardware
    pub fn is_applied(&self) -> bool {
        self.state.is_applied()
    }

    /// Direction actually signalled to hardware
    pub fn effective_direction(&self) -> Direction {
        self.state.effective_direction()
    }

    /// Duty cycle the binding writes for the current state
    pub fn drive_power(&self) -> u8 {
        self.state.drive_power()
    }

    /// Push pending changes to hardware
    ///
    /// Does nothing if the state is already applied. Otherwise writes
    /// direction, then power, then brake.
    pub fn apply(&mut self) {
        if self.state.is_applied() {
            #[cfg(feature = "defmt")]
            defmt::trace!("motor apply skipped: {}", self.state);
            return;
        }
        self.push_all();
    }

    /// Snapshot of the packed state
    pub fn state(&self) -> MotorState {
        self.state
    }

    pub fn binding(&self) -> &B {
        &self.binding
    }

    pub fn binding_mut(&mut self) -> &mut B {
        &mut self.binding
    }

    /// Consume the motor, returning its binding
    pub fn into_binding(self) -> B {
        self.binding
    }

    fn commit(&mut self, apply: Apply, push: fn(&mut Self)) {
        match apply {
            Apply::Now => push(self),
            Apply::Later => self.state.set_applied(false),
        }
    }

    fn push_direction(&mut self) {
        self.binding.apply_direction(self.state);
    }

    fn push_power(&mut self) {
        self.binding.apply_power(self.state);
    }

    fn push_brake(&mut self) {
        self.binding.apply_brake(self.state);
    }

    fn push_all(&mut self) {
        self.push_direction();
        self.push_power();
        self.push_brake();
        self.state.set_applied(true);

        #[cfg(feature = "defmt")]
        defmt::trace!("motor applied: {}", self.state);
    }
}

impl<B: MotorBinding + core::fmt::Debug> core::fmt::Debug for Motor<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Motor")
            .field("state", &self.state)
            .field("binding", &self.binding)
            .finish()
    }
}
