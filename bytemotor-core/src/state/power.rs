//! Power preset scaling
//!
//! Callers choose a coarse 3-bit preset; bindings write a full-range 8-bit
//! duty cycle.

/// Highest power preset
pub const MAX_PRESET: u8 = 7;

/// Duty cycle written for the highest preset
pub const MAX_DUTY: u8 = 255;

/// Preset a new motor starts with
pub const DEFAULT_POWER: u8 = MAX_PRESET;

/// Clamp a preset into 0..=7
pub const fn clamp_preset(preset: u8) -> u8 {
    if preset > MAX_PRESET {
        MAX_PRESET
    } else {
        preset
    }
}

/// Map a preset linearly onto the 0-255 duty range
///
/// Inputs above 7 are treated as 7. Preset 0 is 0 and preset 7 is 255.
pub const fn preset_to_power(preset: u8) -> u8 {
    let preset = clamp_preset(preset) as u16;
    (preset * MAX_DUTY as u16 / MAX_PRESET as u16) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(preset_to_power(0), 0);
        assert_eq!(preset_to_power(MAX_PRESET), MAX_DUTY);
    }

    #[test]
    fn test_table() {
        let table: [u8; 8] = core::array::from_fn(|p| preset_to_power(p as u8));
        assert_eq!(table, [0, 36, 72, 109, 145, 182, 218, 255]);
    }

    #[test]
    fn test_clamp_preset() {
        assert_eq!(clamp_preset(3), 3);
        assert_eq!(clamp_preset(8), 7);
        assert_eq!(clamp_preset(u8::MAX), 7);
    }

    proptest! {
        #[test]
        fn test_out_of_range_is_max(preset in 7u8..=u8::MAX) {
            prop_assert_eq!(preset_to_power(preset), MAX_DUTY);
        }

        #[test]
        fn test_monotonic(a in any::<u8>(), b in any::<u8>()) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(preset_to_power(lo) <= preset_to_power(hi));
        }
    }
}
