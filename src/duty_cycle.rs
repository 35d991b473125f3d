//! Conversion between a duty cycle fraction and the PWMx register value.
//!
//! The chip counts the time the output is *inactive*, so the byte range is inverted:
//! a duty cycle of 1.0 is register value 0x00, 0.0 is 0xFF.

#[allow(unused_imports)]
use micromath::F32Ext;

/// Converts a duty cycle in `0.0..=1.0` to a PWM register value.
///
/// Returns `None` for values outside of that range (including NaN).
pub fn to_register_value(duty_cycle: f32) -> Option<u8> {
    if !(0.0..=1.0).contains(&duty_cycle) {
        return None;
    }

    Some(((1.0 - duty_cycle) * 255.0).ceil() as u8)
}

/// Converts a PWM register value back to a duty cycle, rounded to two decimals.
pub fn from_register_value(value: u8) -> f32 {
    let duty_cycle = 1.0 - f32::from(value) / 255.0;

    (duty_cycle * 100.0).round() / 100.0
}
