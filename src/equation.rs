//! Wexler's saturation vapor-pressure equation
//!
//! `ln e_s = Σ g_i · T^(i-2)  (i = 0..6)  +  g_7 · ln T`
//!
//! with `T` the absolute temperature in kelvin.

use crate::coefficients::Coefficients;

/// Offset between the Celsius and kelvin scales.
pub const CELSIUS_TO_KELVIN: f64 = 273.15;

/// Evaluate the equation at a temperature given in **°C**.
pub fn evaluate(temperature_c: f64, coefficients: &Coefficients) -> f64 {
    wexler_equation(temperature_c + CELSIUS_TO_KELVIN, coefficients)
}

/// Evaluate the equation at an absolute temperature (K).
///
/// Degenerate inputs (`T <= 0`, NaN, overflow) are not special-cased:
/// they run through the float pipeline and only the final value is
/// checked.  Any non-finite result is returned as NaN, never as ±inf.
pub fn wexler_equation(temperature_k: f64, coefficients: &Coefficients) -> f64 {
    let series = coefficients
        .series()
        .iter()
        .zip(-2i32..)
        .fold(0.0_f64, |acc, (g, exponent)| {
            acc + g * temperature_k.powf(f64::from(exponent))
        });
    let log_term = coefficients.log_term() * temperature_k.ln();

    collapse_non_finite((series + log_term).exp(), temperature_k)
}

// ── Sentinel ─────────────────────────────────────────────────────────

fn collapse_non_finite(raw: f64, temperature_k: f64) -> f64 {
    if raw.is_finite() {
        return raw;
    }
    log::trace!("wexler equation diverged at T = {temperature_k} K (raw = {raw}), returning NaN");
    f64::NAN
}
