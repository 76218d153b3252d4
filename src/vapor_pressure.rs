use serde::{Deserialize, Serialize};

use crate::coefficients::{Formulation, ITS90_COEFFICIENTS, WEXLER76_COEFFICIENTS};
use crate::equation::{evaluate, CELSIUS_TO_KELVIN};
use crate::error::*;

/// Saturation vapor pressure over liquid water, ITS-90 formulation.
///
/// Returns NaN wherever the equation is undefined or diverges (NaN
/// input, `t <= -273.15 °C`, overflow).  The value is the direct
/// output of Hardy's formulation, e.g. ≈ 611.21 at 0 °C.
///
/// ```
/// let e = hardy_wexler::vapor_pressure_over_water_its90(0.0);
/// assert!((e - 611.2129106975888).abs() < 1e-6);
/// ```
pub fn vapor_pressure_over_water_its90(temperature_c: f64) -> f64 {
    evaluate(temperature_c, &ITS90_COEFFICIENTS)
}

/// Saturation vapor pressure over liquid water, original Wexler-1976
/// formulation.  Same sentinel rules as
/// [`vapor_pressure_over_water_its90`].
pub fn vapor_pressure_over_water_wexler76(temperature_c: f64) -> f64 {
    evaluate(temperature_c, &WEXLER76_COEFFICIENTS)
}

pub fn vapor_pressure_over_water(temperature_c: f64, formulation: Formulation) -> f64 {
    evaluate(temperature_c, formulation.coefficients())
}

/// Like [`vapor_pressure_over_water`] but reports the undefined
/// sentinel as [`HardyWexlerError::Undefined`].
pub fn try_vapor_pressure_over_water(temperature_c: f64, formulation: Formulation) -> Result<f64> {
    let pressure = vapor_pressure_over_water(temperature_c, formulation);
    if pressure.is_nan() {
        return Err(HardyWexlerError::Undefined { formulation, temperature_c });
    }
    Ok(pressure)
}

// ── Saturation point ────────────────────────────────────────────────

/// A single evaluated point on the saturation curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SaturationPoint {
    pub formulation: Formulation,
    /// Input temperature (°C)
    pub temperature_c: f64,
    /// Absolute temperature the equation ran on (K)
    pub temperature_k: f64,
    /// Saturation vapor pressure, NaN when undefined
    pub pressure: f64,
}

impl SaturationPoint {
    pub fn is_defined(&self) -> bool {
        !self.pressure.is_nan()
    }
}

pub fn saturation_point(temperature_c: f64, formulation: Formulation) -> SaturationPoint {
    SaturationPoint {
        formulation,
        temperature_c,
        temperature_k: temperature_c + CELSIUS_TO_KELVIN,
        pressure: vapor_pressure_over_water(temperature_c, formulation),
    }
}

impl std::fmt::Display for SaturationPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "model = {}", self.formulation)?;
        writeln!(f, "T     = {:.2} °C ({:.2} K)", self.temperature_c, self.temperature_k)?;
        write!(f, "e_s   = {:.6}", self.pressure)
    }
}
