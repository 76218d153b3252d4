//! # hardy-wexler
//!
//! Saturation vapor pressure of water over a liquid surface from
//! Wexler's equation, in two flavours:
//!
//! * **Wexler 1976**: the original coefficients (IPTS-68)
//! * **ITS-90**: Hardy's 1998 revision
//!
//! plus the Hardy-Wexler correction of a relative-humidity reading taken
//! at a sensor temperature that differs from the ambient temperature.
//!
//! ## Quick example
//!
//! ```
//! use hardy_wexler::{correct_relative_humidity_its90, vapor_pressure_over_water_its90};
//!
//! let e_s = vapor_pressure_over_water_its90(20.0);
//! assert!(e_s > 2300.0 && e_s < 2400.0);
//!
//! // Sensor runs 2 °C warmer than the air it samples
//! let rh = correct_relative_humidity_its90(50.0, 22.0, 20.0);
//! assert!(rh > 50.0);
//! ```
//!
//! ## Undefined results
//!
//! There is no error channel on the core functions: NaN is the single
//! "undefined" marker.  NaN inputs, temperatures at or below absolute
//! zero and numeric overflow all yield NaN, and an infinite vapor
//! pressure is never returned.  Use [`try_vapor_pressure_over_water`]
//! to get a [`HardyWexlerError`] instead.

// ── Internal modules ─────────────────────────────────────────────────
pub mod coefficients;
pub mod equation;
pub mod error;
pub mod humidity;
pub mod vapor_pressure;

// ── Public re-exports ────────────────────────────────────────────────
pub use coefficients::{Coefficients, Formulation, ITS90_COEFFICIENTS, WEXLER76_COEFFICIENTS};
pub use equation::{evaluate, wexler_equation, CELSIUS_TO_KELVIN};
pub use error::{HardyWexlerError, Result};
pub use humidity::{correct_relative_humidity, correct_relative_humidity_its90};
pub use vapor_pressure::{
    saturation_point, try_vapor_pressure_over_water, vapor_pressure_over_water,
    vapor_pressure_over_water_its90, vapor_pressure_over_water_wexler76, SaturationPoint,
};
