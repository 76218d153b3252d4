use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HardyWexlerError;

// ── Coefficient sets ────────────────────────────────────────────────

/// The eight coefficients `g0..g7` of Wexler's vapor-pressure equation.
///
/// `g0..g6` weight the power series `T^-2 .. T^4`, `g7` weights `ln T`
/// (T in kelvin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients(pub [f64; 8]);

impl Coefficients {
    pub const fn new(g: [f64; 8]) -> Self {
        Self(g)
    }

    /// Power-series coefficients `g0..g6`.
    pub fn series(&self) -> &[f64] {
        &self.0[..7]
    }

    /// Coefficient of the `ln T` term.
    pub fn log_term(&self) -> f64 {
        self.0[7]
    }
}

/// Wexler, A., 1976. *Vapor Pressure Formulation for Water in Range 0 to
/// 100 °C. A Revision*, J. Res. NBS 80A, 775-785 (IPTS-68 scale).
pub const WEXLER76_COEFFICIENTS: Coefficients = Coefficients::new([
    -2.9912729e3,
    -6.0170128e3,
    1.887643854e1,
    -2.8354721e-2,
    1.7838301e-5,
    -8.4150417e-10,
    4.4412543e-13,
    2.858487,
]);

/// Hardy, B., 1998. *ITS-90 Formulations for Vapor Pressure, Frostpoint
/// Temperature, Dewpoint Temperature, and Enhancement Factors in the
/// Range -100 to +100 °C*.
pub const ITS90_COEFFICIENTS: Coefficients = Coefficients::new([
    -2.8365744e3,
    -6.028076559e3,
    1.954263612e1,
    -2.737830188e-2,
    1.6261698e-5,
    7.0229056e-10,
    -1.8680009e-13,
    2.7150305,
]);

// ── Formulation ─────────────────────────────────────────────────────

/// Which historical derivation of the equation to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formulation {
    /// Original Wexler (1976) coefficients.
    Wexler76,
    /// Hardy (1998) coefficients on the ITS-90 temperature scale.
    Its90,
}

impl Formulation {
    pub const ALL: [Formulation; 2] = [Formulation::Wexler76, Formulation::Its90];

    pub fn coefficients(self) -> &'static Coefficients {
        match self {
            Formulation::Wexler76 => &WEXLER76_COEFFICIENTS,
            Formulation::Its90 => &ITS90_COEFFICIENTS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Formulation::Wexler76 => "wexler76",
            Formulation::Its90 => "its90",
        }
    }
}

impl fmt::Display for Formulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Formulation {
    type Err = HardyWexlerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], "").as_str() {
            "wexler76" | "wexler1976" | "wexler" => Ok(Formulation::Wexler76),
            "its90" | "hardy" | "hardy98" => Ok(Formulation::Its90),
            _ => Err(HardyWexlerError::UnknownFormulation(s.to_string())),
        }
    }
}
