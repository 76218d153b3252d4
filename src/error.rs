use thiserror::Error;

use crate::coefficients::Formulation;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HardyWexlerError {
    /// A formulation name that is neither `wexler76` nor `its90`.
    #[error("Unknown formulation: {0}")]
    UnknownFormulation(String),

    /// The equation produced the undefined sentinel (NaN) for this input.
    #[error("Vapor pressure undefined for {formulation} at {temperature_c} °C")]
    Undefined {
        formulation: Formulation,
        temperature_c: f64,
    },
}

pub type Result<T> = std::result::Result<T, HardyWexlerError>;
