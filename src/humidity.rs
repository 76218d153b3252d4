use crate::coefficients::Formulation;
use crate::vapor_pressure::{vapor_pressure_over_water, vapor_pressure_over_water_its90};

/// Hardy-Wexler correction of a relative-humidity reading taken at the
/// sensor temperature to the ambient temperature:
///
/// `RH_amb = RH_sensor · e_s(T_sensor) / e_s(T_ambient)`
///
/// The humidity keeps the sensor's convention (fraction or percent).
/// No sentinel handling beyond IEEE arithmetic: NaN propagates, and a
/// zero ambient pressure gives ±inf.
pub fn correct_relative_humidity_its90(
    sensor_rh: f64,
    temp_sensor_c: f64,
    temp_ambient_c: f64,
) -> f64 {
    sensor_rh * vapor_pressure_over_water_its90(temp_sensor_c)
        / vapor_pressure_over_water_its90(temp_ambient_c)
}

/// [`correct_relative_humidity_its90`] with a selectable formulation.
pub fn correct_relative_humidity(
    sensor_rh: f64,
    temp_sensor_c: f64,
    temp_ambient_c: f64,
    formulation: Formulation,
) -> f64 {
    sensor_rh * vapor_pressure_over_water(temp_sensor_c, formulation)
        / vapor_pressure_over_water(temp_ambient_c, formulation)
}
