use approx::assert_relative_eq;
use hardy_wexler::{
    correct_relative_humidity, correct_relative_humidity_its90, vapor_pressure_over_water_its90,
    Formulation,
};

// ═══════════════════════════════════════════════════════════════════
//  Hardy-Wexler RH correction
// ═══════════════════════════════════════════════════════════════════

#[test]
fn nan_everywhere_is_undefined() {
    assert!(correct_relative_humidity_its90(f64::NAN, f64::NAN, f64::NAN).is_nan());
}

#[test]
fn any_nan_input_propagates() {
    assert!(correct_relative_humidity_its90(f64::NAN, 20.0, 20.0).is_nan());
    assert!(correct_relative_humidity_its90(50.0, f64::NAN, 20.0).is_nan());
    assert!(correct_relative_humidity_its90(50.0, 20.0, f64::NAN).is_nan());
}

#[test]
fn equal_temperatures_leave_reading_unchanged() {
    for rh in [0.0, 0.35, 50.0, 100.0] {
        let corrected = correct_relative_humidity_its90(rh, 18.5, 18.5);
        assert_relative_eq!(corrected, rh, max_relative = 1e-12);
    }
}

#[test]
fn warmer_sensor_raises_ambient_humidity() {
    // Sensor 2 °C above ambient: e_s(22) / e_s(20) ≈ 1.1308
    let rh = correct_relative_humidity_its90(50.0, 22.0, 20.0);
    assert!((rh - 56.54).abs() < 0.01, "RH = {rh:.4}");
}

#[test]
fn colder_sensor_lowers_ambient_humidity() {
    let rh = correct_relative_humidity_its90(0.8, 15.0, 25.0);
    assert!(rh < 0.8, "RH = {rh:.4}");
    assert!(rh > 0.0, "RH = {rh:.4}");
}

#[test]
fn keeps_sensor_convention() {
    // fraction in → fraction out, percent in → percent out
    let fraction = correct_relative_humidity_its90(0.42, 30.0, 24.0);
    let percent = correct_relative_humidity_its90(42.0, 30.0, 24.0);
    assert_relative_eq!(percent, fraction * 100.0, max_relative = 1e-12);
}

#[test]
fn composition_matches_vapor_pressure_ratio() {
    let expected = 65.0 * vapor_pressure_over_water_its90(12.0) / vapor_pressure_over_water_its90(-5.0);
    let got = correct_relative_humidity_its90(65.0, 12.0, -5.0);
    assert_eq!(got.to_bits(), expected.to_bits());
}

#[test]
fn zero_ambient_pressure_is_not_collapsed() {
    // e_s(-273.15 °C) underflows to 0, the division yields +inf
    let rh = correct_relative_humidity_its90(50.0, 20.0, -273.15);
    assert_eq!(rh, f64::INFINITY);
}

#[test]
fn undefined_ambient_pressure_propagates() {
    assert!(correct_relative_humidity_its90(50.0, 20.0, -300.0).is_nan());
}

// ═══════════════════════════════════════════════════════════════════
//  Selectable formulation
// ═══════════════════════════════════════════════════════════════════

#[test]
fn its90_selection_matches_dedicated_function() {
    let a = correct_relative_humidity(47.0, 26.0, 21.0, Formulation::Its90);
    let b = correct_relative_humidity_its90(47.0, 26.0, 21.0);
    assert_eq!(a.to_bits(), b.to_bits());
}

#[test]
fn formulations_agree_closely() {
    let its = correct_relative_humidity(47.0, 26.0, 21.0, Formulation::Its90);
    let wex = correct_relative_humidity(47.0, 26.0, 21.0, Formulation::Wexler76);
    assert_relative_eq!(its, wex, max_relative = 1e-3);
}
