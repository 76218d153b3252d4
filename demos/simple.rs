use hardy_wexler::{saturation_point, try_vapor_pressure_over_water, Formulation};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Saturation curve, both formulations ────────────────────────
    println!("  T (°C)    Wexler-76        ITS-90");
    for t in [-50.0, -20.0, 0.0, 20.0, 50.0, 100.0] {
        let wex = saturation_point(t, Formulation::Wexler76);
        let its = saturation_point(t, Formulation::Its90);
        println!("{t:8.1}  {:12.4}  {:12.4}", wex.pressure, its.pressure);
    }

    // ── A single point, printed in full ────────────────────────────
    println!("\n{}\n", saturation_point(25.0, Formulation::Its90));

    // ── Checked API: NaN becomes an error ──────────────────────────
    match try_vapor_pressure_over_water(-300.0, Formulation::Its90) {
        Ok(p) => println!("e_s(-300 °C) = {p}"),
        Err(e) => println!("{e}"),
    }

    let formulation: Formulation = "wexler76".parse()?;
    let p = try_vapor_pressure_over_water(37.0, formulation)?;
    println!("e_s(37 °C, {formulation}) = {p:.4}");
    Ok(())
}
