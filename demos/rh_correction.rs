use hardy_wexler::{correct_relative_humidity, correct_relative_humidity_its90, Formulation};

fn main() {
    // A radiosonde humidity sensor is heated a few degrees above the air.
    let sensor_rh = 62.0; // %
    let ambient_c = 14.0;

    println!("sensor RH = {sensor_rh} %, ambient = {ambient_c} °C\n");
    println!("  T_sensor   RH_ambient (ITS-90)   RH_ambient (Wexler-76)");
    for offset in [0.0, 0.5, 1.0, 2.0, 5.0] {
        let t_sensor = ambient_c + offset;
        let its = correct_relative_humidity_its90(sensor_rh, t_sensor, ambient_c);
        let wex = correct_relative_humidity(sensor_rh, t_sensor, ambient_c, Formulation::Wexler76);
        println!("{t_sensor:10.1}   {its:19.3}   {wex:22.3}");
    }
}
