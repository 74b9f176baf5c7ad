use texa_logview::data::decoder::encode_utf16le;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Format with a decimal comma, as the diagnostic tool does.
fn german(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}").replace('.', ",")
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // (name, unit) of every recorded parameter
    let parameters = [
        ("Motordrehzahl", "1/min"),
        ("Kühlmitteltemperatur", "°C"),
        ("Batteriespannung", "V"),
        ("Drosselklappenstellung", "%"),
        ("Uhrzeit", ""),
    ];

    let mut lines: Vec<String> = vec![
        "TEXA IDC5 Datenaufzeichnung".to_string(),
        "Fahrzeug:\tDemo".to_string(),
        "Motor:\t1.6 TDI".to_string(),
        "Steuergerät:\tMotorelektronik".to_string(),
        "Datum:\t19.10.2026".to_string(),
        "Bediener:\tWerkstatt".to_string(),
        "Kilometerstand:\t123456".to_string(),
        "Abtastrate:\t10 Hz".to_string(),
        "Kommentar:\tLeerlauf, dann Gasstoß".to_string(),
    ];

    let mut parameter_row = vec!["Parameter:".to_string(), String::new()];
    let mut unit_row = vec!["Masseinheit:".to_string(), String::new()];
    for (name, unit) in &parameters {
        parameter_row.push(name.to_string());
        unit_row.push(unit.to_string());
    }
    let mut time_row = vec!["Zeit".to_string(), "Relative Zeit [s]".to_string()];
    time_row.extend(parameters.iter().map(|_| String::new()));
    lines.push(parameter_row.join("\t"));
    lines.push(unit_row.join("\t"));
    lines.push(time_row.join("\t"));

    let samples = 600;
    let mut coolant = 78.0;
    for i in 0..samples {
        let t = i as f64 * 0.1;
        // rev up between 20 s and 30 s
        let throttle = if (20.0..30.0).contains(&t) { 45.0 } else { 0.0 };
        let rpm = 820.0 + throttle * 55.0 + rng.gauss(0.0, 12.0);
        coolant += 0.004 + rng.gauss(0.0, 0.01);
        let voltage = 14.1 - throttle * 0.004 + rng.gauss(0.0, 0.02);
        let seconds = 10 * 3600 + 15 * 60 + (i / 10);
        let clock = format!(
            "{:02}:{:02}:{:02}",
            seconds / 3600,
            (seconds / 60) % 60,
            seconds % 60
        );

        lines.push(
            [
                (i + 1).to_string(),
                german(t, 1),
                german(rpm, 0),
                german(coolant, 1),
                german(voltage, 2),
                german(throttle, 1),
                clock,
            ]
            .join("\t"),
        );
    }

    let output_path = "sample_texa.csv";
    let bytes = encode_utf16le(&(lines.join("\r\n") + "\r\n"));
    std::fs::write(output_path, bytes).expect("Failed to write output file");

    println!(
        "Wrote {samples} samples of {} parameters to {output_path}",
        parameters.len()
    );
}
