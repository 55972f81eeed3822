use serde::Serialize;

/// One synthetic wine observation, serialized in the records-oriented JSON
/// layout the loader expects.
#[derive(Serialize)]
struct WineSample {
    #[serde(rename = "Alcohol")]
    alcohol: i64,
    #[serde(rename = "Flavanoids")]
    flavanoids: f64,
    #[serde(rename = "Ash")]
    ash: f64,
    #[serde(rename = "Hue")]
    hue: f64,
    #[serde(rename = "Magnesium")]
    magnesium: i64,
}

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

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // Per-class distributions: (flavanoids, ash, hue, magnesium) means and
    // spreads, loosely following the UCI wine dataset.
    let class_profiles: [(i64, [(f64, f64); 4]); 3] = [
        (1, [(2.98, 0.40), (2.46, 0.23), (1.06, 0.12), (106.0, 10.5)]),
        (2, [(2.08, 0.70), (2.24, 0.32), (1.06, 0.20), (94.0, 16.8)]),
        (3, [(0.78, 0.29), (2.44, 0.18), (0.68, 0.11), (99.0, 10.9)]),
    ];
    let samples_per_class = 40;

    let mut samples: Vec<WineSample> = Vec::new();
    for &(class, [flav, ash, hue, mg]) in &class_profiles {
        for _ in 0..samples_per_class {
            samples.push(WineSample {
                alcohol: class,
                flavanoids: round2(rng.gauss(flav.0, flav.1).max(0.1)),
                ash: round2(rng.gauss(ash.0, ash.1).max(1.0)),
                hue: round2(rng.gauss(hue.0, hue.1).max(0.2)),
                magnesium: rng.gauss(mg.0, mg.1).round().max(70.0) as i64,
            });
        }
    }

    let output_path = "sample_data.json";
    let json = serde_json::to_string_pretty(&samples).expect("Failed to serialize samples");
    std::fs::write(output_path, json).expect("Failed to create output file");

    println!(
        "Wrote {} samples ({} classes) to {output_path}",
        samples.len(),
        class_profiles.len()
    );
}
