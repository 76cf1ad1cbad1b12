//! Generate a deterministic sample `airbnb.csv` for trying out the
//! dashboard without real data.  A few rows are written with missing cells
//! to exercise load-time cleaning.

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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let neighbourhoods = [
        ("Centro", 95.0),
        ("Arganzuela", 70.0),
        ("Retiro", 85.0),
        ("Salamanca", 140.0),
        ("Chamberí", 110.0),
        ("Tetuán", 60.0),
    ];
    let room_types = [
        ("Entire home/apt", 1.0),
        ("Private room", 0.55),
        ("Shared room", 0.3),
    ];
    let adjectives = ["Cosy", "Sunny", "Modern", "Charming", "Spacious", "Quiet"];
    let nouns = ["studio", "apartment", "loft", "room", "flat", "attic"];

    let output_path = "airbnb.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "name",
            "neighbourhood",
            "room_type",
            "price",
            "number_of_reviews",
            "availability_365",
        ])
        .expect("Failed to write header");

    let rows = 600;
    for i in 0..rows {
        let &(neighbourhood, base_price) = rng.pick(&neighbourhoods);
        let &(room_type, factor) = rng.pick(&room_types);

        let name = format!(
            "{} {} in {neighbourhood} #{i}",
            rng.pick(&adjectives),
            rng.pick(&nouns)
        );
        let price = (rng.gauss(base_price * factor, base_price * factor * 0.25)).max(10.0);
        let reviews = (rng.next_u64() % 180) as u32;
        let availability = (rng.next_u64() % 366) as u32;

        // Roughly 5% of rows lose their price, as real exports do.
        let price_cell = if rng.next_f64() < 0.05 {
            String::new()
        } else {
            format!("{price:.0}")
        };

        writer
            .write_record([
                name.as_str(),
                neighbourhood,
                room_type,
                price_cell.as_str(),
                reviews.to_string().as_str(),
                availability.to_string().as_str(),
            ])
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {rows} listings to {output_path}");
}
