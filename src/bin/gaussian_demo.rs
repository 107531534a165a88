//! Prints a handful of Gaussian samples for eyeballing the Box--Muller
//! sampler, together with the product a deck-sized multiplicand would see.

use human_shuffle::gaussian::gaussian;

const NUM_SAMPLES: usize = 20;
const MULTIPLICAND: f64 = 30.0;

fn main() {
    let mut rng = rand::thread_rng();

    for _ in 0..NUM_SAMPLES {
        let sample = gaussian(&mut rng, 0.0, 1.0);

        println!("Gaussian variable: {sample}");
        println!("Product: {}", sample * MULTIPLICAND);
        println!();
    }
}
