use rand::Rng;

/// Fair coin that caches a full word of randomness and hands out one bit
/// per flip. The riffle shuffle flips once per card dropped, so drawing a
/// fresh word from the generator for every flip would waste 63 of its 64
/// bits.
#[derive(Default)]
pub struct FairCoin {
    random_bits: u64,
    num_available: usize,
}

impl FairCoin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the coin, refilling the bit cache from `rng` when exhausted.
    #[inline]
    pub fn flip(&mut self, rng: &mut impl Rng) -> bool {
        if self.num_available == 0 {
            self.random_bits = rng.gen();
            self.num_available = 64;
        }

        let bit = self.random_bits & 1;
        self.random_bits >>= 1;
        self.num_available -= 1;

        bit == 0
    }
}
