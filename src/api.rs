use super::*;
use rand::Rng;
#[cfg(feature = "seed_with")]
use rand::SeedableRng;

/// Extension trait exposing the three human shuffling techniques on slices.
/// Every method reads the slice and returns a freshly allocated permutation
/// of it; the slice itself is left untouched.
pub trait HumanShuffle<T> {
    /// Applies `iterations` Mongean passes and returns the emitted order.
    /// The Mongean technique is deterministic, so equal inputs produce
    /// equal outputs.
    ///
    /// # Example
    /// ```
    /// use human_shuffle::HumanShuffle;
    ///
    /// let deck: Vec<_> = (1..=5).collect();
    /// assert_eq!(deck.mongean_shuffle(1), vec![4, 2, 1, 3, 5]);
    /// assert_eq!(deck.mongean_shuffle(2), vec![3, 2, 4, 1, 5]);
    /// ```
    fn mongean_shuffle(&self, iterations: usize) -> Vec<T>;

    /// Applies `iterations` riffle passes driven by `rng` and returns the
    /// emitted order. The permutation only depends on the generator state,
    /// so a seeded generator reproduces the same order each run.
    ///
    /// # Example
    /// ```
    /// use human_shuffle::HumanShuffle;
    ///
    /// let deck: Vec<_> = (1..=52).collect();
    /// let shuffled = deck.riffle_shuffle(&mut rand::thread_rng(), 3);
    ///
    /// assert_ne!(shuffled, deck); // fails with negligible probability
    /// ```
    fn riffle_shuffle<R: Rng>(&self, rng: &mut R, iterations: usize) -> Vec<T>;

    /// Applies `iterations` overhand passes driven by `rng` and returns the
    /// emitted order. The permutation only depends on the generator state,
    /// so a seeded generator reproduces the same order each run.
    ///
    /// # Example
    /// ```
    /// use human_shuffle::HumanShuffle;
    ///
    /// let deck: Vec<_> = (1..=52).collect();
    /// let shuffled = deck.overhand_shuffle(&mut rand::thread_rng(), 3);
    ///
    /// assert_ne!(shuffled, deck); // fails with negligible probability
    /// ```
    fn overhand_shuffle<R: Rng>(&self, rng: &mut R, iterations: usize) -> Vec<T>;

    /// Invokes [`HumanShuffle::riffle_shuffle`] with a fast `Pcg64Mcg`
    /// generator seeded from the arbitrary RNG provided.
    #[cfg(feature = "seed_with")]
    fn riffle_shuffle_seed_with<R: Rng>(&self, rng: &mut R, iterations: usize) -> Vec<T> {
        let mut pcg = rand_pcg::Pcg64Mcg::from_rng(rng).unwrap();
        self.riffle_shuffle(&mut pcg, iterations)
    }

    /// Invokes [`HumanShuffle::overhand_shuffle`] with a fast `Pcg64Mcg`
    /// generator seeded from the arbitrary RNG provided.
    #[cfg(feature = "seed_with")]
    fn overhand_shuffle_seed_with<R: Rng>(&self, rng: &mut R, iterations: usize) -> Vec<T> {
        let mut pcg = rand_pcg::Pcg64Mcg::from_rng(rng).unwrap();
        self.overhand_shuffle(&mut pcg, iterations)
    }
}

impl<T: Clone> HumanShuffle<T> for [T] {
    fn mongean_shuffle(&self, iterations: usize) -> Vec<T> {
        mongean::mongean(self, iterations)
    }

    fn riffle_shuffle<R: Rng>(&self, rng: &mut R, iterations: usize) -> Vec<T> {
        riffle::riffle(rng, self, iterations)
    }

    fn overhand_shuffle<R: Rng>(&self, rng: &mut R, iterations: usize) -> Vec<T> {
        overhand::overhand(rng, self, iterations)
    }
}
