use rand::Rng;
use rand_distr::Distribution;

/// Normal distribution sampled with the Box--Muller transform.
///
/// The crate carries its own sampler instead of [`rand_distr::Normal`]:
/// the overhand packet sizing models the sizes a thumb grabs in terms of
/// this transform, and the ziggurat sampler would emit a different stream
/// for the same generator state. It implements [`rand_distr::Distribution`],
/// so it composes with the rest of the `rand` ecosystem.
///
/// # Example
/// ```
/// use human_shuffle::gaussian::BoxMuller;
/// use rand_distr::Distribution;
///
/// let sizing = BoxMuller::new(0.5, 0.2);
/// let sample = sizing.sample(&mut rand::thread_rng());
/// assert!(sample.is_finite());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BoxMuller {
    mu: f64,
    sigma: f64,
}

impl BoxMuller {
    /// Constructs the distribution with mean `mu` and standard deviation
    /// `sigma`. Both parameters must be finite and `sigma` strictly
    /// positive; this is not checked in release builds.
    pub fn new(mu: f64, sigma: f64) -> Self {
        debug_assert!(mu.is_finite());
        debug_assert!(sigma.is_finite() && sigma > 0.0);

        Self { mu, sigma }
    }

    /// Shorthand for the standard normal distribution.
    pub fn standard() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl Distribution<f64> for BoxMuller {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // `gen::<f64>()` draws from [0, 1); ln(0) is undefined, so resample
        // until the first uniform is strictly positive.
        let u1 = loop {
            let u1: f64 = rng.gen();
            if u1 > 0.0 {
                break u1;
            }
        };
        let u2: f64 = rng.gen();

        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();

        z * self.sigma + self.mu
    }
}

/// Draws a single sample from a normal distribution with mean `mu` and
/// standard deviation `sigma`.
pub fn gaussian<R: Rng>(rng: &mut R, mu: f64, sigma: f64) -> f64 {
    BoxMuller::new(mu, sigma).sample(rng)
}

#[cfg(test)]
mod test {
    use super::*;

    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    const NUM_SAMPLES: usize = 100_000;

    fn draw_samples(seed: u64, mu: f64, sigma: f64) -> Vec<f64> {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        (0..NUM_SAMPLES)
            .map(|_| gaussian(&mut rng, mu, sigma))
            .collect()
    }

    #[test]
    fn samples_are_finite() {
        for sample in draw_samples(1234, 0.5, 0.2) {
            assert!(sample.is_finite());
        }
    }

    #[test]
    fn empirical_moments() {
        let samples = draw_samples(12345, 0.0, 1.0);

        let mean = samples.iter().sum::<f64>() / NUM_SAMPLES as f64;
        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>()
            / (NUM_SAMPLES - 1) as f64;

        assert!(mean.abs() < 0.02, "mean = {}", mean);
        assert!((variance - 1.0).abs() < 0.05, "variance = {}", variance);
    }

    #[test]
    fn empirical_quantiles_match_normal_cdf() {
        use statrs::distribution::{ContinuousCDF, Normal};

        let reference = Normal::new(0.5, 0.2).unwrap();

        let mut samples = draw_samples(31415, 0.5, 0.2);
        samples.sort_by(|a, b| a.partial_cmp(b).unwrap());

        for quantile in [0.05, 0.1, 0.25, 0.5, 0.75, 0.9, 0.95] {
            let empirical = samples[(NUM_SAMPLES as f64 * quantile) as usize];
            let expected = reference.inverse_cdf(quantile);

            assert!(
                (empirical - expected).abs() < 0.01,
                "quantile {}: empirical {} vs expected {}",
                quantile,
                empirical,
                expected
            );
        }
    }

    #[test]
    fn location_and_scale_are_applied() {
        let standard = draw_samples(999, 0.0, 1.0);
        let scaled = draw_samples(999, 10.0, 3.0);

        // same seed, so each scaled sample is an affine image of the
        // standard one
        for (z, x) in standard.iter().zip(&scaled) {
            assert!((z * 3.0 + 10.0 - x).abs() < 1e-9);
        }
    }
}
