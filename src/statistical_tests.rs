#![allow(unused_macros)]

macro_rules! test_shuffle_algorithm {
    ($func : ident) => {
        use rand::SeedableRng;
        use rand_pcg::Pcg64Mcg;

        /// This test asserts that the shuffling algorithm emits a permutation of the
        /// input elements, i.e. no elements are modified, removed, or added.
        #[test]
        fn preserve_elements() {
            let mut rng = Pcg64Mcg::seed_from_u64(1234);

            for n in 0..500 {
                let data: Vec<_> = (0..n).map(|x| 3 * x).collect();
                let mut shuffled = $func(&mut rng, &data);

                assert_eq!(shuffled.len(), n, "n={}", n);

                shuffled.sort();
                for (idx, &val) in shuffled.iter().enumerate() {
                    assert_eq!(3 * idx, val, "n={}", n);
                }
            }
        }

        /// A full deck must practically never come back in its original order.
        /// For the deterministic algorithms this holds exactly; for the
        /// randomized ones the identity permutation has negligible probability.
        #[test]
        fn reorders_full_deck() {
            let mut rng = Pcg64Mcg::seed_from_u64(12345);
            let deck = crate::support::generate_range(52);

            for run in 0..20 {
                let shuffled = $func(&mut rng, &deck);
                assert_ne!(shuffled, deck, "run={}", run);
            }
        }

        /// The caller keeps the input; the shuffle must not touch it.
        #[test]
        fn leaves_input_untouched() {
            let mut rng = Pcg64Mcg::seed_from_u64(999);
            let deck = crate::support::generate_range(52);
            let copy = deck.clone();

            let _ = $func(&mut rng, &deck);

            assert_eq!(deck, copy);
        }
    };
}

macro_rules! test_shuffle_algorithm_deterministic {
    ($func : ident) => {
        /// Given equal generator states, repeated runs must emit equal orders.
        #[test]
        fn deterministic() {
            for num in [2usize, 5, 10, 13, 29, 50] {
                let rng = Pcg64Mcg::seed_from_u64(1234 * num as u64);

                let runs: Vec<Vec<_>> = (0..10)
                    .map(|_| {
                        let data: Vec<_> = (0..num).map(|x| 3 * x).collect();
                        let mut rng = rng.clone();
                        $func(&mut rng, &data)
                    })
                    .collect();

                for i in 1..runs.len() {
                    assert_eq!(runs[0], runs[i]);
                }
            }
        }
    };
}

pub(crate) use test_shuffle_algorithm;
pub(crate) use test_shuffle_algorithm_deterministic;
