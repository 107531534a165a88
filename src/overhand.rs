use rand::Rng;
use rand_distr::Distribution;

use crate::gaussian::BoxMuller;
use crate::support::apply_passes;

/// Packet sizing of the physical model: a thumb grabs roughly a quarter of
/// the deck, with the absolute value of a N(0.5, 0.2) sample as the grip
/// factor.
const GRIP_MU: f64 = 0.5;
const GRIP_SIGMA: f64 = 0.2;

/// Overhand shuffle: packets of random size are peeled off the top of the
/// deck and restacked, each new packet landing on top of the ones peeled
/// before it. A single pass therefore emits the packets in reverse peel
/// order, with the cards inside each packet untouched.
///
/// The packet size is redrawn per peel from one generator state held for the
/// whole pass, and is clamped to at least one card so that every pass
/// terminates.
///
/// `iterations` passes are applied in sequence, each one consuming the order
/// produced by the previous pass.
///
/// # Example
/// ```
/// use human_shuffle::overhand::overhand;
///
/// let deck: Vec<_> = (1..=52).collect();
/// let shuffled = overhand(&mut rand::thread_rng(), &deck, 3);
///
/// assert_eq!(shuffled.len(), deck.len());
/// assert_ne!(shuffled, deck); // fails with negligible probability
/// ```
pub fn overhand<R: Rng, T: Clone>(rng: &mut R, data: &[T], iterations: usize) -> Vec<T> {
    apply_passes(data, iterations, |deck| overhand_pass(rng, deck))
}

fn overhand_pass<R: Rng, T: Clone>(rng: &mut R, deck: &[T]) -> Vec<T> {
    let grip = BoxMuller::new(GRIP_MU, GRIP_SIGMA);

    let mut packets = Vec::new();
    let mut start = 0;

    while start < deck.len() {
        let drawn = (deck.len() as f64 * grip.sample(rng).abs() / 2.0) as usize;
        // at least one card per peel, otherwise the pass never finishes
        let size = drawn.clamp(1, deck.len() - start);

        packets.push(start..start + size);
        start += size;
    }

    let mut shuffled = Vec::with_capacity(deck.len());
    for packet in packets.into_iter().rev() {
        shuffled.extend_from_slice(&deck[packet]);
    }

    shuffled
}
