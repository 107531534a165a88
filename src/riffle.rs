use rand::Rng;

use crate::coin::FairCoin;
use crate::support::{apply_passes, split_in_half};

/// Riffle shuffle: the deck is cut into two halves which are then
/// interleaved. Both halves are held as stacks with the original bottom card
/// on top; a fair coin decides which half drops its next card, and once one
/// half runs out the other falls as a single packet.
///
/// The coin is flipped per card, so unlike a physical riffle the packet
/// lengths are geometrically distributed. One coin (and one generator state)
/// serves the whole pass.
///
/// `iterations` passes are applied in sequence, each one consuming the order
/// produced by the previous pass.
///
/// # Example
/// ```
/// use human_shuffle::riffle::riffle;
///
/// let deck: Vec<_> = (1..=52).collect();
/// let shuffled = riffle(&mut rand::thread_rng(), &deck, 3);
///
/// assert_eq!(shuffled.len(), deck.len());
/// assert_ne!(shuffled, deck); // fails with negligible probability
/// ```
pub fn riffle<R: Rng, T: Clone>(rng: &mut R, data: &[T], iterations: usize) -> Vec<T> {
    apply_passes(data, iterations, |deck| riffle_pass(rng, deck))
}

fn riffle_pass<R: Rng, T: Clone>(rng: &mut R, deck: &[T]) -> Vec<T> {
    let (top, bottom) = split_in_half(deck);
    let mut top = top.to_vec();
    let mut bottom = bottom.to_vec();

    let mut coin = FairCoin::new();
    let mut shuffled = Vec::with_capacity(deck.len());

    while !top.is_empty() && !bottom.is_empty() {
        let dropped = if coin.flip(rng) {
            top.pop()
        } else {
            bottom.pop()
        };
        shuffled.extend(dropped);
    }

    // one thumb released everything; the surviving half falls as one packet
    let leftover = if top.is_empty() { bottom } else { top };
    shuffled.extend(leftover.into_iter().rev());

    shuffled
}
