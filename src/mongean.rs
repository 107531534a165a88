use std::collections::VecDeque;

use crate::support::{apply_passes, is_even};

/// Mongean shuffle: the deck is dealt card by card onto a pile, placing each
/// card on top of the pile when the pile holds an odd number of cards and
/// underneath it when it holds an even number. The technique involves no
/// randomness, so the emitted order is a pure function of the input.
///
/// `iterations` passes are applied in sequence, each one consuming the order
/// produced by the previous pass.
///
/// # Example
/// ```
/// use human_shuffle::mongean::mongean;
///
/// assert_eq!(mongean(&[1, 2, 3, 4, 5], 1), vec![4, 2, 1, 3, 5]);
/// assert_eq!(mongean(&[1, 2, 3, 4, 5], 2), vec![3, 2, 4, 1, 5]);
/// ```
pub fn mongean<T: Clone>(data: &[T], iterations: usize) -> Vec<T> {
    apply_passes(data, iterations, mongean_pass)
}

fn mongean_pass<T: Clone>(deck: &[T]) -> Vec<T> {
    let mut dealing = deck.iter().cloned();
    let mut pile: VecDeque<T> = VecDeque::with_capacity(deck.len());

    if let Some(first) = dealing.next() {
        pile.push_back(first);
    }

    for card in dealing {
        if !is_even(pile.len()) {
            pile.push_front(card);
        } else {
            pile.push_back(card);
        }
    }

    pile.into()
}
