//! Simulations of the shuffling techniques humans use with decks of cards.
//!
//! Three algorithms are provided, each modelling a physical shuffle:
//!
//!  - [`mongean::mongean`]: deal cards alternately onto the front and back
//!    of a growing pile; fully deterministic.
//!  - [`riffle::riffle`]: cut the deck in half and interleave the halves,
//!    deciding per card which half drops next.
//!  - [`overhand::overhand`]: peel random-sized packets off the top of the
//!    deck and restack them in reverse peel order.
//!
//! All algorithms take a borrowed input slice and return a freshly allocated
//! permutation of it; the caller's sequence is never modified. The most
//! convenient entry point is the [`HumanShuffle`] extension trait on slices.

pub mod coin;
pub mod gaussian;
pub mod mongean;
pub mod overhand;
pub mod riffle;
pub mod support;

mod api;
pub use api::HumanShuffle;

pub mod prelude {
    pub use super::api::HumanShuffle;
    pub use super::gaussian::{gaussian, BoxMuller};
    pub use super::mongean::mongean;
    pub use super::overhand::overhand;
    pub use super::riffle::riffle;
}

#[cfg(test)]
mod statistical_tests;
