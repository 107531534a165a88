/// Returns true iff `n` is even.
#[inline]
pub fn is_even(n: usize) -> bool {
    n % 2 == 0
}

/// Returns true iff the slice holds an even number of elements.
#[inline]
pub fn len_is_even<T>(data: &[T]) -> bool {
    is_even(data.len())
}

/// Splits a slice into two contiguous, order-preserving halves. The first
/// half receives `ceil(n / 2)` elements, i.e. for odd lengths the extra
/// element goes to the first half. Both halves borrow from the input;
/// nothing is copied.
///
/// # Example
/// ```
/// use human_shuffle::support::split_in_half;
///
/// let (first, second) = split_in_half(&[1, 2, 3, 4, 5]);
/// assert_eq!(first, &[1, 2, 3]);
/// assert_eq!(second, &[4, 5]);
/// ```
pub fn split_in_half<T>(data: &[T]) -> (&[T], &[T]) {
    let mut midpoint = data.len() / 2;

    // the odd case rounds up so no element is dropped
    if !len_is_even(data) {
        midpoint += 1;
    }

    data.split_at(midpoint)
}

/// Produces the sequence `1..=n` in ascending order. Only used by tests and
/// the demonstration binary as a canonical ordered deck.
pub fn generate_range(n: usize) -> Vec<usize> {
    (1..=n).collect()
}

/// Applies `pass` to `data` a total of `iterations` times, where each pass
/// consumes the previous pass's output. Zero iterations yield an unshuffled
/// copy of the input.
pub fn apply_passes<T, F>(data: &[T], iterations: usize, mut pass: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&[T]) -> Vec<T>,
{
    let mut deck = data.to_vec();

    for _ in 0..iterations {
        deck = pass(&deck);
    }

    deck
}
