//! Random shuffling and sampling without replacement.

use rand::Rng;

/// Returns a uniformly random permutation of `items`.
///
/// The input slice is left untouched; the shuffle runs over a copy.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut rand::thread_rng())
}

/// Fisher-Yates shuffle of a copy of `items` driven by `rng`.
///
/// Walks from the last index down to 1, swapping each position with a
/// uniformly drawn index in `[0, i]`.
pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Picks `count` distinct items from `items` at random.
///
/// Asking for as many items as exist, or more, returns a full shuffle; the
/// caller is responsible for capacity checks.
pub fn select_random<T: Clone>(items: &[T], count: usize) -> Vec<T> {
    select_random_with(items, count, &mut rand::thread_rng())
}

/// Same as [`select_random`] with an explicit random source.
pub fn select_random_with<T: Clone, R: Rng + ?Sized>(
    items: &[T],
    count: usize,
    rng: &mut R,
) -> Vec<T> {
    let mut shuffled = shuffle_with(items, rng);
    if count < shuffled.len() {
        shuffled.truncate(count);
    }
    shuffled
}
