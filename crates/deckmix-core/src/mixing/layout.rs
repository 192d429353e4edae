//! Grid sizing for displaying a set of cards.

use super::model::GridLayout;

/// Maps a card count to a grid shape.
///
/// Small counts use fixed one-, two- and three-row spreads; from ten cards
/// on the grid is near-square with `cols = ceil(sqrt(n))`.
pub fn calculate_grid_layout(card_count: usize) -> GridLayout {
    match card_count {
        0 => GridLayout::new(0, 0),
        1..=3 => GridLayout::new(1, card_count),
        4..=6 => GridLayout::new(2, card_count.div_ceil(2)),
        7..=9 => GridLayout::new(3, card_count.div_ceil(3)),
        _ => {
            let cols = ceil_sqrt(card_count);
            GridLayout::new(card_count.div_ceil(cols), cols)
        }
    }
}

/// Smallest `c` with `c * c >= n`.
///
/// A square that overflows `usize` is larger than any `n`.
fn ceil_sqrt(n: usize) -> usize {
    let mut c = (n as f64).sqrt() as usize;
    while c.checked_mul(c).is_some_and(|square| square < n) {
        c += 1;
    }
    while c > 1 && (c - 1).checked_mul(c - 1).map_or(true, |square| square >= n) {
        c -= 1;
    }
    c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(n: usize) -> (usize, usize) {
        let grid = calculate_grid_layout(n);
        (grid.rows, grid.cols)
    }

    #[test]
    fn test_zero_cards() {
        assert_eq!(layout(0), (0, 0));
    }

    #[test]
    fn test_single_row() {
        assert_eq!(layout(1), (1, 1));
        assert_eq!(layout(2), (1, 2));
        assert_eq!(layout(3), (1, 3));
    }

    #[test]
    fn test_boundary_three_to_four() {
        assert_eq!(layout(3), (1, 3));
        assert_eq!(layout(4), (2, 2));
    }

    #[test]
    fn test_two_rows() {
        assert_eq!(layout(5), (2, 3));
        assert_eq!(layout(6), (2, 3));
    }

    #[test]
    fn test_boundary_six_to_seven() {
        assert_eq!(layout(6), (2, 3));
        assert_eq!(layout(7), (3, 3));
    }

    #[test]
    fn test_three_rows() {
        assert_eq!(layout(8), (3, 3));
        assert_eq!(layout(9), (3, 3));
    }

    #[test]
    fn test_boundary_nine_to_ten() {
        assert_eq!(layout(9), (3, 3));
        // cols = ceil(sqrt(10)) = 4, rows = ceil(10 / 4) = 3
        assert_eq!(layout(10), (3, 4));
    }

    #[test]
    fn test_near_square_grids() {
        assert_eq!(layout(16), (4, 4));
        assert_eq!(layout(17), (4, 5));
        assert_eq!(layout(20), (4, 5));
        assert_eq!(layout(100), (10, 10));
        assert_eq!(layout(101), (10, 11));
    }

    #[test]
    fn test_grid_always_fits_cards() {
        for n in 0..500 {
            assert!(calculate_grid_layout(n).capacity() >= n, "n = {n}");
        }
    }

    #[test]
    fn test_largest_count_does_not_overflow() {
        let grid = calculate_grid_layout(usize::MAX);
        assert_eq!(grid.cols, ceil_sqrt(usize::MAX));
        assert_eq!(grid.rows, usize::MAX.div_ceil(grid.cols));
        assert_eq!(grid.capacity(), usize::MAX);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_ceil_sqrt_near_usize_max() {
        let root = (1usize << 32) - 1;
        assert_eq!(ceil_sqrt(root * root), root);
        assert_eq!(ceil_sqrt(root * root + 1), 1 << 32);
        assert_eq!(ceil_sqrt(usize::MAX), 1 << 32);
        assert_eq!(calculate_grid_layout(usize::MAX), GridLayout::new(1 << 32, 1 << 32));
    }

    #[test]
    fn test_ceil_sqrt_exact_squares() {
        for c in 1..200usize {
            assert_eq!(ceil_sqrt(c * c), c);
            assert_eq!(ceil_sqrt(c * c + 1), c + 1);
        }
    }
}
