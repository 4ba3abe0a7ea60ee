//! Pagination arithmetic.

use std::ops::Range;

/// Number of pages needed for `item_count` items; never less than one.
///
/// A `page_size` of zero is treated as one.
#[must_use]
pub fn num_pages(item_count: usize, page_size: usize) -> usize {
    item_count.div_ceil(page_size.max(1)).max(1)
}

/// Unclamped index range `[page * page_size, (page + 1) * page_size)`.
#[must_use]
pub fn page_slice(page: usize, page_size: usize) -> Range<usize> {
    let start = page.saturating_mul(page_size);
    start..start.saturating_add(page_size)
}

/// [`page_slice`] clamped to a collection of `len` items.
#[must_use]
pub fn page_bounds(page: usize, page_size: usize, len: usize) -> Range<usize> {
    let Range { start, end } = page_slice(page, page_size);
    start.min(len)..end.min(len)
}

/// Clamps `page` into `[0, num_pages - 1]`.
#[must_use]
pub fn clamp_page(page: usize, item_count: usize, page_size: usize) -> usize {
    page.min(num_pages(item_count, page_size).saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_pages() {
        assert_eq!(num_pages(0, 10), 1);
        assert_eq!(num_pages(1, 10), 1);
        assert_eq!(num_pages(10, 10), 1);
        assert_eq!(num_pages(11, 10), 2);
        assert_eq!(num_pages(3, 2), 2);
        assert_eq!(num_pages(5, 0), 5);
    }

    #[test]
    fn test_page_slice() {
        assert_eq!(page_slice(0, 20), 0..20);
        assert_eq!(page_slice(2, 20), 40..60);
    }

    #[test]
    fn test_page_bounds_clamps_last_page() {
        assert_eq!(page_bounds(1, 2, 3), 2..3);
        assert_eq!(page_bounds(5, 2, 3), 3..3);
    }

    #[test]
    fn test_pages_cover_every_item_once() {
        for len in 0..40 {
            for page_size in 1..12 {
                // Arrange
                let pages = num_pages(len, page_size);

                // Act
                let covered: Vec<usize> = (0..pages)
                    .flat_map(|p| page_bounds(p, page_size, len))
                    .collect();

                // Assert
                let expected: Vec<usize> = (0..len).collect();
                assert_eq!(covered, expected, "len={len} page_size={page_size}");
                assert_eq!(pages, len.div_ceil(page_size).max(1));
            }
        }
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3, 2), 0);
        assert_eq!(clamp_page(1, 3, 2), 1);
        assert_eq!(clamp_page(9, 3, 2), 1);
        assert_eq!(clamp_page(9, 0, 2), 0);
    }
}
