//! Fixed-size page slicing over a snapshot of an ordered sequence.
//!
//! The page size is process-wide configuration; the requested page number is
//! clamped into range rather than rejected, so paging never errors.

/// One page of a sliced sequence, plus the metadata list views render.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Slices `items` into pages of `page_size` and returns page `requested`.
///
/// Out-of-range requests clamp: below 1 yields the first page, past the end
/// yields the last. An empty sequence yields a single empty page. A zero
/// page size is treated as 1.
pub fn paginate<T>(items: Vec<T>, page_size: u32, requested: u32) -> Page<T> {
    let page_size = page_size.max(1) as usize;
    let total = items.len() as u64;
    let total_pages = (items.len().div_ceil(page_size)).max(1) as u32;
    let page = requested.clamp(1, total_pages);

    let start = (page as usize - 1) * page_size;
    let page_items: Vec<T> = items
        .into_iter()
        .skip(start)
        .take(page_size)
        .collect();

    Page {
        items: page_items,
        page,
        total,
        total_pages,
        has_next: page < total_pages,
        has_prev: page > 1,
    }
}

/// Lenient page-number parsing for query strings: absent or non-numeric
/// values read as page 1. Numbers beyond `u32` saturate so they still
/// clamp to the last page downstream instead of wrapping to the first.
pub fn page_number(raw: Option<&str>) -> u32 {
    raw.and_then(|p| p.parse::<u64>().ok())
        .map(|p| u32::try_from(p).unwrap_or(u32::MAX))
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn thirteen_items_split_ten_three() {
        let first = paginate(seq(13), 10, 1);
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.total, 13);
        assert_eq!(first.total_pages, 2);
        assert!(first.has_next);
        assert!(!first.has_prev);

        let second = paginate(seq(13), 10, 2);
        assert_eq!(second.items, vec![10, 11, 12]);
        assert!(!second.has_next);
        assert!(second.has_prev);
    }

    #[test]
    fn past_the_end_clamps_to_last_page() {
        let page = paginate(seq(13), 10, 3);
        assert_eq!(page.page, 2);
        assert_eq!(page.items, paginate(seq(13), 10, 2).items);
    }

    #[test]
    fn below_one_clamps_to_first_page() {
        let page = paginate(seq(13), 10, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 10);
    }

    #[test]
    fn empty_sequence_yields_one_empty_page() {
        let page = paginate(Vec::<u8>::new(), 10, 5);
        assert!(page.items.is_empty());
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_next);
        assert!(!page.has_prev);
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let a = paginate(seq(25), 10, 2);
        let b = paginate(seq(25), 10, 2);
        assert_eq!(a, b);
    }

    #[test]
    fn page_number_parses_leniently() {
        assert_eq!(page_number(None), 1);
        assert_eq!(page_number(Some("7")), 7);
        assert_eq!(page_number(Some("abc")), 1);
        assert_eq!(page_number(Some("-2")), 1);
        assert_eq!(page_number(Some("")), 1);
    }

    #[test]
    fn oversized_page_numbers_saturate_and_clamp_to_last_page() {
        let requested = page_number(Some("4294967296"));
        assert_eq!(requested, u32::MAX);

        let page = paginate(seq(13), 10, requested);
        assert_eq!(page.page, 2);
        assert_eq!(page.items, vec![10, 11, 12]);
    }
}
