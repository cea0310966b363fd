//! Pure pagination arithmetic for the appointments table.

/// Number of pages needed for `total` rows at `limit` rows per page.
/// A zero limit means no rows fit anywhere, so no pages.
pub fn page_count(total: u32, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    (total + limit - 1) / limit
}

/// Clickable page numbers: every page except the one currently shown.
pub fn page_numbers(total: u32, limit: u32, current: u32) -> Vec<u32> {
    (1..=page_count(total, limit))
        .filter(|&number| number != current)
        .collect()
}

/// The "Showing ... of {total} results" range. A page with no rows on it
/// (nothing at all, or a page past the end) shows `"0"` instead of a
/// nonsensical `"1 to 0"` or `"41 to 25"`.
pub fn showing_range(page: u32, limit: u32, total: u32) -> String {
    let from = page.saturating_sub(1) * limit + 1;
    if total == 0 || from > total {
        return "0".to_string();
    }
    let to = (page * limit).min(total);
    format!("{} to {}", from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(25, 10), 3);
    }

    #[test]
    fn page_count_tolerates_zero_limit() {
        assert_eq!(page_count(25, 0), 0);
        assert_eq!(page_count(0, 0), 0);
    }

    #[test]
    fn page_numbers_exclude_current() {
        assert_eq!(page_numbers(25, 10, 2), vec![1, 3]);
        assert_eq!(page_numbers(25, 10, 1), vec![2, 3]);
        assert_eq!(page_numbers(10, 10, 1), Vec::<u32>::new());
        assert_eq!(page_numbers(0, 10, 1), Vec::<u32>::new());
        assert_eq!(page_numbers(25, 0, 1), Vec::<u32>::new());
    }

    #[test]
    fn showing_range_for_full_and_partial_pages() {
        assert_eq!(showing_range(1, 10, 25), "1 to 10");
        assert_eq!(showing_range(3, 10, 25), "21 to 25");
        assert_eq!(showing_range(1, 10, 4), "1 to 4");
    }

    #[test]
    fn showing_range_for_empty_results() {
        assert_eq!(showing_range(1, 10, 0), "0");
    }

    #[test]
    fn showing_range_past_the_last_page_is_empty() {
        assert_eq!(showing_range(5, 10, 25), "0");
        assert_eq!(showing_range(4, 10, 30), "0");
        // last page that still has rows is unaffected
        assert_eq!(showing_range(3, 10, 25), "21 to 25");
    }
}
