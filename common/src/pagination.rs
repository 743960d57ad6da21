//! Which numbered page buttons to show.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// Zero-based page index.
    Page(u64),
    /// A "..." gap.
    Break,
}

/// Lays out page buttons for `total_pages` around the zero-based `selected`.
///
/// About `range` pages are kept around the selection and `margin` pages at
/// each end; every run of skipped pages collapses into one [`PageItem::Break`].
/// Nothing is returned when there are no pages.
pub fn page_items(total_pages: u64, selected: u64, range: u64, margin: u64) -> Vec<PageItem> {
    if total_pages == 0 {
        return Vec::new();
    }
    if total_pages <= range {
        return (0..total_pages).map(PageItem::Page).collect();
    }

    // The window is computed on doubled values so that half of an odd range stays exact.
    let n = total_pages as i128;
    let s = selected.min(total_pages - 1) as i128;
    let r = range as i128;
    let m = margin as i128;

    let (left2, right2) = if 2 * s > 2 * n - r {
        let right2 = 2 * (n - s);
        (2 * r - right2, right2)
    } else if 2 * s < r {
        let left2 = 2 * s;
        (left2, 2 * r - left2)
    } else {
        (r, r)
    };
    let right2 = if s == 0 && r > 1 { right2 - 2 } else { right2 };

    let mut items = Vec::new();
    for index in 0..n {
        let page_number = index + 1;
        let in_margin = page_number <= m || page_number > n - m;
        let in_window = 2 * index >= 2 * s - left2 && 2 * index <= 2 * s + right2;
        if in_margin || in_window {
            items.push(PageItem::Page(index as u64));
        } else if matches!(items.last(), Some(PageItem::Page(_))) && (r > 0 || m > 0) {
            items.push(PageItem::Break);
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Break, Page};

    #[test]
    fn no_pages_no_items() {
        assert!(page_items(0, 0, 3, 1).is_empty());
    }

    #[test]
    fn few_pages_are_all_shown() {
        assert_eq!(page_items(3, 1, 3, 1), vec![Page(0), Page(1), Page(2)]);
    }

    #[test]
    fn first_page_selected() {
        assert_eq!(page_items(10, 0, 3, 1), vec![Page(0), Page(1), Page(2), Break, Page(9)]);
    }

    #[test]
    fn middle_page_selected() {
        assert_eq!(page_items(10, 5, 3, 1), vec![Page(0), Break, Page(4), Page(5), Page(6), Break, Page(9)]);
    }

    #[test]
    fn last_page_selected() {
        assert_eq!(page_items(10, 9, 3, 1), vec![Page(0), Break, Page(7), Page(8), Page(9)]);
    }

    #[test]
    fn adjacent_window_and_margin_do_not_break() {
        assert_eq!(page_items(5, 1, 3, 1), vec![Page(0), Page(1), Page(2), Page(3), Page(4)]);
    }

    #[test]
    fn selection_past_end_is_treated_as_last() {
        assert_eq!(page_items(10, 40, 3, 1), page_items(10, 9, 3, 1));
    }
}
