use std::num::NonZeroUsize;

/// One page of a result list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// Always at least 1, even for an empty list.
    pub total_pages: usize,
    /// Requested page clamped into `1..=total_pages`.
    pub page: usize,
}

impl<T> Page<'_, T> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

pub fn total_pages(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get()).max(1)
}

/// Slice out the requested page, clamping out-of-range page numbers.
pub fn paginate<T>(items: &[T], page: usize, page_size: NonZeroUsize) -> Page<'_, T> {
    let total_pages = total_pages(items.len(), page_size);
    let page = page.clamp(1, total_pages);
    let start = ((page - 1) * page_size.get()).min(items.len());
    let end = (start + page_size.get()).min(items.len());

    Page {
        items: &items[start..end],
        total_pages,
        page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_empty_list() {
        let items: [u32; 0] = [];
        let page = paginate(&items, 5, size(6));
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
        assert!(page.items.is_empty());
        assert!(!page.has_prev());
        assert!(!page.has_next());
    }

    #[test]
    fn test_page_past_end_is_clamped() {
        let items: Vec<usize> = (0..13).collect();
        let page = paginate(&items, 10, size(6));
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 3);
        assert_eq!(page.items, &[12]);
    }

    #[rstest]
    #[case(0, 1, &[0, 1, 2, 3, 4, 5])]
    #[case(1, 1, &[0, 1, 2, 3, 4, 5])]
    #[case(2, 2, &[6, 7, 8, 9, 10, 11])]
    #[case(3, 3, &[12])]
    fn test_slices(#[case] requested: usize, #[case] expected_page: usize, #[case] expected: &[usize]) {
        let items: Vec<usize> = (0..13).collect();
        let page = paginate(&items, requested, size(6));
        assert_eq!(page.page, expected_page);
        assert_eq!(page.items, expected);
    }

    #[rstest]
    #[case(0, 1)]
    #[case(6, 1)]
    #[case(7, 2)]
    #[case(12, 2)]
    #[case(13, 3)]
    fn test_total_pages(#[case] len: usize, #[case] expected: usize) {
        assert_eq!(total_pages(len, size(6)), expected);
    }

    #[test]
    fn test_prev_next() {
        let items: Vec<usize> = (0..13).collect();
        let middle = paginate(&items, 2, size(6));
        assert!(middle.has_prev());
        assert!(middle.has_next());
    }
}
