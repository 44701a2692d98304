//! Compact paginator labels such as `1 … 5 [6] 7 … 20`.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageLabel {
    Page(usize),
    /// An elided run of pages.
    Ellipsis,
}

impl fmt::Display for PageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageLabel::Page(n) => write!(f, "{}", n),
            PageLabel::Ellipsis => f.write_str("…"),
        }
    }
}

/// Build paginator labels for `current` out of `total` pages.
///
/// Up to `max_visible` pages are listed in full. Past that, page 1, the last
/// page and `current` are always present, and neighbours of `current` are
/// added alternately below and above until the set holds
/// `min(max_visible - 2, total)` pages. Gaps become [`PageLabel::Ellipsis`].
pub fn build_page_list(current: usize, total: usize, max_visible: usize) -> Vec<PageLabel> {
    let total = total.max(1);
    if total <= max_visible {
        return (1..=total).map(PageLabel::Page).collect();
    }

    let current = current.clamp(1, total);
    let target = max_visible.saturating_sub(2).min(total);
    let mut pages = BTreeSet::from([1, total, current]);

    let mut offset = 1;
    while pages.len() < target && offset < total {
        if current > offset + 1 {
            pages.insert(current - offset);
        }
        if current + offset < total {
            pages.insert(current + offset);
        }
        offset += 1;
    }

    let mut labels = Vec::with_capacity(pages.len() * 2);
    let mut previous: Option<usize> = None;
    for page in pages {
        if previous.is_some_and(|p| page > p + 1) {
            labels.push(PageLabel::Ellipsis);
        }
        labels.push(PageLabel::Page(page));
        previous = Some(page);
    }
    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use PageLabel::{Ellipsis, Page};

    fn numbers(labels: &[PageLabel]) -> Vec<usize> {
        labels
            .iter()
            .filter_map(|l| match l {
                Page(n) => Some(*n),
                Ellipsis => None,
            })
            .collect()
    }

    fn render(labels: &[PageLabel]) -> String {
        labels.iter().map(|l| l.to_string()).collect::<Vec<_>>().join(" ")
    }

    #[rstest]
    #[case(1, 1)]
    #[case(2, 3)]
    #[case(5, 5)]
    fn test_small_totals_list_every_page(#[case] current: usize, #[case] total: usize) {
        let labels = build_page_list(current, total, 5);
        assert_eq!(numbers(&labels), (1..=total).collect::<Vec<_>>());
        assert!(!labels.contains(&Ellipsis));
    }

    #[rstest]
    #[case(6, 20, 5)]
    #[case(1, 20, 5)]
    #[case(20, 20, 5)]
    #[case(2, 20, 5)]
    #[case(10, 50, 9)]
    #[case(3, 7, 6)]
    fn test_structure(#[case] current: usize, #[case] total: usize, #[case] max_visible: usize) {
        let labels = build_page_list(current, total, max_visible);
        let pages = numbers(&labels);

        assert!(pages.contains(&1));
        assert!(pages.contains(&total));
        assert!(pages.contains(&current));
        assert!(pages.windows(2).all(|w| w[0] < w[1]));

        for (i, label) in labels.iter().enumerate() {
            if *label == Ellipsis {
                let (Page(before), Page(after)) = (labels[i - 1], labels[i + 1]) else {
                    panic!("ellipsis must sit between page numbers: {}", render(&labels));
                };
                assert!(after > before + 1);
            }
        }
        for w in labels.windows(2) {
            if let (Page(a), Page(b)) = (w[0], w[1]) {
                assert_eq!(b, a + 1, "missing ellipsis in {}", render(&labels));
            }
        }
    }

    #[rstest]
    #[case(6, 20, 5, "1 … 6 … 20")]
    #[case(1, 20, 5, "1 2 … 20")]
    #[case(20, 20, 5, "1 … 19 20")]
    #[case(6, 20, 7, "1 … 5 6 7 … 20")]
    #[case(10, 50, 9, "1 … 8 9 10 11 12 … 50")]
    fn test_labels(
        #[case] current: usize,
        #[case] total: usize,
        #[case] max_visible: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(render(&build_page_list(current, total, max_visible)), expected);
    }

    #[test]
    fn test_current_out_of_range_is_clamped() {
        assert_eq!(numbers(&build_page_list(99, 20, 5)), vec![1, 19, 20]);
    }
}
