use crate::filter::filter;
use crate::paginate::paginate;
use crate::pager::{PageLabel, build_page_list};
use crate::query::Query;
use crate::record::Record;
use crate::sort::{compare_titles, sort};
use tracing::debug;

/// What one listing page shows for a query.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingView<'a> {
    pub items: Vec<&'a Record>,
    /// Matches across all pages.
    pub total_matches: usize,
    pub total_pages: usize,
    pub page: usize,
    pub pager: Vec<PageLabel>,
}

impl ListingView<'_> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Filter, sort, paginate and label in one pass over the source list.
pub fn run<'a>(records: &'a [Record], query: &Query, max_visible: usize) -> ListingView<'a> {
    let mut matches = filter(records, query);
    sort(&mut matches, query.sort);

    let page = paginate(&matches, query.page, query.page_size);
    debug!(
        "query {:?}: {} of {} records match, page {}/{}",
        query.term,
        matches.len(),
        records.len(),
        page.page,
        page.total_pages
    );

    ListingView {
        items: page.items.to_vec(),
        total_matches: matches.len(),
        total_pages: page.total_pages,
        page: page.page,
        pager: build_page_list(page.page, page.total_pages, max_visible),
    }
}

/// Every tag in use, sorted for a tag selector.
pub fn distinct_tags(records: &[Record]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in records.iter().flat_map(|r| r.tags.iter()) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags.sort_by(|a, b| compare_titles(a, b));
    tags
}
