//! Listing query engine for the site's blog and catalog pages.
//!
//! The engine is pure: it takes an already loaded record list and a
//! [`Query`], and returns the page to render. Loading, rendering and
//! persistence belong to the caller.

pub mod filter;
pub mod normalize;
pub mod paginate;
pub mod pager;
pub mod post;
pub mod query;
pub mod record;
pub mod sort;
pub mod view;

pub use filter::{Matcher, filter};
pub use normalize::{normalize, sanitize};
pub use paginate::{Page, paginate, total_pages};
pub use pager::{PageLabel, build_page_list};
pub use post::{DEFAULT_SUGGESTIONS, SeoMeta, find_by_slug, suggestions};
pub use query::{Query, SortDirection, SortKey};
pub use record::{LoadError, LoadOutcome, Record, SeoOverrides, parse_published, parse_records};
pub use sort::{compare_titles, sort};
pub use view::{ListingView, distinct_tags, run};
