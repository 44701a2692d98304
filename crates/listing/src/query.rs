use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::num::NonZeroUsize;
use strum::{EnumIter, EnumString};

/// Ordering requested by the listing controls.
///
/// The string forms are the option values used by the site's sort selectors.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    EnumString,
    EnumIter,
)]
pub enum SortKey {
    /// Newest first
    #[default]
    #[strum(to_string = "fecha-desc", serialize = "date-desc")]
    #[serde(rename = "fecha-desc", alias = "date-desc")]
    DateDesc,
    #[strum(to_string = "fecha-asc", serialize = "date-asc")]
    #[serde(rename = "fecha-asc", alias = "date-asc")]
    DateAsc,
    #[strum(to_string = "titulo-asc", serialize = "nombre-asc", serialize = "title-asc")]
    #[serde(rename = "titulo-asc", alias = "nombre-asc", alias = "title-asc")]
    TitleAsc,
    #[strum(to_string = "precio-asc", serialize = "price-asc")]
    #[serde(rename = "precio-asc", alias = "price-asc")]
    PriceAsc,
    #[strum(to_string = "precio-desc", serialize = "price-desc")]
    #[serde(rename = "precio-desc", alias = "price-desc")]
    PriceDesc,
    /// Dataset order
    #[strum(to_string = "relevancia", serialize = "relevance")]
    #[serde(rename = "relevancia", alias = "relevance")]
    Relevance,
}

impl SortKey {
    /// Parse a selector value, keeping dataset order for anything unknown.
    /// An empty value selects the default, newest first.
    pub fn lenient(value: &str) -> Self {
        Self::lenient_or(value, SortKey::default())
    }

    /// Like [`SortKey::lenient`], with `empty` standing in for an empty value.
    pub fn lenient_or(value: &str, empty: SortKey) -> Self {
        let value = value.trim();
        if value.is_empty() {
            return empty;
        }
        value.parse().unwrap_or(SortKey::Relevance)
    }

    pub fn direction(&self) -> SortDirection {
        match self {
            SortKey::DateDesc | SortKey::PriceDesc => SortDirection::Descending,
            SortKey::DateAsc | SortKey::TitleAsc | SortKey::PriceAsc | SortKey::Relevance => {
                SortDirection::Ascending
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Apply direction to an ordering
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Combined search, filter, sort and page request.
///
/// A `Query` is a value: every control change produces a new one and the
/// view is recomputed from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Free-text term as typed; normalized when matching.
    pub term: String,
    /// Exact tag or category, compared without normalization.
    pub tag: Option<String>,
    pub max_price: Option<f64>,
    pub sort: SortKey,
    /// 1-based; clamped when paginating.
    pub page: usize,
    pub page_size: NonZeroUsize,
}

impl Query {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            term: String::new(),
            tag: None,
            max_price: None,
            sort: SortKey::default(),
            page: 1,
            page_size,
        }
    }

    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    /// An empty tag means "all tags".
    pub fn with_tag(mut self, tag: Option<impl Into<String>>) -> Self {
        self.tag = tag.map(Into::into).filter(|t: &String| !t.is_empty());
        self
    }

    /// A ceiling of zero (or anything non-positive) means "no ceiling".
    pub fn with_max_price(mut self, max_price: Option<f64>) -> Self {
        self.max_price = max_price.filter(|p| *p > 0.0);
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    #[rstest]
    #[case("fecha-desc", SortKey::DateDesc)]
    #[case("fecha-asc", SortKey::DateAsc)]
    #[case("titulo-asc", SortKey::TitleAsc)]
    #[case("nombre-asc", SortKey::TitleAsc)]
    #[case("precio-asc", SortKey::PriceAsc)]
    #[case("precio-desc", SortKey::PriceDesc)]
    #[case("relevancia", SortKey::Relevance)]
    #[case("date-asc", SortKey::DateAsc)]
    fn test_sort_key_values(#[case] input: &str, #[case] expected: SortKey) {
        assert_eq!(SortKey::lenient(input), expected);
    }

    #[rstest]
    #[case("popularidad")]
    #[case("fecha")]
    fn test_unknown_sort_key_keeps_order(#[case] input: &str) {
        assert_eq!(SortKey::lenient(input), SortKey::Relevance);
    }

    #[rstest]
    #[case("", SortKey::DateDesc, SortKey::DateDesc)]
    #[case("  ", SortKey::DateDesc, SortKey::DateDesc)]
    #[case("", SortKey::Relevance, SortKey::Relevance)]
    #[case("precio-asc", SortKey::Relevance, SortKey::PriceAsc)]
    fn test_empty_selector_uses_surface_default(
        #[case] input: &str,
        #[case] empty: SortKey,
        #[case] expected: SortKey,
    ) {
        assert_eq!(SortKey::lenient_or(input, empty), expected);
    }

    #[test]
    fn test_empty_selector_defaults_to_newest_first() {
        assert_eq!(SortKey::lenient(""), SortKey::DateDesc);
    }

    #[test]
    fn test_display_round_trips_through_lenient() {
        for key in SortKey::iter() {
            assert_eq!(SortKey::lenient(&key.to_string()), key);
        }
    }

    #[test]
    fn test_direction_apply() {
        assert_eq!(SortDirection::Descending.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortDirection::Ascending.apply(Ordering::Less), Ordering::Less);
    }

    #[test]
    fn test_query_defaults_for_empty_controls() {
        let query = Query::new(NonZeroUsize::new(6).unwrap())
            .with_tag(Some(""))
            .with_max_price(Some(0.0));
        assert_eq!(query.tag, None);
        assert_eq!(query.max_price, None);
        assert_eq!(query.page, 1);
    }
}
