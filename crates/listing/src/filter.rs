use crate::normalize::normalize;
use crate::query::Query;
use crate::record::Record;

/// Predicates of a [`Query`], with the term normalized once.
pub struct Matcher<'q> {
    term: String,
    tag: Option<&'q str>,
    max_price: Option<f64>,
}

impl<'q> Matcher<'q> {
    pub fn new(query: &'q Query) -> Self {
        Self {
            term: normalize(&query.term),
            tag: query.tag.as_deref(),
            max_price: query.max_price,
        }
    }

    fn matches_text(&self, record: &Record) -> bool {
        if self.term.is_empty() {
            return true;
        }
        normalize(&record.title).contains(&self.term)
            || normalize(&record.excerpt).contains(&self.term)
            || record.tags.iter().any(|t| normalize(t).contains(&self.term))
    }

    fn matches_tag(&self, record: &Record) -> bool {
        self.tag
            .map_or(true, |tag| record.tags.iter().any(|t| t == tag))
    }

    fn matches_price(&self, record: &Record) -> bool {
        self.max_price.map_or(true, |max| record.price <= max)
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.matches_text(record) && self.matches_tag(record) && self.matches_price(record)
    }
}

/// Keep the records that satisfy every active predicate, in source order.
pub fn filter<'a>(records: &'a [Record], query: &Query) -> Vec<&'a Record> {
    let matcher = Matcher::new(query);
    records.iter().filter(|r| matcher.matches(r)).collect()
}
