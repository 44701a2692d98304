//! Stable ordering of listing records.
//!
//! Records without a parsable publication date go last for both date
//! orders, so the result never depends on how the invalid dates compare.

use crate::query::SortKey;
use crate::record::Record;
use std::borrow::Borrow;
use std::cmp::Ordering;

/// Sort in place. `sort_by` is stable, so equal keys keep dataset order.
pub fn sort<R: Borrow<Record>>(records: &mut [R], key: SortKey) {
    if key == SortKey::Relevance {
        return;
    }
    records.sort_by(|a, b| {
        compare(
            Borrow::<Record>::borrow(a),
            Borrow::<Record>::borrow(b),
            key,
        )
    });
}

pub fn compare(a: &Record, b: &Record, key: SortKey) -> Ordering {
    let direction = key.direction();
    match key {
        SortKey::DateDesc | SortKey::DateAsc => match (a.published, b.published) {
            (Some(da), Some(db)) => direction.apply(da.cmp(&db)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortKey::TitleAsc => compare_titles(&a.title, &b.title),
        SortKey::PriceAsc | SortKey::PriceDesc => direction.apply(a.price.total_cmp(&b.price)),
        SortKey::Relevance => Ordering::Equal,
    }
}

/// Primary collation weights for the site locale (Spanish).
///
/// Accents are ignored at this level, but `ñ` is a letter of its own that
/// sorts right after `n`.
fn primary_weights(s: &str) -> Vec<u32> {
    let mut weights = Vec::with_capacity(s.len());
    for ch in s.chars().flat_map(char::to_lowercase) {
        if ch == 'ñ' {
            weights.push(('n' as u32) * 2 + 1);
            continue;
        }
        match deunicode::deunicode_char(ch) {
            Some(ascii) => weights.extend(
                ascii
                    .chars()
                    .map(|c| (c.to_ascii_lowercase() as u32) * 2),
            ),
            None => weights.push((ch as u32) * 2),
        }
    }
    weights
}

/// Locale-aware title comparison: letters first, then accents, then case.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    primary_weights(a)
        .cmp(&primary_weights(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}
