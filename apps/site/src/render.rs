//! Plain-text rendering of listing views for the terminal.

use chrono::Datelike;
use listing::{ListingView, PageLabel, Record, sanitize};

const MONTHS: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{} {}", n, word)
    } else {
        format!("{} {}s", n, word)
    }
}

/// Short es-CO date such as `10 mar 2024`; the raw value when unparsable.
pub fn format_date(record: &Record) -> String {
    match record.published {
        Some(dt) => format!("{} {} {}", dt.day(), MONTHS[dt.month0() as usize], dt.year()),
        None => record.published_raw.clone(),
    }
}

/// Whole-peso price with `.` thousands separators.
pub fn format_cop(price: f64) -> String {
    let rounded = price.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = (rounded.abs() as u64).to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    format!("{}${}", sign, out)
}

/// Escape text for a double-quoted HTML attribute.
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn blog_status(view: &ListingView) -> String {
    if view.total_matches == 0 {
        return "0 artículos.".to_string();
    }
    format!(
        "{} en total. Mostrando {}.",
        plural(view.total_matches, "artículo"),
        view.items.len()
    )
}

pub fn catalog_status(view: &ListingView) -> String {
    let n = view.total_matches;
    let suffix = if n == 1 { "" } else { "s" };
    format!("{n} producto{suffix} visible{suffix}.")
}

/// `Página 2 de 5` followed by the labels, current page in brackets.
pub fn pager(view: &ListingView) -> String {
    let labels: Vec<String> = view
        .pager
        .iter()
        .map(|label| match label {
            PageLabel::Page(n) if *n == view.page => format!("[{}]", n),
            other => other.to_string(),
        })
        .collect();
    format!("Página {} de {}  {}", view.page, view.total_pages, labels.join(" "))
}

pub fn post_card(record: &Record) -> String {
    let tags: Vec<String> = record.tags.iter().map(|t| sanitize(t)).collect();
    let title = if record.title.is_empty() {
        "Artículo".to_string()
    } else {
        sanitize(&record.title)
    };
    format!(
        "{}\n  {} · {} min · {}\n  {}",
        title,
        format_date(record),
        record.read_minutes,
        tags.join(", "),
        sanitize(&record.excerpt)
    )
}

pub fn product_card(record: &Record) -> String {
    let title = if record.title.is_empty() {
        "Producto".to_string()
    } else {
        sanitize(&record.title)
    };
    format!(
        "{}  {}  [{}]\n  {}",
        title,
        format_cop(record.price),
        sanitize(&record.id),
        sanitize(&record.excerpt)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use listing::Query;
    use rstest::rstest;
    use std::num::NonZeroUsize;

    #[rstest]
    #[case(0.0, "$0")]
    #[case(950.0, "$950")]
    #[case(45000.0, "$45.000")]
    #[case(1234567.4, "$1.234.567")]
    #[case(-1500.0, "-$1.500")]
    #[case(-0.4, "$0")]
    fn test_format_cop(#[case] price: f64, #[case] expected: &str) {
        assert_eq!(format_cop(price), expected);
    }

    #[rstest]
    #[case("Poda \"fácil\"", "Poda &quot;fácil&quot;")]
    #[case("Riego & abono", "Riego &amp; abono")]
    #[case("sin cambios", "sin cambios")]
    fn test_escape_attribute(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_attribute(input), expected);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&Record::new("a", "").with_date("2024-03-10")), "10 mar 2024");
        assert_eq!(format_date(&Record::new("a", "").with_date("pronto")), "pronto");
    }

    #[test]
    fn test_status_and_pager() {
        let records: Vec<Record> = (0..13).map(|i| Record::new(i.to_string(), "x")).collect();
        let query = Query::new(NonZeroUsize::new(6).unwrap()).with_page(2);
        let view = listing::run(&records, &query, 5);

        assert_eq!(blog_status(&view), "13 artículos en total. Mostrando 6.");
        assert_eq!(catalog_status(&view), "13 productos visibles.");
        assert_eq!(pager(&view), "Página 2 de 3  1 [2] 3");
    }

    #[test]
    fn test_empty_status() {
        let view = listing::run(&[], &Query::new(NonZeroUsize::new(6).unwrap()), 5);
        assert_eq!(blog_status(&view), "0 artículos.");
        assert_eq!(catalog_status(&view), "0 productos visibles.");
    }

    #[test]
    fn test_cards_strip_markup() {
        let post = Record::new("p", "<b>Poda</b>").with_tags(["jardín"]).with_excerpt("Hoy");
        assert!(post_card(&post).starts_with("bPoda/b\n"));
        let product = Record::new("BG-1", "").with_price(1500.0);
        assert!(product_card(&product).starts_with("Producto  $1.500  [BG-1]"));
    }
}
