//! Canonical record shape and the one-time ingestion step that maps the
//! heterogeneous site data files onto it.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Read time shown for posts that do not declare one.
pub const DEFAULT_READ_MINUTES: u32 = 3;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];
const TIME_FORMATS: [&str; 3] = ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"];

const TITLE_KEYS: &[&str] = &["title", "titulo", "nombre", "name"];
const EXCERPT_KEYS: &[&str] = &["excerpt", "extracto", "descripcion", "description", "meta"];
const CATEGORY_KEYS: &[&str] = &["categoria", "cat", "category"];
const PRICE_KEYS: &[&str] = &["price", "precio"];
const READ_KEYS: &[&str] = &["lecturaMin", "readMinutes"];
const DATE_KEYS: &[&str] = &["fecha", "date", "published"];
const ID_KEYS: &[&str] = &["slug", "sku", "id"];
const IMAGE_KEYS: &[&str] = &["portada", "imagen", "img", "image"];

/// Per-record overrides for page metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeoOverrides {
    pub title: Option<String>,
    pub description: Option<String>,
    pub og_image: Option<String>,
}

/// One blog post or catalog product.
///
/// Every field has a usable default, so the engine never has to guard
/// against missing data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Slug for posts, SKU for products.
    pub id: String,
    pub title: String,
    pub excerpt: String,
    /// Tags for posts; the single category for products.
    pub tags: Vec<String>,
    pub price: f64,
    pub read_minutes: u32,
    pub published: Option<DateTime<Utc>>,
    /// Date exactly as it appeared in the source.
    pub published_raw: String,
    pub image: String,
    pub href: String,
    pub author: String,
    /// Post body, trusted HTML from the data file.
    pub content: String,
    pub seo: Option<SeoOverrides>,
}

impl Default for Record {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            excerpt: String::new(),
            tags: Vec::new(),
            price: 0.0,
            read_minutes: DEFAULT_READ_MINUTES,
            published: None,
            published_raw: String::new(),
            image: String::new(),
            href: String::new(),
            author: String::new(),
            content: String::new(),
            seo: None,
        }
    }
}

impl Record {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_date(mut self, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        self.published = parse_published(&raw);
        self.published_raw = raw;
        self
    }

    /// Build a record from one JSON object of a data file.
    pub fn from_json(object: &Map<String, Value>) -> Self {
        let mut tags = match object.get("tags") {
            Some(Value::Array(items)) => items.iter().filter_map(as_text).collect(),
            Some(other) => as_text(other).into_iter().collect(),
            None => Vec::new(),
        };
        if let Some(category) = first_text(object, CATEGORY_KEYS) {
            if !tags.contains(&category) {
                tags.push(category);
            }
        }

        let published_raw = first_text(object, DATE_KEYS).unwrap_or_default();
        let published = parse_published(&published_raw);
        if published.is_none() && !published_raw.is_empty() {
            debug!("unparsable publication date {:?}", published_raw);
        }

        let read_minutes = first_number(object, READ_KEYS)
            .filter(|m| *m >= 1.0)
            .map(|m| m as u32)
            .unwrap_or(DEFAULT_READ_MINUTES);

        let seo = object
            .get("seo")
            .and_then(|v| serde_json::from_value::<SeoOverrides>(v.clone()).ok());

        Self {
            id: first_text(object, ID_KEYS).unwrap_or_default(),
            title: first_text(object, TITLE_KEYS).unwrap_or_default(),
            excerpt: first_text(object, EXCERPT_KEYS).unwrap_or_default(),
            tags,
            price: first_number(object, PRICE_KEYS).unwrap_or(0.0),
            read_minutes,
            published,
            published_raw,
            image: first_text(object, IMAGE_KEYS).unwrap_or_default(),
            href: first_text(object, &["href"]).unwrap_or_default(),
            author: first_text(object, &["autor", "author"]).unwrap_or_default(),
            content: first_text(object, &["contenido", "content"]).unwrap_or_default(),
            seo,
        }
    }
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn first_text(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| object.get(*k))
        .filter_map(as_text)
        .find(|s| !s.is_empty())
}

fn first_number(object: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .filter_map(|k| object.get(*k))
        .find_map(|v| match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        })
        .filter(|n| n.is_finite())
}

/// Parse a publication date.
///
/// Accepts RFC 3339, `date[T ]time` and plain dates with `-`, `/` or `.`
/// separators. Values without an offset are taken as UTC.
pub fn parse_published(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for date_fmt in DATE_FORMATS {
        for time_fmt in TIME_FORMATS {
            for fmt in [format!("{date_fmt}T{time_fmt}"), format!("{date_fmt} {time_fmt}")] {
                if let Ok(dt) = NaiveDateTime::parse_from_str(s, &fmt) {
                    return Some(dt.and_utc());
                }
            }
        }
    }

    DATE_FORMATS.iter().find_map(|fmt| {
        NaiveDate::parse_from_str(s, fmt)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
    })
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("data file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("data file must contain a JSON array, found {0}")]
    NotAnArray(&'static str),
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse a whole data file into records.
///
/// Entries that are not JSON objects are skipped.
pub fn parse_records(source: &str) -> Result<Vec<Record>, LoadError> {
    let document: Value = serde_json::from_str(source)?;
    let Value::Array(items) = document else {
        return Err(LoadError::NotAnArray(kind_of(&document)));
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item {
            Value::Object(object) => records.push(Record::from_json(object)),
            other => warn!("skipping entry {} of kind {}", index, kind_of(other)),
        }
    }
    Ok(records)
}

/// Result of loading a data file, in the shape a page consumes it:
/// a success flag and a list that is empty on failure.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    pub ok: bool,
    pub records: Vec<Record>,
    pub error: Option<String>,
}

impl LoadOutcome {
    pub fn from_result<E: std::fmt::Display>(result: Result<Vec<Record>, E>) -> Self {
        match result {
            Ok(records) => Self {
                ok: true,
                records,
                error: None,
            },
            Err(e) => {
                warn!("failed to load records: {}", e);
                Self {
                    ok: false,
                    records: Vec::new(),
                    error: Some(e.to_string()),
                }
            }
        }
    }
}
