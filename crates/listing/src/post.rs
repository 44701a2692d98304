//! Single-post lookup and the page metadata derived from a post.

use crate::query::SortKey;
use crate::record::Record;
use crate::sort::sort;
use serde::Serialize;
use serde_json::{Value, json};
use url::Url;

/// How many recent posts a missing-post page suggests.
pub const DEFAULT_SUGGESTIONS: usize = 3;

pub fn find_by_slug<'a>(records: &'a [Record], slug: &str) -> Option<&'a Record> {
    records.iter().find(|r| r.id == slug)
}

/// The `n` most recent records, newest first.
pub fn suggestions(records: &[Record], n: usize) -> Vec<&Record> {
    let mut recent: Vec<&Record> = records.iter().collect();
    sort(&mut recent, SortKey::DateDesc);
    recent.truncate(n);
    recent
}

/// Title, description and social/structured metadata for one post page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    /// Absolute when a base URL was given and the image is resolvable.
    pub image: Option<String>,
    /// `(attribute, name, content)`, e.g. `("property", "og:title", ...)`.
    pub meta: Vec<(&'static str, &'static str, String)>,
    pub json_ld: Value,
}

impl SeoMeta {
    pub fn for_record(record: &Record, site_name: &str, base_url: Option<&Url>) -> Self {
        let seo = record.seo.clone().unwrap_or_default();
        let title = seo
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| format!("{} | {}", record.title, site_name));
        let description = seo
            .description
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| record.excerpt.clone());
        let image = seo
            .og_image
            .filter(|i| !i.is_empty())
            .or_else(|| Some(record.image.clone()).filter(|i| !i.is_empty()))
            .map(|img| resolve(&img, base_url));

        let mut meta = vec![
            ("name", "description", description.clone()),
            ("property", "og:type", "article".to_string()),
            ("property", "og:title", title.clone()),
            ("property", "og:description", description.clone()),
        ];
        if let Some(img) = &image {
            meta.push(("property", "og:image", img.clone()));
        }
        meta.push(("name", "twitter:card", "summary_large_image".to_string()));
        meta.push(("name", "twitter:title", title.clone()));
        meta.push(("name", "twitter:description", description.clone()));
        if let Some(img) = &image {
            meta.push(("name", "twitter:image", img.clone()));
        }

        let author = if record.author.is_empty() {
            site_name
        } else {
            record.author.as_str()
        };
        let mut json_ld = json!({
            "@context": "https://schema.org",
            "@type": "Article",
            "headline": record.title,
            "author": { "@type": "Organization", "name": author },
            "description": description,
        });
        if let Some(object) = json_ld.as_object_mut() {
            if !record.published_raw.is_empty() {
                object.insert("datePublished".to_string(), json!(record.published_raw));
            }
            if let Some(img) = &image {
                object.insert("image".to_string(), json!([img]));
            }
        }

        Self {
            title,
            description,
            image,
            meta,
            json_ld,
        }
    }
}

/// Resolve a possibly relative asset path against the site base URL.
fn resolve(path: &str, base_url: Option<&Url>) -> String {
    base_url
        .and_then(|base| base.join(path).ok())
        .map(String::from)
        .unwrap_or_else(|| path.to_string())
}
