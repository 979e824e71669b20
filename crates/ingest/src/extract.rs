//! Full-article HTML extraction.
//!
//! Publisher pages carry the publication timestamp in a `datePublished`
//! meta tag and the body in one of a few known containers, newest markup
//! first. Paragraph text is joined with newlines; a container without
//! paragraphs contributes its raw text.

use chrono::Utc;
use newsroom_core::types::Timestamp;
use scraper::{Html, Selector};

/// Body container selectors, tried in order.
const BODY_SELECTORS: &[&str] = &["div.article-body", "div.hs-article-content", "article"];

/// Extracted article body and publication timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedArticle {
    pub content: String,
    pub published_at: Option<Timestamp>,
}

/// Extract the article body and publication date from a page.
///
/// Returns `None` when no known body container matches or the matched
/// container holds no text.
pub fn extract_article(html: &str) -> Option<ExtractedArticle> {
    let document = Html::parse_document(html);

    let published_at = extract_published_at(&document);

    let paragraph = Selector::parse("p").expect("static selector");
    for selector_str in BODY_SELECTORS {
        let selector = Selector::parse(selector_str).expect("static selector");
        let Some(container) = document.select(&selector).next() else {
            continue;
        };

        let paragraphs: Vec<String> = container
            .select(&paragraph)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
            .collect();

        let content = if paragraphs.is_empty() {
            container.text().collect::<String>().trim().to_string()
        } else {
            paragraphs.join("\n")
        };

        if content.is_empty() {
            return None;
        }
        return Some(ExtractedArticle {
            content,
            published_at,
        });
    }

    None
}

fn extract_published_at(document: &Html) -> Option<Timestamp> {
    let selector = Selector::parse(r#"meta[itemprop="datePublished"]"#).expect("static selector");
    let value = document.select(&selector).next()?.value().attr("content")?;
    chrono::DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_are_joined_with_newlines() {
        let html = r#"<html><body>
            <div class="article-body"><p>Eka.</p><p>Toka.</p></div>
        </body></html>"#;
        let extracted = extract_article(html).unwrap();
        assert_eq!(extracted.content, "Eka.\nToka.");
    }

    #[test]
    fn falls_back_through_known_containers() {
        let html = r#"<html><body>
            <div class="hs-article-content"><p>Sisältö.</p></div>
        </body></html>"#;
        assert_eq!(extract_article(html).unwrap().content, "Sisältö.");

        let html = "<html><body><article><p>Viimeinen.</p></article></body></html>";
        assert_eq!(extract_article(html).unwrap().content, "Viimeinen.");
    }

    #[test]
    fn container_without_paragraphs_contributes_raw_text() {
        let html = r#"<div class="article-body">Pelkkää tekstiä</div>"#;
        assert_eq!(extract_article(html).unwrap().content, "Pelkkää tekstiä");
    }

    #[test]
    fn missing_body_container_yields_none() {
        let html = "<html><body><div class=\"sidebar\">ads</div></body></html>";
        assert!(extract_article(html).is_none());
    }

    #[test]
    fn date_published_meta_is_parsed() {
        let html = r#"<html><head>
            <meta itemprop="datePublished" content="2025-02-03T10:00:00+02:00">
        </head><body><article><p>X.</p></article></body></html>"#;
        let extracted = extract_article(html).unwrap();
        let published = extracted.published_at.unwrap();
        assert_eq!(published.to_rfc3339(), "2025-02-03T08:00:00+00:00");
    }

    #[test]
    fn unparseable_date_is_dropped() {
        let html = r#"<html><head>
            <meta itemprop="datePublished" content="yesterday">
        </head><body><article><p>X.</p></article></body></html>"#;
        assert!(extract_article(html).unwrap().published_at.is_none());
    }
}
