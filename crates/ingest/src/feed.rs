//! RSS feed parsing.

use chrono::Utc;
use newsroom_core::types::Timestamp;

use crate::IngestError;

/// One usable entry from a feed: entries without a title or link are
/// dropped during parsing.
#[derive(Debug, Clone)]
pub struct FeedEntry {
    pub title: String,
    pub link: String,
    pub author: Option<String>,
    pub published_at: Option<Timestamp>,
}

/// Parse feed XML into entries, dropping ones without a title or link.
pub fn parse_entries(content: &[u8]) -> Result<Vec<FeedEntry>, IngestError> {
    let feed = feed_rs::parser::parse(content)
        .map_err(|e| IngestError::Parse(format!("Failed to parse feed: {e}")))?;

    let entries = feed
        .entries
        .into_iter()
        .filter_map(parse_entry)
        .collect::<Vec<_>>();

    tracing::debug!(entries = entries.len(), "Parsed feed");
    Ok(entries)
}

fn parse_entry(entry: feed_rs::model::Entry) -> Option<FeedEntry> {
    let title = entry.title.map(|t| t.content)?;
    let link = entry.links.first()?.href.clone();

    let author = entry
        .authors
        .first()
        .map(|a| a.name.clone())
        .filter(|name| !name.is_empty());

    let published_at = entry.published.map(|dt| dt.with_timezone(&Utc));

    Some(FeedEntry {
        title,
        link,
        author,
        published_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
        <rss version="2.0">
          <channel>
            <title>Uutiset</title>
            <item>
              <title>Talous kasvoi</title>
              <link>https://hs.fi/talous/1</link>
              <pubDate>Mon, 03 Feb 2025 10:00:00 +0200</pubDate>
            </item>
            <item>
              <link>https://hs.fi/nimeton</link>
            </item>
          </channel>
        </rss>"#;

    #[test]
    fn entries_without_title_are_dropped() {
        let entries = parse_entries(FEED.as_bytes()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Talous kasvoi");
        assert_eq!(entries[0].link, "https://hs.fi/talous/1");
        assert!(entries[0].published_at.is_some());
    }

    #[test]
    fn malformed_xml_is_a_parse_error() {
        let err = parse_entries(b"not a feed").unwrap_err();
        assert!(matches!(err, IngestError::Parse(_)));
    }
}
