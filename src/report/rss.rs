//! RSS 2.0 feed of the top-ranked repositories

use chrono::{DateTime, Utc};
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::export::{ExportError, ExportResult};
use crate::render::format::{compact_stars, escape};
use crate::store::{FixtureStore, RepoRecord};

/// Items in the feed
pub const FEED_ITEMS: usize = 10;

const CHANNEL_TITLE: &str = "Synapse - Trending Repositories";
const CHANNEL_DESCRIPTION: &str = "Daily trending repositories with Hacker News signal";

type XmlWriter = Writer<Vec<u8>>;

/// Render the feed as of `now`
pub fn generate_rss(store: &FixtureStore, now: DateTime<Utc>, base_url: &str) -> ExportResult<String> {
    let date = now.format("%Y-%m-%d").to_string();
    let pub_date = now.format("%a, %d %b %Y %H:%M:%S +0000").to_string();

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_feed(&mut writer, store, &date, &pub_date, base_url).map_err(|e| ExportError::Feed(e.to_string()))?;

    String::from_utf8(writer.into_inner()).map_err(|e| ExportError::Feed(e.to_string()))
}

fn write_feed(
    writer: &mut XmlWriter,
    store: &FixtureStore,
    date: &str,
    pub_date: &str,
    base_url: &str,
) -> quick_xml::Result<()> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("rss").with_attributes([
        ("version", "2.0"),
        ("xmlns:atom", "http://www.w3.org/2005/Atom"),
    ])))?;
    writer.write_event(Event::Start(BytesStart::new("channel")))?;

    text_element(writer, "title", CHANNEL_TITLE)?;
    text_element(writer, "link", base_url)?;
    text_element(writer, "description", CHANNEL_DESCRIPTION)?;
    text_element(writer, "language", "en-us")?;
    text_element(writer, "pubDate", pub_date)?;
    text_element(writer, "lastBuildDate", pub_date)?;

    for repo in store.repos().iter().take(FEED_ITEMS) {
        write_item(writer, repo, date, pub_date)?;
    }

    writer.write_event(Event::End(BytesEnd::new("channel")))?;
    writer.write_event(Event::End(BytesEnd::new("rss")))?;
    Ok(())
}

fn write_item(writer: &mut XmlWriter, repo: &RepoRecord, date: &str, pub_date: &str) -> quick_xml::Result<()> {
    let url = repo.url();

    writer.write_event(Event::Start(BytesStart::new("item")))?;
    text_element(writer, "title", &format!("#{} {}", repo.rank, repo.full_name()))?;
    text_element(writer, "link", &url)?;

    writer.write_event(Event::Start(BytesStart::new("description")))?;
    writer.write_event(Event::CData(BytesCData::new(item_html(repo))))?;
    writer.write_event(Event::End(BytesEnd::new("description")))?;

    writer.write_event(Event::Start(
        BytesStart::new("guid").with_attributes([("isPermaLink", "false")]),
    ))?;
    writer.write_event(Event::Text(BytesText::new(&format!("{}#{}", url, date))))?;
    writer.write_event(Event::End(BytesEnd::new("guid")))?;

    text_element(writer, "pubDate", pub_date)?;
    writer.write_event(Event::End(BytesEnd::new("item")))?;
    Ok(())
}

fn text_element(writer: &mut XmlWriter, name: &str, text: &str) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn item_html(repo: &RepoRecord) -> String {
    let language = if repo.language.is_empty() { "Unknown" } else { repo.language.as_str() };
    format!(
        "<p><strong>{}</strong></p><p>{}</p><p>\u{2b50} {} | {} | {} HN comments | {}</p>",
        escape(&repo.full_name()),
        escape(&repo.description),
        escape(&compact_stars(&repo.stars)),
        escape(language),
        repo.hn_comments,
        escape(&repo.category),
    )
}
