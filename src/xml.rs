//! XML rendering of [`RssDocument`] values.
//!
//! Built on the `quick-xml` event writer. Empty strings and `None` values are
//! skipped, except for the elements RSS 2.0 marks as required. Item content
//! is written as CDATA.

use std::borrow::Cow;
use std::io::Write;

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Deserialize;
use thiserror::Error;

use crate::rss::{RssChannel, RssDocument, RssItem};

const ATOM_NAMESPACE: &str = "http://www.w3.org/2005/Atom";
/// Stands in for characters XML 1.0 does not allow.
const REPLACEMENT: char = '\u{FFFD}';

/// Errors raised while encoding a document.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The underlying writer failed.
    #[error("Failed to write XML: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML encoding error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Rendered XML contains invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Output formatting knobs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Spaces per nesting level. 0 renders everything on one line.
    pub indent: usize,
    /// Emit `<?xml version="1.0" encoding="UTF-8"?>` first.
    pub xml_declaration: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            xml_declaration: true,
        }
    }
}

impl RenderOptions {
    pub fn compact() -> Self {
        Self {
            indent: 0,
            ..Self::default()
        }
    }
}

/// Renders a document to a `String`.
pub fn to_xml_string(
    document: &RssDocument,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let mut buf = Vec::new();
    write_document(document, &mut buf, options)?;
    Ok(String::from_utf8(buf)?)
}

/// Renders a document into any byte sink.
pub fn write_document<W: Write>(
    document: &RssDocument,
    sink: W,
    options: &RenderOptions,
) -> Result<(), RenderError> {
    let mut writer = if options.indent > 0 {
        Writer::new_with_indent(sink, b' ', options.indent)
    } else {
        Writer::new(sink)
    };

    if options.xml_declaration {
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    }

    let mut rss = BytesStart::new("rss");
    rss.push_attribute(("version", document.version));
    if let Some(ns) = document.merchant_namespace {
        rss.push_attribute(("xmlns:g", ns));
    }
    if let Some(ns) = document.media_namespace {
        rss.push_attribute(("xmlns:media", ns));
    }
    writer.write_event(Event::Start(rss))?;
    write_channel(&mut writer, &document.channel)?;
    writer.write_event(Event::End(BytesEnd::new("rss")))?;

    Ok(())
}

fn write_channel<W: Write>(
    writer: &mut Writer<W>,
    channel: &RssChannel,
) -> Result<(), RenderError> {
    writer.write_event(Event::Start(BytesStart::new("channel")))?;

    required(writer, "title", &channel.title)?;
    required(writer, "link", &channel.link)?;
    required(writer, "description", &channel.description)?;
    optional(writer, "language", &channel.language)?;
    optional(writer, "copyright", &channel.copyright)?;
    optional(writer, "managingEditor", &channel.managing_editor)?;
    optional(writer, "webMaster", &channel.web_master)?;
    optional(writer, "pubDate", &channel.pub_date)?;
    optional(writer, "lastBuildDate", &channel.last_build_date)?;
    optional(writer, "category", &channel.category)?;
    optional(writer, "generator", &channel.generator)?;
    optional(writer, "docs", &channel.docs)?;
    optional(writer, "cloud", &channel.cloud)?;
    if let Some(ttl) = channel.ttl {
        required(writer, "ttl", &ttl.to_string())?;
    }
    optional(writer, "rating", &channel.rating)?;
    optional(writer, "skipHours", &channel.skip_hours)?;
    optional(writer, "skipDays", &channel.skip_days)?;

    if let Some(image) = &channel.image {
        writer.write_event(Event::Start(BytesStart::new("image")))?;
        required(writer, "url", &image.url)?;
        required(writer, "title", &image.title)?;
        required(writer, "link", &image.link)?;
        if image.width > 0 {
            required(writer, "width", &image.width.to_string())?;
        }
        if image.height > 0 {
            required(writer, "height", &image.height.to_string())?;
        }
        writer.write_event(Event::End(BytesEnd::new("image")))?;
    }

    if let Some(input) = &channel.text_input {
        writer.write_event(Event::Start(BytesStart::new("textInput")))?;
        required(writer, "title", &input.title)?;
        required(writer, "description", &input.description)?;
        required(writer, "name", &input.name)?;
        required(writer, "link", &input.link)?;
        writer.write_event(Event::End(BytesEnd::new("textInput")))?;
    }

    for item in &channel.items {
        write_item(writer, item)?;
    }

    if let Some(atom) = &channel.atom {
        // Declared locally so the root keeps only the namespaces it probes for.
        let mut link = BytesStart::new("atom:link");
        link.push_attribute(("xmlns:atom", ATOM_NAMESPACE));
        link.push_attribute(("href", &*xml_safe(&atom.href)));
        link.push_attribute(("rel", &*xml_safe(&atom.rel)));
        link.push_attribute(("type", &*xml_safe(&atom.media_type)));
        writer.write_event(Event::Empty(link))?;
    }

    writer.write_event(Event::End(BytesEnd::new("channel")))?;
    Ok(())
}

fn write_item<W: Write>(writer: &mut Writer<W>, item: &RssItem) -> Result<(), RenderError> {
    writer.write_event(Event::Start(BytesStart::new("item")))?;

    optional(writer, "title", &item.title)?;
    optional(writer, "link", &item.link)?;
    optional(writer, "description", &item.description)?;
    if let Some(content) = &item.content {
        writer.write_event(Event::Start(BytesStart::new("content:encoded")))?;
        write_cdata(writer, &content.content)?;
        writer.write_event(Event::End(BytesEnd::new("content:encoded")))?;
    }
    optional(writer, "author", &item.author)?;
    optional(writer, "category", &item.category)?;
    optional(writer, "comments", &item.comments)?;
    if let Some(enclosure) = &item.enclosure {
        let mut el = BytesStart::new("enclosure");
        el.push_attribute(("url", &*xml_safe(&enclosure.url)));
        el.push_attribute(("length", &*xml_safe(&enclosure.length)));
        el.push_attribute(("type", &*xml_safe(&enclosure.media_type)));
        writer.write_event(Event::Empty(el))?;
    }
    optional(writer, "guid", &item.guid)?;
    optional(writer, "pubDate", &item.pub_date)?;
    optional(writer, "source", &item.source)?;
    if let Some(media) = &item.media_content {
        let mut el = BytesStart::new("media:content");
        el.push_attribute(("url", &*xml_safe(&media.url)));
        writer.write_event(Event::Empty(el))?;
    }

    for (name, value) in item.merchant.fields_before_images() {
        optional(writer, name, value.unwrap_or_default())?;
    }
    for image in &item.merchant.additional_image_link {
        required(writer, "g:additional_image_link", image)?;
    }
    for (name, value) in item.merchant.fields_after_images() {
        optional(writer, name, value.unwrap_or_default())?;
    }

    writer.write_event(Event::End(BytesEnd::new("item")))?;
    Ok(())
}

/// Writes `<name>value</name>`, even when `value` is empty.
fn required<W: Write>(writer: &mut Writer<W>, name: &str, value: &str) -> Result<(), RenderError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    // An empty text event keeps the closing tag on the same line when indenting.
    writer.write_event(Event::Text(BytesText::new(&xml_safe(value))))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Writes `<name>value</name>` unless `value` is empty.
fn optional<W: Write>(writer: &mut Writer<W>, name: &str, value: &str) -> Result<(), RenderError> {
    if value.is_empty() {
        return Ok(());
    }
    required(writer, name, value)
}

/// Writes `text` as CDATA, splitting sections so no `]]>` ends one early.
fn write_cdata<W: Write>(writer: &mut Writer<W>, text: &str) -> Result<(), RenderError> {
    let text = xml_safe(text);
    for section in BytesCData::escaped(&text) {
        writer.write_event(Event::CData(section))?;
    }
    Ok(())
}

/// Replaces characters outside the XML 1.0 `Char` production with U+FFFD.
fn xml_safe(value: &str) -> Cow<'_, str> {
    if value.chars().all(is_xml_char) {
        return Cow::Borrowed(value);
    }
    Cow::Owned(
        value
            .chars()
            .map(|c| if is_xml_char(c) { c } else { REPLACEMENT })
            .collect(),
    )
}

fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}
