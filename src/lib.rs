//! # syndicate
//!
//! Translates a format-agnostic [`feed::Feed`] into an RSS 2.0 document.
//!
//! ```
//! use syndicate::feed::{Feed, Item, Link};
//! use syndicate::rss::to_document;
//! use syndicate::xml::{to_xml_string, RenderOptions};
//!
//! let mut feed = Feed {
//!     title: "Example".to_string(),
//!     link: Link::new("https://example.com"),
//!     description: "Example feed".to_string(),
//!     ..Feed::default()
//! };
//! feed.add(Item {
//!     title: "Hello".to_string(),
//!     ..Item::default()
//! });
//!
//! let xml = to_xml_string(&to_document(&feed), &RenderOptions::compact()).unwrap();
//! assert!(xml.contains("<item><title>Hello</title></item>"));
//! ```

pub mod config;
pub mod feed;
pub mod rss;
pub mod util;
pub mod xml;
