//! Format-agnostic feed model.
//!
//! Callers build one [`Feed`] and hand it to a format translator such as
//! [`crate::rss`]. Translators only read from these types.

mod image_list;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub use image_list::{ImageList, IMAGE_SEPARATOR};

/// A link descriptor (`href` plus optional relation metadata).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub href: String,
    pub rel: String,
    #[serde(rename = "type")]
    pub media_type: String,
    pub length: String,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub url: String,
    pub title: String,
    pub link: String,
    pub width: u32,
    pub height: u32,
}

/// Attached media reference. All three parts are plain strings; the RSS
/// translator decides whether they are complete enough to emit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Enclosure {
    pub url: String,
    pub length: String,
    #[serde(rename = "type")]
    pub media_type: String,
}

/// Media RSS `content` reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaContent {
    pub url: String,
}

/// Self-link advertised through the Atom namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtomLink {
    pub href: String,
    pub rel: String,
    #[serde(rename = "type")]
    pub media_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextInput {
    pub title: String,
    pub description: String,
    pub name: String,
    pub link: String,
}

/// Google Merchant Center product attributes.
///
/// Every attribute is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MerchantAttributes {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub condition: Option<String>,
    pub price: Option<String>,
    pub sale_price: Option<String>,
    pub availability: Option<String>,
    pub image_link: Option<String>,
    pub additional_image_link: Option<ImageList>,
    pub gtin: Option<String>,
    pub mpn: Option<String>,
    pub brand: Option<String>,
    pub google_product_category: Option<String>,
    pub shipping: Option<String>,
    pub inventory: Option<String>,
    pub color: Option<String>,
    pub product_type: Option<String>,
    pub custom_label_0: Option<String>,
    pub custom_label_1: Option<String>,
    pub custom_label_2: Option<String>,
    pub custom_label_3: Option<String>,
    pub custom_label_4: Option<String>,
    pub item_group_id: Option<String>,
    pub promotion_id: Option<String>,
}

/// One entry of a [`Feed`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub title: String,
    pub description: String,
    pub link: Option<Link>,
    /// Full body; rendered separately from the summary in `description`.
    pub content: String,
    pub author: Option<Author>,
    pub enclosure: Option<Enclosure>,
    pub source: Option<Link>,
    pub id: String,
    /// Already formatted publish date, passed through untouched.
    pub pub_date: String,
    pub category: Option<String>,
    pub comments: Option<String>,
    pub media_content: Option<MediaContent>,
    pub merchant: Option<MerchantAttributes>,
}

/// Feed header plus its ordered items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feed {
    pub title: String,
    pub link: Link,
    pub description: String,
    pub author: Option<Author>,
    pub image: Option<Image>,
    pub created: Option<DateTime<FixedOffset>>,
    pub updated: Option<DateTime<FixedOffset>>,
    pub copyright: String,
    pub atom: Option<AtomLink>,
    pub text_input: Option<TextInput>,
    pub items: Vec<Item>,
}

impl Feed {
    /// Appends an item, keeping insertion order.
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Sorts items in place with a stable sort.
    pub fn sort_items_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Item, &Item) -> Ordering,
    {
        self.items.sort_by(compare);
    }
}
