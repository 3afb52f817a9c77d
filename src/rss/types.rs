//! RSS 2.0 wire shapes.
//!
//! These mirror the element layout of an RSS 2.0 document. String fields
//! follow omit-if-empty semantics: the XML writer skips empty strings and
//! `None` values, so a translator expresses "absent" as `""` or `None`.

use serde::Serialize;

use crate::feed::MediaContent;

// ============================================================================
// Channel
// ============================================================================

/// Content model of the `<channel>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RssChannel {
    pub title: String,
    pub link: String,
    pub description: String,
    pub language: String,
    pub copyright: String,
    /// `email (name)` of the feed author.
    pub managing_editor: String,
    pub web_master: String,
    /// Created timestamp, falling back to updated.
    pub pub_date: String,
    /// Updated timestamp only.
    pub last_build_date: String,
    pub category: String,
    pub generator: String,
    pub docs: String,
    pub cloud: String,
    pub ttl: Option<u32>,
    pub rating: String,
    pub skip_hours: String,
    pub skip_days: String,
    pub image: Option<RssImage>,
    pub text_input: Option<RssTextInput>,
    #[serde(rename = "item")]
    pub items: Vec<RssItem>,
    pub atom: Option<RssAtomLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RssImage {
    pub url: String,
    pub title: String,
    pub link: String,
    /// Omitted when zero.
    pub width: u32,
    /// Omitted when zero.
    pub height: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RssTextInput {
    pub title: String,
    pub description: String,
    pub name: String,
    pub link: String,
}

/// `<atom:link href rel type/>` advertising the feed's own URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RssAtomLink {
    pub href: String,
    pub rel: String,
    #[serde(rename = "type")]
    pub media_type: String,
}

// ============================================================================
// Item
// ============================================================================

/// Content model of one `<item>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RssItem {
    pub title: String,
    pub link: String,
    pub description: String,
    /// Rendered as a CDATA `content:encoded` block.
    pub content: Option<RssContent>,
    pub author: String,
    pub category: String,
    pub comments: String,
    pub enclosure: Option<RssEnclosure>,
    pub guid: String,
    pub pub_date: String,
    pub source: String,
    pub media_content: Option<MediaContent>,
    pub merchant: RssMerchant,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RssContent {
    pub content: String,
}

/// `<enclosure url length type/>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RssEnclosure {
    pub url: String,
    pub length: String,
    #[serde(rename = "type")]
    pub media_type: String,
}

/// `g:`-prefixed Google Merchant Center elements of an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RssMerchant {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub condition: Option<String>,
    pub price: Option<String>,
    pub sale_price: Option<String>,
    pub availability: Option<String>,
    pub image_link: Option<String>,
    /// One `g:additional_image_link` element per entry, in order.
    pub additional_image_link: Vec<String>,
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

impl RssMerchant {
    /// Single-valued attributes written before `g:additional_image_link`,
    /// paired with their element names in document order.
    pub fn fields_before_images(&self) -> [(&'static str, Option<&str>); 9] {
        [
            ("g:id", self.id.as_deref()),
            ("g:title", self.title.as_deref()),
            ("g:description", self.description.as_deref()),
            ("g:link", self.link.as_deref()),
            ("g:condition", self.condition.as_deref()),
            ("g:price", self.price.as_deref()),
            ("g:sale_price", self.sale_price.as_deref()),
            ("g:availability", self.availability.as_deref()),
            ("g:image_link", self.image_link.as_deref()),
        ]
    }

    /// Single-valued attributes written after `g:additional_image_link`.
    pub fn fields_after_images(&self) -> [(&'static str, Option<&str>); 15] {
        [
            ("g:gtin", self.gtin.as_deref()),
            ("g:mpn", self.mpn.as_deref()),
            ("g:brand", self.brand.as_deref()),
            (
                "g:google_product_category",
                self.google_product_category.as_deref(),
            ),
            ("g:shipping", self.shipping.as_deref()),
            ("g:inventory", self.inventory.as_deref()),
            ("g:color", self.color.as_deref()),
            ("g:product_type", self.product_type.as_deref()),
            ("g:custom_label_0", self.custom_label_0.as_deref()),
            ("g:custom_label_1", self.custom_label_1.as_deref()),
            ("g:custom_label_2", self.custom_label_2.as_deref()),
            ("g:custom_label_3", self.custom_label_3.as_deref()),
            ("g:custom_label_4", self.custom_label_4.as_deref()),
            ("g:item_group_id", self.item_group_id.as_deref()),
            ("g:promotion_id", self.promotion_id.as_deref()),
        ]
    }

    /// True when the item carries a usable merchant id.
    pub fn has_id(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.is_empty())
    }
}
