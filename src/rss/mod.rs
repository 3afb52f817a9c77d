//! RSS 2.0 translation.
//!
//! [`to_document`] runs the whole pipeline: the feed header becomes a
//! [`RssChannel`], each item becomes a [`RssItem`], and the channel is
//! wrapped in an [`RssDocument`] envelope ready for [`crate::xml`].

mod channel;
mod envelope;
mod item;
mod types;

pub use channel::{translate_feed, ChannelDefaults};
pub use envelope::{RssDocument, MEDIA_NAMESPACE, MERCHANT_NAMESPACE, RSS_VERSION};
pub use item::translate_item;
pub use types::{
    RssAtomLink, RssChannel, RssContent, RssEnclosure, RssImage, RssItem, RssMerchant,
    RssTextInput,
};

use crate::feed::Feed;

/// Translates a feed into a complete RSS 2.0 document structure.
pub fn to_document(feed: &Feed) -> RssDocument {
    let document = RssDocument::wrap(translate_feed(feed));
    tracing::debug!(
        items = document.channel.items.len(),
        merchant_ns = document.merchant_namespace.is_some(),
        media_ns = document.media_namespace.is_some(),
        "Translated feed to RSS"
    );
    document
}
