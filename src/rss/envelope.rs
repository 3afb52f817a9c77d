use serde::Serialize;

use super::types::RssChannel;

pub const RSS_VERSION: &str = "2.0";
/// Google Merchant Center namespace, bound to the `g:` prefix.
pub const MERCHANT_NAMESPACE: &str = "http://base.google.com/ns/1.0";
/// Media RSS namespace, bound to the `media:` prefix.
pub const MEDIA_NAMESPACE: &str = "http://search.yahoo.com/mrss/";

/// The `<rss>` root: version plus the namespaces the channel needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RssDocument {
    pub version: &'static str,
    /// `xmlns:g`, if declared.
    pub merchant_namespace: Option<&'static str>,
    /// `xmlns:media`, if declared.
    pub media_namespace: Option<&'static str>,
    pub channel: RssChannel,
}

impl RssDocument {
    /// Wraps a channel, deciding namespace declarations from its first item.
    ///
    /// Only the first item is probed. A feed whose merchant or media data
    /// starts at a later item gets no declaration for it; existing consumers
    /// rely on this behavior.
    pub fn wrap(channel: RssChannel) -> Self {
        let first = channel.items.first();
        let merchant_namespace = first
            .filter(|item| item.merchant.has_id())
            .map(|_| MERCHANT_NAMESPACE);
        let media_namespace = first
            .filter(|item| item.media_content.is_some())
            .map(|_| MEDIA_NAMESPACE);

        Self {
            version: RSS_VERSION,
            merchant_namespace,
            media_namespace,
            channel,
        }
    }
}

impl From<RssChannel> for RssDocument {
    fn from(channel: RssChannel) -> Self {
        Self::wrap(channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::MediaContent;
    use crate::rss::types::{RssItem, RssMerchant};

    fn merchant_item(id: &str) -> RssItem {
        RssItem {
            merchant: RssMerchant {
                id: Some(id.to_string()),
                ..RssMerchant::default()
            },
            ..RssItem::default()
        }
    }

    fn media_item() -> RssItem {
        RssItem {
            media_content: Some(MediaContent {
                url: "https://cdn.example.com/v.mp4".to_string(),
            }),
            ..RssItem::default()
        }
    }

    fn channel(items: Vec<RssItem>) -> RssChannel {
        RssChannel {
            items,
            ..RssChannel::default()
        }
    }

    #[test]
    fn test_version_is_fixed() {
        assert_eq!(RssDocument::wrap(channel(vec![])).version, "2.0");
    }

    #[test]
    fn test_no_items_declares_nothing() {
        let doc = RssDocument::wrap(channel(vec![]));
        assert!(doc.merchant_namespace.is_none());
        assert!(doc.media_namespace.is_none());
    }

    #[test]
    fn test_first_item_merchant_id_declares_namespace() {
        let doc = RssDocument::wrap(channel(vec![merchant_item("sku-1"), RssItem::default()]));
        assert_eq!(doc.merchant_namespace, Some(MERCHANT_NAMESPACE));
        assert!(doc.media_namespace.is_none());
    }

    #[test]
    fn test_empty_merchant_id_declares_nothing() {
        let doc = RssDocument::wrap(channel(vec![merchant_item("")]));
        assert!(doc.merchant_namespace.is_none());
    }

    #[test]
    fn test_later_item_is_not_probed() {
        let doc = RssDocument::wrap(channel(vec![
            RssItem::default(),
            merchant_item("sku-2"),
            media_item(),
        ]));
        assert!(doc.merchant_namespace.is_none());
        assert!(doc.media_namespace.is_none());
    }

    #[test]
    fn test_media_and_merchant_coexist() {
        let mut item = merchant_item("sku-1");
        item.media_content = media_item().media_content;
        let doc = RssDocument::from(channel(vec![item]));
        assert_eq!(doc.merchant_namespace, Some(MERCHANT_NAMESPACE));
        assert_eq!(doc.media_namespace, Some(MEDIA_NAMESPACE));
    }
}
