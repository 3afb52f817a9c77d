use crate::feed::{Author, Feed};
use crate::util::format_first;

use super::item::translate_item;
use super::types::{RssAtomLink, RssChannel, RssImage, RssTextInput};

/// Translates the feed header and all items into an RSS `<channel>`.
///
/// Items keep their order and count. Calling this twice on the same feed
/// yields equal channels.
pub fn translate_feed(feed: &Feed) -> RssChannel {
    RssChannel {
        title: feed.title.clone(),
        link: feed.link.href.clone(),
        description: feed.description.clone(),
        copyright: feed.copyright.clone(),
        managing_editor: feed.author.as_ref().map(editor).unwrap_or_default(),
        pub_date: format_first(&[feed.created.as_ref(), feed.updated.as_ref()]),
        last_build_date: format_first(&[feed.updated.as_ref()]),
        image: feed.image.as_ref().map(|image| RssImage {
            url: image.url.clone(),
            title: image.title.clone(),
            link: image.link.clone(),
            width: image.width,
            height: image.height,
        }),
        text_input: feed.text_input.as_ref().map(|input| RssTextInput {
            title: input.title.clone(),
            description: input.description.clone(),
            name: input.name.clone(),
            link: input.link.clone(),
        }),
        atom: feed.atom.as_ref().map(|atom| RssAtomLink {
            href: atom.href.clone(),
            rel: atom.rel.clone(),
            media_type: atom.media_type.clone(),
        }),
        items: feed.items.iter().map(translate_item).collect(),
        ..RssChannel::default()
    }
}

/// `email (name)`, or just the email when there is no display name.
fn editor(author: &Author) -> String {
    if author.name.is_empty() {
        author.email.clone()
    } else {
        format!("{} ({})", author.email, author.name)
    }
}

/// Channel fields a translated feed never sets on its own.
///
/// Applied with [`RssChannel::apply_defaults`]; typically loaded from the
/// `[channel]` table of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct ChannelDefaults {
    pub language: Option<String>,
    pub generator: Option<String>,
    pub web_master: Option<String>,
    pub docs: Option<String>,
    pub ttl: Option<u32>,
    pub rating: Option<String>,
    pub category: Option<String>,
}

impl RssChannel {
    /// Fills empty channel fields from `defaults`. Populated fields win.
    pub fn apply_defaults(&mut self, defaults: &ChannelDefaults) {
        fill(&mut self.language, &defaults.language);
        fill(&mut self.generator, &defaults.generator);
        fill(&mut self.web_master, &defaults.web_master);
        fill(&mut self.docs, &defaults.docs);
        fill(&mut self.rating, &defaults.rating);
        fill(&mut self.category, &defaults.category);
        if self.ttl.is_none() {
            self.ttl = defaults.ttl;
        }
    }
}

fn fill(field: &mut String, default: &Option<String>) {
    if field.is_empty() {
        if let Some(value) = default {
            field.clone_from(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{AtomLink, Image, Item, Link};
    use chrono::{DateTime, FixedOffset};
    use pretty_assertions::assert_eq;

    fn time(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn feed() -> Feed {
        Feed {
            title: "Example".to_string(),
            link: Link::new("https://example.com"),
            description: "An example feed".to_string(),
            copyright: "CC-BY".to_string(),
            ..Feed::default()
        }
    }

    fn with_author(name: &str, email: &str) -> Feed {
        Feed {
            author: Some(Author {
                name: name.to_string(),
                email: email.to_string(),
            }),
            ..feed()
        }
    }

    #[test]
    fn test_copies_header_fields() {
        let channel = translate_feed(&feed());
        assert_eq!(channel.title, "Example");
        assert_eq!(channel.link, "https://example.com");
        assert_eq!(channel.description, "An example feed");
        assert_eq!(channel.copyright, "CC-BY");
        assert!(channel.items.is_empty());
    }

    #[test]
    fn test_editor_with_name() {
        let channel = translate_feed(&with_author("Jane", "j@x.com"));
        assert_eq!(channel.managing_editor, "j@x.com (Jane)");
    }

    #[test]
    fn test_editor_without_name() {
        let channel = translate_feed(&with_author("", "j@x.com"));
        assert_eq!(channel.managing_editor, "j@x.com");
    }

    #[test]
    fn test_editor_without_author() {
        assert_eq!(translate_feed(&feed()).managing_editor, "");
    }

    #[test]
    fn test_only_updated_sets_both_dates() {
        let feed = Feed {
            updated: Some(time("2024-03-09T08:07:06+01:00")),
            ..feed()
        };
        let channel = translate_feed(&feed);
        assert_eq!(channel.pub_date, "Sat, 09 Mar 2024 08:07:06 +0100");
        assert_eq!(channel.last_build_date, channel.pub_date);
    }

    #[test]
    fn test_only_created_leaves_build_date_empty() {
        let feed = Feed {
            created: Some(time("2024-01-01T00:00:00Z")),
            ..feed()
        };
        let channel = translate_feed(&feed);
        assert_eq!(channel.pub_date, "Mon, 01 Jan 2024 00:00:00 +0000");
        assert_eq!(channel.last_build_date, "");
    }

    #[test]
    fn test_created_wins_for_pub_date() {
        let feed = Feed {
            created: Some(time("2024-01-01T00:00:00Z")),
            updated: Some(time("2024-03-09T08:07:06Z")),
            ..feed()
        };
        let channel = translate_feed(&feed);
        assert_eq!(channel.pub_date, "Mon, 01 Jan 2024 00:00:00 +0000");
        assert_eq!(channel.last_build_date, "Sat, 09 Mar 2024 08:07:06 +0000");
    }

    #[test]
    fn test_no_timestamps_leave_dates_empty() {
        let channel = translate_feed(&feed());
        assert_eq!(channel.pub_date, "");
        assert_eq!(channel.last_build_date, "");
    }

    #[test]
    fn test_image_translated_one_to_one() {
        let feed = Feed {
            image: Some(Image {
                url: "https://example.com/logo.png".to_string(),
                title: "Logo".to_string(),
                link: "https://example.com".to_string(),
                width: 88,
                height: 31,
            }),
            ..feed()
        };
        assert_eq!(
            translate_feed(&feed).image,
            Some(RssImage {
                url: "https://example.com/logo.png".to_string(),
                title: "Logo".to_string(),
                link: "https://example.com".to_string(),
                width: 88,
                height: 31,
            })
        );
    }

    #[test]
    fn test_missing_image_is_omitted() {
        assert!(translate_feed(&feed()).image.is_none());
    }

    #[test]
    fn test_atom_link_carried() {
        let feed = Feed {
            atom: Some(AtomLink {
                href: "https://example.com/rss.xml".to_string(),
                rel: "self".to_string(),
                media_type: "application/rss+xml".to_string(),
            }),
            ..feed()
        };
        let atom = translate_feed(&feed).atom.unwrap();
        assert_eq!(atom.href, "https://example.com/rss.xml");
        assert_eq!(atom.rel, "self");
        assert_eq!(atom.media_type, "application/rss+xml");
    }

    #[test]
    fn test_items_keep_order_and_duplicates() {
        let mut feed = feed();
        for id in ["b", "a", "b"] {
            feed.add(Item {
                id: id.to_string(),
                ..Item::default()
            });
        }
        let guids: Vec<_> = translate_feed(&feed)
            .items
            .into_iter()
            .map(|item| item.guid)
            .collect();
        assert_eq!(guids, ["b", "a", "b"]);
    }

    #[test]
    fn test_defaults_fill_only_empty_fields() {
        let mut channel = translate_feed(&feed());
        channel.language = "de".to_string();
        channel.apply_defaults(&ChannelDefaults {
            language: Some("en-us".to_string()),
            generator: Some("syndicate".to_string()),
            ttl: Some(60),
            ..ChannelDefaults::default()
        });
        assert_eq!(channel.language, "de");
        assert_eq!(channel.generator, "syndicate");
        assert_eq!(channel.ttl, Some(60));
        assert_eq!(channel.rating, "");
    }

    #[test]
    fn test_defaults_keep_existing_ttl() {
        let mut channel = translate_feed(&feed());
        channel.ttl = Some(5);
        channel.apply_defaults(&ChannelDefaults {
            ttl: Some(60),
            ..ChannelDefaults::default()
        });
        assert_eq!(channel.ttl, Some(5));
    }
}
