use crate::feed::{Enclosure, Item, MerchantAttributes};
use crate::util::non_empty;

use super::types::{RssContent, RssEnclosure, RssItem, RssMerchant};

/// Translates one generic item into an RSS `<item>`.
///
/// Total: absent optional data becomes an empty string or `None`, never an
/// error.
pub fn translate_item(item: &Item) -> RssItem {
    RssItem {
        title: item.title.clone(),
        link: item
            .link
            .as_ref()
            .map(|link| link.href.clone())
            .unwrap_or_default(),
        description: item.description.clone(),
        content: non_empty(&item.content).map(|body| RssContent {
            content: body.to_string(),
        }),
        // Item authors show the display name; the channel editor shows the email.
        author: item
            .author
            .as_ref()
            .map(|author| author.name.clone())
            .unwrap_or_default(),
        category: item.category.clone().unwrap_or_default(),
        comments: item.comments.clone().unwrap_or_default(),
        enclosure: item.enclosure.as_ref().and_then(translate_enclosure),
        guid: item.id.clone(),
        pub_date: item.pub_date.clone(),
        source: item
            .source
            .as_ref()
            .map(|source| source.href.clone())
            .unwrap_or_default(),
        media_content: item.media_content.clone(),
        merchant: item
            .merchant
            .as_ref()
            .map(translate_merchant)
            .unwrap_or_default(),
    }
}

impl From<&Item> for RssItem {
    fn from(item: &Item) -> Self {
        translate_item(item)
    }
}

/// An enclosure needs both a type and a length; a bare url is dropped.
fn translate_enclosure(enclosure: &Enclosure) -> Option<RssEnclosure> {
    if enclosure.media_type.is_empty() || enclosure.length.is_empty() {
        tracing::trace!(
            url = %enclosure.url,
            media_type = %enclosure.media_type,
            length = %enclosure.length,
            "Dropping incomplete enclosure"
        );
        return None;
    }

    Some(RssEnclosure {
        url: enclosure.url.clone(),
        length: enclosure.length.clone(),
        media_type: enclosure.media_type.clone(),
    })
}

fn translate_merchant(merchant: &MerchantAttributes) -> RssMerchant {
    RssMerchant {
        id: merchant.id.clone(),
        title: merchant.title.clone(),
        description: merchant.description.clone(),
        link: merchant.link.clone(),
        condition: merchant.condition.clone(),
        price: merchant.price.clone(),
        sale_price: merchant.sale_price.clone(),
        availability: merchant.availability.clone(),
        image_link: merchant.image_link.clone(),
        additional_image_link: merchant
            .additional_image_link
            .clone()
            .map(|images| images.into_vec())
            .unwrap_or_default(),
        gtin: merchant.gtin.clone(),
        mpn: merchant.mpn.clone(),
        brand: merchant.brand.clone(),
        google_product_category: merchant.google_product_category.clone(),
        shipping: merchant.shipping.clone(),
        inventory: merchant.inventory.clone(),
        color: merchant.color.clone(),
        product_type: merchant.product_type.clone(),
        custom_label_0: merchant.custom_label_0.clone(),
        custom_label_1: merchant.custom_label_1.clone(),
        custom_label_2: merchant.custom_label_2.clone(),
        custom_label_3: merchant.custom_label_3.clone(),
        custom_label_4: merchant.custom_label_4.clone(),
        item_group_id: merchant.item_group_id.clone(),
        promotion_id: merchant.promotion_id.clone(),
    }
}
