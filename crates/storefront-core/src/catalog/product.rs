use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CATEGORY, DEFAULT_COLOR, DEFAULT_DESCRIPTION, DEFAULT_DISPLAY_STARS, DEFAULT_FABRIC,
    DEFAULT_NAME, DEFAULT_REVIEW_SNIPPET, DEFAULT_STOCK, SOLD_OUT_STOCK,
};

use super::lenient;

/// One catalog record.
///
/// Every field is optional in the payload. Storage keeps what the payload
/// said; display accessors apply the documented defaults so a missing field
/// never fails a render.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub fabric: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "lenient::price")]
    pub price: Option<u64>,
    #[serde(default, deserialize_with = "lenient::price")]
    pub discount_price: Option<u64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub stock: Option<String>,
    #[serde(default, deserialize_with = "lenient::stars")]
    pub stars: Option<u8>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub visible: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub deleted: bool,
    #[serde(default, deserialize_with = "lenient::text")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub image_hd: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub image_thumb: Option<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub gallery: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub reviews: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub desc: Option<String>,
}

impl Product {
    /// Listed products are visible and not deleted. Nothing else is ever
    /// shown or counted.
    pub fn is_listed(&self) -> bool {
        self.visible && !self.deleted
    }

    /// Discount price when present and non-zero, else list price, else 0.
    pub fn effective_price(&self) -> u64 {
        self.discount_price
            .filter(|&d| d > 0)
            .or(self.price)
            .unwrap_or(0)
    }

    /// Whether a struck-through list price should accompany the effective one.
    pub fn has_discount(&self) -> bool {
        matches!((self.price, self.discount_price), (Some(_), Some(d)) if d > 0)
    }

    /// Rating used by the filter: a missing rating counts as 0.
    pub fn rating(&self) -> u8 {
        self.stars.unwrap_or(0)
    }

    /// Rating shown on cards: a missing or zero rating shows as five stars.
    pub fn display_stars(&self) -> u8 {
        self.stars.filter(|&s| s > 0).unwrap_or(DEFAULT_DISPLAY_STARS)
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_NAME)
    }

    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }

    pub fn fabric(&self) -> &str {
        self.fabric.as_deref().unwrap_or(DEFAULT_FABRIC)
    }

    pub fn color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_COLOR)
    }

    pub fn stock(&self) -> &str {
        self.stock.as_deref().unwrap_or(DEFAULT_STOCK)
    }

    pub fn is_sold_out(&self) -> bool {
        self.stock.as_deref() == Some(SOLD_OUT_STOCK)
    }

    pub fn description(&self) -> &str {
        self.desc.as_deref().unwrap_or(DEFAULT_DESCRIPTION)
    }

    /// Lower-cased concatenation of the searchable fields, in the order
    /// name, category, fabric, colour, id. Missing fields contribute nothing.
    pub fn search_haystack(&self) -> String {
        let mut haystack = String::new();
        for part in [&self.name, &self.category, &self.fabric, &self.color] {
            if let Some(text) = part {
                haystack.push_str(text);
            }
        }
        haystack.push_str(&self.id);
        haystack.to_lowercase()
    }

    /// Quote shown on the card: first review, else the first sentence of the
    /// description, else a stock line.
    pub fn review_snippet(&self) -> String {
        if let Some(review) = self.reviews.first() {
            return format!("\"{review}\"");
        }
        if let Some(desc) = &self.desc {
            let sentence = desc.split('.').next().unwrap_or_default().trim();
            if !sentence.is_empty() {
                return format!("\"{sentence}.\"");
            }
        }
        DEFAULT_REVIEW_SNIPPET.to_string()
    }

    /// Card image: primary, else HD. `None` means only placeholders remain.
    pub fn primary_image(&self) -> Option<&str> {
        self.image.as_deref().or(self.image_hd.as_deref())
    }
}
