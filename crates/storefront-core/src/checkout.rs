//! Hand-off from a product to an external chat app.

use crate::catalog::Product;
use crate::config::CheckoutConfig;

/// Turns a product and the page it was viewed on into an external link that
/// opens a prefilled conversation.
pub trait CheckoutHandoff {
    fn handoff_url(&self, product: &Product, page_url: &str) -> String;
}

/// Public product page link used inside handoff messages.
pub fn product_page_url(site_url: &str, product_id: &str) -> String {
    format!(
        "{}/product.html?id={}",
        site_url.trim_end_matches('/'),
        urlencoding::encode(product_id)
    )
}

/// WhatsApp deep link to the shop's fixed phone number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WhatsAppHandoff {
    pub shop_name: String,
    pub phone_number: String,
}

impl From<&CheckoutConfig> for WhatsAppHandoff {
    fn from(config: &CheckoutConfig) -> Self {
        Self {
            shop_name: config.shop_name.clone(),
            phone_number: config.phone_number.clone(),
        }
    }
}

impl WhatsAppHandoff {
    pub fn message(&self, product: &Product, page_url: &str) -> String {
        format!(
            "Hello {}, I am interested in:\n*{}*\nID: {}\nLink: {}",
            self.shop_name,
            product.name(),
            product.id,
            page_url
        )
    }
}

impl CheckoutHandoff for WhatsAppHandoff {
    fn handoff_url(&self, product: &Product, page_url: &str) -> String {
        format!(
            "whatsapp://send?phone={}&text={}",
            urlencoding::encode(&self.phone_number),
            urlencoding::encode(&self.message(product, page_url))
        )
    }
}
