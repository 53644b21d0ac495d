//! Outbound links to the business: pre-filled booking chat, bare chat and phone call.

use crate::BookingFormConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLinkBuilder {
    chat_url: String,
    call_url: String,
    display_phone: String,
}

impl DeepLinkBuilder {
    pub fn new(config: &BookingFormConfig) -> Self {
        let base = config.messaging_base_url.trim_end_matches('/');
        Self {
            chat_url: format!("{}/{}", base, config.business_phone),
            call_url: format!("tel:+{}", config.business_phone),
            display_phone: config.display_phone.clone(),
        }
    }

    /// Chat link with `message` percent-encoded into the `text` parameter
    pub fn booking_link(&self, message: &str) -> String {
        format!("{}?text={}", self.chat_url, urlencoding::encode(message))
    }

    /// "Chat with us" link without a pre-filled message
    pub fn chat_link(&self) -> &str {
        &self.chat_url
    }

    pub fn call_link(&self) -> &str {
        &self.call_url
    }

    pub fn display_phone(&self) -> &str {
        &self.display_phone
    }
}

impl Default for DeepLinkBuilder {
    fn default() -> Self {
        Self::new(&BookingFormConfig::default())
    }
}
