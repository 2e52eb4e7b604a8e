pub const BRAND_NAME: &str = "Bela Fios";

pub const CONTACT_EMAIL: &str = "hello@belafios.com";
pub const INSTAGRAM_URL: &str = "https://instagram.com/bellafios_roo";

pub const WHATSAPP_NUMBER: &str = "5566996039897";
pub const WHATSAPP_DISPLAY: &str = "+55 66 99603-9897";

const ORDER_GREETING: &str = "Hi Bella Fios! I'm interested in ordering a custom crochet bag.";

/// Deep link that opens a WhatsApp chat with the order greeting pre-filled.
/// This is the only ordering mechanism on the site.
pub fn whatsapp_order_url() -> String {
    format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_NUMBER,
        urlencoding::encode(ORDER_GREETING)
    )
}

/// Plain chat link without a pre-filled message, used on the contact card.
pub fn whatsapp_chat_url() -> String {
    format!("https://wa.me/{}", WHATSAPP_NUMBER)
}

pub fn mailto_url() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_url_carries_number_and_encoded_greeting() {
        let url = whatsapp_order_url();
        assert!(url.starts_with("https://wa.me/"));
        assert!(url.contains(WHATSAPP_NUMBER));
        assert!(url.contains("text=Hi%20Bella%20Fios"));
        assert!(url.contains("custom%20crochet%20bag"));
        // The apostrophe in "I'm" must not survive unencoded.
        assert!(!url.contains('\''));
    }

    #[test]
    fn chat_url_has_no_text_payload() {
        let url = whatsapp_chat_url();
        assert_eq!(url, format!("https://wa.me/{WHATSAPP_NUMBER}"));
        assert!(!url.contains("text="));
    }
}
