use url::Url;

const WHATSAPP_BASE: &str = "https://wa.me/";

/// Deep link opening a WhatsApp chat with `phone` and `message` pre-filled.
pub fn whatsapp_url(phone: &str, message: &str) -> Result<Url, url::ParseError> {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    let base = Url::parse(WHATSAPP_BASE)?.join(&digits)?;
    Url::parse_with_params(base.as_str(), &[("text", message)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_carries_number_and_encoded_text() {
        let url = whatsapp_url("+55 (51) 99911-9352", "Olá! Quero adotar").unwrap();
        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/5551999119352");
        let text: Vec<_> = url.query_pairs().collect();
        assert_eq!(text.len(), 1);
        assert_eq!(text[0].0, "text");
        assert_eq!(text[0].1, "Olá! Quero adotar");
    }
}
