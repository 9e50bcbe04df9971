use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone)]
pub struct ContactMessage(String);

impl ContactMessage {
    pub fn parse(s: String) -> Result<ContactMessage, String> {
        let is_too_short = s.graphemes(true).count() < 10;

        if is_too_short {
            Err("the message must be at least 10 characters long".to_string())
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for ContactMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
