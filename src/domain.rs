use unicode_segmentation::UnicodeSegmentation;

pub mod contact;
pub mod contact_email;
pub mod contact_interest;
pub mod contact_message;
pub mod new_contact;
pub mod subscription;
pub mod user;

pub use contact::Contact;
pub use contact_email::ContactEmail;
pub use contact_interest::ContactInterest;
pub use contact_message::ContactMessage;
pub use new_contact::{FieldError, NewContact, ValidationErrors};
pub use subscription::NewsletterSubscription;
pub use user::{NewUser, User};

#[derive(Debug)]
pub struct ContactName(String);

impl ContactName {

    pub fn parse(s: String) -> Result<ContactName, String> {
        let is_empty_or_whitespace = s.trim().is_empty();

        let length = s.graphemes(true).count();
        let is_too_short = length < 2;
        let is_too_long = length > 256;

        let forbidden_characters = ['/', '(', ')', '"', '<', '>', '\\', '{', '}'];
        let contains_forbidden_characters = s.chars()
            .any(|c| forbidden_characters.contains(&c));

        if is_empty_or_whitespace || is_too_short || is_too_long || contains_forbidden_characters {
            Err(format!("{} is not a valid name", s))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
