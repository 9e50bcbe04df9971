use crate::domain::ContactName;
use crate::domain::contact_email::ContactEmail;
use crate::domain::contact_interest::ContactInterest;
use crate::domain::contact_message::ContactMessage;

/// A contact submission that passed validation but has not been stored yet.
#[derive(Debug)]
pub struct NewContact {
    pub name: ContactName,
    pub email: ContactEmail,
    pub company: Option<String>,
    pub interest: ContactInterest,
    pub message: ContactMessage,
}

#[derive(Debug, serde::Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every rule violation found in a payload, one entry per offending field.
#[derive(Debug, Default, serde::Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn push(&mut self, field: &'static str, message: String) {
        self.0.push(FieldError { field, message });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|error| error.field)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut separator = "";
        for error in &self.0 {
            write!(f, "{}{}: {}", separator, error.field, error.message)?;
            separator = "; ";
        }
        Ok(())
    }
}
