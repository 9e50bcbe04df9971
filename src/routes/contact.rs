use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, web};
use anyhow::Context;
use std::fmt::Formatter;

use crate::domain::{
    ContactEmail, ContactInterest, ContactMessage, ContactName, NewContact, ValidationErrors,
};
use crate::storage::Storage;

#[derive(serde::Deserialize)]
pub struct ContactForm {
    // Every field is optional at this layer so validation can report all
    // missing fields in one response instead of failing at deserialization.
    name: Option<String>,
    email: Option<String>,
    company: Option<String>,
    interest: Option<String>,
    message: Option<String>,
}

impl TryFrom<ContactForm> for NewContact {
    type Error = ValidationErrors;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::default();

        let name = match form.name {
            None => {
                errors.push("name", "is required".to_string());
                None
            }
            Some(value) => match ContactName::parse(value) {
                Ok(name) => Some(name),
                Err(message) => {
                    errors.push("name", message);
                    None
                }
            },
        };
        let email = match form.email {
            None => {
                errors.push("email", "is required".to_string());
                None
            }
            Some(value) => match ContactEmail::parse(value) {
                Ok(email) => Some(email),
                Err(message) => {
                    errors.push("email", message);
                    None
                }
            },
        };
        let interest = match form.interest {
            None => {
                errors.push("interest", "is required".to_string());
                None
            }
            Some(value) => match ContactInterest::parse(value) {
                Ok(interest) => Some(interest),
                Err(message) => {
                    errors.push("interest", message);
                    None
                }
            },
        };
        let message = match form.message {
            None => {
                errors.push("message", "is required".to_string());
                None
            }
            Some(value) => match ContactMessage::parse(value) {
                Ok(message) => Some(message),
                Err(reason) => {
                    errors.push("message", reason);
                    None
                }
            },
        };

        match (name, email, interest, message) {
            (Some(name), Some(email), Some(interest), Some(message)) => Ok(NewContact {
                name,
                email,
                company: form.company,
                interest,
                message,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("Validation error: {0}")]
    ValidationError(ValidationErrors),
    #[error("Something went wrong")]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ContactError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            ContactError::ValidationError(errors) => {
                HttpResponse::BadRequest().json(serde_json::json!({
                    "message": "Validation error",
                    "errors": errors,
                }))
            }
            // The cause is logged through the Debug impl above; the body
            // stays opaque.
            ContactError::UnexpectedError(_) => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "message": "Server error while processing your request",
                }))
            }
        }
    }
}

#[tracing::instrument(
    name = "Submit a contact inquiry",
    skip(form, storage)
)]
pub async fn submit_contact(
    form: web::Json<ContactForm>,
    storage: web::Data<dyn Storage>,
) -> Result<HttpResponse, ContactError> {
    let new_contact: NewContact = form.0.try_into().map_err(ContactError::ValidationError)?;

    let contact = storage
        .create_contact(new_contact)
        .await
        .context("Failed to store the contact submission")?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Contact form submitted successfully",
        "data": contact,
    })))
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
