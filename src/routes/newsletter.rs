use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, web};
use anyhow::Context;
use std::fmt::Formatter;
use validator::validate_email;

use crate::routes::error_chain_fmt;
use crate::storage::Storage;

#[derive(serde::Deserialize)]
pub struct NewsletterForm {
    email: Option<String>,
}

#[derive(thiserror::Error)]
pub enum SubscribeError {
    #[error("Valid email is required")]
    ValidationError,
    #[error("Something went wrong")]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for SubscribeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SubscribeError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubscribeError::ValidationError => StatusCode::BAD_REQUEST,
            SubscribeError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            SubscribeError::ValidationError => {
                HttpResponse::BadRequest().json(serde_json::json!({
                    "message": "Valid email is required",
                }))
            }
            SubscribeError::UnexpectedError(_) => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "message": "Server error while processing your subscription",
                }))
            }
        }
    }
}

#[tracing::instrument(
    name = "Subscribe to the newsletter",
    skip(form, storage)
)]
pub async fn subscribe(
    form: web::Json<NewsletterForm>,
    storage: web::Data<dyn Storage>,
) -> Result<HttpResponse, SubscribeError> {
    // A format check is all this endpoint needs; contact submissions go
    // through the full per-field validator instead.
    let email = match form.0.email {
        Some(email) if validate_email(&email) => email,
        _ => return Err(SubscribeError::ValidationError),
    };

    let subscription = storage
        .create_newsletter_subscription(email)
        .await
        .context("Failed to store the newsletter subscription")?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Successfully subscribed to newsletter",
        "data": subscription,
    })))
}
