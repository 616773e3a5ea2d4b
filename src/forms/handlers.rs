// src/forms/handlers.rs

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, info};

use super::extractors::AjaxForm;
use super::models::AjaxError;
use super::service::ContactFormValidator;
use crate::common::{safe_email_log, Validator};

/// POST / - AJAX entry point
///
/// Every protocol outcome is HTTP 200 with a JSON body; only transport
/// failures reject earlier, in the extractor.
pub async fn ajax_submit(AjaxForm(request): AjaxForm) -> Response {
    if request.is_empty() {
        debug!("AJAX request with an empty body");
        return Json(AjaxError {
            error: "Empty request!",
        })
        .into_response();
    }

    match request.method.as_deref() {
        Some("formSubmit") => {
            if let Some(email) = request.data.iter().find(|f| f.name == "email") {
                debug!(email = %safe_email_log(&email.value), "contact email received");
            }

            let result = ContactFormValidator.validate(&request.data);
            info!(
                fields = request.data.len(),
                valid = result.is_valid(),
                "contact form submission processed"
            );
            Json(result).into_response()
        }
        Some(other) => {
            debug!(method = %other, "unknown AJAX method");
            Json(AjaxError {
                error: "Unknown method",
            })
            .into_response()
        }
        None => {
            debug!("AJAX request without a method");
            Json(AjaxError {
                error: "Unspecified method!",
            })
            .into_response()
        }
    }
}
