use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use askama::Template;
use serde_json::json;

use crate::web::forms::CONTACT_FORM_INVALID;

pub fn render<T: Template>(t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => html(body),
        Err(e) => {
            log::error!("Template error: {}", e);
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to render template",
            )
        }
    }
}

pub fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// `{"error": message}` with the given status.
pub fn json_error(
    status: StatusCode,
    message: impl Into<String>,
) -> HttpResponse {
    HttpResponse::build(status).json(json!({ "error": message.into() }))
}

pub fn json_message(message: &str) -> serde_json::Value {
    json!({ "message": message })
}

/// Body decode failures answer with the same JSON error shape as handlers.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let resp = json_error(
            StatusCode::BAD_REQUEST,
            format!("Invalid input: {err}"),
        );
        InternalError::from_response(err, resp).into()
    })
}

pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, _req| {
        let resp = json_error(StatusCode::BAD_REQUEST, CONTACT_FORM_INVALID);
        InternalError::from_response(err, resp).into()
    })
}
