use actix_web::http::StatusCode;
use actix_web::{get, web, HttpResponse, Responder};

use themeweave::common::LandingPageError;

use crate::web::helpers::{html, json_error};
use crate::web::state::AppState;

fn landing_error_response(err: &LandingPageError) -> HttpResponse {
    match err {
        LandingPageError::CustomerNotFound(_) => {
            json_error(StatusCode::NOT_FOUND, "Customer not found")
        }
        LandingPageError::InvalidCustomerId(_) => {
            json_error(StatusCode::BAD_REQUEST, "Invalid customer id")
        }
        LandingPageError::ConfigRead { .. } => {
            log::error!("{}", err);
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to open config file",
            )
        }
        LandingPageError::ConfigParse { .. } => {
            log::error!("{}", err);
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to parse config file",
            )
        }
        LandingPageError::Template(_) => {
            log::error!("{}", err);
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to render template",
            )
        }
        LandingPageError::CreateDir(_) | LandingPageError::Write(_) => {
            log::error!("{}", err);
            json_error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

#[get("/renderCustomer/{customer_id}")]
pub async fn render_customer(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let customer_id = path.into_inner();

    match state.landing.generate(&customer_id).await {
        Ok(page) => html(page),
        Err(e) => landing_error_response(&e),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(render_customer);
}
