use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpResponse, Responder};
use serde_json::json;

use themeweave::common::WebsiteError;
use themeweave::db;
use themeweave::models::WebsiteCreate;

use crate::web::helpers::json_error;
use crate::web::state::AppState;

/// Development endpoint: stores a website record submitted as JSON.
#[post("/testing/createClient")]
pub async fn create_client(
    state: web::Data<AppState>,
    body: web::Json<WebsiteCreate>,
) -> impl Responder {
    let data = body.into_inner();

    if let Err(e) = data.validate() {
        let reason = match e {
            WebsiteError::InvalidRequest(msg) => msg,
            other => other.to_string(),
        };
        return json_error(
            StatusCode::BAD_REQUEST,
            format!("Invalid input: {reason}"),
        );
    }

    match db::create_website(&state.pool, &data).await {
        Ok(website) => {
            log::info!(
                "Created website {} ({}) for user {}",
                website.id,
                website.name,
                website.user_id
            );
            HttpResponse::Created().json(json!({
                "message": "Website created successfully",
                "website_id": website.id,
            }))
        }
        Err(e) => {
            log::error!("Database error creating website: {}", e);
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to create website: {e}"),
            )
        }
    }
}

#[get("/api/v1/websites/{id}")]
pub async fn website_get(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    let id = path.into_inner();

    match db::get_website_by_id(&state.pool, id).await {
        Ok(Some(website)) => HttpResponse::Ok().json(website),
        Ok(None) => json_error(StatusCode::NOT_FOUND, "Website not found"),
        Err(e) => {
            log::error!("Database error loading website {}: {}", id, e);
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to get website: {e}"),
            )
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_client).service(website_get);
}
