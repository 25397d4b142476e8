use actix_web::{get, post, web, HttpResponse, Responder};
use serde_json::json;

use themeweave::elements::{Element, Render};

use crate::web::helpers::html;

pub const THEMES: [&str; 3] = ["default", "minimal", "dark"];

#[get("/api/v1/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "message": "ThemeWeave backend is running!",
    }))
}

#[get("/api/v1/themes")]
pub async fn themes() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Themes endpoint - coming soon!",
        "themes": THEMES,
    }))
}

#[get("/api/v1/elements")]
pub async fn elements() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Elements available for page building",
        "elements": Element::KINDS,
    }))
}

/// Renders one element posted as JSON, e.g. for a builder preview.
#[post("/api/v1/elements/render")]
pub async fn element_render(body: web::Json<Element>) -> impl Responder {
    html(body.render())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health)
        .service(themes)
        .service(elements)
        .service(element_render);
}
