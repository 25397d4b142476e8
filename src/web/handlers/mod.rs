pub mod api;
pub mod contact;
pub mod landing;
pub mod public;
pub mod websites;


use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    public::configure(cfg);
    landing::configure(cfg);
    contact::configure(cfg);
    websites::configure(cfg);
    api::configure(cfg);
}
