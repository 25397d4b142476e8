use actix_web::http::StatusCode;
use actix_web::{post, web, HttpResponse, Responder};

use crate::web::forms::{ContactForm, CONTACT_FORM_INVALID};
use crate::web::helpers::{json_error, json_message};
use crate::web::state::AppState;

#[post("/contact")]
pub async fn contact_submit(
    state: web::Data<AppState>,
    form: web::Form<ContactForm>,
) -> impl Responder {
    let message = match form.into_inner().into_message() {
        Ok(m) => m,
        Err(reason) => {
            log::debug!("Rejected contact form: {}", reason);
            return json_error(StatusCode::BAD_REQUEST, CONTACT_FORM_INVALID);
        }
    };

    if let Err(e) = state.mailer.send_contact(&message).await {
        log::error!("Error sending email: {}", e);
        return json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to send message. Please try again.",
        );
    }

    HttpResponse::Ok().json(json_message(
        "Thank you! Your message has been sent successfully.",
    ))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(contact_submit);
}
