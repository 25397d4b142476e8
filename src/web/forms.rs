use lettre::Address;
use serde::Deserialize;

use themeweave::models::ContactMessage;

pub const CONTACT_FORM_INVALID: &str = "Please fill out all fields correctly";

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// All fields are required and `email` must be a valid address.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name is required".into());
        }

        if self.message.trim().is_empty() {
            return Err("message is required".into());
        }

        self.email
            .trim()
            .parse::<Address>()
            .map(|_| ())
            .map_err(|e| format!("invalid email: {e}"))
    }

    pub fn into_message(self) -> Result<ContactMessage, String> {
        self.validate()?;

        Ok(ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}
