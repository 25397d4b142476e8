use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn subject(&self) -> String {
        format!("New Contact Form Submission from {}", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "New contact form submission:\n\n\
             Name: {}\n\
             Email: {}\n\
             Message:\n{}\n\n\
             Reply to: {}\n",
            self.name, self.email, self.message, self.email
        )
    }
}
