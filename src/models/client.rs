use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A landing page customer as listed in the clients config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Client {
    pub customer_id: String,
    pub client_portrait: String,
    pub hero_image: String,
    pub name: String,
    pub website: String,
    pub contact_info: String,
    pub status: String,
    pub payment_method: Value,
    pub payment_amount: Value,
    pub type_of_business: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientDirectory {
    #[serde(default)]
    pub clients: Vec<Client>,
}

impl ClientDirectory {
    /// First client whose id matches exactly.
    pub fn find(&self, customer_id: &str) -> Option<&Client> {
        self.clients
            .iter()
            .find(|client| client.customer_id == customer_id)
    }
}
