//! Landing pages for the customers listed in the clients config file.
//!
//! A page is rendered from `templates/landing_page.html`, returned to the
//! caller and saved as `<public_dir>/<customer_id>/landingpage.html`.

use std::path::{Path, PathBuf};

use askama::Template;
use uuid::Uuid;

use crate::common::LandingPageError;
use crate::models::{Client, ClientDirectory};

pub const LANDING_PAGE_FILE: &str = "landingpage.html";

#[derive(Template)]
#[template(path = "landing_page.html")]
pub struct LandingPageTemplate<'a> {
    pub client: &'a Client,
}

#[derive(Debug, Clone)]
pub struct LandingPages {
    clients_config: PathBuf,
    public_dir: PathBuf,
}

impl LandingPages {
    pub fn new(
        clients_config: impl Into<PathBuf>,
        public_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            clients_config: clients_config.into(),
            public_dir: public_dir.into(),
        }
    }

    pub fn public_dir(&self) -> &Path {
        &self.public_dir
    }

    /// The config file is re-read on every call so edits show up without a
    /// restart.
    pub async fn load_clients(
        &self,
    ) -> Result<ClientDirectory, LandingPageError> {
        let raw = tokio::fs::read(&self.clients_config).await.map_err(
            |source| LandingPageError::ConfigRead {
                path: self.clients_config.clone(),
                source,
            },
        )?;

        serde_json::from_slice(&raw).map_err(|source| {
            LandingPageError::ConfigParse {
                path: self.clients_config.clone(),
                source,
            }
        })
    }

    pub fn render(client: &Client) -> Result<String, LandingPageError> {
        Ok(LandingPageTemplate { client }.render()?)
    }

    pub fn page_path(
        &self,
        customer_id: &str,
    ) -> Result<PathBuf, LandingPageError> {
        Ok(self.customer_dir(customer_id)?.join(LANDING_PAGE_FILE))
    }

    fn customer_dir(
        &self,
        customer_id: &str,
    ) -> Result<PathBuf, LandingPageError> {
        if !is_safe_dir_name(customer_id) {
            return Err(LandingPageError::InvalidCustomerId(
                customer_id.to_string(),
            ));
        }

        Ok(self.public_dir.join(customer_id))
    }

    /// Writes through a uniquely named staging file and a rename, so
    /// concurrent renders for one customer replace the page whole.
    pub async fn persist(
        &self,
        customer_id: &str,
        html: &str,
    ) -> Result<PathBuf, LandingPageError> {
        let dir = self.customer_dir(customer_id)?;

        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(LandingPageError::CreateDir)?;

        let target = dir.join(LANDING_PAGE_FILE);
        let staging =
            dir.join(format!(".{}.{}.tmp", LANDING_PAGE_FILE, Uuid::new_v4()));

        let written = match tokio::fs::write(&staging, html).await {
            Ok(()) => tokio::fs::rename(&staging, &target).await,
            Err(e) => Err(e),
        };

        if let Err(e) = written {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(LandingPageError::Write(e));
        }

        Ok(target)
    }

    pub async fn generate(
        &self,
        customer_id: &str,
    ) -> Result<String, LandingPageError> {
        let directory = self.load_clients().await?;

        let client = directory.find(customer_id).ok_or_else(|| {
            LandingPageError::CustomerNotFound(customer_id.to_string())
        })?;

        log::info!("Rendering landing page for customer {}", customer_id);

        let html = Self::render(client)?;
        let path = self.persist(customer_id, &html).await?;

        log::debug!("Saved landing page to {}", path.display());

        Ok(html)
    }
}

fn is_safe_dir_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}
