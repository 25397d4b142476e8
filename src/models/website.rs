use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::common::WebsiteError;
use crate::models::{ColorScheme, DEFAULT_COLOR_SCHEME};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Website {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub theme: String,
    pub color_scheme: String,
    #[sqlx(json)]
    pub main_body: Vec<String>,
    #[sqlx(json)]
    pub call_to_action: Vec<String>,
    pub header_content: String,
    pub footer_content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Website {
    /// Falls back to the default scheme when the stored value does not parse.
    pub fn colors(&self) -> ColorScheme {
        self.color_scheme.parse().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebsiteCreate {
    #[serde(default)]
    pub user_id: i64,
    pub name: String,
    pub theme: String,
    #[serde(default)]
    pub color_scheme: Option<String>,
    #[serde(default)]
    pub main_body: Vec<String>,
    #[serde(default)]
    pub call_to_action: Vec<String>,
    #[serde(default)]
    pub header_content: String,
    #[serde(default)]
    pub footer_content: String,
}

impl WebsiteCreate {
    pub fn validate(&self) -> Result<(), WebsiteError> {
        if self.name.trim().is_empty() {
            return Err(WebsiteError::InvalidRequest(
                "'name' is required".into(),
            ));
        }

        if self.theme.trim().is_empty() {
            return Err(WebsiteError::InvalidRequest(
                "'theme' is required".into(),
            ));
        }

        if let Some(scheme) = self.submitted_color_scheme() {
            scheme
                .parse::<ColorScheme>()
                .map_err(WebsiteError::InvalidRequest)?;
        }

        Ok(())
    }

    pub fn resolved_color_scheme(&self) -> String {
        self.submitted_color_scheme()
            .unwrap_or(DEFAULT_COLOR_SCHEME)
            .to_string()
    }

    fn submitted_color_scheme(&self) -> Option<&str> {
        self.color_scheme
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn from_json_file(path: &Path) -> Result<Self, WebsiteError> {
        let raw = std::fs::read_to_string(path).map_err(|source| {
            WebsiteError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        Ok(serde_json::from_str(&raw)?)
    }
}
