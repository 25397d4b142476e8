use std::sync::Arc;

use sqlx::SqlitePool;

use themeweave::landing::LandingPages;
use themeweave::services::Mailer;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub landing: LandingPages,
    pub mailer: Arc<dyn Mailer>,
}
