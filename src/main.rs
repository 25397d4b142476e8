mod web;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use clap::Parser;

use themeweave::config::Settings;
use themeweave::db::Database;
use themeweave::landing::LandingPages;
use themeweave::models::WebsiteCreate;
use themeweave::services::SmtpMailer;

use crate::web::helpers::{form_config, json_config};
use crate::web::middleware::Cors;
use crate::web::AppState;

#[derive(Parser)]
#[command(name = "themeweave", about = "Backend for the ThemeWeave website builder")]
struct Cli {
    /// Decode and validate the website fixture before serving
    #[arg(long)]
    testing: bool,

    /// Website JSON used by --testing
    #[arg(long, default_value = "tests/fixtures/website.json")]
    fixture: PathBuf,
}

fn check_website_fixture(path: &Path) {
    let checked = WebsiteCreate::from_json_file(path)
        .and_then(|website| website.validate().map(|()| website));

    match checked {
        Ok(website) => {
            log::info!("Parsed website fixture {}: {:?}", path.display(), website)
        }
        Err(e) => {
            log::error!("Website fixture {} failed: {}", path.display(), e)
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let cli = Cli::parse();

    let settings = Settings::from_env()
        .expect("Invalid environment configuration (e.g. DATABASE_URL=sqlite://themeweave.db)");

    if cli.testing {
        log::info!("Running fixture checks...");
        check_website_fixture(&cli.fixture);
    }

    log::info!("Initializing database connection...");
    let db = Database::new(&settings.database_url)
        .await
        .expect("Failed to connect to database / run migrations");

    let mailer = SmtpMailer::new(settings.smtp.clone());
    if !mailer.is_configured() {
        log::warn!("SMTP credentials not configured; contact form submissions will fail");
    }

    let state = Data::new(AppState {
        pool: db.pool,
        landing: LandingPages::new(
            settings.clients_config.clone(),
            settings.public_dir.clone(),
        ),
        mailer: Arc::new(mailer),
    });

    let static_dir = settings.static_dir.clone();
    let css_themes_dir = settings.css_themes_dir.clone();

    log::info!("ThemeWeave backend starting on {}", settings.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors)
            .wrap(Logger::default())
            .app_data(state.clone())
            .app_data(json_config())
            .app_data(form_config())
            .configure(web::handlers::configure)
            .service(Files::new("/api/v1/cssThemes", css_themes_dir.clone()))
            .service(
                Files::new("/api/v1/static", static_dir.clone()).prefer_utf8(true),
            )
    })
    .bind(&settings.bind_addr)?
    .run()
    .await
}
