use chrono::Utc;
use sqlx::types::Json;
use sqlx::SqlitePool;

use crate::models::{Website, WebsiteCreate};

pub async fn create_website(
    pool: &SqlitePool,
    data: &WebsiteCreate,
) -> Result<Website, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, Website>(
        r#"
        INSERT INTO websites (
            user_id, name, theme, color_scheme,
            main_body, call_to_action,
            header_content, footer_content,
            created_at, updated_at
        )
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)
        RETURNING *
        "#,
    )
    .bind(data.user_id)
    .bind(data.name.trim())
    .bind(data.theme.trim())
    .bind(data.resolved_color_scheme())
    .bind(Json(&data.main_body))
    .bind(Json(&data.call_to_action))
    .bind(&data.header_content)
    .bind(&data.footer_content)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn get_website_by_id(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<Website>, sqlx::Error> {
    sqlx::query_as::<_, Website>(
        r#"
        SELECT *
        FROM websites
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
