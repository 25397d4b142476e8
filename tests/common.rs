#![allow(dead_code)]

use std::path::PathBuf;

use themeweave::elements::*;
use themeweave::models::*;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn get_website_create() -> WebsiteCreate {
    WebsiteCreate {
        user_id: 42,
        name: "Corner Bakery".to_string(),
        theme: "minimal".to_string(),
        color_scheme: None,
        main_body: vec![
            "Fresh bread every morning".to_string(),
            "Open since 1987".to_string(),
        ],
        call_to_action: vec!["Order a cake".to_string()],
        header_content: "<h1>Corner Bakery</h1>".to_string(),
        footer_content: "<p>123 Main St</p>".to_string(),
    }
}

pub fn attrs(id: &str) -> ElementAttrs {
    ElementAttrs::new(id, "c", "s")
}

pub fn get_image(id: &str) -> ImageElement {
    ImageElement::new(
        attrs(id),
        format!("/img/{id}.jpg"),
        format!("{id} alt"),
        "",
        "",
    )
}

pub fn get_video() -> VideoElement {
    VideoElement::new(
        attrs("promo"),
        "/media/promo.mp4",
        "video/mp4",
        "640",
        "360",
        "Our story",
    )
}
