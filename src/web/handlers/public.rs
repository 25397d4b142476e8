use actix_web::{get, web, Responder};

use themeweave::elements::{render_all, Element, ElementAttrs, ListBlock};
use themeweave::models::ColorScheme;

use crate::web::helpers::render;
use crate::web::templates::IndexTemplate;

fn demo_hierarchy() -> Vec<Vec<String>> {
    let first = ["element1", "element2", "element3"];
    let second = ["itemA", "itemB", "itemC"];

    [first, second]
        .iter()
        .map(|items| items.iter().map(|s| s.to_string()).collect())
        .collect()
}

#[get("/")]
pub async fn index() -> impl Responder {
    let sections: Vec<Element> = demo_hierarchy()
        .into_iter()
        .enumerate()
        .map(|(i, items)| {
            ListBlock::new(
                ElementAttrs::new(format!("hierarchy-{i}"), "hierarchy", ""),
                items,
                true,
            )
            .into()
        })
        .collect();

    render(IndexTemplate {
        title: "ThemeWeave".to_string(),
        message: "Build a website from reusable elements.".to_string(),
        style: ColorScheme::default().css_variables(),
        sections: render_all(&sections),
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index);
}
