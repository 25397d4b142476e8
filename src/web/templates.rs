use askama::Template;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: String,
    pub message: String,
    /// Inline CSS for the page root, e.g. color scheme variables.
    pub style: String,
    /// Pre-rendered element markup.
    pub sections: String,
}
