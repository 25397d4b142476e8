use serde::{Deserialize, Serialize};

use super::{ElementAttrs, Render};

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DivBlock {
    #[serde(flatten)]
    pub attrs: ElementAttrs,
    pub content: String,
}

impl DivBlock {
    pub fn new(attrs: ElementAttrs, content: impl Into<String>) -> Self {
        Self {
            attrs,
            content: content.into(),
        }
    }
}

impl Render for DivBlock {
    fn render(&self) -> String {
        format!("<div {}>{}</div>", self.attrs, self.content)
    }
}

/// Heading or paragraph text; `tag` is the element name (`h1`, `p`, ...).
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextBlock {
    #[serde(flatten)]
    pub attrs: ElementAttrs,
    pub content: String,
    pub tag: String,
}

impl TextBlock {
    pub fn new(
        attrs: ElementAttrs,
        content: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            attrs,
            content: content.into(),
            tag: tag.into(),
        }
    }
}

impl Render for TextBlock {
    fn render(&self) -> String {
        let tag = if self.tag.trim().is_empty() {
            "p"
        } else {
            self.tag.as_str()
        };

        format!("<{tag} {}>{}</{tag}>", self.attrs, self.content)
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListBlock {
    #[serde(flatten)]
    pub attrs: ElementAttrs,
    pub items: Vec<String>,
    pub ordered: bool,
}

impl ListBlock {
    pub fn new(attrs: ElementAttrs, items: Vec<String>, ordered: bool) -> Self {
        Self {
            attrs,
            items,
            ordered,
        }
    }
}

impl Render for ListBlock {
    fn render(&self) -> String {
        let tag = if self.ordered { "ol" } else { "ul" };
        let items: String = self
            .items
            .iter()
            .map(|item| format!("<li>{}</li>", item))
            .collect();

        format!("<{tag} {}>{}</{tag}>", self.attrs, items)
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteBlock {
    #[serde(flatten)]
    pub attrs: ElementAttrs,
    pub content: String,
    pub cite: String,
}

impl QuoteBlock {
    pub fn new(
        attrs: ElementAttrs,
        content: impl Into<String>,
        cite: impl Into<String>,
    ) -> Self {
        Self {
            attrs,
            content: content.into(),
            cite: cite.into(),
        }
    }
}

impl Render for QuoteBlock {
    fn render(&self) -> String {
        let cite = if self.cite.is_empty() {
            String::new()
        } else {
            format!("<cite>{}</cite>", self.cite)
        };

        format!(
            "<blockquote {}>{}{}</blockquote>",
            self.attrs, self.content, cite
        )
    }
}

/// A link styled as a button.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonBlock {
    #[serde(flatten)]
    pub attrs: ElementAttrs,
    pub text: String,
    pub link: String,
}

impl ButtonBlock {
    pub fn new(
        attrs: ElementAttrs,
        text: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            attrs,
            text: text.into(),
            link: link.into(),
        }
    }
}

impl Render for ButtonBlock {
    fn render(&self) -> String {
        format!(
            r#"<a href="{}" {}>{}</a>"#,
            self.link, self.attrs, self.text
        )
    }
}
