//! HTML element builders for ThemeWeave pages.
//!
//! Every element is plain data plus a [`Render`] impl that turns its fields
//! into an HTML fragment. Rendering never fails and never touches shared
//! state. Field values are inserted as-is: element content is authored by
//! the site builder and may itself contain markup.

use serde::{Deserialize, Serialize};

pub use blocks::*;
pub use interactive::*;
pub use media::*;

mod blocks;
mod interactive;
mod media;

pub trait Render {
    fn render(&self) -> String;
}

/// Attributes shared by every element.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementAttrs {
    pub id: String,
    pub class: String,
    pub style: String,
}

impl ElementAttrs {
    pub fn new(
        id: impl Into<String>,
        class: impl Into<String>,
        style: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            class: class.into(),
            style: style.into(),
        }
    }

    /// Same attributes with `prefix` placed in front of the inline style.
    pub fn with_style_prefix(&self, prefix: &str) -> Self {
        Self {
            id: self.id.clone(),
            class: self.class.clone(),
            style: format!("{}{}", prefix, self.style),
        }
    }
}

impl std::fmt::Display for ElementAttrs {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            r#"id="{}" class="{}" style="{}""#,
            self.id, self.class, self.style
        )
    }
}

/// Any element, tagged by its kind when (de)serialized:
/// `{"element": "button", "id": "cta", "text": "Go", "link": "/go"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "element", rename_all = "snake_case")]
pub enum Element {
    Div(DivBlock),
    Text(TextBlock),
    List(ListBlock),
    Quote(QuoteBlock),
    Button(ButtonBlock),
    Image(ImageElement),
    Video(VideoElement),
    Spacer(SpacerElement),
    Gallery(GalleryElement),
    Background(BackgroundElement),
    SocialLinks(SocialLinksElement),
    Form(FormElement),
    Map(MapElement),
    Accordion(AccordionElement),
    Tabs(TabsElement),
    Counter(CounterElement),
    ProgressBar(ProgressBarElement),
    Testimonial(TestimonialElement),
}

impl Element {
    pub const KINDS: [&'static str; 18] = [
        "div",
        "text",
        "list",
        "quote",
        "button",
        "image",
        "video",
        "spacer",
        "gallery",
        "background",
        "social_links",
        "form",
        "map",
        "accordion",
        "tabs",
        "counter",
        "progress_bar",
        "testimonial",
    ];

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Div(_) => "div",
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Quote(_) => "quote",
            Self::Button(_) => "button",
            Self::Image(_) => "image",
            Self::Video(_) => "video",
            Self::Spacer(_) => "spacer",
            Self::Gallery(_) => "gallery",
            Self::Background(_) => "background",
            Self::SocialLinks(_) => "social_links",
            Self::Form(_) => "form",
            Self::Map(_) => "map",
            Self::Accordion(_) => "accordion",
            Self::Tabs(_) => "tabs",
            Self::Counter(_) => "counter",
            Self::ProgressBar(_) => "progress_bar",
            Self::Testimonial(_) => "testimonial",
        }
    }
}

impl Render for Element {
    fn render(&self) -> String {
        match self {
            Self::Div(e) => e.render(),
            Self::Text(e) => e.render(),
            Self::List(e) => e.render(),
            Self::Quote(e) => e.render(),
            Self::Button(e) => e.render(),
            Self::Image(e) => e.render(),
            Self::Video(e) => e.render(),
            Self::Spacer(e) => e.render(),
            Self::Gallery(e) => e.render(),
            Self::Background(e) => e.render(),
            Self::SocialLinks(e) => e.render(),
            Self::Form(e) => e.render(),
            Self::Map(e) => e.render(),
            Self::Accordion(e) => e.render(),
            Self::Tabs(e) => e.render(),
            Self::Counter(e) => e.render(),
            Self::ProgressBar(e) => e.render(),
            Self::Testimonial(e) => e.render(),
        }
    }
}

macro_rules! impl_from_element {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Element {
                fn from(e: $ty) -> Self {
                    Self::$variant(e)
                }
            }
        )*
    };
}

impl_from_element!(
    Div(DivBlock),
    Text(TextBlock),
    List(ListBlock),
    Quote(QuoteBlock),
    Button(ButtonBlock),
    Image(ImageElement),
    Video(VideoElement),
    Spacer(SpacerElement),
    Gallery(GalleryElement),
    Background(BackgroundElement),
    SocialLinks(SocialLinksElement),
    Form(FormElement),
    Map(MapElement),
    Accordion(AccordionElement),
    Tabs(TabsElement),
    Counter(CounterElement),
    ProgressBar(ProgressBarElement),
    Testimonial(TestimonialElement),
);

pub fn render_all(elements: &[Element]) -> String {
    elements.iter().map(Render::render).collect()
}
