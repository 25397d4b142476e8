use serde::{Deserialize, Serialize};

use super::{ElementAttrs, Render};

fn figcaption(caption: &str) -> String {
    if caption.is_empty() {
        String::new()
    } else {
        format!("<figcaption>{}</figcaption>", caption)
    }
}

/// An image in a `<figure>`, optionally linked and captioned.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageElement {
    #[serde(flatten)]
    pub attrs: ElementAttrs,
    pub src: String,
    pub alt: String,
    pub caption: String,
    pub link: String,
}

impl ImageElement {
    pub fn new(
        attrs: ElementAttrs,
        src: impl Into<String>,
        alt: impl Into<String>,
        caption: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            attrs,
            src: src.into(),
            alt: alt.into(),
            caption: caption.into(),
            link: link.into(),
        }
    }
}

impl Render for ImageElement {
    fn render(&self) -> String {
        let mut image =
            format!(r#"<img src="{}" alt="{}" />"#, self.src, self.alt);

        if !self.link.is_empty() {
            image = format!(r#"<a href="{}">{}</a>"#, self.link, image);
        }

        format!(
            "<figure {}>{}{}</figure>",
            self.attrs,
            image,
            figcaption(&self.caption)
        )
    }
}

pub const YOUTUBE_VIDEO_TYPE: &str = "video/youtube";

/// A video; `video_type` is a MIME type such as `video/mp4`, or
/// `video/youtube` for an embedded player.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoElement {
    #[serde(flatten)]
    pub attrs: ElementAttrs,
    pub src: String,
    pub video_type: String,
    pub width: String,
    pub height: String,
    pub caption: String,
}

impl VideoElement {
    pub fn new(
        attrs: ElementAttrs,
        src: impl Into<String>,
        video_type: impl Into<String>,
        width: impl Into<String>,
        height: impl Into<String>,
        caption: impl Into<String>,
    ) -> Self {
        Self {
            attrs,
            src: src.into(),
            video_type: video_type.into(),
            width: width.into(),
            height: height.into(),
            caption: caption.into(),
        }
    }
}

impl Render for VideoElement {
    fn render(&self) -> String {
        let player = if self.video_type == YOUTUBE_VIDEO_TYPE {
            format!(
                r#"<iframe width="{}" height="{}" src="{}" frameborder="0" allowfullscreen></iframe>"#,
                self.width, self.height, self.src
            )
        } else {
            format!(
                r#"<video width="{}" height="{}" controls><source src="{}" type="{}"></video>"#,
                self.width, self.height, self.src, self.video_type
            )
        };

        format!(
            "<figure {}>{}{}</figure>",
            self.attrs,
            player,
            figcaption(&self.caption)
        )
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacerElement {
    #[serde(flatten)]
    pub attrs: ElementAttrs,
    pub height: String,
}

impl SpacerElement {
    pub fn new(attrs: ElementAttrs, height: impl Into<String>) -> Self {
        Self {
            attrs,
            height: height.into(),
        }
    }
}

impl Render for SpacerElement {
    fn render(&self) -> String {
        let attrs = self
            .attrs
            .with_style_prefix(&format!("height:{};", self.height));

        format!("<div {}></div>", attrs)
    }
}

#[derive(
    Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum GalleryLayout {
    #[default]
    Grid,
    Carousel,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryElement {
    #[serde(flatten)]
    pub attrs: ElementAttrs,
    pub images: Vec<ImageElement>,
    pub layout: GalleryLayout,
    /// Grid columns; values below 1 render as a single column.
    pub columns: u32,
}

impl GalleryElement {
    pub fn new(
        attrs: ElementAttrs,
        images: Vec<ImageElement>,
        layout: GalleryLayout,
        columns: u32,
    ) -> Self {
        Self {
            attrs,
            images,
            layout,
            columns,
        }
    }

    fn render_items(&self, item_class: &str) -> String {
        self.images
            .iter()
            .map(|image| {
                format!(r#"<div class="{}">{}</div>"#, item_class, image.render())
            })
            .collect()
    }
}

impl Render for GalleryElement {
    fn render(&self) -> String {
        let gallery = match self.layout {
            GalleryLayout::Grid => format!(
                r#"<div class="grid-container" style="display: grid; grid-template-columns: repeat({}, 1fr); grid-gap: 10px;">{}</div>"#,
                self.columns.max(1),
                self.render_items("grid-item")
            ),
            GalleryLayout::Carousel => format!(
                r#"<div class="carousel">{}</div>"#,
                self.render_items("carousel-item")
            ),
            GalleryLayout::Unknown => {
                "<div>Invalid gallery layout.</div>".to_string()
            }
        };

        format!("<div {}>{}</div>", self.attrs, gallery)
    }
}

#[derive(
    Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    Color,
    Gradient,
    Image,
    Video,
    #[default]
    #[serde(other)]
    Plain,
}

/// A section with a color, gradient, image or video background.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundElement {
    #[serde(flatten)]
    pub attrs: ElementAttrs,
    pub kind: BackgroundKind,
    pub color: String,
    pub gradient: String,
    pub image: String,
    pub video: VideoElement,
    pub content: String,
}

impl BackgroundElement {
    pub fn new(
        attrs: ElementAttrs,
        kind: BackgroundKind,
        content: impl Into<String>,
    ) -> Self {
        Self {
            attrs,
            kind,
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn gradient(mut self, gradient: impl Into<String>) -> Self {
        self.gradient = gradient.into();
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn video(mut self, video: VideoElement) -> Self {
        self.video = video;
        self
    }
}

impl Render for BackgroundElement {
    fn render(&self) -> String {
        let background = match self.kind {
            BackgroundKind::Color => {
                format!("background-color:{};", self.color)
            }
            BackgroundKind::Gradient => {
                format!("background-image:{};", self.gradient)
            }
            BackgroundKind::Image => format!(
                "background-image: url('{}'); background-size: cover;",
                self.image
            ),
            // The video is the whole background; content is not rendered.
            BackgroundKind::Video => return self.video.render(),
            BackgroundKind::Plain => String::new(),
        };

        format!(
            "<div {}>{}</div>",
            self.attrs.with_style_prefix(&background),
            self.content
        )
    }
}
