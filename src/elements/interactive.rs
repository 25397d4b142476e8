use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ElementAttrs, Render};

const ACCORDION_SCRIPT: &str = r#"<script>
function toggleAccordion(id) {
    var panel = document.getElementById(id);
    if (panel.style.display === "block") {
        panel.style.display = "none";
    } else {
        panel.style.display = "block";
    }
}
</script>"#;

const TABS_SCRIPT: &str = r#"<script>
function openTab(evt, tabsID, tabID) {
    var container = document.getElementById(tabsID);
    var i;
    var contents = container.getElementsByClassName("tab-content");
    for (i = 0; i < contents.length; i++) {
        contents[i].style.display = "none";
    }
    var buttons = container.getElementsByClassName("tab-button");
    for (i = 0; i < buttons.length; i++) {
        buttons[i].className = buttons[i].className.replace(" active", "");
    }
    document.getElementById(tabID).style.display = "block";
    evt.currentTarget.className += " active";
}
</script>"#;

const COUNTER_SCRIPT: &str = r#"<script>
function animateCounter(id, start, end, duration, prefix, suffix) {
    var obj = document.getElementById(id);
    var range = end - start;
    var minTimer = 50;
    var stepTime = Math.abs(Math.floor(duration * 1000 / (range || 1)));
    stepTime = Math.max(stepTime, minTimer);
    var startTime = new Date().getTime();
    var timer = setInterval(function() {
        var now = new Date().getTime() - startTime;
        var progress = duration > 0 ? Math.min(now / (duration * 1000), 1) : 1;
        var value = Math.floor(start + progress * range);
        obj.innerHTML = prefix + value + suffix;
        if (progress === 1) {
            clearInterval(timer);
        }
    }, stepTime);
}
</script>"#;

/// Icon links to social profiles, keyed by platform name. Platforms render in
/// sorted order.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinksElement {
    #[serde(flatten)]
    pub attrs: ElementAttrs,
    pub links: BTreeMap<String, String>,
    pub icon_size: String,
}

impl SocialLinksElement {
    pub fn new(
        attrs: ElementAttrs,
        links: BTreeMap<String, String>,
        icon_size: impl Into<String>,
    ) -> Self {
        Self {
            attrs,
            links,
            icon_size: icon_size.into(),
        }
    }
}

impl Render for SocialLinksElement {
    fn render(&self) -> String {
        let links: String = self
            .links
            .iter()
            .map(|(platform, url)| {
                format!(
                    r#"<a href="{url}" target="_blank"><img src="/icons/{platform}.png" alt="{platform}" style="width: {size}; height: {size};"></a>"#,
                    size = self.icon_size
                )
            })
            .collect();

        format!("<div {}>{}</div>", self.attrs, links)
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormField {
    pub label: String,
    /// `text`, `email`, `textarea`, ...
    #[serde(rename = "type")]
    pub field_type: String,
    pub name: String,
    pub placeholder: String,
    pub required: bool,
}

impl FormField {
    pub fn new(
        label: impl Into<String>,
        field_type: impl Into<String>,
        name: impl Into<String>,
        placeholder: impl Into<String>,
        required: bool,
    ) -> Self {
        Self {
            label: label.into(),
            field_type: field_type.into(),
            name: name.into(),
            placeholder: placeholder.into(),
            required,
        }
    }

    fn render(&self) -> String {
        let required = if self.required { "required" } else { "" };
        let label = format!(
            r#"<label for="{}">{}:</label>"#,
            self.name, self.label
        );

        let input = if self.field_type == "textarea" {
            format!(
                r#"<textarea id="{name}" name="{name}" placeholder="{}" {}></textarea>"#,
                self.placeholder,
                required,
                name = self.name
            )
        } else {
            format!(
                r#"<input type="{}" id="{name}" name="{name}" placeholder="{}" {}>"#,
                self.field_type,
                self.placeholder,
                required,
                name = self.name
            )
        };

        format!("{}{}<br>", label, input)
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormElement {
    #[serde(flatten)]
    pub attrs: ElementAttrs,
    pub fields: Vec<FormField>,
    pub action: String,
    pub method: String,
    pub submit_button_text: String,
}

impl FormElement {
    pub fn new(
        attrs: ElementAttrs,
        fields: Vec<FormField>,
        action: impl Into<String>,
        method: impl Into<String>,
        submit_button_text: impl Into<String>,
    ) -> Self {
        Self {
            attrs,
            fields,
            action: action.into(),
            method: method.into(),
            submit_button_text: submit_button_text.into(),
        }
    }
}

impl Render for FormElement {
    fn render(&self) -> String {
        let fields: String =
            self.fields.iter().map(FormField::render).collect();

        format!(
            r#"<form {} action="{}" method="{}">{}<button type="submit">{}</button></form>"#,
            self.attrs,
            self.action,
            self.method,
            fields,
            self.submit_button_text
        )
    }
}

/// An embedded map, e.g. a Google Maps embed URL.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapElement {
    #[serde(flatten)]
    pub attrs: ElementAttrs,
    pub src: String,
    pub width: String,
    pub height: String,
}

impl MapElement {
    pub fn new(
        attrs: ElementAttrs,
        src: impl Into<String>,
        width: impl Into<String>,
        height: impl Into<String>,
    ) -> Self {
        Self {
            attrs,
            src: src.into(),
            width: width.into(),
            height: height.into(),
        }
    }
}

impl Render for MapElement {
    fn render(&self) -> String {
        format!(
            r#"<iframe {} src="{}" width="{}" height="{}" allowfullscreen="" loading="lazy" referrerpolicy="no-referrer-when-downgrade"></iframe>"#,
            self.attrs.with_style_prefix("border:0;"),
            self.src,
            self.width,
            self.height
        )
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccordionItem {
    pub title: String,
    pub content: String,
}

impl AccordionItem {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccordionElement {
    #[serde(flatten)]
    pub attrs: ElementAttrs,
    pub items: Vec<AccordionItem>,
}

impl AccordionElement {
    pub fn new(attrs: ElementAttrs, items: Vec<AccordionItem>) -> Self {
        Self { attrs, items }
    }
}

impl Render for AccordionElement {
    fn render(&self) -> String {
        let items: String = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let item_id = format!("{}-item-{}", self.attrs.id, i);
                format!(
                    r#"<button class="accordion-button" onclick="toggleAccordion('{item_id}')">{}</button><div class="accordion-panel" id="{item_id}">{}</div>"#,
                    item.title, item.content
                )
            })
            .collect();

        format!("<div {}>{}{}</div>", self.attrs, items, ACCORDION_SCRIPT)
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabItem {
    pub title: String,
    pub content: String,
}

impl TabItem {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsElement {
    #[serde(flatten)]
    pub attrs: ElementAttrs,
    pub tabs: Vec<TabItem>,
}

impl TabsElement {
    pub fn new(attrs: ElementAttrs, tabs: Vec<TabItem>) -> Self {
        Self { attrs, tabs }
    }
}

impl Render for TabsElement {
    fn render(&self) -> String {
        let id = &self.attrs.id;
        let mut headers = String::new();
        let mut contents = String::new();

        for (i, tab) in self.tabs.iter().enumerate() {
            let tab_id = format!("{}-tab-{}", id, i);
            headers.push_str(&format!(
                r#"<button class="tab-button" onclick="openTab(event, '{id}', '{tab_id}')">{}</button>"#,
                tab.title
            ));
            contents.push_str(&format!(
                r#"<div id="{tab_id}" class="tab-content">{}</div>"#,
                tab.content
            ));
        }

        // First tab starts open.
        let init = format!(
            r#"<script>document.addEventListener("DOMContentLoaded", function() {{ var first = document.querySelector("[id='{id}'] .tab-button"); if (first) {{ first.click(); }} }});</script>"#
        );

        format!(
            r#"<div {}><div class="tab">{}</div>{}{}{}</div>"#,
            self.attrs, headers, contents, TABS_SCRIPT, init
        )
    }
}

/// A number that counts from `start` to `end` over `duration` seconds once
/// the page has loaded.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterElement {
    #[serde(flatten)]
    pub attrs: ElementAttrs,
    pub start: i64,
    pub end: i64,
    pub duration: u32,
    pub prefix: String,
    pub suffix: String,
}

impl CounterElement {
    pub fn new(attrs: ElementAttrs, start: i64, end: i64, duration: u32) -> Self {
        Self {
            attrs,
            start,
            end,
            duration,
            ..Self::default()
        }
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    fn counter_id(&self) -> String {
        format!("{}-counter", self.attrs.id)
    }
}

impl Render for CounterElement {
    fn render(&self) -> String {
        let counter_id = self.counter_id();
        let start_call = format!(
            r#"<script>document.addEventListener('DOMContentLoaded', function() {{ animateCounter('{}', {}, {}, {}, '{}', '{}'); }});</script>"#,
            counter_id,
            self.start,
            self.end,
            self.duration,
            self.prefix,
            self.suffix
        );

        format!(
            r#"<div {}><span id="{}">{}</span>{}{}</div>"#,
            self.attrs, counter_id, self.start, COUNTER_SCRIPT, start_call
        )
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressBarElement {
    #[serde(flatten)]
    pub attrs: ElementAttrs,
    /// Percentage, 0 to 100.
    pub progress: u8,
    pub height: String,
    pub color: String,
}

impl ProgressBarElement {
    pub fn new(
        attrs: ElementAttrs,
        progress: u8,
        height: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            attrs,
            progress,
            height: height.into(),
            color: color.into(),
        }
    }
}

impl Render for ProgressBarElement {
    fn render(&self) -> String {
        format!(
            r#"<div {}><div style="width: {}%; height: {}; background-color: {};"></div></div>"#,
            self.attrs, self.progress, self.height, self.color
        )
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialElement {
    #[serde(flatten)]
    pub attrs: ElementAttrs,
    pub quote: String,
    pub author: String,
    pub author_image: String,
    pub company: String,
}

impl TestimonialElement {
    pub fn new(
        attrs: ElementAttrs,
        quote: impl Into<String>,
        author: impl Into<String>,
        author_image: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            attrs,
            quote: quote.into(),
            author: author.into(),
            author_image: author_image.into(),
            company: company.into(),
        }
    }
}

impl Render for TestimonialElement {
    fn render(&self) -> String {
        let image = if self.author_image.is_empty() {
            String::new()
        } else {
            format!(
                r#"<img src="{}" alt="{}" style="width: 50px; height: 50px; border-radius: 50%;">"#,
                self.author_image, self.author
            )
        };

        let author = match (self.author.is_empty(), self.company.is_empty()) {
            (true, _) => String::new(),
            (false, true) => format!("<cite>{}</cite>", self.author),
            (false, false) => {
                format!("<cite>{}, {}</cite>", self.author, self.company)
            }
        };

        format!(
            "<blockquote {}>{}<br>{}{}</blockquote>",
            self.attrs, self.quote, image, author
        )
    }
}
