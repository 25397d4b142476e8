use serde::{Deserialize, Serialize};

pub const DEFAULT_COLOR_SCHEME: &str = "#ffffff,#000000,#3498db";

/// Primary, secondary and accent colors of a website, stored as
/// `primary,secondary,accent`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl ColorScheme {
    /// Inline CSS custom properties, e.g. for a `style` attribute.
    pub fn css_variables(&self) -> String {
        format!(
            "--primary:{};--secondary:{};--accent:{};",
            self.primary, self.secondary, self.accent
        )
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            primary: "#ffffff".into(),
            secondary: "#000000".into(),
            accent: "#3498db".into(),
        }
    }
}

impl std::fmt::Display for ColorScheme {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{},{},{}", self.primary, self.secondary, self.accent)
    }
}

fn is_hex_color(s: &str) -> bool {
    let Some(digits) = s.strip_prefix('#') else {
        return false;
    };

    matches!(digits.len(), 3 | 6)
        && digits.chars().all(|c| c.is_ascii_hexdigit())
}

impl std::str::FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();

        let [primary, secondary, accent] = parts.as_slice() else {
            return Err(format!(
                "color scheme must have exactly three colors, got {:?}",
                s
            ));
        };

        for color in [primary, secondary, accent] {
            if !is_hex_color(color) {
                return Err(format!("invalid hex color: {:?}", color));
            }
        }

        Ok(Self {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
        })
    }
}
