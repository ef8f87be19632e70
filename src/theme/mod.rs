//! Visual theme: global stylesheet and colour scheme.

mod styles;

pub use styles::GLOBAL_STYLES;

/// Light or dark page rendering
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// Returns the CSS class applied to the page root
    pub fn class(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    /// Label for the toggle button (names the scheme it switches to)
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ColorScheme::Light => "Dark mode",
            ColorScheme::Dark => "Light mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_classes() {
        assert_eq!(ColorScheme::Light.class(), "light");
        assert_eq!(ColorScheme::Dark.class(), "dark");
    }

    #[test]
    fn toggle_is_involution() {
        assert_eq!(ColorScheme::Light.toggled(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Light.toggled().toggled(), ColorScheme::Light);
    }

    #[test]
    fn default_is_light() {
        assert_eq!(ColorScheme::default(), ColorScheme::Light);
    }
}
