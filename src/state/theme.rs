#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Color scheme of the page. Dark is the default for first-time visitors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Maps a stored preference back to a theme. Anything other than the two
    /// exact values (missing key, tampered storage) falls back to dark, and
    /// nothing is written back.
    pub fn from_stored(valor: Option<&str>) -> Self {
        match valor {
            Some("light") => Theme::Light,
            Some("dark") => Theme::Dark,
            _ => Theme::Dark,
        }
    }

    /// The value persisted to storage and mirrored in `data-theme` on `<body>`.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label for the toggle button: it names the mode a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Modo oscuro",
            Theme::Dark => "Modo claro",
        }
    }
}
