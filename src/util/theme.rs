//! Color theme preference.
//!
//! Same storage idiom as the credential slot: one string in
//! `localStorage`, written only through [`set`]. A stored value wins over
//! the OS preference so an explicit choice sticks across devices with
//! different system settings. The theme lands on `<html>` as a class so
//! the stylesheet can scope on it. SSR builds render light and skip
//! persistence.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "rainos_theme";

#[cfg(feature = "hydrate")]
const DARK_CLASS: &str = "dark-mode";

/// The two themes the stylesheet knows about.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a persisted value. Unknown strings read as no preference,
    /// so a corrupted slot falls through to the system default.
    fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    fn as_stored(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

#[cfg(feature = "hydrate")]
fn stored() -> Option<Theme> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item(STORAGE_KEY).ok()??;
    Theme::from_stored(&raw)
}

#[cfg(feature = "hydrate")]
fn system_default() -> Theme {
    let prefers_dark = web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|mq| mq.matches());
    if prefers_dark { Theme::Dark } else { Theme::Light }
}

/// Resolve the effective theme: the stored choice, else the OS setting.
pub fn load() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        stored().unwrap_or_else(system_default)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::default()
    }
}

/// Reflect a theme on the document root without touching storage. Used
/// at startup so merely visiting the app never writes a preference.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let class_list = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .map(|el| el.class_list());
        if let Some(class_list) = class_list {
            let _ = if theme.is_dark() {
                class_list.add_1(DARK_CLASS)
            } else {
                class_list.remove_1(DARK_CLASS)
            };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Apply a theme and persist it as the user's explicit choice.
pub fn set(theme: Theme) {
    apply(theme);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, theme.as_stored());
            }
        }
    }
}
