//! Page-wide color scheme: one writer (the header toggle), read everywhere.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// The page-wide color scheme. The server render starts from the default;
/// a stored choice wins once hydration has read it back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub const fn flipped(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, ColorScheme::Dark)
    }

    /// Class placed on the page root; the `dark:` style variants key off it.
    pub const fn root_class(self) -> &'static str {
        match self {
            ColorScheme::Light => "",
            ColorScheme::Dark => "dark",
        }
    }
}

/// Shared theme handle. The header's toggle is the single writer; every
/// section only reads.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    scheme: RwSignal<ColorScheme>,
}

impl ThemeContext {
    pub fn scheme(&self) -> ColorScheme {
        self.scheme.get()
    }

    pub fn dark(&self) -> bool {
        self.scheme.get().is_dark()
    }

    /// Flip the scheme. Only the header's dark-mode control calls this.
    pub fn toggle(&self) {
        self.scheme.update(|scheme| *scheme = scheme.flipped());
    }

    /// Adopt a previously stored choice. Writing only on an actual change
    /// keeps the storage round-trip from re-notifying itself.
    pub fn restore(&self, scheme: ColorScheme) {
        if self.scheme.get_untracked() != scheme {
            self.scheme.set(scheme);
        }
    }
}

/// Install the theme handle on the current owner and hand it back to the
/// root composition.
pub fn provide_theme() -> ThemeContext {
    let ctx = ThemeContext {
        scheme: RwSignal::new(ColorScheme::default()),
    };
    provide_context(ctx);
    ctx
}

/// Theme handle provided by the root composition.
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        assert_eq!(ColorScheme::Light.flipped(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Light.flipped().flipped(), ColorScheme::Light);
    }

    #[test]
    fn dark_class_only_on_dark() {
        assert_eq!(ColorScheme::Light.root_class(), "");
        assert_eq!(ColorScheme::Dark.root_class(), "dark");
        assert!(!ColorScheme::Light.is_dark());
        assert!(ColorScheme::Dark.is_dark());
    }
}
