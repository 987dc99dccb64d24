//! Light/dark toggle rendered in the navbar's right-hand cluster.
//!
//! Only the button lives here. Stylesheets key off the `data-theme`
//! attribute it writes to the document element.

use core::fmt;

use icondata::{LuMoon, LuSun};
use leptos::{html::button, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{components::icons, i18n::use_translations};

/// `localStorage` key holding the chosen theme.
pub const STORAGE_KEY: &str = "stellar-theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub const fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_storage(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Installs the theme signal, seeded from browser storage when available.
pub fn provide_theme() -> RwSignal<Theme> {
    let theme = RwSignal::new(stored_theme().unwrap_or_default());
    provide_context(theme);
    theme
}

pub fn use_theme() -> RwSignal<Theme> {
    use_context::<RwSignal<Theme>>().unwrap_or_else(provide_theme)
}

#[cfg(target_arch = "wasm32")]
fn stored_theme() -> Option<Theme> {
    let storage = window().local_storage().ok().flatten()?;
    let value = storage.get_item(STORAGE_KEY).ok().flatten()?;
    Theme::from_storage(&value)
}

#[cfg(not(target_arch = "wasm32"))]
const fn stored_theme() -> Option<Theme> {
    None
}

/// Only a change made after mount is written back to storage; the first run
/// just reflects whatever was loaded.
fn should_persist(previous: Option<Theme>, current: Theme) -> bool {
    previous.is_some_and(|previous| previous != current)
}

#[cfg(target_arch = "wasm32")]
fn apply_theme(theme: Theme, persist: bool) {
    let window = window();
    if let Some(root) = window.document().and_then(|document| document.document_element())
        && let Err(err) = root.set_attribute("data-theme", theme.as_str())
    {
        tracing::warn!(?err, "could not apply theme");
    }
    if !persist {
        return;
    }
    match window.local_storage() {
        Ok(Some(storage)) => {
            if let Err(err) = storage.set_item(STORAGE_KEY, theme.as_str()) {
                tracing::warn!(?err, "could not persist theme");
            }
        }
        _ => tracing::debug!("local storage unavailable, theme not persisted"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_theme(theme: Theme, persist: bool) {
    tracing::debug!(%theme, persist, "theme changed");
}

/// The toggle button. Reads the theme signal from context.
pub fn toggle() -> impl IntoView {
    let theme = use_theme();
    let t = use_translations();

    Effect::new(move |previous: Option<Theme>| {
        let current = theme.get();
        apply_theme(current, should_persist(previous, current));
        current
    });

    button()
        .attr("type", "button")
        .class("navbar-theme-toggle")
        .attr("aria-label", move || match theme.get() {
            Theme::Light => t.get().t("switchToDark"),
            Theme::Dark => t.get().t("switchToLight"),
        })
        .on(leptos::ev::click, move |_| theme.update(|theme| *theme = theme.next()))
        .child(move || match theme.get() {
            Theme::Light => icons::component(LuMoon, "w-4 h-4").into_any(),
            Theme::Dark => icons::component(LuSun, "w-4 h-4").into_any(),
        })
}
