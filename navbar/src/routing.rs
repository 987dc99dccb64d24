//! Locale-prefixed paths.
//!
//! Every page lives under a locale segment (`/en/about`, `/es/contact`). The
//! navbar compares and renders paths without that prefix and adds it back
//! when building hrefs.

use core::{fmt, str::FromStr};

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use serde::{Deserialize, Serialize};

use crate::error::NavbarError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub const ALL: [Self; 2] = [Self::En, Self::Es];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = NavbarError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.as_str() == tag)
            .ok_or_else(|| NavbarError::UnknownLocale(tag.to_owned()))
    }
}

/// Splits the locale segment off a pathname.
///
/// Paths without a known locale prefix are returned unchanged together with
/// the default locale.
pub fn strip_locale(path: &str) -> (Locale, String) {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let (segment, rest) = trimmed.split_once('/').unwrap_or((trimmed, ""));

    match segment.parse::<Locale>() {
        Ok(locale) => (locale, format!("/{rest}")),
        Err(_) if path.is_empty() => (Locale::default(), "/".to_owned()),
        Err(_) => (Locale::default(), path.to_owned()),
    }
}

/// Prefixes a locale-free path with `locale`.
pub fn localized_href(locale: Locale, path: &str) -> String {
    match path.trim_start_matches('/') {
        "" => format!("/{locale}"),
        rest => format!("/{locale}/{rest}"),
    }
}

/// The current router pathname with its locale segment removed.
pub fn use_localized_pathname() -> Memo<String> {
    let location = use_location();
    Memo::new(move |_| strip_locale(&location.pathname.get()).1)
}

/// The locale named by the current router pathname.
pub fn use_locale() -> Memo<Locale> {
    let location = use_location();
    Memo::new(move |_| strip_locale(&location.pathname.get()).0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_locale_parsing() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("es".parse::<Locale>().unwrap(), Locale::Es);
        assert_matches!("EN".parse::<Locale>(), Err(NavbarError::UnknownLocale(tag)) if tag == "EN");
        assert_matches!("".parse::<Locale>(), Err(NavbarError::UnknownLocale(_)));
    }

    #[test]
    fn test_strip_locale() {
        assert_eq!(strip_locale("/en/about"), (Locale::En, "/about".to_owned()));
        assert_eq!(strip_locale("/es/how-to-use"), (Locale::Es, "/how-to-use".to_owned()));
        assert_eq!(strip_locale("/es"), (Locale::Es, "/".to_owned()));
        assert_eq!(strip_locale("/en/"), (Locale::En, "/".to_owned()));
        assert_eq!(strip_locale("/en/docs/intro"), (Locale::En, "/docs/intro".to_owned()));
    }

    #[test]
    fn test_strip_locale_without_prefix() {
        assert_eq!(strip_locale("/about"), (Locale::En, "/about".to_owned()));
        assert_eq!(strip_locale("/"), (Locale::En, "/".to_owned()));
        assert_eq!(strip_locale(""), (Locale::En, "/".to_owned()));
        assert_eq!(strip_locale("/fr/contact"), (Locale::En, "/fr/contact".to_owned()));
    }

    #[test]
    fn test_localized_href() {
        assert_eq!(localized_href(Locale::En, "/about"), "/en/about");
        assert_eq!(localized_href(Locale::Es, "/contact"), "/es/contact");
        assert_eq!(localized_href(Locale::Es, "/"), "/es");
    }

    #[test]
    fn test_prefix_then_strip_is_identity() {
        for locale in Locale::ALL {
            for path in ["/about", "/how-to-use", "/contact", "/"] {
                assert_eq!(
                    strip_locale(&localized_href(locale, path)),
                    (locale, path.to_owned())
                );
            }
        }
    }

    #[test]
    fn test_locale_serde_uses_tag() {
        assert_eq!(serde_json::to_string(&Locale::Es).unwrap(), "\"es\"");
        assert_eq!(serde_json::from_str::<Locale>("\"en\"").unwrap(), Locale::En);
    }
}
