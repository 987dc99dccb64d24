//! Translation lookup.
//!
//! The navbar never owns display text. It asks a [`Translate`] implementation
//! for each key, read from context as a reactive [`Translations`] handle so a
//! locale change re-renders the labels in place.

use std::{collections::HashMap, sync::Arc};

use leptos::prelude::*;
use serde_json::Value;

use crate::{
    error::{NavbarError, Result},
    routing::Locale,
};

/// Namespace holding every key the navbar renders.
pub const NAMESPACE: &str = "navbar";

/// Resolves a translation key to display text.
#[cfg_attr(test, mockall::automock)]
pub trait Translate: Send + Sync {
    fn translate(&self, key: &str) -> String;
}

/// Cheaply clonable handle to a translator.
#[derive(Clone)]
pub struct Translations(Arc<dyn Translate>);

impl Translations {
    pub fn new(translator: impl Translate + 'static) -> Self {
        Self(Arc::new(translator))
    }

    pub fn t(&self, key: &str) -> String {
        self.0.translate(key)
    }
}

/// Echoes the key back. Used when no translator was provided.
struct KeyEcho;

impl Translate for KeyEcho {
    fn translate(&self, key: &str) -> String {
        key.to_owned()
    }
}

pub fn provide_translations(translations: Signal<Translations>) {
    provide_context(translations);
}

pub fn use_translations() -> Signal<Translations> {
    use_context::<Signal<Translations>>().unwrap_or_else(|| {
        tracing::warn!("no translations provided to the navbar, rendering raw keys");
        Signal::stored(Translations::new(KeyEcho))
    })
}

/// Flat key/text table for one namespace of a JSON message file shaped
/// `{ "<namespace>": { "<key>": "<text>" } }`.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    namespace: String,
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn from_json(json: &str, namespace: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(json)?;
        let entries = root
            .get(namespace)
            .and_then(Value::as_object)
            .ok_or_else(|| NavbarError::MissingNamespace(namespace.to_owned()))?;

        // Nested groups and non-string leaves are not navbar keys.
        let messages = entries
            .iter()
            .filter_map(|(key, text)| Some((key.clone(), text.as_str()?.to_owned())))
            .collect();

        Ok(Self {
            namespace: namespace.to_owned(),
            messages,
        })
    }

    /// The navbar messages bundled with the crate.
    pub fn embedded(locale: Locale) -> Result<Self> {
        let json = match locale {
            Locale::En => include_str!("../messages/en.json"),
            Locale::Es => include_str!("../messages/es.json"),
        };
        Self::from_json(json, NAMESPACE)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translate for MessageCatalog {
    fn translate(&self, key: &str) -> String {
        self.get(key).map_or_else(
            || {
                tracing::warn!(namespace = %self.namespace, key, "missing translation");
                key.to_owned()
            },
            ToOwned::to_owned,
        )
    }
}

/// Loads the bundled catalog for every locale and follows `locale` between
/// them.
pub fn embedded_translations(locale: Memo<Locale>) -> Result<Signal<Translations>> {
    let catalogs = Locale::ALL
        .into_iter()
        .map(|locale| {
            MessageCatalog::embedded(locale).map(|catalog| (locale, Translations::new(catalog)))
        })
        .collect::<Result<HashMap<_, _>>>()?;

    Ok(Signal::derive(move || {
        let locale = locale.get();
        catalogs
            .get(&locale)
            .cloned()
            .unwrap_or_else(|| Translations::new(KeyEcho))
    }))
}
