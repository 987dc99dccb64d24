//! This crate provides the WebAssembly (WASM) entry point that mounts the
//! navbar in the browser.
//!
//! It installs the collaborators the navbar reads from context (translations,
//! theme, config) inside a minimal locale-prefixed router, and initializes
//! client-side logging.

use leptos::{
    html::{h1, main},
    prelude::*,
};
use leptos_meta::{Title, TitleProps, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{FlatRoutes, Redirect, Route, Router},
};
use navbar::{
    NavbarConfig,
    i18n::{embedded_translations, provide_translations, use_translations},
    routing::{Locale, localized_href, use_locale},
    theme::provide_theme,
};

#[wasm_bindgen::prelude::wasm_bindgen(start)]
/// Mounts the application on the client.
///
/// Initializes `console_log` (which also receives the navbar's `tracing`
/// events) and `console_error_panic_hook`, then mounts [`app`] to the body.
pub fn mount() {
    // Initialize console logging for client-side debugging.
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app);
}

#[must_use]
pub fn app() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            {layout}
        </Router>
    }
}

/// Everything below the router: collaborators, navbar and page outlet.
fn layout() -> impl IntoView {
    let locale = use_locale();
    match embedded_translations(locale) {
        Ok(translations) => provide_translations(translations),
        Err(err) => log::error!("Failed to load navbar messages: {err}"),
    }
    provide_theme();
    provide_context(NavbarConfig::default());

    let home = localized_href(Locale::default(), "/");

    view! {
        {navbar::component}
        <FlatRoutes fallback=|| page("notFound")>
            <Route path=StaticSegment("") view=move || view! { <Redirect path=home.clone()/> }/>
            <Route path=ParamSegment("locale") view=|| page("liveNetwork")/>
            <Route path=(ParamSegment("locale"), StaticSegment("about")) view=|| page("aboutUs")/>
            <Route path=(ParamSegment("locale"), StaticSegment("how-to-use")) view=|| page("howToUse")/>
            <Route path=(ParamSegment("locale"), StaticSegment("contact")) view=|| page("contactUs")/>
        </FlatRoutes>
    }
}

/// Placeholder page titled with a navbar message.
fn page(key: &'static str) -> impl IntoView {
    let t = use_translations();

    main().class("container px-6 pt-10 mx-auto").child((
        Title(TitleProps::builder().text(move || t.get().t(key)).build()),
        h1().class("text-2xl font-semibold").child(move || t.get().t(key)),
    ))
}
