//! The fixed top navigation bar.
//!
//! [`component`] wires the bar to the router, the translation context and the
//! window; [`render`] only turns already-resolved inputs into markup. Links
//! are router `<A>` elements, so both must be rendered inside a `Router`.

use icondata::{LuMenu, LuX};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::{
    components::icons,
    config::NavbarConfig,
    i18n::{Translations, use_translations},
    links::{NAV_LINKS, NavLink},
    routing::{Locale, localized_href, use_locale, use_localized_pathname},
    state::{NavbarState, close_on_navigation, track_scroll},
    theme,
};

/// Everything the bar reads from its collaborators.
#[derive(Clone, Copy)]
pub struct Inputs {
    /// Current pathname without its locale segment.
    pub pathname: Signal<String>,
    pub locale: Signal<Locale>,
    pub translations: Signal<Translations>,
}

/// Mounts the navbar. Expects to be rendered inside a `Router`; reads an
/// optional [`NavbarConfig`] from context.
#[must_use]
pub fn component() -> impl IntoView {
    let config = use_context::<NavbarConfig>().unwrap_or_default();
    let state = NavbarState::new(&config);
    let inputs = Inputs {
        pathname: use_localized_pathname().into(),
        locale: use_locale().into(),
        translations: use_translations(),
    };

    track_scroll(state);
    close_on_navigation(state, inputs.pathname);

    render(inputs, state, config, theme::toggle())
}

pub fn render(
    inputs: Inputs,
    state: NavbarState,
    config: NavbarConfig,
    theme_toggle: impl IntoView + 'static,
) -> impl IntoView {
    let t = inputs.translations;
    let NavbarState {
        scrolled,
        mobile_open,
        ..
    } = state;

    view! {
        <nav
            class=move || {
                if scrolled.get() {
                    "fixed top-0 right-0 left-0 z-40 transition-all duration-300 navbar-scrolled"
                } else {
                    "fixed top-0 right-0 left-0 z-40 transition-all duration-300 navbar-default"
                }
            }
            style=format!("padding-left: {}", config.sidebar_offset)
        >
            <div class="flex justify-between items-center px-6 h-14 navbar-inner">
                <div class="flex gap-2 items-center">
                    <span class="navbar-live-dot"></span>
                    <span class="navbar-live-text">{move || t.get().t("liveNetwork")}</span>
                </div>

                <ul class="hidden gap-1 items-center md:flex navbar-links">
                    {NAV_LINKS.iter().map(|link| desktop_link(*link, inputs)).collect_view()}
                </ul>

                <div class="flex gap-2 items-center">
                    {theme_toggle}
                    <button
                        type="button"
                        class="md:hidden navbar-hamburger"
                        on:click=move |_| state.toggle_mobile()
                        aria-label=move || t.get().t("toggleMenu")
                        aria-expanded=move || mobile_open.get().to_string()
                    >
                        {move || {
                            if mobile_open.get() {
                                icons::component(LuX, "w-5 h-5").into_any()
                            } else {
                                icons::component(LuMenu, "w-5 h-5").into_any()
                            }
                        }}
                    </button>
                    <div class="hidden gap-2 items-center md:flex navbar-brand-tag">
                        <span class="w-1.5 h-1.5 rounded-full bg-accent"></span>
                        <span>{move || t.get().t("stellarInsights")}</span>
                    </div>
                </div>
            </div>

            <div class=move || {
                if mobile_open.get() {
                    "md:hidden navbar-mobile-panel open"
                } else {
                    "md:hidden navbar-mobile-panel"
                }
            }>
                {NAV_LINKS.iter().map(|link| mobile_link(*link, inputs)).collect_view()}
            </div>
        </nav>
        <div class="h-14"></div>
    }
}

fn desktop_link(link: NavLink, inputs: Inputs) -> impl IntoView {
    let Inputs {
        pathname,
        locale,
        translations: t,
    } = inputs;
    let is_active = move || pathname.with(|pathname| link.is_active(pathname));

    view! {
        <li>
            <A
                href=move || localized_href(locale.get(), link.href)
                exact=true
                attr:class=move || {
                    if is_active() { "navbar-link navbar-link--active" } else { "navbar-link" }
                }
            >
                {icons::component(link.icon, "w-4 h-4 shrink-0")}
                <span>{move || t.get().t(link.key)}</span>
                {move || is_active().then(|| view! { <span class="navbar-link-indicator"></span> })}
            </A>
        </li>
    }
}

fn mobile_link(link: NavLink, inputs: Inputs) -> impl IntoView {
    let Inputs {
        pathname,
        locale,
        translations: t,
    } = inputs;
    let is_active = move || pathname.with(|pathname| link.is_active(pathname));

    view! {
        <A
            href=move || localized_href(locale.get(), link.href)
            exact=true
            attr:class=move || {
                if is_active() {
                    "navbar-mobile-link navbar-mobile-link--active"
                } else {
                    "navbar-mobile-link"
                }
            }
        >
            <div class="navbar-mobile-icon-wrap">{icons::component(link.icon, "w-4 h-4")}</div>
            <div>
                <div class="text-sm font-semibold">{move || t.get().t(link.key)}</div>
                <div class="text-xs text-muted-foreground">{move || t.get().t(link.desc_key)}</div>
            </div>
            {move || {
                is_active()
                    .then(|| view! { <span class="ml-auto w-1.5 h-1.5 rounded-full bg-accent"></span> })
            }}
        </A>
    }
}
