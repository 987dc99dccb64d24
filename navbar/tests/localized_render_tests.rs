/// Renders the navbar through the public API with the bundled message
/// catalogs, the way a host application wires it.
#[cfg(feature = "ssr")]
mod localized_render_tests {
    use leptos::{prelude::*, tachys::view::RenderHtml as _};
    use leptos_router::{components::Router, location::RequestUrl};
    use navbar::{
        Inputs, Locale, MessageCatalog, NavbarConfig, NavbarState, Translations,
        render, routing::localized_href,
    };

    fn render_with(pathname: &str, locale: Locale, config: NavbarConfig) -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(RequestUrl::new(&localized_href(locale, pathname)));
            let catalog = MessageCatalog::embedded(locale).unwrap();
            let inputs = Inputs {
                pathname: Signal::stored(pathname.to_owned()),
                locale: Signal::stored(locale),
                translations: Signal::stored(Translations::new(catalog)),
            };
            let state = NavbarState::new(&config);
            view! { <Router>{render(inputs, state, config, ())}</Router> }.to_html()
        })
    }

    fn render_with_catalog(pathname: &str, locale: Locale) -> String {
        render_with(pathname, locale, NavbarConfig::default())
    }

    #[test]
    fn test_english_labels() {
        let html = render_with_catalog("/about", Locale::En);

        assert!(html.contains("Live Network"));
        assert!(html.contains("About Us"));
        assert!(html.contains("Learn about our mission"));
        assert!(html.contains(r#"aria-label="Toggle menu""#));
        assert!(html.contains(r#"href="/en/how-to-use""#));
        assert!(html.contains(r#"aria-current="page""#));
    }

    #[test]
    fn test_spanish_labels() {
        let html = render_with_catalog("/contact", Locale::Es);

        assert!(html.contains("Red en vivo"));
        assert!(html.contains("Sobre nosotros"));
        assert!(html.contains("Escribe al equipo"));
        assert!(html.contains(r#"href="/es/contact""#));
        assert!(!html.contains("About Us"));
    }

    #[test]
    fn test_custom_sidebar_offset() {
        let config = NavbarConfig {
            sidebar_offset: "0px".to_owned(),
            ..NavbarConfig::default()
        };
        let html = render_with("/", Locale::En, config);

        assert!(html.contains("padding-left: 0px"));
    }
}
