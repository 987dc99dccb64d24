use icondata::Icon;
use leptos::{prelude::*, svg::svg};

/// Renders a lucide icon as an inline, decorative `<svg>`.
pub fn component(icon: Icon, class: &'static str) -> impl IntoView {
    svg()
        .attr("viewBox", icon.view_box)
        .attr("fill", icon.fill.unwrap_or("none"))
        .attr("stroke", icon.stroke.unwrap_or("currentColor"))
        .attr("stroke-width", icon.stroke_width.unwrap_or("2"))
        .attr("stroke-linecap", icon.stroke_linecap)
        .attr("stroke-linejoin", icon.stroke_linejoin)
        .attr("aria-hidden", "true")
        .inner_html(icon.data)
        .class(class)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use icondata::LuMenu;
    use leptos::tachys::view::RenderHtml as _;

    #[test]
    fn test_icon_body_is_rendered_as_markup() {
        let html = component(LuMenu, "w-5 h-5").to_html();

        assert!(html.starts_with("<svg"));
        assert!(html.contains(LuMenu.data));
        assert!(html.contains("<path"));
        assert!(!html.contains("innerHTML"));
        assert!(html.contains(r#"class="w-5 h-5""#));
    }
}
