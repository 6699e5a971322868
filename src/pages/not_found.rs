use super::{Site, layout::document};
use maud::{Markup, html};

pub fn render(site: &Site) -> Markup {
    let content = html! {
        div.container.centered {
            h1 { "404" }
            p.lead { "Oops! Page not found" }
            a.button href="/" { "Return to Home" }
        }
    };
    document(site, Some("Page not found"), None, content)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::get;

    #[test]
    fn test_not_found_view() {
        let page = get("/definitely/not/here");
        assert_eq!(page.status, 404);
        let html = page.into_string();
        assert!(html.contains("<h1>404</h1>"));
        assert!(html.contains(r#"href="/">Return to Home</a>"#));
    }
}
