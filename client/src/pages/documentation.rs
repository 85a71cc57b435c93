//! Documentation page rendered from an embedded markdown document.

#[cfg(test)]
#[path = "documentation_test.rs"]
mod documentation_test;

use leptos::prelude::*;
use pulldown_cmark::{Options, Parser, html};

static DOCUMENTATION: &str = include_str!("documentation.md");

#[component]
pub fn DocumentationPage() -> impl IntoView {
    let body = render_markdown(DOCUMENTATION);

    view! {
        <div class="doc-page">
            <h1 class="doc-page__title">"Documentation"</h1>
            <div class="card doc-page__body" inner_html=body></div>
        </div>
    }
}

/// Render trusted, embedded markdown to HTML.
fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
