//! Server-side render checks for the component tree.
#![cfg(feature = "ssr")]

use frontend::components::app_canvas::AppCanvas;
use frontend::components::page_frame::{FOOTER_TEXT, HEADER_TITLE, PageFrame};
use frontend::components::user_view::UserView;
use frontend::state::users::PLACEHOLDER_USERS;
use leptos::prelude::*;

fn render<F, V>(build: F) -> String
where
    F: FnOnce() -> V,
    V: RenderHtml,
{
    let owner = Owner::new();
    owner.with(|| build().to_html())
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn page_frame_renders_one_canvas_between_header_and_footer() {
    let html = render(|| view! { <PageFrame/> });

    assert_eq!(count(&html, r#"class="AppCanvas""#), 1);
    assert!(html.contains(HEADER_TITLE));
    assert!(html.contains(FOOTER_TEXT));

    let header = html.find(r#"class="AppHeader""#);
    let canvas = html.find(r#"class="AppCanvas""#);
    let footer = html.find(r#"class="AppFooter""#);
    assert!(header < canvas && canvas < footer, "unexpected order in {html}");
}

#[test]
fn canvas_renders_one_user_view() {
    let html = render(|| view! { <AppCanvas/> });

    assert_eq!(count(&html, r#"class="UserView""#), 1);
    assert!(html.contains("App Canvas"));
    assert!(html.contains("App goes here..."));
}

#[test]
fn user_view_renders_placeholder_before_fetch() {
    let html = render(|| view! { <UserView/> });

    let Some(start) = html.find(r#"class="UserView""#) else {
        panic!("missing user view in {html}");
    };
    let body = &html[start..];
    assert!(body.contains("Users"));
    assert!(body.contains(PLACEHOLDER_USERS));
}
