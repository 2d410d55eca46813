//! Static outer frame: header, canvas, footer.

use leptos::prelude::*;

use crate::components::app_canvas::AppCanvas;

/// Title text shown in the header.
pub const HEADER_TITLE: &str = "Workout Tracker";

/// Text shown in the footer.
pub const FOOTER_TEXT: &str = "Track every set.";

/// The ever-present frame around the changing canvas.
#[component]
pub fn PageFrame() -> impl IntoView {
    view! {
        <div class="App">
            <AppHeader/>
            <AppCanvas/>
            <AppFooter/>
        </div>
    }
}

#[component]
fn AppHeader() -> impl IntoView {
    view! {
        <header class="AppHeader">
            <span class="AppHeader__title">{HEADER_TITLE}</span>
        </header>
    }
}

#[component]
fn AppFooter() -> impl IntoView {
    view! {
        <footer class="AppFooter">
            <small>{FOOTER_TEXT}</small>
        </footer>
    }
}
