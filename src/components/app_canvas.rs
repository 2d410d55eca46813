//! Placeholder content area that hosts the user view.

use leptos::prelude::*;

use crate::components::user_view::UserView;

/// Static heading and blurb, then exactly one `UserView`.
#[component]
pub fn AppCanvas() -> impl IntoView {
    view! {
        <div class="AppCanvas">
            <h1>"App Canvas"</h1>
            <p>"App goes here..."</p>
            <UserView/>
        </div>
    }
}
