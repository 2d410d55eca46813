//! User list view: fetches on first mount, logs the payload, shows the placeholder.

#[cfg(test)]
#[path = "user_view_test.rs"]
mod user_view_test;

use std::future::Future;

use leptos::prelude::*;
use serde_json::Value;

use crate::net::error::FetchError;
use crate::state::user_view::{MountFetch, MountLifecycle, TeardownHandle, mount_user_fetch};
use crate::state::users::DisplayState;

/// Per-instance state of a `UserView`: display signal plus mount lifecycle.
pub struct UserViewState {
    display: RwSignal<DisplayState>,
    lifecycle: MountLifecycle,
}

impl Default for UserViewState {
    fn default() -> Self {
        Self { display: RwSignal::new(DisplayState::default()), lifecycle: MountLifecycle::default() }
    }
}

impl UserViewState {
    /// Read side of the display state. Nothing in this view writes it.
    pub fn display(&self) -> ReadSignal<DisplayState> {
        self.display.read_only()
    }

    pub fn teardown_handle(&self) -> TeardownHandle {
        self.lifecycle.teardown_handle()
    }

    /// Mount step run by the view's effect. Spawns `fetch` on the first call only.
    pub fn mount<S, F, Fut>(&mut self, spawn: S, fetch: F) -> bool
    where
        S: FnOnce(MountFetch),
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<Value, FetchError>> + 'static,
    {
        mount_user_fetch(&mut self.lifecycle, spawn, fetch)
    }
}

/// Heading plus the current `DisplayState::users` value.
///
/// The fetch is spawned from the effect so rendering never waits on it. The
/// payload goes to the log and the display keeps its placeholder.
#[component]
pub fn UserView() -> impl IntoView {
    let mut state = UserViewState::default();
    let teardown = state.teardown_handle();
    on_cleanup(move || teardown.teardown());

    let display = state.display();

    // Effects only run in the browser, after the first render.
    Effect::new(move || {
        state.mount(|fut| leptos::task::spawn_local(fut), crate::net::api::fetch_user_list);
    });

    user_view_markup(display)
}

fn user_view_markup(display: ReadSignal<DisplayState>) -> impl IntoView {
    view! {
        <div class="UserView">
            <h1>"Users"</h1>
            {move || display.get().users}
        </div>
    }
}
