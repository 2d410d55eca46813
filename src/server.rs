//! Router assembly for the SSR host.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the Leptos SSR routes, the `/pkg` WASM/CSS bundle, and a health
//! probe under a single Axum router.

#[cfg(test)]
#[path = "server_test.rs"]
mod server_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::app::{App, shell};

/// Leptos SSR app + static assets + `/healthz`.
pub fn app(options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    let pkg_dir = pkg_dir(&options.site_root, &options.site_pkg_dir);

    Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&options, routes, {
            let opts = options.clone();
            move || shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(options)
}

/// Directory the `/pkg` route serves from.
fn pkg_dir(site_root: &str, site_pkg_dir: &str) -> PathBuf {
    PathBuf::from(site_root).join(site_pkg_dir)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
