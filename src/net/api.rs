//! REST call for the user list.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR) and native tests: returns `FetchError::Unavailable`
//! since the endpoint is only reached from the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::error::FetchError;

/// Fixed user-listing endpoint. No headers, query, or body are sent.
pub const USER_LIST_ENDPOINT: &str = "http://localhost:5000/user/";

/// `GET` [`USER_LIST_ENDPOINT`] and parse the body as untyped JSON.
///
/// # Errors
///
/// Returns `Network` if the request fails, `Status` on a non-2xx response,
/// `Decode` if the body is not JSON, and `Unavailable` outside the browser.
pub async fn fetch_user_list() -> Result<Value, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(USER_LIST_ENDPOINT)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }
        resp.json::<Value>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(FetchError::Unavailable)
    }
}
