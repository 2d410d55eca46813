//! Mount lifecycle for `UserView`: one fetch per instance, dropped after teardown.
//!
//! SYSTEM CONTEXT
//! ==============
//! The component claims the mount effect once, hands the resulting
//! `MountTicket` to the spawned fetch, and registers a `TeardownHandle` with
//! `on_cleanup`. A fetch that resolves after teardown sees a dead ticket; its
//! payload is never logged, only a debug note that it arrived late.
//!
//! ERROR HANDLING
//! ==============
//! Every failure lands in `FetchOutcome::Ignored` and is reported at debug
//! level only. Nothing is surfaced to the render tree.

#[cfg(test)]
#[path = "user_view_test.rs"]
mod user_view_test;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde_json::Value;

use crate::net::error::FetchError;

/// One-shot mount guard for a single `UserView` instance.
#[derive(Debug)]
pub struct MountLifecycle {
    claimed: bool,
    live: Arc<AtomicBool>,
}

impl Default for MountLifecycle {
    fn default() -> Self {
        Self { claimed: false, live: Arc::new(AtomicBool::new(true)) }
    }
}

impl MountLifecycle {
    /// Claim the mount effect. Only the first call returns a ticket.
    pub fn claim(&mut self) -> Option<MountTicket> {
        if self.claimed {
            return None;
        }
        self.claimed = true;
        Some(MountTicket { live: Arc::clone(&self.live) })
    }

    /// Handle for the component's cleanup hook.
    pub fn teardown_handle(&self) -> TeardownHandle {
        TeardownHandle { live: Arc::clone(&self.live) }
    }
}

/// Proof that the mount effect fired, carried by the in-flight fetch.
#[derive(Debug)]
pub struct MountTicket {
    live: Arc<AtomicBool>,
}

impl MountTicket {
    /// `false` once the owning component has been torn down.
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }
}

/// Clears the liveness flag when the component unmounts.
#[derive(Clone, Debug)]
pub struct TeardownHandle {
    live: Arc<AtomicBool>,
}

impl TeardownHandle {
    pub fn teardown(&self) {
        self.live.store(false, Ordering::Release);
    }
}

/// What became of the mount fetch.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome {
    /// Parsed payload, written to the diagnostic log.
    Logged(Value),
    /// Any failure in the fetch chain; swallowed.
    Ignored(FetchError),
    /// Resolved after teardown; nothing reported.
    Stale,
}

/// Await `fetch` on behalf of `ticket` and classify the result.
pub async fn run_mount_fetch<F, Fut>(ticket: MountTicket, fetch: F) -> FetchOutcome
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Value, FetchError>>,
{
    let result = fetch().await;
    if !ticket.is_live() {
        return FetchOutcome::Stale;
    }
    match result {
        Ok(payload) => FetchOutcome::Logged(payload),
        Err(e) => FetchOutcome::Ignored(e),
    }
}

/// Spawned mount fetch: resolves the request and reports the outcome.
pub type MountFetch = Pin<Box<dyn Future<Output = ()>>>;

/// Run the one-shot mount step: claim the effect and hand the fetch to `spawn`.
///
/// Later calls on the same lifecycle neither call `fetch` nor `spawn`.
/// Returns whether a fetch was spawned.
pub fn mount_user_fetch<S, F, Fut>(lifecycle: &mut MountLifecycle, spawn: S, fetch: F) -> bool
where
    S: FnOnce(MountFetch),
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<Value, FetchError>> + 'static,
{
    let Some(ticket) = lifecycle.claim() else {
        return false;
    };
    spawn(Box::pin(async move {
        let outcome = run_mount_fetch(ticket, fetch).await;
        report_outcome(&outcome);
    }));
    true
}

/// Write an outcome to the log. This is the only sink for fetch failures.
pub fn report_outcome(outcome: &FetchOutcome) {
    match outcome {
        FetchOutcome::Logged(payload) => log::info!("{payload}"),
        FetchOutcome::Ignored(e) => log::debug!("user list fetch ignored: {e}"),
        FetchOutcome::Stale => log::debug!("user list fetch resolved after teardown"),
    }
}
