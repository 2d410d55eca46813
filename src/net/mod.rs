//! Networking for the user view.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the single outbound request; `error` classifies its failures.

pub mod api;
pub mod error;
