//! Client-side state for the user view.
//!
//! DESIGN
//! ======
//! `users` holds the rendered display value; `user_view` owns the one-shot
//! mount effect and the liveness flag that teardown clears.

pub mod user_view;
pub mod users;
