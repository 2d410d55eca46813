//! UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components compose by strict containment: `PageFrame` renders
//! `AppCanvas`, which renders `UserView`. No child reaches back into a parent.

pub mod app_canvas;
pub mod page_frame;
pub mod user_view;
