//! UI rendering for the alert overlay.
//!
//! One entry point: [`render_alerts`] draws the currently attached alert on
//! top of whatever the host rendered earlier in the frame.

mod render;

pub use render::render_alerts;
