//! Circular wear-style toast alerts for ratatui applications.
//!
//! ringtoast shows transient, color-coded alerts (message, warning, error,
//! success) on top of a host TUI: one at a time, in FIFO order, deduplicated
//! by title, with spring-eased entrance and exit animations and automatic or
//! tap-driven dismissal.
//!
//! ```
//! use ringtoast::{Category, Config, Coordinator};
//!
//! let mut coordinator = Coordinator::new(Config::default());
//! coordinator.success("Saved");
//! coordinator.show_alert("Low battery", Category::Warning);
//!
//! // Each frame of the host's render loop:
//! //   coordinator.tick(std::time::Instant::now());
//! //   terminal.draw(|f| {
//! //       /* host UI */
//! //       ringtoast::ui::render_alerts(f, &mut coordinator);
//! //   })?;
//! ```

pub mod alert;
pub mod config;
pub mod coordinator;
pub mod spring;
pub mod surface;
pub mod timer;
pub mod ui;
pub mod view;

pub use alert::{AlertPosition, AlertRequest, Category};
pub use config::Config;
pub use coordinator::Coordinator;
pub use surface::{Orientation, Surface};
