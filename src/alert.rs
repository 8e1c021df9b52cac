//! Alert request types: what callers ask the coordinator to show.

use std::time::Duration;

use crate::surface::Surface;

/// Default display time for an alert.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(2500);

/// Alert category. Picks the badge color and the default icon glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Message,
    Warning,
    Error,
    Success,
}

impl Category {
    /// Icon glyph shown when the request does not supply its own.
    pub fn default_icon(&self) -> &'static str {
        match self {
            Category::Message => "i",
            Category::Warning => "!",
            Category::Error => "✕",
            Category::Success => "✓",
        }
    }
}

/// Where the alert is anchored on the target surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertPosition {
    /// Quarter height from the top (pushed down under navigation chrome).
    Top,
    /// Geometric center of the surface.
    #[default]
    Center,
    /// Three-quarters height from the top.
    Bottom,
}

/// An immutable alert request.
///
/// Built with [`AlertRequest::new`] plus the `with_*` methods, then handed to
/// [`Coordinator::show`](crate::Coordinator::show). Requests are
/// fire-and-forget: a malformed or duplicate request is dropped silently by
/// the coordinator, never reported as an error.
#[derive(Debug, Clone)]
pub struct AlertRequest {
    title: String,
    icon: Option<String>,
    category: Category,
    duration: Duration,
    surface: Option<Surface>,
    position: AlertPosition,
    dismissible: bool,
}

impl AlertRequest {
    /// New request with the default duration, center position, user
    /// dismissal enabled, and the coordinator's default surface.
    pub fn new(title: impl Into<String>, category: Category) -> Self {
        Self {
            title: title.into(),
            icon: None,
            category,
            duration: DEFAULT_DURATION,
            surface: None,
            position: AlertPosition::default(),
            dismissible: true,
        }
    }

    /// Override the category's default icon glyph.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the display time. A zero duration disables auto-dismissal: the
    /// alert stays until the user taps it or the host dismisses it.
    ///
    /// (Deriving the duration from the title length is a documented option
    /// of the original design but is not implemented.)
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Target a specific surface instead of the coordinator's default.
    #[must_use]
    pub fn on_surface(mut self, surface: Surface) -> Self {
        self.surface = Some(surface);
        self
    }

    /// Anchor the alert at the given position.
    #[must_use]
    pub fn at_position(mut self, position: AlertPosition) -> Self {
        self.position = position;
        self
    }

    /// Whether a tap on the alert dismisses it.
    #[must_use]
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn surface(&self) -> Option<Surface> {
        self.surface
    }

    pub fn position(&self) -> AlertPosition {
        self.position
    }

    pub fn is_dismissible(&self) -> bool {
        self.dismissible
    }
}
