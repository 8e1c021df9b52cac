//! Display-surface handles: where alerts are laid out and drawn.

use ratatui::layout::Rect;

/// Orientation reported by a display surface.
///
/// Terminal cell grids are almost always wider than tall, so orientation is
/// declared by the host rather than inferred from the cell aspect. A host
/// whose layout rotates (or that embeds the overlay in a wide side panel)
/// declares `Landscape`, which forces alerts to the surface center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// The visual container an alert is attached to.
///
/// Hosts register their preferred surface with
/// [`Coordinator::set_default_surface`](crate::Coordinator::set_default_surface);
/// without one the coordinator falls back to the full terminal area. The
/// alert is drawn directly into this surface, above whatever the host
/// rendered earlier in the same frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surface {
    area: Rect,
    orientation: Orientation,
    nav_chrome: bool,
}

impl Surface {
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            orientation: Orientation::Portrait,
            nav_chrome: false,
        }
    }

    /// Full-frame root surface used when the host registered nothing.
    pub fn root(area: Rect) -> Self {
        Self::new(area)
    }

    /// Declare the surface orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Mark the surface as hosted under navigation chrome (a title or tab
    /// bar). Top-anchored alerts are pushed down to avoid overlapping it.
    #[must_use]
    pub fn with_nav_chrome(mut self) -> Self {
        self.nav_chrome = true;
        self
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn nav_chrome(&self) -> bool {
        self.nav_chrome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_surface_defaults() {
        let surface = Surface::root(Rect::new(0, 0, 80, 24));
        assert_eq!(surface.orientation(), Orientation::Portrait);
        assert!(!surface.nav_chrome());
        assert_eq!(surface.area(), Rect::new(0, 0, 80, 24));
    }

    #[test]
    fn builder_flags_stick() {
        let surface = Surface::new(Rect::new(2, 1, 40, 20))
            .with_orientation(Orientation::Landscape)
            .with_nav_chrome();
        assert_eq!(surface.orientation(), Orientation::Landscape);
        assert!(surface.nav_chrome());
    }
}
