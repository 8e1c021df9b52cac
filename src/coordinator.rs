//! The alert queue and presentation controller.

use std::collections::VecDeque;
use std::time::Instant;

use ratatui::layout::Rect;
use tracing::{debug, info};

use crate::alert::{AlertRequest, Category};
use crate::config::Config;
use crate::surface::Surface;
use crate::timer::DismissTimer;
use crate::view::{AlertView, PhaseEvent};

/// Owns the pending-alert queue and drives presentation and dismissal.
///
/// One coordinator serves the whole process: create it once next to the
/// application state and keep it for the lifetime of the UI loop. Every
/// method runs on the UI thread; the auto-dismiss timer is a deadline
/// checked from [`tick`](Coordinator::tick), so nothing here needs locking.
///
/// Exactly one alert is presented at a time, in FIFO order. The head of the
/// queue stays queued while it is on screen and is popped only once its exit
/// animation completes, at which point the next alert (if any) presents
/// immediately.
#[derive(Debug)]
pub struct Coordinator {
    config: Config,
    queue: VecDeque<AlertView>,
    /// An alert is mid-presentation or on screen.
    active: bool,
    /// At most one live auto-dismiss timer, discarded each presentation.
    timer: Option<DismissTimer>,
    default_surface: Option<Surface>,
    /// Memoized fallback, rebuilt only after `reset_surface_cache`.
    fallback_surface: Option<Surface>,
}

impl Coordinator {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            queue: VecDeque::new(),
            active: false,
            timer: None,
            default_surface: None,
            fallback_surface: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Minimal form: default duration and position, user dismissable, shown
    /// on the default surface.
    pub fn show_alert(&mut self, title: impl Into<String>, category: Category) {
        let request = AlertRequest::new(title, category)
            .with_duration(self.config.behavior.default_duration());
        self.show(request);
    }

    /// Fully parameterized form.
    pub fn show(&mut self, request: AlertRequest) {
        self.enqueue(request, Instant::now());
    }

    pub fn message(&mut self, title: impl Into<String>) {
        self.show_alert(title, Category::Message);
    }

    pub fn warning(&mut self, title: impl Into<String>) {
        self.show_alert(title, Category::Warning);
    }

    pub fn error(&mut self, title: impl Into<String>) {
        self.show_alert(title, Category::Error);
    }

    pub fn success(&mut self, title: impl Into<String>) {
        self.show_alert(title, Category::Success);
    }

    /// Accept a request into the queue and present it if nothing is on
    /// screen. Never fails: an empty title or a title that matches a
    /// queued-or-displayed alert drops the request silently.
    pub fn enqueue(&mut self, request: AlertRequest, now: Instant) {
        if request.title().is_empty() {
            debug!("dropping alert with an empty title");
            return;
        }
        if self.queue.iter().any(|v| v.title() == request.title()) {
            // Linear scan: the queue holds human-visible alerts and stays
            // small, so no index is kept.
            debug!(title = request.title(), "dropping duplicate alert");
            return;
        }

        let view = AlertView::from_request(request, &self.config.theme);
        self.queue.push_back(view);

        if !self.active {
            self.present_head(now);
        }
    }

    /// Present the head of the queue: start its entrance animation and arm
    /// the auto-dismiss timer. A zero duration arms no timer at all, so the
    /// alert waits for a tap or an external dismissal.
    fn present_head(&mut self, now: Instant) {
        let Some(head) = self.queue.front_mut() else {
            return;
        };
        self.active = true;
        head.begin_entrance(now);

        // The previous cycle's token is discarded, never reused.
        self.timer = None;
        let duration = head.duration();
        if !duration.is_zero() {
            self.timer = Some(DismissTimer::arm(now, duration));
        }
    }

    /// Dismiss the alert currently on screen, whatever triggered it: timer
    /// fire, user tap, or the host. Idempotent, and a no-op when nothing is
    /// active.
    pub fn dismiss_active(&mut self, now: Instant) {
        if let Some(timer) = self.timer.as_mut() {
            timer.cancel();
        }
        if !self.active {
            return;
        }
        if let Some(head) = self.queue.front_mut() {
            // begin_exit refuses views that are already exiting, which makes
            // a tap racing a stale timer fire (or a double tap) harmless.
            head.begin_exit(now);
        }
    }

    /// Route a tap at terminal cell (x, y). Dismisses the active alert only
    /// if it is user-dismissible and the tap lands on its drawn badge.
    pub fn handle_tap(&mut self, x: u16, y: u16, now: Instant) {
        let Some(head) = self.attached_view() else {
            return;
        };
        if head.is_dismissible() && head.hit(x, y) {
            self.dismiss_active(now);
        }
    }

    /// Drive the timer and animation phase machine. Call once per frame
    /// before rendering.
    ///
    /// When an exit completes the head is popped and, if more alerts are
    /// queued, the next one presents within the same tick, back to back.
    pub fn tick(&mut self, now: Instant) {
        if !self.active {
            return;
        }

        if self.timer.map_or(false, |t| t.is_fired(now)) {
            self.dismiss_active(now);
        }

        loop {
            let Some(head) = self.queue.front_mut() else {
                break;
            };
            match head.advance(now, &self.config.animation) {
                PhaseEvent::Removed => {
                    self.queue.pop_front();
                    self.active = false;
                    self.timer = None;
                    if self.queue.is_empty() {
                        break;
                    }
                    self.present_head(now);
                }
                PhaseEvent::None => break,
                PhaseEvent::FullyDisplayed | PhaseEvent::ExitPhaseB => {}
            }
        }
    }

    /// The view currently attached to the display surface, if any. At most
    /// one view is ever attached.
    pub fn attached_view(&self) -> Option<&AlertView> {
        if self.active {
            self.queue.front()
        } else {
            None
        }
    }

    /// Mutable access to the attached view, used by the renderer to record
    /// layout results.
    pub fn attached_view_mut(&mut self) -> Option<&mut AlertView> {
        if self.active {
            self.queue.front_mut()
        } else {
            None
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn has_alerts(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Register the host's preferred default surface. Clears the memoized
    /// fallback so the next resolution sees the change.
    pub fn set_default_surface(&mut self, surface: Surface) {
        self.default_surface = Some(surface);
        self.fallback_surface = None;
    }

    /// Drop the memoized fallback surface, e.g. after the host rearranged
    /// its layout.
    pub fn reset_surface_cache(&mut self) {
        self.fallback_surface = None;
    }

    /// Resolve the surface alerts attach to: the registered default if the
    /// host set one, otherwise a memoized fallback covering `root_area`.
    pub fn resolve_surface(&mut self, root_area: Rect) -> Surface {
        if let Some(surface) = self.default_surface {
            return surface;
        }
        *self.fallback_surface.get_or_insert_with(|| {
            info!("no default surface registered; falling back to the terminal root area (register one with set_default_surface)");
            Surface::root(root_area)
        })
    }
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Orientation;

    fn request(title: &str) -> AlertRequest {
        AlertRequest::new(title, Category::Message)
    }

    #[test]
    fn enqueue_presents_when_idle() {
        let mut c = Coordinator::default();
        let t0 = Instant::now();

        c.enqueue(request("A"), t0);
        assert!(c.is_active());
        assert_eq!(c.attached_view().map(AlertView::title), Some("A"));
    }

    #[test]
    fn empty_title_is_dropped() {
        let mut c = Coordinator::default();
        c.enqueue(request(""), Instant::now());
        assert_eq!(c.queue_len(), 0);
        assert!(!c.is_active());
    }

    #[test]
    fn duplicate_title_is_dropped() {
        let mut c = Coordinator::default();
        let t0 = Instant::now();

        c.enqueue(request("A"), t0);
        c.enqueue(request("A"), t0);
        assert_eq!(c.queue_len(), 1);

        // Also deduplicated against waiting entries, not just the head.
        c.enqueue(request("B"), t0);
        c.enqueue(request("B"), t0);
        assert_eq!(c.queue_len(), 2);
    }

    #[test]
    fn second_alert_waits_its_turn() {
        let mut c = Coordinator::default();
        let t0 = Instant::now();

        c.enqueue(request("A"), t0);
        c.enqueue(request("B"), t0);
        assert_eq!(c.queue_len(), 2);
        assert_eq!(c.attached_view().map(AlertView::title), Some("A"));
    }

    #[test]
    fn dismiss_with_nothing_active_is_a_no_op() {
        let mut c = Coordinator::default();
        c.dismiss_active(Instant::now());
        assert!(!c.is_active());
    }

    #[test]
    fn tap_before_any_render_is_a_no_op() {
        let mut c = Coordinator::default();
        let t0 = Instant::now();
        c.enqueue(request("A"), t0);

        // No footprint has been drawn yet, so nothing to hit.
        c.handle_tap(10, 10, t0);
        assert!(c.is_active());
        assert_eq!(c.queue_len(), 1);
    }

    #[test]
    fn fallback_surface_is_memoized_until_reset() {
        let mut c = Coordinator::default();
        let first = c.resolve_surface(Rect::new(0, 0, 80, 24));
        // A later, different root area does not re-resolve.
        let second = c.resolve_surface(Rect::new(0, 0, 100, 30));
        assert_eq!(first, second);

        c.reset_surface_cache();
        let third = c.resolve_surface(Rect::new(0, 0, 100, 30));
        assert_eq!(third.area(), Rect::new(0, 0, 100, 30));
    }

    #[test]
    fn registered_default_surface_wins() {
        let mut c = Coordinator::default();
        let registered = Surface::new(Rect::new(5, 5, 40, 20))
            .with_orientation(Orientation::Landscape);
        c.set_default_surface(registered);

        assert_eq!(c.resolve_surface(Rect::new(0, 0, 80, 24)), registered);
    }
}
