//! Queue ordering, dedup, and dismissal sequencing for the coordinator.
//!
//! All transitions take explicit `Instant`s, so these tests drive the whole
//! lifecycle without sleeping: `t0` is the presentation instant and every
//! tick happens at a computed offset from it.

use std::time::{Duration, Instant};

use ringtoast::view::{AlertView, Phase};
use ringtoast::{AlertPosition, AlertRequest, Category, Config, Coordinator, Orientation, Surface};

// Offsets derived from the default animation config: entrance 1.2s, two exit
// phases of 0.3s, default duration 2.5s.
const ENTERED: Duration = Duration::from_millis(1300);
const DEADLINE: Duration = Duration::from_millis(2500);
const GONE: Duration = Duration::from_millis(3200);

fn coordinator() -> Coordinator {
    Coordinator::new(Config::default())
}

fn request(title: &str) -> AlertRequest {
    AlertRequest::new(title, Category::Message)
}

fn attached_title(c: &Coordinator) -> Option<&str> {
    c.attached_view().map(AlertView::title)
}

#[test]
fn alerts_present_in_fifo_order() {
    let mut c = coordinator();
    let t0 = Instant::now();

    c.enqueue(request("A"), t0);
    c.enqueue(request("B"), t0);
    c.enqueue(request("C"), t0);
    assert_eq!(attached_title(&c), Some("A"));

    // A tick at the deadline starts the exit; a tick 0.7s later observes
    // both exit phases complete and presents the successor.
    c.tick(t0 + DEADLINE);
    assert_eq!(attached_title(&c), Some("A"));
    c.tick(t0 + GONE);
    assert_eq!(attached_title(&c), Some("B"));

    let b0 = t0 + GONE; // B presented here, its own deadline is b0 + 2.5s
    c.tick(b0 + DEADLINE);
    c.tick(b0 + GONE);
    assert_eq!(attached_title(&c), Some("C"));

    let c0 = b0 + GONE;
    c.tick(c0 + DEADLINE);
    c.tick(c0 + GONE);
    assert_eq!(attached_title(&c), None);
    assert!(!c.has_alerts());
}

#[test]
fn duplicate_titles_do_not_grow_the_queue() {
    let mut c = coordinator();
    let t0 = Instant::now();

    c.enqueue(request("A"), t0);
    let len = c.queue_len();
    c.enqueue(request("A"), t0);
    assert_eq!(c.queue_len(), len);

    // Duplicates of the currently displayed head are dropped too.
    c.tick(t0 + ENTERED);
    assert!(c.attached_view().is_some_and(AlertView::is_fully_displayed));
    c.enqueue(request("A"), t0 + ENTERED);
    assert_eq!(c.queue_len(), len);
}

#[test]
fn at_most_one_view_is_attached_at_any_instant() {
    let mut c = coordinator();
    let t0 = Instant::now();

    c.enqueue(request("A"), t0);
    c.enqueue(request("B"), t0);
    c.enqueue(request("C"), t0);

    // Sample the whole interleaving: the single attached slot must hand
    // over strictly in FIFO order, with idle gaps only between exits.
    let mut seen: Vec<String> = Vec::new();
    for step in 0..40 {
        c.tick(t0 + Duration::from_millis(step * 250));
        if let Some(view) = c.attached_view() {
            assert!(c.is_active());
            let title = view.title().to_string();
            if seen.last() != Some(&title) {
                seen.push(title);
            }
        } else {
            assert!(!c.is_active());
        }
    }
    assert_eq!(seen, ["A", "B", "C"]);
    assert!(!c.has_alerts());
}

#[test]
fn double_dismiss_pops_exactly_once() {
    let mut c = coordinator();
    let t0 = Instant::now();

    c.enqueue(request("A"), t0);
    c.enqueue(request("B"), t0);
    c.tick(t0 + ENTERED);

    // Tap, then a second stale trigger shortly after.
    c.dismiss_active(t0 + ENTERED);
    c.dismiss_active(t0 + ENTERED + Duration::from_millis(100));

    let view = c.attached_view().expect("still exiting");
    assert_eq!(
        view.phase(),
        Phase::ExitingPhaseA {
            started: t0 + ENTERED
        }
    );

    // Only A is popped; B presents next.
    c.tick(t0 + ENTERED + Duration::from_millis(700));
    assert_eq!(attached_title(&c), Some("B"));
    assert_eq!(c.queue_len(), 1);
}

#[test]
fn timer_fire_after_tap_is_a_no_op() {
    let mut c = coordinator();
    let t0 = Instant::now();

    c.enqueue(request("A"), t0);
    c.tick(t0 + ENTERED);
    c.dismiss_active(t0 + ENTERED);

    // The original deadline passes while the exit is already done; the
    // cancelled timer must not re-trigger anything.
    c.tick(t0 + ENTERED + Duration::from_millis(700));
    assert!(!c.is_active());
    c.tick(t0 + DEADLINE + Duration::from_millis(100));
    assert!(!c.is_active());
    assert!(!c.has_alerts());
}

#[test]
fn auto_dismiss_lifecycle_returns_to_idle() {
    let mut c = coordinator();
    let t0 = Instant::now();

    c.enqueue(
        AlertRequest::new("Success", Category::Success).with_duration(DEADLINE),
        t0,
    );
    assert!(c.is_active());

    c.tick(t0 + ENTERED);
    assert!(c.attached_view().is_some_and(AlertView::is_fully_displayed));

    c.tick(t0 + DEADLINE + Duration::from_millis(10));
    let view = c.attached_view().expect("exit animation running");
    assert!(matches!(view.phase(), Phase::ExitingPhaseA { .. }));
    assert!(!view.is_fully_displayed());

    c.tick(t0 + GONE);
    assert!(!c.is_active());
    assert_eq!(c.queue_len(), 0);
}

#[test]
fn next_alert_presents_in_the_same_tick_as_removal() {
    let mut c = coordinator();
    let t0 = Instant::now();

    c.enqueue(request("A"), t0);
    c.enqueue(request("B"), t0);
    assert_eq!(c.queue_len(), 2);
    assert_eq!(attached_title(&c), Some("A"));

    // A's exit starts at the deadline tick; the next tick observes the exit
    // complete, pops A, and presents B back to back with no idle gap.
    c.tick(t0 + DEADLINE);
    assert_eq!(attached_title(&c), Some("A"));
    c.tick(t0 + GONE);
    assert!(c.is_active());
    assert_eq!(attached_title(&c), Some("B"));
    assert!(matches!(
        c.attached_view().unwrap().phase(),
        Phase::Entering { .. }
    ));

    let b0 = t0 + GONE;
    c.tick(b0 + DEADLINE);
    c.tick(b0 + GONE);
    assert!(!c.has_alerts());
}

#[test]
fn tap_before_full_display_still_dismisses() {
    let mut c = coordinator();
    let t0 = Instant::now();

    c.enqueue(request("A"), t0);
    // Mid-entrance dismissal is allowed; the exit sequence takes over.
    c.dismiss_active(t0 + Duration::from_millis(400));
    assert!(matches!(
        c.attached_view().unwrap().phase(),
        Phase::ExitingPhaseA { .. }
    ));

    c.tick(t0 + Duration::from_millis(1100));
    assert!(!c.is_active());
}

#[test]
fn landscape_surface_centers_top_anchored_alert() {
    let mut c = coordinator();
    let t0 = Instant::now();
    c.set_default_surface(
        Surface::new(ratatui::layout::Rect::new(0, 0, 80, 40))
            .with_orientation(Orientation::Landscape),
    );

    c.enqueue(request("Top").at_position(AlertPosition::Top), t0);

    let surface = c.resolve_surface(ratatui::layout::Rect::new(0, 0, 80, 40));
    let nav_rows = c.config().behavior.nav_chrome_rows;
    let view = c.attached_view_mut().expect("presented");
    view.layout(&surface, nav_rows);
    assert_eq!(view.anchor(), Some((40, 20)));
}

#[test]
fn zero_duration_alert_waits_for_manual_dismissal() {
    let mut c = coordinator();
    let t0 = Instant::now();

    c.enqueue(request("Sticky").with_duration(Duration::ZERO), t0);

    // Far beyond any default deadline: still displayed.
    c.tick(t0 + Duration::from_secs(60));
    assert!(c.attached_view().is_some_and(AlertView::is_fully_displayed));

    c.dismiss_active(t0 + Duration::from_secs(61));
    c.tick(t0 + Duration::from_secs(62));
    assert!(!c.is_active());
}

#[test]
fn convenience_constructors_enqueue_their_category() {
    let mut c = coordinator();
    c.success("done");
    assert_eq!(attached_title(&c), Some("done"));

    c.error("boom");
    c.warning("careful");
    c.message("hello");
    assert_eq!(c.queue_len(), 4);
}
