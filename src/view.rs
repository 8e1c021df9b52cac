//! The presentable alert unit: one request plus its animation lifecycle.

use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::alert::{AlertPosition, AlertRequest};
use crate::config::{AnimationConfig, ThemeConfig};
use crate::spring::{lerp, spring};
use crate::surface::{Orientation, Surface};

/// Footprint width as a fraction of the target surface width.
const FOOTPRINT_RATIO: f32 = 0.4;
/// Title band width as a fraction of the footprint width.
const TITLE_RATIO: f32 = 0.7;

/// Entrance starts shrunk and rotated half a turn.
const ENTRY_SCALE: f32 = 0.1;
const ENTRY_ROTATION: f32 = std::f32::consts::PI;
/// Exit phase A overshoots slightly before phase B shrinks the view away.
const EXIT_OVERSHOOT_SCALE: f32 = 1.1;
const EXIT_END_SCALE: f32 = 0.1;

/// Animation lifecycle of one alert.
///
/// Transitions are driven by [`AlertView::advance`] (animation completion)
/// and [`AlertView::begin_exit`] (timer fire or user tap); there is no other
/// way to move between phases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Accepted into the queue, not yet presented.
    Queued,
    /// Entrance animation running.
    Entering { started: Instant },
    /// Steady state between entrance completion and exit start.
    Displayed,
    /// Exit phase A: overshoot cue that dismissal has begun.
    ExitingPhaseA { started: Instant },
    /// Exit phase B: shrink and fade out.
    ExitingPhaseB { started: Instant },
    /// Detached and eligible for disposal.
    Removed,
}

/// Visual state derived from the current phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f32,
    /// Radians; π at entrance start, settling to 0.
    pub rotation: f32,
    pub alpha: f32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        scale: 1.0,
        rotation: 0.0,
        alpha: 1.0,
    };
}

/// Phase boundary crossed during [`AlertView::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    None,
    FullyDisplayed,
    ExitPhaseB,
    Removed,
}

/// A single presentable alert.
///
/// Wraps one [`AlertRequest`] with the resolved badge color and icon, the
/// animation phase, and the anchor recomputed on every layout pass.
#[derive(Debug, Clone)]
pub struct AlertView {
    request: AlertRequest,
    color: Color,
    icon: String,
    phase: Phase,
    fully_displayed: bool,
    anchor: Option<(u16, u16)>,
    /// Last drawn footprint, used for tap hit-testing.
    footprint: Option<Rect>,
}

impl AlertView {
    /// Build a view from a request, resolving the badge color and icon from
    /// the category (a caller-supplied icon wins over the category default).
    ///
    /// This is the only supported construction path.
    pub fn from_request(request: AlertRequest, theme: &ThemeConfig) -> Self {
        let color = theme.category_color(request.category());
        let icon = request
            .icon()
            .map(str::to_owned)
            .unwrap_or_else(|| request.category().default_icon().to_owned());
        Self {
            request,
            color,
            icon,
            phase: Phase::Queued,
            fully_displayed: false,
            anchor: None,
            footprint: None,
        }
    }

    pub fn title(&self) -> &str {
        self.request.title()
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn duration(&self) -> std::time::Duration {
        self.request.duration()
    }

    pub fn surface(&self) -> Option<Surface> {
        self.request.surface()
    }

    pub fn is_dismissible(&self) -> bool {
        self.request.is_dismissible()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True only during the steady-state window between entrance completion
    /// and exit start.
    pub fn is_fully_displayed(&self) -> bool {
        self.fully_displayed
    }

    pub fn anchor(&self) -> Option<(u16, u16)> {
        self.anchor
    }

    /// Start the entrance animation. Only valid once, from the queued state.
    pub fn begin_entrance(&mut self, now: Instant) {
        if self.phase == Phase::Queued {
            self.phase = Phase::Entering { started: now };
        }
    }

    /// Start the exit sequence. Returns false (and does nothing) if the view
    /// is already exiting or removed, which makes a stale second trigger a
    /// no-op.
    pub fn begin_exit(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Entering { .. } | Phase::Displayed => {
                self.fully_displayed = false;
                self.phase = Phase::ExitingPhaseA { started: now };
                true
            }
            _ => false,
        }
    }

    /// Advance past at most one phase boundary. Exit phase B starts at the
    /// scheduled end of phase A, so a late tick still plays both phases at
    /// their nominal lengths; callers loop until `PhaseEvent::None`.
    pub fn advance(&mut self, now: Instant, anim: &AnimationConfig) -> PhaseEvent {
        match self.phase {
            Phase::Entering { started } if now >= started + anim.enter_duration() => {
                self.phase = Phase::Displayed;
                self.fully_displayed = true;
                PhaseEvent::FullyDisplayed
            }
            Phase::ExitingPhaseA { started } if now >= started + anim.exit_phase_duration() => {
                self.phase = Phase::ExitingPhaseB {
                    started: started + anim.exit_phase_duration(),
                };
                PhaseEvent::ExitPhaseB
            }
            Phase::ExitingPhaseB { started } if now >= started + anim.exit_phase_duration() => {
                self.phase = Phase::Removed;
                PhaseEvent::Removed
            }
            _ => PhaseEvent::None,
        }
    }

    /// Visual transform for the current phase at time `now`.
    pub fn transform(&self, now: Instant, anim: &AnimationConfig) -> Transform {
        let progress = |started: Instant, total: std::time::Duration| {
            let elapsed = now.saturating_duration_since(started).as_secs_f32();
            spring(
                elapsed / total.as_secs_f32().max(f32::EPSILON),
                anim.spring_damping,
                anim.spring_velocity,
            )
        };

        match self.phase {
            Phase::Queued => Transform {
                scale: ENTRY_SCALE,
                rotation: ENTRY_ROTATION,
                alpha: 1.0,
            },
            Phase::Entering { started } => {
                let p = progress(started, anim.enter_duration());
                Transform {
                    scale: lerp(ENTRY_SCALE, 1.0, p),
                    rotation: lerp(ENTRY_ROTATION, 0.0, p),
                    alpha: 1.0,
                }
            }
            Phase::Displayed => Transform::IDENTITY,
            Phase::ExitingPhaseA { started } => {
                let p = progress(started, anim.exit_phase_duration());
                Transform {
                    scale: lerp(1.0, EXIT_OVERSHOOT_SCALE, p),
                    rotation: 0.0,
                    alpha: 1.0,
                }
            }
            Phase::ExitingPhaseB { started } => {
                let p = progress(started, anim.exit_phase_duration());
                Transform {
                    scale: lerp(EXIT_OVERSHOOT_SCALE, EXIT_END_SCALE, p),
                    rotation: 0.0,
                    alpha: (1.0 - p).clamp(0.0, 1.0),
                }
            }
            Phase::Removed => Transform {
                scale: EXIT_END_SCALE,
                rotation: 0.0,
                alpha: 0.0,
            },
        }
    }

    /// Resolve the on-screen anchor point. Called on every render pass so
    /// resizes and orientation changes take effect immediately.
    ///
    /// A landscape surface centers the alert regardless of the requested
    /// position; otherwise Top sits a quarter height down (plus the chrome
    /// offset when the surface is hosted under a title bar), Bottom at three
    /// quarters.
    pub fn layout(&mut self, surface: &Surface, nav_chrome_rows: u16) {
        let area = surface.area();
        let cx = area.x + area.width / 2;
        let cy = if surface.orientation() == Orientation::Landscape {
            area.y + area.height / 2
        } else {
            match self.request.position() {
                AlertPosition::Top => {
                    let mut y = area.y + area.height / 4;
                    if surface.nav_chrome() {
                        y = y.saturating_add(nav_chrome_rows);
                    }
                    y
                }
                AlertPosition::Center => area.y + area.height / 2,
                AlertPosition::Bottom => area.y + area.height * 3 / 4,
            }
        };
        self.anchor = Some((cx, cy));
    }

    /// Footprint rect for the current transform: a square badge sized at 40%
    /// of the surface width, halved vertically because terminal cells are
    /// roughly twice as tall as they are wide, clipped to the surface.
    pub fn footprint_for(&self, surface: &Surface, transform: &Transform) -> Rect {
        let area = surface.area();
        let base = area.width as f32 * FOOTPRINT_RATIO;
        let w = (base * transform.scale.max(0.0)).round() as u16;
        let h = (w / 2).max(u16::from(w > 0));
        let (cx, cy) = self
            .anchor
            .unwrap_or((area.x + area.width / 2, area.y + area.height / 2));
        let x = cx.saturating_sub(w / 2);
        let y = cy.saturating_sub(h / 2);
        Rect::new(x, y, w, h).intersection(area)
    }

    /// Width of the title band inside a given footprint.
    pub fn title_width(footprint: Rect) -> u16 {
        ((footprint.width as f32 * TITLE_RATIO).round() as u16).min(footprint.width)
    }

    pub(crate) fn set_footprint(&mut self, footprint: Option<Rect>) {
        self.footprint = footprint;
    }

    /// Whether a tap at terminal cell (x, y) lands on the last drawn badge.
    pub fn hit(&self, x: u16, y: u16) -> bool {
        self.footprint
            .is_some_and(|rect| rect.contains(ratatui::layout::Position { x, y }))
    }
}

/// Alert views carry a fully specified request from the moment they exist;
/// there is no meaningful empty value. Constructing one through a generic
/// default path is a programming error, not a runtime condition.
impl Default for AlertView {
    fn default() -> Self {
        panic!("AlertView cannot be constructed without an AlertRequest; use AlertView::from_request")
    }
}
