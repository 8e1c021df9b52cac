use std::f32::consts::FRAC_PI_2;
use std::time::Instant;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use crate::coordinator::Coordinator;
use crate::view::AlertView;

/// Icon frames cycled while the badge is still rotating in.
const SPIN_FRAMES: [&str; 4] = ["◴", "◷", "◶", "◵"];

/// Draw the currently attached alert, if any, above the host UI.
///
/// Call this last in the frame closure so the overlay lands on top. The
/// alert is drawn directly into the resolved surface; there is no dimming
/// layer behind it. Layout is recomputed here on every pass, so terminal
/// resizes and orientation changes take effect immediately.
pub fn render_alerts(f: &mut Frame, coordinator: &mut Coordinator) {
    let root = f.size();
    let nav_chrome_rows = coordinator.config().behavior.nav_chrome_rows;
    let anim = coordinator.config().animation;
    let foreground = coordinator.config().theme.foreground();

    // A request-scoped surface wins over the coordinator default.
    let request_surface = coordinator.attached_view().and_then(AlertView::surface);
    let surface = match request_surface {
        Some(surface) => surface,
        None => coordinator.resolve_surface(root),
    };

    let Some(view) = coordinator.attached_view_mut() else {
        return;
    };

    view.layout(&surface, nav_chrome_rows);
    let transform = view.transform(Instant::now(), &anim);
    if transform.alpha <= 0.01 || transform.scale <= 0.01 {
        view.set_footprint(None);
        return;
    }

    let badge = view.footprint_for(&surface, &transform);
    view.set_footprint(Some(badge));
    if badge.width == 0 || badge.height == 0 {
        return;
    }

    let bg = fade(view.color(), transform.alpha);
    let fg = fade(foreground, transform.alpha);

    draw_circle(f, badge, bg);

    // Icon one row above center (the upward offset of the original design);
    // while the badge is still rotating, a spinner frame stands in.
    if badge.height >= 2 {
        let icon = if transform.rotation.abs() > 0.05 {
            SPIN_FRAMES[(transform.rotation / FRAC_PI_2) as usize % SPIN_FRAMES.len()]
        } else {
            view.icon()
        };
        let icon_row = Rect::new(
            badge.x,
            (badge.y + badge.height / 2).saturating_sub(1),
            badge.width,
            1,
        );
        let icon_widget = Paragraph::new(icon)
            .alignment(Alignment::Center)
            .style(Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD));
        f.render_widget(icon_widget, icon_row);
    }

    // Title band below the icon, spanning 70% of the badge width.
    if badge.height >= 4 {
        let band_width = AlertView::title_width(badge);
        let title_row = Rect::new(
            badge.x + (badge.width - band_width) / 2,
            badge.y + badge.height / 2,
            band_width,
            1,
        );
        let title = truncate(view.title(), band_width as usize);
        let title_widget = Paragraph::new(title)
            .alignment(Alignment::Center)
            .style(Style::default().fg(fg).bg(bg));
        f.render_widget(title_widget, title_row);
    }
}

/// Paint the circular badge as per-row spans of an ellipse inscribed in
/// `rect`. Cells outside the spans stay untouched, so the host content shows
/// through at the corners.
fn draw_circle(f: &mut Frame, rect: Rect, bg: Color) {
    let half_w = rect.width as f32 / 2.0;
    let half_h = rect.height as f32 / 2.0;
    let cx = rect.x as f32 + half_w;

    for row in 0..rect.height {
        // Sample the row at its vertical center.
        let dy = (row as f32 + 0.5 - half_h) / half_h;
        let dx = half_w * (1.0 - dy * dy).max(0.0).sqrt();
        let span_w = (dx * 2.0).round() as u16;
        if span_w == 0 {
            continue;
        }
        let x = (cx - dx).round() as u16;
        let span = Rect::new(x, rect.y + row, span_w, 1).intersection(rect);
        if span.width == 0 {
            continue;
        }
        f.render_widget(Clear, span);
        f.render_widget(Block::default().style(Style::default().bg(bg)), span);
    }
}

/// Scale an RGB color toward black; the terminal has no real alpha channel.
fn fade(color: Color, alpha: f32) -> Color {
    let a = alpha.clamp(0.0, 1.0);
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (r as f32 * a) as u8,
            (g as f32 * a) as u8,
            (b as f32 * a) as u8,
        ),
        other => other,
    }
}

/// Truncate to `max` display cells, appending an ellipsis when cut.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(1);
    let mut out: String = text.chars().take(keep).collect();
    out.push('…');
    out
}
