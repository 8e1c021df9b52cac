//! Demo application state and rendering.

use ratatui::{
    layout::Margin,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Duration;

use ringtoast::{ui, AlertPosition, AlertRequest, Category, Config, Coordinator};

/// Demo state: a coordinator plus a counter so repeated keypresses produce
/// unique titles (identical titles would be deduplicated).
pub struct App {
    pub coordinator: Coordinator,
    fired: u32,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            coordinator: Coordinator::new(config),
            fired: 0,
        }
    }

    /// Fire a sample alert of the given category.
    pub fn fire(&mut self, category: Category, position: AlertPosition) {
        self.fired += 1;
        let title = match category {
            Category::Message => format!("Message #{}", self.fired),
            Category::Warning => format!("Warning #{}", self.fired),
            Category::Error => format!("Error #{}", self.fired),
            Category::Success => format!("Success #{}", self.fired),
        };
        let duration = self.coordinator.config().behavior.default_duration();
        self.coordinator.show(
            AlertRequest::new(title, category)
                .with_duration(duration)
                .at_position(position),
        );
    }

    /// Fire a sticky alert with a fixed title. Pressing the key again while
    /// it is queued or shown demonstrates title deduplication.
    pub fn fire_sticky(&mut self) {
        self.coordinator.show(
            AlertRequest::new("Tap to dismiss", Category::Message)
                .with_duration(Duration::ZERO),
        );
    }
}

/// Render the help panel, then the alert overlay on top of it.
pub fn render(f: &mut Frame, app: &mut App) {
    let background = Block::default().style(Style::default().bg(Color::Rgb(20, 20, 25)));
    f.render_widget(background, f.size());

    let lines = vec![
        Line::from(Span::styled(
            " ringtoast demo ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  1-4   message / warning / error / success"),
        Line::from("  t / b top / bottom position (success)"),
        Line::from("  0     sticky alert, tap it to dismiss"),
        Line::from("  q     quit"),
        Line::from(""),
        Line::from(format!(
            "  queued: {}   active: {}",
            app.coordinator.queue_len(),
            app.coordinator.is_active()
        )),
    ];
    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100))),
    );
    f.render_widget(help, f.size().inner(&Margin { horizontal: 1, vertical: 1 }));

    ui::render_alerts(f, &mut app.coordinator);
}
