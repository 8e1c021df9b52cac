//! Demo event loop: keyboard fires alerts, mouse clicks act as taps.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::{backend::Backend, Terminal};

use ringtoast::{AlertPosition, Category};

use crate::app::{self, App};

/// Result of handling a key event.
pub enum HandleResult {
    /// Continue running the app
    Continue,
    /// Exit the app
    Exit,
}

/// Polling interval while an alert is animating, for smooth frames.
const ANIMATION_POLL_MS: u64 = 16;

/// Run the main application loop.
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        app.coordinator.tick(Instant::now());

        terminal.draw(|f| app::render(f, app))?;

        // Fast polling while an alert animates, slower when idle.
        let timeout = if app.coordinator.is_active() {
            Duration::from_millis(ANIMATION_POLL_MS)
        } else {
            Duration::from_millis(app.coordinator.config().behavior.poll_ms)
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match handle_key_event(app, key.code, key.modifiers) {
                        HandleResult::Exit => return Ok(()),
                        HandleResult::Continue => {}
                    }
                }
                Event::Mouse(mouse) => {
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                        app.coordinator
                            .handle_tap(mouse.column, mouse.row, Instant::now());
                    }
                }
                _ => {}
            }
        }
        // If no event, loop continues and redraws (for animation frames)
    }
}

/// Handle a key event and return whether to continue or exit.
fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> HandleResult {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => HandleResult::Exit,
        KeyCode::Char('q') | KeyCode::Esc => HandleResult::Exit,
        KeyCode::Char('1') => {
            app.fire(Category::Message, AlertPosition::Center);
            HandleResult::Continue
        }
        KeyCode::Char('2') => {
            app.fire(Category::Warning, AlertPosition::Center);
            HandleResult::Continue
        }
        KeyCode::Char('3') => {
            app.fire(Category::Error, AlertPosition::Center);
            HandleResult::Continue
        }
        KeyCode::Char('4') => {
            app.fire(Category::Success, AlertPosition::Center);
            HandleResult::Continue
        }
        KeyCode::Char('t') => {
            app.fire(Category::Success, AlertPosition::Top);
            HandleResult::Continue
        }
        KeyCode::Char('b') => {
            app.fire(Category::Success, AlertPosition::Bottom);
            HandleResult::Continue
        }
        KeyCode::Char('0') => {
            app.fire_sticky();
            HandleResult::Continue
        }
        _ => HandleResult::Continue,
    }
}
