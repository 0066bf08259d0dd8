use crate::app::{App, AppMode};
use crate::config::UiConfig;
use crate::ui::drag::DragTracker;
use crate::ui::keys::key_to_event;
use crate::ui::layout::BoardLayout;
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::view;
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::debug;

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    config: UiConfig,
    layout: BoardLayout,
    drag: DragTracker,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new(config: UiConfig) -> Result<Self, io::Error> {
        let guard = TerminalGuard::new(config.mouse)?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            config,
            layout: BoardLayout::default(),
            drag: DragTracker::new(),
            _guard: guard,
        })
    }

    /// Runs until the answer is submitted or the user quits.
    ///
    /// Every input event is handled to completion before the next frame is
    /// drawn, so the screen always shows the state after the last transition.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<AppMode> {
        let poll_timeout = Duration::from_millis(self.config.tick_ms.max(1));

        loop {
            self.render_frame(app)?;

            let current_mode = app.mode();
            if current_mode.is_final() {
                return Ok(current_mode);
            }

            // Propagate I/O errors instead of ignoring them
            if !event::poll(poll_timeout)? {
                continue;
            }

            let app_event = match event::read()? {
                Event::Key(key) => key_to_event(key, app.mode()),
                Event::Mouse(mouse) if app.mode() == AppMode::Composing => {
                    self.drag.handle(mouse, &self.layout)
                }
                _ => continue,
            };
            debug!(?app_event, "input");
            app.handle_event(app_event);
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let render_state = app.get_render_state();
        let max_chip_width = self.config.max_chip_width;
        let dragging = self.drag.is_dragging();
        let mut layout = BoardLayout::default();

        self.terminal.draw(|frame| {
            layout = BoardLayout::compute(&render_state, frame.area(), max_chip_width);
            view::draw(frame, &render_state, &layout, dragging);
        })?;

        self.layout = layout;
        Ok(())
    }
}
