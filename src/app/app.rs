use super::event::AppEvent;
use super::mode::{AppMode, Focus};
use super::render_state::{RenderState, Status};
use crate::form::{AnswerForm, Submission};
use crate::input::{self, LoadedPool};
use crate::tagging::{ChipBoard, Rejected, TaggingBoard, TaggingController, TokenId};
use crate::ui::command::{command_to_app_event, parse_deck_line};
use tracing::{debug, info, warn};

pub struct App {
    mode: AppMode,
    board: TaggingBoard<ChipBoard>,
    form: AnswerForm,
    focus: Focus,
    pool_cursor: usize,
    answer_cursor: usize,
    command_line: String,
    status: Option<Status>,
    source: Option<String>,
    submission: Option<Submission>,
}

impl App {
    pub fn new(form: AnswerForm) -> Self {
        Self {
            mode: AppMode::Composing,
            board: TaggingBoard::new(TaggingController::default(), ChipBoard::new()),
            form,
            focus: Focus::Pool,
            pool_cursor: 0,
            answer_cursor: 0,
            command_line: String::new(),
            status: None,
            source: None,
            submission: None,
        }
    }

    pub fn with_pool(form: AnswerForm, pool: LoadedPool) -> Self {
        let mut app = Self::new(form);
        app.load_pool(pool);
        app
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn controller(&self) -> &TaggingController {
        self.board.controller()
    }

    pub fn board(&self) -> &ChipBoard {
        self.board.view()
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    pub fn take_submission(&mut self) -> Option<Submission> {
        self.submission.take()
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Select(id) => self.select(id),
            AppEvent::Deselect(id) => self.deselect(id),
            AppEvent::SelectLabel(label) => match self.controller().find_available(&label) {
                Some(id) => self.select(id),
                None => self.warn(format!("No available word \"{}\"", label)),
            },
            AppEvent::DeselectLabel(label) => match self.controller().find_placed(&label) {
                Some(id) => self.deselect(id),
                None => self.warn(format!("\"{}\" is not in the answer", label)),
            },
            // Out-of-range moves are dropped without a status message
            AppEvent::Reorder { from, to } => match self.board.reorder(from, to) {
                Ok(()) => {
                    self.status = None;
                    self.answer_cursor = to;
                }
                Err(rejected) => debug!(%rejected, "reorder ignored"),
            },
            AppEvent::ClearAll => {
                self.board.clear_all();
                self.pool_cursor = 0;
                self.answer_cursor = 0;
                self.focus = Focus::Pool;
                self.settle_pool_cursor();
                self.status = Some(Status::info("Cleared"));
            }
            AppEvent::Submit => self.submit(),
            AppEvent::LoadFile(path) => {
                let result = input::file::load(&path);
                self.load_result(result);
            }
            AppEvent::LoadClipboard => {
                let result = input::clipboard::load();
                self.load_result(result);
            }
            AppEvent::ToggleFocus => {
                self.focus = self.focus.toggled();
            }
            AppEvent::MoveCursor(delta) => self.move_cursor(delta),
            AppEvent::ActivateCursor => self.activate_cursor(),
            AppEvent::ShiftCursorToken(delta) => self.shift_cursor_token(delta),
            AppEvent::OpenCommand => {
                self.command_line.clear();
                self.mode = AppMode::Command;
            }
            AppEvent::CommandChar(c) => {
                if self.mode == AppMode::Command {
                    self.command_line.push(c);
                }
            }
            AppEvent::CommandBackspace => {
                self.command_line.pop();
            }
            AppEvent::CommandRun => {
                let line = std::mem::take(&mut self.command_line);
                self.mode = AppMode::Composing;
                let event = command_to_app_event(parse_deck_line(&line));
                debug!(command = %line, ?event, "command deck");
                self.handle_event(event);
            }
            AppEvent::CommandCancel => {
                self.command_line.clear();
                self.mode = AppMode::Composing;
            }
            AppEvent::Help => {
                self.mode = match self.mode {
                    AppMode::Help => AppMode::Composing,
                    _ => AppMode::Help,
                };
            }
            AppEvent::Quit => {
                info!("quit without submitting");
                self.mode = AppMode::Quit;
            }
            AppEvent::Warning(message) => self.warn(message),
            AppEvent::InvalidCommand(input) => {
                self.warn(format!("Unknown command: {}", input));
            }
            AppEvent::None => {}
        }
    }

    pub fn get_render_state(&self) -> RenderState {
        let mut state = RenderState::from_board(self.board.view(), self.mode, self.focus);
        state.pool_cursor = self
            .board
            .view()
            .is_visible(TokenId(self.pool_cursor))
            .then_some(self.pool_cursor);
        state.answer_cursor =
            (self.answer_cursor < state.answer.len()).then_some(self.answer_cursor);
        state.command_line = self.command_line.clone();
        state.status = self.status.clone();
        state.source = self.source.clone();
        state
    }

    fn select(&mut self, id: TokenId) {
        let result = self.board.select(id);
        if self.apply(result) {
            self.settle_pool_cursor();
        }
    }

    fn deselect(&mut self, id: TokenId) {
        let result = self.board.deselect(id);
        if self.apply(result) {
            let len = self.controller().sequence().len();
            self.answer_cursor = self.answer_cursor.min(len.saturating_sub(1));
            if len == 0 {
                self.focus = Focus::Pool;
            }
            self.settle_pool_cursor();
        }
    }

    /// Records the outcome of a transition; true if it was accepted.
    fn apply(&mut self, result: Result<(), Rejected>) -> bool {
        match result {
            Ok(()) => {
                self.status = None;
                true
            }
            Err(rejected) => {
                warn!(%rejected, "transition rejected");
                self.status = Some(Status::warning(rejected.to_string()));
                false
            }
        }
    }

    fn submit(&mut self) {
        match self.form.submit(self.board.controller()) {
            Ok(submission) => {
                self.submission = Some(submission);
                self.mode = AppMode::Submitted;
            }
            Err(e) => self.warn(e.to_string()),
        }
    }

    fn load_result(&mut self, result: Result<LoadedPool, input::LoadError>) {
        match result {
            Ok(pool) => {
                let count = pool.tokens.len();
                let source = pool.source.clone();
                self.load_pool(pool);
                self.status = Some(Status::info(format!("Loaded {} words from {}", count, source)));
            }
            Err(e) => {
                warn!(error = %e, "word list not loaded");
                self.warn(e.to_string());
            }
        }
    }

    fn load_pool(&mut self, pool: LoadedPool) {
        self.board.replace_pool(pool.tokens);
        self.source = Some(pool.source);
        self.focus = Focus::Pool;
        self.pool_cursor = 0;
        self.answer_cursor = 0;
        self.settle_pool_cursor();
    }

    fn warn(&mut self, message: String) {
        self.status = Some(Status::warning(message));
    }

    /// Keeps the pool cursor on a visible chip, searching forward then back.
    fn settle_pool_cursor(&mut self) {
        let view = self.board.view();
        if view.is_visible(TokenId(self.pool_cursor)) {
            return;
        }
        let len = view.pool_len();
        let forward = (self.pool_cursor..len).find(|i| view.is_visible(TokenId(*i)));
        let backward = (0..self.pool_cursor.min(len))
            .rev()
            .find(|i| view.is_visible(TokenId(*i)));
        if let Some(index) = forward.or(backward) {
            self.pool_cursor = index;
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        match self.focus {
            Focus::Pool => {
                let view = self.board.view();
                let visible: Vec<usize> = view
                    .pool()
                    .filter(|(_, _, visible)| *visible)
                    .map(|(id, _, _)| id.index())
                    .collect();
                let Some(current) = visible.iter().position(|i| *i == self.pool_cursor) else {
                    return;
                };
                let target = current.saturating_add_signed(delta).min(visible.len() - 1);
                self.pool_cursor = visible[target];
            }
            Focus::Answer => {
                let len = self.controller().sequence().len();
                if len > 0 {
                    self.answer_cursor = self.answer_cursor.saturating_add_signed(delta).min(len - 1);
                }
            }
        }
    }

    fn activate_cursor(&mut self) {
        match self.focus {
            Focus::Pool => {
                if self.board.view().is_visible(TokenId(self.pool_cursor)) {
                    self.select(TokenId(self.pool_cursor));
                }
            }
            Focus::Answer => {
                if let Some(id) = self.controller().sequence().get(self.answer_cursor).copied() {
                    self.deselect(id);
                }
            }
        }
    }

    fn shift_cursor_token(&mut self, delta: isize) {
        if self.focus != Focus::Answer {
            return;
        }
        let len = self.controller().sequence().len();
        let Some(to) = self.answer_cursor.checked_add_signed(delta) else {
            return;
        };
        if to < len {
            self.handle_event(AppEvent::Reorder {
                from: self.answer_cursor,
                to,
            });
        }
    }
}
