use crate::app::{AppEvent, AppMode};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Maps a key press to an app event for the current mode
pub fn key_to_event(key: KeyEvent, mode: AppMode) -> AppEvent {
    if key.kind == KeyEventKind::Release {
        return AppEvent::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return AppEvent::Quit;
    }

    match mode {
        AppMode::Command => match key.code {
            KeyCode::Enter => AppEvent::CommandRun,
            KeyCode::Esc => AppEvent::CommandCancel,
            KeyCode::Backspace => AppEvent::CommandBackspace,
            KeyCode::Char(c) => AppEvent::CommandChar(c),
            _ => AppEvent::None,
        },
        // Any key closes help
        AppMode::Help => AppEvent::Help,
        AppMode::Composing => composing_key(key),
        AppMode::Submitted | AppMode::Quit => AppEvent::None,
    }
}

fn composing_key(key: KeyEvent) -> AppEvent {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Tab | KeyCode::BackTab => AppEvent::ToggleFocus,
        KeyCode::Left if shift => AppEvent::ShiftCursorToken(-1),
        KeyCode::Right if shift => AppEvent::ShiftCursorToken(1),
        KeyCode::Left | KeyCode::Char('h') => AppEvent::MoveCursor(-1),
        KeyCode::Right | KeyCode::Char('l') => AppEvent::MoveCursor(1),
        KeyCode::Char('<') => AppEvent::ShiftCursorToken(-1),
        KeyCode::Char('>') => AppEvent::ShiftCursorToken(1),
        KeyCode::Enter | KeyCode::Char(' ') => AppEvent::ActivateCursor,
        KeyCode::Char('c') => AppEvent::ClearAll,
        KeyCode::Char('s') => AppEvent::Submit,
        KeyCode::Char('?') => AppEvent::Help,
        KeyCode::Char(':') => AppEvent::OpenCommand,
        KeyCode::Char('q') | KeyCode::Esc => AppEvent::Quit,
        _ => AppEvent::None,
    }
}
