use crate::tagging::TokenId;

/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    Select(TokenId),
    Deselect(TokenId),
    SelectLabel(String),
    DeselectLabel(String),
    Reorder { from: usize, to: usize },
    ClearAll,
    Submit,
    LoadFile(String),
    LoadClipboard,
    ToggleFocus,
    MoveCursor(isize),
    /// Select or deselect the token under the cursor
    ActivateCursor,
    /// Move the answer token under the cursor by this many places
    ShiftCursorToken(isize),
    OpenCommand,
    CommandChar(char),
    CommandBackspace,
    CommandRun,
    CommandCancel,
    Help,
    Quit,
    Warning(String),
    InvalidCommand(String),
    None,
}
