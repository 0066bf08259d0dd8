use crate::app::mode::{AppMode, Focus};
use crate::tagging::{ChipBoard, TokenId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
}

/// One-line message shown under the answer strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

impl Status {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Warning,
            text: text.into(),
        }
    }
}

/// A chip as the UI sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub id: TokenId,
    pub label: String,
    /// False for pool chips whose token is placed; the slot stays.
    pub visible: bool,
}

/// Render state for UI components
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub mode: AppMode,
    pub focus: Focus,
    pub pool: Vec<Chip>,
    pub answer: Vec<Chip>,
    /// Pool index of the cursor, if any chip is available
    pub pool_cursor: Option<usize>,
    /// Answer index of the cursor, if the answer is non-empty
    pub answer_cursor: Option<usize>,
    /// What would be submitted right now
    pub preview: String,
    pub command_line: String,
    pub status: Option<Status>,
    pub source: Option<String>,
}

impl RenderState {
    /// Create render state from the board the app keeps in sync
    pub fn from_board(board: &ChipBoard, mode: AppMode, focus: Focus) -> Self {
        let pool: Vec<Chip> = board
            .pool()
            .map(|(id, label, visible)| Chip {
                id,
                label: label.to_string(),
                visible,
            })
            .collect();

        let answer: Vec<Chip> = board
            .answer()
            .iter()
            .filter_map(|id| {
                board.label(*id).map(|label| Chip {
                    id: *id,
                    label: label.to_string(),
                    visible: true,
                })
            })
            .collect();

        let preview = answer
            .iter()
            .map(|chip| chip.label.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            mode,
            focus,
            pool,
            answer,
            pool_cursor: None,
            answer_cursor: None,
            preview,
            command_line: String::new(),
            status: None,
            source: None,
        }
    }

    /// Create an empty render state for when no word list is loaded
    pub fn empty(mode: AppMode) -> Self {
        Self::from_board(&ChipBoard::new(), mode, Focus::Pool)
    }

    pub fn has_pool(&self) -> bool {
        !self.pool.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagging::{TaggingBoard, TaggingController};

    #[test]
    fn test_empty_render_state() {
        let state = RenderState::empty(AppMode::Composing);
        assert!(!state.has_pool());
        assert!(state.answer.is_empty());
        assert_eq!(state.preview, "");
    }

    #[test]
    fn test_from_board_mirrors_view() {
        let mut board = TaggingBoard::new(
            TaggingController::from_labels(["the", "cat", "sat"]),
            ChipBoard::new(),
        );
        board.select(TokenId(2)).unwrap();
        board.select(TokenId(0)).unwrap();

        let state = RenderState::from_board(board.view(), AppMode::Composing, Focus::Answer);
        assert_eq!(state.pool.len(), 3);
        assert!(!state.pool[0].visible);
        assert!(state.pool[1].visible);
        let labels: Vec<&str> = state.answer.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["sat", "the"]);
        assert_eq!(state.preview, "sat the");
        assert_eq!(state.focus, Focus::Answer);
    }
}
