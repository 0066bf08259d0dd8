//! Screen geometry: where the pool, answer strip and chips land, and what sits
//! under a given cell. Drawing and mouse hit testing share one layout so a
//! drop always lands on the chip the user sees.

use crate::app::mode::Focus;
use crate::app::render_state::{Chip, RenderState};
use crate::tagging::TokenId;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::widgets::Block;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Blank columns between neighbouring chips
const CHIP_GAP: u16 = 1;
/// Padding cells around a label inside a chip
const CHIP_PADDING: u16 = 2;
const ANSWER_HEIGHT: u16 = 5;

/// The outer regions of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenAreas {
    pub pool: Rect,
    pub answer: Rect,
    pub preview: Rect,
    pub status: Rect,
    pub deck: Rect,
}

impl ScreenAreas {
    pub fn split(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(ANSWER_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            pool: chunks[0],
            answer: chunks[1],
            preview: chunks[2],
            status: chunks[3],
            deck: chunks[4],
        }
    }
}

/// What lies under a terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    PoolChip(TokenId),
    AnswerChip { index: usize, id: TokenId },
    /// Pool region outside any visible chip
    PoolArea,
    /// Answer region outside any chip
    AnswerArea,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedChip {
    /// Position in the pool, or in the answer sequence
    pub index: usize,
    pub id: TokenId,
    pub area: Rect,
    pub visible: bool,
    pub text: String,
}

/// Chip positions for one frame
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardLayout {
    pub areas: ScreenAreas,
    pub pool_inner: Rect,
    pub answer_inner: Rect,
    /// Chips on screen; rows scrolled out of the strip are left out
    pub pool_chips: Vec<PlacedChip>,
    pub answer_chips: Vec<PlacedChip>,
    /// Length of the whole answer sequence, drawn or not
    pub answer_len: usize,
}

impl BoardLayout {
    pub fn compute(state: &RenderState, area: Rect, max_chip_width: u16) -> Self {
        let areas = ScreenAreas::split(area);
        let pool_inner = Block::bordered().inner(areas.pool);
        let answer_inner = Block::bordered().inner(areas.answer);

        // The answer strip follows its cursor when focused, otherwise its tail
        let answer_anchor = match state.focus {
            Focus::Answer => state.answer_cursor,
            Focus::Pool => state.answer.len().checked_sub(1),
        };

        Self {
            areas,
            pool_inner,
            answer_inner,
            pool_chips: place_chips(&state.pool, pool_inner, max_chip_width, state.pool_cursor),
            answer_chips: place_chips(&state.answer, answer_inner, max_chip_width, answer_anchor),
            answer_len: state.answer.len(),
        }
    }

    /// Answer chips not on screen
    pub fn answer_overflow(&self) -> usize {
        self.answer_len.saturating_sub(self.answer_chips.len())
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<Hit> {
        let position = Position::new(column, row);

        if let Some(chip) = self
            .answer_chips
            .iter()
            .find(|chip| chip.area.contains(position))
        {
            return Some(Hit::AnswerChip {
                index: chip.index,
                id: chip.id,
            });
        }
        if self.areas.answer.contains(position) {
            return Some(Hit::AnswerArea);
        }

        if let Some(chip) = self
            .pool_chips
            .iter()
            .find(|chip| chip.visible && chip.area.contains(position))
        {
            return Some(Hit::PoolChip(chip.id));
        }
        if self.areas.pool.contains(position) {
            return Some(Hit::PoolArea);
        }
        None
    }
}

/// Flows chips left to right, wrapping rows. When there are more rows than
/// the area holds, whole rows scroll so the chip at `anchor` stays on screen.
fn place_chips(
    chips: &[Chip],
    area: Rect,
    max_chip_width: u16,
    anchor: Option<usize>,
) -> Vec<PlacedChip> {
    if area.width == 0 || area.height == 0 {
        return Vec::new();
    }

    let max_width = max_chip_width.max(CHIP_PADDING + 1).min(area.width);
    let mut x = area.x;
    let mut row: usize = 0;
    let mut flowed = Vec::with_capacity(chips.len());

    for (index, chip) in chips.iter().enumerate() {
        let text = truncate_label(&chip.label, max_width.saturating_sub(CHIP_PADDING));
        let width = text.width() as u16 + CHIP_PADDING;

        if x > area.x && x + width > area.right() {
            x = area.x;
            row += 1;
        }

        flowed.push((row, x, width, index, text));
        x = x.saturating_add(width + CHIP_GAP);
    }

    let height = area.height as usize;
    let anchor_row = anchor
        .and_then(|i| flowed.get(i))
        .map_or(0, |(row, ..)| *row);
    let top = (anchor_row + 1).saturating_sub(height);

    flowed
        .into_iter()
        .filter(|(row, ..)| (top..top + height).contains(row))
        .map(|(row, x, width, index, text)| PlacedChip {
            index,
            id: chips[index].id,
            area: Rect::new(x, area.y + (row - top) as u16, width, 1),
            visible: chips[index].visible,
            text,
        })
        .collect()
}

/// Shortens `label` to at most `max_cells` terminal cells, ending with `…`.
pub fn truncate_label(label: &str, max_cells: u16) -> String {
    let max_cells = max_cells as usize;
    if label.width() <= max_cells {
        return label.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for grapheme in label.graphemes(true) {
        let w = grapheme.width();
        if used + w + 1 > max_cells {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }
    out.push('…');
    out
}
