//! Mouse adapter: turns press / drag / release sequences into app events.
//!
//! A press remembers what was grabbed; the release decides what happened.
//! Exactly one event comes out of a gesture, so a drop can never select the
//! same word twice.

use super::layout::{BoardLayout, Hit};
use crate::app::AppEvent;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grab {
    Pool(Hit),
    Answer(Hit),
}

#[derive(Debug, Default)]
pub struct DragTracker {
    grabbed: Option<Grab>,
    moved: bool,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.grabbed.is_some() && self.moved
    }

    pub fn handle(&mut self, event: MouseEvent, layout: &BoardLayout) -> AppEvent {
        let hit = layout.hit_test(event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.grabbed = match hit {
                    Some(h @ Hit::PoolChip(_)) => Some(Grab::Pool(h)),
                    Some(h @ Hit::AnswerChip { .. }) => Some(Grab::Answer(h)),
                    _ => None,
                };
                self.moved = false;
                AppEvent::None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.grabbed.is_some() {
                    self.moved = true;
                }
                AppEvent::None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let grabbed = self.grabbed.take();
                self.moved = false;
                match grabbed {
                    Some(grab) => release(grab, hit, layout.answer_len),
                    None => AppEvent::None,
                }
            }
            _ => AppEvent::None,
        }
    }
}

fn release(grab: Grab, target: Option<Hit>, answer_len: usize) -> AppEvent {
    match (grab, target) {
        // Click on a pool chip, or drop it anywhere on the answer strip
        (Grab::Pool(Hit::PoolChip(id)), Some(Hit::PoolChip(target))) if id == target => {
            AppEvent::Select(id)
        }
        (Grab::Pool(Hit::PoolChip(id)), Some(Hit::AnswerArea | Hit::AnswerChip { .. })) => {
            AppEvent::Select(id)
        }

        (Grab::Answer(Hit::AnswerChip { index, id }), Some(target)) => match target {
            Hit::AnswerChip { index: to, .. } if to == index => AppEvent::Deselect(id),
            Hit::AnswerChip { index: to, .. } => AppEvent::Reorder { from: index, to },
            Hit::AnswerArea if answer_len > 0 => AppEvent::Reorder {
                from: index,
                to: answer_len - 1,
            },
            Hit::PoolArea | Hit::PoolChip(_) => AppEvent::Deselect(id),
            Hit::AnswerArea => AppEvent::None,
        },

        _ => AppEvent::None,
    }
}
