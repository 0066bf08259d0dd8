//! Keeps a visual rendering of the pool and answer in step with the controller.
//!
//! [`BoardView`] is the seam between the pure transitions in
//! [`TaggingController`] and whatever draws them. [`TaggingBoard`] forwards each
//! accepted transition to the view and touches nothing when the controller
//! refuses a request.

use super::controller::{Rejected, TaggingController};
use super::token::{Token, TokenId};

/// A rendering of the token pool and answer strip
pub trait BoardView {
    /// Shows a fresh pool: every chip visible, answer strip empty.
    fn reset(&mut self, labels: &[&str]);

    /// Hides a pool chip while keeping its slot.
    fn hide_token(&mut self, id: TokenId);

    /// Makes a pool chip visible again.
    fn show_token(&mut self, id: TokenId);

    /// Redraws the answer strip in the given order.
    fn set_answer(&mut self, answer: &[TokenId]);
}

/// Controller plus the view that mirrors it
#[derive(Debug)]
pub struct TaggingBoard<V: BoardView> {
    controller: TaggingController,
    view: V,
}

impl<V: BoardView> TaggingBoard<V> {
    pub fn new(controller: TaggingController, view: V) -> Self {
        let mut board = Self { controller, view };
        board.resync();
        board
    }

    pub fn controller(&self) -> &TaggingController {
        &self.controller
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Swaps in a new pool. The answer starts empty.
    pub fn replace_pool(&mut self, tokens: Vec<Token>) {
        self.controller = TaggingController::new(tokens);
        self.resync();
    }

    pub fn select(&mut self, id: TokenId) -> Result<(), Rejected> {
        self.controller.select(id)?;
        self.view.hide_token(id);
        self.view.set_answer(self.controller.sequence());
        Ok(())
    }

    pub fn deselect(&mut self, id: TokenId) -> Result<(), Rejected> {
        self.controller.deselect(id)?;
        self.view.show_token(id);
        self.view.set_answer(self.controller.sequence());
        Ok(())
    }

    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), Rejected> {
        self.controller.reorder(from, to)?;
        self.view.set_answer(self.controller.sequence());
        Ok(())
    }

    pub fn clear_all(&mut self) {
        let placed: Vec<TokenId> = self.controller.sequence().to_vec();
        self.controller.clear_all();
        for id in placed {
            self.view.show_token(id);
        }
        self.view.set_answer(&[]);
    }

    pub fn serialize(&self) -> String {
        self.controller.serialize()
    }

    fn resync(&mut self) {
        let labels: Vec<&str> = self.controller.tokens().iter().map(Token::label).collect();
        self.view.reset(&labels);
        for id in self.controller.sequence() {
            self.view.hide_token(*id);
        }
        self.view.set_answer(self.controller.sequence());
    }
}

/// In-memory board the terminal UI draws from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChipBoard {
    labels: Vec<String>,
    hidden: Vec<bool>,
    answer: Vec<TokenId>,
}

impl ChipBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool chips in pool order with their visibility
    pub fn pool(&self) -> impl Iterator<Item = (TokenId, &str, bool)> + '_ {
        self.labels
            .iter()
            .zip(&self.hidden)
            .enumerate()
            .map(|(i, (label, hidden))| (TokenId(i), label.as_str(), !*hidden))
    }

    pub fn pool_len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_visible(&self, id: TokenId) -> bool {
        self.hidden.get(id.index()).is_some_and(|hidden| !hidden)
    }

    pub fn label(&self, id: TokenId) -> Option<&str> {
        self.labels.get(id.index()).map(String::as_str)
    }

    pub fn answer(&self) -> &[TokenId] {
        &self.answer
    }

    pub fn answer_labels(&self) -> Vec<&str> {
        self.answer.iter().filter_map(|id| self.label(*id)).collect()
    }

    /// True when chip visibility and the answer strip match the controller.
    pub fn in_sync_with(&self, controller: &TaggingController) -> bool {
        self.labels.len() == controller.len()
            && self.answer.as_slice() == controller.sequence()
            && controller
                .tokens()
                .iter()
                .zip(&self.hidden)
                .all(|(token, hidden)| token.is_placed() == *hidden)
    }
}

impl BoardView for ChipBoard {
    fn reset(&mut self, labels: &[&str]) {
        self.labels = labels.iter().map(|label| label.to_string()).collect();
        self.hidden = vec![false; labels.len()];
        self.answer.clear();
    }

    fn hide_token(&mut self, id: TokenId) {
        if let Some(hidden) = self.hidden.get_mut(id.index()) {
            *hidden = true;
        }
    }

    fn show_token(&mut self, id: TokenId) {
        if let Some(hidden) = self.hidden.get_mut(id.index()) {
            *hidden = false;
        }
    }

    fn set_answer(&mut self, answer: &[TokenId]) {
        self.answer = answer.to_vec();
    }
}
