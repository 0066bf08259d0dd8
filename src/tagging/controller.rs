//! Tagging controller: the word pool plus the ordered answer sequence.
//!
//! Every operation is a synchronous state transition. A request that would
//! break the available/placed partition is refused with a [`Rejected`] value
//! and leaves the controller untouched, so callers are free to ignore it.

use super::token::{Token, TokenId};
use thiserror::Error;
use tracing::debug;

/// Why a transition was refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejected {
    #[error("no token with id {0:?} in the pool")]
    UnknownToken(TokenId),

    #[error("\"{0}\" is already in the answer")]
    AlreadyPlaced(String),

    #[error("\"{0}\" is not in the answer")]
    NotPlaced(String),

    #[error("cannot move {from} to {to}: answer has {len} words")]
    OutOfRange { from: usize, to: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaggingController {
    tokens: Vec<Token>,
    sequence: Vec<TokenId>,
}

impl TaggingController {
    pub fn new(tokens: Vec<Token>) -> Self {
        let mut tokens = tokens;
        // A fresh pool always starts fully available.
        for token in &mut tokens {
            token.placed = false;
        }
        Self {
            tokens,
            sequence: Vec::new(),
        }
    }

    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(labels.into_iter().map(Token::new).collect())
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id.index())
    }

    /// Placed tokens in answer order
    pub fn sequence(&self) -> &[TokenId] {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn available(&self) -> impl Iterator<Item = (TokenId, &Token)> {
        self.tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_available())
            .map(|(i, t)| (TokenId(i), t))
    }

    pub fn placed_labels(&self) -> Vec<&str> {
        self.sequence
            .iter()
            .filter_map(|id| self.token(*id))
            .map(Token::label)
            .collect()
    }

    /// Position of `id` in the answer, if placed
    pub fn position_of(&self, id: TokenId) -> Option<usize> {
        self.sequence.iter().position(|placed| *placed == id)
    }

    /// First available token carrying `label`
    pub fn find_available(&self, label: &str) -> Option<TokenId> {
        self.available()
            .find(|(_, token)| token.label() == label)
            .map(|(id, _)| id)
    }

    /// Last placed token carrying `label`
    pub fn find_placed(&self, label: &str) -> Option<TokenId> {
        self.sequence
            .iter()
            .rev()
            .copied()
            .find(|id| self.token(*id).is_some_and(|t| t.label() == label))
    }

    pub fn select(&mut self, id: TokenId) -> Result<(), Rejected> {
        let token = self
            .tokens
            .get_mut(id.index())
            .ok_or(Rejected::UnknownToken(id))?;
        if token.placed {
            return Err(Rejected::AlreadyPlaced(token.label().to_string()));
        }

        token.placed = true;
        self.sequence.push(id);
        debug!(token = id.index(), len = self.sequence.len(), "token selected");
        debug_assert!(self.is_consistent());
        Ok(())
    }

    pub fn deselect(&mut self, id: TokenId) -> Result<(), Rejected> {
        let token = self
            .tokens
            .get_mut(id.index())
            .ok_or(Rejected::UnknownToken(id))?;
        if !token.placed {
            return Err(Rejected::NotPlaced(token.label().to_string()));
        }

        token.placed = false;
        self.sequence.retain(|placed| *placed != id);
        debug!(token = id.index(), len = self.sequence.len(), "token deselected");
        debug_assert!(self.is_consistent());
        Ok(())
    }

    /// Moves the answer entry at `from` to `to`, shifting the entries between.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), Rejected> {
        let len = self.sequence.len();
        if from >= len || to >= len {
            return Err(Rejected::OutOfRange { from, to, len });
        }

        let id = self.sequence.remove(from);
        self.sequence.insert(to, id);
        debug!(from, to, "answer reordered");
        Ok(())
    }

    pub fn clear_all(&mut self) {
        for token in &mut self.tokens {
            token.placed = false;
        }
        self.sequence.clear();
        debug!("answer cleared");
    }

    /// The answer as one space-joined string, in current order.
    pub fn serialize(&self) -> String {
        self.placed_labels().join(" ")
    }

    /// Checks the available/placed partition against the answer sequence.
    pub fn is_consistent(&self) -> bool {
        let mut seen = vec![0usize; self.tokens.len()];
        for id in &self.sequence {
            match seen.get_mut(id.index()) {
                Some(count) => *count += 1,
                None => return false,
            }
        }
        self.tokens
            .iter()
            .zip(seen)
            .all(|(token, count)| if token.placed { count == 1 } else { count == 0 })
    }
}
