/// Stable handle to a token in the pool.
///
/// Ids are pool indices; the pool never grows or shrinks after load, so an id
/// stays valid for the lifetime of the controller that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(pub usize);

impl TokenId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A selectable word from the pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    label: String,
    /// True while the token sits in the answer sequence.
    pub(crate) placed: bool,
}

impl Token {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placed: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_placed(&self) -> bool {
        self.placed
    }

    pub fn is_available(&self) -> bool {
        !self.placed
    }
}
