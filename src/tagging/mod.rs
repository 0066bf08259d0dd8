pub mod board;
pub mod controller;
pub mod pool;
pub mod token;

pub use board::{BoardView, ChipBoard, TaggingBoard};
pub use controller::{Rejected, TaggingController};
pub use pool::{parse_word_list, split_words};
pub use token::{Token, TokenId};
