//! Sentence tagging: pick words from a fixed pool, arrange them into an
//! answer, and hand the answer to a form as a single string.

pub mod app;
pub mod config;
pub mod form;
pub mod input;
pub mod logging;
pub mod tagging;
pub mod ui;
