//! Word/punctuation tokenizer
//!
//! Splits text into lowercase alphanumeric words and the four standalone
//! punctuation marks `.`, `!`, `,` and `-`. Whitespace separates words;
//! every other character is dropped.
//!
//! ## Module Structure
//!
//! - **token.rs**: `Token` and `Punct` types
//! - **classify.rs**: per-character classification
//! - **scan.rs**: the accumulating scanner (`Tokens` iterator and `tokenize`)

pub mod classify;
pub mod scan;
pub mod token;

pub use classify::{classify, CharClass};
pub use scan::{tokenize, Tokens};
pub use token::{Punct, Token};
