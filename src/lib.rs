pub mod collection;
pub mod config;
pub mod shared;
pub mod telpad;

mod codepoint;
mod error;
mod node;
mod traverse;
mod tree;

pub use crate::codepoint::{decode, decode_utf8};
pub use crate::collection::WordCollection;
pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::shared::SharedTree;
pub use crate::telpad::TelPadCollection;
pub use crate::traverse::Words;

/// Matches any single code point in [`Tree::pattern_match`].
pub const WILDCARD: char = '?';

/// A ternary search tree over Unicode code points.
///
/// `size` counts successful `insert` calls, so inserting the same word
/// twice counts twice. Use [`WordCollection`] for a distinct word count.
#[derive(Debug, Default)]
pub struct Tree {
    root: Option<Box<Node>>,
    size: usize,
}

/// One code point layer of a [`Tree`].
#[derive(Debug)]
pub struct Node {
    character: char,
    terminal: bool,
    smaller: Option<Box<Node>>,
    larger: Option<Box<Node>>,
    child: Option<Box<Node>>,
}
