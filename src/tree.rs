use std::cmp::Ordering;

use tracing::trace;

use crate::codepoint::{decode, utf8_text};
use crate::{Node, Result, Tree};

impl Tree {
    pub fn new() -> Self {
        Tree {
            root: None,
            size: 0,
        }
    }

    /// Number of successful `insert` calls, duplicates included.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    pub fn node_count(&self) -> usize {
        self.root().map_or(0, Node::count)
    }

    pub fn insert(&mut self, word: &str) -> Result<()> {
        let codepoints = decode(word)?;
        self.insert_codepoints(&codepoints);
        trace!(word, size = self.size, "inserted");
        Ok(())
    }

    pub fn insert_utf8(&mut self, word: &[u8]) -> Result<()> {
        self.insert(utf8_text(word)?)
    }

    /// Inserts every word, stopping at the first failure. Returns how many
    /// words were inserted.
    pub fn insert_all<I, S>(&mut self, words: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut count = 0;
        for word in words {
            self.insert(word.as_ref())?;
            count += 1;
        }
        Ok(count)
    }

    pub fn contains(&self, word: &str) -> Result<bool> {
        let codepoints = decode(word)?;
        Ok(self.locate(&codepoints).map_or(false, Node::is_terminal))
    }

    pub fn contains_utf8(&self, word: &[u8]) -> Result<bool> {
        self.contains(utf8_text(word)?)
    }

    // `codepoints` is never empty, decode() rejects empty input
    fn insert_codepoints(&mut self, codepoints: &[char]) {
        let mut slot = &mut self.root;
        let mut index = 0;
        loop {
            let ch = codepoints[index];
            let node = slot.get_or_insert_with(|| Box::new(Node::new(ch)));
            match ch.cmp(&node.character) {
                Ordering::Equal => {
                    if index + 1 < codepoints.len() {
                        index += 1;
                        slot = &mut node.child;
                    } else {
                        node.mark_terminal();
                        break;
                    }
                }
                Ordering::Less => slot = &mut node.smaller,
                Ordering::Greater => slot = &mut node.larger,
            }
        }
        self.record_insert();
    }

    // the only place `size` changes
    fn record_insert(&mut self) {
        self.size += 1;
    }

    /// Finds the node holding the last code point of `codepoints`, whether
    /// or not it ends a stored word.
    pub(crate) fn locate(&self, codepoints: &[char]) -> Option<&Node> {
        let mut current = self.root();
        let mut index = 0;
        while let Some(node) = current {
            match codepoints.get(index)?.cmp(&node.character) {
                Ordering::Equal => {
                    if index + 1 < codepoints.len() {
                        index += 1;
                        current = node.child();
                    } else {
                        return Some(node);
                    }
                }
                Ordering::Less => current = node.smaller(),
                Ordering::Greater => current = node.larger(),
            }
        }
        None
    }
}
