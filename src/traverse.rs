use std::cmp::Ordering;

use crate::codepoint::{decode_as, utf8_text};
use crate::{Node, Result, Tree, WILDCARD};

enum Step<'a> {
    Walk(&'a Node),
    Push(char),
    Pop,
    Emit,
}

/// In-order walk over stored words: smaller siblings, the node itself,
/// its child chain, then larger siblings. Yields words in code-point order.
///
/// One buffer holds the current path; `Push`/`Pop` frames grow and shrink
/// it around each child chain.
pub struct Words<'a> {
    stack: Vec<Step<'a>>,
    buffer: String,
}

impl<'a> Words<'a> {
    fn empty() -> Self {
        Words {
            stack: Vec::new(),
            buffer: String::new(),
        }
    }

    /// Every word in the sibling set rooted at `node`, each prefixed by `stem`.
    fn below(node: Option<&'a Node>, stem: String) -> Self {
        let mut words = Words::empty();
        words.buffer = stem;
        words.stack.extend(node.map(Step::Walk));
        words
    }

    /// `anchor` holds the last code point of a prefix, `stem` the code
    /// points before it. The anchor's own siblings belong to other prefixes
    /// and are never visited.
    fn anchored(anchor: &'a Node, stem: String) -> Self {
        let mut words = Words::empty();
        words.buffer = stem;
        words.buffer.push(anchor.character());
        words.stack.extend(anchor.child().map(Step::Walk));
        if anchor.is_terminal() {
            words.stack.push(Step::Emit);
        }
        words
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(step) = self.stack.pop() {
            match step {
                Step::Emit => return Some(self.buffer.clone()),
                Step::Push(ch) => self.buffer.push(ch),
                Step::Pop => {
                    self.buffer.pop();
                }
                Step::Walk(node) => {
                    // pushed in reverse of visiting order
                    self.stack.extend(node.larger().map(Step::Walk));
                    self.stack.push(Step::Pop);
                    self.stack.extend(node.child().map(Step::Walk));
                    if node.is_terminal() {
                        self.stack.push(Step::Emit);
                    }
                    self.stack.push(Step::Push(node.character()));
                    self.stack.extend(node.smaller().map(Step::Walk));
                }
            }
        }
        None
    }
}

enum PatternStep<'a> {
    Walk(&'a Node, usize),
    Push(char),
    Pop,
    Emit,
}

impl Tree {
    /// All stored words in code-point order, each once.
    pub fn words(&self) -> Words<'_> {
        Words::below(self.root(), String::new())
    }

    /// Lazy form of [`Tree::prefix_search`].
    pub fn completions(&self, prefix: &str) -> Result<Words<'_>> {
        let codepoints = decode_as(prefix, "prefix")?;
        let words = match self.locate(&codepoints) {
            Some(anchor) => {
                let stem: String = codepoints[..codepoints.len() - 1].iter().collect();
                Words::anchored(anchor, stem)
            }
            None => Words::empty(),
        };
        Ok(words)
    }

    /// Stored words starting with `prefix`, sorted by code point. The prefix
    /// itself is included when it is a stored word.
    pub fn prefix_search(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self.completions(prefix)?.collect())
    }

    pub fn prefix_search_utf8(&self, prefix: &[u8]) -> Result<Vec<String>> {
        self.prefix_search(utf8_text(prefix)?)
    }

    /// Stored words as long as `pattern` that match it code point by code
    /// point, where [`WILDCARD`] matches anything. Sorted by code point.
    pub fn pattern_match(&self, pattern: &str) -> Result<Vec<String>> {
        let pattern = decode_as(pattern, "pattern")?;
        let mut results = Vec::new();
        let mut buffer = String::new();
        let mut stack: Vec<PatternStep<'_>> = Vec::new();
        stack.extend(self.root().map(|root| PatternStep::Walk(root, 0)));

        while let Some(step) = stack.pop() {
            let (node, index) = match step {
                PatternStep::Emit => {
                    results.push(buffer.clone());
                    continue;
                }
                PatternStep::Push(ch) => {
                    buffer.push(ch);
                    continue;
                }
                PatternStep::Pop => {
                    buffer.pop();
                    continue;
                }
                PatternStep::Walk(node, index) => (node, index),
            };
            let wanted = pattern[index];
            let wild = wanted == WILDCARD;
            let order = wanted.cmp(&node.character());

            if wild || order == Ordering::Greater {
                stack.extend(node.larger().map(|n| PatternStep::Walk(n, index)));
            }
            if wild || order == Ordering::Equal {
                let last = index + 1 == pattern.len();
                if (!last && node.child().is_some()) || (last && node.is_terminal()) {
                    stack.push(PatternStep::Pop);
                    if last {
                        stack.push(PatternStep::Emit);
                    } else {
                        stack.extend(node.child().map(|n| PatternStep::Walk(n, index + 1)));
                    }
                    stack.push(PatternStep::Push(node.character()));
                }
            }
            if wild || order == Ordering::Less {
                stack.extend(node.smaller().map(|n| PatternStep::Walk(n, index)));
            }
        }
        Ok(results)
    }
}
