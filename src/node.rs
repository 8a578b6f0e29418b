use crate::Node;

impl Node {
    pub fn new(character: char) -> Self {
        Node {
            character,
            terminal: false,
            smaller: None,
            larger: None,
            child: None,
        }
    }

    pub fn character(&self) -> char {
        self.character
    }

    /// True when the path ending at this node spells a stored word.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn mark_terminal(&mut self) {
        self.terminal = true;
    }

    pub fn smaller(&self) -> Option<&Node> {
        self.smaller.as_deref()
    }

    pub fn larger(&self) -> Option<&Node> {
        self.larger.as_deref()
    }

    pub fn child(&self) -> Option<&Node> {
        self.child.as_deref()
    }

    /// Number of nodes in the subtree rooted here, siblings included.
    pub fn count(&self) -> usize {
        let mut stack: Vec<&Node> = vec![self];
        let mut count = 0;
        while let Some(current) = stack.pop() {
            count += 1;
            stack.extend(current.smaller());
            stack.extend(current.child());
            stack.extend(current.larger());
        }
        count
    }
}

// Unlinks subtrees onto a heap stack so that dropping a long child or
// sibling chain never recurses.
impl Drop for Node {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = Vec::new();
        stack.extend(self.smaller.take());
        stack.extend(self.larger.take());
        stack.extend(self.child.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.smaller.take());
            stack.extend(node.larger.take());
            stack.extend(node.child.take());
        }
    }
}
