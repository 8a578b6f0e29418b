//! Thread-safe handle over a [`Tree`].
//!
//! Writers take the lock exclusively; lookups share it, so any number of
//! `contains`/`prefix_search` calls run together but never alongside an
//! `insert`.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::{Result, Tree};

#[derive(Debug, Clone, Default)]
pub struct SharedTree {
    inner: Arc<RwLock<Tree>>,
}

impl SharedTree {
    pub fn new() -> Self {
        SharedTree::default()
    }

    pub fn insert(&self, word: &str) -> Result<()> {
        self.inner.write().insert(word)
    }

    pub fn insert_all<I, S>(&self, words: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.inner.write().insert_all(words)
    }

    pub fn contains(&self, word: &str) -> Result<bool> {
        self.inner.read().contains(word)
    }

    pub fn prefix_search(&self, prefix: &str) -> Result<Vec<String>> {
        self.inner.read().prefix_search(prefix)
    }

    pub fn pattern_match(&self, pattern: &str) -> Result<Vec<String>> {
        self.inner.read().pattern_match(pattern)
    }

    pub fn size(&self) -> usize {
        self.inner.read().size()
    }

    /// Runs `f` with the read lock held, for several lookups against one
    /// consistent view of the tree.
    pub fn with_tree<T>(&self, f: impl FnOnce(&Tree) -> T) -> T {
        f(&self.inner.read())
    }
}

impl From<Tree> for SharedTree {
    fn from(tree: Tree) -> Self {
        SharedTree {
            inner: Arc::new(RwLock::new(tree)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_concurrent_writers() {
        let shared = SharedTree::new();
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for i in 0..250 {
                        shared.insert(&format!("w{}-{}", t, i)).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.size(), 1000);
        assert!(shared.contains("w3-249").unwrap());
        assert_eq!(shared.prefix_search("w2-24").unwrap().len(), 11);
    }

    #[test]
    fn test_readers_alongside_writer() {
        let shared = SharedTree::from({
            let mut tree = Tree::new();
            tree.insert_all(["cat", "car", "dog"]).unwrap();
            tree
        });

        let writer = {
            let shared = shared.clone();
            thread::spawn(move || {
                for i in 0..500 {
                    shared.insert(&format!("cab{}", i)).unwrap();
                }
            })
        };
        let readers: Vec<_> = (0..3)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..200 {
                        // every snapshot keeps the seeded words, sorted
                        let found = shared.prefix_search("ca").unwrap();
                        assert!(found.contains(&"car".to_string()));
                        assert!(found.windows(2).all(|pair| pair[0] < pair[1]));
                        assert!(shared.contains("dog").unwrap());
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
        assert_eq!(shared.size(), 503);
        assert_eq!(shared.with_tree(|tree| tree.words().count()), 503);
    }
}
