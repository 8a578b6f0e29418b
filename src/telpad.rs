//! Words keyed by their telephone-pad encoding.
//!
//! Each letter is replaced by the first letter of its key group, so "and"
//! is stored as "amd". Lookups take encoded input and expand every match
//! back into the real words that share the encoding, most frequent first.

use std::path::Path;

use hashbrown::HashMap;
use tracing::debug;

use crate::collection::{dictionary_files, for_each_entry, for_each_word, rank_key};
use crate::{Error, Result, WordCollection};

#[derive(Debug, Default)]
pub struct TelPadCollection {
    words: WordCollection,
    /// Real words per encoded word, ascending by rank.
    collisions: HashMap<String, Vec<String>>,
    ranks: HashMap<String, u32>,
}

/// Encodes a real word. Letters are matched case-insensitively; anything
/// else passes through unchanged.
pub fn encode(word: &str) -> String {
    word.chars().map(encode_char).collect()
}

fn encode_char(c: char) -> char {
    match c.to_ascii_lowercase() {
        'a'..='c' => 'a',
        'd'..='f' => 'd',
        'g'..='i' => 'g',
        'j'..='l' => 'j',
        'm'..='o' => 'm',
        'p'..='r' => 'p',
        's'..='v' => 's',
        'w'..='z' => 'w',
        _ => c,
    }
}

impl TelPadCollection {
    pub fn new() -> Self {
        TelPadCollection::default()
    }

    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let mut collection = TelPadCollection::new();
        collection.load_dir(dir)?;
        Ok(collection)
    }

    /// Number of distinct real words.
    pub fn len(&self) -> usize {
        self.collisions.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.collisions.is_empty()
    }

    /// The collection of encoded words.
    pub fn encoded(&self) -> &WordCollection {
        &self.words
    }

    /// Rank of the real word `word`.
    pub fn rank(&self, word: &str) -> Result<u32> {
        self.ranks
            .get(word)
            .copied()
            .ok_or_else(|| Error::UnknownRank(word.to_string()))
    }

    /// Stores `word` under its encoding. A later rank for the same real
    /// word replaces the earlier one and moves the word within its group.
    pub fn insert(&mut self, word: &str, rank: Option<u32>) -> Result<()> {
        let encoded = encode(word);
        self.words.insert(&encoded, None)?;
        if let Some(rank) = rank {
            self.ranks.insert(word.to_string(), rank);
        }

        let group = self.collisions.entry(encoded).or_default();
        match group.iter().position(|known| known == word) {
            Some(_) if rank.is_none() => return Ok(()),
            Some(pos) => {
                group.remove(pos);
            }
            None => {}
        }
        // after every word of equal or better rank
        let key = rank_key(&self.ranks, word);
        let pos = group.partition_point(|known| rank_key(&self.ranks, known) <= key);
        group.insert(pos, word.to_string());
        Ok(())
    }

    /// Whether the real word `word` has been stored.
    pub fn contains(&self, word: &str) -> Result<bool> {
        let encoded = encode(word);
        if !self.words.contains(&encoded)? {
            return Ok(false);
        }
        Ok(self
            .collisions
            .get(&encoded)
            .map_or(false, |group| group.iter().any(|known| known == word)))
    }

    /// Real words whose encoding starts with `encoded_prefix`.
    ///
    /// Without a cutoff, encoded words come in code-point order and each
    /// expands to its real words by rank. With one, the whole list is
    /// ordered by real-word rank (unranked last) and cut to `cutoff` words.
    pub fn prefix_search(
        &self,
        encoded_prefix: &str,
        cutoff: Option<usize>,
    ) -> Result<Vec<String>> {
        if encoded_prefix.is_empty() {
            return Ok(Vec::new());
        }
        let mut real_words = Vec::new();
        for encoded in self.words.prefix_search(encoded_prefix, None)? {
            let group = self
                .collisions
                .get(&encoded)
                .ok_or_else(|| Error::CorruptIndex(encoded.clone()))?;
            real_words.extend(group.iter().cloned());
        }
        if let Some(cutoff) = cutoff {
            real_words.sort_by_key(|word| rank_key(&self.ranks, word));
            real_words.truncate(cutoff);
        }
        Ok(real_words)
    }

    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let count = for_each_entry(path, |rank, word| self.insert(word, Some(rank)))?;
        debug!(file = %path.display(), entries = count, "ingested telpad dictionary file");
        Ok(count)
    }

    pub fn load_dir(&mut self, dir: impl AsRef<Path>) -> Result<usize> {
        let files = dictionary_files(dir.as_ref())?;
        for file in &files {
            self.load_file(file)?;
        }
        Ok(files.len())
    }

    /// Ingests a plain list with one unranked word per line.
    pub fn load_word_list(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let count = for_each_word(path, |word| self.insert(word, None))?;
        debug!(file = %path.display(), words = count, "ingested telpad word list");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_encode() {
        assert_eq!(encode("and"), "amd");
        assert_eq!(encode("The"), "sgd");
        assert_eq!(encode("abcdefghijklmnopqrstuvwxyz"), "aaadddgggjjjmmmpppsssswwww");
        assert_eq!(encode("it's 2"), "gs's 2");
        assert_eq!(encode("né"), "mé");
    }

    #[test]
    fn test_collisions() {
        let mut telpad = TelPadCollection::new();
        // "good" and "home" share the encoding "gmmd"
        telpad.insert("good", Some(1)).unwrap();
        telpad.insert("home", Some(4)).unwrap();
        telpad.insert("good", Some(1)).unwrap();
        telpad.insert("golf", Some(2)).unwrap();

        assert_eq!(encode("home"), encode("good"));
        assert_eq!(telpad.len(), 3);
        assert_eq!(telpad.encoded().len(), 2);
        assert!(telpad.contains("home").unwrap());
        assert!(!telpad.contains("hood").unwrap());

        assert_eq!(
            telpad.prefix_search("gm", None).unwrap(),
            vec!["golf", "good", "home"]
        );
        assert_eq!(telpad.prefix_search("gmj", None).unwrap(), vec!["golf"]);
        assert!(telpad.prefix_search("", None).unwrap().is_empty());
        assert!(telpad.prefix_search("w", None).unwrap().is_empty());
    }

    #[test]
    fn test_collision_group_ordered_by_real_word_rank() {
        let mut telpad = TelPadCollection::new();
        telpad.insert("act", Some(9)).unwrap();
        telpad.insert("cat", Some(2)).unwrap();
        telpad.insert("bat", Some(5)).unwrap();

        assert_eq!(telpad.prefix_search("aas", None).unwrap(), vec!["cat", "bat", "act"]);
        assert_eq!(telpad.rank("act").unwrap(), 9);
        assert_eq!(telpad.rank("cat").unwrap(), 2);
        assert!(matches!(telpad.rank("abs"), Err(Error::UnknownRank(_))));
    }

    #[test]
    fn test_collision_ties_and_unranked() {
        let mut telpad = TelPadCollection::new();
        telpad.insert("act", None).unwrap();
        telpad.insert("bat", Some(3)).unwrap();
        telpad.insert("cat", Some(3)).unwrap();
        telpad.insert("abs", Some(0)).unwrap();
        // ties keep insertion order, unranked words go last
        assert_eq!(
            telpad.prefix_search("aas", None).unwrap(),
            vec!["abs", "bat", "cat", "act"]
        );

        // a new rank moves the word; re-inserting without one keeps it put
        telpad.insert("act", Some(1)).unwrap();
        telpad.insert("bat", None).unwrap();
        assert_eq!(
            telpad.prefix_search("aas", None).unwrap(),
            vec!["abs", "act", "bat", "cat"]
        );
        assert_eq!(telpad.len(), 4);
    }

    #[test]
    fn test_prefix_search_cutoff_counts_real_words() {
        let mut telpad = TelPadCollection::new();
        telpad.insert("act", Some(9)).unwrap();
        telpad.insert("cat", Some(2)).unwrap();
        telpad.insert("bat", Some(5)).unwrap();
        telpad.insert("cart", Some(1)).unwrap();
        telpad.insert("bard", None).unwrap();
        // act, bat and cat encode to "aas", cart to "aaps", bard to "aapd"
        assert_eq!(telpad.prefix_search("aa", Some(1)).unwrap(), vec!["cart"]);
        assert_eq!(
            telpad.prefix_search("aa", Some(2)).unwrap(),
            vec!["cart", "cat"]
        );
        assert_eq!(
            telpad.prefix_search("aa", Some(10)).unwrap(),
            vec!["cart", "cat", "bat", "act", "bard"]
        );
        assert_eq!(
            telpad.prefix_search("aa", None).unwrap(),
            vec!["bard", "cart", "cat", "bat", "act"]
        );
    }

    #[test]
    fn test_load_word_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "good\n\n  home \ngolf").unwrap();
        let mut telpad = TelPadCollection::new();
        assert_eq!(telpad.load_word_list(file.path()).unwrap(), 3);
        assert_eq!(
            telpad.prefix_search("gm", None).unwrap(),
            vec!["golf", "good", "home"]
        );
    }
}
