//! Ranked word collection.
//!
//! Dictionary files hold one `<rank><whitespace><word>` entry per line.
//! Rank 0 is the most frequent word; ties are allowed.

use std::fs;
use std::path::{Path, PathBuf};

use hashbrown::HashMap;
use tracing::{debug, warn};

use crate::{Error, Result, Tree};

#[derive(Debug, Default)]
pub struct WordCollection {
    tree: Tree,
    ranks: HashMap<String, u32>,
    entries: usize,
    files_ingested: usize,
}

impl WordCollection {
    pub fn new() -> Self {
        WordCollection::default()
    }

    /// Builds a collection from every dictionary file in `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let mut collection = WordCollection::new();
        collection.load_dir(dir)?;
        Ok(collection)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    pub fn files_ingested(&self) -> usize {
        self.files_ingested
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Adds `word`, recording `rank` when given. A later rank for the same
    /// word replaces the earlier one.
    pub fn insert(&mut self, word: &str, rank: Option<u32>) -> Result<()> {
        if !self.tree.contains(word)? {
            self.entries += 1;
        }
        self.tree.insert(word)?;
        if let Some(rank) = rank {
            self.ranks.insert(word.to_string(), rank);
        }
        Ok(())
    }

    pub fn contains(&self, word: &str) -> Result<bool> {
        self.tree.contains(word)
    }

    pub fn rank(&self, word: &str) -> Result<u32> {
        self.ranks
            .get(word)
            .copied()
            .ok_or_else(|| Error::UnknownRank(word.to_string()))
    }

    /// Words starting with `prefix`. Without a cutoff the result is in
    /// code-point order. With one, it holds the `cutoff` best ranked words,
    /// most frequent first; unranked words sort last.
    pub fn prefix_search(&self, prefix: &str, cutoff: Option<usize>) -> Result<Vec<String>> {
        let mut words = self.tree.prefix_search(prefix)?;
        debug_assert!(words.iter().all(|word| word.starts_with(prefix)));
        if let Some(cutoff) = cutoff {
            // stable, so equal ranks stay in code-point order
            words.sort_by_key(|word| rank_key(&self.ranks, word));
            words.truncate(cutoff);
        }
        Ok(words)
    }

    pub fn pattern_match(&self, pattern: &str) -> Result<Vec<String>> {
        self.tree.pattern_match(pattern)
    }

    /// Ingests one rank/word file. Returns the number of entries read.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let count = for_each_entry(path, |rank, word| self.insert(word, Some(rank)))?;
        self.files_ingested += 1;
        debug!(file = %path.display(), entries = count, "ingested dictionary file");
        Ok(count)
    }

    /// Ingests every regular file in `dir`, in file name order. Returns
    /// the number of files read.
    pub fn load_dir(&mut self, dir: impl AsRef<Path>) -> Result<usize> {
        let files = dictionary_files(dir.as_ref())?;
        for file in &files {
            self.load_file(file)?;
        }
        debug!(files = files.len(), words = self.entries, "loaded dictionary");
        Ok(files.len())
    }

    /// Ingests a plain list with one unranked word per line.
    pub fn load_word_list(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let count = for_each_word(path, |word| self.insert(word, None))?;
        debug!(file = %path.display(), words = count, "ingested word list");
        Ok(count)
    }
}

/// Sort key for rank ordering; unranked words come after every ranked one.
pub(crate) fn rank_key(ranks: &HashMap<String, u32>, word: &str) -> u32 {
    ranks.get(word).copied().unwrap_or(u32::MAX)
}

/// Reads a plain word list, one word per line, blank lines skipped.
pub(crate) fn for_each_word<F>(path: &Path, mut f: F) -> Result<usize>
where
    F: FnMut(&str) -> Result<()>,
{
    let content = fs::read_to_string(path)?;
    let mut count = 0;
    for word in content.lines().map(str::trim).filter(|w| !w.is_empty()) {
        f(word)?;
        count += 1;
    }
    Ok(count)
}

/// Regular files in `dir`, sorted by path.
pub(crate) fn dictionary_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        } else {
            warn!(path = %entry.path().display(), "skipping non-file dictionary entry");
        }
    }
    files.sort();
    Ok(files)
}

/// Parses `path` as a rank/word file and hands each entry to `f`.
pub(crate) fn for_each_entry<F>(path: &Path, mut f: F) -> Result<usize>
where
    F: FnMut(u32, &str) -> Result<()>,
{
    let content = fs::read_to_string(path)?;
    let parse_error = |line: usize, reason: String| Error::Parse {
        file: path.to_path_buf(),
        line,
        reason,
    };

    let mut count = 0;
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (rank, word) = match line.split_once(char::is_whitespace) {
            Some((rank, word)) => (rank, word.trim()),
            None => {
                return Err(parse_error(
                    index + 1,
                    format!("expected a rank followed by a word: {:?}", line),
                ))
            }
        };
        let rank = rank
            .parse::<u32>()
            .map_err(|_| parse_error(index + 1, format!("non-numeric rank {:?}", rank)))?;
        f(rank, word)?;
        count += 1;
    }
    Ok(count)
}
