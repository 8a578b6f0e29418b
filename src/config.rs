//! Completion settings, read from TOML.
//!
//! ```toml
//! dictionary_dir = "/usr/share/tst/dict"
//! cutoff = 5
//! telpad = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use crate::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory of rank/word dictionary files.
    pub dictionary_dir: Option<PathBuf>,
    /// Maximum completions returned, best ranked first.
    pub cutoff: Option<usize>,
    /// Store and search words by telephone-pad encoding.
    pub telpad: bool,
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let config = content.parse::<Config>()?;
        debug!(file = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| Error::Config(e.to_string()))
    }
}
