//! Zhuyin reading dictionary.
//!
//! Maps Han substrings (single characters and multi-character phrases) to
//! space-delimited, tone-marked Bopomofo syllable strings. Loaded once from a
//! parsed-dictionary JSON file, immutable afterwards; annotation calls share
//! it by reference, so concurrent readers need no locking.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::warn;

static CUSTOM_PATH: OnceLock<PathBuf> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("dictionary path already initialized")]
    AlreadyInitialized,
}

/// One record of the parsed-dictionary JSON. Records missing either field
/// are skipped on load, not treated as a failure.
#[derive(Debug, Deserialize)]
struct DictRecord {
    title: Option<String>,
    zhuyin: Option<String>,
}

pub struct ZhuyinDict {
    entries: HashMap<String, String>,
}

impl ZhuyinDict {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Build from `(key, reading)` pairs. The first occurrence of a key wins,
    /// matching the load-order semantics of the JSON source.
    pub fn from_entries<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut entries = HashMap::new();
        for (key, reading) in pairs {
            entries
                .entry(key.into())
                .or_insert_with(|| normalize_reading(reading.as_ref()));
        }
        Self { entries }
    }

    /// Parse the JSON source at `path`.
    pub fn load(path: &Path) -> Result<Self, DictError> {
        let raw = std::fs::read_to_string(path)?;
        let records: Vec<DictRecord> =
            serde_json::from_str(&raw).map_err(|e| DictError::Parse(e.to_string()))?;

        let mut entries = HashMap::new();
        let mut skipped = 0usize;
        for rec in records {
            let (Some(title), Some(zhuyin)) = (rec.title, rec.zhuyin) else {
                skipped += 1;
                continue;
            };
            entries
                .entry(title)
                .or_insert_with(|| normalize_reading(&zhuyin));
        }
        if skipped > 0 {
            warn!(skipped, path = %path.display(), "dictionary records missing title/zhuyin");
        }
        Ok(Self { entries })
    }

    /// Load, degrading to the empty dictionary on any failure. With an empty
    /// dictionary every annotation call renders plain unannotated text; a
    /// missing or broken source must never fail a page.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(dict) => dict,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "zhuyin dictionary unavailable");
                Self::new()
            }
        }
    }

    /// Set the dictionary source path before the first `global()` call.
    pub fn init_global(path: PathBuf) -> Result<(), DictError> {
        CUSTOM_PATH
            .set(path)
            .map_err(|_| DictError::AlreadyInitialized)
    }

    /// Get or initialize the process-wide dictionary. Read-only after the
    /// first call; safe to share across request threads. Without a prior
    /// `init_global` this is the empty dictionary.
    pub fn global() -> &'static ZhuyinDict {
        static INSTANCE: OnceLock<ZhuyinDict> = OnceLock::new();
        INSTANCE.get_or_init(|| match CUSTOM_PATH.get() {
            Some(path) => Self::load_or_empty(path),
            None => Self::new(),
        })
    }

    /// Raw normalized reading for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Reading split into syllables, returned only when the syllable count
    /// matches the character count of `key`. A mismatched entry is refused so
    /// rendering never pairs a character with the wrong syllable.
    pub fn aligned_syllables(&self, key: &str) -> Option<Vec<&str>> {
        let reading = self.get(key)?;
        let syllables: Vec<&str> = reading.split(' ').collect();
        (syllables.len() == key.chars().count()).then_some(syllables)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ZhuyinDict {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse whitespace runs (including U+3000 ideographic space, which the
/// source file mixes freely with ASCII spaces) into single ASCII separators,
/// so syllable splitting downstream is reliable.
fn normalize_reading(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
