/*!
 * Dictionary loading and time-bounded caching.
 *
 * The dictionary is read from its source once and then reused until the
 * configured time-to-live elapses, after which the next access rebuilds it.
 */

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, warn};
use parking_lot::RwLock;

use crate::errors::ConfigError;

use super::model::Dictionary;

/// Somewhere a dictionary can be loaded from
pub trait DictionarySource: Send + Sync + Debug {
    /// Load and validate the dictionary
    fn load(&self) -> Result<Dictionary, ConfigError>;

    /// Short description for log messages
    fn describe(&self) -> String;
}

/// Dictionary stored as a JSON file on disk
#[derive(Debug, Clone)]
pub struct FileDictionarySource {
    path: PathBuf,
}

impl FileDictionarySource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DictionarySource for FileDictionarySource {
    fn load(&self) -> Result<Dictionary, ConfigError> {
        let content = fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;
        Dictionary::from_json_str(&content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Dictionary held in memory, mostly for tests and tooling
#[derive(Debug, Clone, Default)]
pub struct StaticDictionarySource {
    dictionary: Dictionary,
}

impl StaticDictionarySource {
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }
}

impl DictionarySource for StaticDictionarySource {
    fn load(&self) -> Result<Dictionary, ConfigError> {
        Ok(self.dictionary.clone())
    }

    fn describe(&self) -> String {
        "in-memory dictionary".to_string()
    }
}

#[derive(Debug)]
struct CachedDictionary {
    dictionary: Arc<Dictionary>,
    loaded_at: Instant,
}

/// Shared, time-bounded dictionary cache
#[derive(Debug, Clone)]
pub struct DictionaryCache {
    source: Arc<dyn DictionarySource>,

    /// Currently loaded dictionary, if any
    entry: Arc<RwLock<Option<CachedDictionary>>>,

    /// How long a loaded dictionary stays valid
    ttl: Duration,

    /// Cache hit counter
    hits: Arc<RwLock<usize>>,

    /// Number of loads from the source
    loads: Arc<RwLock<usize>>,
}

impl DictionaryCache {
    /// Create an empty cache; nothing is loaded until first use
    pub fn new(source: Arc<dyn DictionarySource>, ttl: Duration) -> Self {
        Self {
            source,
            entry: Arc::new(RwLock::new(None)),
            ttl,
            hits: Arc::new(RwLock::new(0)),
            loads: Arc::new(RwLock::new(0)),
        }
    }

    /// Cache over a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P, ttl: Duration) -> Self {
        Self::new(Arc::new(FileDictionarySource::new(path)), ttl)
    }

    /// Cache over an in-memory dictionary
    pub fn from_dictionary(dictionary: Dictionary, ttl: Duration) -> Self {
        Self::new(Arc::new(StaticDictionarySource::new(dictionary)), ttl)
    }

    /// Return the cached dictionary, loading it if absent or expired
    pub fn get(&self) -> Result<Arc<Dictionary>, ConfigError> {
        if let Some(dictionary) = self.fresh(&self.entry.read()) {
            *self.hits.write() += 1;
            return Ok(dictionary);
        }

        let mut entry = self.entry.write();

        // Another caller may have reloaded while we waited for the lock
        if let Some(dictionary) = self.fresh(&entry) {
            *self.hits.write() += 1;
            return Ok(dictionary);
        }

        if entry.is_some() {
            debug!("Dictionary cache expired after {:?}", self.ttl);
        }

        debug!("Loading dictionary from {}", self.source.describe());
        let dictionary = match self.source.load() {
            Ok(dictionary) => Arc::new(dictionary),
            Err(e) => {
                warn!("Failed to load dictionary from {}: {}", self.source.describe(), e);
                return Err(e);
            }
        };
        debug!(
            "Loaded {} dictionary terms in {} categories",
            dictionary.len(),
            dictionary.categories().len()
        );

        *entry = Some(CachedDictionary {
            dictionary: dictionary.clone(),
            loaded_at: Instant::now(),
        });
        *self.loads.write() += 1;

        Ok(dictionary)
    }

    /// Drop the cached dictionary so the next access reloads it
    pub fn invalidate(&self) {
        *self.entry.write() = None;
        debug!("Dictionary cache invalidated");
    }

    /// Get cache statistics as (hits, loads)
    pub fn stats(&self) -> (usize, usize) {
        (*self.hits.read(), *self.loads.read())
    }

    /// Check if a dictionary is currently loaded and unexpired
    pub fn is_loaded(&self) -> bool {
        self.fresh(&self.entry.read()).is_some()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn fresh(&self, entry: &Option<CachedDictionary>) -> Option<Arc<Dictionary>> {
        entry
            .as_ref()
            .filter(|cached| cached.loaded_at.elapsed() < self.ttl)
            .map(|cached| cached.dictionary.clone())
    }
}
