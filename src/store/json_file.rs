//! JsonFileStore - the item collection as a single pretty-printed JSON array.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::item_store::{ItemStore, Revision};
use super::StorageError;
use crate::item::Item;

const EMPTY_DOCUMENT: &str = "[]";

/// Item store backed by one JSON document on disk.
///
/// The document is re-read on every `load` and fully rewritten on every
/// `save`. A missing document is created as `[]` on first load; a
/// malformed one is an error and is left untouched.
///
/// Writes go to a temporary file in the same directory which is synced and
/// then renamed over the document, so a concurrent `load` sees either the
/// old document or the new one, never a partial write.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_error(&self, source: io::Error) -> StorageError {
        StorageError::Read {
            path: self.path.clone(),
            source,
        }
    }

    fn write_error(&self, source: io::Error) -> StorageError {
        StorageError::Write {
            path: self.path.clone(),
            source,
        }
    }

    fn parse(&self, raw: &str) -> Result<Vec<Item>, StorageError> {
        serde_json::from_str(raw).map_err(|source| StorageError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    /// Write `body` to a synced temporary file next to the document.
    fn stage(&self, body: &str) -> Result<NamedTempFile, StorageError> {
        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
                parent
            }
            None => Path::new("."),
        };
        let mut staged = NamedTempFile::new_in(dir).map_err(|e| self.write_error(e))?;
        staged
            .write_all(body.as_bytes())
            .map_err(|e| self.write_error(e))?;
        staged.as_file().sync_all().map_err(|e| self.write_error(e))?;
        Ok(staged)
    }

    /// Create the document as an empty array.
    ///
    /// Never replaces an existing file: if another writer created the
    /// document in the meantime, that document wins and is read instead.
    fn initialize(&self) -> Result<Vec<Item>, StorageError> {
        let staged = self.stage(EMPTY_DOCUMENT)?;
        match staged.persist_noclobber(&self.path) {
            Ok(_) => {
                info!(path = %self.path.display(), "initialized empty item document");
                Ok(Vec::new())
            }
            Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => {
                let raw = fs::read_to_string(&self.path).map_err(|e| self.read_error(e))?;
                self.parse(&raw)
            }
            Err(e) => Err(self.write_error(e.error)),
        }
    }
}

impl ItemStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Item>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let items = self.parse(&raw)?;
                debug!(path = %self.path.display(), count = items.len(), "loaded items");
                Ok(items)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => self.initialize(),
            Err(e) => Err(self.read_error(e)),
        }
    }

    fn save(&self, items: &[Item]) -> Result<(), StorageError> {
        let body = serde_json::to_string_pretty(items).map_err(StorageError::Encode)?;
        self.stage(&body)?
            .persist(&self.path)
            .map_err(|e| self.write_error(e.error))?;
        debug!(path = %self.path.display(), count = items.len(), "saved items");
        Ok(())
    }

    fn revision(&self) -> Result<Revision, StorageError> {
        match fs::metadata(&self.path) {
            Ok(meta) => {
                let modified = meta.modified().map_err(|e| self.read_error(e))?;
                Ok(Revision::File {
                    modified,
                    len: meta.len(),
                })
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Revision::Missing),
            Err(e) => Err(self.read_error(e)),
        }
    }
}
