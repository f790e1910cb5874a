//! Whole-file snapshot persistence
//!
//! The entire collection lives in memory as an insertion-ordered map of
//! id -> record and is mirrored to a single JSON file. Every mutation is
//! followed by a full rewrite of the file; there are no incremental writes.
//!
//! Durability contract:
//! - `save` must complete before the triggering request is acknowledged
//! - the file on disk is always the snapshot as of the last successful save
//! - a snapshot that exists but does not parse is a fatal open error

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::errors::{StoreError, StoreResult};

/// File-backed store holding the full record collection in memory.
///
/// Iteration order of the collection is insertion order (new records append
/// at the end), and that order survives a save/load round trip.
#[derive(Debug)]
pub struct SnapshotStore {
    path: PathBuf,
    records: Map<String, Value>,
}

impl SnapshotStore {
    /// Opens the store at `path`, loading the snapshot if it exists.
    ///
    /// A missing file yields an empty collection. An unreadable or
    /// unparseable file is an error; the caller decides whether to abort.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        let records = match fs::read_to_string(&path) {
            Ok(contents) => {
                let value: Value = serde_json::from_str(&contents)
                    .map_err(|e| StoreError::corrupt(&path, e))?;
                match value {
                    Value::Object(map) => map,
                    _ => return Err(StoreError::not_an_object(&path)),
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Map::new(),
            Err(e) => return Err(StoreError::read(&path, e)),
        };

        Ok(Self { path, records })
    }

    /// Serializes the entire collection and replaces the backing file.
    ///
    /// Writes to a temp file in the same directory and renames it over the
    /// target, so a torn write never leaves a half-snapshot behind.
    pub fn save(&self) -> StoreResult<()> {
        let contents = serde_json::to_string(&self.records)
            .map_err(|e| StoreError::write(&self.path, e.into()))?;

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, contents).map_err(|e| StoreError::write(&tmp_path, e))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::write(&self.path, e))?;

        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full collection, in insertion order
    pub fn records(&self) -> &Map<String, Value> {
        &self.records
    }

    /// Looks up a single record by id
    pub fn get(&self, id: &str) -> Option<&Value> {
        self.records.get(id)
    }

    /// Whether a record with this id exists
    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Inserts a record under a fresh id (appends in iteration order)
    pub fn insert(&mut self, id: String, record: Value) {
        self.records.insert(id, record);
    }

    /// Shallow-merges `patch` fields over the record at `id`.
    ///
    /// Patch fields win; fields absent from the patch are retained. Returns
    /// the merged record, or `None` if the id does not exist or the patch is
    /// not an object.
    pub fn merge(&mut self, id: &str, patch: &Value) -> Option<Value> {
        let record = self.records.get_mut(id)?;
        let patch_obj = patch.as_object()?;

        if let Some(record_obj) = record.as_object_mut() {
            for (key, value) in patch_obj {
                record_obj.insert(key.clone(), value.clone());
            }
        }

        Some(record.clone())
    }

    /// Removes the record at `id`, returning it if present
    pub fn remove(&mut self, id: &str) -> Option<Value> {
        self.records.remove(id)
    }

    /// Number of records in the collection
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
