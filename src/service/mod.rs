//! Record service
//!
//! Orchestrates create/get/list/update/delete against the snapshot store,
//! using the validator and the query engine. The store is guarded by a
//! single `RwLock`; every mutation holds the write lock across its whole
//! validate-merge-persist sequence, so mutations are atomic with respect to
//! each other and a response is never produced before the durable write
//! attempt completes.

mod errors;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::query::ListQuery;
use crate::store::SnapshotStore;
use crate::validator;

pub use errors::{ServiceError, ServiceResult};

/// Exclusive-writer service over the shared record collection
pub struct RecordService {
    store: RwLock<SnapshotStore>,
}

impl RecordService {
    /// Wraps an opened store
    pub fn new(store: SnapshotStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    fn read(&self) -> ServiceResult<RwLockReadGuard<'_, SnapshotStore>> {
        self.store
            .read()
            .map_err(|_| ServiceError::Internal("Lock poisoned".to_string()))
    }

    fn write(&self) -> ServiceResult<RwLockWriteGuard<'_, SnapshotStore>> {
        self.store
            .write()
            .map_err(|_| ServiceError::Internal("Lock poisoned".to_string()))
    }

    /// Validates the payload, assigns a fresh UUIDv4 and stores the payload
    /// verbatim. Returns `{id, ...fields}`.
    pub fn create(&self, payload: Value) -> ServiceResult<Value> {
        validator::validate(&payload)?;

        let id = Uuid::new_v4().to_string();

        let mut store = self.write()?;
        store.insert(id.clone(), payload.clone());
        store.save()?;

        // id first, then the stored fields
        let mut response = Map::new();
        response.insert("id".to_string(), Value::String(id));
        if let Some(fields) = payload.as_object() {
            for (key, value) in fields {
                response.insert(key.clone(), value.clone());
            }
        }
        Ok(Value::Object(response))
    }

    /// Returns the record at `id`, if any
    pub fn fetch(&self, id: &str) -> ServiceResult<Option<Value>> {
        Ok(self.read()?.get(id).cloned())
    }

    /// Filters and sorts the full collection; always succeeds
    pub fn list(&self, query: &ListQuery) -> ServiceResult<Vec<Value>> {
        Ok(query.apply(self.read()?.records()))
    }

    /// Checks the id a mutating request named, before its body is touched.
    ///
    /// `MissingId` if absent, `NotFound` if not in the collection.
    pub fn ensure_exists(&self, id: Option<&str>) -> ServiceResult<()> {
        let id = id.ok_or(ServiceError::MissingId)?;
        if self.read()?.contains(id) {
            Ok(())
        } else {
            Err(ServiceError::NotFound)
        }
    }

    /// Validates the raw payload, then shallow-merges it over the record at
    /// `id` and persists. Payload fields win; unspecified fields are
    /// retained. Returns the merged record.
    ///
    /// Validation applies to the incoming payload, not the merged result: a
    /// partial payload missing a required field is rejected even though the
    /// stored record would still be complete after the merge.
    pub fn update(&self, id: &str, payload: Value) -> ServiceResult<Value> {
        validator::validate(&payload)?;

        let mut store = self.write()?;
        let merged = store.merge(id, &payload).ok_or(ServiceError::NotFound)?;
        store.save()?;

        Ok(merged)
    }

    /// Removes the record at `id` and persists
    pub fn delete(&self, id: Option<&str>) -> ServiceResult<()> {
        let id = id.ok_or(ServiceError::MissingId)?;

        let mut store = self.write()?;
        store.remove(id).ok_or(ServiceError::NotFound)?;
        store.save()?;

        Ok(())
    }

    /// Number of records currently held
    pub fn len(&self) -> ServiceResult<usize> {
        Ok(self.read()?.len())
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> ServiceResult<bool> {
        Ok(self.read()?.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn service(dir: &TempDir) -> RecordService {
        let store = SnapshotStore::open(dir.path().join("data.json")).unwrap();
        RecordService::new(store)
    }

    fn alice() -> Value {
        json!({"name": "Alice", "age": 30, "country": "Norway"})
    }

    #[test]
    fn test_create_returns_id_and_fields() {
        let dir = TempDir::new().unwrap();
        let svc = service(&dir);

        let created = svc.create(alice()).unwrap();
        let id = created["id"].as_str().unwrap();

        assert!(!id.is_empty());
        assert_eq!(created["name"], "Alice");
        assert_eq!(created["age"], 30);
        assert_eq!(created["country"], "Norway");
    }

    #[test]
    fn test_create_then_fetch_returns_stored_fields() {
        let dir = TempDir::new().unwrap();
        let svc = service(&dir);

        let created = svc.create(alice()).unwrap();
        let id = created["id"].as_str().unwrap();

        let fetched = svc.fetch(id).unwrap().unwrap();
        assert_eq!(fetched, alice());
    }

    #[test]
    fn test_create_rejects_invalid_payload() {
        let dir = TempDir::new().unwrap();
        let svc = service(&dir);

        let result = svc.create(json!({"name": "Alice", "country": "Norway"}));
        assert!(matches!(result, Err(ServiceError::Validation(_))));
        assert_eq!(svc.len().unwrap(), 0);
    }

    #[test]
    fn test_ids_are_never_reused() {
        let dir = TempDir::new().unwrap();
        let svc = service(&dir);

        let first = svc.create(alice()).unwrap();
        let id = first["id"].as_str().unwrap().to_string();
        svc.delete(Some(&id)).unwrap();

        let second = svc.create(alice()).unwrap();
        assert_ne!(second["id"].as_str().unwrap(), id);
    }

    #[test]
    fn test_update_validates_raw_payload() {
        let dir = TempDir::new().unwrap();
        let svc = service(&dir);

        let created = svc.create(alice()).unwrap();
        let id = created["id"].as_str().unwrap();

        // Partial payload missing age fails even though the stored record
        // has one
        let result = svc.update(id, json!({"age": 31}));
        assert!(matches!(
            result,
            Err(ServiceError::Validation(crate::validator::FieldError::Name))
        ));

        // Stored record is untouched
        assert_eq!(svc.fetch(id).unwrap().unwrap()["age"], 30);
    }

    #[test]
    fn test_update_merges_and_retains_unspecified_fields() {
        let dir = TempDir::new().unwrap();
        let svc = service(&dir);

        let created = svc
            .create(json!({"name": "Alice", "age": 30, "country": "Norway", "nickname": "Al"}))
            .unwrap();
        let id = created["id"].as_str().unwrap();

        let merged = svc
            .update(id, json!({"name": "Alice", "age": 31, "country": "Norway"}))
            .unwrap();

        assert_eq!(merged["age"], 31);
        assert_eq!(merged["nickname"], "Al");
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let dir = TempDir::new().unwrap();
        let svc = service(&dir);

        let result = svc.update("missing", alice());
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn test_ensure_exists_ordering() {
        let dir = TempDir::new().unwrap();
        let svc = service(&dir);

        assert!(matches!(
            svc.ensure_exists(None),
            Err(ServiceError::MissingId)
        ));
        assert!(matches!(
            svc.ensure_exists(Some("missing")),
            Err(ServiceError::NotFound)
        ));

        let created = svc.create(alice()).unwrap();
        let id = created["id"].as_str().unwrap();
        assert!(svc.ensure_exists(Some(id)).is_ok());
    }

    #[test]
    fn test_delete_twice_second_is_not_found() {
        let dir = TempDir::new().unwrap();
        let svc = service(&dir);

        let created = svc.create(alice()).unwrap();
        let id = created["id"].as_str().unwrap();

        assert!(svc.delete(Some(id)).is_ok());
        assert!(matches!(svc.delete(Some(id)), Err(ServiceError::NotFound)));
    }

    #[test]
    fn test_delete_missing_id() {
        let dir = TempDir::new().unwrap();
        let svc = service(&dir);
        assert!(matches!(svc.delete(None), Err(ServiceError::MissingId)));
    }

    #[test]
    fn test_list_delegates_to_query_engine() {
        let dir = TempDir::new().unwrap();
        let svc = service(&dir);

        svc.create(alice()).unwrap();
        svc.create(json!({"name": "Bob", "age": 25, "country": "France"}))
            .unwrap();

        let all = svc.list(&ListQuery::default()).unwrap();
        assert_eq!(all.len(), 2);

        let query = ListQuery {
            name: Some("ali".into()),
            ..Default::default()
        };
        let filtered = svc.list(&query).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0]["name"], "Alice");
    }

    #[test]
    fn test_mutations_persist_to_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");

        let id = {
            let store = SnapshotStore::open(&path).unwrap();
            let svc = RecordService::new(store);
            let created = svc.create(alice()).unwrap();
            created["id"].as_str().unwrap().to_string()
        };

        let reopened = SnapshotStore::open(&path).unwrap();
        assert_eq!(reopened.get(&id).unwrap(), &alice());
    }
}
