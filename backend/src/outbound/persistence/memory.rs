//! In-memory school store.
//!
//! Keeps records in insertion order so `fetch_all` is deterministic. A real
//! deployment would swap in a database-backed adapter behind the same port;
//! the handlers never see the difference.

use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{SchoolStore, SchoolStoreError};
use crate::domain::{School, SchoolRecord};

/// Insertion-ordered, lock-guarded store of school records.
#[derive(Debug, Default)]
pub struct InMemorySchoolStore {
    records: RwLock<Vec<School>>,
}

impl InMemorySchoolStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing records, preserving their ids and order.
    pub fn with_records(records: Vec<School>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    fn parse_id(id: &str) -> Result<Uuid, SchoolStoreError> {
        Uuid::parse_str(id).map_err(|_| SchoolStoreError::invalid_id(id))
    }
}

fn poisoned() -> SchoolStoreError {
    SchoolStoreError::backend("school store lock poisoned")
}

#[async_trait]
impl SchoolStore for InMemorySchoolStore {
    async fn fetch_all(&self) -> Result<Vec<School>, SchoolStoreError> {
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records.clone())
    }

    async fn fetch_by_id(&self, id: &str) -> Result<School, SchoolStoreError> {
        let wanted = Self::parse_id(id)?;
        let records = self.records.read().map_err(|_| poisoned())?;
        records
            .iter()
            .find(|school| school.id == wanted)
            .cloned()
            .ok_or_else(|| SchoolStoreError::not_found(id))
    }

    async fn insert(&self, record: SchoolRecord) -> Result<(), SchoolStoreError> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        records.push(School::from_record(Uuid::new_v4(), record));
        Ok(())
    }

    async fn replace_by_id(
        &self,
        id: &str,
        record: SchoolRecord,
    ) -> Result<(), SchoolStoreError> {
        let wanted = Self::parse_id(id)?;
        let mut records = self.records.write().map_err(|_| poisoned())?;
        match records.iter_mut().find(|school| school.id == wanted) {
            Some(slot) => {
                *slot = School::from_record(wanted, record);
                Ok(())
            }
            None => Err(SchoolStoreError::not_found(id)),
        }
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), SchoolStoreError> {
        let wanted = Self::parse_id(id)?;
        let mut records = self.records.write().map_err(|_| poisoned())?;
        let before = records.len();
        records.retain(|school| school.id != wanted);
        if records.len() == before {
            return Err(SchoolStoreError::not_found(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> SchoolRecord {
        SchoolRecord {
            name: name.to_owned(),
            address: "12 Ring Road".to_owned(),
            contact: "+628123456789".to_owned(),
            email: "office@northgate.example".to_owned(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn fetch_all_preserves_insertion_order() {
        let store = InMemorySchoolStore::new();
        store.insert(record("first")).await.expect("insert first");
        store.insert(record("second")).await.expect("insert second");
        store.insert(record("third")).await.expect("insert third");

        let names: Vec<String> = store
            .fetch_all()
            .await
            .expect("fetch all")
            .into_iter()
            .map(|school| school.name)
            .collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn fetch_by_id_returns_the_matching_record() {
        let store = InMemorySchoolStore::new();
        store.insert(record("one")).await.expect("insert");
        let all = store.fetch_all().await.expect("fetch all");
        let id = all.first().expect("one record").id;

        let fetched = store.fetch_by_id(&id.to_string()).await.expect("fetch");
        assert_eq!(fetched.name, "one");
        assert_eq!(fetched.id, id);
    }

    #[tokio::test]
    async fn malformed_ids_are_rejected_by_the_store() {
        let store = InMemorySchoolStore::new();
        let err = store.fetch_by_id("not-a-uuid").await.expect_err("must fail");
        assert_eq!(err, SchoolStoreError::invalid_id("not-a-uuid"));
    }

    #[tokio::test]
    async fn replace_keeps_the_id_and_swaps_every_field() {
        let store = InMemorySchoolStore::new();
        store.insert(record("before")).await.expect("insert");
        let id = store.fetch_all().await.expect("fetch")[0].id;

        let mut replacement = record("after");
        replacement.address = "1 New Street".to_owned();
        store
            .replace_by_id(&id.to_string(), replacement)
            .await
            .expect("replace");

        let updated = store.fetch_by_id(&id.to_string()).await.expect("fetch");
        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "after");
        assert_eq!(updated.address, "1 New Street");
    }

    #[tokio::test]
    async fn replace_of_unknown_id_reports_not_found() {
        let store = InMemorySchoolStore::new();
        let id = Uuid::new_v4().to_string();
        let err = store
            .replace_by_id(&id, record("ghost"))
            .await
            .expect_err("must fail");
        assert_eq!(err, SchoolStoreError::not_found(id));
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_record() {
        let store = InMemorySchoolStore::new();
        store.insert(record("keep")).await.expect("insert");
        store.insert(record("drop")).await.expect("insert");
        let id = store.fetch_all().await.expect("fetch")[1].id;

        store.delete_by_id(&id.to_string()).await.expect("delete");

        let remaining = store.fetch_all().await.expect("fetch");
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "keep");
    }

    #[tokio::test]
    async fn delete_of_unknown_id_reports_not_found() {
        let store = InMemorySchoolStore::new();
        let id = Uuid::new_v4().to_string();
        let err = store.delete_by_id(&id).await.expect_err("must fail");
        assert_eq!(err, SchoolStoreError::not_found(id));
    }
}
