use std::{path::PathBuf, sync::Arc};

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::errors::{ServiceError, NO_REVISIONS_FOUND, REVISION_NOT_FOUND};
use crate::storage::json_document_store::JsonDocumentStore;

/// One service entry for a car.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Revision {
    pub descricao: String,
    pub custo: f64,
}

/// Car identifier -> revisions in insertion order.
///
/// Keys are free-form strings and are not checked against the car table.
/// A key is present only while its sequence is non-empty.
pub struct RevisionStore {
    store: Arc<JsonDocumentStore<String, Vec<Revision>>>,
}

impl RevisionStore {
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonDocumentStore::new(path).await?;
        Ok(Arc::new(Self { store }))
    }

    /// Append a revision, creating the car's sequence on first use.
    #[instrument(skip(self, revision))]
    pub async fn add(&self, car_id: &str, revision: Revision) -> Result<String, ServiceError> {
        let count = self
            .store
            .update(|doc| {
                let seq = doc.entry(car_id.to_string()).or_default();
                seq.push(revision);
                Ok(seq.len())
            })
            .await?;
        info!(count, "revision added");
        Ok(format!("revisão adicionada para o carro {car_id}"))
    }

    /// All revisions of a car. An unknown car and a car without revisions
    /// both report NotFound.
    pub async fn list(&self, car_id: &str) -> Result<Vec<Revision>, ServiceError> {
        self.store
            .read(|doc| doc.get(car_id).filter(|seq| !seq.is_empty()).cloned())
            .await?
            .ok_or_else(|| ServiceError::not_found(NO_REVISIONS_FOUND))
    }

    /// Overwrite the revision at `index`.
    #[instrument(skip(self, revision))]
    pub async fn update(&self, car_id: &str, index: i64, revision: Revision) -> Result<String, ServiceError> {
        self.store
            .update(|doc| {
                let seq = doc.get_mut(car_id).ok_or_else(|| ServiceError::not_found(REVISION_NOT_FOUND))?;
                let pos = resolve_index(seq.len(), index).ok_or_else(|| ServiceError::not_found(REVISION_NOT_FOUND))?;
                seq[pos] = revision;
                Ok(())
            })
            .await?;
        info!("revision updated");
        Ok(format!("revisão {index} do carro {car_id} atualizada"))
    }

    /// Remove the revision at `index`; drops the car key once its sequence is empty.
    #[instrument(skip(self))]
    pub async fn delete(&self, car_id: &str, index: i64) -> Result<(), ServiceError> {
        let emptied = self
            .store
            .update(|doc| {
                let seq = doc.get_mut(car_id).ok_or_else(|| ServiceError::not_found(REVISION_NOT_FOUND))?;
                let pos = resolve_index(seq.len(), index).ok_or_else(|| ServiceError::not_found(REVISION_NOT_FOUND))?;
                seq.remove(pos);
                let emptied = seq.is_empty();
                if emptied {
                    doc.remove(car_id);
                }
                Ok(emptied)
            })
            .await?;
        info!(emptied, "revision deleted");
        Ok(())
    }
}

/// Map a caller index onto a position. Non-negative indices must be below
/// `len`; negative ones count back from the end (`-1` is the last entry).
fn resolve_index(len: usize, index: i64) -> Option<usize> {
    if index >= 0 {
        let i = usize::try_from(index).ok()?;
        (i < len).then_some(i)
    } else {
        let back = usize::try_from(index.unsigned_abs()).ok()?;
        len.checked_sub(back)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::temp_path;

    fn rev(descricao: &str, custo: f64) -> Revision {
        Revision { descricao: descricao.into(), custo }
    }

    async fn setup_store() -> (Arc<RevisionStore>, PathBuf) {
        let path = temp_path("revisions", "json");
        let store = RevisionStore::new(&path).await.expect("store init");
        (store, path)
    }

    #[test]
    fn resolve_index_checks_upper_bound_and_wraps_negatives() {
        assert_eq!(resolve_index(3, 0), Some(0));
        assert_eq!(resolve_index(3, 2), Some(2));
        assert_eq!(resolve_index(3, 3), None);
        assert_eq!(resolve_index(3, -1), Some(2));
        assert_eq!(resolve_index(3, -3), Some(0));
        assert_eq!(resolve_index(3, -4), None);
        assert_eq!(resolve_index(0, 0), None);
        assert_eq!(resolve_index(0, i64::MIN), None);
    }

    #[tokio::test]
    async fn add_then_list_returns_submitted_revision() {
        let (store, path) = setup_store().await;

        let msg = store.add("X", rev("troca de óleo", 150.0)).await.unwrap();
        assert_eq!(msg, "revisão adicionada para o carro X");

        let list = store.list("X").await.unwrap();
        assert_eq!(list, vec![rev("troca de óleo", 150.0)]);

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn list_unknown_car_is_not_found() {
        let (store, path) = setup_store().await;
        let err = store.list("nope").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref d) if d == NO_REVISIONS_FOUND));
        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn update_overwrites_position_and_rejects_out_of_range() {
        let (store, path) = setup_store().await;
        store.add("7", rev("a", 1.0)).await.unwrap();
        store.add("7", rev("b", 2.0)).await.unwrap();

        let msg = store.update("7", 1, rev("b2", 20.0)).await.unwrap();
        assert_eq!(msg, "revisão 1 do carro 7 atualizada");
        assert_eq!(store.list("7").await.unwrap(), vec![rev("a", 1.0), rev("b2", 20.0)]);

        // negative index addresses from the end
        store.update("7", -2, rev("a2", 10.0)).await.unwrap();
        assert_eq!(store.list("7").await.unwrap()[0], rev("a2", 10.0));

        assert!(matches!(store.update("7", 2, rev("c", 3.0)).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(store.update("8", 0, rev("c", 3.0)).await, Err(ServiceError::NotFound(_))));

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn deleting_last_revision_removes_car_key() {
        let (store, path) = setup_store().await;
        store.add("X", rev("única", 99.9)).await.unwrap();
        store.add("Y", rev("outra", 1.0)).await.unwrap();

        store.delete("X", 0).await.unwrap();
        assert!(matches!(store.list("X").await, Err(ServiceError::NotFound(_))));

        let doc: serde_json::Value = serde_json::from_slice(&tokio::fs::read(&path).await.unwrap()).unwrap();
        assert!(doc.get("X").is_none());
        assert!(doc.get("Y").is_some());

        assert!(matches!(store.delete("X", 0).await, Err(ServiceError::NotFound(_))));

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn delete_keeps_order_of_remaining_entries() {
        let (store, path) = setup_store().await;
        for (i, d) in ["a", "b", "c"].iter().enumerate() {
            store.add("1", rev(d, i as f64)).await.unwrap();
        }

        store.delete("1", 1).await.unwrap();
        let left: Vec<String> = store.list("1").await.unwrap().into_iter().map(|r| r.descricao).collect();
        assert_eq!(left, vec!["a", "c"]);

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn delete_with_negative_index_counts_from_the_end() {
        let (store, path) = setup_store().await;
        for (i, d) in ["a", "b", "c"].iter().enumerate() {
            store.add("1", rev(d, i as f64)).await.unwrap();
        }

        store.delete("1", -1).await.unwrap();
        let left: Vec<String> = store.list("1").await.unwrap().into_iter().map(|r| r.descricao).collect();
        assert_eq!(left, vec!["a", "b"]);

        assert!(matches!(store.delete("1", -3).await, Err(ServiceError::NotFound(ref d)) if d == REVISION_NOT_FOUND));
        assert_eq!(store.list("1").await.unwrap().len(), 2);

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn list_on_unreadable_document_is_a_storage_error() {
        let path = temp_path("revisions_dir", "json");
        tokio::fs::create_dir_all(&path).await.unwrap();
        let store = RevisionStore::new(&path).await.unwrap();

        assert!(matches!(store.list("X").await, Err(ServiceError::Storage(_))));
        assert!(matches!(store.add("X", rev("a", 1.0)).await, Err(ServiceError::Storage(_))));

        let _ = tokio::fs::remove_dir(&path).await;
    }

    #[tokio::test]
    async fn concurrent_adds_to_same_car_are_all_kept() {
        let (store, path) = setup_store().await;

        let a = { let s = Arc::clone(&store); tokio::spawn(async move { s.add("X", rev("a", 1.0)).await }) };
        let b = { let s = Arc::clone(&store); tokio::spawn(async move { s.add("X", rev("b", 2.0)).await }) };
        a.await.unwrap().unwrap();
        b.await.unwrap().unwrap();

        assert_eq!(store.list("X").await.unwrap().len(), 2);

        let _ = tokio::fs::remove_file(&path).await;
    }
}
