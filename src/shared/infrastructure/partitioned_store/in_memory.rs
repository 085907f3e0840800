// In memory, owner-partitioned record store.
//
// Purpose
// - Hold every record of the process, grouped by owner and keyed by record id.
//
// Responsibilities
// - One RwLock over the whole partition map: reads share it, writes hold it exclusively.
// - Never hold the lock across more than one primitive operation.
// - Offer atomic check-and-write primitives so callers never need check-then-act.

use crate::shared::core::cancellation::Cancellation;
use crate::shared::infrastructure::partitioned_store::StoreError;
use std::collections::HashMap;
use tokio::sync::RwLock;

type Partition<V> = HashMap<String, V>;

pub struct InMemoryPartitionedStore<V: Clone + Send + Sync + 'static> {
    partitions: RwLock<HashMap<String, Partition<V>>>,
}

impl<V: Clone + Send + Sync + 'static> Default for InMemoryPartitionedStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + Send + Sync + 'static> InMemoryPartitionedStore<V> {
    pub fn new() -> Self {
        Self {
            partitions: RwLock::new(HashMap::new()),
        }
    }

    /// Upsert; creates the owner partition on first write.
    pub async fn set(&self, owner: &str, id: &str, record: V) {
        let mut guard = self.partitions.write().await;
        guard
            .entry(owner.to_string())
            .or_default()
            .insert(id.to_string(), record);
    }

    pub async fn get(&self, owner: &str, id: &str) -> Result<V, StoreError> {
        let guard = self.partitions.read().await;
        guard
            .get(owner)
            .and_then(|partition| partition.get(id))
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    pub async fn exists(&self, owner: &str, id: &str) -> bool {
        let guard = self.partitions.read().await;
        guard
            .get(owner)
            .is_some_and(|partition| partition.contains_key(id))
    }

    /// Snapshot of the owner's partition. An unknown owner yields an empty list.
    pub async fn list(&self, owner: &str) -> Vec<V> {
        let guard = self.partitions.read().await;
        guard
            .get(owner)
            .map(|partition| partition.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Fails only when the owner partition is missing; an absent id inside an
    /// existing partition is a no-op.
    pub async fn delete(&self, owner: &str, id: &str) -> Result<(), StoreError> {
        let mut guard = self.partitions.write().await;
        let partition = guard.get_mut(owner).ok_or(StoreError::NotFound)?;
        partition.remove(id);
        Ok(())
    }

    /// Removes the record and hands it back, or `NotFound` if either key is absent.
    pub async fn remove(&self, owner: &str, id: &str) -> Result<V, StoreError> {
        let mut guard = self.partitions.write().await;
        guard
            .get_mut(owner)
            .and_then(|partition| partition.remove(id))
            .ok_or(StoreError::NotFound)
    }

    /// Overwrites an existing record. Existence check and write share one write lock.
    pub async fn update_if_present(
        &self,
        owner: &str,
        id: &str,
        record: V,
    ) -> Result<(), StoreError> {
        let mut guard = self.partitions.write().await;
        let slot = guard
            .get_mut(owner)
            .and_then(|partition| partition.get_mut(id))
            .ok_or(StoreError::NotFound)?;
        *slot = record;
        Ok(())
    }

    /// Filtered snapshot of the owner's partition. The cancellation signal is
    /// polled before every entry.
    pub async fn scan<F>(
        &self,
        owner: &str,
        cancellation: &Cancellation,
        predicate: F,
    ) -> Result<Vec<V>, StoreError>
    where
        F: Fn(&V) -> bool,
    {
        let guard = self.partitions.read().await;
        let Some(partition) = guard.get(owner) else {
            return Ok(Vec::new());
        };

        let mut matches = Vec::new();
        for record in partition.values() {
            if cancellation.is_cancelled() {
                return Err(StoreError::Cancelled);
            }
            if predicate(record) {
                matches.push(record.clone());
            }
        }
        Ok(matches)
    }
}
