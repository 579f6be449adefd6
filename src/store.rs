use async_trait::async_trait;
use dashmap::DashMap;
use ulid::Ulid;

use crate::model::{Booking, Customer, Room};

/// A record that can live in a [`Store`] collection.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> Ulid;
}

impl Entity for Room {
    fn id(&self) -> Ulid {
        self.id
    }
}

impl Entity for Booking {
    fn id(&self) -> Ulid {
        self.id
    }
}

impl Entity for Customer {
    fn id(&self) -> Ulid {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing medium could not complete the operation.
    Unavailable(String),
    NotFound(Ulid),
    Duplicate(Ulid),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Unavailable(reason) => write!(f, "storage unavailable: {reason}"),
            StoreError::NotFound(id) => write!(f, "not found: {id}"),
            StoreError::Duplicate(id) => write!(f, "already exists: {id}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Persistence capability over one entity collection.
///
/// One interface, parameterized by entity type — the same trait serves
/// rooms, bookings, and customers. `fetch_all` carries no ordering
/// guarantee; callers that care about order must sort explicitly.
#[async_trait]
pub trait Store<T: Entity>: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<T>, StoreError>;

    async fn fetch_by_id(&self, id: Ulid) -> Result<Option<T>, StoreError>;

    /// Persist a new record. Fails with [`StoreError::Duplicate`] if the id
    /// is already present.
    async fn insert(&self, entity: T) -> Result<(), StoreError>;

    async fn update(&self, entity: T) -> Result<(), StoreError>;

    async fn delete(&self, id: Ulid) -> Result<(), StoreError>;
}

/// In-process store backed by a concurrent map. Reads clone records out, so
/// a fetched collection is a stable snapshot.
pub struct MemStore<T> {
    entries: DashMap<Ulid, T>,
}

impl<T: Entity> MemStore<T> {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Entity> Default for MemStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Store<T> for MemStore<T> {
    async fn fetch_all(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.entries.iter().map(|e| e.value().clone()).collect())
    }

    async fn fetch_by_id(&self, id: Ulid) -> Result<Option<T>, StoreError> {
        Ok(self.entries.get(&id).map(|e| e.value().clone()))
    }

    async fn insert(&self, entity: T) -> Result<(), StoreError> {
        let id = entity.id();
        if self.entries.contains_key(&id) {
            return Err(StoreError::Duplicate(id));
        }
        self.entries.insert(id, entity);
        Ok(())
    }

    async fn update(&self, entity: T) -> Result<(), StoreError> {
        let id = entity.id();
        if !self.entries.contains_key(&id) {
            return Err(StoreError::NotFound(id));
        }
        self.entries.insert(id, entity);
        Ok(())
    }

    async fn delete(&self, id: Ulid) -> Result<(), StoreError> {
        self.entries
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Customers never touch the allocation core, which makes them a good
    // probe that the store really is generic over entity type.

    #[tokio::test]
    async fn insert_and_fetch() {
        let store = MemStore::new();
        let customer = Customer::new("John Doe", "john@example.com");
        let id = customer.id;
        store.insert(customer.clone()).await.unwrap();

        assert_eq!(store.fetch_by_id(id).await.unwrap(), Some(customer));
        assert_eq!(store.fetch_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn insert_duplicate_rejected() {
        let store = MemStore::new();
        let customer = Customer::new("Jane Smith", "jane@example.com");
        store.insert(customer.clone()).await.unwrap();

        let result = store.insert(customer.clone()).await;
        assert_eq!(result, Err(StoreError::Duplicate(customer.id)));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn update_replaces_record() {
        let store = MemStore::new();
        let mut customer = Customer::new("Bob Johnson", "bob@example.com");
        store.insert(customer.clone()).await.unwrap();

        customer.email = "bob.johnson@example.com".into();
        store.update(customer.clone()).await.unwrap();

        let fetched = store.fetch_by_id(customer.id).await.unwrap().unwrap();
        assert_eq!(fetched.email, "bob.johnson@example.com");
    }

    #[tokio::test]
    async fn update_missing_fails() {
        let store = MemStore::new();
        let customer = Customer::new("Ghost", "ghost@example.com");
        let result = store.update(customer.clone()).await;
        assert_eq!(result, Err(StoreError::NotFound(customer.id)));
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let store = MemStore::new();
        let customer = Customer::new("John Doe", "john@example.com");
        let id = customer.id;
        store.insert(customer).await.unwrap();

        store.delete(id).await.unwrap();
        assert!(store.is_empty());
        assert_eq!(store.delete(id).await, Err(StoreError::NotFound(id)));
    }
}
