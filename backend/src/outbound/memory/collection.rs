//! Generic in-memory record collection.
//!
//! Records keep insertion order. Every operation takes the lock once and
//! holds it until it returns, so callers never see a half-applied mutation.

use tokio::sync::RwLock;
use tracing::trace;

use crate::domain::ports::RepositoryError;

/// Ordered, lock-protected sequence of records.
///
/// # Examples
/// ```
/// use books::outbound::memory::Collection;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let numbers = Collection::new("numbers", vec![1, 2, 3]);
/// assert_eq!(numbers.find_one(|n| *n == 2).await, Ok(2));
/// numbers.delete_one(|n| *n == 2).await.unwrap();
/// assert_eq!(numbers.find().await, vec![1, 3]);
/// # });
/// ```
#[derive(Debug)]
pub struct Collection<T> {
    name: &'static str,
    records: RwLock<Vec<T>>,
}

impl<T> Collection<T>
where
    T: Clone + Send + Sync,
{
    /// Create a collection seeded with `records`.
    pub fn new(name: &'static str, records: Vec<T>) -> Self {
        Self {
            name,
            records: RwLock::new(records),
        }
    }

    /// Every record in insertion order.
    pub async fn find(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    /// First record satisfying `predicate`.
    pub async fn find_one<P>(&self, predicate: P) -> Result<T, RepositoryError>
    where
        P: Fn(&T) -> bool,
    {
        self.records
            .read()
            .await
            .iter()
            .find(|record| predicate(record))
            .cloned()
            .ok_or(RepositoryError::NoMatch)
    }

    /// Append `record` and hand it back. No uniqueness check is made.
    pub async fn insert_one(&self, record: T) -> T {
        let mut records = self.records.write().await;
        records.push(record.clone());
        trace!(collection = self.name, len = records.len(), "record inserted");
        record
    }

    /// Replace the first record satisfying `predicate` and return the old one.
    pub async fn update_one<P>(&self, predicate: P, record: T) -> Result<T, RepositoryError>
    where
        P: Fn(&T) -> bool,
    {
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|existing| predicate(existing))
            .ok_or(RepositoryError::NoMatch)?;
        let previous = std::mem::replace(slot, record);
        trace!(collection = self.name, "record updated");
        Ok(previous)
    }

    /// Remove the first record satisfying `predicate`.
    pub async fn delete_one<P>(&self, predicate: P) -> Result<(), RepositoryError>
    where
        P: Fn(&T) -> bool,
    {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|record| predicate(record))
            .ok_or(RepositoryError::NoMatch)?;
        records.remove(index);
        trace!(collection = self.name, len = records.len(), "record deleted");
        Ok(())
    }
}
