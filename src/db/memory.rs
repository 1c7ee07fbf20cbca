// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process repository backed by a `Vec`.

use std::sync::RwLock;

use crate::db::{Record, Repository};
use crate::error::AppError;

struct Inner<T> {
    /// Identifier handed to the next append. Never reused.
    next_id: u64,
    records: Vec<T>,
}

/// Vec-backed repository. Identifier assignment and the append happen under
/// one write lock, so concurrent appends never share an identifier.
pub struct MemoryRepository<T> {
    collection: &'static str,
    inner: RwLock<Inner<T>>,
}

impl<T: Record> MemoryRepository<T> {
    pub fn new(collection: &'static str) -> Self {
        Self::with_records(collection, Vec::new())
    }

    /// Repository pre-filled with `records`; new identifiers continue after
    /// the highest existing one.
    pub fn with_records(collection: &'static str, records: Vec<T>) -> Self {
        let next_id = records.iter().map(Record::id).max().unwrap_or(0) + 1;
        Self {
            collection,
            inner: RwLock::new(Inner { next_id, records }),
        }
    }

    fn poisoned(&self) -> AppError {
        AppError::Database(format!("{} collection lock poisoned", self.collection))
    }
}

impl<T: Record> Repository<T> for MemoryRepository<T> {
    fn list(&self) -> Result<Vec<T>, AppError> {
        let inner = self.inner.read().map_err(|_| self.poisoned())?;
        Ok(inner.records.clone())
    }

    fn get_by_id(&self, id: u64) -> Result<Option<T>, AppError> {
        self.find_first(&|record: &T| record.id() == id)
    }

    fn find_first(
        &self,
        predicate: &(dyn Fn(&T) -> bool + Send + Sync),
    ) -> Result<Option<T>, AppError> {
        let inner = self.inner.read().map_err(|_| self.poisoned())?;
        Ok(inner.records.iter().find(|r| predicate(r)).cloned())
    }

    fn append(&self, draft: T::Draft) -> Result<T, AppError> {
        let mut inner = self.inner.write().map_err(|_| self.poisoned())?;
        let record = T::from_draft(inner.next_id, draft);
        inner.next_id += 1;
        inner.records.push(record.clone());
        tracing::debug!(
            collection = self.collection,
            id = record.id(),
            "Record appended"
        );
        Ok(record)
    }

    fn len(&self) -> Result<usize, AppError> {
        let inner = self.inner.read().map_err(|_| self.poisoned())?;
        Ok(inner.records.len())
    }
}
