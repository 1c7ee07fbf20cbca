// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Database layer.
//!
//! Resolvers only see the [`Repository`] trait, so the in-memory backend can
//! be swapped for a persistent one without touching them.

pub mod memory;
pub mod seed;

use std::sync::Arc;

use crate::error::AppError;
use crate::models::{Activity, User};

pub use memory::MemoryRepository;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    pub const ACTIVITIES: &str = "activities";
}

/// A stored record with a store-assigned identifier.
pub trait Record: Clone + Send + Sync + 'static {
    /// The caller-supplied fields, everything except the identifier.
    type Draft: Send;

    fn id(&self) -> u64;

    fn from_draft(id: u64, draft: Self::Draft) -> Self;
}

/// An ordered collection of records.
pub trait Repository<T: Record>: Send + Sync {
    /// All records in insertion order.
    fn list(&self) -> Result<Vec<T>, AppError>;

    /// Record with the given identifier.
    fn get_by_id(&self, id: u64) -> Result<Option<T>, AppError>;

    /// First record, in insertion order, accepted by `predicate`.
    fn find_first(&self, predicate: &(dyn Fn(&T) -> bool + Send + Sync))
        -> Result<Option<T>, AppError>;

    /// Assign the next identifier to `draft`, store it, and return the record.
    fn append(&self, draft: T::Draft) -> Result<T, AppError>;

    fn len(&self) -> Result<usize, AppError>;

    fn is_empty(&self) -> Result<bool, AppError> {
        Ok(self.len()? == 0)
    }
}

/// One repository per collection.
#[derive(Clone)]
pub struct Store {
    pub users: Arc<dyn Repository<User>>,
    pub activities: Arc<dyn Repository<Activity>>,
}

impl Store {
    /// Empty in-memory store.
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(MemoryRepository::<User>::new(collections::USERS)),
            activities: Arc::new(MemoryRepository::<Activity>::new(collections::ACTIVITIES)),
        }
    }

    /// In-memory store holding the demo users and activities.
    pub fn seeded() -> Self {
        Self {
            users: Arc::new(MemoryRepository::with_records(
                collections::USERS,
                seed::users(),
            )),
            activities: Arc::new(MemoryRepository::with_records(
                collections::ACTIVITIES,
                seed::activities(),
            )),
        }
    }
}
