// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Feed service - reads, appends and change notifications for users and
//! activities.
//!
//! The GraphQL resolvers are thin wrappers over these methods.

use std::time::Duration;

use futures_util::{Stream, StreamExt};
use tokio_util::sync::CancellationToken;

use crate::db::Store;
use crate::error::Result;
use crate::models::{Activity, NewActivity, NewUser, User};
use crate::services::events::{Event, EventBus, Topic};

/// How often [`FeedService::drain`] checks for remaining listeners.
const DRAIN_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Store plus event bus. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct FeedService {
    store: Store,
    events: EventBus,
    shutdown: CancellationToken,
}

impl FeedService {
    pub fn new(store: Store, events: EventBus) -> Self {
        Self {
            store,
            events,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    // ─── Shutdown ────────────────────────────────────────────────

    /// End every subscription stream, current and future. The transport sends
    /// `complete` for each and drops it, which releases its listener.
    pub fn shutdown(&self) {
        if !self.shutdown.is_cancelled() {
            tracing::info!(
                listeners = self.events.total_listeners(),
                "Ending subscriptions"
            );
        }
        self.shutdown.cancel();
    }

    /// Shut down subscriptions and wait up to `timeout` for all listeners to be
    /// released. Returns false if some were still registered at the deadline.
    pub async fn drain(&self, timeout: Duration) -> bool {
        self.shutdown();
        let drained = tokio::time::timeout(timeout, async {
            while self.events.total_listeners() > 0 {
                tokio::time::sleep(DRAIN_POLL_INTERVAL).await;
            }
        })
        .await
        .is_ok();

        if !drained {
            tracing::warn!(
                listeners = self.events.total_listeners(),
                "Subscriptions still open after drain timeout"
            );
        }
        drained
    }

    // ─── Users ───────────────────────────────────────────────────

    /// All users in insertion order.
    pub fn users(&self) -> Result<Vec<User>> {
        self.store.users.list()
    }

    /// First user with exactly this username.
    pub fn user(&self, username: &str) -> Result<Option<User>> {
        self.store
            .users
            .find_first(&|user: &User| user.username == username)
    }

    /// Store a new user and notify `userAdded` listeners.
    pub fn add_user(&self, draft: NewUser) -> Result<User> {
        let user = self.store.users.append(draft)?;
        let listeners = self.events.publish(Event::UserAdded(user.clone()));
        tracing::info!(
            user_id = user.id,
            username = %user.username,
            listeners,
            "User added"
        );
        Ok(user)
    }

    // ─── Activities ──────────────────────────────────────────────

    /// All activities in insertion order.
    pub fn activities(&self) -> Result<Vec<Activity>> {
        self.store.activities.list()
    }

    /// Activity by identifier. An id that does not parse as an integer is
    /// treated like an unknown id.
    pub fn activity(&self, id: &str) -> Result<Option<Activity>> {
        match id.trim().parse::<u64>() {
            Ok(id) => self.store.activities.get_by_id(id),
            Err(_) => {
                tracing::debug!(id, "Unparseable activity id");
                Ok(None)
            }
        }
    }

    /// Store a new activity and notify `activityAdded` listeners.
    pub fn add_activity(&self, draft: NewActivity) -> Result<Activity> {
        let activity = self.store.activities.append(draft)?;
        let listeners = self
            .events
            .publish(Event::ActivityAdded(activity.clone()));
        tracing::info!(
            activity_id = activity.id,
            kind = %activity.kind,
            user = %activity.user,
            listeners,
            "Activity added"
        );
        Ok(activity)
    }

    // ─── Subscriptions ───────────────────────────────────────────

    /// Users added from now on. Each call registers its own listener, which is
    /// released when the stream is dropped. The stream ends at shutdown.
    pub fn user_added(&self) -> impl Stream<Item = User> + Send + 'static {
        self.events
            .subscribe(Topic::UserAdded)
            .filter_map(|event| async move {
                match event {
                    Event::UserAdded(user) => Some(user),
                    _ => None,
                }
            })
            .take_until(self.shutdown.clone().cancelled_owned())
    }

    /// Activities added from now on. Same lifecycle as [`Self::user_added`].
    pub fn activity_added(&self) -> impl Stream<Item = Activity> + Send + 'static {
        self.events
            .subscribe(Topic::ActivityAdded)
            .filter_map(|event| async move {
                match event {
                    Event::ActivityAdded(activity) => Some(activity),
                    _ => None,
                }
            })
            .take_until(self.shutdown.clone().cancelled_owned())
    }
}
