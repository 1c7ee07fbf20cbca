// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! GraphQL schema for the activity feed.
//!
//! - [`QueryRoot`]: `users`, `user`, `activities`, `activity`
//! - [`MutationRoot`]: `addUser`, `addActivity`
//! - [`SubscriptionRoot`]: `userAdded`, `activityAdded` (WebSocket)

mod mutation;
mod query;
mod subscription;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use subscription::SubscriptionRoot;

use crate::services::FeedService;
use async_graphql::Schema;

/// Full schema type served at `/graphql`.
pub type AppSchema = Schema<QueryRoot, MutationRoot, SubscriptionRoot>;

/// Build the schema with the feed service as resolver data.
pub fn build_schema(feed: FeedService) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, SubscriptionRoot)
        .data(feed)
        .finish()
}
