// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity Feed: a GraphQL API over in-memory users and activities.
//!
//! Queries and mutations are served over HTTP; `userAdded` and
//! `activityAdded` subscriptions stream new records over WebSocket.

pub mod config;
pub mod db;
pub mod error;
pub mod graphql;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::Store;
use graphql::AppSchema;
use services::{EventBus, FeedService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub feed: FeedService,
    pub schema: AppSchema,
}

impl AppState {
    /// Build the store, event bus and schema described by `config`.
    pub fn new(config: Config) -> Self {
        let store = if config.seed_data {
            Store::seeded()
        } else {
            Store::in_memory()
        };
        let feed = FeedService::new(store, EventBus::new());
        let schema = graphql::build_schema(feed.clone());

        Self {
            config,
            feed,
            schema,
        }
    }
}
