// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod events;
pub mod feed;

pub use events::{Event, EventBus, Subscription, Topic};
pub use feed::FeedService;
