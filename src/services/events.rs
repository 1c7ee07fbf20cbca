// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process publish/subscribe bus.
//!
//! Each listener owns an unbounded channel registered under its topic.
//! Publishing clones the event into every channel currently registered on
//! that topic; nothing is buffered for listeners that register later.
//! A [`Subscription`] deregisters itself when dropped, which is what happens
//! when a WebSocket client disconnects and the transport drops the stream.

use std::collections::HashMap;
use std::fmt;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

use dashmap::DashMap;
use futures_util::Stream;
use tokio::sync::mpsc;

use crate::models::{Activity, User};

/// Named event category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    UserAdded,
    ActivityAdded,
}

impl Topic {
    pub fn as_str(self) -> &'static str {
        match self {
            Topic::UserAdded => "USER_ADDED",
            Topic::ActivityAdded => "ACTIVITY_ADDED",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload published on the bus. The variant determines the topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    UserAdded(User),
    ActivityAdded(Activity),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::UserAdded(_) => Topic::UserAdded,
            Event::ActivityAdded(_) => Topic::ActivityAdded,
        }
    }
}

type ListenerId = u64;
type Registry = DashMap<Topic, HashMap<ListenerId, mpsc::UnboundedSender<Event>>>;

#[derive(Default)]
struct Shared {
    topics: Registry,
    next_listener: AtomicU64,
}

/// Topic-keyed fan-out registry. Cloning shares the registry.
#[derive(Clone, Default)]
pub struct EventBus {
    shared: Arc<Shared>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` to every listener registered on its topic right now.
    ///
    /// Returns the number of listeners the event was handed to. With no
    /// listeners the event is dropped.
    pub fn publish(&self, event: Event) -> usize {
        let topic = event.topic();
        let Some(listeners) = self.shared.topics.get(&topic) else {
            tracing::debug!(%topic, "No listeners, event dropped");
            return 0;
        };

        let delivered = listeners
            .values()
            .filter(|tx| tx.send(event.clone()).is_ok())
            .count();
        tracing::debug!(%topic, delivered, "Event published");
        delivered
    }

    /// Register a new listener on `topic`.
    ///
    /// The returned handle yields events published after this call, in
    /// publication order, until it is dropped.
    pub fn subscribe(&self, topic: Topic) -> Subscription {
        let id = self.shared.next_listener.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = mpsc::unbounded_channel();
        self.shared.topics.entry(topic).or_default().insert(id, tx);
        tracing::debug!(%topic, listener = id, "Listener registered");

        Subscription {
            shared: self.shared.clone(),
            topic,
            id,
            rx,
        }
    }

    /// Number of listeners currently registered on `topic`.
    pub fn listener_count(&self, topic: Topic) -> usize {
        self.shared
            .topics
            .get(&topic)
            .map(|listeners| listeners.len())
            .unwrap_or(0)
    }

    /// Number of listeners registered across all topics.
    pub fn total_listeners(&self) -> usize {
        self.shared
            .topics
            .iter()
            .map(|listeners| listeners.len())
            .sum()
    }
}

/// Listener handle: a never-ending stream of events for one topic.
pub struct Subscription {
    shared: Arc<Shared>,
    topic: Topic,
    id: ListenerId,
    rx: mpsc::UnboundedReceiver<Event>,
}

impl Subscription {
    pub fn topic(&self) -> Topic {
        self.topic
    }

    /// Deregister now. Equivalent to dropping the handle.
    pub fn unsubscribe(self) {}
}

impl Stream for Subscription {
    type Item = Event;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Event>> {
        // The registry holds our sender until drop, so the channel never closes
        // while the handle is alive.
        self.rx.poll_recv(cx)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        // The shard guard must be released before `remove_if` touches the same shard.
        if let Some(mut listeners) = self.shared.topics.get_mut(&self.topic) {
            listeners.remove(&self.id);
        }
        self.shared
            .topics
            .remove_if(&self.topic, |_, listeners| listeners.is_empty());
        tracing::debug!(topic = %self.topic, listener = self.id, "Listener released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::{FutureExt, StreamExt};

    fn user(id: u64, username: &str) -> User {
        User {
            id,
            username: username.to_string(),
            email: format!("{}@example.com", username),
        }
    }

    #[tokio::test]
    async fn test_publish_reaches_every_listener_in_order() {
        let bus = EventBus::new();
        let mut a = bus.subscribe(Topic::UserAdded);
        let mut b = bus.subscribe(Topic::UserAdded);

        assert_eq!(bus.publish(Event::UserAdded(user(1, "one"))), 2);
        assert_eq!(bus.publish(Event::UserAdded(user(2, "two"))), 2);

        for sub in [&mut a, &mut b] {
            assert_eq!(sub.next().await, Some(Event::UserAdded(user(1, "one"))));
            assert_eq!(sub.next().await, Some(Event::UserAdded(user(2, "two"))));
        }
    }

    #[tokio::test]
    async fn test_publish_without_listeners_is_dropped() {
        let bus = EventBus::new();
        assert_eq!(bus.publish(Event::UserAdded(user(1, "early"))), 0);

        let mut late = bus.subscribe(Topic::UserAdded);
        assert!(late.next().now_or_never().is_none());

        bus.publish(Event::UserAdded(user(2, "later")));
        assert_eq!(late.next().await, Some(Event::UserAdded(user(2, "later"))));
    }

    #[tokio::test]
    async fn test_topics_are_isolated() {
        let bus = EventBus::new();
        let mut activities = bus.subscribe(Topic::ActivityAdded);

        assert_eq!(bus.publish(Event::UserAdded(user(1, "one"))), 0);
        assert!(activities.next().now_or_never().is_none());
        assert_eq!(activities.topic(), Topic::ActivityAdded);
    }

    #[test]
    fn test_drop_releases_registration() {
        let bus = EventBus::new();
        let a = bus.subscribe(Topic::UserAdded);
        let b = bus.subscribe(Topic::UserAdded);
        let c = bus.subscribe(Topic::ActivityAdded);
        assert_eq!(bus.listener_count(Topic::UserAdded), 2);
        assert_eq!(bus.total_listeners(), 3);
        drop(c);

        drop(a);
        assert_eq!(bus.listener_count(Topic::UserAdded), 1);

        b.unsubscribe();
        assert_eq!(bus.listener_count(Topic::UserAdded), 0);
        assert!(bus.shared.topics.is_empty());
        assert_eq!(bus.publish(Event::UserAdded(user(1, "gone"))), 0);
    }

    #[test]
    fn test_topic_names() {
        assert_eq!(Topic::UserAdded.to_string(), "USER_ADDED");
        assert_eq!(Topic::ActivityAdded.to_string(), "ACTIVITY_ADDED");
    }
}
