// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Subscription delivery through the GraphQL schema.

use activity_feed::config::Config;
use activity_feed::services::Topic;
use activity_feed::AppState;
use futures_util::{FutureExt, StreamExt};
use serde_json::json;

fn test_state() -> AppState {
    AppState::new(Config::test_default())
}

#[tokio::test]
async fn test_user_added_delivers_new_user() {
    let state = test_state();
    let mut stream = state
        .schema
        .execute_stream("subscription { userAdded { id username email } }");

    // Listener registration happens on first poll.
    assert!(stream.next().now_or_never().is_none());
    assert_eq!(state.feed.events().listener_count(Topic::UserAdded), 1);

    let response = state
        .schema
        .execute("mutation { addUser(username: \"alice\", email: \"a@example.com\") { id } }")
        .await;
    assert!(response.is_ok(), "{:?}", response.errors);

    let event = stream.next().await.unwrap();
    assert!(event.is_ok(), "{:?}", event.errors);
    assert_eq!(
        event.data.into_json().unwrap(),
        json!({ "userAdded": { "id": "4", "username": "alice", "email": "a@example.com" } })
    );

    // Exactly one event.
    assert!(stream.next().now_or_never().is_none());
}

#[tokio::test]
async fn test_late_subscriber_gets_no_past_events() {
    let state = test_state();

    // Published with nobody listening.
    state
        .schema
        .execute("mutation { addUser(username: \"early\", email: \"e\") { id } }")
        .await;

    let mut late = state.schema.execute_stream("subscription { userAdded { username } }");
    assert!(late.next().now_or_never().is_none());

    state
        .schema
        .execute("mutation { addUser(username: \"later\", email: \"l\") { id } }")
        .await;

    let event = late.next().await.unwrap();
    assert_eq!(
        event.data.into_json().unwrap(),
        json!({ "userAdded": { "username": "later" } })
    );
    assert!(late.next().now_or_never().is_none());
}

#[tokio::test]
async fn test_activity_added_end_to_end() {
    let state = test_state();
    let mut stream = state
        .schema
        .execute_stream("subscription { activityAdded { id type user } }");
    assert!(stream.next().now_or_never().is_none());

    let response = state
        .schema
        .execute(
            r#"mutation {
                addActivity(
                    time: "09:00", type: "Yoga", distance: "3", calories: "150",
                    bpm: "100", user: "user1", userImage: "img", likes: 0,
                    comments: 0, imageUrl: "img2"
                ) { id }
            }"#,
        )
        .await;
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "addActivity": { "id": "4" } })
    );
    assert_eq!(state.feed.activities().unwrap().len(), 4);

    let event = stream.next().await.unwrap();
    assert_eq!(
        event.data.into_json().unwrap(),
        json!({ "activityAdded": { "id": "4", "type": "Yoga", "user": "user1" } })
    );
}

#[tokio::test]
async fn test_topics_do_not_cross_deliver() {
    let state = test_state();
    let mut users = state.schema.execute_stream("subscription { userAdded { id } }");
    assert!(users.next().now_or_never().is_none());

    state
        .schema
        .execute(
            r#"mutation {
                addActivity(
                    time: "t", type: "Run", distance: "d", calories: "c", bpm: "b",
                    user: "u", userImage: "i", likes: 1, comments: 2, imageUrl: "x"
                ) { id }
            }"#,
        )
        .await;

    assert!(users.next().now_or_never().is_none());
}

#[tokio::test]
async fn test_dropping_subscription_releases_listener() {
    let state = test_state();
    let mut first = state.schema.execute_stream("subscription { activityAdded { id } }");
    let mut second = state.schema.execute_stream("subscription { activityAdded { id } }");
    assert!(first.next().now_or_never().is_none());
    assert!(second.next().now_or_never().is_none());
    assert_eq!(state.feed.events().listener_count(Topic::ActivityAdded), 2);

    drop(first);
    assert_eq!(state.feed.events().listener_count(Topic::ActivityAdded), 1);

    drop(second);
    assert_eq!(state.feed.events().listener_count(Topic::ActivityAdded), 0);
}
