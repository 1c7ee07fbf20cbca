// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity feed model for storage and API.

use async_graphql::{ComplexObject, SimpleObject, ID};
use serde::{Deserialize, Serialize};

use crate::db::Record;

/// Activity feed entry.
///
/// The metric fields are free text and `user` is a username that is not
/// checked against the user collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[graphql(complex)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Store-assigned identifier
    #[graphql(skip)]
    pub id: u64,
    /// Time of day, e.g. "07:00"
    pub time: String,
    /// Sport (Pilates, Ciclismo, ...)
    #[graphql(name = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub distance: String,
    pub calories: String,
    /// Heart rate
    pub bpm: String,
    /// Username of the owner
    pub user: String,
    /// Owner avatar URL
    pub user_image: String,
    pub likes: i32,
    pub comments: i32,
    pub image_url: String,
}

#[ComplexObject]
impl Activity {
    /// Identifier, exposed as a GraphQL `ID`.
    #[graphql(name = "id")]
    async fn graphql_id(&self) -> ID {
        ID(self.id.to_string())
    }
}

/// Fields supplied by `addActivity`.
#[derive(Debug, Clone)]
pub struct NewActivity {
    pub time: String,
    pub kind: String,
    pub distance: String,
    pub calories: String,
    pub bpm: String,
    pub user: String,
    pub user_image: String,
    pub likes: i32,
    pub comments: i32,
    pub image_url: String,
}

impl Record for Activity {
    type Draft = NewActivity;

    fn id(&self) -> u64 {
        self.id
    }

    fn from_draft(id: u64, draft: NewActivity) -> Self {
        Self {
            id,
            time: draft.time,
            kind: draft.kind,
            distance: draft.distance,
            calories: draft.calories,
            bpm: draft.bpm,
            user: draft.user,
            user_image: draft.user_image,
            likes: draft.likes,
            comments: draft.comments,
            image_url: draft.image_url,
        }
    }
}
