// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! User model for storage and API.

use async_graphql::{ComplexObject, SimpleObject, ID};
use serde::{Deserialize, Serialize};

use crate::db::Record;

/// Registered user. Usernames and emails are not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[graphql(complex)]
pub struct User {
    /// Store-assigned identifier
    #[graphql(skip)]
    pub id: u64,
    pub username: String,
    pub email: String,
}

#[ComplexObject]
impl User {
    /// Identifier, exposed as a GraphQL `ID`.
    #[graphql(name = "id")]
    async fn graphql_id(&self) -> ID {
        ID(self.id.to_string())
    }
}

/// Fields supplied by `addUser`.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

impl Record for User {
    type Draft = NewUser;

    fn id(&self) -> u64 {
        self.id
    }

    fn from_draft(id: u64, draft: NewUser) -> Self {
        Self {
            id,
            username: draft.username,
            email: draft.email,
        }
    }
}
