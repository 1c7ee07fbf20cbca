// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_graphql::{Context, Object, Result, ResultExt, ID};

use crate::models::{Activity, User};
use crate::services::FeedService;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All users in insertion order
    async fn users(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<User>>>> {
        let feed = ctx.data::<FeedService>()?;
        Ok(Some(feed.users().extend()?.into_iter().map(Some).collect()))
    }

    /// First user with the given username
    async fn user(&self, ctx: &Context<'_>, username: String) -> Result<Option<User>> {
        let feed = ctx.data::<FeedService>()?;
        feed.user(&username).extend()
    }

    /// All activities in insertion order
    async fn activities(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Activity>>>> {
        let feed = ctx.data::<FeedService>()?;
        Ok(Some(feed.activities().extend()?.into_iter().map(Some).collect()))
    }

    /// Activity by id; `null` when the id is unknown or not numeric
    async fn activity(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Activity>> {
        let feed = ctx.data::<FeedService>()?;
        feed.activity(&id).extend()
    }
}
