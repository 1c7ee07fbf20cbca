// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_graphql::{Context, Result, Subscription};
use futures_util::{Stream, StreamExt};

use crate::models::{Activity, User};
use crate::services::FeedService;

pub struct SubscriptionRoot;

#[Subscription]
impl SubscriptionRoot {
    /// Users added after the subscription starts
    async fn user_added(&self, ctx: &Context<'_>) -> Result<impl Stream<Item = Option<User>>> {
        let feed = ctx.data::<FeedService>()?;
        Ok(feed.user_added().map(Some))
    }

    /// Activities added after the subscription starts
    async fn activity_added(
        &self,
        ctx: &Context<'_>,
    ) -> Result<impl Stream<Item = Option<Activity>>> {
        let feed = ctx.data::<FeedService>()?;
        Ok(feed.activity_added().map(Some))
    }
}
