// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_graphql::{Context, Object, Result, ResultExt};

use crate::models::{Activity, NewActivity, NewUser, User};
use crate::services::FeedService;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a user and notify `userAdded` subscribers
    async fn add_user(
        &self,
        ctx: &Context<'_>,
        username: String,
        email: String,
    ) -> Result<Option<User>> {
        let feed = ctx.data::<FeedService>()?;
        feed.add_user(NewUser { username, email }).extend().map(Some)
    }

    /// Add an activity and notify `activityAdded` subscribers
    #[allow(clippy::too_many_arguments)]
    async fn add_activity(
        &self,
        ctx: &Context<'_>,
        time: String,
        #[graphql(name = "type")] kind: String,
        distance: String,
        calories: String,
        bpm: String,
        user: String,
        user_image: String,
        likes: i32,
        comments: i32,
        image_url: String,
    ) -> Result<Option<Activity>> {
        let feed = ctx.data::<FeedService>()?;
        let added = feed.add_activity(NewActivity {
            time,
            kind,
            distance,
            calories,
            bpm,
            user,
            user_image,
            likes,
            comments,
            image_url,
        });
        added.extend().map(Some)
    }
}
