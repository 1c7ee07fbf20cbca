// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.
//!
//! Missing records are not errors: lookups return `Option` and GraphQL renders
//! `None` as `null`. Malformed documents and arguments never reach this layer;
//! the execution engine rejects them.

use async_graphql::ErrorExtensions;

/// Application error type that converts to GraphQL errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    /// Machine-readable code placed in the GraphQL error `extensions`.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "DATABASE_ERROR",
        }
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        let message = match self {
            AppError::Database(msg) => {
                tracing::error!(error = %msg, "Database error");
                "Internal server error"
            }
        };

        async_graphql::Error::new(message).extend_with(|_, e| e.set("code", self.code()))
    }
}

/// Result type alias for services
pub type Result<T> = std::result::Result<T, AppError>;
