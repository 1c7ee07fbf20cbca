// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! GraphQL endpoint.
//!
//! `POST /graphql` runs queries and mutations. A WebSocket upgrade on
//! `GET /graphql` opens a subscription connection (`graphql-transport-ws` or
//! the legacy `graphql-ws` protocol). `GET /` serves the GraphiQL IDE.

use crate::config::GRAPHQL_PATH;
use crate::graphql::AppSchema;
use crate::AppState;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse, GraphQLSubscription};
use axum::{
    extract::State,
    response::Html,
    routing::{get, get_service},
    Router,
};
use std::sync::Arc;

/// GraphQL routes.
pub fn routes(schema: AppSchema) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            GRAPHQL_PATH,
            get_service(GraphQLSubscription::new(schema)).post(graphql_handler),
        )
        .route("/", get(graphiql))
}

/// Execute a query or mutation.
async fn graphql_handler(
    State(state): State<Arc<AppState>>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let request = req.into_inner();
    tracing::debug!(operation = ?request.operation_name, "Executing GraphQL request");

    let response = state.schema.execute(request).await;
    if response.is_err() {
        tracing::warn!(errors = ?response.errors, "GraphQL request failed");
    }
    response.into()
}

/// GraphiQL IDE, wired to the HTTP and WebSocket endpoints.
async fn graphiql() -> Html<String> {
    Html(
        GraphiQLSource::build()
            .endpoint(GRAPHQL_PATH)
            .subscription_endpoint(GRAPHQL_PATH)
            .finish(),
    )
}
