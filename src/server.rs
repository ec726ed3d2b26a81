//! HTTP surface: agent card discovery and task submission

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower::{ServiceBuilder, ServiceExt};
use tower_http::trace::TraceLayer;

use crate::{
    codec::{Codec, JsonCodec},
    layer::{TaskValidationLayer, TaskValidationService},
    maps::MapsClient,
    protocol::{
        agent::AgentDescriptor,
        error::{A2AError, A2AResult},
        task::TaskResponse,
    },
    service::TaskDispatcher,
    tool::ToolRegistry,
    transport::Transport,
};

/// Route of the agent card
pub const AGENT_CARD_ROUTE: &str = "/.well-known/agent.json";
/// Route of the task endpoint
pub const SEND_TASK_ROUTE: &str = "/a2a/tasks/send";

/// Shared state for the handlers
pub struct AppState<T> {
    tasks: TaskValidationService<TaskDispatcher<T>>,
    codec: Arc<dyn Codec>,
    agent: Arc<A2AResult<AgentDescriptor>>,
}

impl<T> AppState<T>
where
    T: Transport + 'static,
{
    /// Assemble the task pipeline around a maps client
    ///
    /// # Arguments
    ///
    /// * `client` - The maps client used by every tool
    /// * `agent` - Outcome of loading the agent card at start-up
    pub fn new(client: MapsClient<T>, agent: A2AResult<AgentDescriptor>) -> Self {
        let codec: Arc<dyn Codec> = Arc::new(JsonCodec);
        let tasks = ServiceBuilder::new()
            .layer(TaskValidationLayer::new(codec.clone()))
            .service(TaskDispatcher::new(client, ToolRegistry::new()));

        Self {
            tasks,
            codec,
            agent: Arc::new(agent),
        }
    }
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> Self {
        Self {
            tasks: self.tasks.clone(),
            codec: self.codec.clone(),
            agent: self.agent.clone(),
        }
    }
}

/// Build the router serving both endpoints
pub fn router<T>(state: AppState<T>) -> Router
where
    T: Transport + 'static,
{
    Router::new()
        .route(AGENT_CARD_ROUTE, get(agent_card::<T>))
        .route(SEND_TASK_ROUTE, post(send_task::<T>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the agent card as loaded at start-up
async fn agent_card<T>(State(state): State<AppState<T>>) -> Response
where
    T: Transport + 'static,
{
    match state.agent.as_ref() {
        Ok(descriptor) => Json(descriptor.document().clone()).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "agent card unavailable");
            internal_error(e)
        }
    }
}

/// Run one task synchronously and answer with its envelope
async fn send_task<T>(State(state): State<AppState<T>>, body: Bytes) -> Response
where
    T: Transport + 'static,
{
    match state.tasks.clone().oneshot(body).await {
        Ok(response) => task_response(state.codec.as_ref(), &response),
        Err(e) if e.is_malformed_request() => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "task pipeline error");
            internal_error(&e)
        }
    }
}

fn task_response(codec: &dyn Codec, response: &TaskResponse) -> Response {
    let status = if response.is_completed() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    match codec.encode_response(response) {
        Ok(body) => (
            status,
            [(header::CONTENT_TYPE, codec.content_type().to_string())],
            body,
        )
            .into_response(),
        Err(e) => internal_error(&e),
    }
}

fn internal_error(error: &A2AError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "Internal Server Error",
            "message": error.to_string(),
        })),
    )
        .into_response()
}
