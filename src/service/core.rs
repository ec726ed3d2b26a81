//! Task dispatcher service

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use tower_service::Service;

use crate::{
    maps::MapsClient,
    protocol::{
        error::A2AError,
        task::{TaskError, TaskResponse},
    },
    service::ValidatedTask,
    tool::ToolRegistry,
    transport::Transport,
};

/// Core service that runs a validated task to completion
///
/// Resolves the tool, invokes its adapter and wraps the outcome in a task
/// response. Every tool failure becomes a `failed` response, so the service
/// itself never returns an error for a validated task.
pub struct TaskDispatcher<T> {
    client: Arc<MapsClient<T>>,
    registry: Arc<ToolRegistry>,
}

impl<T> TaskDispatcher<T>
where
    T: Transport + 'static,
{
    /// Create a new task dispatcher
    ///
    /// # Arguments
    ///
    /// * `client` - The maps client shared by all tasks
    /// * `registry` - The tool registry, built once at start-up
    pub fn new(client: MapsClient<T>, registry: ToolRegistry) -> Self {
        Self {
            client: Arc::new(client),
            registry: Arc::new(registry),
        }
    }

    /// Get the maps client
    pub fn client(&self) -> &MapsClient<T> {
        &self.client
    }

    async fn dispatch(
        client: Arc<MapsClient<T>>,
        registry: Arc<ToolRegistry>,
        task: ValidatedTask,
    ) -> TaskResponse {
        let ValidatedTask {
            request,
            invocation,
        } = task;

        tracing::info!(
            task_id = %request.task_id,
            tool = %invocation.tool_name,
            "received task"
        );

        let outcome = match registry.resolve(&invocation.tool_name) {
            Ok(tool) => tool.invoke(&client, invocation.arguments).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(result) => {
                tracing::info!(
                    task_id = %request.task_id,
                    tool = %invocation.tool_name,
                    "task completed"
                );
                TaskResponse::completed(request, result)
            }
            Err(e) => {
                tracing::warn!(
                    task_id = %request.task_id,
                    tool = %invocation.tool_name,
                    error = %e,
                    "task failed"
                );
                TaskResponse::failed(request, TaskError::from(&e))
            }
        }
    }
}

impl<T> Service<ValidatedTask> for TaskDispatcher<T>
where
    T: Transport + 'static,
{
    type Response = TaskResponse;
    type Error = A2AError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, task: ValidatedTask) -> Self::Future {
        let client = self.client.clone();
        let registry = self.registry.clone();

        Box::pin(async move { Ok(Self::dispatch(client, registry, task).await) })
    }
}

impl<T> Clone for TaskDispatcher<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            registry: self.registry.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use tokio_test::assert_ready_ok;

    use crate::{
        protocol::{message::Message, task::ToolInvocation, TaskRequest, TaskStatus},
        transport::mock::StubTransport,
    };

    use super::*;

    fn task(tool_name: &str, arguments: Value) -> ValidatedTask {
        let invocation = ToolInvocation::new(tool_name, arguments);
        let request =
            TaskRequest::from_messages("task-123", vec![Message::user(invocation.into_part())])
                .unwrap();
        ValidatedTask::new(request).unwrap()
    }

    fn dispatcher(body: Value) -> TaskDispatcher<StubTransport> {
        TaskDispatcher::new(
            MapsClient::new(StubTransport::json(body), "k"),
            ToolRegistry::new(),
        )
    }

    #[tokio::test]
    async fn test_dispatch_completed() {
        let mut service = dispatcher(json!({
            "status": "OK",
            "results": [{
                "formatted_address": "1600 Amphitheatre Pkwy, Mountain View, CA",
                "place_id": "abc",
                "geometry": {"location": {"lat": 37.42, "lng": -122.08}}
            }]
        }));

        let request = task("maps_geocode", json!({"address": "1600 Amphitheatre Pkwy"}));
        let messages = request.request.messages.clone();

        let response = service.call(request).await.unwrap();

        assert_eq!(response.task_id, "task-123");
        assert_eq!(response.status, TaskStatus::Completed);
        assert_eq!(response.messages, messages);
        assert!(response.error.is_none());
        assert_eq!(response.artifacts.len(), 1);
        assert_eq!(response.result().unwrap()["place_id"], "abc");
    }

    #[tokio::test]
    async fn test_dispatch_unknown_tool() {
        let mut service = dispatcher(json!({"status": "OK"}));

        let response = service
            .call(task("maps_nonexistent", json!({})))
            .await
            .unwrap();

        assert_eq!(response.status, TaskStatus::Failed);
        assert!(response.artifacts.is_empty());
        assert_eq!(
            response.error.unwrap().message,
            "Unknown tool: maps_nonexistent"
        );
        assert!(service.client().transport().sent().is_empty());
    }

    #[tokio::test]
    async fn test_dispatch_upstream_failure() {
        let mut service = dispatcher(json!({"status": "ZERO_RESULTS", "results": []}));

        let response = service
            .call(task("maps_geocode", json!({"address": "nowhere"})))
            .await
            .unwrap();

        assert!(!response.is_completed());
        assert_eq!(
            response.error.unwrap().message,
            "Geocoding failed: ZERO_RESULTS"
        );
    }

    #[tokio::test]
    async fn test_dispatch_invalid_arguments() {
        let mut service = dispatcher(json!({"status": "OK"}));

        let response = service
            .call(task("maps_elevation", json!({"locations": "everywhere"})))
            .await
            .unwrap();

        assert_eq!(response.status, TaskStatus::Failed);
        assert!(response
            .error
            .unwrap()
            .message
            .starts_with("Invalid arguments for maps_elevation:"));
    }

    #[tokio::test]
    async fn test_always_ready() {
        let mut service = dispatcher(json!({"status": "OK"}));
        let mut cx = Context::from_waker(futures::task::noop_waker_ref());

        assert_ready_ok!(service.poll_ready(&mut cx));
    }
}
