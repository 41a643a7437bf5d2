//! In-memory executor for exercising tools without a network.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{ApiError, ApiExecutor, ApiRequest, ApiResult};

/// Records every request and replays queued outcomes in order.
///
/// Running out of queued outcomes yields a transport error, so a test that
/// forgets to queue a response fails loudly instead of hanging.
#[derive(Default)]
pub struct RecordingExecutor {
    outcomes: Mutex<VecDeque<ApiResult<Value>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executor that answers the next call with `value`.
    pub fn replying(value: Value) -> Self {
        let executor = Self::new();
        executor.push_ok(value);
        executor
    }

    /// Executor that fails the next call with `error`.
    pub fn failing(error: ApiError) -> Self {
        let executor = Self::new();
        executor.push_err(error);
        executor
    }

    pub fn push_ok(&self, value: Value) {
        self.outcomes.lock().unwrap().push_back(Ok(value));
    }

    pub fn push_err(&self, error: ApiError) {
        self.outcomes.lock().unwrap().push_back(Err(error));
    }

    /// Requests seen so far.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// The only request seen; panics unless exactly one was made.
    pub fn single_request(&self) -> ApiRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one API request");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait]
impl ApiExecutor for RecordingExecutor {
    async fn execute(&self, request: ApiRequest) -> ApiResult<Value> {
        self.requests.lock().unwrap().push(request);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::transport("no queued response")))
    }
}
