use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::Error;

use super::RawRpc;

/// A canned transport for facade tests. Records every `(method, params)`
/// pair and replays queued responses in order; once the queue is empty
/// every call answers `null`.
pub(crate) struct MockTransport {
    calls: Mutex<Vec<(String, Vec<serde_json::Value>)>>,
    responses: Mutex<VecDeque<Result<serde_json::Value, Error>>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            responses: Mutex::new(VecDeque::new()),
        }
    }

    pub(crate) fn with_response(self, response: Result<serde_json::Value, Error>) -> Self {
        self.responses
            .lock()
            .expect("mock response queue poisoned")
            .push_back(response);
        self
    }

    pub(crate) fn calls(&self) -> Vec<(String, Vec<serde_json::Value>)> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }
}

#[async_trait]
impl RawRpc for MockTransport {
    async fn raw_call(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<serde_json::Value, Error> {
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .push((method.to_owned(), params));
        self.responses
            .lock()
            .expect("mock response queue poisoned")
            .pop_front()
            .unwrap_or(Ok(serde_json::Value::Null))
    }
}
