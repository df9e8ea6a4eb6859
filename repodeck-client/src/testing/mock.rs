//! Scripted transport for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::transport::{ApiRequest, ApiResponse, Transport, TransportError};

/// Transport that replays queued responses in order and records every
/// request it receives.
///
/// When the queue runs dry, `send` fails with a transport error so an
/// unexpected extra request shows up in test results.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response
    pub fn push(&self, response: ApiResponse) {
        self.lock_responses().push_back(Ok(response));
    }

    /// Queue a transport failure
    pub fn push_error(&self, message: &str) {
        self.lock_responses()
            .push_back(Err(TransportError::new(message)));
    }

    /// All requests received so far, oldest first
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .expect("mock request log poisoned")
            .clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("mock request log poisoned").len()
    }

    /// Number of queued responses not yet consumed
    pub fn remaining(&self) -> usize {
        self.lock_responses().len()
    }

    fn lock_responses(
        &self,
    ) -> std::sync::MutexGuard<'_, VecDeque<Result<ApiResponse, TransportError>>> {
        self.responses.lock().expect("mock response queue poisoned")
    }
}

impl Transport for MockTransport {
    fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = request.url.clone();
        self.requests
            .lock()
            .expect("mock request log poisoned")
            .push(request);

        let next = self.lock_responses().pop_front();
        match next {
            Some(Ok(mut response)) => {
                response.url = url;
                Ok(response)
            }
            Some(Err(err)) => Err(err),
            None => Err(TransportError::new(format!(
                "no scripted response for {}",
                url
            ))),
        }
    }
}
