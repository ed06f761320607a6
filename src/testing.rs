//! In-memory fakes shared by the unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use crate::commands::{HttpRequest, Transport};
use crate::config::BackendConfig;
use crate::error::FetchError;
use crate::models::ReorderRequest;
use crate::sync::Notifier;

pub fn config() -> BackendConfig {
    BackendConfig::new("https://shop.example/").unwrap()
}

/// Records every request and answers from a queue of canned responses.
/// An empty queue answers `[]`.
#[derive(Default)]
pub struct RecordingTransport {
    requests: RefCell<Vec<HttpRequest>>,
    responses: RefCell<VecDeque<Result<String, FetchError>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, response: Result<&str, FetchError>) {
        self.responses
            .borrow_mut()
            .push_back(response.map(str::to_string));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn bodies(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .filter_map(|r| r.body.clone())
            .collect()
    }
}

#[async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<String, FetchError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok("[]".to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Saved(ReorderRequest),
    Failed(FetchError),
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn saved(&self, request: &ReorderRequest) {
        self.notices.borrow_mut().push(Notice::Saved(request.clone()));
    }

    fn failed(&self, err: &FetchError) {
        self.notices.borrow_mut().push(Notice::Failed(err.clone()));
    }
}
