//! Scripted transport for tests: replies are queued up front and every
//! request is recorded.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::errors::ApiError;
use crate::services::http::{HttpRequest, HttpResponse, HttpTransport};

#[derive(Clone, Default)]
pub struct ScriptedTransport {
    replies: Rc<RefCell<VecDeque<Result<HttpResponse, ApiError>>>>,
    requests: Rc<RefCell<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.replies.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn fail(&self, error: ApiError) {
        self.replies.borrow_mut().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted reply".into())))
    }
}
