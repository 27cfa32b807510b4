// ============================================================================
// HTTP TRANSPORT - Raw request/response, no business logic
// ============================================================================

use crate::errors::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub bearer_token: Option<String>,
    /// Already-serialized JSON body
    pub json_body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            bearer_token: None,
            json_body: None,
        }
    }

    pub fn post_json(url: impl Into<String>, body: String) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            bearer_token: None,
            json_body: Some(body),
        }
    }

    pub fn bearer(mut self, token: &str) -> Self {
        self.bearer_token = Some(token.to_string());
        self
    }

    pub fn authorization_header(&self) -> Option<String> {
        self.bearer_token
            .as_ref()
            .map(|token| format!("Bearer {}", token))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and yields the full response. Non-2xx statuses are
/// NOT errors at this level; only transport failures are.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// `fetch` through gloo-net, raced against a timer. On timeout the request
/// is aborted through its AbortController.
#[derive(Clone, Debug)]
pub struct BrowserTransport {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    timeout_ms: u32,
}

impl BrowserTransport {
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }
}

#[cfg(target_arch = "wasm32")]
impl HttpTransport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        use futures::future::{select, Either};
        use gloo_net::http::Request;
        use gloo_timers::future::TimeoutFuture;

        let controller = web_sys::AbortController::new()
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        let signal = controller.signal();

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        }
        .abort_signal(Some(&signal));

        if let Some(auth) = request.authorization_header() {
            builder = builder.header("Authorization", &auth);
        }

        let built = match request.json_body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Serialize(e.to_string()))?;

        let send = Box::pin(async move {
            let response = built
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = response.status();
            // Body may be empty or non-JSON; decoding is the client's job
            let body = response.text().await.unwrap_or_default();
            Ok::<_, ApiError>(HttpResponse { status, body })
        });
        let timer = Box::pin(TimeoutFuture::new(self.timeout_ms));

        match select(send, timer).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => {
                controller.abort();
                log::warn!("⏱️ [HTTP] {} timed out after {} ms", request.url, self.timeout_ms);
                Err(ApiError::Timeout)
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl HttpTransport for BrowserTransport {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
        Err(ApiError::Network("fetch is only available in the browser".into()))
    }
}
