pub mod http;
pub mod api_client;

#[cfg(test)]
pub mod testing;

pub use http::{BrowserTransport, HttpRequest, HttpResponse, HttpTransport, Method};
pub use api_client::ApiClient;
