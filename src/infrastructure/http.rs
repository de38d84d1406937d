//! HTTP access for the browser, built on gloo-net.

pub mod coingecko_client;

pub use coingecko_client::*;

use futures::FutureExt;
use futures::future::{Either, LocalBoxFuture, select};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use crate::domain::{
    errors::{DashboardError, NetworkResult},
    logging::LogComponent,
};
use crate::{log_debug, log_error};

/// GET-only HTTP client with default headers and a request timeout
#[derive(Clone, Debug)]
pub struct GlooHttpClient {
    default_headers: Vec<(String, String)>,
    timeout_ms: u32,
}

impl Default for GlooHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GlooHttpClient {
    pub fn new() -> Self {
        Self {
            default_headers: vec![("Accept".to_string(), "application/json".to_string())],
            timeout_ms: 15_000,
        }
    }

    pub fn with_timeout(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// GET the body as text. Transport failures, non-2xx statuses and the
    /// timeout all map to `DashboardError::Network`.
    pub fn get_text(&self, url: String) -> LocalBoxFuture<'static, NetworkResult<String>> {
        let headers = self.default_headers.clone();
        let timeout_ms = self.timeout_ms;

        async move {
            log_debug!(LogComponent::Infrastructure("HTTP"), "🌐 GET: {}", url);

            let request = Box::pin(Self::send(url, headers));
            let timeout = Box::pin(TimeoutFuture::new(timeout_ms));
            match select(request, timeout).await {
                Either::Left((result, _)) => result,
                Either::Right(_) => {
                    let msg = format!("request timed out after {} ms", timeout_ms);
                    log_error!(LogComponent::Infrastructure("HTTP"), "⏱️ {}", msg);
                    Err(DashboardError::Network(msg))
                }
            }
        }
        .boxed_local()
    }

    async fn send(url: String, headers: Vec<(String, String)>) -> NetworkResult<String> {
        let mut request = Request::get(&url);
        for (key, value) in &headers {
            request = request.header(key, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DashboardError::Network(format!("Request failed: {e}")))?;

        if !response.ok() {
            let msg = format!("HTTP error: {} - {}", response.status(), response.status_text());
            log_error!(LogComponent::Infrastructure("HTTP"), "{}", msg);
            return Err(DashboardError::Network(msg));
        }

        let text = response
            .text()
            .await
            .map_err(|e| DashboardError::Network(format!("Failed to read response: {e}")))?;

        log_debug!(LogComponent::Infrastructure("HTTP"), "✅ GET response: {} bytes", text.len());
        Ok(text)
    }
}
