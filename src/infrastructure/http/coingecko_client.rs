use futures::FutureExt;
use futures::future::LocalBoxFuture;

use super::GlooHttpClient;
use crate::config::ApiConfig;
use crate::domain::{
    errors::{DashboardError, NetworkResult},
    logging::LogComponent,
    market_data::{MarketChartSource, RawSeriesResponse, RequestKey},
};
use crate::log_info;

/// CoinGecko `market_chart` client
#[derive(Clone, Debug)]
pub struct CoinGeckoClient {
    base_url: String,
    http: GlooHttpClient,
}

impl CoinGeckoClient {
    pub fn new(api: &ApiConfig) -> Self {
        Self {
            base_url: api.base_url.trim_end_matches('/').to_string(),
            http: GlooHttpClient::new().with_timeout(api.request_timeout_ms),
        }
    }

    pub fn market_chart_url(&self, key: &RequestKey) -> String {
        format!("{}/{}", self.base_url, key)
    }

    /// Body → payload. Malformed JSON or missing series is a `Parse` error.
    pub fn parse_market_chart(body: &str) -> NetworkResult<RawSeriesResponse> {
        serde_json::from_str(body)
            .map_err(|e| DashboardError::Parse(format!("Failed to parse market chart: {e}")))
    }
}

impl MarketChartSource for CoinGeckoClient {
    fn fetch_market_chart(
        &self,
        key: &RequestKey,
    ) -> LocalBoxFuture<'static, NetworkResult<RawSeriesResponse>> {
        let url = self.market_chart_url(key);
        let body = self.http.get_text(url.clone());

        async move {
            log_info!(LogComponent::Infrastructure("CoinGecko"), "📈 Fetching market chart: {}", url);
            let raw = Self::parse_market_chart(&body.await?)?;
            log_info!(
                LogComponent::Infrastructure("CoinGecko"),
                "✅ Loaded {} prices, {} volumes",
                raw.prices.len(),
                raw.total_volumes.len()
            );
            Ok(raw)
        }
        .boxed_local()
    }
}
