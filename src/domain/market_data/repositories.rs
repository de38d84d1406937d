use futures::future::LocalBoxFuture;

use super::entities::RawSeriesResponse;
use super::value_objects::RequestKey;
use crate::domain::errors::NetworkResult;

/// Source of market-chart payloads.
///
/// The returned future must not borrow `self`: the pipeline keeps it alive
/// across selection changes and drives it from the browser event loop.
pub trait MarketChartSource {
    fn fetch_market_chart(&self, key: &RequestKey) -> LocalBoxFuture<'static, NetworkResult<RawSeriesResponse>>;
}

impl<S: MarketChartSource + ?Sized> MarketChartSource for std::rc::Rc<S> {
    fn fetch_market_chart(&self, key: &RequestKey) -> LocalBoxFuture<'static, NetworkResult<RawSeriesResponse>> {
        (**self).fetch_market_chart(key)
    }
}
