use std::rc::Rc;

use crate::domain::errors::DashboardError;
use crate::domain::market_data::{ChartRecord, RawSeriesResponse, RequestKey};

/// Pipeline lifecycle. Superseded requests are not a phase; they finish as `FetchOutcome::Stale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelinePhase {
    #[default]
    Idle,
    Loading,
    Ready,
}

/// Everything the presentation layer reads. Payload and records are replaced, never merged.
#[derive(Debug, Clone, Default)]
pub struct FetchState {
    pub data: Option<Rc<RawSeriesResponse>>,
    /// Request that produced `data`
    pub source: Option<RequestKey>,
    pub records: Rc<Vec<ChartRecord>>,
    pub loading: bool,
    pub error: Option<DashboardError>,
    pub phase: PipelinePhase,
}

impl FetchState {
    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }
}
