use leptos::*;

use crate::domain::{
    market_data::{Coin, Currency, DayRange, Selection},
    state::FetchState,
};

/// Reactive dashboard state, created by `App` and dropped with it.
#[derive(Clone, Copy)]
pub struct DashboardSignals {
    pub coin: RwSignal<Coin>,
    pub currency: RwSignal<Currency>,
    pub range: RwSignal<DayRange>,
    pub fetch_state: RwSignal<FetchState>,
    /// Bumped on window resize so charts repaint at the new width
    pub viewport_epoch: RwSignal<u32>,
}

impl DashboardSignals {
    pub fn new(defaults: Selection) -> Self {
        Self {
            coin: create_rw_signal(defaults.coin),
            currency: create_rw_signal(defaults.currency),
            range: create_rw_signal(defaults.range),
            fetch_state: create_rw_signal(FetchState::default()),
            viewport_epoch: create_rw_signal(0),
        }
    }

    /// Tracked read of the current selection
    pub fn selection(&self) -> Selection {
        Selection::new(self.coin.get(), self.currency.get(), self.range.get())
    }

    /// Currency symbol of the data on screen, falling back to the selection
    pub fn data_symbol(&self) -> &'static str {
        self.fetch_state
            .with(|s| s.source.as_ref().map(|key| key.currency))
            .unwrap_or_else(|| self.currency.get())
            .symbol()
    }
}
