//! Leptos components. Reads `FetchState` through signals; never touches the pipeline internals.

pub mod app;
pub mod charts;
pub mod state;

pub use app::App;
pub use state::DashboardSignals;
