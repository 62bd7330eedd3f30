//! FanPlot crate root: re-exports and module wiring.
//!
//! Fan charts summarize many simulated trajectories of one variable over
//! time as nested percentile bands. With few trajectories the chart shows
//! individual lines instead. Charts can be compared against a second run,
//! in which case they plot the band-wise difference around a zero baseline.
//!
//! - `data`: percentile records, filters, scales, band geometry, transitions
//! - `chart`: the [`FanChart`] state machine and its hit testing
//! - `chart_set`: one chart per variable, updated together
//! - `context_panel`: floating panel hosting slice detail views
//! - `controllers`: seams to detail views and the state inspector
//! - `panels`: egui rendering of charts, the panel and the default histogram
//! - `app`: standalone demo window

pub mod app;
pub mod chart;
pub mod chart_set;
pub mod config;
pub mod context_panel;
pub mod controllers;
pub mod data;
pub mod error;
pub mod panels;

pub use app::{run_fanplot, DemoOptions, FanPlotApp};
pub use chart::{ChartContext, ChartHit, FanChart};
pub use chart::display_mode::DisplayMode;
pub use chart_set::ChartSet;
pub use config::{ContextPanelConfig, DisplayLimits, FanChartConfig, Margin};
pub use context_panel::ContextPanel;
pub use controllers::{
    DetailView, DetailViewFactory, StateInspector, StateQuery, StateRequestController,
};
pub use data::filters::{Filter, FilterRegistry};
pub use data::percentiles::{Percentile, PercentileRecord, PercentileSeries, Statistics};
pub use data::trajectories::{StateSnapshot, Trajectory, TrajectorySets};
pub use error::FanPlotError;
