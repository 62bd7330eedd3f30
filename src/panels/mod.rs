//! egui rendering of fan charts, the context panel and slice detail views.

pub mod context_panel_ui;
pub mod fan_chart_ui;
pub mod slice_histogram;

pub use context_panel_ui::show_context_panel;
pub use fan_chart_ui::show_fan_chart;
pub use slice_histogram::SliceHistogram;
