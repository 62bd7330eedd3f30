//! Standalone demo window.
//!
//! | Sub-module        | Responsibility |
//! | ----------------- | -------------- |
//! | [`demo_data`]     | Synthetic runs and their percentile statistics |
//! | [`fanplot_app`]   | [`FanPlotApp`] (eframe) wiring charts, filters and the context panel |
//! | [`run`]           | Top-level [`run_fanplot()`] entry point |

pub mod demo_data;
mod fanplot_app;
mod run;

pub use demo_data::RunParams;
pub use fanplot_app::FanPlotApp;
pub use run::{run_fanplot, DemoOptions};
