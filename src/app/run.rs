//! Top-level entry point for running the fan chart demo as a native window.

use eframe::egui;

use super::demo_data::RunParams;
use super::fanplot_app::FanPlotApp;
use crate::config::{ContextPanelConfig, FanChartConfig};

/// Everything needed to launch [`run_fanplot`].
pub struct DemoOptions {
    pub title: String,
    pub primary: RunParams,
    /// Run shown against the primary one in comparison mode.
    pub secondary: RunParams,
    pub chart: FanChartConfig,
    pub panel: ContextPanelConfig,
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            title: "Fan Charts".to_string(),
            primary: RunParams::default(),
            secondary: RunParams {
                seed: 11,
                drift: 0.1,
                ..RunParams::default()
            },
            chart: FanChartConfig::default(),
            panel: ContextPanelConfig::default(),
            native_options: None,
        }
    }
}

/// Launch the demo application in a native window.
///
/// Blocks until the window is closed.
pub fn run_fanplot(mut opts: DemoOptions) -> eframe::Result<()> {
    let app = FanPlotApp::new(opts.primary, opts.secondary, opts.chart, opts.panel)
        .map_err(|e| eframe::Error::AppCreation(Box::new(e)))?;

    let mut native = opts
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);
    if native.viewport.inner_size.is_none() {
        native.viewport = native
            .viewport
            .clone()
            .with_inner_size(egui::vec2(1200.0, 900.0));
    }

    eframe::run_native(
        &opts.title,
        native,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
