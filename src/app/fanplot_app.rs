//! Standalone [`FanPlotApp`] (eframe) showing a chart set over demo runs.

use std::sync::mpsc::Receiver;

use eframe::egui;

use super::demo_data::{self, RunParams};
use crate::chart::ChartContext;
use crate::chart_set::ChartSet;
use crate::config::{ContextPanelConfig, FanChartConfig};
use crate::context_panel::ContextPanel;
use crate::controllers::{StateQuery, StateRequestController};
use crate::data::filters::{Filter, FilterRegistry};
use crate::data::percentiles::{Percentile, Statistics};
use crate::data::trajectories::{Trajectory, TrajectorySets};
use crate::error::FanPlotError;
use crate::panels::{show_context_panel, show_fan_chart, SliceHistogram};

pub struct FanPlotApp {
    primary: Vec<Trajectory>,
    secondary: Vec<Trajectory>,
    primary_stats: Statistics,
    secondary_stats: Statistics,
    filters: FilterRegistry,
    sets: TrajectorySets,
    charts: ChartSet,
    panel: ContextPanel,
    inspector: StateRequestController,
    state_rx: Receiver<StateQuery>,
    last_state: Option<StateQuery>,
    comparing: bool,
}

impl FanPlotApp {
    /// Build the app from a primary and a comparator run.
    pub fn new(
        primary: RunParams,
        secondary: RunParams,
        chart_config: FanChartConfig,
        panel_config: ContextPanelConfig,
    ) -> Result<Self, FanPlotError> {
        let primary = demo_data::rollouts(primary);
        let secondary = demo_data::rollouts(secondary);
        let primary_stats = demo_data::statistics(&primary);
        let secondary_stats = demo_data::statistics(&secondary);
        let sets = TrajectorySets::primary(primary.clone()).with_secondary(secondary.clone());
        let charts = ChartSet::from_statistics(&primary_stats, &sets, &chart_config)?;
        let inspector = StateRequestController::new();
        let state_rx = inspector.subscribe();
        Ok(Self {
            primary,
            secondary,
            primary_stats,
            secondary_stats,
            filters: FilterRegistry::new(),
            sets,
            charts,
            panel: ContextPanel::new(panel_config),
            inspector,
            state_rx,
            last_state: None,
            comparing: false,
        })
    }

    /// Recompute the eligible trajectory sets and their statistics from the
    /// active filters. Returns `false` when no primary trajectory survives.
    fn refilter(&mut self) -> bool {
        let primary = self.filters.eligible(&self.primary);
        let secondary = self.filters.eligible(&self.secondary);
        if primary.is_empty() {
            log::warn!("No trajectory passes the active filters; keeping previous statistics");
            return false;
        }
        self.primary_stats = demo_data::statistics(&primary);
        if !secondary.is_empty() {
            self.secondary_stats = demo_data::statistics(&secondary);
        }
        self.sets = TrajectorySets::primary(primary).with_secondary(secondary);
        true
    }

    /// Filter on the first chart's variable at the middle of its populated
    /// steps, keeping trajectories between the 30th and 70th percentile.
    /// Returns whether a filter was added. Call [`Self::refresh`] afterwards.
    pub fn add_sample_filter(&mut self) -> bool {
        let Some(chart) = self.charts.iter().next() else {
            return false;
        };
        let populated: Vec<(usize, f64, f64)> = chart
            .series()
            .iter()
            .enumerate()
            .filter_map(|(step, r)| Some((step, r.get(Percentile::P30)?, r.get(Percentile::P70)?)))
            .collect();
        let Some(&(step, lo, hi)) = populated.get(populated.len() / 2) else {
            log::warn!("'{}' has no populated step to filter on", chart.name());
            return false;
        };
        let filter = Filter::new(chart.name(), step, [lo, hi]);
        log::info!("Adding filter on '{}' at step {}", filter.name, step);
        self.filters.add_filter(filter);
        true
    }

    /// Toggle between band and line rendering on every chart.
    pub fn change_chart_type(&mut self) -> Result<(), FanPlotError> {
        self.apply(Actions {
            toggle_type: true,
            ..Actions::default()
        })
    }

    /// Enter or leave comparison against the secondary run.
    pub fn toggle_comparison(&mut self) -> Result<(), FanPlotError> {
        self.apply(Actions {
            toggle_compare: true,
            ..Actions::default()
        })
    }

    /// Recompute eligible sets and statistics after a filter change and
    /// redraw every chart, staying in comparison mode if it is active.
    pub fn refresh(&mut self) -> Result<(), FanPlotError> {
        self.apply(Actions {
            refresh: true,
            ..Actions::default()
        })
    }

    pub fn charts(&self) -> &ChartSet {
        &self.charts
    }

    pub fn filters(&self) -> &FilterRegistry {
        &self.filters
    }

    pub fn trajectory_sets(&self) -> &TrajectorySets {
        &self.sets
    }

    pub fn primary_statistics(&self) -> &Statistics {
        &self.primary_stats
    }

    pub fn secondary_statistics(&self) -> &Statistics {
        &self.secondary_stats
    }

    pub fn is_comparing(&self) -> bool {
        self.comparing
    }

    fn top_bar(&mut self, ctx: &egui::Context, actions: &mut Actions) {
        egui::TopBottomPanel::top("fanplot_top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.add_enabled_ui(!self.comparing, |ui| {
                    actions.toggle_type = ui.button("Change chart type").clicked();
                });
                let compare_label = if self.comparing {
                    "Back to primary run"
                } else {
                    "Compare runs"
                };
                actions.toggle_compare = ui.button(compare_label).clicked();
                actions.add_filter = ui.button("Add sample filter").clicked();
                if ui.button("Clear filters").clicked() && !self.filters.is_empty() {
                    self.filters.clear();
                    actions.refresh = true;
                }
                ui.separator();
                ui.label(format!(
                    "{} eligible trajectories, {} filters",
                    self.sets.eligible_primary.len(),
                    self.filters.active_filters().len()
                ));
            });
        });
    }

    /// Draw every chart; returns whether a click asked for a full refresh.
    fn charts_ui(&mut self, ctx: &egui::Context) -> bool {
        let Self {
            filters,
            sets,
            charts,
            panel,
            inspector,
            ..
        } = self;
        let mut detail_views = SliceHistogram::create;
        let mut refresh = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                for chart in charts.iter_mut() {
                    ui.label(egui::RichText::new(chart.name()).size(20.0));
                    let mut chart_ctx = ChartContext {
                        trajectories: &*sets,
                        filters: &mut *filters,
                        detail_views: &mut detail_views,
                        panel: &mut *panel,
                        inspector: &mut *inspector,
                        anchor: egui::Rect::NOTHING,
                        request_refresh_all: false,
                    };
                    show_fan_chart(ui, chart, &mut chart_ctx);
                    refresh |= chart_ctx.request_refresh_all;
                    ui.separator();
                }
            });
        });
        refresh
    }

    fn apply(&mut self, actions: Actions) -> Result<(), FanPlotError> {
        if actions.refresh && !self.refilter() {
            return Ok(());
        }
        let Self {
            primary_stats,
            secondary_stats,
            filters,
            sets,
            charts,
            panel,
            inspector,
            comparing,
            ..
        } = self;
        let mut detail_views = SliceHistogram::create;
        let mut chart_ctx = ChartContext {
            trajectories: &*sets,
            filters,
            detail_views: &mut detail_views,
            panel,
            inspector,
            anchor: egui::Rect::NOTHING,
            request_refresh_all: false,
        };
        if actions.toggle_type {
            charts.change_chart_type_all(&mut chart_ctx);
        }
        if actions.toggle_compare {
            *comparing = !*comparing;
        }
        if actions.refresh || (actions.toggle_compare && !*comparing) {
            charts.update_all(primary_stats, false, &mut chart_ctx)?;
        }
        if *comparing && (actions.toggle_compare || actions.refresh) {
            charts.intersect_all(secondary_stats)?;
        }
        Ok(())
    }
}

#[derive(Default, Clone, Copy)]
struct Actions {
    toggle_type: bool,
    toggle_compare: bool,
    add_filter: bool,
    refresh: bool,
}

impl eframe::App for FanPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Actions::default();
        self.top_bar(ctx, &mut actions);

        while let Ok(query) = self.state_rx.try_recv() {
            log::info!("State detail requested: {:?}", query.query_pairs());
            self.last_state = Some(query);
        }
        if let Some(q) = self.last_state {
            egui::TopBottomPanel::bottom("fanplot_state").show(ctx, |ui| {
                ui.label(format!(
                    "Last state request: pathway {} event {}",
                    q.pathway_number, q.event_number
                ));
            });
        }

        actions.refresh |= self.charts_ui(ctx);
        actions.refresh |= show_context_panel(ctx, &mut self.panel, &mut self.filters);
        if actions.add_filter && self.add_sample_filter() {
            actions.refresh = true;
        }
        if actions.toggle_type || actions.toggle_compare || actions.refresh {
            if let Err(e) = self.apply(actions) {
                log::error!("Failed to refresh charts: {e}");
            }
        }
    }
}
