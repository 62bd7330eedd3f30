//! The set of fan charts shown together, one per variable.

use crate::chart::{ChartContext, FanChart};
use crate::config::FanChartConfig;
use crate::data::filters::FilterRegistry;
use crate::data::percentiles::Statistics;
use crate::data::trajectories::TrajectorySets;
use crate::error::FanPlotError;

/// Fan charts in display order.
#[derive(Default)]
pub struct ChartSet {
    charts: Vec<FanChart>,
}

impl ChartSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// One chart per variable in `statistics`, in sorted variable-name order.
    pub fn from_statistics(
        statistics: &Statistics,
        trajectories: &TrajectorySets,
        config: &FanChartConfig,
    ) -> Result<Self, FanPlotError> {
        let charts = statistics
            .variable_names()
            .into_iter()
            .map(|name| FanChart::new(name, statistics, trajectories, config.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { charts })
    }

    pub fn push(&mut self, chart: FanChart) {
        self.charts.push(chart);
    }

    pub fn get(&self, name: &str) -> Option<&FanChart> {
        self.charts.iter().find(|c| c.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FanChart> {
        self.charts.iter_mut().find(|c| c.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FanChart> {
        self.charts.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut FanChart> {
        self.charts.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    pub fn advance(&mut self, now: f64) {
        for chart in &mut self.charts {
            chart.advance(now);
        }
    }

    /// Refresh every chart: new statistics, then redrawn filter marks.
    /// Consumes a pending refresh-all request.
    pub fn update_all(
        &mut self,
        statistics: &Statistics,
        is_new_data: bool,
        ctx: &mut ChartContext<'_>,
    ) -> Result<(), FanPlotError> {
        for chart in &mut self.charts {
            chart.update_data(statistics, is_new_data, ctx)?;
            chart.update_brushes(ctx.filters);
        }
        ctx.request_refresh_all = false;
        Ok(())
    }

    /// Compare every chart against the comparator statistics.
    pub fn intersect_all(&mut self, comparator: &Statistics) -> Result<(), FanPlotError> {
        for chart in &mut self.charts {
            chart.intersect_with_second_trajectory_set(comparator)?;
        }
        Ok(())
    }

    pub fn change_chart_type_all(&mut self, ctx: &mut ChartContext<'_>) {
        for chart in &mut self.charts {
            chart.change_chart_type(ctx);
        }
    }

    pub fn update_brushes_all(&mut self, filters: &FilterRegistry) {
        for chart in &mut self.charts {
            chart.update_brushes(filters);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.charts.iter().any(FanChart::is_animating)
    }
}
