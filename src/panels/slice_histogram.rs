//! Histogram of one time step, the default slice detail view.

use egui::Color32;
use egui_plot::{Bar, BarChart, Legend, Plot, VLine};

use crate::controllers::DetailView;
use crate::data::trajectories::Trajectory;

const BIN_COUNT: usize = 12;
const PRIMARY_COLOR: Color32 = Color32::from_rgb(66, 146, 198);
const SECONDARY_COLOR: Color32 = Color32::from_rgb(255, 127, 14);
const BRUSH_COLOR: Color32 = Color32::GRAY;

/// Histogram of a variable's values across trajectories at one time step.
pub struct SliceHistogram {
    name: String,
    time_step: usize,
    primary: Vec<f64>,
    secondary: Option<Vec<f64>>,
    brush: Option<[f64; 2]>,
    bins: Vec<(f64, usize)>,
    secondary_bins: Vec<(f64, usize)>,
    bin_width: f64,
}

impl SliceHistogram {
    pub fn new(name: &str, trajectories: &[Trajectory], time_step: usize) -> Self {
        Self {
            name: name.to_string(),
            time_step,
            primary: values_at(trajectories, name, time_step),
            secondary: None,
            brush: None,
            bins: Vec::new(),
            secondary_bins: Vec::new(),
            bin_width: 1.0,
        }
    }

    /// Factory usable as a [`crate::controllers::DetailViewFactory`].
    pub fn create(name: &str, trajectories: &[Trajectory], time_step: usize) -> Box<dyn DetailView> {
        Box::new(Self::new(name, trajectories, time_step))
    }

    pub fn time_step(&self) -> usize {
        self.time_step
    }

    pub fn brush(&self) -> Option<[f64; 2]> {
        self.brush
    }

    pub fn bins(&self) -> &[(f64, usize)] {
        &self.bins
    }

    pub fn is_comparing(&self) -> bool {
        self.secondary.is_some()
    }

    fn value_range(&self) -> Option<(f64, f64)> {
        let all = self
            .primary
            .iter()
            .chain(self.secondary.iter().flatten())
            .copied();
        let (lo, hi) = all.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        lo.is_finite().then_some((lo, hi))
    }

    fn rebin(&mut self) {
        let Some((lo, hi)) = self.value_range() else {
            self.bins.clear();
            self.secondary_bins.clear();
            return;
        };
        let span = if hi > lo { hi - lo } else { 1.0 };
        self.bin_width = span / BIN_COUNT as f64;
        self.bins = histogram(&self.primary, lo, self.bin_width);
        self.secondary_bins = self
            .secondary
            .as_deref()
            .map(|s| histogram(s, lo, self.bin_width))
            .unwrap_or_default();
    }
}

fn values_at(trajectories: &[Trajectory], name: &str, time_step: usize) -> Vec<f64> {
    trajectories
        .iter()
        .filter_map(|t| t.value_at(name, time_step))
        .collect()
}

/// `(bin center, count)` for `BIN_COUNT` bins starting at `lo`.
fn histogram(values: &[f64], lo: f64, width: f64) -> Vec<(f64, usize)> {
    let mut counts = vec![0usize; BIN_COUNT];
    for v in values {
        let idx = (((v - lo) / width) as usize).min(BIN_COUNT - 1);
        counts[idx] += 1;
    }
    counts
        .into_iter()
        .enumerate()
        .map(|(i, c)| (lo + (i as f64 + 0.5) * width, c))
        .collect()
}

impl DetailView for SliceHistogram {
    fn title(&self) -> String {
        format!("{} at step {}", self.name, self.time_step)
    }

    fn brush_counts(&mut self) {
        self.rebin();
    }

    fn update_brush(&mut self, extent: [f64; 2]) {
        self.brush = Some(extent);
    }

    fn clear_brush(&mut self) {
        self.brush = None;
    }

    fn intersect_with_second_trajectory_set(&mut self, secondary: &[Trajectory]) {
        self.secondary = Some(values_at(secondary, &self.name, self.time_step));
        self.rebin();
    }

    fn ui(&mut self, ui: &mut egui::Ui) {
        let bar_width = self.bin_width * 0.9;
        let primary: Vec<Bar> = self
            .bins
            .iter()
            .map(|&(x, c)| Bar::new(x, c as f64).width(bar_width))
            .collect();
        let comparing = self.is_comparing();
        let secondary: Vec<Bar> = self
            .secondary_bins
            .iter()
            .map(|&(x, c)| Bar::new(x, c as f64).width(bar_width * 0.5))
            .collect();
        let brush = self.brush;
        Plot::new(("slice_histogram", self.name.as_str(), self.time_step))
            .height(180.0)
            .allow_scroll(false)
            .allow_zoom(false)
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new("primary", primary).color(PRIMARY_COLOR));
                if comparing {
                    plot_ui.bar_chart(BarChart::new("secondary", secondary).color(SECONDARY_COLOR));
                }
                if let Some([lo, hi]) = brush {
                    plot_ui.vline(VLine::new("filter", lo).color(BRUSH_COLOR));
                    plot_ui.vline(VLine::new("filter", hi).color(BRUSH_COLOR));
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_puts_maximum_in_last_bin() {
        let bins = histogram(&[0.0, 1.0, 12.0], 0.0, 1.0);
        assert_eq!(bins.len(), BIN_COUNT);
        assert_eq!(bins[0].1, 1);
        assert_eq!(bins[1].1, 1);
        assert_eq!(bins[BIN_COUNT - 1].1, 1);
    }

    #[test]
    fn brush_clears_and_comparison_follows_secondary() {
        let mut view = SliceHistogram::new("x", &[], 0);
        view.update_brush([1.0, 2.0]);
        assert_eq!(view.brush(), Some([1.0, 2.0]));
        view.clear_brush();
        assert_eq!(view.brush(), None);

        assert!(!view.is_comparing());
        view.intersect_with_second_trajectory_set(&[]);
        assert!(view.is_comparing());
    }
}
