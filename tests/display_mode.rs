mod common;

use common::*;
use fanplot::{ChartSet, DisplayMode, FanChartConfig, TrajectorySets};

#[test]
fn few_trajectories_start_as_lines() {
    assert_eq!(DisplayMode::initial(10, 10), DisplayMode::Lines);
    assert_eq!(DisplayMode::initial(0, 10), DisplayMode::Lines);
    assert_eq!(DisplayMode::initial(11, 10), DisplayMode::Bands);

    let sets = TrajectorySets::primary(trajectories(10, 5));
    let chart = chart(widening_series(5), &sets);
    assert!(chart.lines_are_displayed());
    assert!(!chart.bands_visible());
    assert_eq!(chart.lines().len(), 10);
}

#[test]
fn toggling_switches_between_bands_and_lines() {
    let sets = TrajectorySets::primary(trajectories(11, 5));
    let mut chart = chart(widening_series(5), &sets);
    assert_eq!(chart.display_mode(), DisplayMode::Bands);
    assert!(chart.bands_visible());
    assert!(chart.lines().is_empty());

    let mut h = Harness::new(sets);
    let (mode, _) = h.with_ctx(|ctx| chart.change_chart_type(ctx));
    assert_eq!(mode, DisplayMode::Lines);
    assert!(!chart.bands_visible());
    assert_eq!(chart.lines().len(), 11);

    let (mode, _) = h.with_ctx(|ctx| chart.change_chart_type(ctx));
    assert_eq!(mode, DisplayMode::Bands);
    assert!(chart.bands_visible());
    assert!(chart.lines().is_empty());
}

#[test]
fn lines_follow_the_filtered_set() {
    let sets = TrajectorySets {
        filtered_primary: trajectories(4, 5),
        eligible_primary: trajectories(12, 5),
        eligible_secondary: Vec::new(),
    };
    let mut chart = chart(widening_series(5), &sets);
    assert_eq!(chart.display_mode(), DisplayMode::Bands);
    let mut h = Harness::new(sets);
    h.with_ctx(|ctx| chart.change_chart_type(ctx));
    assert_eq!(chart.lines().len(), 4);
}

#[test]
fn too_many_filtered_trajectories_force_bands_on_update() {
    let sets = TrajectorySets::primary(trajectories(5, 5));
    let mut chart = chart(widening_series(5), &sets);
    assert_eq!(chart.display_mode(), DisplayMode::Lines);

    let mut h = Harness::new(TrajectorySets::primary(trajectories(31, 5)));
    let stats = stats_with(widening_series(5));
    h.with_ctx(|ctx| chart.update_data(&stats, false, ctx))
        .0
        .unwrap();
    assert_eq!(chart.display_mode(), DisplayMode::Bands);
    assert!(chart.bands_visible());
    assert!(chart.lines().is_empty());
}

#[test]
fn exactly_the_line_limit_keeps_lines() {
    let sets = TrajectorySets::primary(trajectories(5, 5));
    let mut chart = chart(widening_series(5), &sets);
    let mut h = Harness::new(TrajectorySets::primary(trajectories(30, 5)));
    let stats = stats_with(widening_series(5));
    h.with_ctx(|ctx| chart.update_data(&stats, false, ctx))
        .0
        .unwrap();
    assert_eq!(chart.display_mode(), DisplayMode::Lines);
    assert_eq!(chart.lines().len(), 30);
}

#[test]
fn line_colors_are_stable_per_pathway() {
    let sets = TrajectorySets::primary(trajectories(3, 4));
    let a = chart(widening_series(4), &sets);
    let b = chart(widening_series(4), &sets);
    for (la, lb) in a.lines().iter().zip(b.lines()) {
        assert_eq!(la.path_id, lb.path_id);
        assert_eq!(la.color, lb.color);
    }
}

#[test]
fn chart_set_toggles_every_chart() {
    let mut stats = stats_with(widening_series(4));
    stats.insert("Fire Size", widening_series(4));
    let sets = TrajectorySets::primary(trajectories(20, 4));
    let mut charts = ChartSet::from_statistics(&stats, &sets, &FanChartConfig::default()).unwrap();
    assert_eq!(charts.len(), 2);
    assert_eq!(charts.iter().next().map(|c| c.name()), Some("Fire Size"));

    let mut h = Harness::new(sets);
    h.with_ctx(|ctx| charts.change_chart_type_all(ctx));
    assert!(charts.iter().all(|c| c.display_mode() == DisplayMode::Lines));
}
