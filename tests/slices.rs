mod common;

use common::*;
use fanplot::chart::slices::slice_regions;
use fanplot::data::scale::LinearScale;
use fanplot::{ChartHit, Filter, TrajectorySets};

#[test]
fn regions_leave_a_one_pixel_gap() {
    let x = LinearScale::new([0.0, 4.0], [0.0, 400.0]);
    let regions = slice_regions(4, &x, 400.0, 190.0);
    assert_eq!(regions.len(), 4);
    for (i, r) in regions.iter().enumerate() {
        assert_eq!(r.time_step, i);
        assert_eq!(r.x, 100.0 * i as f64);
        assert_eq!(r.width, 99.0);
        assert_eq!(r.height, 190.0);
    }
    assert!(regions[0].contains([50.0, 10.0]));
    assert!(!regions[0].contains([99.5, 10.0]));
    assert!(slice_regions(0, &x, 400.0, 190.0).is_empty());
}

#[test]
fn clicking_a_slice_opens_its_detail_view() {
    let sets = TrajectorySets::primary(trajectories(20, 5));
    let mut chart = chart(widening_series(5), &sets);
    let mut h = Harness::new(sets);

    let pos = [chart.slice_regions()[2].x + 10.0, 5.0];
    let (hit, refresh) = h.with_ctx(|ctx| chart.click(pos, ctx));
    assert_eq!(hit, Some(ChartHit::Slice(2)));
    assert!(!refresh);
    assert_eq!(
        h.events(),
        vec![format!("create {VAR} 20 2"), "brush_counts".to_string()]
    );
    assert!(h.panel.is_visible());
    assert_eq!(h.panel.owner(), Some(VAR));
    assert_eq!(h.panel.current_width(), h.anchor.width());
}

#[test]
fn existing_filter_initializes_the_brush() {
    let sets = TrajectorySets::primary(trajectories(20, 5));
    let mut chart = chart(widening_series(5), &sets);
    let mut h = Harness::new(sets);
    h.filters.add_filter(Filter::new(VAR, 3, [12.0, 4.0]));
    h.filters.add_filter(Filter::new(VAR, 1, [0.0, 1.0]));

    h.with_ctx(|ctx| chart.show_slice(3, ctx));
    assert_eq!(
        h.events(),
        vec![
            format!("create {VAR} 20 3"),
            "brush_counts".to_string(),
            "update_brush 4 12".to_string(),
        ]
    );
}

#[test]
fn comparing_chart_hands_the_secondary_set_to_the_view() {
    let sets = TrajectorySets::primary(trajectories(20, 5)).with_secondary(trajectories(7, 5));
    let mut chart = chart(widening_series(5), &sets);
    chart
        .intersect_with_second_trajectory_set(&stats_with(widening_series(5)))
        .unwrap();
    let mut h = Harness::new(sets);
    h.with_ctx(|ctx| chart.show_slice(0, ctx));
    assert_eq!(h.events().last().map(String::as_str), Some("intersect 7"));
}

#[test]
fn opening_another_slice_destroys_the_previous_view() {
    let sets = TrajectorySets::primary(trajectories(20, 5));
    let mut chart = chart(widening_series(5), &sets);
    let mut h = Harness::new(sets);
    h.with_ctx(|ctx| chart.show_slice(0, ctx));
    h.with_ctx(|ctx| chart.show_slice(1, ctx));
    let events = h.events();
    let destroy = events
        .iter()
        .position(|e| e == &format!("destroy {VAR}@0"))
        .expect("first view destroyed");
    let second = events
        .iter()
        .position(|e| e == &format!("create {VAR} 20 1"))
        .expect("second view created");
    assert!(second < destroy, "the new view is created before the swap");
}

#[test]
fn regions_are_rebuilt_when_the_series_grows() {
    let sets = TrajectorySets::primary(trajectories(20, 5));
    let mut chart = chart(widening_series(3), &sets);
    assert_eq!(chart.slice_regions().len(), 3);
    let mut h = Harness::new(sets);
    let stats = stats_with(widening_series(6));
    h.with_ctx(|ctx| chart.update_data(&stats, true, ctx))
        .0
        .unwrap();
    let regions = chart.slice_regions();
    assert_eq!(regions.len(), 6);
    assert!(approx(regions[5].x, 5.0 * INNER_W / 6.0));
}
