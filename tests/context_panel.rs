mod common;

use common::*;
use fanplot::{ContextPanel, ContextPanelConfig, Filter, TrajectorySets};

fn anchored_panel() -> ContextPanel {
    let mut panel = ContextPanel::new(ContextPanelConfig::default());
    let anchor = egui::Rect::from_min_size(egui::pos2(20.0, 400.0), egui::vec2(800.0, 250.0));
    panel.show_panel("Fire Size", anchor);
    panel
}

#[test]
fn panel_sits_directly_above_its_anchor() {
    let panel = anchored_panel();
    assert!(panel.is_visible());
    assert_eq!(panel.current_width(), 800.0);
    assert_eq!(panel.position(), Some(egui::pos2(20.0, 400.0 - 260.0)));
}

#[test]
fn minimize_then_maximize_animates_width_and_fades() {
    let mut panel = anchored_panel();
    panel.advance(10.0);
    panel.minimize();
    assert!(panel.is_minimized());
    assert!(panel.is_animating());
    assert_eq!(panel.current_width(), 800.0);

    panel.advance(10.6);
    let w = panel.current_width();
    assert!(w < 800.0 && w > 40.0, "{w}");

    panel.advance(11.2);
    assert_eq!(panel.current_width(), 40.0);
    assert_eq!(panel.expanded_opacity(), 0.0);
    assert_eq!(panel.minimized_opacity(), 1.0);
    assert!(!panel.is_animating());

    panel.maximize();
    panel.advance(12.5);
    assert_eq!(panel.current_width(), 800.0);
    assert_eq!(panel.expanded_opacity(), 1.0);
    assert_eq!(panel.minimized_opacity(), 0.0);
}

#[test]
fn showing_while_minimized_keeps_the_strip() {
    let mut panel = anchored_panel();
    panel.minimize();
    panel.advance(5.0);
    let anchor = egui::Rect::from_min_size(egui::pos2(0.0, 700.0), egui::vec2(640.0, 250.0));
    panel.show_panel("Precipitation", anchor);
    assert_eq!(panel.current_width(), 40.0);
    panel.maximize();
    panel.advance(10.0);
    assert_eq!(panel.current_width(), 640.0);
}

#[test]
fn closing_destroys_the_view_and_hides_the_panel() {
    let sets = TrajectorySets::primary(trajectories(20, 4));
    let mut chart = chart(widening_series(4), &sets);
    let mut h = Harness::new(sets);
    h.with_ctx(|ctx| chart.show_slice(1, ctx));
    assert!(h.panel.has_content());

    h.panel.close();
    assert!(!h.panel.is_visible());
    assert!(!h.panel.has_content());
    assert_eq!(
        h.events().last().map(String::as_str),
        Some(format!("destroy {VAR}@1").as_str())
    );
}

#[test]
fn landing_width_tracks_the_window() {
    let mut panel = ContextPanel::default();
    panel.on_screen_resize(1280.0);
    assert_eq!(panel.landing_width(), 1280.0);
    assert_eq!(panel.position(), None);
}

#[test]
fn minimized_glyph_fades_in_over_the_fade_time() {
    let mut panel = anchored_panel();
    panel.advance(3.0);
    panel.minimize();
    assert_eq!(panel.minimized_opacity(), 0.0);
    panel.advance(3.4);
    let alpha = panel.minimized_opacity();
    assert!(alpha > 0.0 && alpha < 1.0, "{alpha}");
    panel.advance(4.0);
    assert_eq!(panel.minimized_opacity(), 1.0);
}

#[test]
fn display_width_never_exceeds_the_landing_area() {
    let mut panel = anchored_panel();
    assert_eq!(panel.display_width(), 800.0);
    panel.on_screen_resize(600.0);
    assert_eq!(panel.display_width(), 600.0);
    panel.on_screen_resize(1920.0);
    assert_eq!(panel.display_width(), 800.0);
}

#[test]
fn panel_text_is_shown_until_the_view_is_replaced() {
    let sets = TrajectorySets::primary(trajectories(20, 4));
    let mut chart = chart(widening_series(4), &sets);
    let mut h = Harness::new(sets);
    assert_eq!(h.panel.text(), None);

    h.with_ctx(|ctx| chart.show_slice(1, ctx));
    h.panel.set_text("20 trajectories at step 1");
    assert_eq!(h.panel.text(), Some("20 trajectories at step 1"));

    h.with_ctx(|ctx| chart.show_slice(2, ctx));
    assert_eq!(h.panel.text(), None);
    h.panel.set_text(String::from("step 2"));
    h.panel.close();
    assert_eq!(h.panel.text(), None);
}

#[test]
fn remove_filter_button_is_disabled_without_a_filter() {
    let sets = TrajectorySets::primary(trajectories(20, 4));
    let mut chart = chart(widening_series(4), &sets);
    let mut h = Harness::new(sets);
    assert!(!h.panel.can_remove_filter(&h.filters));

    h.filters.add_filter(Filter::new(VAR, 2, [3.0, 9.0]));
    h.with_ctx(|ctx| chart.show_slice(1, ctx));
    assert!(!h.panel.can_remove_filter(&h.filters));
    assert!(!h.panel.remove_filter(&mut h.filters));
    assert_eq!(h.filters.active_filters().len(), 1);
}

#[test]
fn remove_filter_drops_the_hosted_filter_and_clears_the_brush() {
    let sets = TrajectorySets::primary(trajectories(20, 4));
    let mut chart = chart(widening_series(4), &sets);
    let mut h = Harness::new(sets);
    h.filters.add_filter(Filter::new(VAR, 1, [3.0, 9.0]));
    h.filters.add_filter(Filter::new(VAR, 2, [4.0, 8.0]));
    h.with_ctx(|ctx| chart.show_slice(1, ctx));
    assert!(h.panel.can_remove_filter(&h.filters));

    assert!(h.panel.remove_filter(&mut h.filters));
    assert!(h.filters.find(VAR, 1).is_none());
    assert!(h.filters.find(VAR, 2).is_some());
    assert!(!h.panel.can_remove_filter(&h.filters));
    assert_eq!(h.events().last().map(String::as_str), Some("clear_brush"));

    // Charts redraw their marks from the registry on the refresh that follows.
    chart.update_brushes(&h.filters);
    assert_eq!(chart.filter_marks().len(), 2);
    assert!(chart.filter_marks().iter().all(|m| m.time_period == 2));
}
