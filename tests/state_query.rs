mod common;

use common::*;
use fanplot::{ChartHit, StateInspector, StateQuery, StateRequestController, StateSnapshot, TrajectorySets};

#[test]
fn query_pairs_name_pathway_and_event() {
    let q = StateQuery::for_snapshot(&StateSnapshot::new(17, 4));
    assert_eq!(
        q.query_pairs(),
        vec![
            ("Pathway Number".to_string(), "17".to_string()),
            ("Event Number".to_string(), "4".to_string()),
        ]
    );
}

#[test]
fn clicking_a_line_requests_the_nearest_state() {
    let sets = TrajectorySets::primary(trajectories(3, 5));
    let mut chart = chart(widening_series(5), &sets);
    assert!(chart.lines_are_displayed());

    // Trajectory 0 holds its step number, so its vertex at step 3 is exact.
    let vertex = chart.lines()[0].points()[3];
    let mut h = Harness::new(sets);
    let (hit, _) = h.with_ctx(|ctx| chart.click(vertex, ctx));
    let expected = StateQuery {
        pathway_number: 0,
        event_number: 3,
    };
    assert_eq!(
        hit,
        Some(ChartHit::Line {
            index: 0,
            query: Some(expected),
        })
    );
    assert_eq!(h.inspector.requests, vec![expected]);
    assert!(h.events().is_empty());
}

#[test]
fn controller_broadcasts_to_subscribers() {
    let mut controller = StateRequestController::new();
    let rx = controller.subscribe();
    let q = StateQuery {
        pathway_number: 2,
        event_number: 9,
    };
    controller.request_state(q);
    assert_eq!(rx.try_recv().ok(), Some(q));
    assert_eq!(controller.last_request(), Some(q));

    drop(rx);
    controller.request_state(q);
    assert_eq!(controller.last_request(), Some(q));
}
