use super::*;
use crate::drag::{RowKind, RowRef};

fn row(id: &str, kind: RowKind) -> RowRef {
    RowRef::new(id, Some(kind))
}

#[test]
fn board_pairing_is_visible_through_the_planner() {
    let planner = Planner::default();
    planner.handle_drag(DragMsg::Start(row("s-4", RowKind::Shipment)));
    let effect = planner.handle_drag(DragMsg::Drop(row("t-2", RowKind::Transport)));
    planner.handle_drag(DragMsg::End(row("s-4", RowKind::Shipment)));

    assert!(effect.should_submit());
    assert_eq!(
        planner.planning_request(),
        PlanningRequest {
            transport_id: Some("t-2".into()),
            shipment_id: Some("s-4".into()),
        }
    );
}

#[test]
fn thread_planner_keeps_one_request_across_calls() {
    with_planner(|planner| {
        planner.handle_drag(DragMsg::Start(row("t-7", RowKind::Transport)));
        planner.handle_drag(DragMsg::Drop(row("s-1", RowKind::Shipment)));
    });

    let request = with_planner(|planner| planner.planning_request());
    assert_eq!(request.transport_id.as_deref(), Some("t-7"));
    assert_eq!(request.shipment_id.as_deref(), Some("s-1"));
}

#[test]
fn rejected_drop_leaves_planner_request_empty() {
    let planner = Planner::default();
    planner.handle_drag(DragMsg::Start(row("t-1", RowKind::Transport)));
    planner.handle_drag(DragMsg::Drop(row("t-2", RowKind::Transport)));
    assert!(!planner.planning_request().is_complete());
}
