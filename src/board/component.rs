use dioxus::prelude::*;
use dioxus::web::WebEventExt;
use std::collections::HashMap;

use crate::config::BoardRowData;
use crate::controller::with_planner;
use crate::dom;
use crate::drag::listeners::sync_transfer;
use crate::drag::pairing::{DragEffect, DragMsg, PairOutcome, RowKind, RowRef, RowStyle};

pub type RowStyles = HashMap<String, RowStyle>;

/// Bumped after every drop so the board re-reads the planner's request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PairingRevision(pub u64);

#[component]
pub fn PlanningBoard(rows: Vec<BoardRowData>) -> Element {
    let revision = use_context_provider(|| Signal::new(PairingRevision::default()));
    use_context_provider(|| Signal::new(RowStyles::new()));

    let transports: Vec<BoardRowData> = rows.iter().filter(|r| r.item_type == "transport").cloned().collect();
    let shipments: Vec<BoardRowData> = rows.iter().filter(|r| r.item_type == "shipment").cloned().collect();

    let _ = revision.read();
    let request = with_planner(|planner| planner.planning_request());
    let last_pair = if request.is_complete() {
        format!(
            "{} \u{2192} {}",
            request.transport_id.as_deref().unwrap_or_default(),
            request.shipment_id.as_deref().unwrap_or_default()
        )
    } else {
        "Drag a transport onto a shipment".to_string()
    };

    rsx! {
        div {
            class: "planning-board",
            style: "display: flex; gap: 16px; font-family: system-ui;",

            BoardTable { title: "Transports", rows: transports }
            BoardTable { title: "Shipments", rows: shipments }

            div {
                class: "planning-status",
                style: "font-size: 12px; color: #666; align-self: flex-end;",
                "{last_pair}"
            }
        }
    }
}

#[component]
fn BoardTable(title: String, rows: Vec<BoardRowData>) -> Element {
    rsx! {
        div {
            class: "board-table",
            style: "flex: 1;",
            h2 { style: "margin: 0 0 8px 0; font-size: 16px;", "{title}" }
            if rows.is_empty() {
                p { style: "font-size: 12px; color: #666;", "Nothing to plan" }
            }
            for row in rows.iter() {
                BoardRow { key: "{row.id}", row: row.clone() }
            }
        }
    }
}

#[component]
fn BoardRow(row: BoardRowData) -> Element {
    let revision = use_context::<Signal<PairingRevision>>();
    let styles = use_context::<Signal<RowStyles>>();

    let style = styles.read().get(&row.id).copied().unwrap_or(RowStyle::Dimmed);
    let classes = style.add_classes().join(" ");
    let row_ref = RowRef::parse(row.id.clone(), Some(row.item_type.as_str()));
    let icon = match row_ref.kind {
        Some(RowKind::Transport) => "\u{1F69B}",
        Some(RowKind::Shipment) => "\u{1F4E6}",
        None => "",
    };

    let r = row_ref.clone();
    let on_over = move |_: MouseEvent| dispatch(revision, styles, DragMsg::PointerEnter(r.clone()));
    let r = row_ref.clone();
    let on_out = move |_: MouseEvent| dispatch(revision, styles, DragMsg::PointerLeave(r.clone()));
    let r = row_ref.clone();
    let on_start = move |e: DragEvent| {
        let msg = DragMsg::Start(r.clone());
        transfer(&e, &msg);
        dispatch(revision, styles, msg);
    };
    let r = row_ref.clone();
    let on_end = move |e: DragEvent| {
        let msg = DragMsg::End(r.clone());
        transfer(&e, &msg);
        dispatch(revision, styles, msg);
    };
    let r = row_ref.clone();
    let on_enter = move |_: DragEvent| dispatch(revision, styles, DragMsg::Enter(r.clone()));
    let r = row_ref.clone();
    let on_leave = move |_: DragEvent| dispatch(revision, styles, DragMsg::Leave(r.clone()));
    let r = row_ref.clone();
    let on_drop = move |e: DragEvent| {
        e.prevent_default();
        set_style(styles, &r.id, RowStyle::Dimmed);
        dispatch(revision, styles, DragMsg::Drop(r.clone()));
    };

    rsx! {
        div {
            id: "{row.id}",
            class: "board-row {classes}",
            "data-item-type": "{row.item_type}",
            draggable: "true",
            style: "padding: 8px 12px; margin-bottom: 4px; border-radius: 4px; color: white; cursor: grab; user-select: none;",
            onmouseover: on_over,
            onmouseout: on_out,
            ondragstart: on_start,
            ondragend: on_end,
            ondragenter: on_enter,
            ondragleave: on_leave,
            ondragover: move |e: DragEvent| e.prevent_default(),
            ondrop: on_drop,

            span { style: "margin-right: 8px;", "{icon}" }
            span { style: "font-weight: bold;", "{row.name}" }
            if let Some(detail) = row.detail.as_ref() {
                span { style: "margin-left: 8px; font-size: 12px; opacity: 0.8;", "{detail}" }
            }
        }
    }
}

fn set_style(mut styles: Signal<RowStyles>, id: &str, style: RowStyle) {
    styles.write().insert(id.to_string(), style);
}

fn transfer(e: &DragEvent, msg: &DragMsg) {
    let Some(web_event) = e.data().try_as_web_event() else {
        return;
    };
    if let Err(err) = sync_transfer(&web_event, msg) {
        tracing::warn!(error = %err, "drag data transfer failed");
    }
}

fn dispatch(mut revision: Signal<PairingRevision>, styles: Signal<RowStyles>, msg: DragMsg) {
    let effect = with_planner(|planner| planner.handle_drag(msg));
    match effect {
        DragEffect::Style(id, style) => set_style(styles, &id, style),
        DragEffect::Drop {
            outcome: PairOutcome::Paired(request),
            ..
        } => {
            revision.write().0 += 1;
            let submitted = dom::document().and_then(|document| dom::submit_planning(&document, &request));
            if let Err(err) = submitted {
                tracing::warn!(error = %err, "planning request not submitted");
            }
        }
        DragEffect::Drop { .. } | DragEffect::None => {}
    }
}
