use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::DRAGGABLE_SELECTOR;
use crate::dom;
use crate::error::UiResult;

use super::pairing::{DragEffect, DragMsg, DragPairing, PairOutcome, RowStyle};

const TRANSFER_FORMAT: &str = "text/plain";

/// What a drag message does to the event's `dataTransfer`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum TransferAction<'a> {
    Store(&'a str),
    Clear,
    Keep,
}

pub(crate) fn transfer_action(msg: &DragMsg) -> TransferAction<'_> {
    match msg {
        DragMsg::Start(row) => TransferAction::Store(&row.id),
        DragMsg::End(_) => TransferAction::Clear,
        _ => TransferAction::Keep,
    }
}

/// Dragstart puts the row id on the transfer as `text/plain` (Firefox will
/// not start a drag without it); dragend clears it.
pub(crate) fn sync_transfer(event: &web_sys::DragEvent, msg: &DragMsg) -> UiResult<()> {
    let Some(transfer) = event.data_transfer() else {
        return Ok(());
    };
    match transfer_action(msg) {
        TransferAction::Store(id) => transfer.set_data(TRANSFER_FORMAT, id)?,
        TransferAction::Clear => transfer.clear_data()?,
        TransferAction::Keep => {}
    }
    Ok(())
}

struct Listener {
    target: web_sys::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

/// Listeners attached by one `apply_draggable` call. Dropping the bindings
/// detaches every listener before its closure is freed.
pub struct DraggableBindings {
    listeners: Vec<Listener>,
    rows: usize,
}

impl DraggableBindings {
    pub fn rows(&self) -> usize {
        self.rows
    }
}

impl Drop for DraggableBindings {
    fn drop(&mut self) {
        for listener in &self.listeners {
            let _ = listener.target.remove_event_listener_with_callback(
                listener.event,
                listener.callback.as_ref().unchecked_ref(),
            );
        }
        debug!(listeners = self.listeners.len(), "detached draggable listeners");
    }
}

pub fn apply_draggable(
    document: &web_sys::Document,
    pairing: Rc<RefCell<DragPairing>>,
) -> UiResult<DraggableBindings> {
    let rows = document.query_selector_all(DRAGGABLE_SELECTOR)?;
    let mut bindings = DraggableBindings {
        listeners: Vec::new(),
        rows: 0,
    };

    for i in 0..rows.length() {
        let Some(row) = rows.item(i).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) else {
            continue;
        };
        for event in [
            "mouseover",
            "mouseout",
            "dragstart",
            "dragend",
            "dragenter",
            "dragleave",
            "dragover",
            "drop",
        ] {
            let callback = row_handler(document.clone(), row.clone(), pairing.clone(), event);
            row.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
            bindings.listeners.push(Listener {
                target: row.clone().into(),
                event,
                callback,
            });
        }
        bindings.rows += 1;
    }

    info!(rows = bindings.rows, "draggable rows bound");
    Ok(bindings)
}

fn row_handler(
    document: web_sys::Document,
    row: web_sys::Element,
    pairing: Rc<RefCell<DragPairing>>,
    event: &'static str,
) -> Closure<dyn FnMut(web_sys::Event)> {
    Closure::new(move |e: web_sys::Event| {
        if let Err(err) = on_row_event(&document, &row, &pairing, event, &e) {
            error!(event, row = %row.id(), error = %err, "drag handler failed");
        }
    })
}

fn on_row_event(
    document: &web_sys::Document,
    row: &web_sys::Element,
    pairing: &RefCell<DragPairing>,
    event: &str,
    e: &web_sys::Event,
) -> UiResult<()> {
    let row_ref = dom::row_ref(row);

    let msg = match event {
        "mouseover" => DragMsg::PointerEnter(row_ref),
        "mouseout" => DragMsg::PointerLeave(row_ref),
        "dragenter" => DragMsg::Enter(row_ref),
        "dragleave" => DragMsg::Leave(row_ref),
        "dragstart" => DragMsg::Start(row_ref),
        "dragend" => DragMsg::End(row_ref),
        "dragover" => {
            e.prevent_default();
            return Ok(());
        }
        "drop" => {
            e.prevent_default();
            dom::apply_row_style(row, RowStyle::Dimmed)?;
            DragMsg::Drop(row_ref)
        }
        _ => return Ok(()),
    };

    if let Some(drag) = e.dyn_ref::<web_sys::DragEvent>() {
        sync_transfer(drag, &msg)?;
    }

    let effect = pairing.borrow_mut().handle(msg);
    match effect {
        DragEffect::Style(_, style) => dom::apply_row_style(row, style),
        DragEffect::Drop {
            outcome: PairOutcome::Paired(request),
            ..
        } => dom::submit_planning(document, &request),
        DragEffect::Drop { .. } | DragEffect::None => Ok(()),
    }
}
