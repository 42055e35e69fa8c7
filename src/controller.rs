//! Page-level state behind the exported entry points.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::info;

use crate::config::{PageConfig, MAP_CONTAINER_ID};
use crate::drag::{apply_draggable, DragEffect, DragMsg, DragPairing, DraggableBindings, PlanningRequest};
use crate::error::UiResult;
use crate::map::{LeafletSurface, MapRenderer, RenderSummary};

pub struct Planner {
    map: MapRenderer<LeafletSurface>,
    pairing: Rc<RefCell<DragPairing>>,
    bindings: Option<DraggableBindings>,
}

impl Default for Planner {
    fn default() -> Self {
        Self {
            map: MapRenderer::new(MAP_CONTAINER_ID),
            pairing: Rc::new(RefCell::new(DragPairing::new())),
            bindings: None,
        }
    }
}

impl Planner {
    pub fn render_map(&mut self, config: &PageConfig) -> UiResult<RenderSummary> {
        self.map.set_map(config, &mut rand::rng())
    }

    pub fn destroy_map(&mut self) {
        self.map.destroy();
    }

    /// Rebinds the `.draggable` rows currently in the document. Listeners from
    /// a previous call are detached first.
    pub fn bind_rows(&mut self, document: &web_sys::Document) -> UiResult<usize> {
        if let Some(previous) = self.bindings.take() {
            info!(rows = previous.rows(), "rebinding draggable rows");
        }
        let bindings = apply_draggable(document, self.pairing.clone())?;
        let rows = bindings.rows();
        self.bindings = Some(bindings);
        Ok(rows)
    }

    /// Feeds a drag message to the page's one pairing state. The Dioxus board
    /// goes through here so `getPlanningRequest` sees its pairings too.
    pub fn handle_drag(&self, msg: DragMsg) -> DragEffect {
        self.pairing.borrow_mut().handle(msg)
    }

    pub fn planning_request(&self) -> PlanningRequest {
        self.pairing.borrow().request().clone()
    }
}

thread_local! {
    static PLANNER: RefCell<Planner> = RefCell::new(Planner::default());
}

pub fn with_planner<R>(f: impl FnOnce(&mut Planner) -> R) -> R {
    PLANNER.with(|planner| f(&mut planner.borrow_mut()))
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
