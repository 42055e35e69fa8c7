//! Browser side of the planning board: form merging, the Leaflet map and
//! drag-and-drop pairing of transports with shipments.
//!
//! Server-rendered pages call the exported functions below; the Dioxus app in
//! `board` renders the same pieces on its own.

pub mod board;
pub mod color;
pub mod config;
pub mod controller;
pub mod dom;
pub mod drag;
pub mod error;
pub mod forms;
pub mod geo;
pub mod map;

use std::sync::Once;

use tracing::{info, Level};
use wasm_bindgen::prelude::*;

use crate::config::PageConfig;
use crate::controller::with_planner;
use crate::forms::{merge_forms, DocumentForms};
use crate::map::leaflet::to_js;

static LOGGING: Once = Once::new();

pub fn init_logging() {
    LOGGING.call_once(|| {
        // Already installed when running under `dioxus::launch`.
        let _ = dioxus::logger::init(Level::INFO);
    });
}

#[wasm_bindgen(js_name = getMergedFormsData)]
pub fn get_merged_forms_data(form_ids: Vec<String>) -> Result<JsValue, JsValue> {
    init_logging();
    let forms = DocumentForms::new(dom::document()?);
    let merged = merge_forms(&forms, &form_ids)?;
    Ok(to_js(&merged)?)
}

#[wasm_bindgen(js_name = setMap)]
pub fn set_map() -> Result<(), JsValue> {
    init_logging();
    let config = PageConfig::from_window(&dom::window()?)?;
    with_planner(|planner| planner.render_map(&config))?;
    Ok(())
}

#[wasm_bindgen(js_name = destroyMap)]
pub fn destroy_map() {
    with_planner(controller::Planner::destroy_map);
}

#[wasm_bindgen(js_name = applyDraggable)]
pub fn apply_draggable() -> Result<u32, JsValue> {
    init_logging();
    let document = dom::document()?;
    let rows = with_planner(|planner| planner.bind_rows(&document))?;
    info!(rows, "applyDraggable");
    Ok(u32::try_from(rows).unwrap_or(u32::MAX))
}

#[wasm_bindgen(js_name = getPlanningRequest)]
pub fn get_planning_request() -> Result<JsValue, JsValue> {
    let request = with_planner(|planner| planner.planning_request());
    Ok(to_js(&request)?)
}

#[wasm_bindgen(js_name = getConvertedCoordinates)]
pub fn get_converted_coordinates(raw: Vec<String>) -> js_sys::Array {
    // NaN is not valid JSON; build the nested arrays directly.
    let pairs = js_sys::Array::new();
    for c in geo::convert_coordinates(&raw) {
        pairs.push(&js_sys::Array::of2(&c.lat.into(), &c.lon.into()));
    }
    pairs
}

#[wasm_bindgen(js_name = getRandomColor)]
pub fn get_random_color() -> String {
    color::random_color(&mut rand::rng())
}
