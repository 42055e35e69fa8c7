//! Page-provided configuration.
//!
//! The server template defines a handful of globals on `window` before the
//! wasm bundle loads. They are read one by one through `Reflect`, serialized
//! with `JSON.stringify` and decoded with `serde_json`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::error::{UiError, UiResult};
use crate::geo::Coordinate;
use crate::map::markers::MarkerCategory;

pub const MAP_CONTAINER_ID: &str = "mapid";
pub const TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_MAX_ZOOM: u8 = 19;
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"http://www.openstreetmap.org/copyright\">OpenStreetMap</a>";
pub const PLANNING_FORM_ID: &str = "planning-form";
pub const PLANNING_REQUEST_FIELD: &str = "planning_request";
pub const DRAGGABLE_SELECTOR: &str = ".draggable";
pub const ITEM_TYPE_ATTRIBUTE: &str = "data-item-type";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerCoordinates {
    #[serde(default, rename = "coordinatesRawPlannedTransport")]
    pub planned_transport: Vec<String>,
    #[serde(default, rename = "coordinatesRawPlannedShipments")]
    pub planned_shipment: Vec<String>,
    #[serde(default, rename = "coordinatesRawTransport")]
    pub transport: Vec<String>,
    #[serde(default, rename = "coordinatesRawShipments")]
    pub shipment: Vec<String>,
}

impl MarkerCoordinates {
    pub fn for_category(&self, category: MarkerCategory) -> &[String] {
        match category {
            MarkerCategory::PlannedTransport => &self.planned_transport,
            MarkerCategory::PlannedShipment => &self.planned_shipment,
            MarkerCategory::Transport => &self.transport,
            MarkerCategory::Shipment => &self.shipment,
        }
    }
}

/// A row of the planning board, as the page hands it over.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardRowData {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    pub center_coordinate: Coordinate,
    pub map_zoom: f64,
    #[serde(flatten)]
    pub markers: MarkerCoordinates,
    #[serde(default)]
    pub planned_lines: Vec<Vec<Coordinate>>,
    #[serde(default)]
    pub planning_rows: Vec<BoardRowData>,
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_window(window: &web_sys::Window) -> UiResult<Self> {
        let markers = MarkerCoordinates {
            planned_transport: read_global_or_default(window, "coordinatesRawPlannedTransport")?,
            planned_shipment: read_global_or_default(window, "coordinatesRawPlannedShipments")?,
            transport: read_global_or_default(window, "coordinatesRawTransport")?,
            shipment: read_global_or_default(window, "coordinatesRawShipments")?,
        };

        Ok(Self {
            center_coordinate: read_global(window, "centerCoordinate")?,
            map_zoom: read_global(window, "mapZoom")?,
            markers,
            planned_lines: read_global_or_default(window, "plannedLines")?,
            planning_rows: read_global_or_default(window, "planningRows")?,
        })
    }

    pub fn marker_count(&self) -> usize {
        MarkerCategory::ALL
            .iter()
            .map(|c| self.markers.for_category(*c).len())
            .sum()
    }
}

fn global_json(window: &web_sys::Window, name: &'static str) -> UiResult<Option<String>> {
    let value = js_sys::Reflect::get(window, &JsValue::from_str(name))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    let json = js_sys::JSON::stringify(&value)?;
    Ok(json.as_string())
}

fn decode<T: DeserializeOwned>(name: &'static str, json: &str) -> UiResult<T> {
    serde_json::from_str(json).map_err(|source| UiError::Config { name, source })
}

pub fn read_global<T: DeserializeOwned>(window: &web_sys::Window, name: &'static str) -> UiResult<T> {
    match global_json(window, name)? {
        Some(json) => decode(name, &json),
        None => Err(UiError::MissingGlobal(name)),
    }
}

pub fn read_global_or_default<T: DeserializeOwned + Default>(
    window: &web_sys::Window,
    name: &'static str,
) -> UiResult<T> {
    match global_json(window, name)? {
        Some(json) => decode(name, &json),
        None => Ok(T::default()),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
