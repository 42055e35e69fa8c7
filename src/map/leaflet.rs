use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::{UiError, UiResult};
use crate::geo::Coordinate;

use super::markers::{AntPathOptions, IconOptions, TileLayerOptions};
use super::surface::MapSurface;

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;

    pub type Layer;

    #[wasm_bindgen(js_namespace = L, js_name = map, catch)]
    fn create_map(container_id: &str) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView, catch)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method)]
    fn remove(this: &LeafletMap);

    #[wasm_bindgen(method, js_name = addLayer, catch)]
    fn add_layer(this: &LeafletMap, layer: &Layer) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = removeLayer)]
    fn remove_layer(this: &LeafletMap, layer: &Layer);

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
    fn div_icon(options: &JsValue) -> JsValue;

    #[wasm_bindgen(js_namespace = L, js_name = marker, catch)]
    fn marker(at: &JsValue, options: &JsValue) -> Result<Layer, JsValue>;

    #[wasm_bindgen(js_namespace = ["L", "polyline"], js_name = antPath, catch)]
    fn ant_path(path: &JsValue, options: &JsValue) -> Result<Layer, JsValue>;
}

/// Hands a serde value to JavaScript via `JSON.parse`.
pub fn to_js<T: Serialize + ?Sized>(value: &T) -> UiResult<JsValue> {
    let json = serde_json::to_string(value)?;
    Ok(js_sys::JSON::parse(&json)?)
}

/// Leaflet-backed surface. Requires `L` and the `leaflet-ant-path` plugin on the page.
pub struct LeafletSurface {
    map: LeafletMap,
}

impl MapSurface for LeafletSurface {
    type Layer = Layer;

    fn open(container_id: &str, center: Coordinate, zoom: f64) -> UiResult<Self> {
        let map = create_map(container_id)?;
        let view = to_js(&center).and_then(|center| map.set_view(&center, zoom).map_err(UiError::from));
        if let Err(err) = view {
            map.remove();
            return Err(err);
        }
        Ok(Self { map })
    }

    fn set_view(&mut self, center: Coordinate, zoom: f64) -> UiResult<()> {
        self.map.set_view(&to_js(&center)?, zoom)?;
        Ok(())
    }

    fn add_tile_layer(&mut self, url: &str, options: &TileLayerOptions) -> UiResult<Layer> {
        let layer = tile_layer(url, &to_js(options)?);
        self.map.add_layer(&layer)?;
        Ok(layer)
    }

    fn add_marker(&mut self, at: Coordinate, icon: &IconOptions) -> UiResult<Layer> {
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &JsValue::from_str("icon"), &div_icon(&to_js(icon)?))?;
        let layer = marker(&to_js(&at)?, &options)?;
        self.map.add_layer(&layer)?;
        Ok(layer)
    }

    fn add_ant_path(&mut self, path: &[Coordinate], options: &AntPathOptions) -> UiResult<Layer> {
        let layer = ant_path(&to_js(path)?, &to_js(options)?)?;
        self.map.add_layer(&layer)?;
        Ok(layer)
    }

    fn remove_layer(&mut self, layer: &Layer) {
        self.map.remove_layer(layer);
    }

    fn destroy(self) {
        self.map.remove();
    }
}
