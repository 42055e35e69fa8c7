use crate::error::UiResult;
use crate::geo::Coordinate;

use super::markers::{AntPathOptions, IconOptions, TileLayerOptions};

/// The slice of a map widget the renderer drives.
///
/// Layers are handed back to the caller, which owns the bookkeeping of what
/// was added and is responsible for removing it again.
pub trait MapSurface: Sized {
    type Layer;

    fn open(container_id: &str, center: Coordinate, zoom: f64) -> UiResult<Self>;

    fn set_view(&mut self, center: Coordinate, zoom: f64) -> UiResult<()>;

    fn add_tile_layer(&mut self, url: &str, options: &TileLayerOptions) -> UiResult<Self::Layer>;

    fn add_marker(&mut self, at: Coordinate, icon: &IconOptions) -> UiResult<Self::Layer>;

    fn add_ant_path(&mut self, path: &[Coordinate], options: &AntPathOptions) -> UiResult<Self::Layer>;

    fn remove_layer(&mut self, layer: &Self::Layer);

    /// Tears the widget down together with every layer still attached.
    fn destroy(self);
}
