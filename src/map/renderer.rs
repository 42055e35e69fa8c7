use rand::Rng;
use tracing::{debug, info, warn};

use crate::color::random_color;
use crate::config::{PageConfig, TILE_ATTRIBUTION, TILE_MAX_ZOOM, TILE_URL};
use crate::error::UiResult;
use crate::geo::convert_coordinates;

use super::markers::{AntPathOptions, MarkerCategory, TileLayerOptions};
use super::surface::MapSurface;

pub struct RenderedMap<S: MapSurface> {
    surface: S,
    tiles: S::Layer,
    overlays: Vec<S::Layer>,
}

impl<S: MapSurface> RenderedMap<S> {
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn tiles(&self) -> &S::Layer {
        &self.tiles
    }

    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }
}

pub enum MapState<S: MapSurface> {
    Uninitialized,
    Rendered(RenderedMap<S>),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub markers: usize,
    pub skipped: usize,
    pub lines: usize,
}

/// Owns the one map widget of the page.
///
/// The widget and its tile layer are created on the first render and kept
/// afterwards; every render removes the markers and route lines of the
/// previous one before drawing its own.
pub struct MapRenderer<S: MapSurface> {
    container_id: String,
    state: MapState<S>,
}

impl<S: MapSurface> MapRenderer<S> {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            state: MapState::Uninitialized,
        }
    }

    pub fn state(&self) -> &MapState<S> {
        &self.state
    }

    pub fn rendered(&self) -> Option<&RenderedMap<S>> {
        match &self.state {
            MapState::Rendered(map) => Some(map),
            MapState::Uninitialized => None,
        }
    }

    pub fn is_rendered(&self) -> bool {
        self.rendered().is_some()
    }

    pub fn init_map(&mut self, config: &PageConfig) -> UiResult<()> {
        if let MapState::Rendered(map) = &mut self.state {
            return map.surface.set_view(config.center_coordinate, config.map_zoom);
        }

        let mut surface = S::open(&self.container_id, config.center_coordinate, config.map_zoom)?;
        let tiles = match surface.add_tile_layer(
            TILE_URL,
            &TileLayerOptions {
                max_zoom: TILE_MAX_ZOOM,
                attribution: TILE_ATTRIBUTION.to_string(),
            },
        ) {
            Ok(tiles) => tiles,
            Err(err) => {
                // A half-built widget keeps the container claimed; release it.
                surface.destroy();
                warn!(container = %self.container_id, error = %err, "tile layer failed, map torn down");
                return Err(err);
            }
        };
        info!(container = %self.container_id, zoom = config.map_zoom, "map initialized");
        self.state = MapState::Rendered(RenderedMap {
            surface,
            tiles,
            overlays: Vec::new(),
        });
        Ok(())
    }

    /// Drops the markers and route lines of earlier renders. The tile layer stays.
    pub fn remove_existing_layers(&mut self) -> usize {
        let MapState::Rendered(map) = &mut self.state else {
            return 0;
        };
        let removed = map.overlays.len();
        for layer in map.overlays.drain(..) {
            map.surface.remove_layer(&layer);
        }
        debug!(removed, "cleared map overlays");
        removed
    }

    pub fn set_map<R: Rng + ?Sized>(&mut self, config: &PageConfig, rng: &mut R) -> UiResult<RenderSummary> {
        self.init_map(config)?;
        self.remove_existing_layers();

        let MapState::Rendered(map) = &mut self.state else {
            return Ok(RenderSummary::default());
        };
        let mut summary = RenderSummary::default();

        for category in MarkerCategory::ALL {
            let icon = category.icon();
            for coordinate in convert_coordinates(config.markers.for_category(category)) {
                // Leaflet throws on NaN positions and would abort the whole render.
                if !coordinate.is_finite() {
                    warn!(?category, ?coordinate, "skipping marker with unparseable position");
                    summary.skipped += 1;
                    continue;
                }
                let layer = map.surface.add_marker(coordinate, &icon)?;
                map.overlays.push(layer);
                summary.markers += 1;
            }
        }

        for line in &config.planned_lines {
            let options = AntPathOptions::with_color(random_color(rng));
            let layer = map.surface.add_ant_path(line, &options)?;
            map.overlays.push(layer);
            summary.lines += 1;
        }

        info!(
            expected = config.marker_count(),
            markers = summary.markers,
            skipped = summary.skipped,
            lines = summary.lines,
            "map rendered"
        );
        Ok(summary)
    }

    /// Full teardown; the next render builds a fresh widget.
    pub fn destroy(&mut self) {
        if let MapState::Rendered(map) = std::mem::replace(&mut self.state, MapState::Uninitialized) {
            map.surface.destroy();
            info!(container = %self.container_id, "map destroyed");
        }
    }
}

#[cfg(test)]
#[path = "renderer_test.rs"]
mod tests;
