use std::cell::Cell;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;
use crate::error::UiError;
use crate::geo::Coordinate;
use crate::map::markers::IconOptions;

thread_local! {
    static OPENED: Cell<usize> = const { Cell::new(0) };
    static DESTROYED: Cell<usize> = const { Cell::new(0) };
}

const BROKEN_TILES: &str = "broken-tiles";

#[derive(Clone, Debug, PartialEq)]
enum FakeLayer {
    Tiles(String),
    Marker(u32, String),
    Path(u32, String),
}

struct FakeSurface {
    container: String,
    center: Coordinate,
    live: Vec<FakeLayer>,
    next_id: u32,
}

impl FakeSurface {
    fn next(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    fn count(&self, pred: impl Fn(&FakeLayer) -> bool) -> usize {
        self.live.iter().filter(|&l| pred(l)).count()
    }
}

impl MapSurface for FakeSurface {
    type Layer = FakeLayer;

    fn open(container_id: &str, center: Coordinate, _zoom: f64) -> UiResult<Self> {
        if container_id.is_empty() {
            return Err(UiError::NotFound(String::new()));
        }
        OPENED.with(|c| c.set(c.get() + 1));
        Ok(Self {
            container: container_id.to_string(),
            center,
            live: Vec::new(),
            next_id: 0,
        })
    }

    fn set_view(&mut self, center: Coordinate, _zoom: f64) -> UiResult<()> {
        self.center = center;
        Ok(())
    }

    fn add_tile_layer(&mut self, url: &str, _options: &TileLayerOptions) -> UiResult<FakeLayer> {
        if self.container == BROKEN_TILES {
            return Err(UiError::Js("tile server unreachable".into()));
        }
        let layer = FakeLayer::Tiles(url.to_string());
        self.live.push(layer.clone());
        Ok(layer)
    }

    fn add_marker(&mut self, _at: Coordinate, icon: &IconOptions) -> UiResult<FakeLayer> {
        let layer = FakeLayer::Marker(self.next(), icon.html.clone());
        self.live.push(layer.clone());
        Ok(layer)
    }

    fn add_ant_path(&mut self, _path: &[Coordinate], options: &AntPathOptions) -> UiResult<FakeLayer> {
        let layer = FakeLayer::Path(self.next(), options.color.clone());
        self.live.push(layer.clone());
        Ok(layer)
    }

    fn remove_layer(&mut self, layer: &FakeLayer) {
        self.live.retain(|l| l != layer);
    }

    fn destroy(self) {
        DESTROYED.with(|c| c.set(c.get() + 1));
    }
}

fn page() -> PageConfig {
    PageConfig::from_json(
        r#"{
            "centerCoordinate": [41.3, 64.5],
            "mapZoom": 6,
            "coordinatesRawPlannedTransport": ["(41.1, 69.2)"],
            "coordinatesRawPlannedShipments": ["(40.1, 65.3)"],
            "coordinatesRawTransport": ["(38.8, 65.8)", "(oops)"],
            "coordinatesRawShipments": ["(42.4, 59.6)", "(39.7, 64.4)"],
            "plannedLines": [[[41.1, 69.2], [40.1, 65.3]], [[38.8, 65.8], [42.4, 59.6]]]
        }"#,
    )
    .unwrap()
}

fn reset_counters() {
    OPENED.with(|c| c.set(0));
    DESTROYED.with(|c| c.set(0));
}

#[test]
fn first_render_builds_widget_with_tiles_markers_and_lines() {
    reset_counters();
    let mut renderer = MapRenderer::<FakeSurface>::new("mapid");
    assert!(!renderer.is_rendered());

    let summary = renderer.set_map(&page(), &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(summary, RenderSummary { markers: 5, skipped: 1, lines: 2 });

    let map = renderer.rendered().unwrap();
    assert_eq!(map.surface().container, "mapid");
    assert_eq!(map.surface().count(|l| matches!(l, FakeLayer::Tiles(_))), 1);
    assert_eq!(map.surface().count(|l| matches!(l, FakeLayer::Marker(..))), 5);
    assert_eq!(map.surface().count(|l| matches!(l, FakeLayer::Path(..))), 2);
    assert_eq!(map.tiles(), &FakeLayer::Tiles(TILE_URL.to_string()));
    assert_eq!(map.overlay_count(), 7);
    assert_eq!(OPENED.with(Cell::get), 1);
}

#[test]
fn rerender_keeps_one_widget_and_replaces_overlays() {
    reset_counters();
    let mut renderer = MapRenderer::<FakeSurface>::new("mapid");
    let mut rng = StdRng::seed_from_u64(2);
    renderer.set_map(&page(), &mut rng).unwrap();
    let first_ids: Vec<_> = renderer.rendered().unwrap().surface().live.clone();

    renderer.set_map(&page(), &mut rng).unwrap();

    let map = renderer.rendered().unwrap();
    assert_eq!(OPENED.with(Cell::get), 1);
    assert_eq!(map.surface().count(|l| matches!(l, FakeLayer::Tiles(_))), 1);
    assert_eq!(map.surface().live.len(), 8);
    for layer in &first_ids {
        if !matches!(layer, FakeLayer::Tiles(_)) {
            assert!(!map.surface().live.contains(layer), "leaked {layer:?}");
        }
    }
}

#[test]
fn markers_carry_category_glyphs_in_render_order() {
    let mut renderer = MapRenderer::<FakeSurface>::new("mapid");
    renderer.set_map(&page(), &mut StdRng::seed_from_u64(3)).unwrap();
    let glyphs: Vec<_> = renderer
        .rendered()
        .unwrap()
        .surface()
        .live
        .iter()
        .filter_map(|l| match l {
            FakeLayer::Marker(_, html) => Some(html.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(glyphs, ["🚚", "🎁", "🚛", "📦", "📦"]);
}

#[test]
fn route_colors_follow_the_dark_bias() {
    let mut renderer = MapRenderer::<FakeSurface>::new("mapid");
    renderer.set_map(&page(), &mut StdRng::seed_from_u64(4)).unwrap();
    for layer in &renderer.rendered().unwrap().surface().live {
        if let FakeLayer::Path(_, color) = layer {
            assert_eq!(color.len(), 7);
            assert!(color.starts_with('#'));
        }
    }
}

#[test]
fn rerender_moves_the_view() {
    let mut renderer = MapRenderer::<FakeSurface>::new("mapid");
    let mut rng = StdRng::seed_from_u64(5);
    renderer.set_map(&page(), &mut rng).unwrap();

    let mut moved = page();
    moved.center_coordinate = Coordinate::new(1.0, 2.0);
    renderer.set_map(&moved, &mut rng).unwrap();
    assert_eq!(renderer.rendered().unwrap().surface().center, Coordinate::new(1.0, 2.0));
}

#[test]
fn remove_existing_layers_is_a_noop_before_first_render() {
    let mut renderer = MapRenderer::<FakeSurface>::new("mapid");
    assert_eq!(renderer.remove_existing_layers(), 0);
}

#[test]
fn destroy_returns_to_uninitialized() {
    reset_counters();
    let mut renderer = MapRenderer::<FakeSurface>::new("mapid");
    let mut rng = StdRng::seed_from_u64(6);
    renderer.set_map(&page(), &mut rng).unwrap();
    renderer.destroy();
    assert!(matches!(renderer.state(), MapState::Uninitialized));
    assert_eq!(DESTROYED.with(Cell::get), 1);

    renderer.destroy();
    assert_eq!(DESTROYED.with(Cell::get), 1);

    renderer.set_map(&page(), &mut rng).unwrap();
    assert_eq!(OPENED.with(Cell::get), 2);
}

#[test]
fn open_failure_leaves_renderer_uninitialized() {
    let mut renderer = MapRenderer::<FakeSurface>::new("");
    let err = renderer.set_map(&page(), &mut StdRng::seed_from_u64(7));
    assert!(matches!(err, Err(UiError::NotFound(_))));
    assert!(!renderer.is_rendered());
}

#[test]
fn tile_failure_tears_down_the_opened_widget() {
    reset_counters();
    let mut renderer = MapRenderer::<FakeSurface>::new(BROKEN_TILES);
    let mut rng = StdRng::seed_from_u64(8);

    let err = renderer.set_map(&page(), &mut rng);
    assert!(matches!(err, Err(UiError::Js(_))));
    assert!(!renderer.is_rendered());
    assert_eq!(OPENED.with(Cell::get), 1);
    assert_eq!(DESTROYED.with(Cell::get), 1);

    // Each retry opens and releases its own widget; none is left behind.
    let _ = renderer.set_map(&page(), &mut rng);
    assert_eq!(OPENED.with(Cell::get), 2);
    assert_eq!(DESTROYED.with(Cell::get), 2);
}
