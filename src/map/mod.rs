pub mod leaflet;
pub mod markers;
pub mod renderer;
pub mod surface;

pub use leaflet::LeafletSurface;
pub use markers::MarkerCategory;
pub use renderer::{MapRenderer, RenderSummary};
pub use surface::MapSurface;
