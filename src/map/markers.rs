use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerCategory {
    PlannedTransport,
    PlannedShipment,
    Transport,
    Shipment,
}

impl MarkerCategory {
    /// Render order: planned markers go down first.
    pub const ALL: [MarkerCategory; 4] = [
        MarkerCategory::PlannedTransport,
        MarkerCategory::PlannedShipment,
        MarkerCategory::Transport,
        MarkerCategory::Shipment,
    ];

    pub fn emoji(self) -> &'static str {
        match self {
            MarkerCategory::PlannedTransport => "\u{1F69A}",
            MarkerCategory::PlannedShipment => "\u{1F381}",
            MarkerCategory::Transport => "\u{1F69B}",
            MarkerCategory::Shipment => "\u{1F4E6}",
        }
    }

    pub fn icon(self) -> IconOptions {
        IconOptions::emoji(self.emoji())
    }
}

/// Options for `L.divIcon`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconOptions {
    pub html: String,
    pub icon_size: [u32; 2],
    pub icon_anchor: [u32; 2],
    pub class_name: String,
}

impl IconOptions {
    pub fn emoji(glyph: &str) -> Self {
        Self {
            html: glyph.to_string(),
            icon_size: [40, 40],
            icon_anchor: [12, 24],
            class_name: "transparent-marker".to_string(),
        }
    }
}

/// Options for `L.polyline.antPath`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AntPathOptions {
    pub delay: u32,
    pub dash_array: [u32; 2],
    pub weight: u32,
    pub color: String,
    pub pulse_color: String,
    pub paused: bool,
    pub reverse: bool,
    pub hardware_accelerated: bool,
}

impl AntPathOptions {
    pub fn with_color(color: String) -> Self {
        Self {
            delay: 600,
            dash_array: [10, 20],
            weight: 5,
            color,
            pulse_color: "#FFFFFF".to_string(),
            paused: false,
            reverse: false,
            hardware_accelerated: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayerOptions {
    pub max_zoom: u8,
    pub attribution: String,
}
