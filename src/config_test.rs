use super::*;

const PAGE: &str = r#"{
    "centerCoordinate": [41.3, 64.5],
    "mapZoom": 6,
    "coordinatesRawPlannedTransport": ["(41.1, 69.2)"],
    "coordinatesRawPlannedShipments": ["(40.1, 65.3)", "(39.6, 66.9)"],
    "coordinatesRawTransport": [],
    "coordinatesRawShipments": ["(42.4, 59.6)"],
    "plannedLines": [[[41.1, 69.2], [40.1, 65.3]]],
    "planningRows": [
        {"id": "t-1", "name": "Truck 1", "type": "transport"},
        {"id": "s-9", "name": "Pallets", "type": "shipment", "detail": "Samarkand"}
    ]
}"#;

#[test]
fn decodes_page_globals() {
    let config = PageConfig::from_json(PAGE).unwrap();
    assert_eq!(config.center_coordinate, Coordinate::new(41.3, 64.5));
    assert_eq!(config.map_zoom, 6.0);
    assert_eq!(config.markers.planned_shipment.len(), 2);
    assert_eq!(config.marker_count(), 4);
    assert_eq!(config.planned_lines.len(), 1);
    assert_eq!(config.planned_lines[0][1], Coordinate::new(40.1, 65.3));
    assert_eq!(config.planning_rows[1].item_type, "shipment");
    assert_eq!(config.planning_rows[1].detail.as_deref(), Some("Samarkand"));
}

#[test]
fn optional_globals_default_to_empty() {
    let config = PageConfig::from_json(r#"{"centerCoordinate": [0, 0], "mapZoom": 3}"#).unwrap();
    assert_eq!(config.marker_count(), 0);
    assert!(config.planned_lines.is_empty());
    assert!(config.planning_rows.is_empty());
}

#[test]
fn center_is_required() {
    assert!(PageConfig::from_json(r#"{"mapZoom": 3}"#).is_err());
}

#[test]
fn category_lookup_matches_globals() {
    let config = PageConfig::from_json(PAGE).unwrap();
    assert_eq!(
        config.markers.for_category(MarkerCategory::Shipment),
        ["(42.4, 59.6)".to_string()]
    );
    assert!(config.markers.for_category(MarkerCategory::Transport).is_empty());
}
