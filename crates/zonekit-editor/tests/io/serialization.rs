use tempfile::TempDir;
use zonekit_core::FormatError;
use zonekit_editor::serialization::{load_from_file, load_from_str, save_to_file, save_to_string};
use zonekit_editor::{find_zone_at, EditorState, Point, Territory, TerritoryData, Zone};

const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<territory-type>
    <territory color="4294901760" name="Wolf">
        <zone name="Wolf" smin="2" smax="4" dmin="1" dmax="3" x="7500.5" z="8200" r="80" h="12.5"/>
        <zone name="Wolf" smin="0" smax="0" dmin="1" dmax="3" x="7600" z="8300" r="60"/>
    </territory>
    <territory color="16711935">
        <zone name="Bear" x="100" z="200" r="50"/>
    </territory>
    <territory color="255"/>
    <territory>
        <zone x="1" z="2" r="3"/>
    </territory>
</territory-type>
"#;

#[test]
fn test_load_sample() {
    let data = load_from_str(SAMPLE).unwrap();
    assert_eq!(data.territories.len(), 3, "empty territory dropped");

    let wolf = &data.territories[0];
    assert_eq!(wolf.name, "Wolf");
    assert_eq!(wolf.color, 0xFFFF_0000);
    assert_eq!(wolf.zones.len(), 2);
    assert_eq!(wolf.zones[0].smin, 2);
    assert_eq!(wolf.zones[0].x, 7500.5);
    assert_eq!(wolf.zones[0].h, 12.5);
    assert_eq!(wolf.zones[1].h, 0.0);

    // Nameless territory takes its first zone's name
    let bear = &data.territories[1];
    assert_eq!(bear.name, "Bear");
    assert_eq!(bear.zones[0].smin, 0);
    assert_eq!(bear.zones[0].dmax, 0);

    // Nameless territory with nameless zones is numbered by element index
    assert_eq!(data.territories[2].name, "Territory 3");
    assert_eq!(data.territories[2].color, 0);
}

#[test]
fn test_loaded_zones_are_visible_and_unselected() {
    let data = load_from_str(SAMPLE).unwrap();
    assert!(data.zones().all(|z| z.visible && !z.selected));
    assert!(data.territories.iter().all(|t| t.visible));
}

#[test]
fn test_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("territories.xml");

    let original = load_from_str(SAMPLE).unwrap();
    save_to_file(&path, &original).unwrap();
    let reloaded = load_from_file(&path).unwrap();
    assert_eq!(reloaded, original);
}

#[test]
fn test_names_are_escaped() {
    let mut territory = Territory::new("Wolf & \"Pack\"", 1);
    territory.zones.push(Zone::new("<den>", 1.0, 2.0, 3.0));
    let data = TerritoryData {
        territories: vec![territory],
    };

    let xml = save_to_string(&data).unwrap();
    assert!(xml.contains("&amp;"));
    assert_eq!(load_from_str(&xml).unwrap(), data);
}

#[test]
fn test_transient_flags_never_written() {
    let mut data = load_from_str(SAMPLE).unwrap();
    data.territories[0].zones[0].selected = true;
    data.territories[0].zones[1].visible = false;
    data.territories[1].visible = false;

    let xml = save_to_string(&data).unwrap();
    assert!(!xml.contains("selected"));
    assert!(!xml.contains("visible"));
}

#[test]
fn test_wrong_root_is_rejected() {
    let err = load_from_str("<?xml version=\"1.0\"?><zones/>").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<FormatError>(),
        Some(FormatError::MissingRoot { .. })
    ));
}

#[test]
fn test_malformed_xml_is_rejected() {
    let err = load_from_str("<territory-type><territory></zone></territory-type>").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<FormatError>(),
        Some(FormatError::Xml { .. })
    ));
}

#[test]
fn test_unreadable_radius_cannot_capture_clicks() {
    let xml = r#"<territory-type>
    <territory name="Ghost">
        <zone name="Ghost" x="100" z="100" r="nan"/>
        <zone name="Ghost" x="inf" z="200" r="40"/>
    </territory>
</territory-type>"#;

    let mut ed = EditorState::new();
    ed.replace_data(load_from_str(xml).unwrap());
    assert_eq!(ed.total_zone_count(), 2);
    assert!(ed.document().iter_zones().all(|(_, _, z)| z.x.is_finite() && z.r.is_finite()));
    assert!(find_zone_at(ed.document(), Point::new(9000.0, 9000.0)).is_none());
    assert!(find_zone_at(ed.document(), Point::new(100.0, 100.0)).is_none());
}

#[test]
fn test_only_direct_children_are_read() {
    let xml = r#"<territory-type>
    <territory name="Wolf">
        <zone name="Wolf" x="1" z="1" r="5"/>
        <group>
            <zone name="Stray" x="2" z="2" r="5"/>
        </group>
        <territory name="Inner">
            <zone name="Inner" x="3" z="3" r="5"/>
        </territory>
        <zone name="Wolf" x="4" z="4" r="5"/>
    </territory>
    <group>
        <territory name="Buried">
            <zone name="Buried" x="5" z="5" r="5"/>
        </territory>
    </group>
    <territory name="Bear">
        <zone name="Bear" x="6" z="6" r="5"/>
    </territory>
</territory-type>"#;

    let data = load_from_str(xml).unwrap();
    let names: Vec<&str> = data.territories.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Wolf", "Bear"]);

    let wolf = &data.territories[0];
    assert_eq!(wolf.zones.len(), 2, "nested territory must not close Wolf early");
    assert!(wolf.zones.iter().all(|z| z.name == "Wolf"));
    assert_eq!(wolf.zones[1].x, 4.0);
}

#[test]
fn test_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.xml");
    let err = load_from_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("missing.xml"));
}

#[test]
fn test_editor_load_and_save() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("territories.xml");
    std::fs::write(&path, SAMPLE).unwrap();

    let mut ed = EditorState::new();
    ed.load_from_file(&path).unwrap();
    assert_eq!(ed.total_zone_count(), 4);
    assert_eq!(ed.display_name(), "territories.xml");
    assert!(!ed.can_undo());

    let wolf = ed.document().territory_handle(0).unwrap();
    ed.select_territory(wolf).unwrap();
    ed.delete_selected();
    assert_eq!(ed.display_name(), "territories.xml*");

    let before = ed.document().data().clone();
    let generation = ed.document().generation();
    assert!(ed.save().unwrap());
    assert!(!ed.is_modified);
    assert_eq!(ed.document().data(), &before, "saving never mutates the document");
    assert_eq!(ed.document().generation(), generation);

    let mut other = EditorState::new();
    other.load_from_file(&path).unwrap();
    assert_eq!(other.total_zone_count(), 2);
}

#[test]
fn test_failed_load_keeps_current_document() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.xml");
    std::fs::write(
        &bad,
        "<territory-type><territory color=\"red\"><zone r=\"5\"/></territory></territory-type>",
    )
    .unwrap();

    let mut ed = EditorState::new();
    ed.add_zone(zonekit_editor::Point::new(10.0, 10.0), "Wolf").unwrap();
    let zone = ed.document().zone_handle(0, 0).unwrap();
    ed.select_zone(zone, false).unwrap();

    assert!(ed.load_from_file(&bad).is_err());
    assert_eq!(ed.total_zone_count(), 1);
    assert_eq!(ed.selected_zone_count(), 1);
    assert!(ed.can_undo());
    assert!(ed.current_file_path.is_none());
}

#[test]
fn test_save_without_path_defers_to_host() {
    let mut ed = EditorState::new();
    assert!(!ed.save().unwrap());
    assert_eq!(ed.display_name(), "Untitled");
}
