use zonekit_editor::{find_zone_at, zones_in_rect, Document, Point, ScreenPos, ScreenRect};

use crate::support::{data, territory, viewport};

#[test]
fn test_closest_centre_wins_regardless_of_order() {
    // Query at the origin: one centre 5 away, the other 10 away
    let near = (5.0, 0.0, 20.0);
    let far = (10.0, 0.0, 20.0);

    let doc = Document::from_data(data(vec![territory("Wolf", &[near, far])]));
    let hit = find_zone_at(&doc, Point::new(0.0, 0.0)).unwrap();
    assert_eq!(doc.zone(hit).unwrap().x, 5.0);

    let doc = Document::from_data(data(vec![territory("Wolf", &[far, near])]));
    let hit = find_zone_at(&doc, Point::new(0.0, 0.0)).unwrap();
    assert_eq!(doc.zone(hit).unwrap().x, 5.0);
}

#[test]
fn test_closest_centre_across_territories() {
    let doc = Document::from_data(data(vec![
        territory("Wolf", &[(100.0, 100.0, 50.0)]),
        territory("Bear", &[(110.0, 100.0, 50.0)]),
    ]));
    let hit = find_zone_at(&doc, Point::new(108.0, 100.0)).unwrap();
    assert_eq!(hit.territory_index(), 1);
}

#[test]
fn test_miss_returns_none() {
    let doc = Document::from_data(data(vec![territory("Wolf", &[(100.0, 100.0, 10.0)])]));
    assert!(find_zone_at(&doc, Point::new(500.0, 500.0)).is_none());
    assert!(find_zone_at(&Document::new(), Point::new(0.0, 0.0)).is_none());
}

#[test]
fn test_hidden_zones_and_territories_are_not_picked() {
    let mut d = data(vec![
        territory("Wolf", &[(100.0, 100.0, 10.0)]),
        territory("Bear", &[(300.0, 300.0, 10.0)]),
    ]);
    d.territories[0].zones[0].visible = false;
    d.territories[1].visible = false;
    let doc = Document::from_data(d);

    assert!(find_zone_at(&doc, Point::new(100.0, 100.0)).is_none());
    assert!(find_zone_at(&doc, Point::new(300.0, 300.0)).is_none());
}

#[test]
fn test_rect_ignores_visibility() {
    let mut d = data(vec![territory("Wolf", &[(100.0, 100.0, 10.0)])]);
    d.territories[0].visible = false;
    let doc = Document::from_data(d);
    let vp = viewport();

    // (100, 100) projects to (50, 450)
    let rect = ScreenRect::from_corners(ScreenPos::new(0.0, 400.0), ScreenPos::new(100.0, 500.0));
    assert_eq!(zones_in_rect(&doc, &vp, &rect).len(), 1);
}

#[test]
fn test_rect_uses_projected_centre_only() {
    // Large circle overlapping the rectangle, centre outside it
    let doc = Document::from_data(data(vec![territory("Wolf", &[(500.0, 500.0, 400.0)])]));
    let vp = viewport();
    let rect = ScreenRect::from_corners(ScreenPos::new(0.0, 0.0), ScreenPos::new(200.0, 200.0));
    assert!(zones_in_rect(&doc, &vp, &rect).is_empty());
}

#[test]
fn test_rect_corner_order_and_inclusive_edges() {
    let doc = Document::from_data(data(vec![territory(
        "Wolf",
        &[(100.0, 900.0, 5.0), (200.0, 800.0, 5.0), (600.0, 400.0, 5.0)],
    )]));
    let vp = viewport();
    // Projected centres: (50, 50), (100, 100), (300, 300)
    let a = ScreenPos::new(100.0, 100.0);
    let b = ScreenPos::new(50.0, 50.0);

    let forward = zones_in_rect(&doc, &vp, &ScreenRect::from_corners(a, b));
    let backward = zones_in_rect(&doc, &vp, &ScreenRect::from_corners(b, a));
    assert_eq!(forward.len(), 2);
    assert_eq!(forward, backward);
}
