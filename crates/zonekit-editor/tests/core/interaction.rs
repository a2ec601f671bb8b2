use zonekit_editor::{CanvasResponse, Gesture, Modifiers, MouseButton, Point, PointerEvent, ScreenPos};

use crate::support::{approx, click, editor, move_to, press, release, screen, territory, zone_at};

fn two_zones() -> zonekit_editor::EditorState {
    editor(vec![territory("Wolf", &[(10.0, 10.0, 5.0), (20.0, 20.0, 5.0)])])
}

#[test]
fn test_rigid_multi_drag() {
    let mut ed = two_zones();
    let a = screen(&ed, 10.0, 10.0);
    let b = screen(&ed, 20.0, 20.0);
    click(&mut ed, a, Modifiers::NONE);
    click(&mut ed, b, Modifiers::CTRL);
    assert_eq!(ed.selected_zone_count(), 2);

    let response = ed.handle_pointer(press(MouseButton::Left, a, Modifiers::NONE));
    assert_eq!(response, CanvasResponse::DragStarted);
    assert!(ed.interaction().is_dragging());

    let response = ed.handle_pointer(move_to(screen(&ed, 15.0, 12.0)));
    assert_eq!(response, CanvasResponse::ZonesMoved);
    let target = screen(&ed, 15.0, 12.0);
    ed.handle_pointer(release(MouseButton::Left, target, Modifiers::NONE));
    assert!(ed.interaction().is_idle());

    let za = zone_at(&ed, 0, 0);
    let zb = zone_at(&ed, 0, 1);
    assert!(approx(za.x, 15.0) && approx(za.z, 12.0));
    assert!(approx(zb.x, 25.0) && approx(zb.z, 22.0));
    assert_eq!(ed.selected_zone_count(), 2);
    assert!(ed.is_modified);
}

#[test]
fn test_drag_takes_one_snapshot() {
    let mut ed = two_zones();
    let a = screen(&ed, 10.0, 10.0);
    click(&mut ed, a, Modifiers::NONE);

    ed.handle_pointer(press(MouseButton::Left, a, Modifiers::NONE));
    for step in 1..=20 {
        let pos = ScreenPos::new(a.x + step as f64, a.y);
        ed.handle_pointer(move_to(pos));
    }
    ed.handle_pointer(release(MouseButton::Left, a, Modifiers::NONE));
    assert_eq!(ed.history().len(), 1);

    assert!(ed.undo());
    assert_eq!(zone_at(&ed, 0, 0).position(), Point::new(10.0, 10.0));
    assert!(ed.selection().is_empty());
}

#[test]
fn test_click_unselected_zone_replaces_selection() {
    let mut ed = two_zones();
    let a = screen(&ed, 10.0, 10.0);
    let b = screen(&ed, 20.0, 20.0);

    let response = ed.handle_pointer(press(MouseButton::Left, a, Modifiers::NONE));
    assert_eq!(response, CanvasResponse::SelectionChanged);
    ed.handle_pointer(release(MouseButton::Left, a, Modifiers::NONE));

    click(&mut ed, b, Modifiers::NONE);
    assert_eq!(ed.selected_zone_count(), 1);
    assert!(zone_at(&ed, 0, 1).selected);
    assert!(!zone_at(&ed, 0, 0).selected);
    assert!(!ed.can_undo(), "selecting does not snapshot");
}

#[test]
fn test_click_empty_space_clears_selection() {
    let mut ed = two_zones();
    let a = screen(&ed, 10.0, 10.0);
    click(&mut ed, a, Modifiers::NONE);

    let empty = screen(&ed, 500.0, 500.0);
    let response = ed.handle_pointer(press(MouseButton::Left, empty, Modifiers::NONE));
    assert_eq!(response, CanvasResponse::MarqueeUpdated);
    let response = ed.handle_pointer(release(MouseButton::Left, empty, Modifiers::NONE));
    assert_eq!(response, CanvasResponse::SelectionChanged);
    assert!(ed.selection().is_empty());
}

#[test]
fn test_left_marquee_selects_by_centre() {
    let mut ed = editor(vec![territory(
        "Wolf",
        &[(100.0, 100.0, 5.0), (200.0, 200.0, 5.0), (900.0, 900.0, 5.0)],
    )]);
    let start = screen(&ed, 50.0, 250.0);
    let end = screen(&ed, 250.0, 50.0);

    ed.handle_pointer(press(MouseButton::Left, start, Modifiers::NONE));
    ed.handle_pointer(move_to(end));
    let rect = ed.interaction().marquee_rect().unwrap();
    assert!(rect.width() > 0.0 && rect.height() > 0.0);
    ed.handle_pointer(release(MouseButton::Left, end, Modifiers::NONE));

    assert_eq!(ed.selected_zone_count(), 2);
    assert!(!zone_at(&ed, 0, 2).selected);
    assert!(ed.interaction().marquee_rect().is_none());
}

#[test]
fn test_shift_forces_marquee_over_zone() {
    let mut ed = two_zones();
    let a = screen(&ed, 10.0, 10.0);
    let response = ed.handle_pointer(press(MouseButton::Left, a, Modifiers::SHIFT));
    assert_eq!(response, CanvasResponse::MarqueeUpdated);
    assert!(ed.interaction().is_marquee_selecting());
    assert!(ed.selection().is_empty());
}

#[test]
fn test_right_marquee_additive_with_ctrl() {
    let mut ed = editor(vec![territory("Wolf", &[(100.0, 100.0, 5.0), (800.0, 800.0, 5.0)])]);
    let far = screen(&ed, 800.0, 800.0);
    click(&mut ed, far, Modifiers::NONE);

    let start = screen(&ed, 50.0, 150.0);
    let end = screen(&ed, 150.0, 50.0);
    ed.handle_pointer(press(MouseButton::Right, start, Modifiers::NONE));
    ed.handle_pointer(move_to(end));
    // Releasing a different button does not finish the marquee
    assert_eq!(
        ed.handle_pointer(release(MouseButton::Left, end, Modifiers::CTRL)),
        CanvasResponse::Ignored
    );
    ed.handle_pointer(release(MouseButton::Right, end, Modifiers::CTRL));

    assert_eq!(ed.selected_zone_count(), 2);
    assert!(ed.selection().is_consistent_with(ed.document()));
}

#[test]
fn test_right_marquee_replaces_without_ctrl() {
    let mut ed = editor(vec![territory("Wolf", &[(100.0, 100.0, 5.0), (800.0, 800.0, 5.0)])]);
    let far = screen(&ed, 800.0, 800.0);
    click(&mut ed, far, Modifiers::NONE);

    let start = screen(&ed, 50.0, 150.0);
    let end = screen(&ed, 150.0, 50.0);
    ed.handle_pointer(press(MouseButton::Right, start, Modifiers::NONE));
    ed.handle_pointer(move_to(end));
    ed.handle_pointer(release(MouseButton::Right, end, Modifiers::NONE));

    assert_eq!(ed.selected_zone_count(), 1);
    assert!(zone_at(&ed, 0, 0).selected);
}

#[test]
fn test_hidden_zone_not_clickable_but_marquee_selects_it() {
    let mut ed = two_zones();
    let wolf = ed.document().territory_handle(0).unwrap();
    ed.set_territory_visible(wolf, false).unwrap();

    let a = screen(&ed, 10.0, 10.0);
    assert_eq!(
        ed.handle_pointer(press(MouseButton::Left, a, Modifiers::NONE)),
        CanvasResponse::MarqueeUpdated
    );
    let end = screen(&ed, 30.0, 0.0);
    ed.handle_pointer(move_to(end));
    ed.handle_pointer(release(MouseButton::Left, end, Modifiers::NONE));
    assert_eq!(ed.selected_zone_count(), 1);
}

#[test]
fn test_middle_drag_pans() {
    let mut ed = two_zones();
    let start = ScreenPos::new(100.0, 100.0);
    ed.handle_pointer(press(MouseButton::Middle, start, Modifiers::NONE));
    assert!(matches!(ed.interaction().gesture(), Gesture::Panning { .. }));

    assert_eq!(
        ed.handle_pointer(move_to(ScreenPos::new(130.0, 80.0))),
        CanvasResponse::ViewChanged
    );
    ed.handle_pointer(move_to(ScreenPos::new(140.0, 90.0)));
    ed.handle_pointer(release(MouseButton::Middle, start, Modifiers::NONE));

    assert_eq!(ed.viewport().pan_x(), 40.0);
    assert_eq!(ed.viewport().pan_y(), -10.0);
    assert!(ed.interaction().is_idle());
    assert!(!ed.is_modified);
}

#[test]
fn test_wheel_only_over_canvas() {
    let mut ed = two_zones();
    let outside = ScreenPos::new(900.0, 900.0);
    let response = ed.handle_pointer(PointerEvent::Wheel {
        pos: outside,
        delta: 1.0,
    });
    assert_eq!(response, CanvasResponse::Ignored);
    assert_eq!(ed.viewport().zoom(), 1.0);

    let anchor = ScreenPos::new(200.0, 300.0);
    let world = ed.viewport().screen_to_world(anchor);
    let response = ed.handle_pointer(PointerEvent::Wheel { pos: anchor, delta: 3.0 });
    assert_eq!(response, CanvasResponse::ViewChanged);
    assert!(approx(ed.viewport().zoom(), 1.3));
    let after = ed.viewport().world_to_screen(world);
    assert!(approx(after.x, anchor.x) && approx(after.y, anchor.y));
}

#[test]
fn test_press_outside_canvas_ignored() {
    let mut ed = two_zones();
    let response = ed.handle_pointer(press(MouseButton::Left, ScreenPos::new(-5.0, 10.0), Modifiers::NONE));
    assert_eq!(response, CanvasResponse::Ignored);
    assert!(ed.interaction().is_idle());
}

#[test]
fn test_double_click_on_empty_canvas_requests_zone() {
    let mut ed = two_zones();
    let pos = screen(&ed, 400.0, 600.0);
    let response = ed.handle_pointer(PointerEvent::DoubleClick {
        button: MouseButton::Left,
        pos,
        modifiers: Modifiers::NONE,
    });
    match response {
        CanvasResponse::CreateZoneRequested(world) => {
            assert!(approx(world.x, 400.0) && approx(world.z, 600.0));
        }
        other => panic!("unexpected response {other:?}"),
    }
    assert_eq!(ed.total_zone_count(), 2, "the request does not mutate data");
    assert!(ed.interaction().is_idle());
}

#[test]
fn test_double_click_on_zone_acts_as_press() {
    let mut ed = two_zones();
    let a = screen(&ed, 10.0, 10.0);
    let response = ed.handle_pointer(PointerEvent::DoubleClick {
        button: MouseButton::Left,
        pos: a,
        modifiers: Modifiers::NONE,
    });
    assert_eq!(response, CanvasResponse::SelectionChanged);
}

#[test]
fn test_no_double_click_request_during_gesture() {
    let mut ed = two_zones();
    let start = screen(&ed, 500.0, 500.0);
    ed.handle_pointer(press(MouseButton::Right, start, Modifiers::NONE));

    let response = ed.handle_pointer(PointerEvent::DoubleClick {
        button: MouseButton::Left,
        pos: screen(&ed, 600.0, 600.0),
        modifiers: Modifiers::NONE,
    });
    assert_eq!(response, CanvasResponse::Ignored);
    assert!(ed.interaction().is_marquee_selecting());
}

#[test]
fn test_undo_mid_drag_abandons_gesture() {
    let mut ed = two_zones();
    let a = screen(&ed, 10.0, 10.0);
    click(&mut ed, a, Modifiers::NONE);
    ed.handle_pointer(press(MouseButton::Left, a, Modifiers::NONE));
    ed.handle_pointer(move_to(screen(&ed, 50.0, 50.0)));

    assert!(ed.undo());
    assert!(ed.interaction().is_idle());
    assert_eq!(
        ed.handle_pointer(move_to(screen(&ed, 80.0, 80.0))),
        CanvasResponse::Ignored
    );
    assert_eq!(zone_at(&ed, 0, 0).position(), Point::new(10.0, 10.0));
}
