// Host-side tests for pan, wheel zoom and pinch zoom.

mod support;

use glam::DVec2;
use support::*;
use viz_core::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn two_fingers(distance: f64) -> [DVec2; 2] {
    [DVec2::new(10.0, 20.0), DVec2::new(10.0 + distance, 20.0)]
}

#[test]
fn primary_mouse_drag_pans_in_world_units() {
    let mut scene = FakeScene::default();
    scene.status.scale = 2.0;
    scene.status.x = 5.0;
    scene.status.y = -3.0;
    let mut c = controller(scene);

    let drag = PointerInput::mouse(DVec2::new(100.0, 100.0), DVec2::new(10.0, 4.0), 1);
    assert_eq!(c.on_pointer_move(&drag), Ok(true));

    let status = c.scene().status;
    assert!(approx(status.x, 0.0));
    assert!(approx(status.y, -1.0));
    assert!(c.scene().picks.is_empty());
}

#[test]
fn primary_touch_pans_like_a_drag() {
    let mut c = controller(FakeScene::default());
    let touch = PointerInput::touch(DVec2::ZERO, DVec2::new(-6.0, -2.0), true);
    assert_eq!(c.on_pointer_move(&touch), Ok(true));
    assert!(approx(c.scene().status.x, 6.0));
    assert!(approx(c.scene().status.y, -2.0));
}

#[test]
fn hover_probe_never_moves_the_camera() {
    let mut scene = FakeScene::with_nodes(&["A", "B", "C"]);
    scene.pick_result = Some(2);
    let mut c = controller(scene);
    let before = c.scene().status;

    let hover = PointerInput::mouse(DVec2::new(12.0, 34.0), DVec2::new(50.0, 50.0), 0);
    assert_eq!(c.on_pointer_move(&hover), Ok(false));

    assert_eq!(c.scene().status, before);
    assert!(c.scene().camera_updates().is_empty());
    assert_eq!(c.scene().picks, vec![(12.0, 34.0)]);
    assert_eq!(c.scene().last_update(), Some(&StatusUpdate::Hover(Some(2))));
}

#[test]
fn mouse_with_other_buttons_is_a_hover_probe() {
    let mut c = controller(FakeScene::default());
    let right_drag = PointerInput::mouse(DVec2::ZERO, DVec2::new(5.0, 5.0), 2);
    assert_eq!(c.on_pointer_move(&right_drag), Ok(false));
    assert_eq!(c.scene().last_update(), Some(&StatusUpdate::Hover(None)));
}

#[test]
fn secondary_touch_and_pen_are_ignored() {
    let mut c = controller(FakeScene::default());
    let secondary = PointerInput::touch(DVec2::ZERO, DVec2::new(5.0, 5.0), false);
    assert_eq!(c.on_pointer_move(&secondary), Ok(false));

    let pen = PointerInput {
        kind: PointerKind::from_dom("pen"),
        ..PointerInput::mouse(DVec2::ZERO, DVec2::new(5.0, 5.0), 1)
    };
    assert_eq!(c.on_pointer_move(&pen), Ok(false));
    assert!(c.scene().updates.is_empty());
    assert!(c.scene().picks.is_empty());
}

#[test]
fn wheel_steps_by_sign_not_magnitude() {
    let mut c = controller(FakeScene::default());
    assert!(approx(c.on_wheel(3.0).unwrap(), 0.8));
    assert!(approx(c.on_wheel(300.0).unwrap(), 0.64));
}

#[test]
fn wheel_round_trip_is_not_exact() {
    let mut c = controller(FakeScene::default());
    c.on_wheel(10.0).unwrap();
    let scale = c.on_wheel(-10.0).unwrap();
    // 0.8 * 1.2: close to the start, by design of the step formula.
    assert!(approx(scale, 0.96));
}

#[test]
fn zero_wheel_delta_keeps_scale() {
    let mut c = controller(FakeScene::default());
    assert!(approx(c.on_wheel(0.0).unwrap(), 1.0));
}

#[test]
fn zoom_bounds_clamp_wheel_zoom() {
    let mut c = controller(FakeScene::default());
    c.set_zoom_bounds(ZoomBounds::new(Some(0.7), Some(1.1)).unwrap())
        .unwrap();
    c.on_wheel(1.0).unwrap();
    assert!(approx(c.on_wheel(1.0).unwrap(), 0.7));
    for _ in 0..3 {
        c.on_wheel(-1.0).unwrap();
    }
    assert!(approx(c.scene().status.scale, 1.1));
}

#[test]
fn pinch_scales_incrementally_from_last_distance() {
    let mut c = controller(FakeScene::default());
    c.on_touch_start(&two_fingers(100.0)).unwrap();
    assert_eq!(c.gesture(), Gesture::Pinching { last_distance: 100.0 });

    c.on_touch_move(&two_fingers(150.0)).unwrap();
    assert_eq!(c.scene().status.scale, 1.5);

    c.on_touch_move(&two_fingers(120.0)).unwrap();
    assert!(approx(c.scene().status.scale, 1.5 * 120.0 / 150.0));
    assert_eq!(c.camera_scale_updates(), 2);
}

#[test]
fn touch_move_without_pinch_does_nothing() {
    let mut c = controller(FakeScene::default());
    c.on_touch_start(&[DVec2::ZERO]).unwrap();
    c.on_touch_move(&two_fingers(150.0)).unwrap();
    assert!(c.scene().updates.is_empty());
}

#[test]
fn pinch_ends_when_fewer_than_two_touches_remain() {
    let mut c = controller(FakeScene::default());
    c.on_touch_start(&two_fingers(100.0)).unwrap();
    c.on_touch_end(&[DVec2::ZERO]).unwrap();
    assert_eq!(c.gesture(), Gesture::Idle);

    c.on_touch_move(&two_fingers(200.0)).unwrap();
    assert!(c.scene().updates.is_empty());
}

#[test]
fn third_finger_pauses_pinch_scaling() {
    let mut c = controller(FakeScene::default());
    c.on_touch_start(&two_fingers(100.0)).unwrap();
    let three = [DVec2::ZERO, DVec2::new(50.0, 0.0), DVec2::new(0.0, 50.0)];
    c.on_touch_move(&three).unwrap();
    assert!(c.scene().updates.is_empty());
    assert!(c.gesture().is_pinching());
}

#[test]
fn empty_touch_list_is_rejected_on_start_and_move() {
    let mut c = controller(FakeScene::default());
    assert_eq!(c.on_touch_start(&[]), Err(ControllerError::NoTouches));
    assert_eq!(c.on_touch_move(&[]), Err(ControllerError::NoTouches));
    assert_eq!(c.on_touch_end(&[]), Ok(()));
}

#[test]
fn coincident_fingers_rebase_instead_of_dividing_by_zero() {
    let mut c = controller(FakeScene::default());
    c.on_touch_start(&two_fingers(0.0)).unwrap();
    c.on_touch_move(&two_fingers(80.0)).unwrap();
    assert!(c.scene().updates.is_empty());
    assert_eq!(c.gesture(), Gesture::Pinching { last_distance: 80.0 });

    c.on_touch_move(&two_fingers(40.0)).unwrap();
    assert!(approx(c.scene().status.scale, 0.5));
}

#[test]
fn collapsing_pinch_to_zero_keeps_scale_positive() {
    let mut c = controller(FakeScene::default());
    c.on_touch_start(&two_fingers(100.0)).unwrap();
    assert_eq!(
        c.on_touch_move(&two_fingers(0.0)),
        Err(ControllerError::InvalidScale(0.0))
    );
    assert_eq!(c.scene().status.scale, 1.0);
}

#[test]
fn handlers_refuse_input_after_destroy() {
    let mut c = controller(FakeScene::default());
    c.destroy();
    assert_eq!(c.on_wheel(1.0), Err(ControllerError::Destroyed));
    assert_eq!(
        c.toggle_hit(Selection::None),
        Err(ControllerError::Destroyed)
    );
    assert!(c.scene().updates.is_empty());
}

trait ScaleUpdates {
    fn camera_scale_updates(&self) -> usize;
}

impl ScaleUpdates for InputController<FakeScene> {
    fn camera_scale_updates(&self) -> usize {
        self.scene()
            .camera_updates()
            .iter()
            .filter(|p| p.scale.is_some())
            .count()
    }
}
