use phys2d::core::math::{to_heading, vec2};
use phys2d::points;
use phys2d::shape::Shape;
use phys2d::transform::Transform;
use phys2d::world::{Body, MovementTarget, Settings, World};

const EPS: f64 = 1e-9;

fn probe_body(position: f64) -> Body<f64> {
    Body::new(
        Shape::circle(Transform::new(vec2(position, 0.0), 0.0), 0.5),
        1.0,
    )
}

#[test]
fn solve_body_targets_applies_and_clears_pending_target() {
    let mut world = World::new(Settings::default());
    let body_idx = world.add_body(probe_body(0.0));

    world
        .body_mut(body_idx)
        .set_target(MovementTarget::new(vec2(1.0, 0.0), 2.5, 90.0));
    world.solve_body_targets();

    let body = &world.bodies()[body_idx];
    assert!(body
        .shape()
        .transform()
        .position()
        .fuzzy_eq_eps(vec2(2.5, 0.0), EPS));
    assert_eq!(body.shape().transform().rotation(), 90.0);
    assert!(body.target().is_none());

    // no pending target, solving again changes nothing
    world.solve_body_targets();
    assert!(world.bodies()[body_idx]
        .shape()
        .transform()
        .position()
        .fuzzy_eq_eps(vec2(2.5, 0.0), EPS));
}

#[test]
fn solved_target_moves_collision_geometry() {
    let mut world = World::new(Settings::default());
    let wall = world.add_shape(Shape::polyline(
        Transform::identity(),
        points![(3.0, -5.0), (3.0, 5.0)],
    ));
    let body_idx = world.add_body(probe_body(0.0));

    let before = &world.bodies()[body_idx];
    assert!(!before.shape().intersects(&world.shapes()[wall]));

    world
        .body_mut(body_idx)
        .set_target(MovementTarget::new(to_heading(-90.0), 2.8, 0.0));
    world.solve_body_targets();

    // heading -90 degrees points along +X, moving the body into the wall
    let after = &world.bodies()[body_idx];
    assert!(after.shape().intersects(&world.shapes()[wall]));
}

#[test]
fn lerped_transform_spans_last_to_current_step() {
    let mut world = World::new(Settings::default());
    let body_idx = world.add_body(probe_body(0.0));

    world
        .body_mut(body_idx)
        .set_target(MovementTarget::new(vec2(1.0, 0.0), 4.0, 0.0));
    world.solve_body_targets();

    let body = &world.bodies()[body_idx];
    assert!(body
        .lerped_transform(0.0)
        .position()
        .fuzzy_eq_eps(vec2(0.0, 0.0), EPS));
    assert!(body
        .lerped_transform(0.5)
        .position()
        .fuzzy_eq_eps(vec2(2.0, 0.0), EPS));
    assert!(body
        .lerped_transform(1.0)
        .position()
        .fuzzy_eq_eps(vec2(4.0, 0.0), EPS));
}

#[test]
fn body_reset_restores_initial_transform() {
    let mut body = probe_body(1.5);
    body.set_target(MovementTarget::new(vec2(0.0, 1.0), 3.0, 45.0));

    let mut world = World::new(Settings::default());
    let body_idx = world.add_body(body);
    world.solve_body_targets();

    let moved = world.body_mut(body_idx);
    assert!(moved.shape().transform().rotation() != 0.0);

    moved.reset();
    assert!(moved
        .shape()
        .transform()
        .position()
        .fuzzy_eq_eps(vec2(1.5, 0.0), EPS));
    assert_eq!(moved.shape().transform().rotation(), 0.0);
    // interpolation snapshot collapses onto the restored transform
    assert_eq!(moved.lerped_transform(0.5), *moved.shape().transform());
}

#[test]
fn spatial_index_covers_all_scene_shapes() {
    let mut world = World::new(Settings::default());
    assert!(world.spatial_index().is_none());

    world.add_shape(Shape::circle(Transform::new(vec2(0.0, 0.0), 0.0), 1.0));
    world.add_shape(Shape::circle(Transform::new(vec2(10.0, 0.0), 0.0), 1.0));
    world.add_body(probe_body(20.0));

    let index = world.spatial_index().expect("non-empty scene");
    assert_eq!(index.item_boxes().len(), 3);

    // query around the second static shape only
    let hits = index.query(9.0, -1.0, 11.0, 1.0);
    assert_eq!(hits, vec![1]);
}

#[test]
#[should_panic]
fn non_positive_mass_is_rejected() {
    let _ = Body::new(Shape::circle(Transform::identity(), 1.0), 0.0);
}
