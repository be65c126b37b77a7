//! Cross-checks the separating-axis polygon test against a brute-force
//! predicate (any edge pair crossing, or one polygon containing a vertex of
//! the other) over randomly generated convex polygons.

use phys2d::core::math::vec2;
use phys2d::shape::{intersects::polygon_contains_point, PointSet, Shape, ShapeKind};
use phys2d::transform::Transform;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_convex_polygon(rng: &mut StdRng) -> Shape<f64> {
    // regular polygons are convex and counter clockwise by construction
    let num_points = rng.gen_range(3..=8);
    let radius = rng.gen_range(0.3..1.5);
    let point_rotation = rng.gen_range(0.0..360.0);
    let position = vec2(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
    let rotation = rng.gen_range(0.0..360.0);

    Shape::polygon(
        Transform::new(position, rotation),
        PointSet::regular_polygon(point_rotation, num_points, radius),
    )
}

fn world_points(shape: &Shape<f64>) -> &PointSet<f64> {
    shape.world_points().expect("polygon has world points")
}

fn brute_force_intersects(a: &Shape<f64>, b: &Shape<f64>) -> bool {
    // any pair of edges crossing
    for ea in a.world_edges() {
        for eb in b.world_edges() {
            if ea.intersects(eb) {
                return true;
            }
        }
    }

    // or full containment of one inside the other (convex, so a single
    // contained vertex suffices once edge crossings are ruled out)
    let (ShapeKind::Polygon(pa), ShapeKind::Polygon(pb)) = (a.kind(), b.kind()) else {
        unreachable!("brute force check only applies to polygon pairs");
    };

    polygon_contains_point(a.aabb(), pa.world_edges(), world_points(b)[0])
        || polygon_contains_point(b.aabb(), pb.world_edges(), world_points(a)[0])
}

#[test]
fn sat_agrees_with_brute_force() {
    let mut rng = StdRng::seed_from_u64(0x5eed_cafe);

    let mut hits = 0;
    let mut misses = 0;

    for i in 0..500 {
        let a = random_convex_polygon(&mut rng);
        let b = random_convex_polygon(&mut rng);

        let sat = a.intersects(&b);
        let brute = brute_force_intersects(&a, &b);

        assert_eq!(
            sat, brute,
            "disagreement at iteration {}: sat = {}, brute force = {},\n a: {:?},\n b: {:?}",
            i, sat, brute, a, b
        );

        if sat {
            hits += 1;
        } else {
            misses += 1;
        }
    }

    // the generation ranges are tuned so both outcomes actually occur
    assert!(hits > 50, "too few intersecting pairs generated: {}", hits);
    assert!(misses > 50, "too few disjoint pairs generated: {}", misses);
}

#[test]
fn sat_symmetry_on_random_pairs() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let a = random_convex_polygon(&mut rng);
        let b = random_convex_polygon(&mut rng);
        assert_eq!(a.intersects(&b), b.intersects(&a));
    }
}
