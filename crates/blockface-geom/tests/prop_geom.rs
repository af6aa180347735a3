use blockface_geom::{Aabb, Vec3, VoxelCoord};
use proptest::prelude::*;
use proptest::num::f32::NORMAL;
use proptest::strategy::Strategy;

fn approx(a: f32, b: f32, eps: f32) -> bool { (a - b).abs() <= eps }
fn vapprox(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx(a.x, b.x, eps) && approx(a.y, b.y, eps) && approx(a.z, b.z, eps)
}

fn approx_zero_scaled(val: f32, scale: f32, atol: f32, rtol: f32) -> bool {
    val.abs() <= atol + rtol * scale
}

fn bounded_f32() -> impl Strategy<Value = f32> {
    NORMAL.prop_filter("bounded", |v| v.is_finite() && v.abs() <= 1e6)
}

fn arb_vec3() -> impl Strategy<Value = Vec3> {
    (bounded_f32(), bounded_f32(), bounded_f32())
        .prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn arb_coord() -> impl Strategy<Value = VoxelCoord> {
    (-1_000_000i32..=1_000_000, -1_000_000i32..=1_000_000, -1_000_000i32..=1_000_000)
        .prop_map(|(x, y, z)| VoxelCoord::new(x, y, z))
}

proptest! {
    #[test]
    fn vec3_add_commutative(a in arb_vec3(), b in arb_vec3()) {
        prop_assert!(vapprox(a + b, b + a, 1e-5));
    }

    // a·(a×b) = 0 and b·(a×b) = 0; rounding grows with |a|·|a|·|b|
    #[test]
    fn vec3_cross_orthogonal(a in arb_vec3(), b in arb_vec3()) {
        let c = a.cross(b);
        let (la, lb) = (a.length(), b.length());
        prop_assert!(approx_zero_scaled(a.dot(c), la * la * lb, 1e-6, 1e-5));
        prop_assert!(approx_zero_scaled(b.dot(c), la * lb * lb, 1e-6, 1e-5));
    }

    // Growing a box by a point always contains the point and the old corners
    #[test]
    fn aabb_grow_contains(a in arb_vec3(), b in arb_vec3(), p in arb_vec3()) {
        let bb = Aabb::new(a.min(b), a.max(b));
        let g = bb.grow(p);
        prop_assert!(g.contains(p));
        prop_assert!(g.contains(bb.min));
        prop_assert!(g.contains(bb.max));
    }

    // Unit neighbors differ by exactly one in world space
    #[test]
    fn coord_neighbor_is_unit_step(c in arb_coord(), axis in 0usize..3, sign in prop::bool::ANY) {
        let d = if sign { 1 } else { -1 };
        let (dx, dy, dz) = match axis { 0 => (d, 0, 0), 1 => (0, d, 0), _ => (0, 0, d) };
        let n = c.checked_offset(dx, dy, dz).unwrap();
        let delta = n.as_vec3() - c.as_vec3();
        prop_assert!(vapprox(delta, Vec3::new(dx as f32, dy as f32, dz as f32), 1e-6));
    }
}
