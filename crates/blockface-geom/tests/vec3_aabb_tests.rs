use blockface_geom::{Aabb, Vec3, VoxelCoord};

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn vec3_approx_eq(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps) && approx_eq(a.z, b.z, eps)
}

#[test]
fn vec3_constants() {
    assert!(vec3_approx_eq(Vec3::ZERO, Vec3::new(0.0, 0.0, 0.0), 1e-6));
    assert!(vec3_approx_eq(Vec3::ONE, Vec3::new(1.0, 1.0, 1.0), 1e-6));
}

#[test]
fn vec3_add_sub() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(-4.0, 5.0, -6.0);
    let c = a + b;
    assert!(vec3_approx_eq(c, Vec3::new(-3.0, 7.0, -3.0), 1e-6));
    assert!(vec3_approx_eq(c - a, b, 1e-6));
    assert!(vec3_approx_eq(Vec3::ONE + Vec3::ONE - Vec3::ONE, Vec3::ONE, 1e-6));
}

#[test]
fn vec3_cross_of_axes() {
    let x = Vec3::new(1.0, 0.0, 0.0);
    let y = Vec3::new(0.0, 1.0, 0.0);
    let z = Vec3::new(0.0, 0.0, 1.0);
    assert!(vec3_approx_eq(x.cross(y), z, 1e-6));
    assert!(vec3_approx_eq(y.cross(z), x, 1e-6));
    assert!(vec3_approx_eq(z.cross(x), y, 1e-6));
}

#[test]
fn vec3_length() {
    assert!(approx_eq(Vec3::new(3.0, 4.0, 0.0).length(), 5.0, 1e-6));
    assert_eq!(Vec3::ZERO.length(), 0.0);
}

#[test]
fn vec3_component_min_max() {
    let a = Vec3::new(1.0, -2.0, 3.0);
    let b = Vec3::new(0.0, 5.0, 3.5);
    assert_eq!(a.min(b), Vec3::new(0.0, -2.0, 3.0));
    assert_eq!(a.max(b), Vec3::new(1.0, 5.0, 3.5));
}

#[test]
fn aabb_grow_contains() {
    let bb = Aabb::new(Vec3::ZERO, Vec3::ONE)
        .grow(Vec3::new(-1.0, 0.5, 2.0))
        .grow(Vec3::new(0.5, 3.0, 0.5));
    assert_eq!(bb.min, Vec3::new(-1.0, 0.0, 0.0));
    assert_eq!(bb.max, Vec3::new(1.0, 3.0, 2.0));
    assert!(bb.contains(Vec3::new(0.0, 1.0, 1.0)));
    assert!(bb.contains(bb.max));
    assert!(!bb.contains(Vec3::new(0.0, -0.1, 1.0)));
}

#[test]
fn voxel_coord_vec3_is_min_corner() {
    let c = VoxelCoord::new(-3, 7, 0);
    assert_eq!(c.as_vec3(), Vec3::new(-3.0, 7.0, 0.0));
    assert_eq!(VoxelCoord::ORIGIN.as_vec3(), Vec3::ZERO);
}
