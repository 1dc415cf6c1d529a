use approx::assert_abs_diff_eq;
use cgmath::{Matrix4, SquareMatrix, Vector4};
use parlor::data_structures::transform::{TransformSpec, compose};

fn apply(model: Matrix4<f32>, point: [f32; 3]) -> [f32; 3] {
    let p = model * Vector4::new(point[0], point[1], point[2], 1.0);
    [p.x, p.y, p.z]
}

fn assert_point(actual: [f32; 3], expected: [f32; 3]) {
    for axis in 0..3 {
        assert_abs_diff_eq!(actual[axis], expected[axis], epsilon = 1e-5);
    }
}

#[test]
fn scale_then_rotate_then_translate() {
    let spec = TransformSpec::new([2.0, 1.0, 1.0], [0.0, 90.0, 0.0], [5.0, 0.0, 0.0]);
    assert_point(apply(compose(&spec), [1.0, 0.0, 0.0]), [5.0, 0.0, -2.0]);
}

#[test]
fn identity_spec_gives_identity_matrix() {
    let model = compose(&TransformSpec::identity());
    assert_eq!(model, Matrix4::identity());
    assert_eq!(TransformSpec::default(), TransformSpec::identity());
}

#[test]
fn rotation_about_x_happens_before_y() {
    let spec = TransformSpec::new([1.0; 3], [90.0, 90.0, 0.0], [0.0; 3]);
    // X takes +Y to +Z, then Y takes +Z to +X
    assert_point(apply(compose(&spec), [0.0, 1.0, 0.0]), [1.0, 0.0, 0.0]);
}

#[test]
fn rotation_about_y_happens_before_z() {
    let spec = TransformSpec::new([1.0; 3], [0.0, 90.0, 90.0], [0.0; 3]);
    // Y takes +Z to +X, then Z takes +X to +Y
    assert_point(apply(compose(&spec), [0.0, 0.0, 1.0]), [0.0, 1.0, 0.0]);
}

#[test]
fn translation_is_not_scaled() {
    let spec = TransformSpec::new([3.0, 3.0, 3.0], [0.0; 3], [1.0, 2.0, 3.0]);
    assert_point(apply(compose(&spec), [0.0, 0.0, 0.0]), [1.0, 2.0, 3.0]);
    assert_point(apply(compose(&spec), [1.0, 1.0, 1.0]), [4.0, 5.0, 6.0]);
}

#[test]
fn method_and_free_function_agree() {
    let spec = TransformSpec::new([0.2, 4.5, 0.2], [0.0, 0.0, -10.0], [-13.0, 0.0, 4.5]);
    assert_eq!(spec.compose(), compose(&spec));
}

#[test]
fn tilted_leg_leans_outwards() {
    // unit cylinder top, scaled to a chair leg and tilted by -10 degrees about Z
    let spec = TransformSpec::new([0.2, 4.5, 0.2], [0.0, 0.0, -10.0], [-13.0, 0.0, 4.5]);
    let top = apply(compose(&spec), [0.0, 1.0, 0.0]);
    let angle = (-10.0f32).to_radians();
    assert_point(top, [-13.0 - 4.5 * angle.sin(), 4.5 * angle.cos(), 4.5]);
}
