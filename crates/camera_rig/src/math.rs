use bevy::prelude::*;

const LENGTH_EPSILON: f32 = 1e-5;

/// Spherical interpolation between two offsets.
///
/// Direction follows the great arc from `from` to `to`, length is interpolated
/// linearly. `t` is clamped to `[0, 1]`. Falls back to a linear blend when
/// either vector has (almost) no length.
pub fn slerp(from: Vec3, to: Vec3, t: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    if t <= 0.0 {
        return from;
    }
    if t >= 1.0 {
        return to;
    }
    if from == to {
        return from;
    }

    let from_len = from.length();
    let to_len = to.length();
    if from_len <= LENGTH_EPSILON || to_len <= LENGTH_EPSILON {
        return from.lerp(to, t);
    }

    let from_dir = from / from_len;
    let to_dir = to / to_len;
    // Antiparallel directions rotate about an arbitrary perpendicular axis.
    let arc = Quat::from_rotation_arc(from_dir, to_dir);
    let direction = Quat::IDENTITY.slerp(arc, t) * from_dir;
    direction * (from_len + (to_len - from_len) * t)
}

/// Blend factor for a transition that started at `start`: `(now - start) * speed`
/// clamped to `[0, 1]`.
pub fn blend_factor(now: f32, start: f32, speed: f32) -> f32 {
    ((now - start) * speed).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn endpoints_are_exact() {
        let a = Vec3::new(0.0, 5.0, -10.0);
        let b = Vec3::new(10.0, 5.0, 0.0);
        assert_eq!(slerp(a, b, 0.0), a);
        assert_eq!(slerp(a, b, 1.0), b);
        assert_eq!(slerp(a, b, -3.0), a);
        assert_eq!(slerp(a, b, 7.0), b);
    }

    #[test]
    fn halfway_between_perpendicular_axes() {
        let mid = slerp(Vec3::X, Vec3::Z, 0.5);
        let expected = Vec3::new(1.0, 0.0, 1.0).normalize();
        assert!((mid - expected).length() < EPS, "{mid:?}");
    }

    #[test]
    fn length_is_interpolated_linearly() {
        let mid = slerp(Vec3::X * 2.0, Vec3::Y * 4.0, 0.5);
        assert!((mid.length() - 3.0).abs() < EPS, "{mid:?}");
    }

    #[test]
    fn zero_vector_falls_back_to_lerp() {
        let mid = slerp(Vec3::ZERO, Vec3::new(0.0, 4.0, 0.0), 0.25);
        assert!((mid - Vec3::new(0.0, 1.0, 0.0)).length() < EPS);
    }

    #[test]
    fn antiparallel_keeps_length() {
        let mid = slerp(Vec3::X * 3.0, Vec3::NEG_X * 3.0, 0.5);
        assert!((mid.length() - 3.0).abs() < EPS, "{mid:?}");
        assert!(mid.dot(Vec3::X).abs() < EPS, "{mid:?}");
    }

    #[test]
    fn blend_factor_clamps() {
        assert_eq!(blend_factor(1.0, 2.0, 1.0), 0.0);
        assert_eq!(blend_factor(2.5, 2.0, 1.0), 0.5);
        assert_eq!(blend_factor(10.0, 2.0, 1.0), 1.0);
        assert_eq!(blend_factor(2.25, 2.0, 2.0), 0.5);
    }
}
