//! Hold-to-zoom: lowers the follow offset to `min_zoom_distance` while the
//! zoom key is held and eases back to the starting height afterwards.

use crate::{
    config::CameraConfig,
    input::{RigInput, RigKey},
    math::slerp,
    rig::TransitionTarget,
};
use bevy::prelude::*;

pub fn zoom_target(input: &impl RigInput) -> TransitionTarget {
    if input.pressed(RigKey::ZoomIn) {
        TransitionTarget::Zoomed
    } else {
        TransitionTarget::Neutral
    }
}

/// Pose the offset is heading to. Only the height differs from `current`.
pub fn target_offset(
    current: Vec3,
    target: TransitionTarget,
    starting_offset: Vec3,
    config: &CameraConfig,
) -> Vec3 {
    let height = match target {
        TransitionTarget::Zoomed => config.min_zoom_distance,
        _ => starting_offset.y,
    };
    Vec3::new(current.x, height, current.z)
}

/// One easing step. The zoom owns the height, x and z pass through untouched.
pub fn step(current: Vec3, target: Vec3, blend: f32) -> Vec3 {
    let eased = slerp(current, target, blend);
    Vec3::new(current.x, eased.y, current.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoomed_target_uses_min_distance() {
        let config = CameraConfig::default();
        let start = Vec3::new(0.0, 5.0, -10.0);
        let current = Vec3::new(1.0, 6.0, -9.0);
        assert_eq!(
            target_offset(current, TransitionTarget::Zoomed, start, &config),
            Vec3::new(1.0, 7.5, -9.0)
        );
        assert_eq!(
            target_offset(current, TransitionTarget::Neutral, start, &config),
            Vec3::new(1.0, 5.0, -9.0)
        );
    }

    #[test]
    fn step_only_moves_height() {
        let current = Vec3::new(0.0, 5.0, -10.0);
        let next = step(current, Vec3::new(0.0, 7.5, -10.0), 0.5);
        assert_eq!(next.x, current.x);
        assert_eq!(next.z, current.z);
        assert!(next.y > 5.0 && next.y < 7.5, "{next:?}");
    }
}
