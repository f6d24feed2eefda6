//! Hold-to-rotate: swings the follow offset to one side of the target while a
//! rotation key is held and back to the starting pose afterwards.

use crate::{
    input::{RigInput, RigKey},
    math::slerp,
    rig::TransitionTarget,
};
use bevy::prelude::*;

/// `RotateRight` wins when both keys are held.
pub fn rotation_target(input: &impl RigInput) -> TransitionTarget {
    if input.pressed(RigKey::RotateRight) {
        TransitionTarget::Positive
    } else if input.pressed(RigKey::RotateLeft) {
        TransitionTarget::Negative
    } else {
        TransitionTarget::Neutral
    }
}

pub fn toggled(input: &impl RigInput) -> bool {
    input.toggled(RigKey::RotateRight) || input.toggled(RigKey::RotateLeft)
}

/// Pose the offset is heading to. The height always comes from `current`.
pub fn target_offset(
    current: Vec3,
    target: TransitionTarget,
    starting_offset: Vec3,
    max_rotation: f32,
) -> Vec3 {
    match target {
        TransitionTarget::Positive => Vec3::new(max_rotation, current.y, 0.0),
        TransitionTarget::Negative => Vec3::new(-max_rotation, current.y, 0.0),
        _ => Vec3::new(starting_offset.x, current.y, starting_offset.z),
    }
}

/// One easing step. Rotation owns x and z; their combined length never
/// exceeds `bound`.
///
/// `bound` must cover every target, including the neutral one, or the rig
/// could never settle back on its starting offset.
pub fn step(current: Vec3, target: Vec3, blend: f32, bound: f32) -> Vec3 {
    let eased = slerp(current, target, blend);
    let horizontal = eased.xz().clamp_length_max(bound);
    Vec3::new(horizontal.x, current.y, horizontal.y)
}
