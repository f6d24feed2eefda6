use bevy::prelude::*;

/// Keeps a camera at a fixed offset from `target`, looking at it.
///
/// The rig writes `offset`; [`apply_follow_offsets`] turns it into a
/// transform once per frame.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct FollowOffset {
    pub target: Entity,
    pub offset: Vec3,
}

impl FollowOffset {
    pub fn new(target: Entity, offset: Vec3) -> Self {
        Self { target, offset }
    }
}

/// Targets are expected to be root entities, so their local `Transform` is
/// their world position.
pub fn apply_follow_offsets(
    mut cameras: Query<(&FollowOffset, &mut Transform)>,
    targets: Query<&Transform, Without<FollowOffset>>,
) {
    for (follow, mut transform) in &mut cameras {
        let Ok(target) = targets.get(follow.target) else {
            continue;
        };
        let focus = target.translation;
        let placed = Transform::from_translation(focus + follow.offset).looking_at(focus, Vec3::Y);
        if *transform != placed {
            *transform = placed;
        }
    }
}
