use crate::{
    config::{CameraConfig, RigKeyBindings},
    follow::{apply_follow_offsets, FollowOffset},
    input::KeyboardPointerInput,
    rig::{CameraRig, FrameClock, RigState},
};
use bevy::{prelude::*, window::PrimaryWindow};
use tracing::{error, info};

/// Ordering of the rig systems inside `Update`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraRigSet {
    /// Captures the starting offset of newly added rigs.
    Capture,
    /// Pans, zooms and rotates.
    Drive,
    /// Places follow cameras from their offsets.
    Follow,
}

/// Drives every [`CameraRig`] from the keyboard and the primary window cursor.
///
/// [`CameraConfig`] and [`RigKeyBindings`] fall back to their defaults unless
/// they were inserted before the plugin.
pub struct CameraRigPlugin;

impl Plugin for CameraRigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraConfig>()
            .init_resource::<RigKeyBindings>()
            .configure_sets(
                Update,
                (
                    CameraRigSet::Capture,
                    CameraRigSet::Drive,
                    CameraRigSet::Follow,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    capture_rig_state.in_set(CameraRigSet::Capture),
                    drive_camera_rigs.in_set(CameraRigSet::Drive),
                    apply_follow_offsets.in_set(CameraRigSet::Follow),
                ),
            );
    }
}

/// Captures the starting offset once per rig. A rig whose camera has no
/// [`FollowOffset`] gets no [`RigState`] and stays inert.
fn capture_rig_state(
    mut commands: Commands,
    rigs: Query<(Entity, &CameraRig), Added<CameraRig>>,
    offsets: Query<&FollowOffset>,
) {
    for (entity, rig) in &rigs {
        let offset = offsets.get(rig.camera).ok().map(|follow| follow.offset);
        match RigState::try_capture(rig.camera, offset) {
            Ok(state) => {
                info!(
                    "Camera rig {entity}: starting offset {:?}, max rotation {:.2}",
                    state.starting_offset(),
                    state.max_rotation()
                );
                commands.entity(entity).insert(state);
            }
            Err(err) => error!("Camera rig {entity} disabled: {err}"),
        }
    }
}

fn drive_camera_rigs(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<RigKeyBindings>,
    config: Res<CameraConfig>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut rigs: Query<(&CameraRig, &mut RigState)>,
    mut targets: Query<&mut Transform>,
    mut offsets: Query<&mut FollowOffset>,
) {
    let input = KeyboardPointerInput::new(&keys, &bindings).with_window(windows.single().ok());
    let clock = FrameClock::from_time(&time);

    for (rig, mut state) in &mut rigs {
        let Ok(mut follow) = offsets.get_mut(rig.camera) else {
            continue;
        };
        let Ok(mut target) = targets.get_mut(rig.target) else {
            continue;
        };

        let mut translation = target.translation;
        let mut offset = follow.offset;
        state.tick(&mut translation, &mut offset, &input, clock, &config);

        // Nur schreiben wenn sich etwas geändert hat (Change Detection)
        if translation != target.translation {
            target.translation = translation;
        }
        if offset != follow.offset {
            follow.offset = offset;
        }
    }
}
