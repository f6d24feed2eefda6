use bevy::prelude::*;
use camera_rig::{CameraRig, FollowOffset};

/// Behind the target on the `+z` side, where the rig's screen axes line up
/// with the view.
const STARTING_OFFSET: Vec3 = Vec3::new(0.0, 5.0, 10.0);

/// Ground plane, a few landmarks and the rig itself.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_world, spawn_rig));
    }
}

fn spawn_world(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(200.0, 200.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.5, 0.3))),
        Name::new("Ground"),
    ));

    let cube = meshes.add(Cuboid::new(1.0, 1.0, 1.0));
    let material = materials.add(Color::srgb(0.8, 0.7, 0.6));
    for x in -5..=5 {
        for z in -5..=5 {
            if (x + z) % 3 != 0 {
                continue;
            }
            commands.spawn((
                Mesh3d(cube.clone()),
                MeshMaterial3d(material.clone()),
                Transform::from_xyz(x as f32 * 6.0, 0.5, z as f32 * 6.0),
                Name::new(format!("Landmark {x}/{z}")),
            ));
        }
    }

    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Sun"),
    ));
}

fn spawn_rig(mut commands: Commands) {
    let target = commands
        .spawn((Transform::default(), Name::new("Camera Target")))
        .id();

    let camera = commands
        .spawn((
            Camera3d::default(),
            Transform::from_translation(STARTING_OFFSET).looking_at(Vec3::ZERO, Vec3::Y),
            FollowOffset::new(target, STARTING_OFFSET),
            Name::new("RTS Camera"),
        ))
        .id();

    commands.spawn((CameraRig::new(target, camera), Name::new("Camera Rig")));
}
