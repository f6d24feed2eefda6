mod app;
mod scene;

use crate::scene::ScenePlugin;
use bevy::prelude::*;
use camera_rig::CameraRigPlugin;

fn main() -> anyhow::Result<()> {
    let (mut app, _log_guard) = app::init()?;

    app.add_plugins((CameraRigPlugin, ScenePlugin));

    app.run();
    Ok(())
}
