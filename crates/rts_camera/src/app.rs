use anyhow::{Context, Result};
use bevy::{log::LogPlugin, prelude::*};
use camera_rig::config::RigSettings;
use std::path::{Path, PathBuf};
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{filter::filter_fn, fmt, prelude::*};

const APP_ID: &str = "rts_camera";

fn out_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join(".out")
}

fn settings_file() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join("camera.ron")
}

/// Builds the app with logging and camera settings in place.
///
/// The returned guard flushes the file log on drop and must outlive `App::run`.
pub fn init() -> Result<(App, WorkerGuard)> {
    let guard = setup_logging(&out_dir().join("logs"))?;
    let settings = load_settings(&settings_file());

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .build()
            .disable::<LogPlugin>()
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "RTS Camera".to_string(),
                    ..default()
                }),
                ..default()
            }),
    );
    app.insert_resource(settings.camera)
        .insert_resource(settings.bindings);

    Ok((app, guard))
}

/// A missing or broken settings file is not fatal; the rig runs on defaults.
fn load_settings(path: &Path) -> RigSettings {
    match RigSettings::load(path) {
        Ok(settings) => {
            info!("Loaded camera settings from {}", path.display());
            settings
        }
        Err(err) => {
            warn!(
                "Failed to load camera settings from {}: {err}; using defaults",
                path.display()
            );
            RigSettings::default()
        }
    }
}

fn setup_logging(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;

    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S").to_string();
    let log_filename = format!("{APP_ID}.{timestamp}.log");

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    #[cfg(debug_assertions)]
    let level = LevelFilter::INFO;

    #[cfg(not(debug_assertions))]
    let level = LevelFilter::WARN;

    // Getrennte Layer: Datei (non-blocking) + Konsole (stdout)
    let file_layer = fmt::Layer::default()
        .with_target(true)
        .with_ansi(false)
        .with_writer(non_blocking)
        .with_filter(filter_fn(move |metadata| metadata.level() <= &level));

    let console_layer = fmt::Layer::default()
        .with_target(true)
        .with_filter(filter_fn(move |metadata| metadata.level() <= &level));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .context("installing tracing subscriber")?;

    Ok(guard)
}
