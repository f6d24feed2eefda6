//! Tunables and key bindings for the camera rig.
//!
//! Both are plain resources. They can be inserted directly or read from a RON
//! file through [`RigSettings`]:
//!
//! ```ron
//! (
//!     camera: (enable_edge_pan: false, min_zoom_distance: 6.0),
//!     bindings: (zoom_in: KeyZ),
//! )
//! ```
//!
//! Missing fields keep their defaults.

use crate::{errors::ConfigError, input::RigKey};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Pan when the pointer is close to a viewport edge.
    pub enable_edge_pan: bool,
    /// Units per second while the pointer is inside the edge margin.
    pub mouse_pan_speed: f32,
    /// Width of the edge margin in pixels.
    pub edge_pan_size: f32,
    /// Units per second per held direction key.
    pub keyboard_pan_speed: f32,
    /// Multiplier on the seconds since the last zoom key edge.
    pub zoom_speed: f32,
    /// Offset height while the zoom key is held.
    pub min_zoom_distance: f32,
    /// Multiplier on the seconds since the last rotation key edge.
    pub rotation_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            enable_edge_pan: true,
            mouse_pan_speed: 5.0,
            edge_pan_size: 50.0,
            keyboard_pan_speed: 5.0,
            zoom_speed: 1.0,
            min_zoom_distance: 7.5,
            rotation_speed: 1.0,
        }
    }
}

impl CameraConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("mouse_pan_speed", self.mouse_pan_speed)?;
        non_negative("edge_pan_size", self.edge_pan_size)?;
        non_negative("keyboard_pan_speed", self.keyboard_pan_speed)?;
        non_negative("zoom_speed", self.zoom_speed)?;
        non_negative("rotation_speed", self.rotation_speed)?;
        if !self.min_zoom_distance.is_finite() || self.min_zoom_distance <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "min_zoom_distance",
                reason: format!("must be positive, got {}", self.min_zoom_distance),
            });
        }
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be finite and >= 0, got {value}"),
        })
    }
}

/// Physical key for every [`RigKey`].
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigKeyBindings {
    pub pan_up: KeyCode,
    pub pan_down: KeyCode,
    pub pan_left: KeyCode,
    pub pan_right: KeyCode,
    pub rotate_left: KeyCode,
    pub rotate_right: KeyCode,
    pub zoom_in: KeyCode,
}

impl Default for RigKeyBindings {
    fn default() -> Self {
        Self {
            pan_up: KeyCode::ArrowUp,
            pan_down: KeyCode::ArrowDown,
            pan_left: KeyCode::ArrowLeft,
            pan_right: KeyCode::ArrowRight,
            rotate_left: KeyCode::PageUp,
            rotate_right: KeyCode::PageDown,
            zoom_in: KeyCode::End,
        }
    }
}

impl RigKeyBindings {
    pub fn key(&self, key: RigKey) -> KeyCode {
        match key {
            RigKey::PanUp => self.pan_up,
            RigKey::PanDown => self.pan_down,
            RigKey::PanLeft => self.pan_left,
            RigKey::PanRight => self.pan_right,
            RigKey::RotateLeft => self.rotate_left,
            RigKey::RotateRight => self.rotate_right,
            RigKey::ZoomIn => self.zoom_in,
        }
    }
}

/// On-disk layout: tunables and bindings in one RON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigSettings {
    pub camera: CameraConfig,
    pub bindings: RigKeyBindings,
}

impl RigSettings {
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let settings: Self = ron::de::from_str(text)?;
        settings.camera.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_asset_values() {
        let config = CameraConfig::default();
        assert!(config.enable_edge_pan);
        assert_eq!(config.mouse_pan_speed, 5.0);
        assert_eq!(config.edge_pan_size, 50.0);
        assert_eq!(config.keyboard_pan_speed, 5.0);
        assert_eq!(config.zoom_speed, 1.0);
        assert_eq!(config.min_zoom_distance, 7.5);
        assert_eq!(config.rotation_speed, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_document_keeps_defaults() {
        let settings = RigSettings::from_ron_str(
            "(camera: (enable_edge_pan: false, zoom_speed: 2.5), bindings: (zoom_in: KeyZ))",
        )
        .expect("parse settings");

        assert!(!settings.camera.enable_edge_pan);
        assert_eq!(settings.camera.zoom_speed, 2.5);
        assert_eq!(settings.camera.min_zoom_distance, 7.5);
        assert_eq!(settings.bindings.zoom_in, KeyCode::KeyZ);
        assert_eq!(settings.bindings.pan_up, KeyCode::ArrowUp);
    }

    #[test]
    fn empty_document_is_all_defaults() {
        let settings = RigSettings::from_ron_str("()").expect("parse settings");
        assert_eq!(settings, RigSettings::default());
    }

    #[test]
    fn rejects_negative_speed() {
        let err = RigSettings::from_ron_str("(camera: (keyboard_pan_speed: -1.0))")
            .expect_err("negative speed must fail");
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "keyboard_pan_speed",
                ..
            }
        ));
    }

    #[test]
    fn rejects_non_positive_min_zoom() {
        let err = RigSettings::from_ron_str("(camera: (min_zoom_distance: 0.0))")
            .expect_err("zero zoom height must fail");
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "min_zoom_distance",
                ..
            }
        ));
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = RigSettings::from_ron_str("(camera: (zoom_speed: \"fast\"))")
            .expect_err("string speed must fail");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn pretty_output_parses_back() {
        let mut settings = RigSettings::default();
        settings.camera.edge_pan_size = 32.0;
        let text = settings.to_ron_string().expect("serialize");
        assert_eq!(RigSettings::from_ron_str(&text).expect("parse"), settings);
    }

    #[test]
    fn serializer_failures_are_not_value_errors() {
        let err = ConfigError::from(ron::Error::Message("unsupported".to_string()));
        assert!(matches!(err, ConfigError::Serialize(_)));
        assert!(err.to_string().contains("unsupported"));
    }

    #[test]
    fn bindings_resolve_every_key() {
        let bindings = RigKeyBindings::default();
        let keys: std::collections::HashSet<KeyCode> =
            RigKey::ALL.iter().map(|key| bindings.key(*key)).collect();
        assert_eq!(keys.len(), RigKey::ALL.len(), "default bindings overlap");
        assert_eq!(bindings.key(RigKey::RotateLeft), KeyCode::PageUp);
        assert_eq!(bindings.key(RigKey::RotateRight), KeyCode::PageDown);
        assert_eq!(bindings.key(RigKey::ZoomIn), KeyCode::End);
    }
}
