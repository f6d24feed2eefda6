//! Input capability consumed by the rig.
//!
//! The controllers never touch Bevy input resources directly. They ask a
//! [`RigInput`] about logical [`RigKey`]s and the pointer, which keeps the
//! per-frame logic testable with scripted input.

use crate::config::RigKeyBindings;
use bevy::prelude::*;

/// Logical keys the rig reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RigKey {
    PanUp,
    PanDown,
    PanLeft,
    PanRight,
    /// Swings the offset to `-max_rotation` on x.
    RotateLeft,
    /// Swings the offset to `+max_rotation` on x.
    RotateRight,
    ZoomIn,
}

impl RigKey {
    pub const ALL: [RigKey; 7] = [
        RigKey::PanUp,
        RigKey::PanDown,
        RigKey::PanLeft,
        RigKey::PanRight,
        RigKey::RotateLeft,
        RigKey::RotateRight,
        RigKey::ZoomIn,
    ];
}

/// Pointer position and viewport size, both in pixels with the origin in the
/// bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub viewport: Vec2,
}

pub trait RigInput {
    /// Level state: the key is held this frame.
    fn pressed(&self, key: RigKey) -> bool;
    /// Edge state: the key went down this frame.
    fn just_pressed(&self, key: RigKey) -> bool;
    /// Edge state: the key went up this frame.
    fn just_released(&self, key: RigKey) -> bool;
    /// `None` when no pointer is over the viewport.
    fn pointer(&self) -> Option<PointerState>;

    fn toggled(&self, key: RigKey) -> bool {
        self.just_pressed(key) || self.just_released(key)
    }
}

/// [`RigInput`] backed by Bevy's keyboard state and the primary window cursor.
pub struct KeyboardPointerInput<'a> {
    keys: &'a ButtonInput<KeyCode>,
    bindings: &'a RigKeyBindings,
    pointer: Option<PointerState>,
}

impl<'a> KeyboardPointerInput<'a> {
    pub fn new(keys: &'a ButtonInput<KeyCode>, bindings: &'a RigKeyBindings) -> Self {
        Self {
            keys,
            bindings,
            pointer: None,
        }
    }

    /// Reads the cursor from `window`. Bevy reports it from the top-left
    /// corner, so y is flipped.
    pub fn with_window(mut self, window: Option<&Window>) -> Self {
        self.pointer = window.and_then(|window| {
            let cursor = window.cursor_position()?;
            let viewport = Vec2::new(window.width(), window.height());
            Some(PointerState {
                position: Vec2::new(cursor.x, viewport.y - cursor.y),
                viewport,
            })
        });
        self
    }
}

impl RigInput for KeyboardPointerInput<'_> {
    fn pressed(&self, key: RigKey) -> bool {
        self.keys.pressed(self.bindings.key(key))
    }

    fn just_pressed(&self, key: RigKey) -> bool {
        self.keys.just_pressed(self.bindings.key(key))
    }

    fn just_released(&self, key: RigKey) -> bool {
        self.keys.just_released(self.bindings.key(key))
    }

    fn pointer(&self) -> Option<PointerState> {
        self.pointer
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bevy_keys_go_through_bindings() {
        let mut keys = ButtonInput::<KeyCode>::default();
        let bindings = RigKeyBindings {
            zoom_in: KeyCode::KeyZ,
            ..default()
        };
        keys.press(KeyCode::KeyZ);
        keys.press(KeyCode::End);

        let input = KeyboardPointerInput::new(&keys, &bindings);
        assert!(input.pressed(RigKey::ZoomIn));
        assert!(input.just_pressed(RigKey::ZoomIn));
        assert!(input.toggled(RigKey::ZoomIn));
        assert!(!input.pressed(RigKey::PanUp));
        assert!(input.pointer().is_none());

        keys.clear();
        keys.release(KeyCode::KeyZ);
        let input = KeyboardPointerInput::new(&keys, &bindings);
        assert!(!input.pressed(RigKey::ZoomIn));
        assert!(input.just_released(RigKey::ZoomIn));
    }

    #[test]
    fn window_cursor_is_flipped_to_bottom_left_origin() {
        let keys = ButtonInput::<KeyCode>::default();
        let bindings = RigKeyBindings::default();
        let mut window = Window::default();
        window.set_cursor_position(Some(Vec2::new(640.0, 10.0)));

        let input = KeyboardPointerInput::new(&keys, &bindings).with_window(Some(&window));
        let pointer = input.pointer().expect("cursor inside window");
        assert_eq!(pointer.viewport, Vec2::new(window.width(), window.height()));
        assert!((pointer.position.x - 640.0).abs() < 1e-3);
        assert!((pointer.position.y - (pointer.viewport.y - 10.0)).abs() < 1e-3);

        let config = crate::config::CameraConfig::default();
        assert_eq!(
            crate::pan::edge_move(&input, &config),
            Vec2::new(0.0, config.mouse_pan_speed)
        );
    }

    #[test]
    fn no_window_means_no_pointer() {
        let keys = ButtonInput::<KeyCode>::default();
        let bindings = RigKeyBindings::default();
        let input = KeyboardPointerInput::new(&keys, &bindings).with_window(None);
        assert_eq!(input.pointer(), None);
    }
}
