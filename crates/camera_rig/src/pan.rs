//! Ground-plane panning from arrow keys and the viewport edges.

use crate::{
    config::CameraConfig,
    input::{RigInput, RigKey},
};
use bevy::prelude::*;

/// Keyboard contribution in units per second. Opposite keys cancel.
pub fn keyboard_move(input: &impl RigInput, config: &CameraConfig) -> Vec2 {
    let speed = config.keyboard_pan_speed;
    let mut amount = Vec2::ZERO;

    if input.pressed(RigKey::PanUp) {
        amount.y += speed;
    }
    if input.pressed(RigKey::PanLeft) {
        amount.x -= speed;
    }
    if input.pressed(RigKey::PanDown) {
        amount.y -= speed;
    }
    if input.pressed(RigKey::PanRight) {
        amount.x += speed;
    }

    amount
}

/// Edge-pan contribution in units per second.
///
/// The left and bottom margins win over the right and top ones when the
/// viewport is smaller than two margins.
pub fn edge_move(input: &impl RigInput, config: &CameraConfig) -> Vec2 {
    let mut amount = Vec2::ZERO;
    if !config.enable_edge_pan {
        return amount;
    }
    let Some(pointer) = input.pointer() else {
        return amount;
    };

    let edge = config.edge_pan_size;
    let speed = config.mouse_pan_speed;
    let position = pointer.position;

    if position.x <= edge {
        amount.x -= speed;
    } else if position.x >= pointer.viewport.x - edge {
        amount.x += speed;
    }

    if position.y >= pointer.viewport.y - edge {
        amount.y += speed;
    } else if position.y <= edge {
        amount.y -= speed;
    }

    amount
}

/// World-space translation for this frame.
///
/// Screen right is world `+x` and screen up is world `-z` (Bevy's forward), so
/// panning matches the view of a camera that sits on the `+z` side of its
/// target. The target's height is never changed.
pub fn pan_delta(input: &impl RigInput, config: &CameraConfig, delta_secs: f32) -> Vec3 {
    let amount = (keyboard_move(input, config) + edge_move(input, config)) * delta_secs;
    Vec3::new(amount.x, 0.0, -amount.y)
}
