//! RTS-style camera rig for Bevy.
//!
//! A [`CameraRig`] pans a target entity on the ground plane and eases the
//! [`FollowOffset`] of its camera toward a zoom or rotation pose. The per-frame
//! logic lives in [`RigState::tick`] and only needs a [`RigInput`], so it can be
//! driven without an `App`. [`CameraRigPlugin`] wires it into the `Update`
//! schedule.

pub mod config;
pub mod errors;
pub mod follow;
pub mod input;
pub mod math;
pub mod pan;
pub mod plugin;
pub mod rig;
pub mod rotation;
pub mod zoom;

pub use config::{CameraConfig, RigKeyBindings, RigSettings};
pub use errors::{ConfigError, RigError};
pub use follow::FollowOffset;
pub use input::{KeyboardPointerInput, PointerState, RigInput, RigKey};
pub use plugin::{CameraRigPlugin, CameraRigSet};
pub use rig::{CameraRig, FrameClock, RigState, TransitionTarget};
