use crate::{
    config::CameraConfig,
    errors::RigError,
    input::{RigInput, RigKey},
    math::blend_factor,
    pan, rotation, zoom,
};
use bevy::prelude::*;

/// Links the entity that gets panned with the camera whose follow offset gets
/// zoomed and rotated.
#[derive(Component, Debug, Clone, Copy)]
pub struct CameraRig {
    pub target: Entity,
    pub camera: Entity,
}

impl CameraRig {
    pub fn new(target: Entity, camera: Entity) -> Self {
        Self { target, camera }
    }
}

/// Time stamps of the current frame, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameClock {
    /// Seconds since startup.
    pub now: f32,
    /// Seconds since the previous frame.
    pub delta: f32,
}

impl FrameClock {
    pub fn from_time(time: &Time) -> Self {
        Self {
            now: time.elapsed_secs(),
            delta: time.delta_secs(),
        }
    }
}

/// Where a zoom or rotation transition is heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionTarget {
    /// Back to the captured starting offset.
    #[default]
    Neutral,
    /// Down to `min_zoom_distance`.
    Zoomed,
    /// Swung to `+max_rotation` on x.
    Positive,
    /// Swung to `-max_rotation` on x.
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Transition {
    started_at: f32,
    target: TransitionTarget,
}

impl Transition {
    /// Restarts the blend on a key edge and records the new target.
    fn observe(&mut self, edge: bool, target: TransitionTarget, now: f32) -> bool {
        if edge {
            self.started_at = now;
        }
        let changed = self.target != target;
        self.target = target;
        changed
    }

    fn blend(&self, now: f32, speed: f32) -> f32 {
        blend_factor(now, self.started_at, speed)
    }
}

/// Per-rig state, captured once from the camera's initial follow offset.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct RigState {
    starting_offset: Vec3,
    max_rotation: f32,
    zoom: Transition,
    rotation: Transition,
}

impl RigState {
    pub fn capture(offset: Vec3) -> Self {
        Self {
            starting_offset: offset,
            max_rotation: offset.z.abs(),
            zoom: Transition::default(),
            rotation: Transition::default(),
        }
    }

    /// Like [`RigState::capture`], for a camera that may lack a follow offset.
    pub fn try_capture(camera: Entity, offset: Option<Vec3>) -> Result<Self, RigError> {
        offset
            .map(Self::capture)
            .ok_or(RigError::MissingFollowOffset(camera))
    }

    pub fn starting_offset(&self) -> Vec3 {
        self.starting_offset
    }

    pub fn max_rotation(&self) -> f32 {
        self.max_rotation
    }

    /// Longest horizontal offset the rotation may produce: the swing
    /// distance, or the starting pose if that reaches further out.
    pub fn horizontal_bound(&self) -> f32 {
        self.max_rotation.max(self.starting_offset.xz().length())
    }

    pub fn zoom_target(&self) -> TransitionTarget {
        self.zoom.target
    }

    pub fn rotation_target(&self) -> TransitionTarget {
        self.rotation.target
    }

    /// Runs one frame: pan, then zoom, then rotation.
    ///
    /// A frame without elapsed time still records key edges but moves nothing,
    /// so repeating it is a no-op.
    pub fn tick(
        &mut self,
        target: &mut Vec3,
        offset: &mut Vec3,
        input: &impl RigInput,
        clock: FrameClock,
        config: &CameraConfig,
    ) {
        *target += pan::pan_delta(input, config, clock.delta);

        let zoom_target = zoom::zoom_target(input);
        if self
            .zoom
            .observe(input.toggled(RigKey::ZoomIn), zoom_target, clock.now)
        {
            debug!("zoom heading to {zoom_target:?}");
        }

        let rotation_target = rotation::rotation_target(input);
        if self
            .rotation
            .observe(rotation::toggled(input), rotation_target, clock.now)
        {
            debug!("rotation heading to {rotation_target:?}");
        }

        if clock.delta <= 0.0 {
            return;
        }

        let blend = self.zoom.blend(clock.now, config.zoom_speed);
        let goal = zoom::target_offset(*offset, zoom_target, self.starting_offset, config);
        *offset = zoom::step(*offset, goal, blend);

        let blend = self.rotation.blend(clock.now, config.rotation_speed);
        let goal = rotation::target_offset(
            *offset,
            rotation_target,
            self.starting_offset,
            self.max_rotation,
        );
        *offset = rotation::step(*offset, goal, blend, self.horizontal_bound());
    }
}
