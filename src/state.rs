//! The single owner of all mutable scene state.
//!
//! Pointer handling, control messages and the frame step all go through
//! [`ScatterState`]; the render layer only reads it back into the engine.

use bevy_math::Vec3;

use crate::animation::{Control, FrameReport, Playback};
use crate::cloud;
use crate::config::ScatterConfig;
use crate::controls::{ControlEffect, DragState, InteractionController, PointerEvent};
use crate::core::{CameraState, PointCloud};

#[derive(Clone, Debug)]
pub struct ScatterState {
    pub cloud: PointCloud,
    /// Rotation of the scene group about the vertical axis, radians.
    pub group_yaw: f32,
    pub camera: CameraState,
    pub playback: Playback,
    controller: InteractionController,
    angle_step: f32,
    presented_frames: u64,
}

impl ScatterState {
    pub fn new(config: &ScatterConfig) -> Self {
        Self::with_cloud(config, cloud::generate_from_config(&config.cloud))
    }

    pub fn with_cloud(config: &ScatterConfig, cloud: PointCloud) -> Self {
        Self {
            cloud,
            group_yaw: config.frame.initial_yaw,
            camera: CameraState::new(Vec3::from_array(config.camera.position)),
            playback: Playback {
                animating: config.controls.animate_on_start,
                ..Playback::default()
            },
            controller: InteractionController::new(&config.controls),
            angle_step: config.controls.angle_step,
            presented_frames: 0,
        }
    }

    pub fn drag(&self) -> DragState {
        self.controller.drag()
    }

    pub fn presented_frames(&self) -> u64 {
        self.presented_frames
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match self.controller.handle(event) {
            Some(ControlEffect::Orbit { yaw, lift }) => {
                self.group_yaw += yaw;
                self.camera.position.y += lift;
            }
            Some(ControlEffect::ToggleAnimation) => self.playback.toggle_animation(),
            None => {}
        }
    }

    pub fn apply_control(&mut self, control: Control) {
        self.playback.apply(control);
    }

    /// One iteration of the frame loop.
    ///
    /// While paused or stopped nothing moves and nothing is presented.
    pub fn tick(&mut self) -> FrameReport {
        if !self.playback.is_running() {
            return FrameReport::default();
        }

        let geometry_dirty = self.playback.animating;
        if geometry_dirty {
            self.cloud.advance_orbits(self.angle_step);
        }
        self.camera.look_at_origin();
        self.presented_frames += 1;

        FrameReport {
            presented: true,
            geometry_dirty,
        }
    }
}
