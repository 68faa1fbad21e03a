use crate::animation::{ControlInbox, FrameReport};
use crate::config::ScatterConfig;
use crate::controls::DoubleClickDetector;
use crate::state::ScatterState;
use bevy::prelude::*;

#[derive(Resource, Clone)]
pub struct ScatterRes(pub ScatterState);

impl ScatterRes {
    pub fn new(state: ScatterState) -> Self {
        Self(state)
    }
}

/// Configuration the scene was built from.
#[derive(Resource, Clone, Default)]
pub struct ScatterSettings(pub ScatterConfig);

/// Shared handle on the control queue; writers keep their own clones.
#[derive(Resource, Clone, Default)]
pub struct ControlInboxRes(pub ControlInbox);

/// What the last frame step decided.
#[derive(Resource, Clone, Copy, Default, Debug)]
pub struct LastFrame(pub FrameReport);

#[derive(Resource, Clone, Debug)]
pub struct ClickTracker(pub DoubleClickDetector);

impl ClickTracker {
    pub fn new(window_secs: f64) -> Self {
        Self(DoubleClickDetector::new(window_secs))
    }
}

/// Mesh handle of the point cloud, rewritten while animating.
#[derive(Resource, Clone)]
pub struct PointCloudHandle(pub Handle<Mesh>);
