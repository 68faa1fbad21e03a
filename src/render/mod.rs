pub mod components;
pub mod draw;
pub mod resources;
pub mod systems;

pub use components::*;
pub use draw::*;
pub use resources::*;
use systems::*;

use bevy::prelude::*;

/// Scene setup plus the per-frame loop.
///
/// Expects [`ScatterRes`], [`ScatterSettings`], [`ControlInboxRes`] and
/// [`ClickTracker`] to be inserted by the caller.
#[derive(Default)]
pub struct ScatterRenderPlugin;

impl Plugin for ScatterRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LastFrame>()
            .add_systems(Startup, setup_scene)
            .add_systems(
                Update,
                (
                    drain_control_inbox,
                    handle_pointer_input,
                    advance_frame,
                    present_scene,
                    fit_label_surfaces,
                    exit_when_stopped,
                )
                    .chain(),
            );
    }
}
