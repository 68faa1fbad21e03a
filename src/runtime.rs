use bevy::prelude::*;

use crate::animation::ControlInbox;
use crate::config::{ScatterConfig, SurfaceSize};
use crate::render::{ClickTracker, ControlInboxRes, ScatterRenderPlugin, ScatterRes, ScatterSettings};
use crate::state::ScatterState;

/// Everything the scatter plot needs except the windowing plugins.
pub fn insert_scatter_resources(app: &mut App, config: ScatterConfig, inbox: ControlInbox) {
    let state = ScatterState::new(&config);
    app.insert_resource(ClearColor(config.background.0.into()))
        .insert_resource(ClickTracker::new(config.controls.double_click_secs))
        .insert_resource(ScatterRes::new(state))
        .insert_resource(ControlInboxRes(inbox))
        .insert_resource(ScatterSettings(config));
}

fn primary_window(config: &ScatterConfig) -> Window {
    let mut window = Window {
        title: "scatter3d".to_string(),
        ..default()
    };
    if let SurfaceSize::Fixed { width, height } = config.surface {
        window.resolution = (width, height).into();
    }
    window
}

/// Open a window and run the scatter plot until it is shut down.
#[cfg(not(target_arch = "wasm32"))]
pub fn run_scatter(config: ScatterConfig, inbox: ControlInbox) -> crate::Result<()> {
    config.validate()?;
    let window = primary_window(&config);

    let mut app = App::new();
    insert_scatter_resources(&mut app, config, inbox);
    app.add_plugins((
        DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }),
        ScatterRenderPlugin,
    ))
    .run();
    Ok(())
}

/// Attach the scatter plot to the canvas with id `canvas_id`.
#[cfg(target_arch = "wasm32")]
pub fn run_scatter(config: ScatterConfig, inbox: ControlInbox, canvas_id: &str) -> crate::Result<()> {
    config.validate()?;
    let window = Window {
        canvas: Some(format!("#{}", canvas_id)),
        fit_canvas_to_parent: config.surface == SurfaceSize::FitParent,
        ..primary_window(&config)
    };

    let mut app = App::new();
    insert_scatter_resources(&mut app, config, inbox);
    app.add_plugins((
        DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }),
        ScatterRenderPlugin,
    ))
    .run();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_surface_sets_window_size() {
        let config = ScatterConfig::default();
        let window = primary_window(&config);
        assert_eq!(window.resolution.physical_width(), 500);
        assert_eq!(window.resolution.physical_height(), 500);
    }

    #[test]
    fn resources_reflect_config() {
        let mut config = ScatterConfig::default();
        config.cloud.point_count = 12;
        config.cloud.seed = Some(4);

        let mut app = App::new();
        insert_scatter_resources(&mut app, config, ControlInbox::new());
        let state = app.world().resource::<ScatterRes>();
        assert_eq!(state.0.cloud.len(), 12);
        assert_eq!(
            app.world().resource::<ScatterSettings>().0.cloud.seed,
            Some(4)
        );
    }
}
