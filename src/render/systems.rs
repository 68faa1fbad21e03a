use super::*;
use crate::animation::Control;
use crate::config::SurfaceSize;
use crate::controls::{ButtonEdge, PointerEvent, frame_pointer_events};
use crate::core::axis_labels;
use crate::label::{LabelStyle, LabelSurface};
use bevy::input::ButtonState;
use bevy::input::mouse::MouseButtonInput;
use bevy::log::{debug, info};
use bevy::prelude::*;
use bevy::text::TextLayoutInfo;
use bevy::window::PrimaryWindow;
use bevy_camera::{PerspectiveProjection, Projection};

/// Build the camera and the scene group with frame, labels and points.
pub fn setup_scene(
    mut commands: Commands,
    state: Res<ScatterRes>,
    settings: Res<ScatterSettings>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
) {
    let config = &settings.0;
    let state = &state.0;

    // Bevy keeps the aspect ratio in sync with the viewport from here on
    let aspect_ratio = match config.surface {
        SurfaceSize::Fixed { width, height } => width as f32 / height as f32,
        SurfaceSize::FitParent => 1.0,
    };

    commands.spawn((
        SceneCamera,
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: config.camera.fov_degrees.to_radians(),
            aspect_ratio,
            near: config.camera.near,
            far: config.camera.far,
        }),
        Transform::from_translation(state.camera.position)
            .looking_at(state.camera.target, Vec3::Y),
        DistanceFog {
            color: config.fog.color.into(),
            falloff: FogFalloff::ExponentialSquared {
                density: config.fog.density,
            },
            ..default()
        },
    ));

    let root = commands
        .spawn((
            ScatterGroup,
            Transform::from_rotation(Quat::from_rotation_y(state.group_yaw)),
            Visibility::default(),
        ))
        .id();

    draw_frame(&mut commands, root, &config.frame, &mut meshes, &mut materials);

    let style = LabelStyle::from(&config.labels);
    let font: Handle<Font> = match &style.font {
        Some(path) => asset_server.load(path.clone()),
        None => Handle::default(),
    };
    for (index, label) in axis_labels(config.frame.label_offset).iter().enumerate() {
        draw_label(
            &mut commands,
            root,
            index,
            label,
            &style,
            config.labels.scale,
            font.clone(),
            &mut images,
            &mut meshes,
            &mut materials,
        );
    }

    let handle = draw_points(&mut commands, root, &state.cloud, &mut meshes, &mut materials);
    commands.insert_resource(PointCloudHandle(handle));

    info!(
        points = state.cloud.len(),
        animating = state.playback.animating,
        "scatter scene ready"
    );
}

/// Apply every queued control request before anything else runs this frame.
pub fn drain_control_inbox(inbox: Res<ControlInboxRes>, mut state: ResMut<ScatterRes>) {
    for control in inbox.0.drain() {
        match control {
            Control::Pause => info!("paused"),
            Control::Resume => debug!("resume requested"),
            Control::Shutdown => info!("shutdown requested"),
        }
        state.0.apply_control(control);
    }
}

/// Translate primary-button and cursor messages into pointer events.
///
/// Button messages replay in delivery order; see
/// [`frame_pointer_events`] for how they interleave with cursor motion.
pub fn handle_pointer_input(
    mut state: ResMut<ScatterRes>,
    mut clicks: ResMut<ClickTracker>,
    time: Res<Time>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut buttons: MessageReader<MouseButtonInput>,
    mut cursor: MessageReader<CursorMoved>,
) {
    let edges: Vec<ButtonEdge> = buttons
        .read()
        .filter(|event| event.button == MouseButton::Left)
        .map(|event| match event.state {
            ButtonState::Pressed => ButtonEdge::Pressed,
            ButtonState::Released => ButtonEdge::Released,
        })
        .collect();
    let moves: Vec<Vec2> = cursor.read().map(|moved| moved.position).collect();
    if edges.is_empty() && moves.is_empty() {
        return;
    }

    let press_at = windows.single().ok().and_then(Window::cursor_position);
    let now = time.elapsed_secs_f64();
    let events = frame_pointer_events(&edges, press_at, &moves, || clicks.0.press(now));

    for event in events {
        state.0.handle_pointer(event);
        if event == PointerEvent::DoubleClick {
            debug!(animating = state.0.playback.animating, "double-click");
        }
    }
}

/// Step the model one frame.
pub fn advance_frame(mut state: ResMut<ScatterRes>, mut last: ResMut<LastFrame>) {
    last.0 = state.0.tick();
}

/// Copy the model into the engine, only on frames the model presented.
pub fn present_scene(
    last: Res<LastFrame>,
    state: Res<ScatterRes>,
    cloud_mesh: Option<Res<PointCloudHandle>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut group: Query<&mut Transform, (With<ScatterGroup>, Without<SceneCamera>)>,
    mut camera: Query<&mut Transform, (With<SceneCamera>, Without<ScatterGroup>)>,
) {
    if !last.0.presented {
        return;
    }
    let state = &state.0;

    for mut transform in group.iter_mut() {
        transform.rotation = Quat::from_rotation_y(state.group_yaw);
    }
    for mut transform in camera.iter_mut() {
        *transform = Transform::from_translation(state.camera.position)
            .looking_at(state.camera.target, Vec3::Y);
    }

    if last.0.geometry_dirty
        && let Some(handle) = cloud_mesh
        && let Some(mesh) = meshes.get_mut(&handle.0)
    {
        write_positions(mesh, &state.cloud);
    }
}

/// Resize label surfaces to the measured text once layout is known.
///
/// Runs on presented frames only; a layout that changes while paused is
/// picked up on resume.
pub fn fit_label_surfaces(
    last: Res<LastFrame>,
    texts: Query<(&LabelText, &TextLayoutInfo)>,
    mut quads: Query<(&mut AxisLabelQuad, &Mesh3d)>,
    settings: Res<ScatterSettings>,
    mut images: ResMut<Assets<Image>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    if !last.0.presented {
        return;
    }
    let font_size = settings.0.labels.font_size;
    for (text, layout) in texts.iter() {
        // layout not computed yet
        if layout.size.x <= 0.0 {
            continue;
        }
        let Ok((mut quad, quad_mesh)) = quads.get_mut(text.quad) else {
            continue;
        };

        let surface = LabelSurface::measured(layout.size.x, font_size);
        if surface == quad.surface {
            continue;
        }

        if let Some(image) = images.get_mut(&quad.image) {
            image.resize(surface_extent(surface));
        }
        if let Some(mesh) = meshes.get_mut(&quad_mesh.0) {
            *mesh = label_quad(surface, quad.scale);
        }
        debug!(
            label = quad.text,
            width = surface.width,
            height = surface.height,
            "fitted label surface"
        );
        quad.surface = surface;
    }
}

/// Leave the app once the loop has been stopped.
pub fn exit_when_stopped(state: Res<ScatterRes>, mut exit: MessageWriter<AppExit>) {
    if state.0.playback.stopped {
        info!("stopping scatter loop");
        exit.write(AppExit::Success);
    }
}
