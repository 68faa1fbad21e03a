//! The whole render plugin in a headless app: scene setup, Bevy input
//! messages and label fitting.

use bevy::asset::{AssetApp, AssetPlugin};
use bevy::input::ButtonState;
use bevy::input::mouse::MouseButtonInput;
use bevy::prelude::*;
use bevy::text::TextLayoutInfo;
use bevy::window::{CursorMoved, PrimaryWindow};
use scatter3d::animation::ControlInbox;
use scatter3d::config::ScatterConfig;
use scatter3d::label::LabelSurface;
use scatter3d::render::{
    AxisLabelQuad, LabelText, PointCloudHandle, ScatterGroup, ScatterRenderPlugin, ScatterRes,
    SceneCamera,
};
use scatter3d::runtime::insert_scatter_resources;

struct Harness {
    app: App,
    window: Entity,
    inbox: ControlInbox,
}

impl Harness {
    fn new() -> Self {
        let mut config = ScatterConfig::default();
        config.cloud.point_count = 32;
        config.cloud.seed = Some(4);

        let inbox = ControlInbox::new();
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<Mesh>()
            .init_asset::<StandardMaterial>()
            .init_asset::<Image>()
            .add_message::<MouseButtonInput>()
            .add_message::<CursorMoved>();
        insert_scatter_resources(&mut app, config, inbox.clone());
        app.add_plugins(ScatterRenderPlugin);

        let window = app
            .world_mut()
            .spawn((Window::default(), PrimaryWindow))
            .id();
        // startup
        app.update();

        Self { app, window, inbox }
    }

    fn cursor_to(&mut self, x: f32, y: f32) {
        let position = Vec2::new(x, y);
        let mut window = self.app.world_mut().get_mut::<Window>(self.window).unwrap();
        window.set_cursor_position(Some(position));
        self.app.world_mut().write_message(CursorMoved {
            window: self.window,
            position,
            delta: None,
        });
    }

    fn button(&mut self, state: ButtonState) {
        self.app.world_mut().write_message(MouseButtonInput {
            button: MouseButton::Left,
            state,
            window: self.window,
        });
    }

    fn yaw(&self) -> f32 {
        self.app.world().resource::<ScatterRes>().0.group_yaw
    }

    fn group_rotation(&mut self) -> Quat {
        self.app
            .world_mut()
            .query_filtered::<&Transform, With<ScatterGroup>>()
            .single(self.app.world())
            .unwrap()
            .rotation
    }

    fn label_surfaces(&mut self) -> Vec<LabelSurface> {
        self.app
            .world_mut()
            .query::<&AxisLabelQuad>()
            .iter(self.app.world())
            .map(|quad| quad.surface)
            .collect()
    }
}

#[test]
fn setup_parents_frame_labels_and_cloud_under_the_group() {
    let mut h = Harness::new();
    let world = h.app.world_mut();

    let (group, children) = world
        .query_filtered::<(Entity, &Children), With<ScatterGroup>>()
        .single(world)
        .map(|(group, children)| (group, children.len()))
        .unwrap();
    // frame + 6 labels + cloud
    assert_eq!(children, 8);

    let labels: Vec<Entity> = world
        .query_filtered::<&ChildOf, With<AxisLabelQuad>>()
        .iter(world)
        .map(ChildOf::parent)
        .collect();
    assert_eq!(labels.len(), 6);
    assert!(labels.iter().all(|parent| *parent == group));

    assert!(world.get_resource::<PointCloudHandle>().is_some());
    // unlit scene
    assert!(world.get_resource::<AmbientLight>().is_none());
}

#[test]
fn scene_camera_uses_the_reference_lens_and_fog() {
    let mut h = Harness::new();
    let world = h.app.world_mut();

    let mut cameras =
        world.query_filtered::<(&Projection, &DistanceFog, &Transform), With<SceneCamera>>();
    let (projection, fog, transform) = cameras.single(world).unwrap();

    let Projection::Perspective(lens) = projection else {
        panic!("expected a perspective camera, got {projection:?}");
    };
    assert!((lens.fov - 45f32.to_radians()).abs() < 1e-6);
    assert_eq!(lens.near, 1.0);
    assert_eq!(lens.far, 10_000.0);

    match fog.falloff {
        FogFalloff::ExponentialSquared { density } => assert!((density - 0.0035).abs() < 1e-7),
        ref other => panic!("unexpected fog falloff {other:?}"),
    }

    assert_eq!(transform.translation, Vec3::new(0.0, 75.0, 200.0));
    let facing = transform.forward().as_vec3();
    assert!(facing.dot(-transform.translation.normalize()) > 0.9999);
}

#[test]
fn horizontal_drag_messages_turn_the_group() {
    let mut h = Harness::new();
    assert_eq!(h.yaw(), 0.5);

    h.cursor_to(0.0, 0.0);
    h.button(ButtonState::Pressed);
    h.app.update();

    h.cursor_to(10.0, 0.0);
    h.app.update();
    assert!((h.yaw() - 0.6).abs() < 1e-5);
    let expected = Quat::from_rotation_y(0.6);
    assert!(h.group_rotation().angle_between(expected) < 1e-5);

    h.button(ButtonState::Released);
    h.app.update();
    h.cursor_to(40.0, 0.0);
    h.app.update();
    assert!((h.yaw() - 0.6).abs() < 1e-5);
}

#[test]
fn release_then_press_in_one_frame_keeps_the_drag() {
    let mut h = Harness::new();
    h.cursor_to(0.0, 0.0);
    h.button(ButtonState::Pressed);
    h.app.update();
    h.cursor_to(10.0, 0.0);
    h.app.update();

    h.button(ButtonState::Released);
    h.button(ButtonState::Pressed);
    h.app.update();

    h.cursor_to(20.0, 0.0);
    h.app.update();
    assert!((h.yaw() - 0.7).abs() < 1e-5);
}

#[test]
fn two_presses_in_one_frame_toggle_animation() {
    let mut h = Harness::new();
    h.cursor_to(5.0, 5.0);
    h.button(ButtonState::Pressed);
    h.button(ButtonState::Released);
    h.button(ButtonState::Pressed);
    h.app.update();

    let state = &h.app.world().resource::<ScatterRes>().0;
    assert!(state.playback.animating);
}

#[test]
fn label_surfaces_fit_only_on_presented_frames() {
    let mut h = Harness::new();
    let estimated = h.label_surfaces();
    assert_eq!(estimated.len(), 6);

    h.inbox.post_message("pause");
    let texts: Vec<Entity> = h
        .app
        .world_mut()
        .query_filtered::<Entity, With<LabelText>>()
        .iter(h.app.world())
        .collect();
    for text in texts {
        h.app.world_mut().entity_mut(text).insert(TextLayoutInfo {
            size: Vec2::new(41.0, 24.0),
            ..default()
        });
    }
    h.app.update();
    assert_eq!(h.label_surfaces(), estimated);

    h.inbox.post_message("resume");
    h.app.update();
    let fitted = LabelSurface::measured(41.0, 24.0);
    assert!(h.label_surfaces().iter().all(|s| *s == fitted));

    let world = h.app.world_mut();
    let handles: Vec<Handle<Image>> = world
        .query::<&AxisLabelQuad>()
        .iter(world)
        .map(|quad| quad.image.clone())
        .collect();
    let images = world.resource::<Assets<Image>>();
    for handle in &handles {
        let image = images.get(handle).unwrap();
        assert_eq!((image.width(), image.height()), (41, 24));
    }
}
