//! Axis labels as textured quads.
//!
//! Each label owns a small render-to-texture setup: a `Text2d` and a 2D
//! camera on a private render layer draw into an image, and that image is
//! the texture of a quad placed at the label anchor inside the scene group.
//! Until the text is laid out the surface uses an estimated width;
//! [`fit_label_surfaces`](crate::render::systems::fit_label_surfaces) shrinks
//! or grows it to the measured size.

#![allow(clippy::too_many_arguments)]

use crate::core::AxisLabel;
use crate::label::{LabelStyle, LabelSurface};
use crate::render::{AxisLabelQuad, LabelCamera, LabelText};
use bevy::prelude::*;
use bevy_camera::visibility::RenderLayers;
use bevy_camera::{ClearColorConfig, RenderTarget};
use bevy_render::render_resource::{Extent3d, TextureFormat};

/// Render layers 1.. are reserved for label text, one layer per label.
const FIRST_LABEL_LAYER: usize = 1;

pub fn label_layer(index: usize) -> RenderLayers {
    RenderLayers::layer(FIRST_LABEL_LAYER + index)
}

/// Blank render-target image for a label surface.
pub fn label_image(surface: LabelSurface) -> Image {
    Image::new_target_texture(
        surface.width,
        surface.height,
        TextureFormat::Rgba8UnormSrgb,
    )
}

pub fn surface_extent(surface: LabelSurface) -> Extent3d {
    Extent3d {
        width: surface.width,
        height: surface.height,
        depth_or_array_layers: 1,
    }
}

pub fn label_quad(surface: LabelSurface, scale: f32) -> Mesh {
    Mesh::from(Rectangle::from_size(surface.billboard_size(scale)))
}

/// Spawn one axis label under `root`.
pub fn draw_label(
    commands: &mut Commands,
    root: Entity,
    index: usize,
    label: &AxisLabel,
    style: &LabelStyle,
    scale: f32,
    font: Handle<Font>,
    images: &mut Assets<Image>,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) -> Entity {
    let surface = LabelSurface::estimate(label.text, style.size);
    let image = images.add(label_image(surface));
    let mesh = meshes.add(label_quad(surface, scale));
    let layer = label_layer(index);

    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: Some(image.clone()),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        double_sided: true,
        cull_mode: None,
        fog_enabled: false,
        ..default()
    });

    let quad = commands
        .spawn((
            AxisLabelQuad {
                index,
                text: label.text,
                image: image.clone(),
                surface,
                scale,
            },
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::from_translation(label.anchor),
        ))
        .id();
    commands.entity(root).add_child(quad);

    commands.spawn((
        LabelCamera,
        Camera2d,
        Camera {
            target: RenderTarget::from(image),
            // draw before the scene camera samples the texture
            order: -1 - index as isize,
            clear_color: ClearColorConfig::Custom(Color::NONE),
            ..default()
        },
        layer.clone(),
    ));

    commands.spawn((
        LabelText { quad },
        Text2d::new(label.text),
        TextFont {
            font,
            font_size: style.size,
            ..default()
        },
        TextColor(style.color.into()),
        layer,
    ));

    quad
}
