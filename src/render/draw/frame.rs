//! Reference frame: the cube of axis lines around the cloud.

use crate::config::FrameConfig;
use crate::core::{Segment, frame_segments};
use crate::render::FrameLines;
use bevy::prelude::*;
use bevy_asset::RenderAssetUsages;
use bevy_mesh::PrimitiveTopology;

/// Line-list mesh with one vertex pair per segment.
pub fn frame_mesh(segments: &[Segment]) -> Mesh {
    let positions: Vec<[f32; 3]> = segments
        .iter()
        .flat_map(|s| [s.start.to_array(), s.end.to_array()])
        .collect();

    Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
}

/// Spawn the frame lines under `root`.
pub fn draw_frame(
    commands: &mut Commands,
    root: Entity,
    config: &FrameConfig,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) -> Entity {
    let segments = frame_segments(config.half_extent);
    let material = materials.add(StandardMaterial {
        base_color: config.color.into(),
        unlit: true,
        ..default()
    });

    let lines = commands
        .spawn((
            FrameLines,
            Mesh3d(meshes.add(frame_mesh(&segments))),
            MeshMaterial3d(material),
            Transform::default(),
        ))
        .id();
    commands.entity(root).add_child(lines);
    lines
}
