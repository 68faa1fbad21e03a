//! Point cloud mesh: one vertex per point, colored per vertex.

use crate::core::PointCloud;
use crate::render::PointCloudMesh;
use bevy::prelude::*;
use bevy_asset::RenderAssetUsages;
use bevy_camera::visibility::NoFrustumCulling;
use bevy_mesh::PrimitiveTopology;

pub fn point_cloud_mesh(cloud: &PointCloud) -> Mesh {
    let colors: Vec<[f32; 4]> = cloud.colors().map(|c| c.to_linear_rgba()).collect();

    Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions(cloud))
        .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colors)
}

/// Overwrite the vertex positions in place. Colors never change.
pub fn write_positions(mesh: &mut Mesh, cloud: &PointCloud) {
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions(cloud));
}

fn positions(cloud: &PointCloud) -> Vec<[f32; 3]> {
    cloud.positions().map(|p| p.to_array()).collect()
}

/// Spawn the cloud under `root`, returning the mesh handle for later updates.
pub fn draw_points(
    commands: &mut Commands,
    root: Entity,
    cloud: &PointCloud,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) -> Handle<Mesh> {
    let mesh = meshes.add(point_cloud_mesh(cloud));
    // white base so the vertex colors come through unchanged
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });

    let points = commands
        .spawn((
            PointCloudMesh,
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material),
            Transform::default(),
            // orbits leave the bounds computed at spawn
            NoFrustumCulling,
        ))
        .id();
    commands.entity(root).add_child(points);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::generate;
    use bevy_mesh::VertexAttributeValues;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn float3(mesh: &Mesh) -> Vec<[f32; 3]> {
        match mesh.attribute(Mesh::ATTRIBUTE_POSITION) {
            Some(VertexAttributeValues::Float32x3(v)) => v.clone(),
            other => panic!("unexpected positions {other:?}"),
        }
    }

    #[test]
    fn one_vertex_per_point() {
        let cloud = generate(100, &mut StdRng::seed_from_u64(1));
        let mesh = point_cloud_mesh(&cloud);
        assert_eq!(mesh.count_vertices(), 100);
        assert!(matches!(
            mesh.attribute(Mesh::ATTRIBUTE_COLOR),
            Some(VertexAttributeValues::Float32x4(c)) if c.len() == 100
        ));
    }

    #[test]
    fn rewriting_positions_tracks_orbits() {
        let mut cloud = generate(20, &mut StdRng::seed_from_u64(2));
        let mut mesh = point_cloud_mesh(&cloud);
        cloud.advance_orbits(0.01);
        write_positions(&mut mesh, &cloud);

        let expected: Vec<[f32; 3]> = cloud.positions().map(|p| p.to_array()).collect();
        assert_eq!(float3(&mesh), expected);
    }

    #[test]
    fn empty_cloud_gives_empty_mesh() {
        let mesh = point_cloud_mesh(&PointCloud::new(Vec::new()));
        assert_eq!(mesh.count_vertices(), 0);
    }
}
