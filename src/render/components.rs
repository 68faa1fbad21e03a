use crate::label::LabelSurface;
use bevy::prelude::*;

/// Root of everything that turns with the drag: frame, labels and points.
#[derive(Component)]
pub struct ScatterGroup;

/// The perspective camera looking at the scene.
#[derive(Component)]
pub struct SceneCamera;

/// Marker for the reference frame line mesh
#[derive(Component)]
pub struct FrameLines;

/// Marker for the point cloud mesh
#[derive(Component)]
pub struct PointCloudMesh;

/// Quad showing one axis label, child of the scene group.
#[derive(Component, Clone, Debug)]
pub struct AxisLabelQuad {
    pub index: usize,
    pub text: &'static str,
    /// Render target the label text is drawn into.
    pub image: Handle<Image>,
    pub surface: LabelSurface,
    pub scale: f32,
}

/// Off-screen text entity feeding an [`AxisLabelQuad`].
#[derive(Component, Clone, Copy, Debug)]
pub struct LabelText {
    pub quad: Entity,
}

/// 2D camera rendering label text into its image.
#[derive(Component)]
pub struct LabelCamera;
