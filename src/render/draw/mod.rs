//! Drawing functions for the scatter scene.
//!
//! This module is organized into focused submodules:
//! - `frame`: the reference cube and axis lines
//! - `labels`: axis labels rendered to textures
//! - `points`: the point cloud mesh

mod frame;
mod labels;
mod points;

// Re-export public drawing functions
pub use frame::{draw_frame, frame_mesh};
pub use labels::{draw_label, label_image, label_layer, label_quad, surface_extent};
pub use points::{draw_points, point_cloud_mesh, write_positions};
