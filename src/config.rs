//! Scene configuration.
//!
//! Every constant the scatter scene is built from lives here so hosts can
//! override it from JSON (wasm), CLI flags (native binary) or the
//! [`ScatterBuilder`](crate::builder::ScatterBuilder).

use error_stack::{Report, ResultExt};
use serde::{Deserialize, Serialize};

use crate::{Result, ScatterError};

/// RGB color in `[0, 1]` sRGB space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as f32 / 255.0,
            g: ((rgb >> 8) & 0xff) as f32 / 255.0,
            b: (rgb & 0xff) as f32 / 255.0,
        }
    }

    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
}

impl From<Rgb> for bevy::prelude::Color {
    #[inline]
    fn from(c: Rgb) -> Self {
        bevy::prelude::Color::srgb(c.r, c.g, c.b)
    }
}

/// Size of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum SurfaceSize {
    /// Fixed pixel size.
    Fixed { width: u32, height: u32 },
    /// Follow the host container (the canvas parent on wasm).
    FitParent,
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self::Fixed {
            width: 500,
            height: 500,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            near: 1.0,
            far: 10_000.0,
            position: [0.0, 75.0, 200.0],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FogConfig {
    pub color: Rgb,
    pub density: f32,
}

impl Default for FogConfig {
    fn default() -> Self {
        Self {
            color: Rgb::WHITE,
            density: 0.0035,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Half the side length of the reference cube.
    pub half_extent: f32,
    pub color: Rgb,
    /// Distance of the axis labels from the origin.
    pub label_offset: f32,
    /// Yaw applied to the scene group at startup, in radians.
    pub initial_yaw: f32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            half_extent: 50.0,
            color: Rgb::hex(0x808080),
            label_offset: 60.0,
            initial_yaw: 0.5,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub color: Rgb,
    /// Font asset path; `None` uses the renderer's default font.
    pub font: Option<String>,
    pub font_size: f32,
    /// World-space scale applied to the label quad.
    pub scale: f32,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            color: Rgb::BLACK,
            font: None,
            font_size: crate::label::DEFAULT_FONT_SIZE,
            scale: crate::label::LABEL_SCALE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    pub point_count: usize,
    /// Seed for a reproducible cloud; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            point_count: 10_000,
            seed: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Radians of yaw per pixel of horizontal drag.
    pub yaw_per_pixel: f32,
    /// Camera height change per pixel of vertical drag.
    pub lift_per_pixel: f32,
    /// Max seconds between two presses to count as a double-click.
    pub double_click_secs: f64,
    /// Angular step multiplier applied to each point's speed per frame.
    pub angle_step: f32,
    /// Start with the orbit animation running.
    pub animate_on_start: bool,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            yaw_per_pixel: 0.01,
            lift_per_pixel: 1.0,
            double_click_secs: 0.4,
            angle_step: 0.01,
            animate_on_start: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterConfig {
    pub surface: SurfaceSize,
    pub background: Backdrop,
    pub camera: CameraConfig,
    pub fog: FogConfig,
    pub frame: FrameConfig,
    pub labels: LabelConfig,
    pub cloud: CloudConfig,
    pub controls: ControlsConfig,
}

/// Clear color behind the scene.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Backdrop(pub Rgb);

impl Default for Backdrop {
    fn default() -> Self {
        Self(Rgb::hex(0xEEEEEE))
    }
}

impl ScatterConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).change_context(ScatterError::ConfigParse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).change_context(ScatterError::ConfigParse)
    }

    /// Reject configurations the scene cannot be built from.
    pub fn validate(&self) -> Result<()> {
        if self.cloud.point_count == 0 {
            return Err(invalid("point count must be positive"));
        }
        if let SurfaceSize::Fixed { width, height } = self.surface
            && (width == 0 || height == 0)
        {
            return Err(invalid(format!("surface {width}x{height} has no area")));
        }

        let cam = &self.camera;
        if !(cam.fov_degrees > 0.0 && cam.fov_degrees < 180.0) {
            return Err(invalid(format!("field of view {} out of range", cam.fov_degrees)));
        }
        if !(cam.near > 0.0 && cam.near < cam.far) {
            return Err(invalid(format!(
                "clip planes near={} far={}",
                cam.near, cam.far
            )));
        }
        if !cam.position.iter().all(|v| v.is_finite()) {
            return Err(invalid("camera position must be finite"));
        }

        if !(self.fog.density >= 0.0 && self.fog.density.is_finite()) {
            return Err(invalid(format!("fog density {}", self.fog.density)));
        }
        if !(self.frame.half_extent > 0.0) {
            return Err(invalid("frame half extent must be positive"));
        }
        if !(self.labels.font_size > 0.0 && self.labels.scale > 0.0) {
            return Err(invalid("label font size and scale must be positive"));
        }
        if !(self.controls.double_click_secs >= 0.0) {
            return Err(invalid("double-click window is negative"));
        }
        Ok(())
    }
}

fn invalid(reason: impl Into<String>) -> Report<ScatterError> {
    Report::new(ScatterError::InvalidConfig).attach(reason.into())
}
