use crate::animation::ControlInbox;
use crate::config::{Backdrop, Rgb, ScatterConfig, SurfaceSize};

pub fn scatter() -> ScatterBuilder {
    ScatterBuilder {
        config: ScatterConfig::default(),
    }
}

/// Fluent construction of a [`ScatterConfig`].
pub struct ScatterBuilder {
    config: ScatterConfig,
}

impl ScatterBuilder {
    pub fn from_config(config: ScatterConfig) -> Self {
        Self { config }
    }

    pub fn points(mut self, count: usize) -> Self {
        self.config.cloud.point_count = count;
        self
    }

    /// Fix the random seed so the same cloud is drawn every run
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.cloud.seed = Some(seed);
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.config.surface = SurfaceSize::Fixed { width, height };
        self
    }

    pub fn fit_parent(mut self) -> Self {
        self.config.surface = SurfaceSize::FitParent;
        self
    }

    pub fn background(mut self, color: Rgb) -> Self {
        self.config.background = Backdrop(color);
        self
    }

    pub fn fog(mut self, color: Rgb, density: f32) -> Self {
        self.config.fog.color = color;
        self.config.fog.density = density;
        self
    }

    pub fn camera_position(mut self, position: [f32; 3]) -> Self {
        self.config.camera.position = position;
        self
    }

    pub fn label_font(mut self, path: impl Into<String>) -> Self {
        self.config.labels.font = Some(path.into());
        self
    }

    pub fn label_color(mut self, color: Rgb) -> Self {
        self.config.labels.color = color;
        self
    }

    pub fn animate(mut self, on: bool) -> Self {
        self.config.controls.animate_on_start = on;
        self
    }

    pub fn config(&self) -> &ScatterConfig {
        &self.config
    }

    /// Validate and return the configuration without running it
    pub fn build(self) -> crate::Result<ScatterConfig> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Run locally with a fresh control inbox (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn run_local(self) -> crate::Result<()> {
        self.run_with(ControlInbox::new())
    }

    /// Run locally, taking control requests from `inbox` (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn run_with(self, inbox: ControlInbox) -> crate::Result<()> {
        crate::runtime::run_scatter(self.build()?, inbox)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn run_in_canvas(self, inbox: ControlInbox, canvas_id: &str) -> crate::Result<()> {
        crate::runtime::run_scatter(self.build()?, inbox, canvas_id)
    }
}
