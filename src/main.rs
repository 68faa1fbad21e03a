//! Interactive 3D scatter plot
//!
//! Opens a window with the point cloud. Lines read from stdin are control
//! messages: `pause` pauses the loop, any other line resumes it.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::io::BufRead;
    use std::path::PathBuf;

    use anyhow::Context;
    use bevy::log::debug;
    use clap::Parser;
    use scatter3d::animation::ControlInbox;
    use scatter3d::config::{ScatterConfig, SurfaceSize};
    use scatter3d::runtime::run_scatter;

    /// Interactive 3D scatter plot
    #[derive(Parser, Clone, Debug)]
    #[command(name = "scatter3d")]
    #[command(about = "Draw an interactive, optionally animated 3D point cloud")]
    pub struct Cli {
        /// JSON configuration file; flags below override it
        #[arg(long)]
        pub config: Option<PathBuf>,

        /// Number of points to generate
        #[arg(short = 'n', long)]
        pub points: Option<usize>,

        /// Window width in pixels
        #[arg(long)]
        pub width: Option<u32>,

        /// Window height in pixels
        #[arg(long)]
        pub height: Option<u32>,

        /// Seed for a reproducible cloud
        #[arg(long)]
        pub seed: Option<u64>,

        /// Start with the orbit animation running
        #[arg(long)]
        pub animate: bool,

        /// Do not read control messages from stdin
        #[arg(long)]
        pub no_stdin: bool,
    }

    impl Cli {
        pub fn into_config(self) -> anyhow::Result<ScatterConfig> {
            let mut config = match &self.config {
                Some(path) => {
                    let json = std::fs::read_to_string(path)
                        .with_context(|| format!("reading {}", path.display()))?;
                    ScatterConfig::from_json(&json)
                        .map_err(|report| anyhow::anyhow!("{report:?}"))?
                }
                None => ScatterConfig::default(),
            };

            if let Some(points) = self.points {
                config.cloud.point_count = points;
            }
            if self.seed.is_some() {
                config.cloud.seed = self.seed;
            }
            if self.width.is_some() || self.height.is_some() {
                let (width, height) = match config.surface {
                    SurfaceSize::Fixed { width, height } => (width, height),
                    SurfaceSize::FitParent => (500, 500),
                };
                config.surface = SurfaceSize::Fixed {
                    width: self.width.unwrap_or(width),
                    height: self.height.unwrap_or(height),
                };
            }
            if self.animate {
                config.controls.animate_on_start = true;
            }
            Ok(config)
        }
    }

    /// Forward stdin lines to the inbox until stdin closes.
    fn spawn_stdin_reader(inbox: ControlInbox) -> anyhow::Result<()> {
        std::thread::Builder::new()
            .name("stdin-control".into())
            .spawn(move || {
                for line in std::io::stdin().lock().lines() {
                    let Ok(line) = line else { break };
                    let message = line.trim_end_matches('\r');
                    debug!(message, "control message");
                    inbox.post_message(message);
                }
            })
            .context("spawning stdin reader")?;
        Ok(())
    }

    pub fn main() -> anyhow::Result<()> {
        let cli = Cli::parse();
        let no_stdin = cli.no_stdin;
        let config = cli.into_config()?;

        let inbox = ControlInbox::new();
        if !no_stdin {
            spawn_stdin_reader(inbox.clone())?;
        }

        run_scatter(config, inbox).map_err(|report| anyhow::anyhow!("{report:?}"))
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    cli::main()
}

// the browser build starts through `JsScatter`
#[cfg(target_arch = "wasm32")]
fn main() {}
