pub mod animation;
pub mod builder;
pub mod cloud;
pub mod config;
pub mod controls;
pub mod core;
pub mod label;
pub mod render;
pub mod runtime;
pub mod state;
pub mod wasm_api;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScatterError {
    #[error("invalid configuration")]
    InvalidConfig,
    #[error("could not parse configuration")]
    ConfigParse,
}

pub type Result<T> = std::result::Result<T, error_stack::Report<ScatterError>>;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

pub mod prelude {
    pub use crate::animation::*;
    pub use crate::builder::*;
    pub use crate::config::*;
    pub use crate::controls::*;
    pub use crate::core::*;
    pub use crate::render::*;
    pub use crate::runtime::*;
    pub use crate::state::*;
}
