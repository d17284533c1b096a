pub mod command;
pub mod config;
pub mod constants;
pub mod helpers;
pub mod interfaces;
pub mod model;
pub mod render;
pub mod splice;

pub use config::{GeneratorConfig, SourceConfig};
