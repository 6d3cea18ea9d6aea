pub mod config;
pub mod overrides;

pub use config::{FillConfig, CONFIG_ENV};
pub use overrides::FillOverrides;
