pub mod config;
pub mod record;

pub use config::{AppConfig, CONFIG_ENV};
pub use record::{PaletteFailure, PaletteInput, PaletteRecord};
