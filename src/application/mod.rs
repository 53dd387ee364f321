mod camera;
mod config;
mod controller;

pub use camera::Camera;
pub use config::{ConfigError, PlaybackConfig, SoupConfig};
pub use controller::{Controller, PlaybackError, PlaybackState, View, interval_from_ms};
