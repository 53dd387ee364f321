// Domain layer - Sparse grid and the Life transition
pub mod domain;

// Application layer - Playback timing and configuration
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Life, Pattern, Point, SparseGrid, presets};
pub use application::{Camera, Controller, PlaybackConfig, PlaybackError, PlaybackState, View};
pub use rendering::Frame;
