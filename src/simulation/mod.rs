pub mod cell;
pub mod clock;
pub mod config;
pub mod coords;
pub mod engine;
pub mod plugin;
pub mod render;
pub mod systems;

pub use plugin::SimulationPlugin;
