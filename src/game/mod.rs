//! Match logic: configuration, state resources, systems, engine opponent

pub mod ai;
pub mod config;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod system_sets;
pub mod systems;

pub use plugin::GamePlugin;
