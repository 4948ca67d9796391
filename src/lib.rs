pub mod app;
pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod geometry;
pub mod layout;
pub mod renderer;
pub mod scene;
pub mod textures;
pub mod world;

pub use camera::{FpsCamera, KeyResponse, ViewTransform};
pub use config::SceneConfig;
pub use layout::{advance_cloud_offset, cloud_world_position, generate_tree_positions};
