mod clouds;
mod trees;

pub use clouds::{advance_cloud_offset, cloud_world_position, CloudDescriptor, CloudField};
pub use trees::{generate_tree_positions, LayoutError, TreeLayoutParams, TreePosition};
