pub mod descriptor_loader;
pub mod error;
pub mod identifier;
pub mod registries;
pub mod systems;
