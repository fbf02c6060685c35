// Export submodules
pub mod meter;
pub mod relay;
