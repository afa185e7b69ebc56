pub mod config;
pub mod navigation;
pub mod section;
pub mod viewport;
