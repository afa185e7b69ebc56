pub mod details;
pub mod gallery;
