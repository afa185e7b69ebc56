//! Project gallery UI Module
//!
//! - view_model.rs: category filter, paging and selection state
//! - view.rs: section, filter chips and cards

mod view;
mod view_model;

pub use view::ProjectsSection;
pub use view_model::ProjectGalleryViewModel;
