pub mod aggregate;
pub mod catalog;
pub mod filter;

pub use aggregate::{Project, ProjectId};
pub use catalog::projects;
pub use filter::{categories, CatalogError, CatalogFilter, ALL_CATEGORIES, PAGE_SIZE};
