//! Category filter, pagination and detail selection for the project gallery.
//!
//! Derived lists are recomputed on every read; only the user's choices are
//! stored.

use super::aggregate::{Project, ProjectId};
use thiserror::Error;

/// Sentinel category that matches every project.
pub const ALL_CATEGORIES: &str = "All";

/// Number of projects shown before "View More Projects".
pub const PAGE_SIZE: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
    #[error("project {0} is not in the catalog")]
    UnknownProject(ProjectId),
}

/// `"All"` followed by the distinct categories in first-seen order.
pub fn categories(projects: &[Project]) -> Vec<&str> {
    let mut result = vec![ALL_CATEGORIES];
    for project in projects {
        if !result.contains(&project.category.as_str()) {
            result.push(project.category.as_str());
        }
    }
    result
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogFilter<'a> {
    projects: &'a [Project],
    active_category: String,
    show_all: bool,
    selected: Option<&'a Project>,
}

impl<'a> CatalogFilter<'a> {
    pub fn new(projects: &'a [Project]) -> Self {
        Self {
            projects,
            active_category: ALL_CATEGORIES.to_string(),
            show_all: false,
            selected: None,
        }
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn show_all(&self) -> bool {
        self.show_all
    }

    pub fn selected(&self) -> Option<&'a Project> {
        self.selected
    }

    pub fn categories(&self) -> Vec<&'a str> {
        categories(self.projects)
    }

    /// Switches category and collapses the list back to one page.
    pub fn set_category(&mut self, category: &str) -> Result<(), CatalogError> {
        if !self.categories().iter().any(|c| *c == category) {
            return Err(CatalogError::UnknownCategory(category.to_string()));
        }
        self.active_category = category.to_string();
        self.show_all = false;
        Ok(())
    }

    pub fn set_show_all(&mut self, show_all: bool) {
        self.show_all = show_all;
    }

    pub fn filtered(&self) -> Vec<&'a Project> {
        if self.active_category == ALL_CATEGORIES {
            return self.projects.iter().collect();
        }
        self.projects
            .iter()
            .filter(|p| p.category == self.active_category)
            .collect()
    }

    pub fn displayed(&self) -> Vec<&'a Project> {
        let filtered = self.filtered();
        if self.show_all {
            filtered
        } else {
            filtered.into_iter().take(PAGE_SIZE).collect()
        }
    }

    /// Strictly more than one page of matches and not yet expanded.
    pub fn shows_view_more(&self) -> bool {
        !self.show_all && self.filtered().len() > PAGE_SIZE
    }

    /// Opens (`Some`) or closes (`None`) the detail overlay.
    pub fn select_project(&mut self, id: Option<ProjectId>) -> Result<(), CatalogError> {
        match id {
            None => self.selected = None,
            Some(id) => {
                let project = self
                    .projects
                    .iter()
                    .find(|p| p.id == id)
                    .ok_or(CatalogError::UnknownProject(id))?;
                self.selected = Some(project);
            }
        }
        Ok(())
    }
}
