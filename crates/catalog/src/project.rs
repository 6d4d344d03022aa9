//! Portfolio projects, their categories and delivery status.
use crate::category::Category;
use crate::item::CatalogItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    Commercial,
    Industrial,
    SmartOffices,
    Residential,
}

impl Category for ProjectCategory {
    const ALL: &'static [Self] = &[
        ProjectCategory::Commercial,
        ProjectCategory::Industrial,
        ProjectCategory::SmartOffices,
        ProjectCategory::Residential,
    ];
    const KIND: &'static str = "project";
    const ALL_LABEL: &'static str = "All Projects";

    fn slug(self) -> &'static str {
        match self {
            ProjectCategory::Commercial => "commercial",
            ProjectCategory::Industrial => "industrial",
            ProjectCategory::SmartOffices => "smart-offices",
            ProjectCategory::Residential => "residential",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ProjectCategory::Commercial => "Commercial",
            ProjectCategory::Industrial => "Industrial",
            ProjectCategory::SmartOffices => "Smart Offices",
            ProjectCategory::Residential => "Residential",
        }
    }
}

/// Display-only, never part of a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planning,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Planning => "Planning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: ProjectCategory,
    pub location: &'static str,
    pub year: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub status: ProjectStatus,
}

impl CatalogItem for Project {
    type Category = ProjectCategory;

    fn id(&self) -> u32 {
        self.id
    }

    fn title(&self) -> &str {
        self.title
    }

    fn summary(&self) -> &str {
        self.description
    }

    fn category(&self) -> ProjectCategory {
        self.category
    }
}
