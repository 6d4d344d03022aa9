//! Closed category domains and the category part of a view.
use std::fmt::Debug;

use crate::errors::CatalogError;

/// Filter id standing for "every category".
pub const ALL_SLUG: &str = "all";

/// A closed set of categories a catalog's items are classified into.
pub trait Category: Copy + Eq + Debug + 'static {
    /// Every category of the domain, in display order.
    const ALL: &'static [Self];

    /// Name of the domain, used in error messages.
    const KIND: &'static str;

    /// Label of the chip selecting every category.
    const ALL_LABEL: &'static str;

    /// Identifier used in URLs and filter ids. Never equal to [`ALL_SLUG`].
    fn slug(self) -> &'static str;

    fn label(self) -> &'static str;

    /// Finds the category whose slug is exactly `slug`. The comparison is case-sensitive.
    fn from_slug(slug: &str) -> Result<Self, CatalogError> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.slug() == slug)
            .ok_or_else(|| CatalogError::UnknownCategory {
                kind: Self::KIND,
                slug: slug.to_string(),
            })
    }
}

/// The category selected in a view: either everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl<C: Category> CategoryFilter<C> {
    /// Parses a filter id, [`ALL_SLUG`] or the slug of one of the categories.
    pub fn parse(slug: &str) -> Result<Self, CatalogError> {
        if slug == ALL_SLUG {
            return Ok(CategoryFilter::All);
        }

        C::from_slug(slug).map(CategoryFilter::Only)
    }

    /// Every filter of the domain, starting with [`CategoryFilter::All`]. This is the chip list of a page.
    pub fn choices() -> impl Iterator<Item = CategoryFilter<C>> {
        std::iter::once(CategoryFilter::All).chain(C::ALL.iter().copied().map(CategoryFilter::Only))
    }

    pub fn slug(self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_SLUG,
            CategoryFilter::Only(category) => category.slug(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => C::ALL_LABEL,
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// Whether an item of `category` passes this filter.
    pub fn admits(self, category: C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::BlogCategory;
    use crate::project::ProjectCategory;

    #[test]
    fn test_parse_all_sentinel() {
        assert_eq!(
            CategoryFilter::<BlogCategory>::parse("all").unwrap(),
            CategoryFilter::All
        );
    }

    #[test]
    fn test_parse_category_slug() {
        assert_eq!(
            CategoryFilter::parse("smart-offices").unwrap(),
            CategoryFilter::Only(ProjectCategory::SmartOffices)
        );
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = CategoryFilter::<BlogCategory>::parse("Technology").unwrap_err();

        assert!(matches!(
            err,
            CatalogError::UnknownCategory { kind: "blog", ref slug } if slug == "Technology"
        ));
        assert!(CategoryFilter::<BlogCategory>::parse("ALL").is_err());
    }

    #[test]
    fn test_choices_start_with_all() {
        let slugs: Vec<_> = CategoryFilter::<BlogCategory>::choices()
            .map(CategoryFilter::slug)
            .collect();

        assert_eq!(
            slugs,
            vec!["all", "technology", "innovation", "industry", "tutorials"]
        );
    }

    #[test]
    fn test_admits() {
        assert!(CategoryFilter::All.admits(BlogCategory::Industry));
        assert!(CategoryFilter::Only(BlogCategory::Industry).admits(BlogCategory::Industry));
        assert!(!CategoryFilter::Only(BlogCategory::Industry).admits(BlogCategory::Tutorials));
    }

    #[test]
    fn test_slugs_never_collide_with_sentinel() {
        assert!(BlogCategory::ALL.iter().all(|c| c.slug() != ALL_SLUG));
        assert!(ProjectCategory::ALL.iter().all(|c| c.slug() != ALL_SLUG));
    }
}
