//! Computes the visible part of a catalog from a [`ViewState`].
//!
//! Filtering never reorders: every function returns items in catalog order, which authors keep newest
//! first (see [`ensure_newest_first`](crate::ensure_newest_first)).
use crate::category::CategoryFilter;
use crate::item::CatalogItem;
use crate::view::ViewState;

/// Number of items in the `recent` slice when a page has no reason to pick another.
pub const DEFAULT_RECENT_COUNT: usize = 3;

/// Subsets of a catalog that don't depend on the visitor's selections.
#[derive(Debug)]
pub struct DerivedSlices<'a, T> {
    /// Every featured item, in catalog order.
    pub featured: Vec<&'a T>,
    /// The first items of the catalog.
    pub recent: &'a [T],
}

pub fn matches_category<T: CatalogItem>(item: &T, filter: CategoryFilter<T::Category>) -> bool {
    filter.admits(item.category())
}

/// Whether `search_term` appears, ignoring case, in the title or the summary of `item`.
///
/// An empty term matches every item.
pub fn matches_search<T: CatalogItem>(item: &T, search_term: &str) -> bool {
    contains_lowercase(item, &search_term.to_lowercase())
}

/// Whether `item` passes both the category and the search filter of `view`.
pub fn matches<T: CatalogItem>(item: &T, view: &ViewState<T::Category>) -> bool {
    matches_category(item, view.category) && matches_search(item, &view.search_term)
}

/// Returns the items of `catalog` matching `view`, in catalog order.
///
/// An empty result is a regular outcome, pages show a "no results" state for it.
pub fn filter_items<'a, T: CatalogItem>(catalog: &'a [T], view: &ViewState<T::Category>) -> Vec<&'a T> {
    let needle = view.search_term.to_lowercase();

    catalog
        .iter()
        .filter(|item| matches_category(*item, view.category) && contains_lowercase(*item, &needle))
        .collect()
}

pub fn derived_slices<T: CatalogItem>(catalog: &[T], recent_count: usize) -> DerivedSlices<'_, T> {
    DerivedSlices {
        featured: catalog.iter().filter(|item| item.is_featured()).collect(),
        recent: &catalog[..recent_count.min(catalog.len())],
    }
}

fn contains_lowercase<T: CatalogItem>(item: &T, needle: &str) -> bool {
    needle.is_empty()
        || item.title().to_lowercase().contains(needle)
        || item.summary().to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::{BlogCategory, BlogPost};
    use crate::view::ViewAction;

    const fn post(
        id: u32,
        title: &'static str,
        excerpt: &'static str,
        category: BlogCategory,
        featured: bool,
    ) -> BlogPost {
        BlogPost {
            id,
            title,
            excerpt,
            category,
            author: "FutureTech",
            date: "2024-03-01",
            read_time: "5 min read",
            image: "",
            featured,
            tags: &[],
        }
    }

    static POSTS: &[BlogPost] = &[
        post(
            1,
            "The Future of Artificial Intelligence in Business Operations",
            "Discover how AI is transforming business operations.",
            BlogCategory::Technology,
            true,
        ),
        post(
            2,
            "Building Sustainable Smart Cities",
            "Technologies behind environmentally conscious urban environments.",
            BlogCategory::Innovation,
            false,
        ),
        post(
            3,
            "Quantum Computing: Breaking the Barriers",
            "An in-depth look at quantum computing advancements.",
            BlogCategory::Technology,
            true,
        ),
        post(
            4,
            "Cybersecurity in the Age of Remote Work",
            "Essential security practices for distributed workforces.",
            BlogCategory::Industry,
            false,
        ),
        post(
            5,
            "Getting Started with Machine Learning",
            "A tutorial for developers integrating machine learning.",
            BlogCategory::Tutorials,
            false,
        ),
        post(
            6,
            "The Rise of Edge Computing",
            "How edge computing is reducing latency for real-time applications.",
            BlogCategory::Innovation,
            false,
        ),
    ];

    fn ids(items: &[&BlogPost]) -> Vec<u32> {
        items.iter().map(|item| item.id).collect()
    }

    fn view(category: CategoryFilter<BlogCategory>, search_term: &str) -> ViewState<BlogCategory> {
        ViewState::default()
            .apply(ViewAction::SelectCategory(category))
            .apply(ViewAction::Search(search_term.to_string()))
    }

    #[test]
    fn test_identity_view_returns_whole_catalog() {
        let visible = filter_items(POSTS, &ViewState::default());
        assert_eq!(ids(&visible), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_category_filter_keeps_catalog_order() {
        let visible = filter_items(
            POSTS,
            &view(CategoryFilter::Only(BlogCategory::Technology), ""),
        );
        assert_eq!(ids(&visible), vec![1, 3]);

        let visible = filter_items(
            POSTS,
            &view(CategoryFilter::Only(BlogCategory::Innovation), ""),
        );
        assert_eq!(ids(&visible), vec![2, 6]);
    }

    #[test]
    fn test_search_ignores_case() {
        for term in ["quantum", "QUANTUM", "QuAnTuM"] {
            let visible = filter_items(POSTS, &view(CategoryFilter::All, term));
            assert_eq!(ids(&visible), vec![3], "searching {term:?}");
        }
    }

    #[test]
    fn test_search_without_match_is_empty() {
        assert!(filter_items(POSTS, &view(CategoryFilter::All, "zzz")).is_empty());
    }

    #[test]
    fn test_search_matches_summary() {
        let visible = filter_items(POSTS, &view(CategoryFilter::All, "latency"));
        assert_eq!(ids(&visible), vec![6]);
    }

    #[test]
    fn test_search_is_substring_not_word() {
        // "Sustainable" contains "ai"
        let visible = filter_items(POSTS, &view(CategoryFilter::All, "ai"));
        assert_eq!(ids(&visible), vec![1, 2]);
    }

    #[test]
    fn test_combined_filters_intersect() {
        let visible = filter_items(
            POSTS,
            &view(CategoryFilter::Only(BlogCategory::Technology), "ai"),
        );
        assert_eq!(ids(&visible), vec![1]);

        for item in &visible {
            assert!(matches_category(*item, CategoryFilter::Only(BlogCategory::Technology)));
            assert!(matches_search(*item, "ai"));
        }
    }

    #[test]
    fn test_category_without_match_is_empty() {
        let visible = filter_items(
            &POSTS[..2],
            &view(CategoryFilter::Only(BlogCategory::Tutorials), ""),
        );
        assert!(visible.is_empty());
    }

    #[test]
    fn test_clear_filters_restores_identity() {
        let cleared = view(CategoryFilter::Only(BlogCategory::Industry), "zzz")
            .apply(ViewAction::ClearFilters);

        assert_eq!(
            ids(&filter_items(POSTS, &cleared)),
            ids(&filter_items(POSTS, &ViewState::default()))
        );
    }

    #[test]
    fn test_select_tab_does_not_filter() {
        let view = view(CategoryFilter::Only(BlogCategory::Technology), "");
        let tabbed = view.clone().apply(ViewAction::SelectTab(2));

        assert_eq!(
            ids(&filter_items(POSTS, &view)),
            ids(&filter_items(POSTS, &tabbed))
        );
    }

    #[test]
    fn test_matches_agrees_with_filter_items() {
        let view = view(CategoryFilter::Only(BlogCategory::Innovation), "edge");
        let expected: Vec<u32> = POSTS
            .iter()
            .filter(|post| matches(*post, &view))
            .map(|post| post.id)
            .collect();

        assert_eq!(ids(&filter_items(POSTS, &view)), expected);
        assert_eq!(expected, vec![6]);
    }

    #[test]
    fn test_empty_catalog() {
        let empty: &[BlogPost] = &[];

        assert!(filter_items(empty, &ViewState::default()).is_empty());

        let slices = derived_slices(empty, DEFAULT_RECENT_COUNT);
        assert!(slices.featured.is_empty());
        assert!(slices.recent.is_empty());
    }

    #[test]
    fn test_featured_slice() {
        let slices = derived_slices(POSTS, DEFAULT_RECENT_COUNT);
        assert_eq!(ids(&slices.featured), vec![1, 3]);
    }

    #[test]
    fn test_recent_slice_is_positional() {
        let slices = derived_slices(POSTS, DEFAULT_RECENT_COUNT);
        let recent: Vec<u32> = slices.recent.iter().map(|post| post.id).collect();
        assert_eq!(recent, vec![1, 2, 3]);

        let slices = derived_slices(&POSTS[..2], DEFAULT_RECENT_COUNT);
        assert_eq!(slices.recent.len(), 2);
    }
}
