//! What the visitor selected on a page, and how their input changes it.
//!
//! A [`ViewState`] is a plain value: pages build one, hand it to the filtering functions, and replace it
//! with the result of [`ViewState::apply`] when an input event comes in. Nothing here touches catalog data.
use crate::category::CategoryFilter;

/// The selections of a single page visit.
///
/// Pages that don't filter a catalog (e.g. a page of tabs) can leave `C` as `()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState<C = ()> {
    pub search_term: String,
    pub category: CategoryFilter<C>,
    /// Index into the fixed tab list of the page.
    pub active_tab: usize,
}

impl<C> Default for ViewState<C> {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: CategoryFilter::All,
            active_tab: 0,
        }
    }
}

/// A discrete input event on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction<C = ()> {
    /// A category chip was clicked.
    SelectCategory(CategoryFilter<C>),
    /// The search box changed. Sent on every keystroke.
    Search(String),
    /// Resets the search term and the category together.
    ClearFilters,
    SelectTab(usize),
}

impl<C> ViewState<C> {
    /// Returns the state following `action`. Only the fields named by the action change.
    pub fn apply(self, action: ViewAction<C>) -> Self {
        match action {
            ViewAction::SelectCategory(category) => Self { category, ..self },
            ViewAction::Search(search_term) => Self {
                search_term,
                ..self
            },
            ViewAction::ClearFilters => Self {
                search_term: String::new(),
                category: CategoryFilter::All,
                ..self
            },
            ViewAction::SelectTab(active_tab) => Self { active_tab, ..self },
        }
    }

    /// Whether a search term or a category narrows the catalog down.
    pub fn is_filtered(&self) -> bool {
        !self.search_term.is_empty() || !matches!(self.category, CategoryFilter::All)
    }

    /// The active tab of a list of `len` tabs, falling back to the first one when out of range.
    pub fn tab_within(&self, len: usize) -> usize {
        if self.active_tab < len {
            self.active_tab
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::BlogCategory;

    fn technology() -> CategoryFilter<BlogCategory> {
        CategoryFilter::Only(BlogCategory::Technology)
    }

    #[test]
    fn test_default_state() {
        let view = ViewState::<BlogCategory>::default();

        assert_eq!(view.search_term, "");
        assert_eq!(view.category, CategoryFilter::All);
        assert_eq!(view.active_tab, 0);
        assert!(!view.is_filtered());
    }

    #[test]
    fn test_select_category_keeps_search_term() {
        let view = ViewState::default()
            .apply(ViewAction::Search("ai".to_string()))
            .apply(ViewAction::SelectCategory(technology()));

        assert_eq!(view.search_term, "ai");
        assert_eq!(view.category, technology());
    }

    #[test]
    fn test_search_keeps_category() {
        let view = ViewState::default()
            .apply(ViewAction::SelectCategory(technology()))
            .apply(ViewAction::Search("q".to_string()))
            .apply(ViewAction::Search("qu".to_string()));

        assert_eq!(view.search_term, "qu");
        assert_eq!(view.category, technology());
        assert!(view.is_filtered());
    }

    #[test]
    fn test_clear_filters_resets_both_fields() {
        let view = ViewState::default()
            .apply(ViewAction::SelectTab(2))
            .apply(ViewAction::SelectCategory(technology()))
            .apply(ViewAction::Search("quantum".to_string()))
            .apply(ViewAction::ClearFilters);

        assert_eq!(
            view,
            ViewState {
                search_term: String::new(),
                category: CategoryFilter::All,
                active_tab: 2,
            }
        );
        assert!(!view.is_filtered());
    }

    #[test]
    fn test_select_tab_leaves_filters_alone() {
        let before = ViewState::default()
            .apply(ViewAction::SelectCategory(technology()))
            .apply(ViewAction::Search("edge".to_string()));
        let after = before.clone().apply(ViewAction::SelectTab(3));

        assert_eq!(after.active_tab, 3);
        assert_eq!(after.search_term, before.search_term);
        assert_eq!(after.category, before.category);
    }

    #[test]
    fn test_tab_within() {
        let view: ViewState = ViewState::default().apply(ViewAction::SelectTab(3));

        assert_eq!(view.tab_within(4), 3);
        assert_eq!(view.tab_within(3), 0);
        assert_eq!(view.tab_within(0), 0);
    }
}
