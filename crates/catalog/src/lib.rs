//! Typed content catalogs of the FutureTech website and the engine deciding what a page shows.
//!
//! Catalogs are read-only `static` tables of [`BlogPost`]s or [`Project`]s. A page describes what the
//! visitor selected with a [`ViewState`], and [`filter_items`] and [`derived_slices`] compute the
//! visible subsets from both. None of the functions in this crate mutate their inputs.
//!
//! ## Example
//! ```rust
//! use futuretech_catalog::{filter_items, BlogCategory, CategoryFilter, ViewAction, ViewState};
//! # use futuretech_catalog::BlogPost;
//! # static POSTS: &[BlogPost] = &[];
//!
//! let view = ViewState::default()
//!     .apply(ViewAction::SelectCategory(CategoryFilter::Only(BlogCategory::Technology)))
//!     .apply(ViewAction::Search("quantum".to_string()));
//!
//! let visible = filter_items(POSTS, &view);
//! assert!(visible.is_empty());
//! ```

pub mod blog;
pub mod category;
pub mod chronology;
pub mod errors;
pub mod filter;
pub mod item;
pub mod project;
pub mod view;

pub use blog::{BlogCategory, BlogPost};
pub use category::{ALL_SLUG, Category, CategoryFilter};
pub use chronology::ensure_newest_first;
pub use errors::CatalogError;
pub use filter::{
    DEFAULT_RECENT_COUNT, DerivedSlices, derived_slices, filter_items, matches, matches_category,
    matches_search,
};
pub use item::CatalogItem;
pub use project::{Project, ProjectCategory, ProjectStatus};
pub use view::{ViewAction, ViewState};
