mod index;
pub use index::Index;
mod about;
pub use about::About;
mod features;
pub use features::{FeaturesIndex, FeaturesPanel};
mod projects;
pub use projects::{ProjectsCategory, ProjectsIndex};
mod blog;
pub use blog::{BlogCategoryPage, BlogIndex};
mod contact;
pub use contact::Contact;

#[path = "404.rs"]
mod not_found;
pub use not_found::NotFound;
