//! Ordering checks for dated catalogs.
//!
//! The `recent` slice of [`derived_slices`](crate::derived_slices) is positional: it trusts authors to keep
//! the catalog newest first. [`ensure_newest_first`] turns that convention into a build failure instead of
//! a silently wrong "latest" section.
use crate::blog::BlogPost;
use crate::errors::CatalogError;

/// Checks that every post was published on the same day or before the post listed above it.
pub fn ensure_newest_first(posts: &[BlogPost]) -> Result<(), CatalogError> {
    let mut previous: Option<(&BlogPost, chrono::NaiveDate)> = None;

    for post in posts {
        let date = post.published_on()?;

        if let Some((previous_post, previous_date)) = previous
            && date > previous_date
        {
            return Err(CatalogError::OutOfOrder {
                id: post.id,
                date: post.date.to_string(),
                previous_id: previous_post.id,
                previous_date: previous_post.date.to_string(),
            });
        }

        previous = Some((post, date));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::BlogCategory;

    fn post(id: u32, date: &'static str) -> BlogPost {
        BlogPost {
            id,
            title: "Title",
            excerpt: "Excerpt",
            category: BlogCategory::Technology,
            author: "Author",
            date,
            read_time: "1 min read",
            image: "",
            featured: false,
            tags: &[],
        }
    }

    #[test]
    fn test_newest_first_is_accepted() {
        let posts = [
            post(1, "2024-03-15"),
            post(2, "2024-03-12"),
            post(3, "2024-03-12"),
            post(4, "2023-12-31"),
        ];

        assert!(ensure_newest_first(&posts).is_ok());
    }

    #[test]
    fn test_empty_and_single_catalogs_are_ordered() {
        assert!(ensure_newest_first(&[]).is_ok());
        assert!(ensure_newest_first(&[post(1, "2024-01-01")]).is_ok());
    }

    #[test]
    fn test_older_before_newer_is_rejected() {
        let posts = [post(1, "2024-03-15"), post(2, "2024-03-03"), post(3, "2024-03-10")];

        let err = ensure_newest_first(&posts).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::OutOfOrder {
                id: 3,
                previous_id: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let posts = [post(1, "2024-03-15"), post(2, "2024-02-30")];

        assert!(matches!(
            ensure_newest_first(&posts),
            Err(CatalogError::InvalidDate { id: 2, .. })
        ));
    }
}
