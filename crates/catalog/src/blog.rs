//! Blog posts and their categories.
use chrono::NaiveDate;

use crate::category::Category;
use crate::errors::CatalogError;
use crate::item::CatalogItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlogCategory {
    Technology,
    Innovation,
    Industry,
    Tutorials,
}

impl Category for BlogCategory {
    const ALL: &'static [Self] = &[
        BlogCategory::Technology,
        BlogCategory::Innovation,
        BlogCategory::Industry,
        BlogCategory::Tutorials,
    ];
    const KIND: &'static str = "blog";
    const ALL_LABEL: &'static str = "All Posts";

    fn slug(self) -> &'static str {
        match self {
            BlogCategory::Technology => "technology",
            BlogCategory::Innovation => "innovation",
            BlogCategory::Industry => "industry",
            BlogCategory::Tutorials => "tutorials",
        }
    }

    fn label(self) -> &'static str {
        match self {
            BlogCategory::Technology => "Technology",
            BlogCategory::Innovation => "Innovation",
            BlogCategory::Industry => "Industry News",
            BlogCategory::Tutorials => "Tutorials",
        }
    }
}

/// An article of the blog catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: BlogCategory,
    pub author: &'static str,
    /// Publication date, formatted as `YYYY-MM-DD`.
    pub date: &'static str,
    pub read_time: &'static str,
    pub image: &'static str,
    pub featured: bool,
    pub tags: &'static [&'static str],
}

impl BlogPost {
    pub fn published_on(&self) -> Result<NaiveDate, CatalogError> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").map_err(|source| {
            CatalogError::InvalidDate {
                id: self.id,
                value: self.date.to_string(),
                source,
            }
        })
    }
}

impl CatalogItem for BlogPost {
    type Category = BlogCategory;

    fn id(&self) -> u32 {
        self.id
    }

    fn title(&self) -> &str {
        self.title
    }

    fn summary(&self) -> &str {
        self.excerpt
    }

    fn category(&self) -> BlogCategory {
        self.category
    }

    fn is_featured(&self) -> bool {
        self.featured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(date: &'static str) -> BlogPost {
        BlogPost {
            id: 7,
            title: "Cybersecurity in the Age of Remote Work",
            excerpt: "Essential security practices for distributed workforces.",
            category: BlogCategory::Industry,
            author: "Anna Thompson",
            date,
            read_time: "6 min read",
            image: "",
            featured: false,
            tags: &["Cybersecurity"],
        }
    }

    #[test]
    fn test_published_on() {
        assert_eq!(
            post("2024-03-08").published_on().unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 8).unwrap()
        );
    }

    #[test]
    fn test_published_on_invalid_date() {
        let err = post("March 8th").published_on().unwrap_err();

        assert!(matches!(err, CatalogError::InvalidDate { id: 7, .. }));
        assert!(err.to_string().contains("March 8th"));
    }

    #[test]
    fn test_summary_is_excerpt() {
        let post = post("2024-03-08");
        assert_eq!(post.summary(), post.excerpt);
        assert_eq!(BlogCategory::from_slug("industry").unwrap(), post.category());
    }
}
