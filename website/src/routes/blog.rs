use std::error::Error;

use futuretech_catalog::{
    ALL_SLUG, BlogCategory, BlogPost, Category, CategoryFilter, ViewAction, ViewState,
    derived_slices, ensure_newest_first, filter_items,
};
use log::debug;
use maud::{Markup, html};
use maudit::route::prelude::*;

use crate::components::{
    empty_state, featured_post_card, filter_chips, found_label, page_hero, post_card, search_box,
};
use crate::content::BLOG_POSTS;
use crate::layout::{SeoMeta, layout};
use crate::site::{FEATURED_PREVIEW, RECENT_POSTS};

#[route("/blog/")]
pub struct BlogIndex;

impl Route for BlogIndex {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        blog_page(ctx, ALL_SLUG)
    }
}

#[route("/blog/[category]/")]
pub struct BlogCategoryPage;

#[derive(Params, Clone)]
pub struct BlogCategoryParams {
    pub category: String,
}

impl Route<BlogCategoryParams> for BlogCategoryPage {
    fn pages(&self, _: &mut DynamicRouteContext) -> Pages<BlogCategoryParams> {
        BlogCategory::ALL
            .iter()
            .map(|category| {
                Page::from_params(BlogCategoryParams {
                    category: category.slug().to_string(),
                })
            })
            .collect()
    }

    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        let params = ctx.params::<BlogCategoryParams>();
        blog_page(ctx, &params.category)
    }
}

/// URL of the blog page showing `filter`.
pub fn blog_url(filter: CategoryFilter<BlogCategory>) -> String {
    match filter {
        CategoryFilter::All => "/blog/".to_string(),
        CategoryFilter::Only(category) => BlogCategoryPage.url(BlogCategoryParams {
            category: category.slug().to_string(),
        }),
    }
}

fn blog_page(ctx: &mut PageContext, filter: &str) -> Result<Markup, Box<dyn Error>> {
    // `recent` below is positional, refuse to build from a misordered catalog
    ensure_newest_first(BLOG_POSTS)?;

    let view = ViewState::default().apply(ViewAction::SelectCategory(
        CategoryFilter::<BlogCategory>::parse(filter)?,
    ));
    let visible = filter_items(BLOG_POSTS, &view);
    let slices = derived_slices(BLOG_POSTS, RECENT_POSTS);

    debug!(target: "blog", "{}: {} of {} posts", filter, visible.len(), BLOG_POSTS.len());

    let featured = slices
        .featured
        .iter()
        .take(FEATURED_PREVIEW)
        .map(|post| featured_post_card(post))
        .collect::<Result<Vec<_>, _>>()?;
    let cards = visible
        .iter()
        .map(|post| post_card(post))
        .collect::<Result<Vec<_>, _>>()?;

    ctx.assets.include_script("assets/search.ts");

    let title = match view.category {
        CategoryFilter::All => "Blog".to_string(),
        CategoryFilter::Only(category) => format!("{} - Blog", category.label()),
    };
    let seo = SeoMeta::new(
        &title,
        "Stay updated with the latest insights, innovations, and trends shaping the future of technology and business.",
        ctx,
    );

    Ok(layout(
        html! {
            (page_hero("Blog", "Stay updated with the latest insights, innovations, and trends shaping the future of technology and business."))

            div."max-w-4xl".mx-auto."px-4" {
                (search_box("Search articles", "article"))
                (filter_chips(&view, blog_url))
            }

            @if !featured.is_empty() {
                section."py-16"."px-4" {
                    div."max-w-7xl".mx-auto {
                        h2."text-4xl".font-space.font-bold.text-center."mb-16" {
                            "Featured " span.text-electric { "Articles" }
                        }
                        div.grid."grid-cols-1"."lg:grid-cols-2"."gap-8" {
                            @for card in &featured {
                                (card)
                            }
                        }
                    }
                }
            }

            section."py-24"."px-4" {
                div."max-w-7xl".mx-auto {
                    div.text-center."mb-16" {
                        h2."text-4xl".font-space.font-bold."mb-4" {
                            "Latest " span.text-gold { "Insights" }
                        }
                        p.text-lg.text-gray-300 id="result-count" { (found_label(visible.len(), "article")) }
                    }
                    div.grid."grid-cols-1"."md:grid-cols-2"."lg:grid-cols-3"."gap-8" {
                        @for card in &cards {
                            (card)
                        }
                    }
                    (empty_state("No Articles Found", &blog_url(CategoryFilter::All), !visible.is_empty()))
                }
            }
        },
        ctx,
        Some(seo),
    ))
}

/// Cards of the "latest insights" preview, newest first.
pub fn recent_posts() -> Result<Vec<&'static BlogPost>, Box<dyn Error>> {
    ensure_newest_first(BLOG_POSTS)?;

    Ok(derived_slices(BLOG_POSTS, RECENT_POSTS).recent.iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_posts_are_first_of_catalog() {
        let ids: Vec<u32> = recent_posts().unwrap().iter().map(|post| post.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_blog_url_for_all() {
        assert_eq!(blog_url(CategoryFilter::All), "/blog/");
    }
}
