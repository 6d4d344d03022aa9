//! Markup shared by several pages.
use chrono::NaiveDate;
use futuretech_catalog::{
    BlogPost, CatalogError, CatalogItem, Category, CategoryFilter, Project, ProjectStatus,
    ViewState,
};
use maud::{Markup, html};

use crate::content::Stat;
use crate::site::SEARCH_QUERY_PARAM;

/// "1 article found", "3 articles found".
pub fn found_label(count: usize, noun: &str) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{} {}{} found", count, noun, plural)
}

pub fn display_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn page_hero(title: &str, intro: &str) -> Markup {
    html! {
        section."py-24"."px-4".text-center {
            h1."text-6xl"."md:text-8xl".font-space.font-bold."mb-8" {
                span.bg-gradient-to-r.from-electric.via-gold.to-neon-purple.bg-clip-text.text-transparent { (title) }
            }
            p.text-xl."md:text-2xl".text-gray-300."max-w-4xl".mx-auto.leading-relaxed { (intro) }
        }
    }
}

/// The category chips of a filterable page. `url` gives the page showing a filter.
///
/// `search.ts` appends the current search term to the chip links, so switching category keeps it.
/// While `view` narrows the catalog, a Clear Filters link to the unfiltered page follows the chips.
pub fn filter_chips<C: Category>(
    view: &ViewState<C>,
    url: impl Fn(CategoryFilter<C>) -> String,
) -> Markup {
    html! {
        div.flex.flex-col.items-center."gap-4" {
            nav.flex.flex-wrap.justify-center."gap-4" aria-label="Filter by category" data-filter-chips {
                @for filter in CategoryFilter::<C>::choices() {
                    @let active = filter == view.category;
                    a."px-6"."py-3".rounded-full.font-semibold.transition-all
                        .(if active { "chip-active" } else { "chip" })
                        href=(url(filter))
                        aria-current=[active.then_some("page")] {
                        (filter.label())
                    }
                }
            }
            @if view.is_filtered() {
                a.text-sm.text-gray-400."hover:text-electric" href=(url(CategoryFilter::All)) data-clear-filters {
                    "Clear Filters"
                }
            }
        }
    }
}

/// Live search box, driven by `search.ts`. `noun` names the searched records in the result count.
pub fn search_box(label: &str, noun: &str) -> Markup {
    html! {
        label.sr-only for="search" { (label) }
        input.search-input."mb-8" id="search" type="search" placeholder=(format!("{}...", label))
            autocomplete="off" data-noun=(noun) data-query-param=(SEARCH_QUERY_PARAM);
    }
}

/// Shown in place of an empty grid. The link leads to the unfiltered page, resetting every filter at once.
pub fn empty_state(title: &str, clear_url: &str, hidden: bool) -> Markup {
    html! {
        div.text-center."py-16" id="no-results" hidden[hidden] {
            h3.text-2xl.font-space.font-semibold."mb-4" { (title) }
            p.text-gray-400."mb-8" { "Try adjusting your search terms or category filter." }
            a.btn-primary href=(clear_url) data-clear-filters { "Clear Filters" }
        }
    }
}

pub fn stats(stats: &[Stat]) -> Markup {
    html! {
        div.grid."grid-cols-2"."md:grid-cols-4"."gap-8" {
            @for stat in stats {
                div.card.text-center."p-6" {
                    div."text-4xl".font-space.font-bold.text-electric."mb-2" { (stat.value) }
                    div.text-gray-400 { (stat.label) }
                }
            }
        }
    }
}

fn tags(tags: &[&str], class: &str) -> Markup {
    html! {
        div.flex.flex-wrap."gap-2"."mb-4" {
            @for tag in tags {
                span.(class) { (tag) }
            }
        }
    }
}

/// A large card for the featured section of the blog.
pub fn featured_post_card(post: &BlogPost) -> Result<Markup, CatalogError> {
    let date = display_date(post.published_on()?);

    Ok(html! {
        article.card.group.overflow-hidden {
            div.relative.aspect-video.overflow-hidden {
                img.w-full.h-full.object-cover src=(post.image) alt=(post.title) loading="lazy";
                span.badge.absolute."top-4"."left-4" { "Featured" }
            }
            div."p-8" {
                p.flex."gap-4"."mb-4".text-sm.text-gray-400 {
                    time datetime=(post.date) { (date) }
                    span { (post.read_time) }
                }
                h3.text-2xl.font-space.font-semibold."mb-4" { (post.title) }
                p.text-gray-400."mb-6".leading-relaxed { (post.excerpt) }
                (tags(post.tags, "tag-gold"))
                p.text-sm.text-gray-400 { "By " (post.author) }
            }
        }
    })
}

/// A card of the blog grid. Carries the searchable text for the live search script.
pub fn post_card(post: &BlogPost) -> Result<Markup, CatalogError> {
    let date = display_date(post.published_on()?);

    Ok(html! {
        article.card.group.overflow-hidden
            id=(format!("post-{}", post.id()))
            data-search-item
            data-title=(post.title)
            data-excerpt=(post.excerpt) {
            div.relative.aspect-video.overflow-hidden {
                img.w-full.h-full.object-cover src=(post.image) alt=(post.title) loading="lazy";
                @if post.featured {
                    span.badge.absolute."top-4"."right-4" { "Featured" }
                }
            }
            div."p-6" {
                p.flex."gap-4"."mb-3".text-xs.text-gray-400 {
                    time datetime=(post.date) { (date) }
                    span { (post.read_time) }
                }
                h3.text-xl.font-space.font-semibold."mb-3" { (post.title) }
                p.text-gray-400."mb-4".text-sm.leading-relaxed { (post.excerpt) }
                (tags(&post.tags[..post.tags.len().min(2)], "tag"))
                p.text-xs.text-gray-400 { "By " (post.author) }
            }
        }
    })
}

pub fn status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Completed => "status-completed",
        ProjectStatus::InProgress => "status-in-progress",
        ProjectStatus::Planning => "status-planning",
    }
}

pub fn project_card(project: &Project) -> Markup {
    html! {
        article.card.group.overflow-hidden id=(format!("project-{}", project.id())) {
            div.relative.aspect-video.overflow-hidden {
                img.w-full.h-full.object-cover src=(project.image) alt=(project.title) loading="lazy";
                span.badge.absolute."top-4"."right-4".(status_class(project.status)) {
                    (project.status.label())
                }
            }
            div."p-6" {
                p.flex."gap-4"."mb-3".text-sm.text-gray-400 {
                    span { (project.location) }
                    span { (project.year) }
                }
                h3.text-2xl.font-space.font-semibold."mb-3" { (project.title) }
                p.text-gray-400."mb-4".leading-relaxed { (project.description) }
                (tags(project.technologies, "tag"))
            }
        }
    }
}
