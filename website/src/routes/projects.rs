use std::error::Error;

use futuretech_catalog::{
    ALL_SLUG, Category, CategoryFilter, ProjectCategory, ViewAction, ViewState, filter_items,
};
use log::debug;
use maud::{Markup, html};
use maudit::route::prelude::*;

use crate::components::{empty_state, filter_chips, found_label, page_hero, project_card, stats};
use crate::content::{PROJECT_STATS, PROJECTS};
use crate::layout::{SeoMeta, layout};

const INTRO: &str = "Explore our portfolio of innovative projects that showcase the future of technology across industries.";

#[route("/projects/")]
pub struct ProjectsIndex;

impl Route for ProjectsIndex {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        projects_page(ctx, ALL_SLUG)
    }
}

#[route("/projects/[category]/")]
pub struct ProjectsCategory;

#[derive(Params, Clone)]
pub struct ProjectsCategoryParams {
    pub category: String,
}

impl Route<ProjectsCategoryParams> for ProjectsCategory {
    fn pages(&self, _: &mut DynamicRouteContext) -> Pages<ProjectsCategoryParams> {
        ProjectCategory::ALL
            .iter()
            .map(|category| {
                Page::from_params(ProjectsCategoryParams {
                    category: category.slug().to_string(),
                })
            })
            .collect()
    }

    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        let params = ctx.params::<ProjectsCategoryParams>();
        projects_page(ctx, &params.category)
    }
}

pub fn projects_url(filter: CategoryFilter<ProjectCategory>) -> String {
    match filter {
        CategoryFilter::All => "/projects/".to_string(),
        CategoryFilter::Only(category) => ProjectsCategory.url(ProjectsCategoryParams {
            category: category.slug().to_string(),
        }),
    }
}

fn projects_page(ctx: &mut PageContext, filter: &str) -> Result<Markup, Box<dyn Error>> {
    let view = ViewState::default().apply(ViewAction::SelectCategory(
        CategoryFilter::<ProjectCategory>::parse(filter)?,
    ));
    let visible = filter_items(PROJECTS, &view);

    debug!(target: "projects", "{}: {} of {} projects", filter, visible.len(), PROJECTS.len());

    let title = match view.category {
        CategoryFilter::All => "Projects".to_string(),
        CategoryFilter::Only(category) => format!("{} - Projects", category.label()),
    };
    let seo = SeoMeta::new(&title, INTRO, ctx);

    Ok(layout(
        html! {
            (page_hero("Our Projects", INTRO))

            section."pb-16"."px-4" {
                div."max-w-5xl".mx-auto {
                    (stats(PROJECT_STATS))
                }
            }

            section."py-16"."px-4" {
                div."max-w-7xl".mx-auto {
                    div."mb-12" {
                        (filter_chips(&view, projects_url))
                    }
                    p.text-lg.text-gray-300.text-center."mb-12" { (found_label(visible.len(), "project")) }
                    div.grid."grid-cols-1"."md:grid-cols-2"."lg:grid-cols-3"."gap-8" {
                        @for project in &visible {
                            (project_card(project))
                        }
                    }
                    (empty_state("No Projects Found", &projects_url(CategoryFilter::All), !visible.is_empty()))
                }
            }
        },
        ctx,
        Some(seo),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_url_for_all() {
        assert_eq!(projects_url(CategoryFilter::All), "/projects/");
    }

    #[test]
    fn test_every_category_has_projects() {
        for category in ProjectCategory::ALL {
            let view = ViewState::default().apply(ViewAction::SelectCategory(CategoryFilter::Only(*category)));
            assert!(!filter_items(PROJECTS, &view).is_empty(), "{:?}", category);
        }
    }
}
