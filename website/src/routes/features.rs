use std::error::Error;

use futuretech_catalog::{ViewAction, ViewState};
use maud::{Markup, html};
use maudit::route::prelude::*;

use crate::content::{DETAILED_FEATURES, FEATURE_AREAS};
use crate::layout::{SeoMeta, layout};

const INTRO: &str = "Discover the cutting-edge capabilities that make our platform the choice of industry leaders worldwide.";

#[route("/features/")]
pub struct FeaturesIndex;

impl Route for FeaturesIndex {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        features_page(ctx, ViewState::default())
    }
}

#[route("/features/[panel]/")]
pub struct FeaturesPanel;

#[derive(Params, Clone)]
pub struct FeaturesPanelParams {
    pub panel: String,
}

impl Route<FeaturesPanelParams> for FeaturesPanel {
    fn pages(&self, _: &mut DynamicRouteContext) -> Pages<FeaturesPanelParams> {
        // The first panel lives at /features/
        FEATURE_AREAS
            .iter()
            .skip(1)
            .map(|area| {
                Page::from_params(FeaturesPanelParams {
                    panel: area.slug.to_string(),
                })
            })
            .collect()
    }

    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        let params = ctx.params::<FeaturesPanelParams>();
        panel_page(ctx, &params.panel)
    }
}

fn panel_page(ctx: &mut PageContext, slug: &str) -> Result<Markup, Box<dyn Error>> {
    let tab = panel_index(slug)?;
    features_page(ctx, ViewState::default().apply(ViewAction::SelectTab(tab)))
}

fn panel_index(slug: &str) -> Result<usize, Box<dyn Error>> {
    FEATURE_AREAS
        .iter()
        .position(|area| area.slug == slug)
        .ok_or_else(|| format!("unknown feature panel `{}`", slug).into())
}

/// URL of the features page with the tab at `index` open.
fn panel_url(index: usize) -> String {
    match FEATURE_AREAS.get(index) {
        Some(area) if index > 0 => FeaturesPanel.url(FeaturesPanelParams {
            panel: area.slug.to_string(),
        }),
        _ => "/features/".to_string(),
    }
}

fn features_page(ctx: &mut PageContext, view: ViewState) -> Result<Markup, Box<dyn Error>> {
    let active = view.tab_within(FEATURE_AREAS.len());
    let area = FEATURE_AREAS
        .get(active)
        .ok_or("the features page needs at least one feature area")?;

    let title = if active == 0 {
        "Features".to_string()
    } else {
        format!("{} - Features", area.title)
    };
    let seo = SeoMeta::new(&title, INTRO, ctx);

    Ok(layout(
        html! {
            section."py-24"."px-4".text-center {
                h1."text-6xl"."md:text-8xl".font-space.font-bold."mb-8" {
                    "Advanced "
                    span.bg-gradient-to-r.from-electric.via-gold.to-neon-purple.bg-clip-text.text-transparent { "Features" }
                }
                p.text-xl."md:text-2xl".text-gray-300."max-w-4xl".mx-auto { (INTRO) }
            }

            section."pb-24"."px-4" {
                div."max-w-6xl".mx-auto {
                    nav.flex.flex-wrap.justify-center."gap-4"."mb-12" role="tablist" aria-label="Feature areas" {
                        @for (index, tab) in FEATURE_AREAS.iter().enumerate() {
                            @let selected = index == active;
                            a."px-6"."py-3".rounded-full.font-semibold
                                .(if selected { "chip-active" } else { "chip" })
                                href=(panel_url(index))
                                role="tab"
                                aria-selected=(if selected { "true" } else { "false" }) {
                                (tab.title)
                            }
                        }
                    }
                    div.card."p-10" role="tabpanel" {
                        h2."text-3xl".font-space.font-bold."mb-8".text-electric { (area.title) }
                        ul.grid."md:grid-cols-2"."gap-4" {
                            @for feature in area.features {
                                li.flex.items-center."gap-3".text-lg {
                                    span."w-2"."h-2".rounded-full.bg-gold {}
                                    (feature)
                                }
                            }
                        }
                    }
                }
            }

            section."py-24"."px-4".bg-charcoal {
                div."max-w-7xl".mx-auto.flex.flex-col."gap-24" {
                    @for (index, feature) in DETAILED_FEATURES.iter().enumerate() {
                        div.grid."lg:grid-cols-2"."gap-12".items-center {
                            div.(if index % 2 == 1 { "lg:order-2" } else { "" }) {
                                img.rounded-2xl.w-full.object-cover src=(feature.image) alt=(feature.title) loading="lazy";
                            }
                            div {
                                h3."text-4xl".font-space.font-bold."mb-6" { (feature.title) }
                                p.text-xl.text-gray-300."mb-8" { (feature.description) }
                                ul.flex.flex-col."gap-3" {
                                    @for capability in feature.capabilities {
                                        li.text-electric { (capability) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
        ctx,
        Some(seo),
    ))
}
