use std::error::Error;

use maud::{Markup, html};
use maudit::route::prelude::*;

use super::blog::recent_posts;
use crate::components::post_card;
use crate::content::HOME_HIGHLIGHTS;
use crate::layout::layout;
use crate::site::TAGLINE;

#[route("/")]
pub struct Index;

impl Route for Index {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        home(ctx)
    }
}

fn home(ctx: &mut PageContext) -> Result<Markup, Box<dyn Error>> {
    let insights = recent_posts()?
        .into_iter()
        .map(post_card)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(layout(
        html! {
            section.relative."min-h-[80vh]".flex.items-center.justify-center."px-4".text-center {
                div."max-w-5xl" {
                    h1."text-5xl"."md:text-8xl".font-space.font-bold."mb-8".leading-tight {
                        "The Future of "
                        span.bg-gradient-to-r.from-electric.via-gold.to-neon-purple.bg-clip-text.text-transparent { "Technology" }
                    }
                    p.text-xl."md:text-2xl".text-gray-300."mb-12"."max-w-3xl".mx-auto { (TAGLINE) }
                    div.flex.flex-col."sm:flex-row"."gap-4".justify-center {
                        a.btn-primary href="/features/" { "Explore Features" }
                        a.chip."px-8"."py-4".rounded-full.font-semibold href="/projects/" { "View Projects" }
                    }
                }
            }

            section."py-24"."px-4" {
                div."max-w-7xl".mx-auto {
                    h2."text-4xl"."md:text-5xl".font-space.font-bold.text-center."mb-16" {
                        "Why Choose " span.text-electric { "FutureTech" }
                    }
                    div.grid."grid-cols-1"."md:grid-cols-2"."lg:grid-cols-4"."gap-8" {
                        @for highlight in HOME_HIGHLIGHTS {
                            div.card."p-8" {
                                h3.text-xl.font-space.font-semibold."mb-4" { (highlight.title) }
                                p.text-gray-400.leading-relaxed { (highlight.description) }
                            }
                        }
                    }
                }
            }

            section."py-24"."px-4".bg-charcoal {
                div."max-w-7xl".mx-auto {
                    div.flex.items-end.justify-between."mb-12" {
                        h2."text-4xl".font-space.font-bold {
                            "Latest " span.text-gold { "Insights" }
                        }
                        a.text-electric."hover:underline" href="/blog/" { "All articles" }
                    }
                    div.grid."grid-cols-1"."md:grid-cols-3"."gap-8" {
                        @for card in &insights {
                            (card)
                        }
                    }
                }
            }

            section."py-24"."px-4".text-center {
                h2."text-4xl".font-space.font-bold."mb-6" { "Ready to Transform Your Business?" }
                p.text-xl.text-gray-300."mb-10" { "Join the companies already building their future with us." }
                a.btn-primary href="/contact/" { "Get in Touch" }
            }
        },
        ctx,
        None,
    ))
}
