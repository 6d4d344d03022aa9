use maud::html;
use maudit::route::prelude::*;

use crate::components::page_hero;
use crate::content::{MILESTONES, VALUES};
use crate::layout::{SeoMeta, layout};

#[route("/about/")]
pub struct About;

impl Route for About {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        let intro = "We are a team of visionaries, engineers, and innovators dedicated to building technology that transforms how businesses operate.";
        let seo = SeoMeta::new("About Us", intro, ctx);

        layout(
            html! {
                (page_hero("About FutureTech", intro))

                section."py-24"."px-4" {
                    div."max-w-5xl".mx-auto.grid."md:grid-cols-2"."gap-12".items-center {
                        div {
                            h2."text-4xl".font-space.font-bold."mb-6" {
                                "Our " span.text-electric { "Mission" }
                            }
                            p.text-gray-300.text-lg.leading-relaxed."mb-6" {
                                "To empower organizations worldwide with intelligent, secure, and scalable technology, so they can focus on what matters most: innovation and growth."
                            }
                            p.text-gray-400.leading-relaxed {
                                "Since 2020 we have grown from a single idea into a global company serving tens of thousands of clients."
                            }
                        }
                        div.card."p-8" {
                            h3.text-2xl.font-space.font-semibold."mb-4".text-gold { "Our Vision" }
                            p.text-gray-300.leading-relaxed {
                                "A world where every business has access to the tools of tomorrow, today."
                            }
                        }
                    }
                }

                section."py-24"."px-4".bg-charcoal {
                    div."max-w-4xl".mx-auto {
                        h2."text-4xl".font-space.font-bold.text-center."mb-16" {
                            "Our " span.text-gold { "Journey" }
                        }
                        ol.relative.border-l."border-electric/30"."ml-4" {
                            @for milestone in MILESTONES {
                                li."mb-12"."ml-8" {
                                    span.absolute."-left-3"."w-6"."h-6".rounded-full.bg-electric {}
                                    p.text-electric.font-space.font-bold.text-xl { (milestone.year) }
                                    h3.text-2xl.font-semibold."mb-2" { (milestone.title) }
                                    p.text-gray-400."mb-2" { (milestone.description) }
                                    p.text-sm.text-gold { (milestone.clients) " clients" }
                                }
                            }
                        }
                    }
                }

                section."py-24"."px-4" {
                    div."max-w-7xl".mx-auto {
                        h2."text-4xl".font-space.font-bold.text-center."mb-16" {
                            "Our " span.text-neon-purple { "Values" }
                        }
                        div.grid."grid-cols-1"."md:grid-cols-2"."lg:grid-cols-4"."gap-8" {
                            @for value in VALUES {
                                div.card."p-8".text-center {
                                    h3.text-xl.font-space.font-semibold."mb-4" { (value.title) }
                                    p.text-gray-400.leading-relaxed { (value.description) }
                                }
                            }
                        }
                    }
                }
            },
            ctx,
            Some(seo),
        )
    }
}
