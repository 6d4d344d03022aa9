use maud::html;
use maudit::route::prelude::*;

use crate::layout::{SeoMeta, layout};

#[route("404.html")]
pub struct NotFound;

impl Route for NotFound {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        layout(
            html! {
                div.container.mx-auto.text-center."py-32".flex.items-center.flex-col."gap-y-6"."px-8" {
                    h1."text-8xl".font-space.font-bold.text-electric { "404" }
                    p.text-2xl { "This page is not part of the future we are building." }
                    a.btn-primary href="/" { "Back to home" }
                }
            },
            ctx,
            Some(SeoMeta {
                title: "404 - Page Not Found".to_string(),
                description: Some("This page is not part of the future we are building.".to_string()),
                ..Default::default()
            }),
        )
    }
}
