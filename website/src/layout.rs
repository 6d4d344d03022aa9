use maud::{DOCTYPE, Markup, html};
mod header;

pub use header::header;
use maudit::assets::StyleOptions;
use maudit::maud::generator;
use maudit::route::PageContext;

use crate::site::{CONTACT_EMAIL, NAVIGATION, SITE_NAME, TAGLINE};

pub struct SeoMeta {
    pub title: String,
    pub description: Option<String>,
    pub canonical_url: Option<String>,
}

impl Default for SeoMeta {
    fn default() -> Self {
        Self {
            title: SITE_NAME.to_string(),
            description: Some(TAGLINE.to_string()),
            canonical_url: None,
        }
    }
}

impl SeoMeta {
    pub fn new(title: &str, description: &str, ctx: &PageContext) -> Self {
        Self {
            title: title.to_string(),
            description: Some(description.to_string()),
            canonical_url: ctx.canonical_url(),
        }
    }

    pub fn render(&self, base_url: &Option<String>) -> Markup {
        let formatted_title = if self.title == SITE_NAME {
            self.title.clone()
        } else {
            format!("{} - {}", self.title, SITE_NAME)
        };

        let description = self.description.as_deref().unwrap_or(TAGLINE);

        let icon_url = base_url
            .as_ref()
            .map(|base_url| format!("{}/favicon.svg", base_url));

        html! {
            title { (formatted_title) }
            meta name="description" content=(description);

            // Open Graph meta tags
            meta property="og:title" content=(formatted_title);
            meta property="og:description" content=(description);
            meta property="og:type" content="website";
            @if let Some(icon_url) = &icon_url {
                meta property="og:image" content=(icon_url);
            }
            @if let Some(canonical_url) = &self.canonical_url {
                meta property="og:url" content=(canonical_url);
                link rel="canonical" href=(canonical_url);
            }

            // Twitter Card meta tags
            meta name="twitter:card" content="summary";
            meta name="twitter:title" content=(formatted_title);
            meta name="twitter:description" content=(description);
        }
    }
}

pub fn layout(main: Markup, ctx: &mut PageContext, seo: Option<SeoMeta>) -> Markup {
    ctx.assets
        .include_style_with_options("assets/site.css", StyleOptions { tailwind: true });

    let seo_data = seo.unwrap_or_default();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                (generator())
                link rel="icon" href="/favicon.svg";
                (seo_data.render(ctx.base_url))
            }
            body.bg-navy.text-white.font-inter.min-h-screen {
                (header(ctx.current_path))
                main."pt-16" {
                    (main)
                }
                footer.border-t."border-electric/20".bg-charcoal {
                    div.container.mx-auto."px-8"."py-10".flex.flex-col."sm:flex-row".justify-between.items-center."gap-y-6" {
                        div {
                            a.text-lg.font-space.font-bold href="/" { (SITE_NAME) }
                            p.text-sm.text-gray-400 { "Copyright © 2024 " (SITE_NAME) ". All rights reserved." }
                        }
                        nav.flex.flex-wrap."gap-x-6"."gap-y-2".text-sm.text-gray-400 {
                            @for (name, href) in NAVIGATION {
                                a."hover:text-electric" href=(href) { (name) }
                            }
                        }
                        a.text-sm.text-electric href=(format!("mailto:{}", CONTACT_EMAIL)) { (CONTACT_EMAIL) }
                    }
                }
            }
        }
    }
}
