use maud::{Markup, html};
use maudit::route::prelude::*;

use crate::components::page_hero;
use crate::content::{CONTACT_CHANNELS, OFFICES, OfficeStatus};
use crate::layout::{SeoMeta, layout};

const INTRO: &str = "Ready to transform your business with cutting-edge technology? Let's start a conversation about your future.";

#[route("/contact/")]
pub struct Contact;

impl Route for Contact {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        ctx.assets.include_script("assets/contact.ts");
        let seo = SeoMeta::new("Contact", INTRO, ctx);

        layout(
            html! {
                (page_hero("Get In Touch", INTRO))

                section."pb-24"."px-4" {
                    div."max-w-7xl".mx-auto.grid."grid-cols-1"."lg:grid-cols-2"."gap-12" {
                        (contact_form())

                        div.flex.flex-col."gap-6" {
                            @for channel in CONTACT_CHANNELS {
                                div.card."p-6" {
                                    h3.text-xl.font-space.font-semibold."mb-2" { (channel.title) }
                                    p.text-electric.font-medium."mb-2" { (channel.info) }
                                    p.text-gray-400 { (channel.description) }
                                }
                            }
                        }
                    }
                }

                section."py-24"."px-4".bg-charcoal {
                    div."max-w-5xl".mx-auto {
                        h2."text-4xl".font-space.font-bold.text-center."mb-12" {
                            "Global " span.text-gold { "Offices" }
                        }
                        div.grid."grid-cols-2"."md:grid-cols-4"."gap-6" {
                            @for office in OFFICES {
                                div.card."p-6".text-center {
                                    h3.text-xl.font-semibold { (office.city) }
                                    p.text-gray-400."mb-3" { (office.country) " · " (office.timezone) }
                                    @match office.status {
                                        OfficeStatus::Open => span.status-completed.badge { "Open" },
                                        OfficeStatus::Closed => span.status-planning.badge { "Closed" },
                                    }
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

/// Never submitted: `contact.ts` intercepts the submit event and logs the fields.
fn contact_form() -> Markup {
    html! {
        form.card."p-8".flex.flex-col."gap-6" id="contact-form" {
            h2."text-3xl".font-space.font-bold { "Send a Message" }
            div.grid."md:grid-cols-2"."gap-6" {
                label.flex.flex-col."gap-2" {
                    span.text-sm.text-gray-300 { "Name *" }
                    input.search-input type="text" name="name" required;
                }
                label.flex.flex-col."gap-2" {
                    span.text-sm.text-gray-300 { "Email *" }
                    input.search-input type="email" name="email" required;
                }
            }
            label.flex.flex-col."gap-2" {
                span.text-sm.text-gray-300 { "Company" }
                input.search-input type="text" name="company";
            }
            label.flex.flex-col."gap-2" {
                span.text-sm.text-gray-300 { "Message *" }
                textarea.search-input name="message" rows="6" required {}
            }
            button.btn-primary type="submit" { "Send Message" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_form_fields() {
        let markup = contact_form().into_string();

        for field in ["name", "email", "company", "message"] {
            assert!(markup.contains(&format!(r#"name="{}""#, field)), "{}", field);
        }
        assert!(markup.contains(r#"id="contact-form""#));
    }
}
