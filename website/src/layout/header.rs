use maud::Markup;
use maud::html;

use crate::site::{NAVIGATION, SITE_NAME};

pub fn header(current_path: &str) -> Markup {
    html! {
        header.fixed."top-0"."inset-x-0"."z-40"."bg-navy/80".backdrop-blur-md.border-b."border-electric/20" {
            div.container.mx-auto."px-8"."h-16".flex.items-center.justify-between {
                a.flex.items-center."gap-x-2" href="/" {
                    span."w-8"."h-8".rounded-lg.bg-gradient-to-br.from-electric.to-gold {}
                    span.text-xl.font-space.font-bold.tracking-wide { (SITE_NAME) }
                }
                nav."gap-x-8".hidden."md:flex" {
                    @for (name, href) in NAVIGATION {
                        @let active = is_active(current_path, href);
                        a.font-medium.transition-colors
                            .(if active { "text-electric" } else { "text-gray-300 hover:text-white" })
                            href=(href)
                            aria-current=[active.then_some("page")] {
                            (name)
                        }
                    }
                }
                a."md:hidden".text-electric href="/contact/" { "Contact" }
            }
        }
    }
}

/// Whether the navigation entry `href` is the section `current_path` belongs to.
///
/// The home entry only matches the home page itself.
fn is_active(current_path: &str, href: &str) -> bool {
    let section = href.trim_end_matches('/');
    let path = current_path.trim_end_matches('/');

    if section.is_empty() {
        return path.is_empty() || path == "/index.html";
    }

    path == section || path.starts_with(&format!("{}/", section))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_only_matches_itself() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/blog/", "/"));
        assert!(!is_active("/about/", "/"));
    }

    #[test]
    fn test_section_matches_sub_pages() {
        assert!(is_active("/blog/", "/blog/"));
        assert!(is_active("/blog/technology/", "/blog/"));
        assert!(is_active("/blog", "/blog/"));
        assert!(is_active("/features/cloud-solutions/", "/features/"));
    }

    #[test]
    fn test_section_requires_full_segment() {
        assert!(!is_active("/blogroll/", "/blog/"));
        assert!(!is_active("/projects/", "/blog/"));
    }

    #[test]
    fn test_header_highlights_current_section() {
        let markup = header("/projects/industrial/").into_string();

        assert!(markup.contains(r#"href="/projects/" aria-current="page""#));
        assert_eq!(markup.matches(r#"aria-current="page""#).count(), 1);
    }
}
