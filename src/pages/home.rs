use yew::prelude::*;

use crate::components::about::{self, AboutSection};
use crate::components::catalog::{self, CatalogSection};
use crate::components::contact::{self, ContactSection};
use crate::components::footer::{self, Footer};
use crate::components::gallery::{self, GallerySection};
use crate::components::hero::{self, HeroSection};
use crate::components::how_it_works::{self, HowItWorksSection};
use crate::components::testimonials::{self, TestimonialsSection};

/// Section landmarks in the order they appear on the page. The render
/// path maps over this list, so reordering it reorders the page.
pub const SECTION_ORDER: &[&str] = &[
    hero::SECTION_ID,
    about::SECTION_ID,
    catalog::SECTION_ID,
    how_it_works::SECTION_ID,
    testimonials::SECTION_ID,
    gallery::SECTION_ID,
    contact::SECTION_ID,
    footer::SECTION_ID,
];

fn section(id: &str) -> Option<Html> {
    match id {
        hero::SECTION_ID => Some(html! { <HeroSection /> }),
        about::SECTION_ID => Some(html! { <AboutSection /> }),
        catalog::SECTION_ID => Some(html! { <CatalogSection /> }),
        how_it_works::SECTION_ID => Some(html! { <HowItWorksSection /> }),
        testimonials::SECTION_ID => Some(html! { <TestimonialsSection /> }),
        gallery::SECTION_ID => Some(html! { <GallerySection /> }),
        contact::SECTION_ID => Some(html! { <ContactSection /> }),
        footer::SECTION_ID => Some(html! { <Footer /> }),
        _ => None,
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="home-page">
            <style>
                {r#"
                    .home-page {
                        min-height: 100vh;
                        background: #FDFBF8;
                        font-family: 'Helvetica Neue', Helvetica, Arial, sans-serif;
                        color: #3A3A3A;
                    }
                    .home-page * { box-sizing: border-box; }
                    html { scroll-behavior: smooth; }
                    .section-container {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 16px;
                    }
                    .section-eyebrow {
                        color: #D4C5B9;
                        font-size: 0.8rem;
                        font-weight: 600;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        margin: 0 0 16px;
                    }
                    .section-title {
                        font-family: Georgia, 'Times New Roman', serif;
                        font-size: 2.25rem;
                        line-height: 1.2;
                        color: #3A3A3A;
                        margin: 0 0 24px;
                    }
                    .section-reveal {
                        transition: opacity 1s ease, transform 1s ease;
                    }
                    .reveal-hidden { opacity: 0; transform: translateY(24px); }
                    .reveal-visible { opacity: 1; transform: none; }
                    .btn-primary {
                        display: inline-block;
                        background: #E8B4C8;
                        color: #FFFFFF;
                        font-weight: 600;
                        padding: 14px 32px;
                        border: none;
                        border-radius: 10px;
                        cursor: pointer;
                        text-decoration: none;
                        transition: background 0.3s ease, transform 0.3s ease;
                    }
                    .btn-primary:hover { background: #D4A0B8; transform: translateY(-2px); }
                    .btn-secondary {
                        display: inline-block;
                        background: transparent;
                        color: #3A3A3A;
                        font-weight: 600;
                        padding: 14px 32px;
                        border: 1px solid #D4C5B9;
                        border-radius: 10px;
                        cursor: pointer;
                        text-decoration: none;
                        transition: border-color 0.3s ease, color 0.3s ease;
                    }
                    .btn-secondary:hover { border-color: #E8B4C8; color: #E8B4C8; }
                "#}
            </style>

            { for SECTION_ORDER.iter().copied().filter_map(section) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{section, SECTION_ORDER};

    #[test]
    fn landmarks_are_declared_in_the_fixed_page_order() {
        assert_eq!(
            SECTION_ORDER,
            &[
                "hero-section",
                "about-section",
                "catalog-section",
                "how-it-works-section",
                "testimonials-section",
                "gallery-section",
                "contact-section",
                "footer",
            ]
        );
    }

    #[test]
    fn every_landmark_maps_to_a_rendered_section() {
        for id in SECTION_ORDER {
            assert!(section(id).is_some(), "no section renders for {id}");
        }
        assert!(section("nonexistent-section").is_none());
    }
}
