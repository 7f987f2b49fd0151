use super::SectionFrame;
use crate::components::{ButtonLink, ButtonSize, ButtonVariant, Carousel};
use dioxus::prelude::*;
use epyl_domain::Section;
use epyl_domain::config::SiteConfig;
use epyl_domain::content::HERO_SLIDES;

#[component]
pub fn Hero() -> Element {
    let config = use_context::<SiteConfig>();
    let title = config.site.title.clone();
    let tagline = config.site.tagline.clone();
    let contribute = Section::Contribute.anchor();
    let programs = Section::Programs.anchor();

    rsx! {
        SectionFrame { section: Section::Home, class: "section-muted hero",
            div { class: "hero-stack",
                h1 { class: "hero-title", "{title}" }
                p { class: "hero-tagline", "{tagline}" }
                Carousel { slides: HERO_SLIDES.to_vec(), class: "hero-carousel" }
                div { class: "hero-actions",
                    ButtonLink { href: contribute, size: ButtonSize::Lg, "Contribuir Ahora" }
                    ButtonLink {
                        href: programs,
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Lg,
                        "Nuestros Programas"
                    }
                }
            }
        }
    }
}
