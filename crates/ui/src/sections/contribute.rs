use super::SectionFrame;
use crate::components::{Button, ButtonSize, ButtonVariant, Icon, IconName};
use dioxus::prelude::*;
use epyl_domain::Section;
use epyl_domain::content::CONTRIBUTE_COPY;

/// Donation call to action on the primary-coloured band. Neither button is wired to anything.
#[component]
pub fn Contribute() -> Element {
    rsx! {
        SectionFrame { section: Section::Contribute, class: "section-primary",
            div { class: "contribute-stack",
                Icon { name: IconName::Heart, class: "icon-xl" }
                h2 { class: "section-title", "Contribuye a Nuestra Misión" }
                p { class: "contribute-copy", "{CONTRIBUTE_COPY}" }
                div { class: "contribute-actions",
                    Button { variant: ButtonVariant::Inverted, size: ButtonSize::Lg, "Donar Ahora" }
                    Button {
                        variant: ButtonVariant::InvertedOutline,
                        size: ButtonSize::Lg,
                        "Otras Formas de Ayudar"
                    }
                }
            }
        }
    }
}
