use super::{SectionFrame, SectionTitle};
use crate::components::{Button, ButtonVariant, Card, CardContent, Icon, IconName};
use dioxus::prelude::*;
use epyl_domain::Section;
use epyl_domain::content::PROGRAMS;

#[component]
pub fn Programs() -> Element {
    rsx! {
        SectionFrame { section: Section::Programs, class: "section-muted",
            SectionTitle { title: "Nuestros Programas" }
            div { class: "card-grid",
                for program in PROGRAMS {
                    Card { key: "{program.title}",
                        CardContent {
                            h3 { class: "card-title", "{program.title}" }
                            p { class: "muted", "{program.description}" }
                            Button { variant: ButtonVariant::Outline, class: "w-full",
                                "Más Información"
                                Icon { name: IconName::ChevronRight, class: "icon-sm icon-trailing" }
                            }
                        }
                    }
                }
            }
        }
    }
}
