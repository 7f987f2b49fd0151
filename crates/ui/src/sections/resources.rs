use super::{SectionFrame, SectionTitle};
use crate::components::{Button, ButtonVariant, Card, CardContent};
use dioxus::prelude::*;
use epyl_domain::Section;
use epyl_domain::content::RESOURCES;

#[component]
pub fn Resources() -> Element {
    let cards: Vec<_> = RESOURCES.iter().map(|resource| (resource.title, resource.summary())).collect();

    rsx! {
        SectionFrame { section: Section::Resources,
            SectionTitle { title: "Recursos" }
            div { class: "card-grid",
                for (title, summary) in cards {
                    Card { key: "{title}",
                        CardContent {
                            h3 { class: "card-title", "{title}" }
                            p { class: "muted small", "{summary}" }
                            Button { variant: ButtonVariant::Outline, class: "w-full", "Descargar" }
                        }
                    }
                }
            }
        }
    }
}
