use super::{SectionFrame, SectionTitle};
use crate::components::{Button, ButtonVariant, Card, CardContent, Icon, IconName};
use dioxus::prelude::*;
use epyl_domain::Section;
use epyl_domain::content::EVENTS;

#[component]
pub fn Events() -> Element {
    rsx! {
        SectionFrame { section: Section::Events,
            SectionTitle { title: "Próximos Eventos" }
            div { class: "card-grid",
                for event in EVENTS {
                    Card { key: "{event.title}",
                        CardContent {
                            div { class: "event-date",
                                Icon { name: IconName::Calendar, class: "icon-md icon-primary" }
                                p { class: "muted small", "{event.date}" }
                            }
                            h3 { class: "card-title", "{event.title}" }
                            p { class: "muted small", "{event.location}" }
                            Button { variant: ButtonVariant::Outline, class: "w-full",
                                "Inscribirse"
                                Icon { name: IconName::ChevronRight, class: "icon-sm icon-trailing" }
                            }
                        }
                    }
                }
            }
        }
    }
}
