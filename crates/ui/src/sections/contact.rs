use super::{SectionFrame, SectionTitle};
use crate::components::Button;
use dioxus::prelude::*;
use epyl_domain::Section;

/// Contact form. Submission is swallowed: there is no backend to send it to.
#[component]
pub fn Contact() -> Element {
    rsx! {
        SectionFrame { section: Section::Contact, class: "section-muted",
            SectionTitle { title: "Contáctanos" }
            div { class: "contact-wrapper",
                form {
                    class: "contact-form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        tracing::debug!("Contact form submitted, nothing to send it to");
                    },
                    div { class: "field",
                        label { r#for: "name", "Nombre" }
                        input { r#type: "text", id: "name", name: "name" }
                    }
                    div { class: "field",
                        label { r#for: "email", "Correo Electrónico" }
                        input { r#type: "email", id: "email", name: "email" }
                    }
                    div { class: "field",
                        label { r#for: "message", "Mensaje" }
                        textarea { id: "message", name: "message", rows: "4" }
                    }
                    Button { submit: true, class: "w-full", "Enviar Mensaje" }
                }
            }
        }
    }
}
