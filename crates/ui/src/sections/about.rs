use super::{SectionFrame, SectionTitle};
use dioxus::prelude::*;
use epyl_domain::Section;
use epyl_domain::content::{ABOUT_PARAGRAPHS, TEAM};

#[component]
pub fn About() -> Element {
    rsx! {
        SectionFrame { section: Section::About,
            SectionTitle { title: "Sobre Nosotros" }
            div { class: "about-grid",
                div {
                    for (i, paragraph) in ABOUT_PARAGRAPHS.iter().enumerate() {
                        p { key: "{i}", class: "muted", "{paragraph}" }
                    }
                }
                div { class: "team-grid",
                    for (i, member) in TEAM.iter().enumerate() {
                        div { key: "{i}", class: "team-member",
                            img {
                                class: "avatar",
                                src: member.photo.src,
                                alt: member.photo.alt,
                                width: "{member.photo.width}",
                                height: "{member.photo.height}",
                            }
                            h3 { class: "team-name", "{member.name}" }
                            p { class: "muted small", "{member.role}" }
                        }
                    }
                }
            }
        }
    }
}
