//! The seven page sections, in page order.

mod about;
mod contact;
mod contribute;
mod events;
mod hero;
mod programs;
mod resources;

pub use about::About;
pub use contact::Contact;
pub use contribute::Contribute;
pub use events::Events;
pub use hero::Hero;
pub use programs::Programs;
pub use resources::Resources;

use dioxus::prelude::*;
use epyl_domain::Section;

/// Outer `<section>` carrying the id the navigation scrolls to.
#[component]
fn SectionFrame(section: Section, #[props(default, into)] class: String, children: Element) -> Element {
    rsx! {
        section { id: section.id(), class: "section {class}",
            div { class: "container", {children} }
        }
    }
}

#[component]
fn SectionTitle(title: &'static str) -> Element {
    rsx! {
        h2 { class: "section-title", "{title}" }
    }
}
