//! # EPYL page components
//!
//! The landing page as Dioxus components. [`Page`] renders the whole document body for a
//! given [`SiteConfig`]; [`App`] is the browser root (default config plus inline styles).
//!
//! Shared state is provided through context by [`Page`]:
//! * `SiteConfig`: read-only configuration,
//! * `Signal<NavState>`: active section and mobile menu visibility.
//!
//! Scroll synchronisation and smooth scrolling only run in the browser (`wasm32`); on
//! native targets (server-side rendering) they are inert.

pub mod components;
pub mod dom;
pub mod layout;
pub mod sections;

use crate::layout::{Footer, Header};
use crate::sections::{About, Contact, Contribute, Events, Hero, Programs, Resources};
use dioxus::prelude::*;
use epyl_domain::NavState;
use epyl_domain::config::SiteConfig;

pub use epyl_domain as domain;

/// Stylesheet for the page, inlined by [`App`] and by the static export.
pub const STYLESHEET: &str = include_str!("../assets/epyl.css");

/// Image served at `/placeholder.svg` until real photos exist.
pub const PLACEHOLDER_SVG: &str = include_str!("../assets/placeholder.svg");

/// Browser root: default configuration with the stylesheet inlined.
#[component]
pub fn App() -> Element {
    rsx! {
        style { dangerous_inner_html: STYLESHEET }
        Page { config: SiteConfig::default() }
    }
}

/// The full page: header, the seven sections and the footer.
#[component]
pub fn Page(config: SiteConfig) -> Element {
    let config = use_context_provider(|| config);
    let nav = use_signal(NavState::new);
    use_context_provider(|| nav);

    dom::use_scroll_sync(nav, config.navigation.scroll_offset);

    rsx! {
        div { class: "page",
            Header {}
            main { class: "page-main",
                Hero {}
                About {}
                Programs {}
                Events {}
                Contribute {}
                Resources {}
                Contact {}
            }
            Footer {}
        }
    }
}
