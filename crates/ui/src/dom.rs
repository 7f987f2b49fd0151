//! Browser bindings: page geometry for scroll sync and scrolling a section into view.

use dioxus::prelude::*;
use epyl_domain::{NavState, Section};

/// Keeps the active section in sync with the window scroll position.
///
/// Registers one `scroll` listener on mount and removes it on unmount. Inert outside
/// the browser.
pub fn use_scroll_sync(nav: Signal<NavState>, offset: f64) {
    #[cfg(target_arch = "wasm32")]
    browser::use_scroll_listener(nav, offset);

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (nav, offset);
}

/// Scrolls the section's element into view. Missing elements are skipped.
pub fn scroll_to_section(section: Section, smooth: bool) {
    #[cfg(target_arch = "wasm32")]
    browser::scroll_into_view(section, smooth);

    #[cfg(not(target_arch = "wasm32"))]
    tracing::debug!(%section, smooth, "Scroll requested outside the browser, ignoring");
}

#[cfg(target_arch = "wasm32")]
pub use browser::DomLayout;

#[cfg(target_arch = "wasm32")]
mod browser {
    use dioxus::prelude::*;
    use epyl_domain::{NavState, Section, SectionLayout};
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window};

    const SCROLL_EVENT: &str = "scroll";

    /// [`SectionLayout`] over the live DOM (`window.scrollY`, `element.offsetTop`).
    #[derive(Debug)]
    pub struct DomLayout {
        window: Window,
        document: Document,
    }

    impl DomLayout {
        #[must_use]
        pub fn current() -> Option<Self> {
            let window = web_sys::window()?;
            let document = window.document()?;
            Some(Self { window, document })
        }
    }

    impl SectionLayout for DomLayout {
        fn scroll_y(&self) -> f64 {
            self.window.scroll_y().unwrap_or_else(|err| {
                tracing::warn!(?err, "window.scrollY unavailable");
                0.0
            })
        }

        fn offset_top(&self, section: Section) -> Option<f64> {
            self.document
                .get_element_by_id(section.id())?
                .dyn_into::<HtmlElement>()
                .ok()
                .map(|element| f64::from(element.offset_top()))
        }
    }

    pub(super) fn use_scroll_listener(mut nav: Signal<NavState>, offset: f64) {
        let listener = use_hook(move || {
            let on_scroll = Closure::<dyn FnMut()>::new(move || {
                let Some(layout) = DomLayout::current() else {
                    return;
                };
                // Write only on change: every write re-renders the header.
                let mut next = *nav.peek();
                if next.sync_to_scroll(&layout, offset) {
                    nav.set(next);
                }
            });

            if let Some(window) = web_sys::window()
                && let Err(err) = window
                    .add_event_listener_with_callback(SCROLL_EVENT, on_scroll.as_ref().unchecked_ref())
            {
                tracing::warn!(?err, "Failed to register scroll listener");
            }

            Rc::new(on_scroll)
        });

        use_drop(move || {
            let closure: &Closure<dyn FnMut()> = &listener;
            if let Some(window) = web_sys::window()
                && let Err(err) = window
                    .remove_event_listener_with_callback(SCROLL_EVENT, closure.as_ref().unchecked_ref())
            {
                tracing::warn!(?err, "Failed to remove scroll listener");
            }
        });
    }

    pub(super) fn scroll_into_view(section: Section, smooth: bool) {
        let element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(section.id()));

        let Some(element) = element else {
            tracing::debug!(%section, "Section element not rendered, skipping scroll");
            return;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(if smooth { ScrollBehavior::Smooth } else { ScrollBehavior::Auto });
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
