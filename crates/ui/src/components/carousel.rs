use crate::components::{Icon, IconName};
use dioxus::prelude::*;
use epyl_domain::CarouselState;
use epyl_domain::content::Image;

/// Non-looping image carousel with previous/next controls.
#[component]
pub fn Carousel(slides: Vec<Image>, #[props(default, into)] class: String) -> Element {
    let mut state = use_signal(|| CarouselState::new(slides.len()));
    let current = state.read().index();
    let can_prev = state.read().can_prev();
    let can_next = state.read().can_next();
    let offset = current * 100;
    let items: Vec<(usize, Image, &str)> = slides
        .iter()
        .enumerate()
        .map(|(i, slide)| (i, *slide, if i == current { "false" } else { "true" }))
        .collect();

    rsx! {
        div {
            class: "carousel {class}",
            role: "region",
            "aria-roledescription": "carousel",
            div { class: "carousel-viewport",
                div {
                    class: "carousel-track",
                    style: "transform: translateX(-{offset}%);",
                    for (i, slide, hidden) in items {
                        div {
                            key: "{i}",
                            class: "carousel-item",
                            role: "group",
                            "aria-roledescription": "slide",
                            "aria-hidden": hidden,
                            img {
                                class: "carousel-image",
                                src: slide.src,
                                alt: slide.alt,
                                width: "{slide.width}",
                                height: "{slide.height}",
                            }
                        }
                    }
                }
            }
            button {
                class: "carousel-control carousel-prev",
                r#type: "button",
                disabled: !can_prev,
                onclick: move |_| {
                    state.write().prev();
                },
                Icon { name: IconName::ChevronLeft }
                span { class: "sr-only", "Previous slide" }
            }
            button {
                class: "carousel-control carousel-next",
                r#type: "button",
                disabled: !can_next,
                onclick: move |_| {
                    state.write().next();
                },
                Icon { name: IconName::ChevronRight }
                span { class: "sr-only", "Next slide" }
            }
        }
    }
}
