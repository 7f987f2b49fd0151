use crate::components::{Button, ButtonSize, ButtonVariant, Icon, IconName};
use crate::dom::scroll_to_section;
use dioxus::prelude::*;
use epyl_domain::config::SiteConfig;
use epyl_domain::content::LOGO;
use epyl_domain::{NavState, Section};

/// Sticky header: logo, desktop navigation and the mobile menu toggle.
///
/// The mobile navigation is rendered right below the header, only while open.
#[component]
pub fn Header() -> Element {
    let mut nav = use_context::<Signal<NavState>>();
    let config = use_context::<SiteConfig>();
    let site_name = config.site.name.clone();
    let menu_open = nav.read().menu_open();

    rsx! {
        header { class: "site-header",
            div { class: "container",
                div { class: "header-bar",
                    a { class: "brand", href: "/",
                        img {
                            src: LOGO.src,
                            alt: LOGO.alt,
                            width: "{LOGO.width}",
                            height: "{LOGO.height}",
                        }
                        span { class: "brand-name", "{site_name}" }
                    }
                    nav { class: "desktop-nav",
                        for section in Section::ALL {
                            NavLink { key: "{section}", section }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Icon,
                        class: "menu-toggle",
                        onclick: move |_| {
                            nav.write().toggle_menu();
                        },
                        if menu_open {
                            Icon { name: IconName::X, class: "icon-lg" }
                        } else {
                            Icon { name: IconName::Menu, class: "icon-lg" }
                        }
                        span { class: "sr-only", "Toggle Menu" }
                    }
                }
            }
        }
        if menu_open {
            MobileMenu {}
        }
    }
}

#[component]
pub fn MobileMenu() -> Element {
    rsx! {
        div { class: "mobile-menu",
            nav { class: "mobile-nav",
                for section in Section::ALL {
                    NavLink { key: "{section}", section, mobile: true }
                }
            }
        }
    }
}

/// One navigation entry. Clicking it selects the section, closes the mobile menu and
/// scrolls the section into view.
#[component]
pub fn NavLink(section: Section, #[props(default)] mobile: bool) -> Element {
    let mut nav = use_context::<Signal<NavState>>();
    let smooth = use_context::<SiteConfig>().navigation.smooth_scroll;
    let active = nav.read().is_active(section);

    let class = match (mobile, active) {
        (false, true) => "nav-link active underline",
        (true, true) => "nav-link active",
        (_, false) => "nav-link",
    };
    let current = if active { "true" } else { "false" };
    let label = section.label();

    rsx! {
        button {
            class,
            r#type: "button",
            "data-section": section.id(),
            "aria-current": current,
            onclick: move |_| {
                let target = nav.write().select(section);
                scroll_to_section(target, smooth);
            },
            "{label}"
        }
    }
}
