use crate::components::{Icon, IconName};
use dioxus::prelude::*;
use epyl_domain::config::SiteConfig;
use epyl_domain::content::SOCIAL_NETWORKS;

#[component]
pub fn Footer() -> Element {
    let config = use_context::<SiteConfig>();
    let copyright = config.site.copyright();
    let links: Vec<_> = SOCIAL_NETWORKS
        .iter()
        .map(|&network| (network, network.label(), config.social.url(network).to_owned()))
        .collect();

    rsx! {
        footer { class: "site-footer",
            div { class: "container footer-bar",
                p { class: "copyright", "{copyright}" }
                div { class: "social-links",
                    for (network, label, url) in links {
                        a {
                            key: "{label}",
                            class: "social-link",
                            href: "{url}",
                            "aria-label": label,
                            Icon { name: IconName::from(network), class: "icon-lg" }
                        }
                    }
                }
            }
        }
    }
}
