use dioxus::prelude::*;
use epyl_domain::content::SocialNetwork;

/// Stroke icons (24×24 grid, `currentColor`), drawn as path data only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    Menu,
    X,
    ChevronLeft,
    ChevronRight,
    Calendar,
    Heart,
    Facebook,
    Twitter,
    Instagram,
    YouTube,
}

impl IconName {
    const fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Menu => &["M4 12h16", "M4 6h16", "M4 18h16"],
            Self::X => &["M18 6 6 18", "m6 6 12 12"],
            Self::ChevronLeft => &["m15 18-6-6 6-6"],
            Self::ChevronRight => &["m9 18 6-6-6-6"],
            Self::Calendar => &[
                "M8 2v4",
                "M16 2v4",
                "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M3 10h18",
            ],
            Self::Heart => &[
                "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
            ],
            Self::Facebook => {
                &["M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"]
            },
            Self::Twitter => &[
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
            ],
            Self::Instagram => &[
                "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
                "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
                "M17.5 6.5h.01",
            ],
            Self::YouTube => &[
                "M2.5 17a24.12 24.12 0 0 1 0-10 2 2 0 0 1 1.4-1.4 49.56 49.56 0 0 1 16.2 0A2 2 0 0 1 21.5 7a24.12 24.12 0 0 1 0 10 2 2 0 0 1-1.4 1.4 49.55 49.55 0 0 1-16.2 0A2 2 0 0 1 2.5 17",
                "m10 15 5-3-5-3z",
            ],
        }
    }
}

impl From<SocialNetwork> for IconName {
    fn from(network: SocialNetwork) -> Self {
        match network {
            SocialNetwork::Facebook => Self::Facebook,
            SocialNetwork::Twitter => Self::Twitter,
            SocialNetwork::Instagram => Self::Instagram,
            SocialNetwork::YouTube => Self::YouTube,
        }
    }
}

/// Decorative icon; give the surrounding control an accessible label.
#[component]
pub fn Icon(name: IconName, #[props(default, into)] class: String) -> Element {
    rsx! {
        svg {
            class: "icon {class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in name.paths() {
                path { key: "{d}", d: *d }
            }
        }
    }
}
