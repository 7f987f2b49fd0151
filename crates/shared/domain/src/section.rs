use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// One of the seven content blocks of the page, in page order.
///
/// The string form (`Display`, `FromStr`, serde) is the DOM id of the block.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    About,
    Programs,
    Events,
    Contribute,
    Resources,
    Contact,
}

impl Section {
    /// All sections, top of the page first.
    pub const ALL: [Self; 7] = [
        Self::Home,
        Self::About,
        Self::Programs,
        Self::Events,
        Self::Contribute,
        Self::Resources,
        Self::Contact,
    ];

    /// DOM id of the section element.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Programs => "programs",
            Self::Events => "events",
            Self::Contribute => "contribute",
            Self::Resources => "resources",
            Self::Contact => "contact",
        }
    }

    /// Navigation label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Inicio",
            Self::About => "Sobre Nosotros",
            Self::Programs => "Programas",
            Self::Events => "Eventos",
            Self::Contribute => "Contribuir",
            Self::Resources => "Recursos",
            Self::Contact => "Contacto",
        }
    }

    /// Position in [`Section::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// In-page anchor (`#programs`).
    #[must_use]
    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn ids_round_trip_through_from_str() {
        for section in Section::ALL {
            assert_eq!(Section::from_str(section.id()), Ok(section));
            assert_eq!(section.to_string(), section.id());
            assert_eq!(section.as_ref(), section.id());
        }
    }

    #[test]
    fn index_matches_page_order() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert!(Section::from_str("blog").is_err());
        assert!(Section::from_str("Home").is_err());
    }

    #[test]
    fn anchor_prefixes_hash() {
        assert_eq!(Section::Contribute.anchor(), "#contribute");
    }
}
