use crate::constants::{DEFAULT_SCROLL_OFFSET, SITE_NAME};
use crate::content::SocialNetwork;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level site configuration shared by the page, the exporter and the preview server.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub site: SiteInfo,
    pub navigation: NavigationConfig,
    pub social: SocialConfig,
    pub export: ExportConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into components and subsystems.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SiteConfig {
    fn deref_mut(&mut self) -> &mut SiteConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Identity and page-level copy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub copyright_year: u16,
    pub lang: String,
}

impl SiteInfo {
    /// `© 2023 EPYL. Todos los derechos reservados.`
    #[must_use]
    pub fn copyright(&self) -> String {
        format!("© {} {}. Todos los derechos reservados.", self.copyright_year, self.name)
    }
}

/// Scroll-sync tuning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub scroll_offset: f64,
    pub smooth_scroll: bool,
}

/// Footer link targets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    pub facebook: String,
    pub twitter: String,
    pub instagram: String,
    pub youtube: String,
}

impl SocialConfig {
    #[must_use]
    pub fn url(&self, network: SocialNetwork) -> &str {
        match network {
            SocialNetwork::Facebook => &self.facebook,
            SocialNetwork::Twitter => &self.twitter,
            SocialNetwork::Instagram => &self.instagram,
            SocialNetwork::YouTube => &self.youtube,
        }
    }
}

/// Static export target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub out_dir: PathBuf,
    pub file_name: String,
}

/// Preview server for the exported site.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
}

/// Native logging (exporter and server).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    pub path: Option<PathBuf>,
}

// --- Default ---

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: SITE_NAME.to_owned(),
            title: "EPYL: Equipando Pastores y Líderes".to_owned(),
            tagline: "Fortaleciendo el liderazgo en la iglesia a través de capacitación y recursos \
                      de calidad."
                .to_owned(),
            copyright_year: 2023,
            lang: "es".to_owned(),
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self { scroll_offset: DEFAULT_SCROLL_OFFSET, smooth_scroll: true }
    }
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            facebook: "#".to_owned(),
            twitter: "#".to_owned(),
            instagram: "#".to_owned(),
            youtube: "#".to_owned(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { out_dir: PathBuf::from("dist"), file_name: "index.html".to_owned() }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            static_dir: PathBuf::from("dist"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), json: false, path: None }
    }
}
