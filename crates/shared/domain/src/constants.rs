/// Distance in CSS pixels added to `scrollY` before comparing against section tops,
/// so a section counts as reached slightly before its top hits the viewport edge.
pub const DEFAULT_SCROLL_OFFSET: f64 = 100.0;

/// Prefix for environment overrides (`EPYL__SERVER__PORT=9000`).
pub const ENV_PREFIX: &str = "EPYL";

/// Config file looked up when no explicit path is given (extension resolved by the loader).
pub const DEFAULT_CONFIG_FILE: &str = "epyl";

/// Id of the element the page is mounted under.
pub const MOUNT_ID: &str = "main";

pub const SITE_NAME: &str = "EPYL";
