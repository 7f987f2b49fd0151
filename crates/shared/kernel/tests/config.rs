use epyl_kernel::config::{ConfigError, ConfigLoader, load_site_config};
use epyl_kernel::domain::config::SiteConfig;
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

fn toml_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

fn env(vars: &[(&str, &str)]) -> HashMap<String, String> {
    vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

#[test]
fn file_values_override_defaults() {
    let file = toml_file(
        r#"
        [server]
        port = 9090

        [navigation]
        scroll_offset = 72.0
        smooth_scroll = false
        "#,
    );

    let cfg = load_site_config(Some(file.path())).expect("config loads");
    assert_eq!(cfg.server.port, 9090);
    assert!((cfg.navigation.scroll_offset - 72.0).abs() < f64::EPSILON);
    assert!(!cfg.navigation.smooth_scroll);
    assert_eq!(cfg.site.name, "EPYL");
}

#[test]
fn environment_overrides_file() {
    let file = toml_file("[server]\nport = 9090\n");

    let cfg: SiteConfig = ConfigLoader::new()
        .file(file.path())
        .env_source(env(&[
            ("EPYL__SERVER__PORT", "9500"),
            ("EPYL__SITE__COPYRIGHT_YEAR", "2024"),
            ("OTHER__SERVER__PORT", "1"),
        ]))
        .load()
        .expect("config loads");

    assert_eq!(cfg.server.port, 9500);
    assert_eq!(cfg.site.copyright_year, 2024);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let err = load_site_config(Some(Path::new("/definitely/not/here/epyl.toml")))
        .expect_err("explicit file is required");

    assert!(matches!(err, ConfigError::Config { .. }));
    assert!(err.to_string().contains("Failed to build config"), "{err}");
}

#[test]
fn malformed_values_report_deserialization() {
    let file = toml_file("[server]\nport = \"not-a-port\"\n");

    let err = ConfigLoader::new()
        .file(file.path())
        .env_source(HashMap::new())
        .load::<SiteConfig>()
        .expect_err("port must be numeric");

    assert!(err.to_string().contains("Failed to deserialize config"), "{err}");
}

#[test]
fn defaults_without_file_or_env() {
    let cfg: SiteConfig =
        ConfigLoader::new().env_source(HashMap::new()).load().expect("defaults load");
    assert_eq!(cfg, SiteConfig::default());
}
