use epyl_export::{ExportError, PLACEHOLDER_FILE, export, render_document};
use epyl_kernel::domain::config::SiteConfig;
use std::fs;

fn config_into(dir: &std::path::Path) -> SiteConfig {
    let mut cfg = SiteConfig::default();
    cfg.export.out_dir = dir.join("dist");
    cfg
}

#[test]
fn document_has_head_and_mounted_body() {
    let html = render_document(&SiteConfig::default());

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<html lang=\"es\">"));
    assert!(html.contains("<meta charset=\"utf-8\">"));
    assert!(html.contains("name=\"viewport\""));
    assert!(html.contains("<title>EPYL: Equipando Pastores y Líderes</title>"));
    assert!(html.contains(".site-header"));
    assert!(html.contains("<div id=\"main\">"));
    assert!(html.contains("id=\"contact\""));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn document_lines_are_in_order() {
    let html = render_document(&SiteConfig::default());
    let lines: Vec<&str> = html.lines().collect();

    assert_eq!(
        &lines[..5],
        [
            "<!DOCTYPE html>",
            "<html lang=\"es\">",
            "<head>",
            "<meta charset=\"utf-8\">",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
        ]
    );
    assert!(html.ends_with("</div>\n</body>\n</html>\n"));
    assert!(html.contains("</style>\n</head>\n<body>\n<div id=\"main\">"));
}

#[test]
fn title_and_lang_are_escaped() {
    let mut cfg = SiteConfig::default();
    cfg.site.title = "Pastores & <Líderes>".to_owned();
    cfg.site.lang = "es\"x".to_owned();

    let html = render_document(&cfg);

    assert!(html.contains("<title>Pastores &amp; &lt;Líderes&gt;</title>"));
    assert!(html.contains("<html lang=\"es&quot;x\">"));
}

#[test]
fn export_writes_index_and_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_into(dir.path());

    let index = export(&cfg).unwrap();

    assert_eq!(index, dir.path().join("dist").join("index.html"));
    let written = fs::read_to_string(&index).unwrap();
    assert_eq!(written, render_document(&cfg));

    let svg = fs::read_to_string(dir.path().join("dist").join(PLACEHOLDER_FILE)).unwrap();
    assert!(svg.contains("<svg"));
}

#[test]
fn export_honours_custom_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = config_into(dir.path());
    cfg.export.file_name = "inicio.html".to_owned();

    let index = export(&cfg).unwrap();

    assert!(index.ends_with("inicio.html"));
    assert!(index.is_file());
}

#[test]
fn export_rejects_nested_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = config_into(dir.path());
    cfg.export.file_name = "../index.html".to_owned();

    let err = export(&cfg).unwrap_err();

    assert!(matches!(err, ExportError::InvalidConfiguration { .. }));
    assert!(!dir.path().join("index.html").exists());
}

#[test]
fn export_reports_unwritable_target() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("dist");
    fs::write(&blocker, "not a directory").unwrap();
    let cfg = config_into(dir.path());

    let err = export(&cfg).unwrap_err();

    assert!(matches!(err, ExportError::Io { .. }));
    assert!(err.to_string().contains("Creating output directory"));
}
