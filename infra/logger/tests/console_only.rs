use epyl_domain::config::LoggingConfig;
use epyl_logger::Logger;

#[test]
fn config_without_path_logs_to_console_only() -> Result<(), Box<dyn std::error::Error>> {
    let config = LoggingConfig { level: " warn ".to_owned(), path: None, ..LoggingConfig::default() };

    let logger = Logger::from_config("epyl-server", &config)?;

    assert!(logger.guard().is_none(), "no path means no file writer");
    tracing::warn!(section = "events", "console only");
    Ok(())
}
