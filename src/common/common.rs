use crate::config::structs::configuration::Configuration;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, info};

pub fn parse_log_level(level: &str) -> Option<LevelFilter> {
    match level {
        "off" => Some(LevelFilter::Off),
        "trace" => Some(LevelFilter::Trace),
        "debug" => Some(LevelFilter::Debug),
        "info" => Some(LevelFilter::Info),
        "warn" => Some(LevelFilter::Warn),
        "error" => Some(LevelFilter::Error),
        _ => None,
    }
}

/// Installs the global logger. Call once, from the binary.
pub fn setup_logging(config: &Configuration) -> Result<(), log::SetLoggerError> {
    let level = parse_log_level(config.log_level.as_str()).unwrap_or(LevelFilter::Info);

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    info!("logging initialized.");
    Ok(())
}

/// Renders a cached payload for a terminal: hex on request or when the
/// payload is not UTF-8.
pub fn render_value(payload: &[u8], as_hex: bool) -> String {
    if as_hex {
        return hex::encode(payload);
    }
    match std::str::from_utf8(payload) {
        Ok(text) => text.to_string(),
        Err(_) => hex::encode(payload),
    }
}
