use colored::Colorize;

fn level_color(level: log::Level) -> &'static str {
    match level {
        log::Level::Info => "green",
        log::Level::Warn => "yellow",
        log::Level::Error => "red",
        log::Level::Debug => "magenta",
        log::Level::Trace => "bright black",
    }
}

/// Installs the global logger: stdout plus `log_file`, `Debug` and above.
///
/// Fails if a global logger has already been set.
pub fn setup(log_file: &str) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%H:%M:%S]"),
                record.target(),
                record.level().to_string().color(level_color(record.level())),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .level_for("sqlx", log::LevelFilter::Warn)
        .chain(std::io::stdout())
        .chain(fern::log_file(log_file)?)
        .apply()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_colors_resolve() {
        use colored::Color;

        assert_eq!(Color::from(level_color(log::Level::Error)), Color::Red);
        assert_eq!(Color::from(level_color(log::Level::Warn)), Color::Yellow);
        assert_eq!(Color::from(level_color(log::Level::Trace)), Color::BrightBlack);
    }
}
