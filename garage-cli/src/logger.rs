use colored::Colorize;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Writes log records to stderr so they never mix with driving output on stdout.
struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let label = match record.level() {
            Level::Error => "Error:".red(),
            Level::Warn => "Warning:".yellow(),
            Level::Info => "Info:".green(),
            Level::Debug => "Debug:".blue(),
            Level::Trace => "Trace:".dimmed(),
        };
        eprintln!("{} {}", label, record.args());
    }

    fn flush(&self) {}
}

/// Maps the number of `-v` flags to a level filter
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init(verbosity: u8) -> anyhow::Result<()> {
    let level = level_for(verbosity);
    log::set_boxed_logger(Box::new(StderrLogger { level }))
        .map_err(|err| anyhow::anyhow!("could not install logger: {err}"))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(7), LevelFilter::Trace);
    }
}
