use env_logger::{Builder, Env};
use log::{Level, LevelFilter};
use std::io::Write;

pub fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, true) => LevelFilter::Debug,
        (false, false) => LevelFilter::Info,
    }
}

/// Log to stderr; `RUST_LOG` overrides the level picked from the flags.
pub fn init_logging(level: LevelFilter) {
    let logging_env = Env::default().filter_or("RUST_LOG", level.to_string());
    Builder::from_env(logging_env)
        .format(|buf, record| {
            let time = chrono::Local::now().format("%H:%M:%S");
            match record.level() {
                Level::Info => writeln!(buf, "{} {}", time, record.args()),
                level => writeln!(buf, "{} {} {}", time, level, record.args()),
            }
        })
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_flags() {
        assert_eq!(level_for(false, false), LevelFilter::Info);
        assert_eq!(level_for(false, true), LevelFilter::Debug);
        assert_eq!(level_for(true, false), LevelFilter::Error);
        assert_eq!(level_for(true, true), LevelFilter::Error);
    }
}
