// crates/synctab-cli/src/io/logging.rs

use std::io::Write;
use std::sync::atomic::Ordering;

use super::keys::RAW_MODE;

/// stderr logger. In raw mode "\n" no longer returns the carriage, so records end in "\r\n".
pub fn init(level: &str) {
    let filter = level.parse().unwrap_or(log::LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            let eol = if RAW_MODE.load(Ordering::Relaxed) { "\r\n" } else { "\n" };
            write!(buf, "[{}] {}{}", record.level(), record.args(), eol)
        })
        .init();
}
