use std::io::Write;

use env_logger::{Builder, Env};
use log::Level;

/// Logs go to stderr, stdout is reserved for the generated JSON.
/// Debug and trace lines also name the emitting module.
pub fn init_logger(level: &str) {
    let env = Env::default()
        .filter_or("OTA_LOG_LEVEL", level)
        .write_style_or("OTA_LOG_STYLE", "auto");

    Builder::from_env(env)
        .format(|buf, record| {
            if record.level() >= Level::Debug {
                writeln!(
                    buf,
                    "{} [{}] {}",
                    buf.default_styled_level(record.level()),
                    record.target(),
                    record.args()
                )
            } else {
                writeln!(buf, "{}: {}", buf.default_styled_level(record.level()), record.args())
            }
        })
        .init();
}
