//! Process-wide ambient logger
//!
//! Code that does not hold a logger handle can reach the engine's ambient
//! logger through [`global`]. It is a no-op logger until [`replace_global`]
//! installs a real one.

use super::logger::Logger;
use parking_lot::{const_rwlock, RwLock};

static GLOBAL: RwLock<Option<Logger>> = const_rwlock(None);

/// Clone of the current ambient logger, or a no-op logger if none is installed
pub fn global() -> Logger {
    GLOBAL.read().clone().unwrap_or_else(Logger::nop)
}

/// Install `logger` as the ambient logger, returning the one it replaces
pub fn replace_global(logger: Logger) -> Option<Logger> {
    GLOBAL.write().replace(logger)
}

/// Whether an ambient logger has been installed
pub fn is_installed() -> bool {
    GLOBAL.read().is_some()
}
