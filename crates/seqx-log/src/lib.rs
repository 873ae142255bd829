//! A small, zero-dependency logging facade for the `seqx` workspace.
//!
//! The containers log structural events (buffer growth, shrink, resize) at
//! `Trace` and diagnostic dumps at `Info`. The logger is a process-wide
//! singleton with an atomically stored minimum level, so filtering is a
//! single relaxed load on the hot path.
//!
//! Output goes to stderr, colored per level, prefixed with the calling
//! module path.
//!
//! # Example
//!
//! ```
//! use seqx_log::{info, trace, Level};
//!
//! seqx_log::set_level(Level::Trace);
//!
//! let capacity = 8;
//! trace!("grow: capacity {} -> {}", capacity, capacity * 2);
//! info!("array ready");
//! ```
//!
//! # Configuration
//!
//! The level can be taken from the environment instead of code:
//!
//! ```
//! // Honors SEQX_LOG=error|warn|info|debug|trace when set.
//! let level = seqx_log::init_from_env();
//! ```

use std::fmt::Arguments;
use std::str::FromStr;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU8, Ordering};

/// Environment variable consulted by [`init_from_env`].
pub const ENV_VAR: &str = "SEQX_LOG";

/// Message severity, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Critical failures.
    Error = 0,
    /// Suspicious but recoverable situations.
    Warn = 1,
    /// High-level progress messages.
    Info = 2,
    /// Detailed diagnostics.
    Debug = 3,
    /// Per-operation tracing (buffer growth, shrink, node splices).
    Trace = 4,
}

impl Level {
    const fn color(self) -> &'static str {
        match self {
            Level::Error => "\x1b[31m",
            Level::Warn => "\x1b[33m",
            Level::Info => "\x1b[32m",
            Level::Debug => "\x1b[36m",
            Level::Trace => "\x1b[35m",
        }
    }

    /// Upper-case name of the level, as it appears in output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }

    fn from_u8(raw: u8) -> Level {
        match raw {
            0 => Level::Error,
            1 => Level::Warn,
            2 => Level::Info,
            3 => Level::Debug,
            _ => Level::Trace,
        }
    }
}

/// Error returned when parsing an unknown level name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl std::fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown log level: {:?}", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Case-insensitive parse of a level name.
    ///
    /// ```
    /// use seqx_log::Level;
    ///
    /// assert_eq!("trace".parse(), Ok(Level::Trace));
    /// assert_eq!("WARN".parse(), Ok(Level::Warn));
    /// assert!("loud".parse::<Level>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(Level::Error),
            "warn" => Ok(Level::Warn),
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            "trace" => Ok(Level::Trace),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// The process-wide logger.
///
/// Holds only the minimum level, stored atomically so it can be read and
/// changed from any thread without locking.
pub struct Logger {
    level: AtomicU8,
}

impl Logger {
    const fn new(level: Level) -> Self {
        Logger {
            level: AtomicU8::new(level as u8),
        }
    }

    /// Sets the minimum level; messages below it are dropped.
    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::SeqCst);
    }

    /// Current minimum level.
    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed))
    }

    /// Whether a message at `level` would be emitted.
    pub fn enabled(&self, level: Level) -> bool {
        level as u8 <= self.level.load(Ordering::Relaxed)
    }
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Returns the global logger, initializing it at `Info` on first use.
pub fn logger() -> &'static Logger {
    LOGGER.get_or_init(|| Logger::new(Level::Info))
}

/// Sets the global minimum level.
pub fn set_level(level: Level) {
    logger().set_level(level);
}

/// Sets the global minimum level from a level name.
pub fn set_level_from_str(s: &str) -> Result<(), ParseLevelError> {
    set_level(s.parse()?);
    Ok(())
}

/// Applies the `SEQX_LOG` environment variable, if set and valid, and
/// returns the level in effect afterwards.
///
/// Unset or unparseable values leave the current level untouched, so this is
/// safe to call unconditionally at startup.
pub fn init_from_env() -> Level {
    if let Ok(value) = std::env::var(ENV_VAR)
        && let Ok(level) = value.parse()
    {
        set_level(level);
    }
    logger().level()
}

/// Writes a formatted record. Called by the macros after the level check.
#[doc(hidden)]
pub fn __emit(level: Level, target: &str, args: Arguments) {
    const RESET: &str = "\x1b[0m";

    if !logger().enabled(level) {
        return;
    }

    eprintln!("{}[{}]{RESET} {target}: {args}", level.color(), level.as_str());
}

/// Logs at an explicit level, capturing the caller's module path.
///
/// ```
/// use seqx_log::{log, Level};
///
/// log!(level: Level::Info, "pushed {} elements", 3);
/// ```
#[macro_export]
macro_rules! log {
    (level: $level:expr, $($arg:tt)*) => {
        {
            if $crate::logger().enabled($level) {
                $crate::__emit($level, module_path!(), format_args!($($arg)*));
            }
        }
    };
}

/// Logs at `Error` level.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Error, $($arg)*)
    };
}

/// Logs at `Warn` level.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Warn, $($arg)*)
    };
}

/// Logs at `Info` level.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Info, $($arg)*)
    };
}

/// Logs at `Debug` level.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Debug, $($arg)*)
    };
}

/// Logs at `Trace` level.
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Trace, $($arg)*)
    };
}
