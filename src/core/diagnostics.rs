//=========================================================================
// Diagnostics
//=========================================================================
//
// Leveled reporting for the game loop, built on the `log` facade.
//
// Architecture:
//   init_logging(LoggingConfig) ── installs env_logger once per process
//   Diagnostics { debug_enabled } ── owned by each GameLoop
//
// Debug output is gated by the context's own flag rather than a global
// toggle, so two loops in one process can differ. `fatal` is the only
// path that terminates the process.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt::Display;
use std::sync::Once;

//=== External Crates =====================================================

use log::{debug, error, info, LevelFilter};

//=== LoggingConfig =======================================================

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "ledge_engine=debug,winit=warn"). When absent, `RUST_LOG` is consulted,
/// then `default_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl LoggingConfig {
    /// Configuration that lets debug diagnostics through.
    pub fn verbose() -> Self {
        Self {
            default_level: LevelFilter::Debug,
            ..Self::default()
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs the global logger once.
///
/// Idempotent; later calls are ignored. Call early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(config.default_level);
        }

        builder.write_style(config.write_style);

        // A test harness may have installed a logger already.
        if builder.try_init().is_ok() {
            debug!("logging initialized");
        }
    });
}

//=== Diagnostics =========================================================

/// Diagnostics context carried by a game loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Diagnostics {
    debug_enabled: bool,
}

impl Diagnostics {
    pub const fn new(debug_enabled: bool) -> Self {
        Self { debug_enabled }
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    pub fn set_debug_enabled(&mut self, enabled: bool) {
        self.debug_enabled = enabled;
    }

    //--- Debug ------------------------------------------------------------

    /// Emits `message` only when debug output is enabled.
    pub fn debug(&self, message: &str) {
        if self.debug_enabled {
            debug!(target: "ledge", "{}", message);
        }
    }

    /// Emits `message [value]` only when debug output is enabled.
    pub fn debug_value<V: Display>(&self, message: &str, value: V) {
        if self.debug_enabled {
            debug!(target: "ledge", "{} [{}]", message, value);
        }
    }

    //--- Info -------------------------------------------------------------

    pub fn info(&self, message: &str) {
        info!(target: "ledge", "{}", message);
    }

    pub fn info_value<V: Display>(&self, message: &str, value: V) {
        info!(target: "ledge", "{} [{}]", message, value);
    }

    //--- Errors -----------------------------------------------------------

    /// Reports a recoverable error.
    pub fn error(&self, message: &str) {
        error!(target: "ledge", "{}", message);
    }

    /// Reports an unrecoverable error and terminates the process.
    pub fn fatal(&self, message: &str) -> ! {
        error!(target: "ledge", "{}", message);
        log::logger().flush();
        std::process::exit(1)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
