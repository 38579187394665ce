//=========================================================================
// Game Configuration
//=========================================================================
//
// Startup settings, parsable from the command line.
//
// `GameConfig` derives `clap::Args`, so a binary flattens it into its own
// parser:
//
// ```no_run
// use clap::Parser;
// use ledge_engine::core::config::GameConfig;
//
// #[derive(Parser)]
// struct Cli {
//     #[command(flatten)]
//     game: GameConfig,
// }
//
// let cli = Cli::parse();
// println!("running at {} fps", cli.game.fps);
// ```
//
//=========================================================================

//=== External Crates =====================================================

use clap::Args;

//=== Internal Dependencies ===============================================

use crate::core::diagnostics::{Diagnostics, LoggingConfig};
use crate::core::geometry::Rectangle;

//=== Defaults ============================================================

pub const DEFAULT_FPS: u32 = 30;
pub const DEFAULT_WINDOW_WIDTH: u32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;
pub const DEFAULT_TITLE: &str = "Ledge";

//=== GameConfig ==========================================================

/// Game session settings.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct GameConfig {
    /// Target frames per second
    #[arg(long, default_value_t = DEFAULT_FPS, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,

    /// Print debug diagnostics
    #[arg(long)]
    pub debug: bool,

    /// Window title
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Window width in logical pixels
    #[arg(
        long,
        default_value_t = DEFAULT_WINDOW_WIDTH,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub width: u32,

    /// Window height in logical pixels
    #[arg(
        long,
        default_value_t = DEFAULT_WINDOW_HEIGHT,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub height: u32,
}

impl GameConfig {
    /// Diagnostics context matching the `--debug` flag.
    pub fn diagnostics(&self) -> Diagnostics {
        Diagnostics::new(self.debug)
    }

    /// Logger configuration matching the `--debug` flag.
    pub fn logging(&self) -> LoggingConfig {
        if self.debug {
            LoggingConfig::verbose()
        } else {
            LoggingConfig::default()
        }
    }

    /// Initial viewport: the full window at the origin.
    pub fn viewport(&self) -> Rectangle {
        Rectangle::new(0.0, 0.0, self.width as f32, self.height as f32)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            debug: false,
            title: DEFAULT_TITLE.to_string(),
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
