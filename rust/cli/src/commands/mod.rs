//! Command handler modules for the blackjack CLI.
//!
//! Each subcommand lives in its own file and exposes one handler:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) and input (`&mut dyn BufRead`) are passed in
//! - Errors propagate as [`CliError`](crate::error::CliError)

mod cfg;
mod play;

pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
