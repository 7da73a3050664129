//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "blackjack",
    version,
    about = "Console blackjack: up to seven players against the house"
)]
pub struct BlackjackCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play an interactive session at the table
    Play {
        /// Seed for the shuffle; overrides BLACKJACK_SEED and the config file
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Display the resolved configuration and where each value came from
    Cfg,
}
