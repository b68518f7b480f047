//! Command-line interface for ttt.

use clap::{Parser, Subcommand};

/// Tic-tac-toe with rewind and branching
#[derive(Parser, Debug)]
#[command(name = "ttt")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to the TOML configuration file
        #[arg(short, long, default_value = "ttt.toml")]
        config: std::path::PathBuf,

        /// Start with the move list sorted newest first
        #[arg(long)]
        descending: bool,
    },

    /// Apply a sequence of cell indexes (0-8) and print the resulting game
    Replay {
        /// Cells to play in order; rejected moves are skipped
        cells: Vec<usize>,

        /// Step to view after replaying (defaults to the last move)
        #[arg(long)]
        jump: Option<usize>,

        /// Print the move list newest first
        #[arg(long)]
        descending: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from(["ttt", "replay", "0", "4", "8", "--jump", "1"]).unwrap();
        match cli.command {
            Command::Replay {
                cells,
                jump,
                descending,
            } => {
                assert_eq!(cells, vec![0, 4, 8]);
                assert_eq!(jump, Some(1));
                assert!(!descending);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_play_defaults() {
        let cli = Cli::try_parse_from(["ttt", "play"]).unwrap();
        match cli.command {
            Command::Play { config, descending } => {
                assert_eq!(config, std::path::PathBuf::from("ttt.toml"));
                assert!(!descending);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
