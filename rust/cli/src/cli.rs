use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "baccaroad",
    version,
    about = "Baccarat road map and prediction client"
)]
pub struct BaccaroadCli {
    /// Backend base URL, overrides config file and environment
    #[arg(long, global = true, value_name = "URL")]
    pub server: Option<String>,
    /// Log output format (logs go to stderr)
    #[arg(long, global = true, value_enum, default_value_t = LogOutput::Text)]
    pub log_format: LogOutput,
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show resolved settings and where each value came from
    Cfg,
    /// Baccarat point of a hand (sum of card values mod 10)
    Point {
        /// Card ranks: 1-13 or A, J, Q, K
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
        /// Also show the frequency weight for this side
        #[arg(long, value_enum)]
        side: Option<SideArg>,
    },
    /// Draw the road map
    Road {
        /// Replay a saved history file instead of asking the backend
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Record a round result
    Add {
        /// banker, player or tie
        result: String,
        #[arg(long, num_args = 1..=3, value_delimiter = ',')]
        player: Vec<String>,
        #[arg(long, num_args = 1..=3, value_delimiter = ',')]
        banker: Vec<String>,
    },
    /// Delete every recorded result
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// Start a new shoe
    NewShoe,
    /// Train the prediction model on the recorded history
    Train,
    /// Predict the next round
    Predict {
        #[arg(long, value_enum, default_value_t = PredictMode::Combined)]
        mode: PredictMode,
        #[arg(long, num_args = 1..=3, value_delimiter = ',')]
        player: Vec<String>,
        #[arg(long, num_args = 1..=3, value_delimiter = ',')]
        banker: Vec<String>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SideArg {
    Player,
    Banker,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PredictMode {
    /// AI model and formula together
    Combined,
    /// Formula only, needs two cards per side
    Formula,
    /// AI model only
    Ai,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogOutput {
    Text,
    Json,
}
