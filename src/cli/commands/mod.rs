use std::path::PathBuf;

use clap::Subcommand;

pub mod decode;
pub mod encode;
pub mod preview;
pub mod validate;

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a raw dialogue string into its structured lines
    Decode {
        /// Raw dialogue string to decode
        #[arg(short, long, conflicts_with = "source")]
        text: Option<String>,

        /// File containing the raw dialogue string
        #[arg(short, long, conflicts_with = "text")]
        source: Option<PathBuf>,

        /// Emit the decoded document as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Encode a JSON dialogue document into a raw dialogue string
    Encode {
        /// Source document (JSON)
        #[arg(short, long)]
        source: PathBuf,

        /// Destination file (prints to stdout if omitted)
        #[arg(short, long)]
        destination: Option<PathBuf>,
    },

    /// Step through a dialogue the way the game engine would
    Preview {
        /// Source document (JSON)
        #[arg(short, long)]
        source: PathBuf,
    },

    /// Validate a JSON dialogue document's structure
    Validate {
        /// Source document (JSON)
        #[arg(short, long)]
        source: PathBuf,

        /// Only set the exit code, don't print violations
        #[arg(short, long)]
        quiet: bool,
    },
}

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Decode { text, source, json } => {
                decode::execute(text.as_deref(), source.as_deref(), *json)
            }
            Commands::Encode {
                source,
                destination,
            } => encode::execute(source, destination.as_deref()),
            Commands::Preview { source } => preview::execute(source),
            Commands::Validate { source, quiet } => validate::execute(source, *quiet),
        }
    }
}
