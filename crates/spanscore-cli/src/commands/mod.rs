mod score;
mod spans;

/// Subcommands for spanscore
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Score predicted answers against gold answers.
    Score(score::ScoreArgs),

    /// Select the best answer span for each passage.
    Spans(spans::SpansArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Score(cmd) => cmd.run(),
            Commands::Spans(cmd) => cmd.run(),
        }
    }
}
