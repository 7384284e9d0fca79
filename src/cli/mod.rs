use clap::{Parser, Subcommand};

mod evaluate;
mod table;
mod thresholds;

#[derive(Parser, Debug)]
#[command(
    name = "trimarker",
    version,
    about = "Three-biomarker quintile classification and hazard-ratio lookup"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify hsCRP, LDL and Lp(a) readings and report hazard ratios
    Evaluate(evaluate::EvaluateArgs),
    /// Print the quintile band ranges in effect
    Thresholds(thresholds::ThresholdsArgs),
    /// Print or dump the published hazard-ratio table
    Table(table::TableArgs),
}

impl Cli {
    pub fn dispatch(self) -> anyhow::Result<()> {
        match self.command {
            Command::Evaluate(args) => evaluate::handle(args),
            Command::Thresholds(args) => thresholds::handle(args),
            Command::Table(args) => table::handle(args),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/mod.rs"]
mod tests;
