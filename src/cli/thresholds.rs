use std::path::PathBuf;

use clap::Args;

use crate::config::load_config_or_default;
use crate::report::text::render_thresholds;

#[derive(Args, Debug)]
pub struct ThresholdsArgs {
    /// Optional TOML config overriding thresholds and units
    #[arg(long)]
    config: Option<PathBuf>,
}

pub fn handle(args: ThresholdsArgs) -> anyhow::Result<()> {
    let config = load_config_or_default(args.config.as_deref())?;
    print!("{}", render_thresholds(&config));
    Ok(())
}
