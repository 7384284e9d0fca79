use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::report::json::write_risk_table;
use crate::report::text::render_risk_table;

#[derive(Args, Debug)]
pub struct TableArgs {
    /// Output directory for risk_table.json; prints TSV to stdout when absent
    #[arg(long)]
    out: Option<PathBuf>,
}

pub fn handle(args: TableArgs) -> anyhow::Result<()> {
    match args.out {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            write_risk_table(&dir)?;
            info!(out = %dir.display(), "risk table written");
        }
        None => print!("{}", render_risk_table()),
    }
    Ok(())
}
