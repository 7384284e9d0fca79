use std::path::PathBuf;

use clap::Args;
use tracing::{info, warn};

use crate::config::load_config_or_default;
use crate::model::biomarkers::Readings;
use crate::pipeline::evaluate::evaluate;
use crate::report::Access;
use crate::report::json::to_json;
use crate::report::text::render_report;

#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// hsCRP reading (mg/L unless configured otherwise)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) hscrp: f64,

    /// LDL cholesterol reading (mg/dL)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) ldl: f64,

    /// Lipoprotein(a) reading (mg/dL)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) lpa: f64,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub(crate) format: Format,

    /// Write the report to a file instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,

    /// Optional TOML config overriding thresholds, units and access
    #[arg(long)]
    config: Option<PathBuf>,

    /// Passphrase checked against `[access] passphrase` in the config
    #[arg(long, env = "TRIMARKER_PASSPHRASE", hide_env_values = true)]
    passphrase: Option<String>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

pub fn handle(args: EvaluateArgs) -> anyhow::Result<()> {
    let config = load_config_or_default(args.config.as_deref())?;
    let access = Access::from_passphrase(config.passphrase.as_deref(), args.passphrase.as_deref());
    if !access.is_granted() {
        warn!("passphrase missing or incorrect, hazard ratios withheld");
    }

    let readings = Readings::new(args.hscrp, args.ldl, args.lpa);
    let evaluation = evaluate(&readings, &config.thresholds)?;

    let rendered = match args.format {
        Format::Text => render_report(&evaluation, access, &config),
        Format::Json => to_json(&evaluation, access, &config)?,
    };

    match args.out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, rendered)?;
            info!(path = %path.display(), "report written");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
