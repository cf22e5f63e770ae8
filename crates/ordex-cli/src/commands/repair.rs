//! Repair command - run the item code repairer on raw tokens.

use clap::Args;

use ordex_core::SuffixRepairer;

use super::load_config;

/// Arguments for the repair command.
#[derive(Args)]
pub struct RepairArgs {
    /// Raw item code tokens, e.g. "TCD029-20PKT/BAGTRENDCELL"
    #[arg(required = true)]
    tokens: Vec<String>,
}

pub async fn run(args: RepairArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let repairer = SuffixRepairer::from_config(&config.extraction);

    for token in &args.tokens {
        println!("{} -> {}", token, repairer.repair(token));
    }

    Ok(())
}
