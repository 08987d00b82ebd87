use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::debug;

use shamir_recover::solve_case_file;

/// Recover threshold-shared secrets from JSON case files, printing one
/// decimal secret per file in argument order.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Args {
    /// Case files, one per secret. At least two must be given.
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if args.files.len() < 2 {
        bail!("expected at least two case files, got {}", args.files.len());
    }
    debug!("processing {} case files", args.files.len());

    for path in &args.files {
        let secret = solve_case_file(path)
            .with_context(|| format!("failed to recover secret from {}", path.display()))?;
        println!("{}", secret);
    }
    Ok(())
}
