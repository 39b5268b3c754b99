use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use harvest_stats::labels::scan_labels;
use harvest_stats::suggest::suggest;
use harvest_stats::DEFAULT_HARVEST_DIR;

#[derive(Parser, Debug)]
#[command(name = "list-crops")]
#[command(about = "List every crop named in the weekly harvest sheets")]
#[command(version)]
struct Cli {
    /// Directory holding the weekly harvest sheets
    #[arg(long, default_value = DEFAULT_HARVEST_DIR)]
    dir: PathBuf,

    /// Only print the crops that best match this name
    #[arg(long)]
    like: Option<String>,

    /// Number of matches printed with --like
    #[arg(long, default_value_t = 5)]
    limit: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let scan = scan_labels(&cli.dir)
        .with_context(|| format!("scanning {}", cli.dir.display()))?;

    for diag in &scan.diagnostics {
        eprintln!("{diag}");
    }

    match cli.like.as_deref() {
        Some(query) => {
            for crop in suggest(&scan.labels, query, cli.limit) {
                println!("{crop}");
            }
        }
        None => {
            for crop in &scan.labels {
                println!("{crop}");
            }
        }
    }

    Ok(())
}
