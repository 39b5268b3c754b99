use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};

use harvest_stats::labels::scan_labels;
use harvest_stats::report::CorrelationReport;
use harvest_stats::suggest::suggest;
use harvest_stats::{HarvestError, LoadOptions, MatchPolicy, DEFAULT_HARVEST_DIR};

const USAGE: &str = "Usage: correlation CROP1 CROP2\n\
See the available crops with 'list-crops'.";

#[derive(Parser, Debug)]
#[command(name = "correlation")]
#[command(about = "Compare the weekly harvest of two crops")]
#[command(version)]
struct Cli {
    crop1: String,
    crop2: String,

    /// Directory holding the weekly harvest sheets
    #[arg(long, default_value = DEFAULT_HARVEST_DIR)]
    dir: PathBuf,

    /// How row labels are matched against the crop names
    #[arg(long = "match", value_enum, default_value_t = Policy::Exact)]
    policy: Policy,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    Exact,
    Prefix,
}

impl From<Policy> for MatchPolicy {
    fn from(p: Policy) -> Self {
        match p {
            Policy::Exact => MatchPolicy::Exact,
            Policy::Prefix => MatchPolicy::Prefix,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            log::debug!("argument error: {e}");
            println!("{USAGE}");
            return ExitCode::from(1);
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = LoadOptions {
        match_policy: cli.policy.into(),
    };

    let report = match CorrelationReport::build(&cli.dir, &cli.crop1, &cli.crop2, options) {
        Ok(report) => report,
        Err(HarvestError::NoData { label }) => {
            let hint = did_you_mean(cli);
            anyhow::bail!("no data points for {label}{hint}");
        }
        Err(e) => {
            return Err(e).with_context(|| format!("comparing {} with {}", cli.crop1, cli.crop2));
        }
    };

    match cli.format {
        Format::Text => println!("{report}"),
        Format::Json => println!("{}", report.to_json().context("serializing report")?),
    }
    Ok(())
}

/// Suggest close names for whichever crop does not appear in any sheet.
fn did_you_mean(cli: &Cli) -> String {
    let known = match scan_labels(&cli.dir) {
        Ok(scan) => scan.labels,
        Err(e) => {
            log::debug!("no suggestions: {e}");
            return String::new();
        }
    };

    let mut hints = Vec::new();
    for crop in [&cli.crop1, &cli.crop2] {
        if known.contains(crop) {
            continue;
        }
        let close = suggest(&known, crop, 3);
        if !close.is_empty() {
            hints.push(format!("instead of '{crop}', did you mean: {}?", close.join(", ")));
        }
    }

    hints.iter().map(|h| format!("\n  {h}")).collect()
}
