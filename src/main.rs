use std::path::PathBuf;

use clap::{Parser, Subcommand};

use kira_viabilityqc::input::{InputLayout, load_readings};
use kira_viabilityqc::logging::init_logging;
use kira_viabilityqc::model::params::ViabilityParams;
use kira_viabilityqc::pipeline::run_viability;
use kira_viabilityqc::pipeline::stage4_report::{Stage4Input, write_reports};
use kira_viabilityqc::report::text::render_report_text;

#[derive(Debug, Parser)]
#[command(name = "kira-viabilityqc", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute per-treatment viability from an OD450 table.
    Run(RunArgs),
}

#[derive(Debug, Clone, clap::Args)]
struct RunArgs {
    /// CSV, TSV or JSON table (optionally .gz), or an xlsx/xls/ods workbook.
    #[arg(long)]
    input: PathBuf,
    /// Output directory for viability.tsv, summary.json and report.txt.
    #[arg(long)]
    out: PathBuf,
    #[arg(long, value_enum, default_value_t = InputLayout::Auto)]
    layout: InputLayout,
    /// Trim min/max replicate when sd exceeds this fraction of the mean.
    #[arg(long, default_value_t = 0.2)]
    outlier_ratio: f64,
    #[arg(long, default_value = "Blank")]
    blank_label: String,
    #[arg(long, default_value = "Control")]
    control_label: String,
    /// Also print the text report to stdout.
    #[arg(long)]
    stdout: bool,
    #[arg(short, long)]
    verbose: bool,
}

impl RunArgs {
    fn params(&self) -> Result<ViabilityParams, String> {
        if !self.outlier_ratio.is_finite() || self.outlier_ratio < 0.0 {
            return Err(format!(
                "invalid --outlier-ratio {} (must be a non-negative number)",
                self.outlier_ratio
            ));
        }
        let blank_label = self.blank_label.trim();
        let control_label = self.control_label.trim();
        if blank_label.is_empty() || control_label.is_empty() {
            return Err("--blank-label and --control-label must not be empty".to_string());
        }
        if blank_label == control_label {
            return Err(format!(
                "--blank-label and --control-label must differ (both are {blank_label:?})"
            ));
        }
        Ok(ViabilityParams {
            blank_label: blank_label.to_string(),
            control_label: control_label.to_string(),
            outlier_ratio: self.outlier_ratio,
        })
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Run(args) => run_command(&args),
    }
}

fn run_command(args: &RunArgs) -> Result<(), String> {
    init_logging(args.verbose);
    let params = args.params()?;

    let table = load_readings(&args.input, args.layout).map_err(|e| e.to_string())?;
    let report = run_viability(&table.readings, &params).map_err(|e| e.to_string())?;
    tracing::info!(
        treatments = report.results.len(),
        dropped = report.n_dropped,
        "viability computed"
    );

    let input_path = args.input.display().to_string();
    let stage4 = Stage4Input {
        report: &report,
        params: &params,
        input_path: input_path.clone(),
        layout: table.layout.as_str().to_string(),
    };
    write_reports(&stage4, &args.out).map_err(|e| e.to_string())?;

    if args.stdout {
        print!("{}", render_report_text(&report, &input_path));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
