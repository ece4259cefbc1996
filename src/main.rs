use clap::Parser;
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;

use statreport::config::ReportConfig;
use statreport::dataframe::sample::student_dataset;
use statreport::io;
use statreport::report::build_report;
use statreport::stats::Locale;
use statreport::{DataFrame, Result};

/// Descriptive statistics report for a small numeric dataset
#[derive(Debug, Parser)]
#[command(name = "statreport", version)]
struct Cli {
    /// Dataset as CSV (header row) or JSON (array of records); defaults to the built-in student dataset
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// TOML report configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured locale (en, es)
    #[arg(short, long)]
    locale: Option<Locale>,

    /// Write the report as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write the report as an Excel workbook (requires the `excel` feature)
    #[arg(long)]
    excel: Option<PathBuf>,

    /// Summarize columns in parallel
    #[arg(long)]
    parallel: bool,
}

fn load_dataset(path: Option<&PathBuf>) -> Result<DataFrame> {
    match path {
        Some(p) if p.extension().map_or(false, |e| e.eq_ignore_ascii_case("json")) => io::read_json(p),
        Some(p) => io::read_csv(p),
        None => student_dataset(),
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => ReportConfig::from_file(path)?,
        None => ReportConfig::default(),
    };
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    config.parallel |= cli.parallel;

    let df = load_dataset(cli.data.as_ref())?;
    let report = build_report(&df, &config)?;

    for table in report.tables() {
        println!("{}", table);
    }

    if let Some(path) = &cli.json {
        io::write_report_json(&report, path)?;
    }

    if let Some(path) = &cli.excel {
        write_excel(&report, path)?;
    }

    Ok(())
}

#[cfg(feature = "excel")]
fn write_excel(report: &statreport::Report, path: &PathBuf) -> Result<()> {
    io::write_report_excel(report, path)
}

#[cfg(not(feature = "excel"))]
fn write_excel(_report: &statreport::Report, _path: &PathBuf) -> Result<()> {
    Err(statreport::Error::Excel(
        "built without the `excel` feature".to_string(),
    ))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
