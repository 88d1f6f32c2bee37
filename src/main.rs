use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{
    ArgAction,
    Parser,
    ValueEnum
};
use tracing::Level;

use compquad::configuration::Configuration;
use compquad::report::jsonreportsink::JsonReportSink;
use compquad::report::reportsink::ReportSink;
use compquad::report::textreportsink::TextReportSink;

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
enum ReportFormat {
    #[default]
    Text,
    Json
}

#[derive(Debug, Parser)]
#[command(
    name = "compquad",
    about = "Compare composite quadrature rules against a closed-form integral",
    version
)]
struct Cli {
    /// Scenario file (JSON); default: the x·e^(−x) reference scenario
    #[arg(long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(long = "format", value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Evaluate the rules of each scenario in parallel
    #[arg(long = "parallel", action = ArgAction::SetTrue)]
    parallel: bool,

    /// Log verbosity on stderr (error, warn, info, debug, trace)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: Level
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let configuration = match &cli.config {
        Some(path) => Configuration::from_file(path)
            .with_context(|| format!("loading scenarios from {}", path.display()))?,
        None => Configuration::reference()
    };
    if configuration.scenarios().is_empty() {
        anyhow::bail!("configuration contains no scenarios");
    }

    let stdout = io::stdout();
    let mut sink: Box<dyn ReportSink> = match cli.format {
        ReportFormat::Text => Box::new(TextReportSink::new(stdout)),
        ReportFormat::Json => Box::new(JsonReportSink::new(stdout))
    };

    for scenario in configuration.scenarios() {
        let report = scenario
            .run(cli.parallel)
            .with_context(|| format!("scenario '{}' failed", scenario.name()))?;
        sink.write_report(&report)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
