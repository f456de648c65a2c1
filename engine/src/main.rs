//! tacos-calc - TACoS / ACoS / organic sales calculator
//!
//! Usage: tacos-calc [--config FILE] [--json] <COMMAND>
//!
//! Commands:
//!   calc         Evaluate one set of inputs
//!   batch        Evaluate every row of a CSV file
//!   sanitize     Show how a typed value is cleaned up
//!   interactive  Line-based calculator session

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use engine::config::{EngineSettings, OutputFormat};
use engine::services::report::{batch_text_report, text_report};
use engine::services::CalculatorService;
use engine::state::CalculatorSession;
use engine::{Evaluation, InputField, RawInputs};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Exit code for inputs that failed validation.
const EXIT_INVALID_INPUT: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "tacos-calc")]
#[command(version, about = "Calculate TACoS, ACoS and organic sales", long_about = None)]
struct Cli {
    /// JSON settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate one set of inputs
    Calc {
        /// Total ad spend
        #[arg(long, allow_hyphen_values = true)]
        ad_spend: String,

        /// Sales attributed to ads
        #[arg(long, allow_hyphen_values = true)]
        ad_sales: String,

        /// All sales, ad-attributed and organic
        #[arg(long, allow_hyphen_values = true)]
        total_sales: String,
    },

    /// Evaluate every row of a CSV file (columns: Label, Ad Spend, Ad Sales, Total Sales)
    Batch {
        /// CSV file to read
        file: PathBuf,

        /// Field delimiter, overrides the settings file
        #[arg(short, long)]
        delimiter: Option<String>,
    },

    /// Show how a typed value is cleaned up before evaluation
    Sanitize {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Line-based calculator session (spend/sales/total <value>, calc, show, clear, quit)
    Interactive,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut settings = EngineSettings::load(cli.config.as_deref())
        .with_context(|| format!("Failed to load settings from {:?}", cli.config))?;
    if cli.json {
        settings.output = OutputFormat::Json;
    }

    init_tracing(&settings.log_level);
    info!(?settings, "Starting tacos-calc");

    match cli.command {
        Commands::Calc { ad_spend, ad_sales, total_sales } => {
            let service = CalculatorService::new(settings);
            let evaluation = service.calculate(&RawInputs::new(ad_spend, ad_sales, total_sales));
            print_evaluation(&evaluation, service.settings().output)?;
            Ok(exit_code_for(&evaluation))
        }
        Commands::Batch { file, delimiter } => {
            if let Some(delimiter) = delimiter {
                settings.csv_delimiter = delimiter;
            }
            let service = CalculatorService::new(settings);
            let rows = service.batch(&file)?;
            match service.settings().output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
                OutputFormat::Text => print!("{}", batch_text_report(&rows)),
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Sanitize { text } => {
            let service = CalculatorService::new(settings);
            println!("{}", service.sanitize(&text));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Interactive => {
            let output = settings.output;
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_interactive(stdin.lock(), stdout.lock(), output)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing(default_level: &str) {
    // RUST_LOG wins over the settings file; logs go to stderr so stdout stays parseable
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_evaluation(evaluation: &Evaluation, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(evaluation)?),
        OutputFormat::Text => match evaluation {
            Evaluation::Ok { .. } => print!("{}", text_report(evaluation)),
            Evaluation::Error { .. } => eprint!("{}", text_report(evaluation)),
        },
    }
    Ok(())
}

fn exit_code_for(evaluation: &Evaluation) -> ExitCode {
    if evaluation.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_INVALID_INPUT)
    }
}

fn parse_field_command(command: &str) -> Option<InputField> {
    match command {
        "spend" => Some(InputField::AdSpend),
        "sales" => Some(InputField::AdSales),
        "total" => Some(InputField::TotalSales),
        _ => None,
    }
}

fn run_interactive<R: BufRead, W: Write>(input: R, mut out: W, output: OutputFormat) -> Result<()> {
    let mut session = CalculatorSession::new();
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

        if let Some(field) = parse_field_command(command) {
            let stored = session.edit(field, rest).to_string();
            writeln!(out, "{} {}", field.label(), stored)?;
            if let Some(hint) = session.hint() {
                writeln!(out, "hint: {}", hint)?;
            }
            continue;
        }

        match command {
            "" => {}
            "calc" => {
                let evaluation = session.calculate();
                match output {
                    OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(evaluation)?)?,
                    OutputFormat::Text => write!(out, "{}", text_report(evaluation))?,
                }
            }
            "show" => {
                for field in InputField::ALL {
                    writeln!(out, "{} {}", field.label(), session.field(field))?;
                }
                writeln!(out, "state: {:?}", session.phase())?;
            }
            "clear" => {
                session.clear();
                writeln!(out, "cleared")?;
            }
            "quit" | "exit" => break,
            other => writeln!(out, "unknown command: {}", other)?,
        }
    }
    Ok(())
}
