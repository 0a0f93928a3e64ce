//! Time Complexity Analyzer CLI
//!
//! # Usage
//!
//! ```bash
//! # Analyze files (dialect from extension, or forced)
//! cargo run --bin tca -- analyze algo.c sort.py
//! cargo run --bin tca -- analyze --dialect python --format json script.txt
//!
//! # Serve the HTTP endpoint
//! cargo run --bin tca -- serve --addr 127.0.0.1:8000
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use complexity_ir::config::AnalyzerConfig;
use complexity_ir::{process_file, AnalysisReport, ComplexityError, Dialect};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tca")]
#[command(about = "Time Complexity Analyzer - loop-based big-O estimation", long_about = None)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze source files
    Analyze {
        /// Input files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Force a dialect instead of detecting it from the extension
        #[arg(short, long)]
        dialect: Option<Dialect>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Print the complexity even when semantic errors are found
        #[arg(long)]
        allow_semantic_errors: bool,
    },

    /// Run the HTTP endpoint
    Serve {
        /// Bind address (overrides the config file)
        #[arg(short, long)]
        addr: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.log_filter);

    let result = match cli.command {
        Commands::Analyze {
            files,
            dialect,
            format,
            allow_semantic_errors,
        } => {
            let fail_on_errors = config.fail_on_semantic_errors && !allow_semantic_errors;
            analyze(&files, dialect, format, fail_on_errors, &config)
        }
        Commands::Serve { addr } => serve(addr, config),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&Path>) -> complexity_ir::Result<AnalyzerConfig> {
    match path {
        Some(path) => Ok(AnalyzerConfig::from_yaml(path)?),
        None => Ok(AnalyzerConfig::default()),
    }
}

/// `RUST_LOG` wins over the configured filter. Logs go to stderr so stdout
/// carries only results.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn analyze(
    files: &[PathBuf],
    dialect: Option<Dialect>,
    format: OutputFormat,
    fail_on_errors: bool,
    config: &AnalyzerConfig,
) -> complexity_ir::Result<ExitCode> {
    // Ordered collect keeps argument order
    let results: Vec<complexity_ir::Result<AnalysisReport>> = files
        .par_iter()
        .map(|path| process_file(path, dialect, config.default_dialect))
        .collect();

    let multiple = files.len() > 1;
    let mut failures: Vec<ComplexityError> = Vec::new();
    let mut reports: Vec<AnalysisReport> = Vec::with_capacity(results.len());

    for (path, result) in files.iter().zip(results) {
        let report = match result {
            Ok(report) => report,
            Err(e) => {
                eprintln!("Error: {}: {}", path.display(), e);
                failures.push(e);
                continue;
            }
        };

        if report.has_errors() && fail_on_errors {
            failures.push(ComplexityError::Semantic {
                source_name: path.display().to_string(),
                count: report.errors.len(),
            });
        }

        if format == OutputFormat::Text {
            let prefix = if multiple {
                format!("{}: ", path.display())
            } else {
                String::new()
            };
            for err in &report.errors {
                println!("{}Semantic error: {}", prefix, err);
            }
            if !(report.has_errors() && fail_on_errors) {
                println!("{}{}", prefix, report.complexity);
            }
        }
        reports.push(report);
    }

    if format == OutputFormat::Json {
        let json = if multiple {
            serde_json::to_string_pretty(&reports)
        } else {
            match reports.first() {
                Some(report) => serde_json::to_string_pretty(report),
                None => Ok("null".to_string()),
            }
        };
        match json {
            Ok(text) => println!("{}", text),
            Err(e) => return Err(std::io::Error::from(e).into()),
        }
    }

    for failure in &failures {
        if let ComplexityError::Semantic { .. } = failure {
            tracing::warn!("{}", failure);
        }
    }

    Ok(if failures.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn serve(addr: Option<String>, mut config: AnalyzerConfig) -> complexity_ir::Result<ExitCode> {
    if let Some(addr) = addr {
        config.server.addr = addr;
    }
    config.validate()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(complexity_ir::server::serve(config))?;
    Ok(ExitCode::SUCCESS)
}
