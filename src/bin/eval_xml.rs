use anyhow::Context as _;
use clap::Parser;
use markup_arith::samples::SAMPLE_DOCUMENTS;
use markup_arith::traits::JsonSerDe;
use markup_arith::{Evaluator, EvaluatorConfig};
use std::fs::{File, read_to_string};
use std::io::BufReader;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Evaluate arithmetic expressions written as nested XML elements.
#[derive(Parser, Debug)]
#[command(name = "eval-xml", version)]
struct Cli {
    /// JSON file with evaluator settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Documents to evaluate. Without any, the built-in sample documents are used.
    files: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => {
            let json = read_to_string(path)
                .with_context(|| format!("Unable to read config `{}`", path.display()))?;
            EvaluatorConfig::from_json_str(&json)
                .map_err(|e| anyhow::anyhow!("Invalid config `{}`: {e}", path.display()))?
        }
        None => EvaluatorConfig::default(),
    };

    let mut evaluator = Evaluator::new(config);
    if cli.files.is_empty() {
        for sample in &SAMPLE_DOCUMENTS {
            match evaluator.evaluate_str(sample.document) {
                Ok(evaluation) => println!("{}: {}", sample.name, evaluation.value),
                Err(e) => println!("{}: error: {e}", sample.name),
            }
        }
        return Ok(());
    }

    for path in &cli.files {
        let file =
            File::open(path).with_context(|| format!("Unable to open `{}`", path.display()))?;
        match evaluator.evaluate_reader(BufReader::new(file)) {
            Ok(evaluation) => {
                for warning in &evaluation.warnings {
                    eprintln!("{}: warning: {warning}", path.display());
                }
                println!("{}: {}", path.display(), evaluation.value);
            }
            Err(e) => println!("{}: error: {e}", path.display()),
        }
    }
    Ok(())
}
