//! wncheck CLI
//!
//! Checks a WordNet-style dataset for missing inverse relations, redundant
//! and looping hypernyms, misfiled or empty synsets and malformed ids.
//! With `--fix`, prints corrective commands for the fixable findings.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use wncheck::config::CheckConfig;
use wncheck::fix::{ChangeRelationScript, FixSerializer, JsonLines};
use wncheck::parse::{self, Dataset};
use wncheck::report::{EXIT_UNFIXABLE, Mode, WriterSink};
use wncheck::validate::{self, IdGrammar};

#[derive(Parser)]
#[command(name = "wncheck")]
#[command(author, version, about = "Consistency checker for WordNet-style lexical databases")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the dataset and report every violation.
    Validate(ValidateArgs),
}

#[derive(Args)]
struct ValidateArgs {
    /// Print corrective commands instead of errors for fixable findings.
    #[arg(long)]
    fix: bool,
    /// Directory with the wn-*.json category units.
    #[arg(long, env = "WNCHECK_DATA")]
    data: Option<PathBuf>,
    /// JSON config file; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Identifier prefix token.
    #[arg(long)]
    prefix: Option<String>,
    /// Command used at the start of each fix line.
    #[arg(long)]
    fix_tool: Option<String>,
    /// Output form of fix operations.
    #[arg(long, value_enum, default_value_t = FixFormat::Script)]
    fix_format: FixFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum FixFormat {
    Script,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Validate(args) => run_validate(args),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_validate(args: ValidateArgs) -> Result<ExitCode> {
    let mut config = match &args.config {
        Some(path) => CheckConfig::load(path)?,
        None => CheckConfig::default(),
    };
    if let Some(data) = args.data {
        config.data_dir = data;
    }
    if let Some(prefix) = args.prefix {
        config.id_prefix = prefix;
    }
    if let Some(tool) = args.fix_tool {
        config.fix_tool = tool;
    }

    let grammar = IdGrammar::new(&config.id_prefix)
        .with_context(|| format!("invalid identifier prefix '{}'", config.id_prefix))?;
    let dataset = parse::load_dir(&config.data_dir)
        .with_context(|| format!("failed to load dataset from {}", config.data_dir.display()))?;

    let mode = if args.fix { Mode::Fix } else { Mode::Report };
    match args.fix_format {
        FixFormat::Script => execute(
            &dataset,
            &grammar,
            mode,
            ChangeRelationScript {
                tool: config.fix_tool,
            },
        ),
        FixFormat::Json => execute(&dataset, &grammar, mode, JsonLines),
    }
}

fn execute<S: FixSerializer>(
    dataset: &Dataset,
    grammar: &IdGrammar,
    mode: Mode,
    serializer: S,
) -> Result<ExitCode> {
    let mut sink = WriterSink::new(BufWriter::new(io::stdout().lock()), serializer);
    let outcome = validate::validate(dataset, grammar, mode, &mut sink);
    let mut out = sink.into_inner();

    match outcome {
        Ok(summary) => {
            summary.write_to(&mut out)?;
            out.flush()?;
            Ok(ExitCode::from(summary.exit_code()))
        }
        Err(e) if e.is_unfixable() => {
            out.flush()?;
            eprintln!("{}", e);
            Ok(ExitCode::from(EXIT_UNFIXABLE))
        }
        Err(e) => Err(e.into()),
    }
}
