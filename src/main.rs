//! MiniFilter lexical analyzer - CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use minifilter::report::{render_error, render_json, render_table};
use minifilter::util::config::{load_config, Config, OutputFormat};
use minifilter::util::logger::{self, LogLevel};
use minifilter::{lex_file, lex_source, Analysis, NAME, VERSION};
use std::path::PathBuf;
use std::process::ExitCode;

/// Tokenize MiniFilter queries into the Program Internal Form
#[derive(Parser, Debug)]
#[command(name = "minifilter")]
#[command(author = "MiniFilter Team")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (defaults to ./minifilter.toml when present)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Output format, overrides the configuration
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Treat `#` up to end of line as a comment
    #[arg(long, global = true)]
    comments: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenize a MiniFilter source file
    Lex {
        /// Source file to tokenize
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Tokenize MiniFilter code given on the command line
    Eval {
        /// Code to tokenize
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Print version information
    Version,
}

fn resolve_config(args: &Args) -> Result<Config> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let mut config = load_config(args.config.as_deref(), &cwd)?;
    if args.comments {
        config.lexer.line_comments = true;
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    Ok(config)
}

/// Print the analysis; `false` if lexing failed
fn emit(
    analysis: &Analysis,
    format: OutputFormat,
) -> Result<bool> {
    match &analysis.result {
        Ok((pif, symbols)) => {
            match format {
                OutputFormat::Table => print!("{}", render_table(pif, symbols)),
                OutputFormat::Json => println!(
                    "{}",
                    render_json(pif, symbols).context("Failed to serialize output")?
                ),
            }
            Ok(true)
        }
        Err(err) => {
            eprint!("{}", render_error(&analysis.source, err));
            Ok(false)
        }
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    logger::init_with_level(LogLevel::from_verbosity(args.verbose));

    let config = resolve_config(&args)?;
    tracing::debug!(?config, "configuration resolved");

    let analysis = match &args.command {
        Commands::Lex { file } => lex_file(file, &config.lexer)
            .with_context(|| format!("Failed to lex: {}", file.display()))?,
        Commands::Eval { code } => lex_source(code.clone(), &config.lexer),
        Commands::Version => {
            println!("{} {}", NAME, VERSION);
            return Ok(ExitCode::SUCCESS);
        }
    };

    if emit(&analysis, config.output.format)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
