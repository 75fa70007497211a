mod report;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use subsum_core::{Token, parse_token, solve};

use report::Report;

#[derive(Parser)]
#[command(name = "subsum", about = "Exhaustive subset-sum search over symbolic tokens")]
struct Cli {
    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    /// Emit results as JSON instead of the human report
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a token pool for a single target
    Solve {
        /// Target token: a plain number, exp(BASE,EXPONENT), or log(BASE,ARGUMENT)
        #[arg(long, allow_hyphen_values = true)]
        target: String,

        /// Pool tokens, same syntax as the target
        #[arg(required = true, allow_hyphen_values = true)]
        tokens: Vec<String>,
    },

    /// Run every target in a JSON problem file against its token pool
    Run {
        /// Problem file: {"tokens": [...], "targets": [...]}
        path: PathBuf,
    },

    /// Run the built-in sample pool and targets
    Demo,
}

/// On-disk problem description; token syntax matches the CLI arguments.
#[derive(Deserialize)]
struct ProblemFile {
    tokens: Vec<String>,
    targets: Vec<String>,
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Solve { target, tokens } => cmd_solve(&cli, target, tokens),
        Commands::Run { path } => cmd_run(&cli, path),
        Commands::Demo => cmd_demo(&cli),
    }
}

fn parse_pool(texts: &[String]) -> Result<Vec<Token>> {
    texts
        .iter()
        .map(|text| parse_token(text).with_context(|| format!("bad token '{text}'")))
        .collect()
}

fn search(pool: &[Token], target: Token) -> Result<Report> {
    let start = Instant::now();
    let results =
        solve(pool, target).with_context(|| format!("search failed for target {target}"))?;
    Ok(Report::new(target, &results, start.elapsed()))
}

fn emit(cli: &Cli, reports: &[Report]) -> Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(reports)?);
        return Ok(());
    }
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            println!();
        }
        report.print();
    }
    Ok(())
}

fn cmd_solve(cli: &Cli, target: &str, tokens: &[String]) -> Result<()> {
    let target = parse_token(target).with_context(|| format!("bad target '{target}'"))?;
    let pool = parse_pool(tokens)?;
    let report = search(&pool, target)?;
    emit(cli, std::slice::from_ref(&report))
}

fn cmd_run(cli: &Cli, path: &Path) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let problem: ProblemFile =
        serde_json::from_str(&content).context("invalid problem file")?;
    tracing::debug!(
        tokens = problem.tokens.len(),
        targets = problem.targets.len(),
        "loaded problem file"
    );

    let pool = parse_pool(&problem.tokens)?;
    let targets = parse_pool(&problem.targets)?;

    let mut reports = Vec::with_capacity(targets.len());
    for target in targets {
        reports.push(search(&pool, target)?);
    }
    emit(cli, &reports)
}

/// The classic sample set: plain numbers alongside base-10 and base-2
/// logarithms that evaluate to the same values, searched for 6 in each
/// token category.
fn cmd_demo(cli: &Cli) -> Result<()> {
    let pool = [
        Token::Number(3.0),
        Token::Number(3.0),
        Token::Number(2.0),
        Token::Number(1.0),
        Token::Log { base: 10.0, argument: 1000.0 },
        Token::Log { base: 10.0, argument: 100.0 },
        Token::Log { base: 10.0, argument: 10.0 },
        Token::Log { base: 2.0, argument: 8.0 },
        Token::Log { base: 2.0, argument: 4.0 },
        Token::Log { base: 2.0, argument: 2.0 },
    ];
    let targets = [
        Token::Number(6.0),
        Token::Log { base: 10.0, argument: 1_000_000.0 },
        Token::Log { base: 2.0, argument: 64.0 },
    ];

    let mut reports = Vec::with_capacity(targets.len());
    for target in targets {
        reports.push(search(&pool, target)?);
    }
    emit(cli, &reports)
}
