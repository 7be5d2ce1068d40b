mod backend;
mod reports;
mod scenarios;
mod tester;
mod util;

use anyhow::{Result, bail};
use catalog_core::CatalogKind;
use clap::Parser;
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use scenarios::list_scenarios;
use tester::{CatalogTester, ScenarioResult, Target};
use util::{OutputTarget, split_csv};

#[derive(Debug, Parser)]
#[command(name = "catalog-tester", version = "0.1.0")]
#[command(about = "Automated QA scenarios for the books, games and movies catalog")]
struct Args {
    /// Where requests go: bundled sample data or a live API
    #[arg(long, value_enum, default_value_t = Target::Memory)]
    target: Target,

    /// API origin for the http target
    #[arg(long, default_value = "http://localhost:5000")]
    base_url: String,

    /// Catalog kinds to exercise (comma-separated, or "all")
    #[arg(long, default_value = "all")]
    kinds: String,

    /// Scenarios to run (comma-separated, or "all")
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Per-request timeout in seconds for the http target
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner(&args);

    let start_time = Instant::now();
    let scenarios = expand_scenarios(&args.scenarios)?;
    let kinds = parse_kinds(&args.kinds)?;
    let tester = CatalogTester::new(
        args.target,
        args.base_url.clone(),
        Duration::from_secs(args.timeout),
        args.verbose,
    );

    let mut results = Vec::with_capacity(scenarios.len() * kinds.len());
    for scenario in &scenarios {
        if args.verbose {
            println!("🧪 {}", scenario.bold());
        }
        for kind in &kinds {
            results.push(tester.run_scenario(scenario, *kind).await);
        }
    }

    write_reports(&args, &results, start_time)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target, "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target, "  {key:25} - {description}")?;
    }
    output_target.flush()?;
    Ok(true)
}

fn announce_banner(args: &Args) {
    println!("{}", "📚 Catalog Automated Tester".bright_cyan().bold());
    println!("{}", "===========================".cyan());
    match args.target {
        Target::Memory => println!("Target: bundled sample catalog"),
        Target::Http => println!("Target: {}", args.base_url),
    }
}

fn expand_scenarios(scenarios_arg: &str) -> Result<Vec<String>> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        for (key, _) in list_scenarios() {
            if !scenarios.iter().any(|s| s == key) {
                scenarios.push(key.to_string());
            }
        }
    }
    let known: Vec<&str> = list_scenarios().into_iter().map(|(key, _)| key).collect();
    if let Some(unknown) = scenarios.iter().find(|s| !known.contains(&s.as_str())) {
        bail!("unknown scenario '{unknown}' (try --list-scenarios)");
    }
    if scenarios.is_empty() {
        bail!("no scenarios selected");
    }
    Ok(scenarios)
}

fn parse_kinds(kinds_arg: &str) -> Result<Vec<CatalogKind>> {
    let tokens = split_csv(kinds_arg);
    if tokens.iter().any(|t| t == "all") {
        return Ok(CatalogKind::ALL.to_vec());
    }
    let mut kinds = Vec::with_capacity(tokens.len());
    for token in tokens {
        let kind: CatalogKind = token.parse()?;
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }
    if kinds.is_empty() {
        bail!("no catalog kinds selected");
    }
    Ok(kinds)
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;
    match args.report.as_str() {
        "json" => reports::generate_json_report(&mut output_target, results)?,
        "markdown" => reports::generate_markdown_report(&mut output_target, results)?,
        _ => {
            reports::generate_console_report(&mut output_target, results, start_time.elapsed())?;
            writeln!(output_target)?;
            writeln!(output_target, "🏁 Total time: {:?}", start_time.elapsed())?;
        }
    }
    output_target.flush()?;
    Ok(())
}
