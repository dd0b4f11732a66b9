//! Command-line interface for prac
//! This binary reads `.prac` swim workout files and prints reports, group totals or the parsed model.
//!
//! Usage:
//!   prac summary `<path>` [--group `<G>`] [--combined]   - Print the workout report
//!   prac groups `<path>`                                - List groups with distance and time
//!   prac check `<path>`                                 - Validate a file
//!   prac inspect `<path>`                               - Dump the parsed model as JSON
//!
//! Global options: --config `<file>` layers a TOML file over the defaults,
//! --verbose enables debug logging on stderr.

use clap::{Arg, ArgAction, ArgMatches, Command};
use prac_config::{ConfigError, Loader, PracConfig};
use prac_parser::prac::error::format_source_context;
use prac_parser::prac::intervals::format_duration;
use prac_parser::prac::loader::read_source;
use prac_parser::prac::summary::GroupTotals;
use prac_parser::{parse_str, GroupLabel, ParseError, ParsedPractice, ReportOptions};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

fn build_cli() -> Command {
    let path_arg = || {
        Arg::new("path")
            .help("Path to the .prac file")
            .required(true)
            .index(1)
    };

    Command::new("prac")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing and summarizing .prac swim workouts")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .help("Log parser progress to stderr")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("summary")
                .about("Print the workout report, one section per group")
                .arg(path_arg())
                .arg(
                    Arg::new("group")
                        .long("group")
                        .short('g')
                        .help("Only print the report for this group (e.g. 'B')")
                        .value_parser(|s: &str| s.parse::<GroupLabel>())
                        .conflicts_with("combined"),
                )
                .arg(
                    Arg::new("combined")
                        .long("combined")
                        .help("Print a single report with every variation inline")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("groups")
                .about("List every group with its total distance and time")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("check")
                .about("Validate a file and print its totals")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the parsed workout as JSON")
                .arg(path_arg()),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    init_tracing(matches.get_flag("verbose"));

    let config = load_config(matches.get_one::<String>("config")).unwrap_or_else(|e| {
        eprintln!("Error: invalid configuration: {}", e);
        std::process::exit(1);
    });
    let options = config.report_options();

    match matches.subcommand() {
        Some(("summary", sub)) => handle_summary_command(sub, &options),
        Some(("groups", sub)) => handle_groups_command(sub),
        Some(("check", sub)) => handle_check_command(sub),
        Some(("inspect", sub)) => handle_inspect_command(sub),
        _ => unreachable!("clap requires a subcommand"),
    }
}

/// Log to stderr, honoring `RUST_LOG` unless `--verbose` asks for debug output.
fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .with_env_filter(env_filter)
        .init();
}

fn load_config(path: Option<&String>) -> Result<PracConfig, ConfigError> {
    let mut loader = Loader::new().with_local_file(".");
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    loader.build()
}

/// Read and parse the file named by the `path` argument, exiting on failure.
fn load_practice(matches: &ArgMatches) -> ParsedPractice {
    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    let source = read_source(path).unwrap_or_else(|e| exit_with_error(&e, None));
    parse_str(&source).unwrap_or_else(|e| exit_with_error(&e, Some(&source)))
}

fn exit_with_error(error: &ParseError, source: Option<&str>) -> ! {
    eprintln!("Error: {}", error);
    if let (Some(source), Some(line)) = (source, error.line()) {
        eprintln!();
        eprint!("{}", format_source_context(source, line));
    }
    std::process::exit(1);
}

/// Handle the summary command
fn handle_summary_command(matches: &ArgMatches, options: &ReportOptions) {
    let parsed = load_practice(matches);
    let summary = parsed.summary();

    let report = if let Some(group) = matches.get_one::<GroupLabel>("group") {
        if !summary.get_all_groups().contains(group) {
            tracing::warn!(group = %group, "group not defined in workout, showing primary items");
        }
        summary.format_workout(Some(*group), options)
    } else if matches.get_flag("combined") {
        summary.format_workout(None, options)
    } else {
        summary.render_all(options)
    };
    println!("{}", report);
}

/// Handle the groups command
fn handle_groups_command(matches: &ArgMatches) {
    let parsed = load_practice(matches);
    let symbol = parsed.config.unit_symbol();
    for totals in parsed.summary().group_totals() {
        println!(
            "{}  {}{}  {}",
            totals.group,
            totals.distance,
            symbol,
            format_duration(totals.time)
        );
    }
}

/// Handle the check command
fn handle_check_command(matches: &ArgMatches) {
    let parsed = load_practice(matches);
    let summary = parsed.summary();
    let symbol = parsed.config.unit_symbol();

    let totals = summary
        .group_totals()
        .iter()
        .map(|totals| format!("{} {}{}", totals.group, totals.distance, symbol))
        .collect::<Vec<_>>()
        .join(", ");
    println!(
        "OK: {} sets, {} warnings ({})",
        parsed.sets.len(),
        parsed.warnings.len(),
        totals
    );
}

#[derive(Serialize)]
struct InspectOutput<'a> {
    #[serde(flatten)]
    workout: &'a ParsedPractice,
    group_totals: Vec<GroupTotals>,
}

/// Handle the inspect command
fn handle_inspect_command(matches: &ArgMatches) {
    let parsed = load_practice(matches);
    let output = InspectOutput {
        workout: &parsed,
        group_totals: parsed.summary().group_totals(),
    };
    let json = serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        eprintln!("Error formatting workout: {}", e);
        std::process::exit(1);
    });
    println!("{}", json);
}
