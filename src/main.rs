//! # u-tsp CLI
//!
//! Solves Euclidean TSP instances with 2-opt local search and renders
//! tours as SVG.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::Target;
use log::{error, info, LevelFilter};

use u_tsp::constructive::InitialTour;
use u_tsp::io::{read_instance, read_instance_from, result_to_json, write_result};
use u_tsp::local_search::SelectionPolicy;
use u_tsp::render::{render_files, RenderOptions};
use u_tsp::solver::{SolverConfig, TwoOptSolver};
use u_tsp::Result;

/// Command-line interface for u-tsp
#[derive(Parser)]
#[command(name = "u-tsp", version)]
#[command(about = "Euclidean TSP local search with 2-opt")]
#[command(long_about = "Improves a tour over 2D points with 2-opt moves until no move helps:
  u-tsp solve cities.txt                  # first-improvement from input order
  u-tsp solve cities.txt --policy best    # best-improvement passes
  cat cities.txt | u-tsp solve - -o tour.txt
  u-tsp plot cities.txt tour.txt -o tour.svg")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Optimize a tour for an instance
    Solve(SolveArgs),
    /// Render a tour file against an instance as SVG
    Plot(PlotArgs),
}

#[derive(Args)]
struct SolveArgs {
    /// Instance file, or "-" for stdin
    instance: String,

    /// Move selection policy
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,

    /// Initial tour strategy
    #[arg(long, value_enum)]
    init: Option<InitArg>,

    /// Seed for --init random
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Stop after this many accepted moves
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Stop after this many seconds
    #[arg(long, value_name = "SECS")]
    time_limit: Option<f64>,

    /// JSON solver configuration (flags override it)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the full result as JSON
    #[arg(long)]
    json: bool,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct PlotArgs {
    /// Instance file
    instance: PathBuf,

    /// Tour file (only the last line is read)
    tour: PathBuf,

    /// SVG output file
    #[arg(short, long, default_value = "tour.svg")]
    output: PathBuf,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 800.0)]
    height: f64,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    First,
    Best,
}

impl From<PolicyArg> for SelectionPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::First => SelectionPolicy::FirstImprovement,
            PolicyArg::Best => SelectionPolicy::BestImprovement,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum InitArg {
    Identity,
    Nearest,
    Random,
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli.command) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(Target::Stderr)
        .init();
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Solve(args) => solve(args),
        Command::Plot(args) => plot(args),
    }
}

fn solver_config(args: &SolveArgs) -> Result<SolverConfig> {
    let mut config = match &args.config {
        Some(path) => SolverConfig::from_json_file(path)?,
        None => SolverConfig::default(),
    };

    if let Some(policy) = args.policy {
        config.policy = policy.into();
    }
    if let Some(init) = args.init {
        config.initial_tour = match init {
            InitArg::Identity => InitialTour::Identity,
            InitArg::Nearest => InitialTour::NearestNeighbor,
            InitArg::Random => InitialTour::Random { seed: args.seed },
        };
    }
    if let Some(max) = args.max_iterations {
        config.max_iterations = Some(max);
    }
    if let Some(secs) = args.time_limit {
        config.time_limit_secs = Some(secs);
    }

    config.validate()?;
    Ok(config)
}

fn solve(args: SolveArgs) -> Result<()> {
    let config = solver_config(&args)?;

    let points = if args.instance == "-" {
        read_instance_from(io::stdin().lock())?
    } else {
        read_instance(&args.instance)?
    };
    info!("read {} points from {}", points.len(), args.instance);

    let result = TwoOptSolver::new(config).solve(&points);

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    if args.json {
        writeln!(out, "{}", result_to_json(&result)?)?;
    } else {
        write_result(&mut out, &result)?;
    }
    out.flush()?;
    Ok(())
}

fn plot(args: PlotArgs) -> Result<()> {
    let options = RenderOptions {
        width: args.width,
        height: args.height,
        ..RenderOptions::default()
    };
    let svg = render_files(&args.instance, &args.tour, &options)?;
    std::fs::write(&args.output, svg)?;
    info!("wrote {}", args.output.display());
    Ok(())
}
