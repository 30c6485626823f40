use anyhow::{Context, Result};
use calc24::solver::constants::DEMO_QUADRUPLES;
use calc24::{Solver, SolverConfig, validate_operands};
use clap::{Parser, ValueEnum};
use log::info;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Calc24 - Combine four numbers into 24
#[derive(Parser, Debug)]
#[command(name = "calc24")]
#[command(
    about = "Find every way to combine four integers with + - * / into the target value"
)]
#[command(version)]
pub struct CliArgs {
    /// Four integers; without them a built-in demonstration set is solved
    #[arg(allow_negative_numbers = true)]
    pub operands: Vec<i64>,

    /// Target value to match
    #[arg(short, long, default_value_t = 24, allow_negative_numbers = true)]
    pub target: i64,

    /// Evaluate candidates on all cores
    #[arg(short, long)]
    pub parallel: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub quadruples: Vec<[i64; 4]>,
    pub solver: SolverConfig,
    pub log_level: LogLevel,
}

/// Turn parsed arguments into a configuration
pub fn build_config(args: CliArgs) -> Result<CliConfig> {
    let quadruples = if args.operands.is_empty() {
        DEMO_QUADRUPLES.to_vec()
    } else {
        vec![validate_operands(&args.operands).context("Invalid operands")?]
    };

    Ok(CliConfig {
        quadruples,
        solver: SolverConfig {
            target: args.target,
            parallel: args.parallel,
        },
        log_level: args.log_level,
    })
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    build_config(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let solver = Solver::new(config.solver);

    for operands in config.quadruples {
        let report = solver.run(operands);
        info!(
            "{:?}: {} solutions, {} duplicate renderings skipped",
            operands,
            report.solutions.len(),
            report.stats.duplicates()
        );
        for solution in &report.solutions {
            println!("{}", solution);
        }
        println!();
    }

    Ok(())
}
