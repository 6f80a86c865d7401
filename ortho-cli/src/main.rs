//! Ortho CLI - exact orthonormal inverse-monomial functions

mod format;

use clap::{ArgAction, CommandFactory, Parser, ValueEnum};
use clap_complete::{Shell, generate};
use ortho_core::{
    DEFAULT_NUM_FUNC, DEFAULT_START_INDEX, OrthoConfig, OrthoError, OrthogonalFunctions,
};
use ortho_math::MathError;
use ortho_math::rational::{parse_rational, rat};
use ortho_plot::{PlotError, resolve_output_dir, save_plot};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use format::{
    DESCRIPTION, EXAMPLES, LICENSE_TEXT, RunReport, eprintln_colored, print_coefficients,
    print_functions, print_json, print_orthogonality, print_yaml, println_colored,
};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct CliConfig {
    /// Default number of functions
    #[serde(default)]
    num_func: Option<i64>,
    /// Default start index
    #[serde(default)]
    start_index: Option<i64>,
    /// Default interval end, as rational text
    #[serde(default)]
    end_interval: Option<String>,
    /// Default verbosity level
    #[serde(default)]
    verbosity: Option<String>,
    /// Default output format
    #[serde(default)]
    format: Option<String>,
    /// Enable colors by default
    #[serde(default)]
    color: Option<bool>,
}

impl CliConfig {
    /// Candidate configuration files, in priority order
    fn candidates() -> Vec<PathBuf> {
        let home = dirs::home_dir().map(|mut p| {
            p.push(".orthorc");
            p
        });
        let config = dirs::config_dir().map(|mut p| {
            p.push("ortho");
            p.push("config.yaml");
            p
        });
        home.into_iter().chain(config).collect()
    }

    /// Load configuration from file
    fn load() -> Self {
        for path in Self::candidates() {
            if path.exists()
                && let Ok(contents) = fs::read_to_string(&path)
                && let Ok(config) = serde_yaml::from_str(&contents)
            {
                return config;
            }
        }
        Self::default()
    }

    /// Merge configuration with command-line arguments
    fn merge_with_args(&self, args: &mut Args) {
        // Only apply config if arg is not explicitly set
        if args.num_func.is_none() {
            args.num_func = self.num_func;
        }
        if args.start_func.is_none() {
            args.start_func = self.start_index;
        }
        if args.end_interval.is_none() {
            args.end_interval.clone_from(&self.end_interval);
        }

        if args.verbosity == Verbosity::Normal
            && let Some(ref v) = self.verbosity
        {
            match v.as_str() {
                "quiet" => args.verbosity = Verbosity::Quiet,
                "verbose" => args.verbosity = Verbosity::Verbose,
                "debug" => args.verbosity = Verbosity::Debug,
                "trace" => args.verbosity = Verbosity::Trace,
                _ => {}
            }
        }

        if args.format == OutputFormat::Text
            && let Some(ref f) = self.format
        {
            match f.as_str() {
                "json" => args.format = OutputFormat::Json,
                "yaml" => args.format = OutputFormat::Yaml,
                _ => {}
            }
        }

        if let Some(color) = self.color
            && !color
        {
            args.no_color = true;
        }
    }
}

/// Output format for results
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum OutputFormat {
    /// Human-readable text (default)
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, PartialOrd, Ord)]
enum Verbosity {
    /// Coefficients only
    Quiet,
    /// Functions and coefficients
    Normal,
    /// Also report progress
    Verbose,
    /// Debug output
    Debug,
    /// Trace output
    Trace,
}

/// Exact orthonormal functions of the inverse-monomial family
#[derive(Parser, Debug, Clone)]
#[command(name = "ortho")]
#[command(version)]
#[command(disable_version_flag = true)]
#[command(about = "Generates orthonormal functions t^(1/(i+1)) under the weight 1/t, exactly")]
#[command(after_help = format!("{DESCRIPTION}\n\n{EXAMPLES}"))]
struct Args {
    /// Number of orthogonal functions to generate. Positive integer. [default: 9]
    #[arg(short = 'n', long = "num-func", allow_negative_numbers = true)]
    num_func: Option<i64>,

    /// Starting function index. Non-negative integer. [default: 1]
    #[arg(short = 's', long = "start-func", allow_negative_numbers = true)]
    start_func: Option<i64>,

    /// End L of the interval [0, L]. Rational greater than zero, e.g. 10, 2.5 or 1/3. [default: 1]
    #[arg(
        short = 'e',
        long = "end-interval",
        value_name = "L",
        allow_negative_numbers = true
    )]
    end_interval: Option<String>,

    /// Check the mutual orthonormality of the generated functions
    #[arg(short = 'c', long)]
    check: bool,

    /// Plot the generated functions and save the plot as SVG
    #[arg(short = 'p', long)]
    plot: bool,

    /// Directory for the plot (overrides docs/images and the current directory)
    #[arg(long, value_name = "DIR")]
    plot_dir: Option<PathBuf>,

    /// Print author and license information
    #[arg(short = 'l', long)]
    license: bool,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Verbosity level
    #[arg(long, value_enum, default_value = "normal")]
    verbosity: Verbosity,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

/// Errors that end a run with a non-zero exit code
#[derive(Error, Debug)]
enum CliError {
    /// Invalid or failed orthogonalization
    #[error(transparent)]
    Ortho(#[from] OrthoError),
    /// Unparsable numeric input
    #[error("invalid end of interval: {0}")]
    Input(#[from] MathError),
    /// Plot rendering or saving failed
    #[error("plot failed: {0}")]
    Plot(#[from] PlotError),
    /// Working directory unavailable
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization failed
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML serialization failed
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

fn main() {
    let mut args = Args::parse();

    // Handle completion generation
    if let Some(shell) = args.completions {
        let mut cmd = Args::command();
        let bin_name = cmd.get_name().to_string();
        generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
        return;
    }

    if args.license {
        println!("{LICENSE_TEXT}");
        return;
    }

    // Load configuration file and merge with args
    let config = CliConfig::load();
    config.merge_with_args(&mut args);

    // Set up logging
    if args.verbosity >= Verbosity::Debug {
        let level = match args.verbosity {
            Verbosity::Trace => Level::TRACE,
            Verbosity::Debug => Level::DEBUG,
            _ => Level::INFO,
        };
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .finish();
        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            eprintln_colored(&args, &format!("Failed to set tracing subscriber: {}", e));
            std::process::exit(1);
        }
    }

    match run(&args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln_colored(&args, &format!("Error: {}", e));
            std::process::exit(1);
        }
    }
}

/// Validate the arguments into a configuration
fn build_config(args: &Args) -> Result<OrthoConfig, CliError> {
    let end_interval = match args.end_interval.as_deref() {
        Some(text) => parse_rational(text)?,
        None => rat(1),
    };
    let config = OrthoConfig::from_raw(
        args.num_func.unwrap_or(DEFAULT_NUM_FUNC as i64),
        args.start_func.unwrap_or(DEFAULT_START_INDEX as i64),
        end_interval,
    )?;
    Ok(config)
}

/// Sample the family and save the SVG plot
fn plot(args: &Args, family: &OrthogonalFunctions) -> Result<PathBuf, CliError> {
    let base = std::env::current_dir()?;
    let dir = resolve_output_dir(args.plot_dir.as_deref(), &base)?;
    Ok(save_plot(&family.sample(), &dir)?)
}

/// Compute, print, check and plot; `Ok(false)` when the check fails
fn run(args: &Args) -> Result<bool, CliError> {
    let config = build_config(args)?;
    if args.verbosity >= Verbosity::Verbose {
        println_colored(
            args,
            &format!(
                "Generating {} functions from index {} on [0, {}]",
                config.num_func, config.start_index, config.end_interval
            ),
            Some(owo_colors::AnsiColors::Yellow),
        );
    }

    let family = OrthogonalFunctions::new(config)?;
    let orthogonality = if args.check {
        Some(family.check()?)
    } else {
        None
    };
    let orthonormal = orthogonality.as_ref().is_none_or(|r| r.all_orthonormal);

    match args.format {
        OutputFormat::Text => {
            if args.verbosity > Verbosity::Quiet {
                print_functions(args, family.functions());
            }
            print_coefficients(args, family.coefficients());
            if let Some(ref report) = orthogonality {
                print_orthogonality(args, report);
            }
            if args.plot {
                let path = plot(args, &family)?;
                println_colored(
                    args,
                    &format!("Plot saved to {}", path.display()),
                    Some(owo_colors::AnsiColors::Green),
                );
            }
        }
        OutputFormat::Json | OutputFormat::Yaml => {
            let plotted = args.plot.then(|| plot(args, &family));
            let mut report = RunReport::new(&family);
            report.orthogonality = orthogonality;
            report.plot = match plotted {
                Some(Ok(ref path)) => Some(path.display().to_string()),
                _ => None,
            };
            if args.format == OutputFormat::Json {
                print_json(&report)?;
            } else {
                print_yaml(&report)?;
            }
            // The report is already out; surface the plot failure afterwards.
            if let Some(Err(e)) = plotted {
                return Err(e);
            }
        }
    }

    if !orthonormal {
        eprintln_colored(args, "Error: functions are not mutually orthonormal");
    }
    Ok(orthonormal)
}
