//! layout-coerce: size and position coercion for slide layouts.
//!
//! Slide boxes are described with loosely typed values: a width may be
//! `100`, `"100"`, `"50%"` or `"auto"`, and an x offset may be a number or
//! missing. This crate turns those values into typed sizes and unevaluated
//! layout expressions, and rejects everything else with a descriptive error.
//!
//! # Modules
//!
//! - [`model`]: Value types ([`model::SizeSpec`], [`model::ExportSize`],
//!   [`model::LayoutExpr`], [`model::NodeId`], [`model::Kind`])
//! - [`parsers`]: The coercion functions themselves
//! - [`validation`]: Whole-box argument validation with structured reports
//! - [`error`]: Error types for layout-coerce operations

pub mod error;
pub mod model;
pub mod parsers;
pub mod validation;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::Value;

pub use error::CoerceError;

/// The layout-coerce CLI application.
#[derive(Parser)]
#[command(name = "layout-coerce")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    /// Output format for results.
    #[arg(
        long,
        global = true,
        value_enum,
        env = "LAYOUT_COERCE_OUTPUT",
        default_value_t = OutputFormat::Text
    )]
    output: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Coerce a size specification (e.g. 100, 12.5%, auto).
    Size(SizeArgs),
    /// Coerce a position offset relative to a parent node.
    Position(PositionArgs),
    /// Check that a value is a boolean.
    CheckBool(CheckBoolArgs),
    /// Validate a JSON object of box arguments.
    #[command(name = "box")]
    Validate(ValidateArgs),
}

/// Arguments for the size subcommand.
#[derive(clap::Args)]
struct SizeArgs {
    /// Size value; JSON literals are decoded, anything else is a string.
    value: String,
}

/// Arguments for the position subcommand.
#[derive(clap::Args)]
struct PositionArgs {
    /// Offset value; JSON literals are decoded, anything else is a string.
    value: String,

    /// Parent node the position is relative to.
    #[arg(long, default_value_t = 0)]
    parent: u32,

    /// Axis of the parent to anchor against.
    #[arg(long, value_enum, default_value_t = AxisArg::X)]
    axis: AxisArg,
}

/// Arguments for the check-bool subcommand.
#[derive(clap::Args)]
struct CheckBoolArgs {
    /// Value to check; JSON literals are decoded, anything else is a string.
    value: String,
}

/// Arguments for the box subcommand.
#[derive(clap::Args)]
struct ValidateArgs {
    /// Box arguments as a JSON object, e.g. '{"x": 10, "width": "50%"}'.
    args: String,

    /// Parent node the box is placed in.
    #[arg(long, default_value_t = 0)]
    parent: u32,

    /// Treat warnings as errors (exit non-zero if any warnings).
    #[arg(long)]
    strict: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AxisArg {
    X,
    Y,
}

/// Run the layout-coerce CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), CoerceError> {
    let cli = Cli::parse();
    let output = cli.output;

    match cli.command {
        Some(Commands::Size(args)) => run_size(args, output),
        Some(Commands::Position(args)) => run_position(args, output),
        Some(Commands::CheckBool(args)) => run_check_bool(args, output),
        Some(Commands::Validate(args)) => run_validate(args, output),
        None => {
            println!("layout-coerce {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Size and position coercion for slide layouts.");
            println!();
            println!("Run 'layout-coerce --help' for usage information.");
            Ok(())
        }
    }
}

/// Decodes a command-line value: JSON literals (`12`, `null`, `true`,
/// `"text"`) are decoded, anything else is taken as a bare string.
fn parse_cli_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CoerceError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_size(args: SizeArgs, output: OutputFormat) -> Result<(), CoerceError> {
    let value = parse_cli_value(&args.value);
    tracing::debug!(%value, "coercing size");
    let size = parsers::parse_size_value(&value)?;

    match output {
        OutputFormat::Json => print_json(&size),
        OutputFormat::Text => {
            println!("{}", size);
            Ok(())
        }
    }
}

fn run_position(args: PositionArgs, output: OutputFormat) -> Result<(), CoerceError> {
    let value = parse_cli_value(&args.value);
    let parent = model::NodeId::new(args.parent);
    tracing::debug!(%value, %parent, "coercing position");
    let position = parsers::parse_position(parent, &value, args.axis == AxisArg::X)?;

    match output {
        OutputFormat::Json => print_json(&position),
        OutputFormat::Text => {
            match position {
                Some(expr) => println!("{}", expr),
                None => println!("none"),
            }
            Ok(())
        }
    }
}

fn run_check_bool(args: CheckBoolArgs, output: OutputFormat) -> Result<(), CoerceError> {
    let value = parse_cli_value(&args.value);
    let flag = parsers::check_type_bool(&value)?;

    match output {
        OutputFormat::Json => print_json(&flag),
        OutputFormat::Text => {
            println!("{}", flag);
            Ok(())
        }
    }
}

/// Execute the box subcommand.
fn run_validate(args: ValidateArgs, output: OutputFormat) -> Result<(), CoerceError> {
    let map = match serde_json::from_str::<Value>(&args.args) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            return Err(CoerceError::InvalidArguments(format!(
                "expected a JSON object, got {}",
                model::Kind::of(&other)
            )));
        }
        Err(err) => return Err(CoerceError::InvalidArguments(err.to_string())),
    };

    let (geometry, report) =
        validation::validate_box_args(model::NodeId::new(args.parent), &map);

    match output {
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct BoxOutput<'a> {
                error_count: usize,
                warning_count: usize,
                geometry: &'a validation::BoxGeometry,
                issues: &'a [validation::ValidationIssue],
            }
            print_json(&BoxOutput {
                error_count: report.error_count(),
                warning_count: report.warning_count(),
                geometry: &geometry,
                issues: &report.issues,
            })?;
        }
        OutputFormat::Text => {
            print!("{}", report);
        }
    }

    // Determine exit status
    let has_errors = report.error_count() > 0;
    let has_warnings = report.warning_count() > 0;

    if has_errors || (args.strict && has_warnings) {
        Err(CoerceError::ValidationFailed {
            error_count: report.error_count(),
            warning_count: report.warning_count(),
            report,
        })
    } else {
        Ok(())
    }
}
