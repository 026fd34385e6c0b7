mod commands;
mod exit_code;

use clap::{Parser, Subcommand};
use exit_code::ExitCode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "graphql-style")]
#[command(about = "Lint GraphQL schemas against naming and shape conventions", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a .graphql-style.yaml or .graphql-style.json file
    ///
    /// When omitted, the nearest config file in the current directory or one
    /// of its parents is used.
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Force colored output even when not a TTY
    #[arg(long, global = true, conflicts_with = "no_color")]
    color: bool,

    /// Disable colored output
    #[arg(long, global = true, conflicts_with = "color")]
    no_color: bool,

    /// Suppress all output except diagnostics and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Output verbosity options
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    /// Whether to show informational output (summaries)
    pub show_info: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint a schema file against the convention rules
    Lint {
        /// Schema file to lint, or `-` to read from stdin
        #[arg(value_name = "SCHEMA")]
        schema: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Fail when more than this many warnings are reported
        #[arg(long, value_name = "N")]
        max_warnings: Option<usize>,
    },

    /// List every rule with its default severity
    Rules {
        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: RulesFormat,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable output with colors
    Human,
    /// JSON output for tooling
    Json,
    /// GitHub Actions workflow commands for PR annotations
    Github,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum RulesFormat {
    /// Human-readable table
    Human,
    /// JSON output for tooling
    Json,
}

fn main() {
    let cli = Cli::parse();

    init_tracing();
    configure_colors(cli.color, cli.no_color);

    let output_opts = OutputOptions {
        show_info: !cli.quiet,
    };

    let exit_code = match cli.command {
        Commands::Lint {
            schema,
            format,
            max_warnings,
        } => commands::lint::run(
            &schema,
            cli.config.as_deref(),
            format,
            max_warnings,
            output_opts,
        ),
        Commands::Rules { format } => commands::rules::run(format),
    };

    exit_code.exit();
}

/// Initialize tracing, filtered by `RUST_LOG` and written to stderr
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Configure colored output based on flags and environment variables.
///
/// Priority order (highest to lowest):
/// 1. `--color` flag (force colors on)
/// 2. `--no-color` flag (force colors off)
/// 3. `NO_COLOR` environment variable (if set to any value, disable colors)
/// 4. `CLICOLOR_FORCE` environment variable (if set to non-zero, force colors)
/// 5. `CLICOLOR` environment variable (if set to "0", disable colors)
/// 6. Default: colors enabled if stdout is a TTY (handled by `colored` crate)
///
/// See: <https://no-color.org/> and <https://bixense.com/clicolors/>
fn configure_colors(force_color: bool, no_color: bool) {
    use colored::control;

    if force_color {
        control::set_override(true);
    } else if no_color || std::env::var_os("NO_COLOR").is_some() {
        control::set_override(false);
    } else if let Ok(val) = std::env::var("CLICOLOR_FORCE") {
        if !val.is_empty() && val != "0" {
            control::set_override(true);
        }
    } else if std::env::var("CLICOLOR").is_ok_and(|val| val == "0") {
        control::set_override(false);
    }
}
