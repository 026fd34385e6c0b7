use crate::exit_code::ExitCode;
use crate::{OutputFormat, OutputOptions};
use anyhow::{Context, Result};
use colored::Colorize;
use graphql_style_config::{find_config, load_config, ConfigError};
use graphql_style_hir::{BuildError, SymbolTable};
use graphql_style_linter::{
    escape_data, escape_property, LintDiagnostic, LintSeverity, Linter, Report, StyleConfig,
};
use std::path::Path;

const STDIN_PATH: &str = "-";

pub fn run(
    schema: &Path,
    config_path: Option<&Path>,
    format: OutputFormat,
    max_warnings: Option<usize>,
    output_opts: OutputOptions,
) -> ExitCode {
    let file_name = display_name(schema);

    let result = std::env::current_dir()
        .context("Failed to determine the current directory")
        .and_then(|cwd| lint(schema, config_path, &cwd))
        .and_then(|report| {
            render(&report, &file_name, format, max_warnings, output_opts)?;
            Ok(outcome(&report, max_warnings))
        });

    result.unwrap_or_else(|err| {
        let exit_code = ExitCode::for_error(&err);
        report_failure(&err, exit_code, &file_name, format);
        exit_code
    })
}

/// Load config, read and resolve the schema, then run every enabled rule
#[tracing::instrument(skip_all, fields(schema = %schema.display()))]
fn lint(schema: &Path, config_path: Option<&Path>, start_dir: &Path) -> Result<Report> {
    let config = load_style_config(config_path, start_dir)?;
    let source = read_schema(schema)?;
    let table = SymbolTable::from_source(&source, &display_name(schema))?;
    tracing::debug!(types = table.len(), "Schema resolved");
    Ok(Linter::new(config).report(&table))
}

/// An explicit `--config` wins; otherwise the nearest config file, else defaults
fn load_style_config(
    config_path: Option<&Path>,
    start_dir: &Path,
) -> std::result::Result<StyleConfig, ConfigError> {
    if let Some(path) = config_path {
        return load_config(path);
    }
    match find_config(start_dir)? {
        Some(path) => load_config(&path),
        None => {
            tracing::debug!("Using default configuration");
            Ok(StyleConfig::default())
        }
    }
}

fn read_schema(schema: &Path) -> Result<String> {
    if schema.as_os_str() == STDIN_PATH {
        return std::io::read_to_string(std::io::stdin()).context("Failed to read schema from stdin");
    }
    std::fs::read_to_string(schema)
        .with_context(|| format!("Failed to read schema file {}", schema.display()))
}

fn display_name(schema: &Path) -> String {
    if schema.as_os_str() == STDIN_PATH {
        "<stdin>".to_string()
    } else {
        schema.display().to_string()
    }
}

/// Errors fail the run; warnings only when they exceed `max_warnings`
fn outcome(report: &Report, max_warnings: Option<usize>) -> ExitCode {
    if !report.is_pass() || exceeds_max_warnings(report, max_warnings) {
        ExitCode::LintFailure
    } else {
        ExitCode::Success
    }
}

fn exceeds_max_warnings(report: &Report, max_warnings: Option<usize>) -> bool {
    max_warnings.is_some_and(|max| report.warning_count() > max)
}

fn render(
    report: &Report,
    file_name: &str,
    format: OutputFormat,
    max_warnings: Option<usize>,
    output_opts: OutputOptions,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            for diagnostic in report.diagnostics() {
                println!("{}", human_line(diagnostic, file_name));
                if let Some(fix) = &diagnostic.suggested_fix {
                    println!("  {}: {fix}", "fix".dimmed());
                }
            }
            if output_opts.show_info {
                print_summary(report, max_warnings);
            }
        }
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Github => print!("{}", report.to_github(file_name)),
    }
    Ok(())
}

/// A `Report::to_human` line with a `file:line:col:` prefix and colored severity
fn human_line(diagnostic: &LintDiagnostic, file_name: &str) -> String {
    let severity = format!("{}:", diagnostic.severity);
    let severity = match diagnostic.severity {
        LintSeverity::Error => severity.as_str().red().bold(),
        LintSeverity::Warning => severity.as_str().yellow().bold(),
    };
    let position = diagnostic
        .location
        .position
        .map(|p| format!("{file_name}:{}:{}: ", p.line, p.column))
        .unwrap_or_default();

    format!("{position}{severity} {diagnostic}")
}

fn print_summary(report: &Report, max_warnings: Option<usize>) {
    let errors = report.error_count();
    let warnings = report.warning_count();

    if !report.diagnostics().is_empty() {
        println!();
    }

    if errors == 0 && warnings == 0 {
        println!("{}", "✓ No style issues found!".green().bold());
    } else if errors == 0 {
        println!(
            "{}",
            format!("✓ Passed with {warnings} warning(s)").yellow().bold()
        );
    } else if warnings == 0 {
        println!("{}", format!("✗ Found {errors} error(s)").red());
    } else {
        println!(
            "{}",
            format!("✗ Found {errors} error(s) and {warnings} warning(s)").red()
        );
    }

    if let Some(max) = max_warnings.filter(|max| warnings > *max) {
        println!(
            "{}",
            format!("✗ Too many warnings ({warnings}, maximum allowed is {max})").red()
        );
    }
}

fn report_failure(err: &anyhow::Error, exit_code: ExitCode, file_name: &str, format: OutputFormat) {
    let kind = match (exit_code, err.downcast_ref::<BuildError>()) {
        (_, Some(build_error)) => build_error.code(),
        (ExitCode::ConfigError, None) => "config_error",
        _ => "io_error",
    };

    match format {
        OutputFormat::Human => {
            let label = match exit_code {
                ExitCode::ConfigError => "Invalid configuration:",
                ExitCode::SchemaError => "Schema could not be analyzed:",
                _ => "Failed to read input:",
            };
            eprintln!("{} {err:#}", format!("✗ {label}").red());
        }
        OutputFormat::Json => {
            eprintln!(
                "{}",
                serde_json::json!({
                    "error": format!("{err:#}"),
                    "kind": kind,
                    "exitCode": exit_code.code(),
                })
            );
        }
        OutputFormat::Github => eprintln!("{}", github_failure(err, file_name)),
    }
}

fn github_failure(err: &anyhow::Error, file_name: &str) -> String {
    format!(
        "::error file={}::{}",
        escape_property(file_name),
        escape_data(&format!("{err:#}"))
    )
}
