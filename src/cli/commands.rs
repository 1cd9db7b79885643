//! CLI command implementations

use anyhow::{bail, Context, Result};
use colored::Colorize;
use serde_json::json;
use std::path::{Path, PathBuf};

use crate::edit;
use crate::matrix::{self, Matrix};
use crate::permutation::{self, PermutationStrategy};
use crate::rotation;
use crate::unique::{self, UniquenessStrategy};

use super::args::{Cli, Commands, ConfigAction};
use super::paths::{config_file_path, PersistentConfig};

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    let config = PersistentConfig::load_from(config_path)?
        .merge_with_cli(None, None, cli.json.then_some(true));
    let json = config.json_output();

    tracing::debug!(command = ?cli.command, json, "executing command");

    match cli.command {
        Commands::OneAway { first, second } => {
            cmd_one_away(first.as_deref(), second.as_deref(), json)
        }
        Commands::Permutation {
            first,
            second,
            strategy,
        } => cmd_permutation(
            first.as_deref(),
            second.as_deref(),
            strategy.unwrap_or_else(|| config.permutation_strategy()),
            json,
        ),
        Commands::Rotation { first, second } => {
            cmd_rotation(first.as_deref(), second.as_deref(), json)
        }
        Commands::Unique { input, strategy } => cmd_unique(
            input.as_deref(),
            strategy.unwrap_or_else(|| config.uniqueness_strategy()),
            json,
        ),
        Commands::ZeroMatrix { matrix, file } => cmd_zero_matrix(matrix, file, json),
        Commands::Config { action } => cmd_config(action, config_path, json),
    }
}

/// One-away command
fn cmd_one_away(first: Option<&str>, second: Option<&str>, json: bool) -> Result<()> {
    let edit = edit::classify(first, second);

    if json {
        return print_json(&json!({
            "check": "one-away",
            "first": first,
            "second": second,
            "result": edit.is_some(),
            "edit": edit,
        }));
    }

    match edit {
        Some(edit) => println!(
            "{} {} and {} are one away ({})",
            verdict(true),
            describe(first),
            describe(second),
            edit.to_string().cyan()
        ),
        None => println!(
            "{} {} and {} are not one away",
            verdict(false),
            describe(first),
            describe(second)
        ),
    }
    Ok(())
}

/// Permutation command
fn cmd_permutation(
    first: Option<&str>,
    second: Option<&str>,
    strategy: PermutationStrategy,
    json: bool,
) -> Result<()> {
    let result = permutation::is_permutation(first, second, strategy);

    if json {
        return print_json(&json!({
            "check": "permutation",
            "first": first,
            "second": second,
            "strategy": strategy,
            "result": result,
        }));
    }

    println!(
        "{} {} and {} {} permutations (strategy: {})",
        verdict(result),
        describe(first),
        describe(second),
        if result { "are" } else { "are not" },
        strategy.name().yellow()
    );
    Ok(())
}

/// Rotation command
fn cmd_rotation(first: Option<&str>, second: Option<&str>, json: bool) -> Result<()> {
    let offset = rotation::rotation_offset(first, second);

    if json {
        return print_json(&json!({
            "check": "rotation",
            "first": first,
            "second": second,
            "result": offset.is_some(),
            "offset": offset,
        }));
    }

    match offset {
        Some(offset) => println!(
            "{} {} is a rotation of {} (offset {})",
            verdict(true),
            describe(second),
            describe(first),
            offset.to_string().cyan()
        ),
        None => println!(
            "{} {} is not a rotation of {}",
            verdict(false),
            describe(second),
            describe(first)
        ),
    }
    Ok(())
}

/// Unique characters command
fn cmd_unique(input: Option<&str>, strategy: UniquenessStrategy, json: bool) -> Result<()> {
    let result = unique::all_unique(input, strategy);

    if json {
        return print_json(&json!({
            "check": "unique",
            "input": input,
            "strategy": strategy,
            "result": result,
        }));
    }

    println!(
        "{} {} {} all unique characters (strategy: {})",
        verdict(result),
        describe(input),
        if result { "has" } else { "does not have" },
        strategy.name().yellow()
    );
    Ok(())
}

/// Zero-matrix command
fn cmd_zero_matrix(inline: Option<String>, file: Option<PathBuf>, json: bool) -> Result<()> {
    let mut grid = match (inline, file) {
        (Some(text), _) => text
            .parse::<Matrix>()
            .with_context(|| format!("Failed to parse matrix: {:?}", text))?,
        (None, Some(path)) => load_matrix(&path)?,
        (None, None) => bail!("Provide a matrix with --matrix or --file"),
    };

    let scan = matrix::find_zeros(&grid);
    let input = grid.clone();
    matrix::transform(&mut grid);

    if json {
        return print_json(&json!({
            "check": "zero-matrix",
            "input": input,
            "output": grid,
            "zero_rows": scan.rows,
            "zero_cols": scan.cols,
        }));
    }

    let (rows, cols) = grid.dimensions();
    println!("{}", format!("Matrix {}x{}", rows, cols).bold().underline());
    if grid.is_empty() {
        println!("  {}", "(empty, nothing to do)".yellow());
        return Ok(());
    }
    if scan.is_empty() {
        println!("  {}", "No zeros found".yellow());
    } else {
        println!("  Zero rows:    {:?}", scan.rows);
        println!("  Zero columns: {:?}", scan.cols);
    }
    println!();
    for row in grid.iter_rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|&cell| {
                if cell == 0 {
                    cell.to_string().red().to_string()
                } else {
                    cell.to_string()
                }
            })
            .collect();
        println!("  {}", cells.join(" "));
    }
    Ok(())
}

/// Config command
fn cmd_config(action: ConfigAction, config_path: Option<&Path>, json: bool) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = PersistentConfig::load_from(config_path)?;
            if json {
                return print_json(&config);
            }
            println!("{}", "Settings".bold().underline());
            println!();
            println!(
                "  Permutation strategy: {}",
                config.permutation_strategy().name().green()
            );
            println!(
                "  Uniqueness strategy:  {}",
                config.uniqueness_strategy().name().green()
            );
            println!(
                "  JSON output:          {}",
                config.json_output().to_string().green()
            );
        }
        ConfigAction::Path => {
            let path = config_file_path(config_path)?;
            println!("{}", path.display());
        }
        ConfigAction::Reset => {
            let path = PersistentConfig::default().save_to(config_path)?;
            println!("{} Settings reset ({})", "✓".green(), path.display());
        }
        ConfigAction::Set {
            permutation_strategy,
            uniqueness_strategy,
            json_output,
        } => {
            if permutation_strategy.is_none()
                && uniqueness_strategy.is_none()
                && json_output.is_none()
            {
                bail!("Nothing to set. See `strgrid config set --help`.");
            }
            let config = PersistentConfig::load_from(config_path)?.merge_with_cli(
                permutation_strategy,
                uniqueness_strategy,
                json_output,
            );
            let path = config.save_to(config_path)?;
            println!("{} Settings saved ({})", "✓".green(), path.display());
        }
    }
    Ok(())
}

/// Load a matrix from a JSON file of integer rows
pub fn load_matrix(path: &Path) -> Result<Matrix> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read matrix file: {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse matrix file: {}", path.display()))
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn verdict(result: bool) -> colored::ColoredString {
    if result {
        "yes".green().bold()
    } else {
        "no".red().bold()
    }
}

fn describe(value: Option<&str>) -> String {
    match value {
        Some(value) => format!("{:?}", value),
        None => "<absent>".dimmed().to_string(),
    }
}
