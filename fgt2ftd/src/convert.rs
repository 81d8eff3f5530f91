//! The `fgt2ftd` conversion workflow.
//!
//! 1. **Guard**: the output path must not be the input file
//! 2. **Load**: parse the FortiGate YAML and the action table
//! 3. **Translate**: build the FTD object lists
//! 4. **Write**: serialize JSON, compact or indented
//! 5. **Report**: warnings to stderr, summary to stdout

use anyhow::{Context, Result};
use colored::Colorize;
use config_tree::{parse_file, write_file};
use fgt2ftd::action_map::{default_action_map, load_action_map};
use fgt2ftd::translate::translate;

use crate::cli::Cli;
use crate::conversion_summary::{render as render_conversion_summary, summarize};
use crate::path_guard::ensure_output_not_same;

/// Run one conversion.
///
/// # Errors
///
/// Returns error if:
/// - Output path resolves to the input file
/// - Input file is missing or is not valid YAML
/// - Input top level is not a mapping
/// - The `--action-map` file cannot be read or parsed
/// - Output file cannot be written
pub fn run_convert(args: Cli) -> Result<()> {
    ensure_output_not_same(&args.output, &args.input)?;

    let source = parse_file(&args.input)
        .with_context(|| format!("failed to parse {}", args.input.display()))?;

    let actions = match &args.action_map {
        Some(path) => load_action_map(path)?,
        None => default_action_map(),
    };

    let translation = translate(&source, &actions)
        .with_context(|| format!("failed to translate {}", args.input.display()))?;

    for warning in &translation.warnings {
        eprintln!("{} {warning}", "warning:".yellow());
    }

    write_file(&translation.config, &args.output, args.pretty)
        .with_context(|| format!("failed to write output JSON {}", args.output.display()))?;

    if !args.quiet {
        println!(
            "Successfully converted configuration to '{}'",
            args.output.display()
        );
        println!();
        println!("{}", render_conversion_summary(summarize(&translation)));
    }
    Ok(())
}
