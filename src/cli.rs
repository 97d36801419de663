//! Command-line front end.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use serde::Serialize;

use crate::io::{load_tasks, render, write_result, DEFAULT_DELIMITER};
use crate::models::{ScheduleResult, Timeline};
use crate::scheduler::{FlowShopScheduler, SchedulePlan};
use crate::sequencing::{rules, Sequencer};
use crate::simulation::ScheduleKpi;

/// Sequencing rule selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RuleKind {
    /// Shortest manufacture time first, longest assembly on ties
    #[default]
    ManufactureFirst,
    /// Johnson's two-machine rule
    Johnson,
}

impl RuleKind {
    /// Builds a sequencer for this rule.
    pub fn sequencer(self) -> Sequencer {
        match self {
            RuleKind::ManufactureFirst => Sequencer::new().with_rule(rules::ManufactureFirst),
            RuleKind::Johnson => Sequencer::new().with_rule(rules::Johnson),
        }
    }
}

/// Stdout format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// The three result lines, as written to the output file
    #[default]
    Text,
    /// Result, KPIs and per-task timeline as pretty-printed JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "u-flowshop")]
#[command(author, version, about = "Sequence manufacture/assemble tasks to minimize assembly idle time")]
pub struct Cli {
    /// Task records, one `id/manufacture/assemble` per line
    #[arg(long, short, env = "FLOWSHOP_INPUT", default_value = "input/InputPS1.txt")]
    pub input: PathBuf,

    /// Result file (overwritten on every run)
    #[arg(long, short, env = "FLOWSHOP_OUTPUT", default_value = "output/OutputPS1.txt")]
    pub output: PathBuf,

    /// Field delimiter in the input file
    #[arg(long, short, default_value_t = DEFAULT_DELIMITER)]
    pub delimiter: char,

    /// Sequencing rule
    #[arg(long, short, value_enum, default_value_t = RuleKind::ManufactureFirst)]
    pub rule: RuleKind,

    /// Stdout format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    rule: &'static str,
    result: &'a ScheduleResult,
    kpi: &'a ScheduleKpi,
    timeline: &'a Timeline,
}

/// Parses arguments, initialises logging, and runs.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    execute(&cli)
}

/// Initialises `env_logger`. `RUST_LOG` overrides the default level.
pub fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    // A logger may already be installed (e.g. when embedded).
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .try_init();
}

/// Loads, schedules, writes, and reports.
pub fn execute(cli: &Cli) -> Result<()> {
    let tasks = load_tasks(&cli.input, cli.delimiter)
        .with_context(|| format!("Failed to load tasks from {}", cli.input.display()))?;

    let scheduler = FlowShopScheduler::new().with_sequencer(cli.rule.sequencer());
    let plan = scheduler
        .schedule(&tasks)
        .context("Failed to schedule tasks")?;

    write_result(&cli.output, &plan.result)?;
    print_plan(&plan, scheduler.sequencer(), cli.format)?;

    info!(
        "Scheduled {} tasks, result written to {}",
        plan.result.task_count(),
        cli.output.display()
    );
    Ok(())
}

fn print_plan(plan: &SchedulePlan, sequencer: &Sequencer, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for line in render(&plan.result) {
                println!("{line}");
            }
        }
        OutputFormat::Json => {
            let report = Report {
                rule: sequencer.rule().name(),
                result: &plan.result,
                kpi: &plan.kpi,
                timeline: &plan.timeline,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        std::env::remove_var("FLOWSHOP_INPUT");
        std::env::remove_var("FLOWSHOP_OUTPUT");

        let cli = Cli::try_parse_from(["u-flowshop"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("input/InputPS1.txt"));
        assert_eq!(cli.output, PathBuf::from("output/OutputPS1.txt"));
        assert_eq!(cli.delimiter, '/');
        assert_eq!(cli.rule, RuleKind::ManufactureFirst);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "u-flowshop",
            "--input",
            "tasks.txt",
            "--rule",
            "johnson",
            "--delimiter",
            ",",
            "-f",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.input, PathBuf::from("tasks.txt"));
        assert_eq!(cli.rule, RuleKind::Johnson);
        assert_eq!(cli.delimiter, ',');
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_value_enums_have_help() {
        for format in OutputFormat::value_variants() {
            let value = format.to_possible_value().unwrap();
            assert!(value.get_help().is_some(), "{} has no help", value.get_name());
        }
        for rule in RuleKind::value_variants() {
            assert!(rule.to_possible_value().unwrap().get_help().is_some());
        }
    }

    #[test]
    fn test_rule_kind_sequencer() {
        assert_eq!(RuleKind::ManufactureFirst.sequencer().rule().name(), "MFT");
        assert_eq!(RuleKind::Johnson.sequencer().rule().name(), "JOHNSON");
    }
}
